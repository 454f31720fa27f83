//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let game = factory::create_game(&db).await?;
//! let source = factory::create_game_source(&db, game.id, "internal-feed").await?;
//!
//! // Game subscribed by a channel destination
//! let (game, destination) = factory::helpers::create_subscribed_game(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let game = factory::game::GameFactory::new(&db)
//!     .name("Nova")
//!     .release_date(Some(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()))
//!     .build()
//!     .await?;
//! ```

pub mod destination;
pub mod game;
pub mod game_source;
pub mod game_subscription;
pub mod helpers;

pub use destination::create_destination;
pub use game::create_game;
pub use game_source::create_game_source;
pub use game_subscription::create_subscription;
