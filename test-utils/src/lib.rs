//! Shared test harness for the gamewatch crate.
//!
//! Each test gets its own in-memory SQLite database carrying the game registry schema.
//! Rows are inserted through the `factory` module, which fills in defaults so a test only
//! spells out the columns it actually asserts on.
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_game_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//!
//! let game = factory::game::GameFactory::new(db).name("Nova").build().await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
