pub use super::destination::Entity as Destination;
pub use super::game::Entity as Game;
pub use super::game_source::Entity as GameSource;
pub use super::game_subscription::Entity as GameSubscription;
pub use super::release_announcement::Entity as ReleaseAnnouncement;
