//! SeaORM entity models for the game watch database.

pub mod prelude;

pub mod destination;
pub mod game;
pub mod game_source;
pub mod game_subscription;
pub mod release_announcement;
