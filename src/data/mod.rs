//! Database repository layer.
//!
//! Repositories borrow a `DatabaseConnection`, use SeaORM entity models internally, and
//! return domain models converted at this boundary. Together they implement the game
//! registry, the update marker store, and the milestone ledger the scheduler relies on.

pub mod destination;
pub mod game;
pub mod game_source;
pub mod release_announcement;

#[cfg(test)]
mod test;
