//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary with
//! `from_entity`, so SeaORM types never leak into the scheduler or notifier.

pub mod destination;
pub mod game;
pub mod news;
pub mod release;
