//! Registration flow used by the command layer.
//!
//! Services validate input, call the repositories, and trigger the engine's on-demand
//! hooks so edited games are checked without waiting for the next tick.

pub mod destination;
pub mod game;

#[cfg(test)]
mod test;
