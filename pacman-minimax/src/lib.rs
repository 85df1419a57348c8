#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements adversarial tree search (minimax, alpha-beta and expectimax) for turn
//! based games with one maximizing agent and any number of adversaries. You provide a 'scoring'
//! function that turns a given game state into an `f64`, and a game that implements
//! [AdversarialGame].
//!
//! The game is only ever asked for the legal actions of an agent and for the successor state
//! after an action, so any turn-cyclic game can be searched. The `pacman-rs` crate in this
//! workspace uses it for Pacman vs Ghosts.

pub mod game;
pub use game::{AdversarialGame, AgentIndex, IllegalAction};

pub mod multi_agent;

#[cfg(test)]
mod test_games;
