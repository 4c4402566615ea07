//! Detective Quest: a mystery in the mansion
//!
//! A text adventure where you walk a mansion room by room, pick up clues
//! and work out who did it.
//!
//! # Game Mechanics
//!
//! - **Novice**: walk the mansion map, a binary tree of rooms
//! - **Adventurer**: collect clues into an alphabetised search tree
//! - **Master**: link every clue to a suspect in a chained hash table
//!
//! # Architecture
//!
//! - `data` - Room tree, clue set, suspect index, case timeline
//! - `game` - Case engine state machine and the case file
//! - `tui` - Line-oriented console front end

pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::{CaseEngine, CaseEvent, CaseReport, CaseState, Command};

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Input stream closed")]
    InputClosed,

    #[error("Could not build case report: {0}")]
    Report(#[from] serde_json::Error),
}
