//! Data structures for the game world
//!
//! Defines rooms, clues, suspects and the case timeline.

pub mod clues;
pub mod room;
pub mod suspects;
pub mod timeline;

pub use clues::*;
pub use room::*;
pub use suspects::*;
pub use timeline::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty tiers, each wiring one more data structure into the case
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Map only: walk the room tree
    Novice,
    /// Collect clues into the clue set
    Adventurer,
    /// Link clues to suspects
    Master,
}

impl Difficulty {
    /// Map a main menu number to a tier
    pub fn from_menu(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Difficulty::Novice),
            2 => Some(Difficulty::Adventurer),
            3 => Some(Difficulty::Master),
            _ => None,
        }
    }

    pub fn menu_number(&self) -> u8 {
        match self {
            Difficulty::Novice => 1,
            Difficulty::Adventurer => 2,
            Difficulty::Master => 3,
        }
    }

    pub fn collects_clues(&self) -> bool {
        *self >= Difficulty::Adventurer
    }

    pub fn links_suspects(&self) -> bool {
        *self == Difficulty::Master
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Difficulty::Novice => "🌱",
            Difficulty::Adventurer => "🔍",
            Difficulty::Master => "🧠",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Novice => write!(f, "NOVICE"),
            Difficulty::Adventurer => write!(f, "ADVENTURER"),
            Difficulty::Master => write!(f, "MASTER"),
        }
    }
}

/// Which way to leave a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Key the player presses for this direction
    pub fn key(&self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// A unique identifier wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub Uuid);

impl Id {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
