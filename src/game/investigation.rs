//! Investigation commands and what they produce
//!
//! Player input is parsed into a [`Command`]; the engine answers each step
//! with a list of [`CaseEvent`]s for the console to render.

use crate::data::{Difficulty, Direction, Suspect};
use serde::{Deserialize, Serialize};

/// One player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Go(Direction),
    ShowClues,
    ShowAssociations,
    ShowVerdict,
    Quit,
}

impl Command {
    /// Parse a single-letter command, ignoring case and surrounding
    /// whitespace. Anything longer than one letter is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match key.to_ascii_lowercase() {
            'e' => Some(Command::Go(Direction::Left)),
            'd' => Some(Command::Go(Direction::Right)),
            'p' => Some(Command::ShowClues),
            'a' => Some(Command::ShowAssociations),
            'c' => Some(Command::ShowVerdict),
            's' => Some(Command::Quit),
            _ => None,
        }
    }

    /// Whether this command is wired at the given tier
    pub fn available_in(&self, difficulty: Difficulty) -> bool {
        match self {
            Command::Go(_) | Command::Quit => true,
            Command::ShowClues => difficulty.collects_clues(),
            Command::ShowAssociations | Command::ShowVerdict => difficulty.links_suspects(),
        }
    }

    pub fn key(&self) -> char {
        match self {
            Command::Go(direction) => direction.key(),
            Command::ShowClues => 'p',
            Command::ShowAssociations => 'a',
            Command::ShowVerdict => 'c',
            Command::Quit => 's',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Go(Direction::Left) => "Go left",
            Command::Go(Direction::Right) => "Go right",
            Command::ShowClues => "Show collected clues",
            Command::ShowAssociations => "Show clue-suspect associations",
            Command::ShowVerdict => "Show most likely suspect",
            Command::Quit => "Leave the exploration",
        }
    }

    /// Non-movement commands offered at a tier, in menu order
    pub fn extras(difficulty: Difficulty) -> Vec<Command> {
        [
            Command::Quit,
            Command::ShowClues,
            Command::ShowAssociations,
            Command::ShowVerdict,
        ]
        .into_iter()
        .filter(|c| c.available_in(difficulty))
        .collect()
    }
}

/// Why a case ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Closure {
    /// Walked into a room with no way out
    DeadEnd,
    /// The player left
    Quit,
}

/// Something the player should be told about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseEvent {
    Entered { room: String },
    ClueFound { clue: String },
    NoPath(Direction),
    DeadEnd { room: String },
    Left,
    ClueListing(Vec<String>),
    Associations(Vec<Suspect>),
    Verdict(Option<Suspect>),
    InvalidCommand(String),
    AlreadyClosed,
}
