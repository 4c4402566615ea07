//! The mansion map
//!
//! A static binary tree of rooms. Every room owns its two optional
//! children, so the whole map is dropped with its root.

use super::Direction;
use serde::{Deserialize, Serialize};

/// A room of the mansion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    /// Clue lying in this room, if any
    pub clue: Option<String>,
    pub left: Option<Box<Room>>,
    pub right: Option<Box<Room>>,
}

impl Room {
    pub fn new(name: &str, clue: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            clue: clue.map(str::to_string),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// The child in `direction`, if there is a door that way
    pub fn descend(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    pub fn child_name(&self, direction: Direction) -> Option<&str> {
        self.descend(direction).map(|room| room.name.as_str())
    }

    /// No way out: neither child exists
    pub fn is_dead_end(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of rooms in this subtree, this one included
    pub fn room_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(room) = pending.pop() {
            count += 1;
            pending.extend(room.left.as_deref());
            pending.extend(room.right.as_deref());
        }
        count
    }

    /// Follow a sequence of directions, stopping at the first missing door
    pub fn walk(&self, path: &[Direction]) -> Option<&Room> {
        path.iter().try_fold(self, |room, &dir| room.descend(dir))
    }
}
