//! Case timeline
//!
//! Tracks the chronological order of what happened during a case

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in the case timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub timestamp: DateTime<Utc>,
    pub event_type: TimelineEventType,
}

/// Types of timeline events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineEventType {
    RoomEntered { room: String },
    ClueCollected { room: String, clue: String },
    SuspectLinked { clue: String, suspect: String },
    DeadEnd { room: String },
    CaseClosed,
}

/// The complete timeline of one case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub events: Vec<TimelineEvent>,
    pub opened_at: DateTime<Utc>,
}

impl Timeline {
    pub fn new(opened_at: DateTime<Utc>) -> Self {
        Self {
            events: Vec::new(),
            opened_at,
        }
    }

    /// Append an event stamped with the current time
    pub fn record(&mut self, event_type: TimelineEventType) {
        self.record_at(Utc::now(), event_type);
    }

    pub fn record_at(&mut self, timestamp: DateTime<Utc>, event_type: TimelineEventType) {
        self.events.push(TimelineEvent {
            timestamp,
            event_type,
        });
    }

    /// Rooms in the order they were entered
    pub fn path(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match &e.event_type {
                TimelineEventType::RoomEntered { room } => Some(room.as_str()),
                _ => None,
            })
            .collect()
    }

    /// (room, clue) pairs in discovery order
    pub fn discoveries(&self) -> Vec<(&str, &str)> {
        self.events
            .iter()
            .filter_map(|e| match &e.event_type {
                TimelineEventType::ClueCollected { room, clue } => {
                    Some((room.as_str(), clue.as_str()))
                }
                _ => None,
            })
            .collect()
    }

    /// Time between opening the case and its latest event
    pub fn elapsed(&self) -> Duration {
        self.events
            .last()
            .map(|e| e.timestamp - self.opened_at)
            .unwrap_or_else(Duration::zero)
    }

    pub fn is_closed(&self) -> bool {
        self.events
            .iter()
            .any(|e| e.event_type == TimelineEventType::CaseClosed)
    }

    /// One-line summary for the end-of-case report
    pub fn summary(&self) -> String {
        let elapsed = self.elapsed();
        format!(
            "Timeline: {} rooms visited, {} clues found. Opened at {}, elapsed: {}m {}s",
            self.path().len(),
            self.discoveries().len(),
            self.opened_at.format("%H:%M:%S"),
            elapsed.num_minutes(),
            elapsed.num_seconds() % 60
        )
    }
}
