//! Core game logic and state management

pub mod investigation;
pub mod scenario;

pub use investigation::{CaseEvent, Closure, Command};
pub use scenario::{CaseFile, ClueLeads};

use crate::data::*;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the case stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseState {
    AtRoom,
    Finished(Closure),
}

/// End-of-case summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    pub case_id: Id,
    pub title: String,
    pub difficulty: Difficulty,
    pub opened_at: DateTime<Utc>,
    pub elapsed_seconds: i64,
    pub closure: Option<Closure>,
    pub path: Vec<String>,
    /// (room, clue) in discovery order
    pub discoveries: Vec<(String, String)>,
    /// Clues in alphabetical order
    pub clues: Vec<String>,
    pub suspects: Vec<Suspect>,
    pub verdict: Option<Suspect>,
}

/// Drives one walk through the mansion.
///
/// The engine borrows the case file for the whole session; the room tree
/// stays owned by the file and the engine only holds a cursor into it.
pub struct CaseEngine<'c> {
    id: Id,
    case: &'c CaseFile,
    difficulty: Difficulty,
    current: &'c Room,
    state: CaseState,
    clues: ClueSet,
    suspects: SuspectIndex,
    timeline: Timeline,
}

impl<'c> CaseEngine<'c> {
    /// Open a case standing in the mansion's first room. Call
    /// [`CaseEngine::begin`] to announce it.
    pub fn new(case: &'c CaseFile, difficulty: Difficulty) -> Self {
        let id = Id::new();
        info!(case_id = %id, %difficulty, title = %case.title, "case opened");
        Self {
            id,
            case,
            difficulty,
            current: &case.mansion,
            state: CaseState::AtRoom,
            clues: ClueSet::new(),
            suspects: SuspectIndex::new(),
            timeline: Timeline::new(Utc::now()),
        }
    }

    /// Enter the first room
    pub fn begin(&mut self) -> Vec<CaseEvent> {
        let first = self.current;
        self.enter(first)
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> CaseState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, CaseState::Finished(_))
    }

    pub fn current_room(&self) -> &'c Room {
        self.current
    }

    pub fn clues(&self) -> &ClueSet {
        &self.clues
    }

    pub fn suspects(&self) -> &SuspectIndex {
        &self.suspects
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Commands the player may type right now
    pub fn available_commands(&self) -> Vec<Command> {
        if self.is_finished() {
            return Vec::new();
        }
        let mut commands: Vec<Command> = [Direction::Left, Direction::Right]
            .into_iter()
            .filter(|&dir| self.current.descend(dir).is_some())
            .map(Command::Go)
            .collect();
        commands.extend(Command::extras(self.difficulty));
        commands
    }

    /// Handle one line of player input
    pub fn step_input(&mut self, input: &str) -> Vec<CaseEvent> {
        match Command::parse(input) {
            Some(command) => self.step(command),
            None => {
                debug!(input, "unrecognised command");
                self.invalid(input)
            }
        }
    }

    /// Apply one command to the state machine
    pub fn step(&mut self, command: Command) -> Vec<CaseEvent> {
        if self.is_finished() {
            return vec![CaseEvent::AlreadyClosed];
        }
        if !command.available_in(self.difficulty) {
            debug!(?command, difficulty = %self.difficulty, "command not wired at this tier");
            return self.invalid(&command.key().to_string());
        }

        match command {
            Command::Go(direction) => match self.current.descend(direction) {
                Some(next) => self.enter(next),
                None => vec![CaseEvent::NoPath(direction)],
            },
            Command::ShowClues => vec![CaseEvent::ClueListing(
                self.clues.in_order().map(str::to_string).collect(),
            )],
            Command::ShowAssociations => vec![CaseEvent::Associations(
                self.suspects
                    .all_suspects_with_clues()
                    .into_iter()
                    .cloned()
                    .collect(),
            )],
            Command::ShowVerdict => {
                vec![CaseEvent::Verdict(self.suspects.most_associated().cloned())]
            }
            Command::Quit => {
                self.close(Closure::Quit);
                vec![CaseEvent::Left]
            }
        }
    }

    fn invalid(&self, input: &str) -> Vec<CaseEvent> {
        if self.is_finished() {
            return vec![CaseEvent::AlreadyClosed];
        }
        vec![CaseEvent::InvalidCommand(input.trim().to_string())]
    }

    fn enter(&mut self, room: &'c Room) -> Vec<CaseEvent> {
        self.current = room;
        debug!(room = %room.name, "entered room");
        self.timeline.record(TimelineEventType::RoomEntered {
            room: room.name.clone(),
        });

        let mut events = vec![CaseEvent::Entered {
            room: room.name.clone(),
        }];

        if let Some(clue) = &room.clue {
            if self.collect(&room.name, clue) {
                events.push(CaseEvent::ClueFound { clue: clue.clone() });
            }
        }

        if room.is_dead_end() {
            self.timeline.record(TimelineEventType::DeadEnd {
                room: room.name.clone(),
            });
            self.close(Closure::DeadEnd);
            events.push(CaseEvent::DeadEnd {
                room: room.name.clone(),
            });
        }

        events
    }

    /// File a newly seen clue. Returns `false` when clues are not tracked
    /// at this tier or the clue is already known.
    fn collect(&mut self, room: &str, clue: &str) -> bool {
        if !self.difficulty.collects_clues() || self.clues.contains(clue) {
            return false;
        }
        self.clues.insert(clue);
        info!(room, clue, "clue collected");
        self.timeline.record(TimelineEventType::ClueCollected {
            room: room.to_string(),
            clue: clue.to_string(),
        });

        if self.difficulty.links_suspects() {
            if let Some(suspect) = self.case.leads.suspect_for(clue) {
                self.suspects.record(clue, suspect);
                debug!(clue, suspect, "suspect linked");
                self.timeline.record(TimelineEventType::SuspectLinked {
                    clue: clue.to_string(),
                    suspect: suspect.to_string(),
                });
            }
        }
        true
    }

    fn close(&mut self, closure: Closure) {
        self.state = CaseState::Finished(closure);
        self.timeline.record(TimelineEventType::CaseClosed);
        info!(case_id = %self.id, ?closure, clues = self.clues.len(), "case closed");
    }

    /// Summarise the case as it stands
    pub fn report(&self) -> CaseReport {
        let closure = match self.state {
            CaseState::Finished(closure) => Some(closure),
            CaseState::AtRoom => None,
        };
        CaseReport {
            case_id: self.id,
            title: self.case.title.clone(),
            difficulty: self.difficulty,
            opened_at: self.timeline.opened_at,
            elapsed_seconds: self.timeline.elapsed().num_seconds(),
            closure,
            path: self.timeline.path().into_iter().map(str::to_string).collect(),
            discoveries: self
                .timeline
                .discoveries()
                .into_iter()
                .map(|(room, clue)| (room.to_string(), clue.to_string()))
                .collect(),
            clues: self.clues.in_order().map(str::to_string).collect(),
            suspects: self
                .suspects
                .all_suspects_with_clues()
                .into_iter()
                .cloned()
                .collect(),
            verdict: self.suspects.most_associated().cloned(),
        }
    }
}
