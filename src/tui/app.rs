//! Main application loop and rendering

use crate::data::{Difficulty, Direction};
use crate::game::scenario::mansion_case;
use crate::game::{CaseEngine, CaseEvent, Command};
use crate::tui::widgets::{bullets, path_line, section, suspect_heading};
use crate::tui::{Theme, GOODBYE, LOGO};
use crate::{GameError, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// How the end-of-case summary is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Runtime settings for the console
#[derive(Debug, Clone, Default)]
pub struct ConsoleOptions {
    /// Play a single case at this tier instead of showing the menu
    pub mode: Option<Difficulty>,
    pub color: bool,
    pub report: ReportFormat,
}

/// Application state
pub struct App<R, W> {
    input: R,
    output: W,
    pub theme: Theme,
    pub options: ConsoleOptions,
    pub running: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        let theme = if options.color {
            Theme::default()
        } else {
            Theme::plain()
        };
        Self {
            input,
            output,
            theme,
            options,
            running: true,
        }
    }

    /// Run until the player quits or input runs out
    pub fn run(&mut self) -> Result<()> {
        let outcome = match self.options.mode {
            Some(difficulty) => self.play(difficulty),
            None => self.main_menu(),
        };
        self.running = false;

        match outcome {
            Err(err) if matches!(err.downcast_ref::<GameError>(), Some(GameError::InputClosed)) => {
                info!("input closed, leaving");
                writeln!(self.output)?;
                Ok(())
            }
            other => other,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read one line, without its terminator
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn main_menu(&mut self) -> Result<()> {
        while self.running {
            self.render_menu()?;
            let choice = self.ask("\nChoice: ")?;

            match choice.trim().parse::<u8>() {
                Ok(0) => {
                    let bye = self.theme.bold(GOODBYE, self.theme.success);
                    self.say(&format!("\n{}", bye))?;
                    self.running = false;
                    break;
                }
                Ok(n) => match Difficulty::from_menu(n) {
                    Some(difficulty) => self.play(difficulty)?,
                    None => self.invalid_menu_choice(&choice)?,
                },
                Err(_) => self.invalid_menu_choice(&choice)?,
            }

            self.ask("\nPress Enter to continue...")?;
        }
        Ok(())
    }

    fn invalid_menu_choice(&mut self, choice: &str) -> Result<()> {
        warn!(choice, "invalid menu choice");
        let msg = self.theme.paint("Invalid option! Try again.", self.theme.alert);
        self.say(&format!("\n{}", msg))
    }

    fn render_menu(&mut self) -> Result<()> {
        let logo = self.theme.paint(LOGO, self.theme.header);
        self.say(&logo)?;
        self.say("Choose a difficulty:")?;
        self.say("  [1] 🌱 Novice - Mansion map (binary tree)")?;
        self.say("  [2] 🔍 Adventurer - Clues (search tree)")?;
        self.say("  [3] 🧠 Master - Suspects (hash table)")?;
        self.say("  [0] Quit")
    }

    /// Play one case at `difficulty`. The case file and every structure
    /// built during the walk are dropped when this returns.
    pub fn play(&mut self, difficulty: Difficulty) -> Result<()> {
        let case = mansion_case();
        let mut engine = CaseEngine::new(&case, difficulty);
        let span = tracing::info_span!("case", id = %engine.id(), %difficulty);
        let _guard = span.enter();

        self.render_briefing(difficulty, &case.synopsis)?;
        let events = engine.begin();
        self.render_events(&events)?;

        while !engine.is_finished() {
            self.render_choices(&engine)?;
            let line = self.read_line()?;
            if line.trim().is_empty() {
                continue;
            }
            let events = engine.step_input(&line);
            self.render_events(&events)?;
        }

        debug!(clues = engine.clues().len(), "walk finished");
        self.render_summary(&engine)
    }

    fn render_briefing(&mut self, difficulty: Difficulty, synopsis: &str) -> Result<()> {
        let (title, lines) = match difficulty {
            Difficulty::Novice => (
                "NOVICE: MANSION MAP",
                vec!["Explore the mansion using 'e' (left), 'd' (right) or 's' (leave)"],
            ),
            Difficulty::Adventurer => (
                "ADVENTURER: CLUE HUNT",
                vec![
                    "Explore the mansion and collect clues!",
                    "Use 'p' to see the clues you collected.",
                ],
            ),
            Difficulty::Master => (
                "MASTER: FULL INVESTIGATION",
                vec![
                    "Explore the mansion, collect clues and find the culprit!",
                    "Use 'p' for clues, 'a' for associations and 'c' for the most likely suspect.",
                ],
            ),
        };
        let header = section(&format!("{} {}", difficulty.icon(), title));
        let header = self.theme.bold(&header, self.theme.header);
        self.say(&format!("\n{}", header))?;
        let synopsis = self.theme.paint(synopsis, self.theme.muted);
        self.say(&synopsis)?;
        for line in lines {
            self.say(line)?;
        }
        self.say("")
    }

    fn render_choices(&mut self, engine: &CaseEngine<'_>) -> Result<()> {
        let room = engine.current_room();
        self.say("Where do you want to go?")?;
        for command in engine.available_commands() {
            let line = match command {
                Command::Go(direction) => {
                    let target = room.child_name(direction).unwrap_or_default();
                    let label = match direction {
                        Direction::Left => "Left",
                        Direction::Right => "Right",
                    };
                    format!("  [{}] {} -> {}", command.key(), label, target)
                }
                other => format!("  [{}] {}", other.key(), other.description()),
            };
            self.say(&line)?;
        }
        write!(self.output, "Choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn render_events(&mut self, events: &[CaseEvent]) -> Result<()> {
        for event in events {
            match event {
                CaseEvent::Entered { room } => {
                    let header = section(&format!("You are in: {}", room));
                    let header = self.theme.bold(&header, self.theme.accent);
                    self.say(&format!("\n{}", header))?;
                }
                CaseEvent::ClueFound { clue } => {
                    let line = format!("🔍 CLUE FOUND: {}", clue);
                    let line = self.theme.paint(&line, self.theme.success);
                    self.say(&line)?;
                }
                CaseEvent::NoPath(direction) => {
                    let line = format!("There is no path to the {}!", direction);
                    let line = self.theme.paint(&line, self.theme.warning);
                    self.say(&line)?;
                }
                CaseEvent::DeadEnd { .. } => {
                    let line = "This room has no exit. You have reached the end of the path!";
                    let line = self.theme.paint(line, self.theme.warning);
                    self.say(&line)?;
                }
                CaseEvent::Left => self.say("You left the exploration.")?,
                CaseEvent::ClueListing(clues) => {
                    self.say(&format!("\n{}", section("COLLECTED CLUES (alphabetical)")))?;
                    self.render_clue_list(clues, "No clues collected yet.")?;
                }
                CaseEvent::Associations(suspects) => {
                    self.say(&format!("\n{}", section("CLUE → SUSPECT ASSOCIATIONS")))?;
                    if suspects.is_empty() {
                        self.say("No associations recorded yet.")?;
                    }
                    for suspect in suspects {
                        self.say(&format!("\n{}", suspect_heading(suspect)))?;
                        for line in bullets(&suspect.clues, 3) {
                            self.say(&line)?;
                        }
                    }
                }
                CaseEvent::Verdict(Some(suspect)) => {
                    let header = section("🎯 MOST LIKELY SUSPECT");
                    let header = self.theme.bold(&header, self.theme.alert);
                    self.say(&format!("\n{}", header))?;
                    self.say(&format!("Name: {}", suspect.name))?;
                    self.say(&format!("Linked clues: {}", suspect.count()))?;
                    self.say("Clues:")?;
                    for line in bullets(&suspect.clues, 2) {
                        self.say(&line)?;
                    }
                }
                CaseEvent::Verdict(None) => {
                    self.say("\nNo suspect with linked clues found.")?;
                }
                CaseEvent::InvalidCommand(_) => {
                    let line = self.theme.paint("Invalid option! Try again.", self.theme.alert);
                    self.say(&line)?;
                }
                CaseEvent::AlreadyClosed => self.say("This case is already closed.")?,
            }
        }
        Ok(())
    }

    fn render_clue_list(&mut self, clues: &[String], empty: &str) -> Result<()> {
        if clues.is_empty() {
            return self.say(empty);
        }
        for line in bullets(clues, 2) {
            self.say(&line)?;
        }
        Ok(())
    }

    fn render_summary(&mut self, engine: &CaseEngine<'_>) -> Result<()> {
        let report = engine.report();

        if self.options.report == ReportFormat::Json {
            let json = serde_json::to_string_pretty(&report).map_err(GameError::from)?;
            return self.say(&json);
        }

        let difficulty = engine.difficulty();
        if !difficulty.collects_clues() {
            return Ok(());
        }

        let title = if difficulty.links_suspects() {
            "FINAL ANALYSIS"
        } else {
            "FINAL SUMMARY"
        };
        let header = self.theme.bold(&section(title), self.theme.header);
        self.say(&format!("\n{}", header))?;
        self.say("Collected clues:")?;
        self.render_clue_list(&report.clues, "No clues collected.")?;

        if difficulty.links_suspects() {
            self.render_events(&[
                CaseEvent::Associations(report.suspects.clone()),
                CaseEvent::Verdict(report.verdict.clone()),
            ])?;
        }

        let muted = self.theme.muted;
        self.say(&format!("\n{}", self.theme.paint("--- Case timeline ---", muted)))?;
        self.say(&format!("Path: {}", path_line(&report.path)))?;
        for (room, clue) in &report.discoveries {
            self.say(&format!("  {}: {}", room, clue))?;
        }
        let summary = engine.timeline().summary();
        self.say(&self.theme.paint(&summary, muted))
    }
}
