//! Terminal user interface
//!
//! Line-oriented console for the mansion game, styled with crossterm

pub mod app;
pub mod widgets;

pub use app::{App, ConsoleOptions, ReportFormat};

use crossterm::style::{style, Color, Stylize};

/// Color scheme for the game
#[derive(Debug, Clone)]
pub struct Theme {
    /// Emit ANSI styling at all
    pub enabled: bool,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub header: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enabled: true,
            accent: Color::Cyan,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::Yellow,
            header: Color::Magenta,
            muted: Color::DarkGrey,
        }
    }
}

impl Theme {
    /// Plain output, for pipes and tests
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str, color: Color) -> String {
        if self.enabled {
            style(text).with(color).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Title banner for the main menu
pub const LOGO: &str = r#"
╔═══════════════════════════════════════════════════════════╗
║              🕵️  DETECTIVE QUEST - MANSION  🕵️              ║
╚═══════════════════════════════════════════════════════════╝
"#;

pub const GOODBYE: &str = "Thanks for playing Detective Quest!";
