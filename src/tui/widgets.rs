//! Text building blocks for the console

use crate::data::Suspect;

/// `=== TITLE ===` section header
pub fn section(title: &str) -> String {
    format!("=== {} ===", title)
}

/// One `- item` line per entry, indented by `indent` spaces
pub fn bullets<I, S>(items: I, indent: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("{:indent$}- {}", "", item.as_ref(), indent = indent))
        .collect()
}

/// Rooms joined with arrows
pub fn path_line(rooms: &[String]) -> String {
    rooms.join(" → ")
}

/// Headline for a suspect's entry in the association listing
pub fn suspect_heading(suspect: &Suspect) -> String {
    format!("🔍 Suspect: {} ({} clue(s))", suspect.name, suspect.count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_are_indented() {
        assert_eq!(bullets(["a", "b"], 2), vec!["  - a", "  - b"]);
        assert_eq!(bullets(Vec::<String>::new(), 2), Vec::<String>::new());
    }

    #[test]
    fn suspect_heading_shows_count() {
        let mut suspect = Suspect::new("Chef");
        suspect.clues.push("Faca desaparecida".to_string());
        assert_eq!(suspect_heading(&suspect), "🔍 Suspect: Chef (1 clue(s))");
    }

    #[test]
    fn path_joins_with_arrows() {
        let rooms = vec!["Hall".to_string(), "Biblioteca".to_string()];
        assert_eq!(path_line(&rooms), "Hall → Biblioteca");
    }
}
