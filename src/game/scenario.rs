//! Case definitions
//!
//! A case file bundles the mansion map with the table that says which
//! suspect each clue points to. It is built fresh for every session and
//! handed to the engine by reference.

use crate::data::Room;
use serde::{Deserialize, Serialize};

/// Which suspect a clue incriminates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueLead {
    pub clue: String,
    pub suspect: String,
}

/// Static clue → suspect table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueLeads {
    leads: Vec<ClueLead>,
}

impl ClueLeads {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            leads: pairs
                .iter()
                .map(|(clue, suspect)| ClueLead {
                    clue: clue.to_string(),
                    suspect: suspect.to_string(),
                })
                .collect(),
        }
    }

    pub fn suspect_for(&self, clue: &str) -> Option<&str> {
        self.leads
            .iter()
            .find(|lead| lead.clue == clue)
            .map(|lead| lead.suspect.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClueLead> {
        self.leads.iter()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }
}

/// Everything the engine needs to run one case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub title: String,
    pub synopsis: String,
    pub mansion: Room,
    pub leads: ClueLeads,
}

/// The hand-wired mansion: the hall opens onto a library wing and a
/// living room wing that runs one floor deeper.
pub fn build_mansion() -> Room {
    let library = Room::new("Biblioteca", Some("Livro com páginas arrancadas"))
        .with_left(Room::new("Cozinha", Some("Faca desaparecida")))
        .with_right(Room::new("Sótão", Some("Baú trancado")));

    let bathroom = Room::new("Banheiro", Some("Espelho quebrado"))
        .with_left(Room::new("Porão", Some("Corda manchada")));

    let living_room = Room::new("Sala de Estar", Some("Copo quebrado"))
        .with_left(Room::new("Quarto Principal", Some("Carta rasgada")))
        .with_right(bathroom);

    Room::new("Hall de Entrada", None)
        .with_left(library)
        .with_right(living_room)
}

pub fn mansion_leads() -> ClueLeads {
    ClueLeads::new(&[
        ("Livro com páginas arrancadas", "Professor"),
        ("Faca desaparecida", "Chef"),
        ("Copo quebrado", "Mordomo"),
        ("Carta rasgada", "Herdeiro"),
        ("Espelho quebrado", "Herdeiro"),
        ("Baú trancado", "Herdeiro"),
        ("Corda manchada", "Mordomo"),
    ])
}

/// Create the mansion mystery case
pub fn mansion_case() -> CaseFile {
    CaseFile {
        title: "Mystery at the Mansion".to_string(),
        synopsis: "Something happened in the mansion last night. Walk its rooms, \
                   gather what was left behind and name the most likely culprit."
            .to_string(),
        mansion: build_mansion(),
        leads: mansion_leads(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Direction::{Left, Right};

    #[test]
    fn mansion_has_eight_rooms() {
        assert_eq!(build_mansion().room_count(), 8);
    }

    #[test]
    fn two_lefts_reach_the_kitchen() {
        let hall = build_mansion();
        assert_eq!(hall.walk(&[Left, Left]).unwrap().name, "Cozinha");
    }

    #[test]
    fn two_rights_reach_the_bathroom() {
        let hall = build_mansion();
        let bathroom = hall.walk(&[Right, Right]).unwrap();
        assert_eq!(bathroom.name, "Banheiro");
        assert!(bathroom.descend(Right).is_none());
        assert_eq!(bathroom.child_name(Left), Some("Porão"));
    }

    #[test]
    fn every_room_clue_has_a_lead() {
        let case = mansion_case();
        let mut pending = vec![&case.mansion];
        let mut clues = 0;
        while let Some(room) = pending.pop() {
            if let Some(clue) = &room.clue {
                clues += 1;
                assert!(case.leads.suspect_for(clue).is_some(), "no lead for {clue}");
            }
            pending.extend(room.left.as_deref());
            pending.extend(room.right.as_deref());
        }
        assert_eq!(clues, case.leads.len());
        assert!(case.mansion.clue.is_none());
    }

    #[test]
    fn unknown_clue_has_no_suspect() {
        assert_eq!(mansion_leads().suspect_for("Pegada de lama"), None);
    }
}
