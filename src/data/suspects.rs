//! Suspects and the clues pointing at them
//!
//! A fixed-size hash table keyed by suspect name. Collisions chain into a
//! singly linked list per bucket, and a new suspect is pushed onto the head
//! of its chain. The table never resizes; that is fine for a handful of
//! suspects but would degrade to long chains on a large cast.

use serde::{Deserialize, Serialize};

/// Bucket count of the reference case
pub const DEFAULT_BUCKETS: usize = 7;

/// A suspect and the clues linked to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    pub name: String,
    /// Linked clues in the order they were recorded
    pub clues: Vec<String>,
}

impl Suspect {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            clues: Vec::new(),
        }
    }

    pub fn count(&self) -> usize {
        self.clues.len()
    }

    /// Link a clue unless it is already linked
    fn link(&mut self, clue: &str) -> bool {
        if self.clues.iter().any(|c| c == clue) {
            return false;
        }
        self.clues.push(clue.to_string());
        true
    }
}

#[derive(Debug)]
struct SuspectEntry {
    suspect: Suspect,
    next: Option<Box<SuspectEntry>>,
}

/// Walk of one bucket chain, head first
struct Chain<'a> {
    cursor: Option<&'a SuspectEntry>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Suspect;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.cursor?;
        self.cursor = entry.next.as_deref();
        Some(&entry.suspect)
    }
}

/// Bucket for `name`: distance of its first character from `'A'`, wrapped
/// to the bucket count. Empty names and characters below `'A'` land in
/// bucket 0.
pub fn bucket_index(name: &str, buckets: usize) -> usize {
    if buckets == 0 {
        return 0;
    }
    match name.chars().next() {
        Some(first) if first >= 'A' => (first as u32 - 'A' as u32) as usize % buckets,
        _ => 0,
    }
}

/// Hash table from suspect name to linked clues
#[derive(Debug)]
pub struct SuspectIndex {
    buckets: Vec<Option<Box<SuspectEntry>>>,
    len: usize,
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// A table with `buckets` chains (at least one)
    pub fn with_buckets(buckets: usize) -> Self {
        let mut table = Vec::with_capacity(buckets.max(1));
        table.resize_with(buckets.max(1), || None);
        Self {
            buckets: table,
            len: 0,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of distinct suspects in the table
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn hash(&self, name: &str) -> usize {
        bucket_index(name, self.buckets.len())
    }

    fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            cursor: self.buckets.get(bucket).and_then(|head| head.as_deref()),
        }
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Suspect> {
        let bucket = self.hash(name);
        let mut cursor = self.buckets.get_mut(bucket)?.as_deref_mut();
        while let Some(entry) = cursor {
            if entry.suspect.name == name {
                return Some(&mut entry.suspect);
            }
            cursor = entry.next.as_deref_mut();
        }
        None
    }

    pub fn get(&self, name: &str) -> Option<&Suspect> {
        self.chain(self.hash(name)).find(|s| s.name == name)
    }

    /// Link `clue` to `suspect`, creating the suspect on first sight.
    /// Returns `true` if the suspect's count went up.
    pub fn record(&mut self, clue: &str, suspect: &str) -> bool {
        if self.get(suspect).is_none() {
            let bucket = self.hash(suspect);
            let next = self.buckets[bucket].take();
            self.buckets[bucket] = Some(Box::new(SuspectEntry {
                suspect: Suspect::new(suspect),
                next,
            }));
            self.len += 1;
        }
        match self.find_mut(suspect) {
            Some(entry) => entry.link(clue),
            None => false,
        }
    }

    /// Every suspect in table order: bucket ascending, then chain order
    pub fn iter(&self) -> impl Iterator<Item = &Suspect> + '_ {
        (0..self.buckets.len()).flat_map(move |bucket| self.chain(bucket))
    }

    /// Suspects that have at least one clue, in table order
    pub fn all_suspects_with_clues(&self) -> Vec<&Suspect> {
        self.iter().filter(|s| s.count() > 0).collect()
    }

    /// The suspect with the strictly highest count. On a tie the one met
    /// first in table order keeps the lead.
    pub fn most_associated(&self) -> Option<&Suspect> {
        let mut best: Option<&Suspect> = None;
        for suspect in self.iter() {
            let leading = best.map_or(0, Suspect::count);
            if suspect.count() > leading {
                best = Some(suspect);
            }
        }
        best
    }
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SuspectIndex {
    fn drop(&mut self) {
        for head in &mut self.buckets {
            let mut cursor = head.take();
            while let Some(mut entry) = cursor {
                cursor = entry.next.take();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEADS: [(&str, &str); 7] = [
        ("Livro com páginas arrancadas", "Professor"),
        ("Faca desaparecida", "Chef"),
        ("Copo quebrado", "Mordomo"),
        ("Carta rasgada", "Herdeiro"),
        ("Espelho quebrado", "Herdeiro"),
        ("Baú trancado", "Herdeiro"),
        ("Corda manchada", "Mordomo"),
    ];

    fn full_index() -> SuspectIndex {
        let mut index = SuspectIndex::new();
        for (clue, suspect) in LEADS {
            index.record(clue, suspect);
        }
        index
    }

    #[test]
    fn hash_uses_first_letter() {
        assert_eq!(bucket_index("Herdeiro", 7), 0);
        assert_eq!(bucket_index("Professor", 7), 1);
        assert_eq!(bucket_index("Chef", 7), 2);
        assert_eq!(bucket_index("Mordomo", 7), 5);
    }

    #[test]
    fn hash_falls_back_to_first_bucket() {
        assert_eq!(bucket_index("", 7), 0);
        assert_eq!(bucket_index("1st footman", 7), 0);
        assert_eq!(bucket_index(" Mordomo", 7), 0);
        assert!(bucket_index("Élodie", 7) < 7);
        assert!(bucket_index("zelador", 7) < 7);
        assert_eq!(bucket_index("Anyone", 0), 0);

        let mut index = SuspectIndex::with_buckets(3);
        assert_eq!(index.bucket_count(), 3);
        index.record("Pegada de lama", "");
        index.record("Bilhete", "1st footman");
        let listed: Vec<_> = index.chain(0).map(|s| s.name.as_str()).collect();
        assert_eq!(listed, vec!["1st footman", ""]);
    }

    #[test]
    fn record_is_idempotent() {
        let mut index = SuspectIndex::new();
        assert!(index.record("Copo quebrado", "Mordomo"));
        assert!(!index.record("Copo quebrado", "Mordomo"));
        assert_eq!(index.get("Mordomo").unwrap().count(), 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn clues_keep_recording_order() {
        let index = full_index();
        let heir = index.get("Herdeiro").unwrap();
        assert_eq!(
            heir.clues,
            vec!["Carta rasgada", "Espelho quebrado", "Baú trancado"]
        );
    }

    #[test]
    fn heir_is_the_unique_maximum() {
        let index = full_index();
        let top = index.most_associated().unwrap();
        assert_eq!(top.name, "Herdeiro");
        assert_eq!(top.count(), 3);
        let others_at_three = index
            .iter()
            .filter(|s| s.count() == 3 && s.name != "Herdeiro")
            .count();
        assert_eq!(others_at_three, 0);
    }

    #[test]
    fn listing_follows_bucket_then_chain_order() {
        let index = full_index();
        let names: Vec<_> = index
            .all_suspects_with_clues()
            .into_iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Herdeiro", "Professor", "Chef", "Mordomo"]);
    }

    #[test]
    fn colliding_names_chain_newest_first() {
        let mut index = SuspectIndex::new();
        index.record("Copo quebrado", "Mordomo");
        index.record("Faca desaparecida", "Motorista");
        assert_eq!(bucket_index("Motorista", 7), bucket_index("Mordomo", 7));
        let names: Vec<_> = index.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Motorista", "Mordomo"]);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn ties_go_to_the_first_suspect_in_table_order() {
        let mut index = SuspectIndex::new();
        index.record("Copo quebrado", "Mordomo");
        index.record("Faca desaparecida", "Chef");
        // Chef sits in bucket 2, Mordomo in bucket 5
        assert_eq!(index.most_associated().unwrap().name, "Chef");

        let mut chained = SuspectIndex::new();
        chained.record("Copo quebrado", "Mordomo");
        chained.record("Faca desaparecida", "Motorista");
        // same bucket: the newer head is met first
        assert_eq!(chained.most_associated().unwrap().name, "Motorista");
    }

    #[test]
    fn empty_index_has_no_verdict() {
        let index = SuspectIndex::new();
        assert!(index.most_associated().is_none());
        assert!(index.all_suspects_with_clues().is_empty());
        assert!(index.is_empty());
    }
}
