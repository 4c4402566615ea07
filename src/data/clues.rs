//! Collected clues
//!
//! An unbalanced binary search tree of clue texts ordered byte-wise.
//! Insertion, lookup, listing and teardown are all iterative, so an
//! unlucky insertion order only costs depth, never stack.

use std::cmp::Ordering;

#[derive(Debug)]
struct ClueNode {
    text: String,
    left: Option<Box<ClueNode>>,
    right: Option<Box<ClueNode>>,
}

impl ClueNode {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            left: None,
            right: None,
        }
    }
}

/// The set of clues discovered so far
#[derive(Debug, Default)]
pub struct ClueSet {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue. Returns `false` if it was already known.
    pub fn insert(&mut self, text: &str) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match text.cmp(node.text.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(ClueNode::new(text)));
        self.len += 1;
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match text.cmp(node.text.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Clues in ascending order. Each call starts a fresh walk.
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree, 0 when empty
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&ClueNode, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(node.left.as_deref().map(|n| (n, level + 1)));
            pending.extend(node.right.as_deref().map(|n| (n, level + 1)));
        }
        deepest
    }
}

impl Drop for ClueSet {
    fn drop(&mut self) {
        let mut pending: Vec<Box<ClueNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order walk over a [`ClueSet`]
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    fn push_left_spine(&mut self, mut cursor: Option<&'a ClueNode>) {
        while let Some(node) = cursor {
            self.stack.push(node);
            cursor = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLUES: [&str; 7] = [
        "Livro com páginas arrancadas",
        "Faca desaparecida",
        "Copo quebrado",
        "Carta rasgada",
        "Espelho quebrado",
        "Baú trancado",
        "Corda manchada",
    ];

    fn sorted() -> Vec<&'static str> {
        let mut v = CLUES.to_vec();
        v.sort();
        v
    }

    /// Every ordering of `items`, generated with Heap's algorithm
    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        let mut order = items.to_vec();
        let mut counters = vec![0; order.len()];
        let mut all = vec![order.clone()];
        let mut i = 0;
        while i < order.len() {
            if counters[i] < i {
                let swap_with = if i % 2 == 0 { 0 } else { counters[i] };
                order.swap(swap_with, i);
                all.push(order.clone());
                counters[i] += 1;
                i = 0;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }
        all
    }

    #[test]
    fn in_order_is_sorted_for_every_insertion_order() {
        let orders = permutations(&CLUES);
        assert_eq!(orders.len(), 5040);

        let expected = sorted();
        for order in orders {
            let mut set = ClueSet::new();
            for clue in &order {
                set.insert(clue);
            }
            for clue in &order {
                assert!(!set.insert(clue));
            }
            assert_eq!(set.len(), CLUES.len());
            assert_eq!(set.in_order().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut set = ClueSet::new();
        assert!(set.insert("Copo quebrado"));
        assert!(set.insert("Baú trancado"));
        assert!(!set.insert("Copo quebrado"));
        assert!(!set.insert("Baú trancado"));
        assert_eq!(set.len(), 2);
        assert_eq!(
            set.in_order().collect::<Vec<_>>(),
            vec!["Baú trancado", "Copo quebrado"]
        );
    }

    #[test]
    fn contains_survives_later_inserts() {
        let mut set = ClueSet::new();
        set.insert("Faca desaparecida");
        assert!(set.contains("Faca desaparecida"));
        for clue in CLUES {
            set.insert(clue);
            assert!(set.contains("Faca desaparecida"));
            assert!(set.contains(clue));
        }
        assert!(!set.contains("Pegada de lama"));
    }

    #[test]
    fn listing_is_restartable() {
        let mut set = ClueSet::new();
        for clue in CLUES {
            set.insert(clue);
        }
        let first: Vec<_> = set.in_order().collect();
        let second: Vec<_> = (&set).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn sorted_insertion_degenerates_without_overflowing() {
        let mut set = ClueSet::new();
        for i in 0..10_000 {
            set.insert(&format!("clue {:06}", i));
        }
        assert_eq!(set.depth(), 10_000);
        assert_eq!(set.in_order().next(), Some("clue 000000"));
        assert!(set.contains("clue 009999"));
    }

    #[test]
    fn empty_set_lists_nothing() {
        let set = ClueSet::new();
        assert!(set.is_empty());
        assert_eq!(set.depth(), 0);
        assert_eq!(set.in_order().count(), 0);
    }
}
