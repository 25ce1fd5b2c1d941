//! Paths of the search.
//!
//! Frontier entries do not own their paths. Every push records the
//! configuration together with the index of the entry it was produced from,
//! and the path is restored from these links once the goal is reached.

use std::fmt::{Debug, Display};

use serde::Serialize;

use crate::puzzle::{moves::Move, state::Configuration};

////////////////////////////////////////////////////////////////////////////////

/// Index of the entry in the [`Trail`].
pub(crate) type EntryId = usize;

struct Entry {
    state: Configuration,
    parent: Option<EntryId>,
    depth: usize,
}

/// Arena of all entries pushed to the frontier during one search.
#[derive(Default)]
pub(crate) struct Trail {
    entries: Vec<Entry>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, state: Configuration) -> EntryId {
        self.push(Entry {
            state,
            parent: None,
            depth: 0,
        })
    }

    pub fn extend(&mut self, parent: EntryId, state: Configuration) -> EntryId {
        let depth = self.entries[parent].depth + 1;
        self.push(Entry {
            state,
            parent: Some(parent),
            depth,
        })
    }

    fn push(&mut self, entry: Entry) -> EntryId {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    pub fn state(&self, id: EntryId) -> &Configuration {
        &self.entries[id].state
    }

    pub fn depth(&self, id: EntryId) -> usize {
        self.entries[id].depth
    }

    pub fn path(&self, id: EntryId) -> Path {
        let mut states = Vec::with_capacity(self.depth(id) + 1);
        let mut cur = Some(id);
        while let Some(i) = cur {
            states.push(self.entries[i].state.clone());
            cur = self.entries[i].parent;
        }
        states.reverse();
        Path { states }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Chain of configurations from the start to the goal, both inclusive.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    states: Vec<Configuration>,
}

impl Path {
    /// Number of configurations in the path.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of moves in the path.
    pub fn moves(&self) -> usize {
        self.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&Configuration> {
        self.states.first()
    }

    pub fn end(&self) -> Option<&Configuration> {
        self.states.last()
    }

    pub fn states(&self) -> &[Configuration] {
        &self.states
    }

    pub fn iter(&self) -> impl Iterator<Item = &Configuration> {
        self.states.iter()
    }

    /// Configurations together with the moves which produced them.
    /// The start has no move.
    pub fn labeled(&self) -> impl Iterator<Item = (&Configuration, Option<Move>)> {
        let moves = std::iter::once(None).chain(
            self.states
                .windows(2)
                .map(|w| Move::between(&w[0], &w[1])),
        );
        self.states.iter().zip(moves)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, state) in self.states.iter().enumerate() {
            writeln!(f, "Step {}: {}", i, state)?;
        }
        Ok(())
    }
}

impl Debug for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.states.iter()).finish()
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use crate::puzzle::{moves::Move, state::Configuration};

    use super::Trail;

    fn state(s: &str) -> Configuration {
        s.parse().unwrap()
    }

    #[test]
    fn branches_share_prefix() {
        let mut trail = Trail::new();
        let root = trail.root(state("EE_WW"));
        let a = trail.extend(root, state("E_EWW"));
        let b = trail.extend(root, state("EEW_W"));
        let a1 = trail.extend(a, state("EWE_W"));

        assert_eq!(trail.depth(root), 0);
        assert_eq!(trail.depth(a1), 2);
        assert_eq!(trail.state(b), &state("EEW_W"));

        let path = trail.path(a1);
        assert_eq!(path.len(), 3);
        assert_eq!(path.moves(), 2);
        assert_eq!(path.start(), Some(&state("EE_WW")));
        assert_eq!(path.end(), Some(&state("EWE_W")));
        assert_eq!(trail.path(b).states(), &[state("EE_WW"), state("EEW_W")]);
        assert_eq!(trail.path(root).len(), 1);
    }

    #[test]
    fn labeled_and_display() {
        let mut trail = Trail::new();
        let root = trail.root(state("EW_"));
        let id = trail.extend(root, state("_WE"));
        let path = trail.path(id);

        let labels: Vec<Option<Move>> = path.labeled().map(|(_, m)| m).collect();
        assert_eq!(labels, vec![None, Some(Move::JumpRight)]);
        assert_eq!(path.to_string(), "Step 0: EW_\nStep 1: _WE\n");
        assert_eq!(format!("{:?}", path), "[\"EW_\", \"_WE\"]");
        assert_eq!(serde_json::to_string(&path).unwrap(), "[\"EW_\",\"_WE\"]");
    }
}
