//! Bookkeeping of the elements a traversal has encountered.

use crate::TraversalError;
use itertools::Itertools;
use std::{
    collections::{hash_map::Entry, HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

/// Data recorded for an element when it is discovered for the first time.
/// Never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRecord<Element> {
    /// The element whose neighbor query discovered this one. `None` for the
    /// start element of a (connected component of a) traversal
    pub predecessor: Option<Element>,
    /// Number of edges on the path along the predecessors
    pub depth: usize,
}

impl<Element> SeenRecord<Element> {
    pub fn new(predecessor: Option<Element>, depth: usize) -> Self {
        SeenRecord { predecessor, depth }
    }

    /// Record for the start of a traversal (or of a component)
    pub fn start() -> Self {
        Self::new(None, 0)
    }

    pub fn is_start(&self) -> bool {
        self.predecessor.is_none()
    }
}

/// Maps elements to their [SeenRecord] and remembers which elements have been emitted.
/// Owned by exactly one traversal.
#[derive(Debug)]
pub struct SeenRegistry<Element> {
    records: HashMap<Element, SeenRecord<Element>>,
    emitted: HashSet<Element>,
}

impl<Element> SeenRegistry<Element>
where
    Element: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        SeenRegistry {
            records: HashMap::new(),
            emitted: HashSet::new(),
        }
    }

    /// Registers a newly discovered element. The first discovery wins: if the element
    /// is already known, its record is kept and `false` is returned.
    pub fn discover(&mut self, element: Element, record: SeenRecord<Element>) -> bool {
        match self.records.entry(element) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(record);
                true
            }
        }
    }

    pub fn is_seen(&self, element: &Element) -> bool {
        self.records.contains_key(element)
    }

    pub fn record(&self, element: &Element) -> Option<&SeenRecord<Element>> {
        self.records.get(element)
    }

    /// Marks a discovered element as handed out to the caller
    pub fn mark_emitted(&mut self, element: Element) {
        debug_assert!(self.is_seen(&element), "Emitting undiscovered element {element:?}");
        self.emitted.insert(element);
    }

    pub fn is_emitted(&self, element: &Element) -> bool {
        self.emitted.contains(element)
    }

    pub fn emitted_count(&self) -> usize {
        self.emitted.len()
    }

    pub fn seen_count(&self) -> usize {
        self.records.len()
    }

    /// Record of an element that has been emitted already. Any other element is an error.
    pub fn emitted_record(&self, element: &Element) -> Result<&SeenRecord<Element>, TraversalError<Element>> {
        self.records
            .get(element)
            .filter(|_| self.is_emitted(element))
            .ok_or_else(|| TraversalError::NotEmitted(element.clone()))
    }

    /// Follows the predecessors from an emitted element back to the start of its component.
    /// Returns the path in traversal order, i.e., starting with the start element.
    pub fn path_to(&self, element: &Element) -> Result<Vec<Element>, TraversalError<Element>> {
        let mut record = self.emitted_record(element)?;
        let mut path = Vec::with_capacity(record.depth + 1);
        path.push(element.clone());
        // Predecessors are emitted before the elements they discover, so they must be known
        while let Some(predecessor) = &record.predecessor {
            path.push(predecessor.clone());
            record = self
                .records
                .get(predecessor)
                .expect("Internal error. Predecessor without record!");
        }
        Ok(path.into_iter().rev().collect_vec())
    }
}

impl<Element> Default for SeenRegistry<Element>
where
    Element: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
