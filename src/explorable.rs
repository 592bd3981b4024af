//! Definition of the interfaces a data structure has to provide in order to be traversed.
//!
//! The traversal only ever *reads* from an explorable structure. It asks for the
//! neighbors of an element and, at construction, whether an element belongs to
//! the structure at all.

use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// A data structure whose elements expose the elements directly reachable from them.
pub trait Explorable {
    /// Identity of a single node. Has to be usable as a key in a hash map.
    type Element: Clone + Eq + Hash + Debug;

    /// Iterator over the neighbors of an element
    type Neighbors<'a>: Iterator<Item = Self::Element> + 'a
    where
        Self: 'a;

    /// Elements directly reachable from `element`. The order of the returned
    /// neighbors is preserved into the discovery order of a traversal.
    fn neighbors(&self, element: &Self::Element) -> Self::Neighbors<'_>;

    /// Whether `element` is part of the structure's identity space. Checked when
    /// a traversal is constructed; the default accepts everything.
    fn contains(&self, _element: &Self::Element) -> bool {
        true
    }
}

/// An explorable structure that can list all of its elements.
///
/// Required for continuing a traversal into further connected components once
/// the component of the start element is exhausted.
pub trait Enumerable: Explorable {
    /// All elements of the structure. The order determines in which order
    /// further components are entered.
    fn elements(&self) -> impl Iterator<Item = Self::Element> + '_;
}

/// Adjacency lists: every key is an element, its value lists the neighbors.
/// Neighbors that are not keys themselves are treated as elements without
/// outgoing edges.
impl<E> Explorable for HashMap<E, Vec<E>>
where
    E: Clone + Eq + Hash + Debug,
{
    type Element = E;
    type Neighbors<'a>
        = std::iter::Cloned<std::slice::Iter<'a, E>>
    where
        Self: 'a;

    fn neighbors(&self, element: &E) -> Self::Neighbors<'_> {
        self.get(element).map(Vec::as_slice).unwrap_or_default().iter().cloned()
    }

    fn contains(&self, element: &E) -> bool {
        self.contains_key(element) || self.values().any(|neighbors| neighbors.contains(element))
    }
}

/// Note: hash maps have no stable order, hence the order in which components
/// are entered is unspecified.
impl<E> Enumerable for HashMap<E, Vec<E>>
where
    E: Clone + Eq + Hash + Debug,
{
    fn elements(&self) -> impl Iterator<Item = E> + '_ {
        self.keys().cloned()
    }
}
