//! Breadth-first traversal: elements are emitted in non-decreasing distance (number of edges)
//! from the start.
//!
//! All elements at depth *d* are enqueued before the first element at depth *d + 1* is
//! dequeued. Since an element keeps the record of its first discovery, its depth is the
//! length of a shortest path from the start.

use super::{Strategy, Traversal};
use std::collections::VecDeque;

/// First-in-first-out frontier
#[derive(Debug)]
pub struct BreadthFirst<Element> {
    queue: VecDeque<Element>,
}

impl<Element> BreadthFirst<Element> {
    pub fn new() -> Self {
        BreadthFirst { queue: VecDeque::new() }
    }

    /// Number of elements waiting to be emitted
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<Element> Default for BreadthFirst<Element> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Element> Strategy<Element> for BreadthFirst<Element> {
    fn pop_next(&mut self) -> Option<Element> {
        self.queue.pop_front()
    }

    fn push_discovered(&mut self, element: Element) {
        self.queue.push_back(element);
    }

    fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    // Depth policy (parent + 1) and the no-op rediscovery are the trait's defaults.
    // Overwriting records on rediscovery would break the shortest path property.
}

/// A [Traversal] in breadth-first order
pub type BreadthFirstTraversal<'a, X> = Traversal<'a, X, BreadthFirst<<X as crate::Explorable>::Element>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Explorable, SeenRecord};
    use itertools::Itertools;
    use std::collections::HashMap;

    #[test]
    fn test_fifo() {
        let mut frontier = BreadthFirst::new();
        assert!(frontier.is_exhausted());
        (1..=3).for_each(|i| frontier.push_discovered(i));
        assert_eq!(frontier.len(), 3);
        assert_eq!(std::iter::from_fn(|| frontier.pop_next()).collect_vec(), &[1, 2, 3]);
        assert!(frontier.is_exhausted());
    }

    #[test]
    fn test_discovery_depth() {
        let frontier = BreadthFirst::<u8>::new();
        assert_eq!(frontier.discovery_depth(None), 0);
        assert_eq!(frontier.discovery_depth(Some(&SeenRecord::new(Some(1), 3))), 4);
    }

    #[test_log::test]
    fn test_shortcut_wins() {
        // Layout
        //  0 - 1 - 2 - 3
        //   \         /
        //    ----4----
        let graph: HashMap<u8, Vec<u8>> = HashMap::from([
            (0, vec![1, 4]),
            (1, vec![0, 2]),
            (2, vec![1, 3]),
            (3, vec![2, 4]),
            (4, vec![0, 3]),
        ]);
        assert!(graph.contains(&4));

        let mut traversal = BreadthFirstTraversal::new(&graph, 0).unwrap();
        let order = traversal.by_ref().collect_vec();

        assert_eq!(order, &[0, 1, 4, 2, 3]);
        assert_eq!(traversal.depth(&3), Ok(2));
        assert_eq!(traversal.predecessor(&3), Ok(Some(&4)));
        assert_eq!(traversal.path_to(&3).unwrap(), &[0, 4, 3]);
        assert_eq!(traversal.depth(&2), Ok(2));
    }
}
