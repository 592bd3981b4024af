//! ## About
//!
//! This crate contains a lazily evaluated traversal engine for graph-like data structures.
//! Any structure whose elements can report their neighbors (see [Explorable]) can be
//! traversed from a start element. The traversal yields the reachable elements one by one,
//! remembers for each element which element discovered it and at which depth, and can stop
//! as soon as a designated end element has been reached.
//!
//! The order of a traversal is defined by a [Strategy]. The crate ships with [BreadthFirst],
//! which emits elements in non-decreasing distance from the start; the depth of an element is
//! then the length of a shortest path.
//!
//! ```
//! use std::collections::HashMap;
//! use traverse::BreadthFirstTraversal;
//!
//! let graph = HashMap::from([(1, vec![2, 3]), (2, vec![4]), (3, vec![4]), (4, vec![])]);
//! let mut traversal = BreadthFirstTraversal::with_end(&graph, 1, 4).unwrap();
//!
//! let order: Vec<_> = traversal.by_ref().collect();
//! assert_eq!(order, [1, 2, 3, 4]);
//! assert_eq!(traversal.depth(&4), Ok(2));
//! assert_eq!(traversal.path_to(&4), Ok(vec![1, 2, 4]));
//! ```
//!
//! ## Naming conventions
//! * Traits – adjectives that indicate capability and behavior (exception: [Strategy])
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories, which
//!             are substantives (i.e., omit a `get_` prefix) much like the standard library.
//!             Callback methods have a `on_` prefix

pub mod breadth;
pub mod errors;
pub mod explorable;
pub mod seen;
pub mod strategy;
pub mod traversal;

pub use breadth::{BreadthFirst, BreadthFirstTraversal};
pub use errors::TraversalError;
pub use explorable::{Enumerable, Explorable};
pub use seen::{SeenRecord, SeenRegistry};
pub use strategy::Strategy;
pub use traversal::{Continuation, Traversal, TraversalBuilder};
