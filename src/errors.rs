//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type of a traversal. Generic over the element type such that
/// offending elements can be reported back to the caller.
///
/// All variants describe a misuse of the traversal by the caller. None of them
/// are transient and a failed call never modifies the traversal's state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TraversalError<Element> {
    /// Start or end element is not part of the explorable structure
    #[error("Element not in explorable structure: {0:?}")]
    UnknownElement(Element),
    /// `next` was requested although no element remains
    #[error("No element left to visit")]
    Exhausted,
    /// Metadata was queried for an element that has not been emitted (yet)
    #[error("Element has not been visited: {0:?}")]
    NotEmitted(Element),
}
