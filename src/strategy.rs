//! Interface of a traversal strategy.
//!
//! A strategy owns the *frontier*, i.e., the elements that have been discovered but not
//! yet emitted. Its discipline (first-in-first-out, last-in-first-out, priority ...)
//! determines the order of a traversal. The strategy also decides which depth a newly
//! discovered element receives and how to react when an element is encountered again.

use crate::SeenRecord;

/// Frontier discipline and discovery policy of a [crate::Traversal].
pub trait Strategy<Element>: Default {
    /// Removes the element that is to be emitted next. Only called if the
    /// frontier is not exhausted.
    fn pop_next(&mut self) -> Option<Element>;

    /// Adds a newly discovered element to the frontier
    fn push_discovered(&mut self, element: Element);

    /// `true` if the frontier is empty, that is, the current connected component has been
    /// traversed completely.
    fn is_exhausted(&self) -> bool;

    /// Depth of an element discovered from an element with record `from`. `None` for the
    /// start of a component.
    fn discovery_depth(&self, from: Option<&SeenRecord<Element>>) -> usize {
        from.map_or(0, |record| record.depth + 1)
    }

    /// Callback when `element` is found again from `from`. Existing records are never
    /// overwritten; the default does nothing.
    fn on_rediscovery(&mut self, _element: &Element, _from: &Element) {}
}
