//! The traversal engine: a lazy iterator over the elements reachable from a start element.
//!
//! The engine does the bookkeeping shared by all strategies: it registers elements in the
//! [SeenRegistry] when they are *discovered* (not when they are emitted, so that no element
//! enters the frontier twice), hands them to the [Strategy], and stops when the frontier is
//! exhausted or the end element has been emitted. Optionally, it continues with further
//! connected components of an [Enumerable] structure.

use crate::{BreadthFirst, Enumerable, Explorable, SeenRecord, SeenRegistry, Strategy, TraversalError};
use std::fmt;
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// What to do when the connected component of the start element is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Continuation {
    /// Stop at the end of the start element's component
    #[default]
    StartComponent,
    /// Continue with the next undiscovered element of the structure
    AllComponents,
}

/// Lazily traverses an [Explorable] in the order defined by the strategy `S`.
///
/// Elements are produced by [Traversal::next_element] or the [Iterator] implementation.
/// Metadata ([Traversal::depth], [Traversal::predecessor], [Traversal::path_to]) is available
/// for elements that have been emitted already.
pub struct Traversal<'a, X, S = BreadthFirst<<X as Explorable>::Element>>
where
    X: Explorable,
{
    explorable: &'a X,
    strategy: S,
    seen: SeenRegistry<X::Element>,
    start: X::Element,
    end: Option<X::Element>,
    /// Candidates for entering further components. `None` unless [Continuation::AllComponents]
    components: Option<Box<dyn Iterator<Item = X::Element> + 'a>>,
    /// Set once the end element has been emitted
    finished: bool,
}

impl<'a, X, S> Traversal<'a, X, S>
where
    X: Explorable,
    S: Strategy<X::Element>,
{
    /// Traverses the connected component of `start`
    pub fn new(explorable: &'a X, start: X::Element) -> Result<Self, TraversalError<X::Element>> {
        TraversalBuilder::new(explorable, start).build()
    }

    /// Traverses the connected component of `start` and stops right after `end` has been emitted
    pub fn with_end(
        explorable: &'a X,
        start: X::Element,
        end: X::Element,
    ) -> Result<Self, TraversalError<X::Element>> {
        TraversalBuilder::new(explorable, start).end(end).build()
    }

    /// Configure a traversal with further options
    pub fn builder(explorable: &'a X, start: X::Element) -> TraversalBuilder<'a, X, S> {
        TraversalBuilder::new(explorable, start)
    }

    fn discover(&mut self, element: X::Element, from: Option<&X::Element>) {
        let from_record = from.and_then(|from| self.seen.record(from));
        let record = SeenRecord::new(from.cloned(), self.strategy.discovery_depth(from_record));
        trace!(?element, depth = record.depth, "Discovered");
        if self.seen.discover(element.clone(), record) {
            self.strategy.push_discovered(element);
        }
    }

    /// Refills an exhausted frontier from the next undiscovered element if continuation
    /// is enabled. Returns whether the frontier holds an element afterwards.
    fn ensure_frontier(&mut self) -> bool {
        if !self.strategy.is_exhausted() {
            return true;
        }
        let Some(candidates) = self.components.as_mut() else {
            return false;
        };
        let seen = &self.seen;
        match candidates.find(|candidate| !seen.is_seen(candidate)) {
            Some(element) => {
                debug!(?element, "Entering new connected component");
                self.discover(element, None);
                true
            }
            None => {
                self.components = None;
                false
            }
        }
    }

    /// `true` if a call to [Traversal::next_element] will succeed
    pub fn has_next(&mut self) -> bool {
        !self.finished && self.ensure_frontier()
    }

    /// Emits the next element. Newly discovered neighbors of the element are registered and
    /// added to the frontier. Fails with [TraversalError::Exhausted] if [Traversal::has_next]
    /// is `false`, in which case the traversal is left unchanged.
    pub fn next_element(&mut self) -> Result<X::Element, TraversalError<X::Element>> {
        if !self.has_next() {
            return Err(TraversalError::Exhausted);
        }
        let current = self.strategy.pop_next().ok_or(TraversalError::Exhausted)?;

        let explorable = self.explorable;
        for neighbor in explorable.neighbors(&current) {
            if self.seen.is_seen(&neighbor) {
                self.strategy.on_rediscovery(&neighbor, &current);
            } else {
                self.discover(neighbor, Some(&current));
            }
        }

        trace!(element = ?current, "Emitting");
        self.seen.mark_emitted(current.clone());
        if self.end.as_ref() == Some(&current) {
            debug!(end = ?current, "End element reached");
            self.finished = true;
        }
        Ok(current)
    }

    /// Distance of an emitted element from the start of its component, as defined by the
    /// strategy. Elements that have not been emitted have no depth.
    pub fn depth(&self, element: &X::Element) -> Result<usize, TraversalError<X::Element>> {
        Ok(self.seen.emitted_record(element)?.depth)
    }

    /// The element that discovered an emitted element, `None` for the start of a component
    pub fn predecessor(&self, element: &X::Element) -> Result<Option<&X::Element>, TraversalError<X::Element>> {
        Ok(self.seen.emitted_record(element)?.predecessor.as_ref())
    }

    /// Path from the start of the component to an emitted element (both inclusive)
    pub fn path_to(&self, element: &X::Element) -> Result<Vec<X::Element>, TraversalError<X::Element>> {
        self.seen.path_to(element)
    }

    /// Record of a discovered element, which might not have been emitted yet
    pub fn seen_record(&self, element: &X::Element) -> Option<&SeenRecord<X::Element>> {
        self.seen.record(element)
    }

    pub fn is_emitted(&self, element: &X::Element) -> bool {
        self.seen.is_emitted(element)
    }

    pub fn emitted_count(&self) -> usize {
        self.seen.emitted_count()
    }

    pub fn start(&self) -> &X::Element {
        &self.start
    }

    pub fn end(&self) -> Option<&X::Element> {
        self.end.as_ref()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<X, S> Iterator for Traversal<'_, X, S>
where
    X: Explorable,
    S: Strategy<X::Element>,
{
    type Item = X::Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element().ok()
    }
}

impl<X, S> fmt::Debug for Traversal<'_, X, S>
where
    X: Explorable,
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("strategy", &self.strategy)
            .field("seen", &self.seen)
            .field("start", &self.start)
            .field("end", &self.end)
            .field("continues", &self.components.is_some())
            .field("finished", &self.finished)
            .finish()
    }
}

/// Options for constructing a [Traversal]
pub struct TraversalBuilder<'a, X, S = BreadthFirst<<X as Explorable>::Element>>
where
    X: Explorable,
{
    explorable: &'a X,
    start: X::Element,
    end: Option<X::Element>,
    components: Option<Box<dyn Iterator<Item = X::Element> + 'a>>,
    strategy: S,
}

impl<'a, X, S> TraversalBuilder<'a, X, S>
where
    X: Explorable,
    S: Strategy<X::Element>,
{
    pub fn new(explorable: &'a X, start: X::Element) -> Self {
        TraversalBuilder {
            explorable,
            start,
            end: None,
            components: None,
            strategy: S::default(),
        }
    }

    /// Stop the traversal right after `end` has been emitted
    pub fn end(mut self, end: X::Element) -> Self {
        self.end = Some(end);
        self
    }

    /// Use a preconfigured strategy instead of its default
    pub fn strategy(mut self, strategy: S) -> Self {
        self.strategy = strategy;
        self
    }

    #[instrument(level = "debug", skip(self), fields(start = ?self.start, end = ?self.end))]
    pub fn build(self) -> Result<Traversal<'a, X, S>, TraversalError<X::Element>> {
        let TraversalBuilder {
            explorable,
            start,
            end,
            components,
            strategy,
        } = self;

        if !explorable.contains(&start) {
            return Err(TraversalError::UnknownElement(start));
        }
        if let Some(end) = end.as_ref().filter(|end| !explorable.contains(end)) {
            return Err(TraversalError::UnknownElement(end.clone()));
        }

        let mut traversal = Traversal {
            explorable,
            strategy,
            seen: SeenRegistry::new(),
            start: start.clone(),
            end,
            components,
            finished: false,
        };
        traversal.discover(start, None);
        debug!("Created traversal");
        Ok(traversal)
    }
}

impl<'a, X, S> TraversalBuilder<'a, X, S>
where
    X: Enumerable,
    S: Strategy<X::Element>,
{
    /// Once a connected component is exhausted, continue with the next element of
    /// [Enumerable::elements] that has not been discovered yet
    pub fn across_components(self) -> Self {
        self.continuation(Continuation::AllComponents)
    }

    pub fn continuation(mut self, continuation: Continuation) -> Self {
        let explorable = self.explorable;
        self.components = match continuation {
            Continuation::StartComponent => None,
            Continuation::AllComponents => Some(Box::new(explorable.elements())),
        };
        self
    }
}
