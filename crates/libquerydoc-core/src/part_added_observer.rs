use crate::DocumentPartId;
use crate::DocumentPartType;

/// Reported once for every part the assembly walk adds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartAddedEvent {
    pub part: DocumentPartId,
    pub parent: DocumentPartId,
    pub part_type: DocumentPartType,

    /// Distance from the document root: `1` for operations and named
    /// fragments, and one more for each level below them.
    pub depth: usize,
}

impl PartAddedEvent {
    /// The depth of this event as seen from an ancestor at `ancestor_depth`,
    /// or `None` if the ancestor would sit at or below the new part.
    pub fn depth_below(&self, ancestor_depth: usize) -> Option<usize> {
        self.depth.checked_sub(ancestor_depth).filter(|depth| *depth > 0)
    }
}

/// Receives a [`PartAddedEvent`] for each part added to a document, in the
/// order the parts are added (pre-order, source order).
///
/// `()` ignores every event; a `Vec<PartAddedEvent>` collects them.
pub trait PartAddedObserver {
    fn part_added(&mut self, event: &PartAddedEvent);
}

impl PartAddedObserver for () {
    fn part_added(&mut self, _event: &PartAddedEvent) {}
}

impl PartAddedObserver for Vec<PartAddedEvent> {
    fn part_added(&mut self, event: &PartAddedEvent) {
        self.push(event.clone());
    }
}
