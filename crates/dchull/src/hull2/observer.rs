//! Optional merge hooks for visualization or logging.
//!
//! The driver calls `before_merge` with the two child hulls and `after_merge`
//! once they are stitched. Observers only read; the computed hull is identical
//! with or without one attached.

use super::types::{Hull, Tangents};

/// One completed merge step.
#[derive(Clone, Copy, Debug)]
pub struct MergeEvent<'a> {
    pub left: &'a Hull,
    pub right: &'a Hull,
    /// `None` for the trivial merge of two single points.
    pub tangents: Option<Tangents>,
    pub merged: &'a Hull,
    /// Recursion depth of the merge (0 = final merge).
    pub depth: usize,
}

/// Callback injection points fired around each merge.
pub trait MergeObserver {
    fn before_merge(&mut self, _left: &Hull, _right: &Hull, _depth: usize) {}
    fn after_merge(&mut self, _event: &MergeEvent<'_>) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl MergeObserver for NoopObserver {}

/// Owned copy of a `MergeEvent`.
#[derive(Clone, Debug, PartialEq)]
pub struct MergeRecord {
    pub left: Hull,
    pub right: Hull,
    pub tangents: Option<Tangents>,
    pub merged: Hull,
    pub depth: usize,
}

/// Observer that keeps every merge in completion order, e.g. for replaying
/// the recursion in a viewer.
#[derive(Clone, Debug, Default)]
pub struct MergeRecorder {
    pub records: Vec<MergeRecord>,
}

impl MergeObserver for MergeRecorder {
    fn after_merge(&mut self, event: &MergeEvent<'_>) {
        self.records.push(MergeRecord {
            left: event.left.clone(),
            right: event.right.clone(),
            tangents: event.tangents,
            merged: event.merged.clone(),
            depth: event.depth,
        });
    }
}
