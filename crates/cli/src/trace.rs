use dchull::{Hull, MergeEvent, MergeObserver};

/// Logs every merge step through `tracing` (stand-in for an animated viewer).
#[derive(Debug, Default)]
pub struct TracingObserver {
    pub merges: usize,
    pub trivial: usize,
}

impl MergeObserver for TracingObserver {
    fn before_merge(&mut self, left: &Hull, right: &Hull, depth: usize) {
        tracing::trace!(depth, left = left.len(), right = right.len(), "merge_start");
    }

    fn after_merge(&mut self, event: &MergeEvent<'_>) {
        self.merges += 1;
        match event.tangents {
            Some(t) => tracing::debug!(
                depth = event.depth,
                left = event.left.len(),
                right = event.right.len(),
                upper = ?(t.upper.left, t.upper.right),
                lower = ?(t.lower.left, t.lower.right),
                merged = event.merged.len(),
                "merge"
            ),
            None => {
                self.trivial += 1;
                tracing::trace!(depth = event.depth, "merge_points");
            }
        }
    }
}
