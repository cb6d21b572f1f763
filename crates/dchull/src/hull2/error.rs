/// Errors surfaced by the hull driver.
///
/// Geometric degeneracies (collinear runs, duplicates, vertical tangents) are
/// resolved inside the tangent search and never appear here.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HullError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl HullError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn empty() -> Self {
        Self::invalid("point set is empty")
    }
}
