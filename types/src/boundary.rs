//! Lifecycle state of a single isolation boundary.

use crate::failure::RenderFailure;

/// Coarse phase of a boundary, for counting and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryPhase {
    Healthy,
    Failed,
}

/// State owned by exactly one boundary instance.
///
/// `Healthy` is the initial state and `Failed` is terminal: there is no
/// operation that moves a failed state back. Recovery means dropping the
/// boundary and constructing a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Healthy,
    Failed {
        message: Option<String>,
    },
}

impl BoundaryState {
    #[must_use]
    pub const fn has_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Healthy => None,
            Self::Failed { message } => message.as_deref(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> BoundaryPhase {
        match self {
            Self::Healthy => BoundaryPhase::Healthy,
            Self::Failed { .. } => BoundaryPhase::Failed,
        }
    }

    /// Records `failure` if still healthy.
    ///
    /// Returns `false` when the state had already failed; the first captured
    /// message is kept.
    pub fn record_failure(&mut self, failure: RenderFailure) -> bool {
        if self.has_failed() {
            return false;
        }
        *self = Self::Failed {
            message: failure.into_message(),
        };
        true
    }
}
