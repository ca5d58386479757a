use showcase_types::{BoundaryPhase, UiOptions};

/// Title prefixes that tell the two frame states apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub healthy: &'static str,
    pub failed: &'static str,
}

impl Markers {
    pub const UNICODE: Self = Self {
        healthy: "✓",
        failed: "✗",
    };

    pub const ASCII: Self = Self {
        healthy: "OK",
        failed: "ERR",
    };

    #[must_use]
    pub const fn for_options(options: UiOptions) -> Self {
        if options.ascii_only {
            Self::ASCII
        } else {
            Self::UNICODE
        }
    }

    #[must_use]
    pub const fn for_phase(&self, phase: BoundaryPhase) -> &'static str {
        match phase {
            BoundaryPhase::Healthy => self.healthy,
            BoundaryPhase::Failed => self.failed,
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::UNICODE
    }
}
