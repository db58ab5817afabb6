//! Engine configuration.

use crate::error::StickyError;
use serde::Deserialize;

/// Slack absorbing sub-pixel jitter between a region’s measured top edge and the bottom of the
/// pinned stack.
pub const DEFAULT_TOLERANCE: f64 = 1.;

/// Number of items the engine is expected to handle in practice.
///
/// Registering more is allowed but logged.
pub const SOFT_ITEM_LIMIT: usize = 3;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Threshold tolerance, in points.
    pub tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl EngineConfig {
    /// Returns an error if the tolerance is negative or not finite.
    pub fn validate(&self) -> Result<(), StickyError> {
        if self.tolerance.is_finite() && self.tolerance >= 0. {
            Ok(())
        } else {
            Err(StickyError::InvalidTolerance(self.tolerance))
        }
    }
}
