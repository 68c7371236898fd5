//! Rule-system seams.
//!
//! The validator, renderer and compiler never compute costs themselves; they
//! ask a [`ResourceCalculator`], so alternate rule sets (or a mock) can be
//! swapped in.

use crate::entities::SpellConfig;

use super::resources::ResourceCosts;

/// Computes what casting a spell costs.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ResourceCalculator: Send + Sync {
    /// Action points, mana, cooldown and optional class resource for `config`.
    ///
    /// Must not fail: incomplete documents still get a best-effort estimate.
    fn calculate(&self, config: &SpellConfig) -> ResourceCosts;
}
