//! Outbound ports the engine depends on.
//!
//! Cost rules are a domain seam ([`spellforge_domain::ResourceCalculator`]);
//! only time is an engine-level port.

use chrono::{DateTime, Utc};

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
