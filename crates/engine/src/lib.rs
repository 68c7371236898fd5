//! Spellforge Engine library.
//!
//! Validation, serialization, templating, prose rendering and game-code
//! compilation for spell configurations.
//!
//! ## Structure
//!
//! - `use_cases/` - One use case per operation, injected with its dependencies
//! - `infrastructure/` - Ports and their implementations, settings, logging
//! - `app` - Engine composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Shared spell builders for unit and scenario tests.
#[cfg(test)]
pub(crate) mod test_fixtures;

/// Cross-component scenario tests.
#[cfg(test)]
mod e2e_tests;

pub use app::{SpellEngine, UseCases};
pub use infrastructure::settings::EngineSettings;
