//! Cross-component tests.
//!
//! These drive a fully wired [`crate::SpellEngine`] (standard catalog and
//! cost rules, fixed clock) through authoring workflows that span several
//! use cases, and check the properties that must hold between them.
//!
//! ```bash
//! cargo test -p spellforge-engine --lib e2e_tests
//! ```

mod authoring_scenarios;
mod document_properties;
mod projection_tests;
