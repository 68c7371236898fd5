//! Shared vocabulary types: the reference catalog and validation reports.
//!
//! Pure data, no I/O. Both the validator and every projection (prose,
//! templates, game code) read these.

mod catalog;
pub use catalog::{
    CatalogEntry, CatalogError, CatalogItem, EffectTypeEntry, ReferenceCatalog,
    StatusEffectEntry, UtilitySubtype, UtilityTypeEntry,
};

mod validation;
pub use validation::{Diagnostic, Severity, ValidationPhase, ValidationResult};
