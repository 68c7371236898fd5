//! Test fixtures loader for spell JSON files and common use-case builders.
//!
//! Spell fixtures live in the `test_data/spells/` directory of this crate.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{fireball, validator};
//!
//! #[test]
//! fn test_fireball_is_valid() {
//!     assert!(validator().execute(&fireball()).valid);
//! }
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use spellforge_domain::{ReferenceCatalog, SpellConfig, StandardResourceCalculator};

use crate::app::SpellEngine;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::settings::EngineSettings;
use crate::use_cases::{
    CompileSpell, InstantiateTemplate, MakeTemplate, RenderProse, SpellSerializer, ValidateSpell,
};

// =============================================================================
// Fixture Loading
// =============================================================================

/// Load a JSON fixture from the `test_data/` directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

// =============================================================================
// Spell Fixtures
// =============================================================================

/// Level 3 fire damage in a 20 ft sphere. Valid, no enhancements, no icon.
pub fn fireball() -> SpellConfig {
    load_fixture("spells/fireball.json")
}

/// Level 1 single-target direct heal (`1d4+2`). Valid, no shield.
pub fn healing_word() -> SpellConfig {
    load_fixture("spells/healing_word.json")
}

/// Timestamp every fixed clock reports.
pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

// =============================================================================
// Use Case Builders
// =============================================================================

fn catalog() -> Arc<ReferenceCatalog> {
    Arc::new(ReferenceCatalog::standard())
}

fn calculator(catalog: Arc<ReferenceCatalog>) -> Arc<StandardResourceCalculator> {
    Arc::new(StandardResourceCalculator::new(catalog))
}

pub fn validator_with(settings: EngineSettings) -> ValidateSpell {
    let catalog = catalog();
    ValidateSpell::new(catalog.clone(), calculator(catalog), settings)
}

/// Validator over the standard catalog and cost rules with every pass on.
pub fn validator() -> ValidateSpell {
    validator_with(EngineSettings::default())
}

pub fn serializer() -> SpellSerializer {
    SpellSerializer::new(Arc::new(validator()))
}

pub fn template_maker() -> MakeTemplate {
    MakeTemplate::new(catalog(), Arc::new(FixedClock(fixed_time())))
}

pub fn instantiator() -> InstantiateTemplate {
    InstantiateTemplate::new(Arc::new(validator()))
}

pub fn prose_renderer() -> RenderProse {
    let catalog = catalog();
    RenderProse::new(
        catalog.clone(),
        calculator(catalog),
        EngineSettings::default(),
    )
}

pub fn compiler() -> CompileSpell {
    CompileSpell::new(
        calculator(catalog()),
        Arc::new(FixedClock(fixed_time())),
        EngineSettings::default(),
    )
}

/// Fully wired engine with a fixed clock and default settings.
pub fn engine() -> SpellEngine {
    let catalog = catalog();
    SpellEngine::new(
        catalog.clone(),
        calculator(catalog),
        Arc::new(FixedClock(fixed_time())),
        EngineSettings::default(),
    )
}
