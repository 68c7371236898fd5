//! Spell validation.
//!
//! Validation is pure and never fails: every phase appends diagnostics to a
//! shared list, no phase short-circuits another, and the result is flattened
//! into a [`ValidationResult`] at the end. Phases run in a fixed order:
//!
//! 1. structural (name, effect types, level)
//! 2. per-effect sub-configurations, persistent and proc settings
//! 3. targeting
//! 4. duration
//! 5. resource overrides
//!
//! followed by the effect-type consistency pass, the advisory balance pass
//! and the suggestion list.

mod balance;
mod consistency;
mod duration;
mod effects;
mod resources;
mod structural;
mod suggestions;
mod targeting;

use std::sync::Arc;

use spellforge_domain::{
    Diagnostic, ReferenceCatalog, ResourceCalculator, SpellConfig, ValidationPhase,
    ValidationResult,
};

use crate::infrastructure::settings::EngineSettings;

pub use balance::{
    EXPECTED_DAMAGE_PER_LEVEL, EXPECTED_HEALING_PER_LEVEL, HIGH_ACTION_POINT_COST,
    HIGH_COOLDOWN, HIGH_MANA_COST, HIGH_POWER_RATIO, LOW_POWER_RATIO,
};

/// Use case: validate a spell document.
pub struct ValidateSpell {
    catalog: Arc<ReferenceCatalog>,
    calculator: Arc<dyn ResourceCalculator>,
    settings: EngineSettings,
}

impl ValidateSpell {
    pub fn new(
        catalog: Arc<ReferenceCatalog>,
        calculator: Arc<dyn ResourceCalculator>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            catalog,
            calculator,
            settings,
        }
    }

    /// Validate `config` and build the report.
    pub fn execute(&self, config: &SpellConfig) -> ValidationResult {
        let diagnostics = self.diagnostics(config);
        let suggestions = if self.settings.suggestions {
            suggestions::suggest(config)
        } else {
            Vec::new()
        };
        let result = ValidationResult::from_diagnostics(diagnostics, suggestions);

        tracing::debug!(
            spell = config.name.as_deref().unwrap_or(""),
            valid = result.valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            suggestions = result.suggestions.len(),
            "Validated spell"
        );

        result
    }

    /// Phase-tagged findings, in phase order, before flattening.
    pub fn diagnostics(&self, config: &SpellConfig) -> Vec<Diagnostic> {
        let catalog = self.catalog.as_ref();
        let costs = self.calculator.calculate(config);
        let mut out = Vec::new();

        structural::check(config, catalog, &mut Findings::new(ValidationPhase::Structural, &mut out));
        effects::check(config, catalog, &mut Findings::new(ValidationPhase::Effects, &mut out));
        targeting::check(config, catalog, &mut Findings::new(ValidationPhase::Targeting, &mut out));
        duration::check(config, catalog, &mut Findings::new(ValidationPhase::Duration, &mut out));
        resources::check(config, &costs, &mut Findings::new(ValidationPhase::Resources, &mut out));
        consistency::check(config, &mut Findings::new(ValidationPhase::Consistency, &mut out));
        if self.settings.balance_warnings {
            balance::check(config, &costs, &mut Findings::new(ValidationPhase::Balance, &mut out));
        }

        out
    }
}

/// Collects diagnostics for one phase.
pub(crate) struct Findings<'a> {
    phase: ValidationPhase,
    out: &'a mut Vec<Diagnostic>,
}

impl<'a> Findings<'a> {
    fn new(phase: ValidationPhase, out: &'a mut Vec<Diagnostic>) -> Self {
        Self { phase, out }
    }

    fn error(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.out.push(Diagnostic::error(self.phase, key, message));
    }

    fn warning(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.out.push(Diagnostic::warning(self.phase, key, message));
    }
}

/// Absent or empty.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}
