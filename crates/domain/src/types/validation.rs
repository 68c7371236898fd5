//! Diagnostic report types produced by spell validation.
//!
//! Checks emit [`Diagnostic`]s tagged with the phase that produced them. The
//! public [`ValidationResult`] flattens those into `field -> message` maps, the
//! shape authoring tools consume.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The check pass a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPhase {
    Structural,
    Effects,
    Targeting,
    Duration,
    Resources,
    Consistency,
    Balance,
}

impl ValidationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Effects => "effects",
            Self::Targeting => "targeting",
            Self::Duration => "duration",
            Self::Resources => "resources",
            Self::Consistency => "consistency",
            Self::Balance => "balance",
        }
    }
}

impl fmt::Display for ValidationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Blocks validity
    Error,
    /// Advisory only
    Warning,
}

/// A single finding from one validation phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub phase: ValidationPhase,
    pub severity: Severity,
    /// Field-style key, e.g. `damageDice` or `aoeControlDamage`
    pub key: String,
    pub message: String,
}

impl Diagnostic {
    pub fn error(phase: ValidationPhase, key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phase,
            severity: Severity::Error,
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn warning(
        phase: ValidationPhase,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            phase,
            severity: Severity::Warning,
            key: key.into(),
            message: message.into(),
        }
    }
}

/// The report returned by validation and attached under `_validation`.
///
/// `valid` is exactly `errors.is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default)]
    pub errors: BTreeMap<String, String>,
    #[serde(default)]
    pub warnings: BTreeMap<String, String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    /// Flatten phase-tagged diagnostics into the report maps.
    ///
    /// Within one phase the first message for a key wins. When a later phase
    /// reuses a key already taken by an earlier phase, its message is stored
    /// under `<phase>.<key>` so neither is lost.
    pub fn from_diagnostics<I>(diagnostics: I, suggestions: Vec<String>) -> Self
    where
        I: IntoIterator<Item = Diagnostic>,
    {
        let mut errors = BTreeMap::new();
        let mut warnings = BTreeMap::new();
        let mut owners: HashMap<(Severity, String), ValidationPhase> = HashMap::new();

        for diagnostic in diagnostics {
            let target = match diagnostic.severity {
                Severity::Error => &mut errors,
                Severity::Warning => &mut warnings,
            };
            let owner_key = (diagnostic.severity, diagnostic.key.clone());
            match owners.get(&owner_key) {
                None => {
                    owners.insert(owner_key, diagnostic.phase);
                    target.insert(diagnostic.key, diagnostic.message);
                }
                Some(phase) if *phase == diagnostic.phase => {}
                Some(_) => {
                    let qualified = format!("{}.{}", diagnostic.phase, diagnostic.key);
                    target.entry(qualified).or_insert(diagnostic.message);
                }
            }
        }

        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
        }
    }

    pub fn has_error(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    pub fn has_warning(&self, key: &str) -> bool {
        self.warnings.contains_key(key)
    }
}
