//! Name, effect type list and level, plus fields whose authored value had
//! the wrong type.

use spellforge_domain::{ReferenceCatalog, SpellConfig};

use super::{is_blank, Findings};

pub const MIN_LEVEL: i64 = 1;
pub const MAX_LEVEL: i64 = 10;

const LEVEL_MESSAGE: &str = "Level must be a number between 1 and 10";

/// Rejected fields another phase reports under its own key.
pub(super) const CONCENTRATION_PATH: &str = "durationConfig.requiresConcentration";

pub(super) fn check(config: &SpellConfig, catalog: &ReferenceCatalog, findings: &mut Findings<'_>) {
    for path in &config.rejected_fields {
        match path.as_str() {
            "level" => findings.error("level", LEVEL_MESSAGE),
            CONCENTRATION_PATH => {}
            other => findings.error(other, format!("Invalid value for {other}")),
        }
    }

    if is_blank(config.name.as_deref()) {
        findings.error("name", "Spell name is required");
    }

    match config.effect_types.as_deref() {
        None | Some([]) => findings.error("effectTypes", "At least one effect type is required"),
        Some(ids) => {
            let invalid: Vec<&str> = ids
                .iter()
                .filter(|id| catalog.effect_type(id).is_none())
                .map(String::as_str)
                .collect();
            if !invalid.is_empty() {
                findings.error(
                    "effectTypes",
                    format!("Invalid effect types: {}", invalid.join(", ")),
                );
            }
        }
    }

    if let Some(level) = config.level {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            findings.error("level", LEVEL_MESSAGE);
        }
    }
}
