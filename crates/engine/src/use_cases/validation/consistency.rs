//! Declared effect types versus present sub-configurations, both directions.

use spellforge_domain::{EffectKind, SpellConfig};

use super::Findings;

pub(super) fn check(config: &SpellConfig, findings: &mut Findings<'_>) {
    if config.effect_types.is_none() {
        return;
    }

    for kind in EffectKind::CONFIGURED {
        if config.has_effect(kind) && !config.has_sub_config(kind) {
            findings.error(
                format!("missing{}Config", kind.label()),
                format!(
                    "{} configuration is required when {} effect type is selected",
                    kind.label(),
                    kind.as_str()
                ),
            );
        }
    }

    for kind in config.orphaned_configs() {
        findings.warning(
            format!("unused{}Config", kind.label()),
            format!(
                "{} configuration exists but {} effect type is not selected",
                kind.label(),
                kind.as_str()
            ),
        );
    }
}
