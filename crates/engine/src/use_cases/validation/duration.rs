//! Duration type, value and concentration, plus lasting-effect cross-checks.

use spellforge_domain::{EffectKind, ReferenceCatalog, SpellConfig, INSTANT_DURATION};

use super::structural::CONCENTRATION_PATH;
use super::Findings;

pub const LONG_ROUNDS: f64 = 20.0;
pub const LONG_MINUTES: f64 = 60.0;
pub const LONG_HOURS: f64 = 8.0;

pub(super) fn check(config: &SpellConfig, catalog: &ReferenceCatalog, findings: &mut Findings<'_>) {
    let Some(duration) = &config.duration_config else {
        findings.error("durationConfig", "Duration configuration is required");
        return;
    };

    match duration.duration_type.as_deref() {
        None | Some("") => findings.error("durationType", "Duration type is required"),
        Some(id) if catalog.duration_type(id).is_none() => {
            findings.error("durationType", "Invalid duration type")
        }
        Some(INSTANT_DURATION) => {}
        Some(unit) => match duration.duration_value {
            Some(value) if value > 0.0 => {
                if let Some(message) = long_duration_warning(unit, value) {
                    findings.warning("longDuration", message);
                }
            }
            _ => findings.error(
                "durationValue",
                "Duration value must be greater than 0 for non-instant durations",
            ),
        },
    }

    if config.rejected_fields.contains(CONCENTRATION_PATH) {
        findings.error("concentration", "Concentration requirement must be a boolean");
    } else if duration.requires_concentration() && duration.is_instant() {
        findings.error("concentration", "Instant effects cannot require concentration");
    }

    if config.effect_types.is_none() {
        return;
    }
    let Some(duration_type) = duration.duration_type.as_deref().filter(|t| !t.is_empty()) else {
        return;
    };
    let lasting = duration_type != INSTANT_DURATION && !config.is_persistent();

    if lasting && config.has_effect(EffectKind::Damage) {
        findings.warning(
            "nonInstantDamage",
            "Non-instant damage effects are unusual unless configured as damage over time",
        );
    }
    if lasting && config.has_effect(EffectKind::Healing) && !config.uses_absorption_shield() {
        findings.warning(
            "nonInstantHealing",
            "Non-instant healing effects are unusual unless configured as healing over time or shields",
        );
    }
}

fn long_duration_warning(unit: &str, value: f64) -> Option<&'static str> {
    match unit {
        "rounds" if value > LONG_ROUNDS => {
            Some("Very long round duration may exceed most combat encounters")
        }
        "minutes" if value > LONG_MINUTES => Some("Very long minute duration may cause balance issues"),
        "hours" if value > LONG_HOURS => {
            Some("Very long hour duration extends beyond normal gameplay sessions")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{fireball, healing_word, validator};
    use spellforge_domain::{DurationConfig, PersistentConfig, ShieldConfig};

    fn with_duration(duration: DurationConfig) -> SpellConfig {
        let mut spell = fireball();
        spell.duration_config = Some(duration);
        spell
    }

    #[test]
    fn test_instant_concentration_is_an_error() {
        let result = validator().execute(&with_duration(DurationConfig {
            duration_type: Some("instant".into()),
            duration_value: None,
            requires_concentration: Some(true),
            ..DurationConfig::default()
        }));
        assert_eq!(
            result.errors["concentration"],
            "Instant effects cannot require concentration"
        );
        assert!(result.has_warning("instantConcentration"));
    }

    #[test]
    fn test_non_instant_requires_value() {
        let result = validator().execute(&with_duration(DurationConfig {
            duration_type: Some("minutes".into()),
            duration_value: Some(0.0),
            ..DurationConfig::default()
        }));
        assert!(result.has_error("durationValue"));
    }

    #[test]
    fn test_long_duration_thresholds() {
        assert!(long_duration_warning("rounds", 20.0).is_none());
        assert!(long_duration_warning("rounds", 21.0).is_some());
        assert!(long_duration_warning("minutes", 61.0).is_some());
        assert!(long_duration_warning("hours", 8.0).is_none());
        assert!(long_duration_warning("hours", 9.0).is_some());
        assert!(long_duration_warning("days", 900.0).is_none());
    }

    #[test]
    fn test_lasting_damage_unless_persistent() {
        let mut spell = with_duration(DurationConfig {
            duration_type: Some("rounds".into()),
            duration_value: Some(3.0),
            ..DurationConfig::default()
        });
        assert!(validator().execute(&spell).has_warning("nonInstantDamage"));

        spell.persistent_config = Some(PersistentConfig {
            is_persistent: true,
            persistent_type: Some("dot".into()),
            tick_frequency: Some("round".into()),
            tick_damage: Some("1d6".into()),
            ..PersistentConfig::default()
        });
        assert!(!validator().execute(&spell).has_warning("nonInstantDamage"));
    }

    #[test]
    fn test_long_duration_is_reported() {
        let result = validator().execute(&with_duration(DurationConfig {
            duration_type: Some("rounds".into()),
            duration_value: Some(30.0),
            ..DurationConfig::default()
        }));
        assert_eq!(
            result.warnings["longDuration"],
            "Very long round duration may exceed most combat encounters"
        );

        let result = validator().execute(&with_duration(DurationConfig {
            duration_type: Some("hours".into()),
            duration_value: Some(8.0),
            ..DurationConfig::default()
        }));
        assert!(!result.has_warning("longDuration"));
    }

    #[test]
    fn test_lasting_healing_unless_shielded() {
        let mut spell = healing_word();
        spell.duration_config = Some(DurationConfig {
            duration_type: Some("rounds".into()),
            duration_value: Some(3.0),
            ..DurationConfig::default()
        });
        assert_eq!(
            validator().execute(&spell).warnings["nonInstantHealing"],
            "Non-instant healing effects are unusual unless configured as healing over time or shields"
        );

        if let Some(healing) = spell.healing_config.as_mut() {
            healing.use_absorption_shield = true;
            healing.shield_config = Some(ShieldConfig {
                shield_type: Some("all_damage".into()),
                shield_amount: Some("2d8".into()),
                ..ShieldConfig::default()
            });
        }
        let result = validator().execute(&spell);
        assert!(!result.has_warning("nonInstantHealing"));
        assert!(!result.has_error("shieldConfig"));
    }

    #[test]
    fn test_missing_duration_config() {
        let mut spell = fireball();
        spell.duration_config = None;
        assert_eq!(
            validator().execute(&spell).errors["durationConfig"],
            "Duration configuration is required"
        );
    }
}
