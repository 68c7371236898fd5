//! Targeting type, area shape and size, and target counts.

use spellforge_domain::{EffectKind, ReferenceCatalog, SpellConfig};

use super::Findings;

/// Area sizes above this (feet) get a balance warning.
pub const LARGE_AREA_SIZE: f64 = 100.0;
/// Multi-target counts above this get a balance warning.
pub const LARGE_TARGET_COUNT: i64 = 10;

pub(super) fn check(config: &SpellConfig, catalog: &ReferenceCatalog, findings: &mut Findings<'_>) {
    let Some(targeting) = &config.targeting_config else {
        findings.error("targetingConfig", "Targeting configuration is required");
        return;
    };

    match targeting.targeting_type.as_deref() {
        None | Some("") => findings.error("targetingType", "Targeting type is required"),
        Some(id) if catalog.targeting_type(id).is_none() => {
            findings.error("targetingType", "Invalid targeting type")
        }
        Some("area") => {
            match targeting.area_shape.as_deref() {
                None | Some("") => {
                    findings.error("areaShape", "Area shape is required for area targeting")
                }
                Some(shape) if catalog.aoe_shape(shape).is_none() => {
                    findings.error("areaShape", "Invalid area shape")
                }
                Some(_) => {}
            }

            match targeting.area_size {
                None => findings.error("areaSize", "Area size must be greater than 0"),
                Some(size) if size <= 0.0 => {
                    findings.error("areaSize", "Area size must be greater than 0")
                }
                Some(size) if size > LARGE_AREA_SIZE => {
                    findings.warning("areaSize", "Very large area size may cause balance issues")
                }
                Some(_) => {}
            }
        }
        Some("multi") => match targeting.target_count {
            None => findings.error("targetCount", "Target count must be at least 1 for multi-targeting"),
            Some(count) if count < 1 => {
                findings.error("targetCount", "Target count must be at least 1 for multi-targeting")
            }
            Some(count) if count > LARGE_TARGET_COUNT => {
                findings.warning("targetCount", "Very high target count may cause balance issues")
            }
            Some(_) => {}
        },
        Some("self") if config.has_effect(EffectKind::Damage) => {
            findings.warning("selfDamage", "Self-targeting damage effects are usually undesirable")
        }
        Some(_) => {}
    }

    // Cross-checks run on any non-empty type, recognized or not.
    let Some(targeting_type) = targeting.targeting_type.as_deref().filter(|t| !t.is_empty()) else {
        return;
    };
    if config.effect_types.is_none() {
        return;
    }

    if targeting_type == "area" && config.has_effect(EffectKind::Healing) {
        findings.warning(
            "aoeHealing",
            "Area of effect healing is unusual and may be difficult to use effectively",
        );
    }
    if targeting_type == "self" {
        if config.has_effect(EffectKind::Control) {
            findings.warning("selfControl", "Self-targeting control effects are unusual");
        }
        if config.has_effect(EffectKind::Debuff) {
            findings.warning("selfDebuff", "Self-targeting debuff effects are usually undesirable");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{fireball, validator};
    use spellforge_domain::TargetingConfig;

    fn with_targeting(targeting: TargetingConfig) -> spellforge_domain::SpellConfig {
        let mut spell = fireball();
        spell.targeting_config = Some(targeting);
        spell
    }

    #[test]
    fn test_missing_targeting_config() {
        let mut spell = fireball();
        spell.targeting_config = None;
        let result = validator().execute(&spell);
        assert_eq!(result.errors["targetingConfig"], "Targeting configuration is required");
    }

    #[test]
    fn test_oversized_area_only_warns() {
        let result = validator().execute(&with_targeting(TargetingConfig {
            targeting_type: Some("area".into()),
            area_shape: Some("circle".into()),
            area_size: Some(150.0),
            ..TargetingConfig::default()
        }));
        assert!(!result.has_error("areaSize"));
        assert!(!result.has_error("areaShape"));
        assert_eq!(
            result.warnings["areaSize"],
            "Very large area size may cause balance issues"
        );
    }

    #[test]
    fn test_area_requires_shape_and_size() {
        let result = validator().execute(&with_targeting(TargetingConfig {
            targeting_type: Some("area".into()),
            area_shape: Some("donut".into()),
            ..TargetingConfig::default()
        }));
        assert_eq!(result.errors["areaShape"], "Invalid area shape");
        assert_eq!(result.errors["areaSize"], "Area size must be greater than 0");
    }

    #[test]
    fn test_multi_target_count() {
        let result = validator().execute(&with_targeting(TargetingConfig {
            targeting_type: Some("multi".into()),
            target_count: Some(0),
            ..TargetingConfig::default()
        }));
        assert!(result.has_error("targetCount"));

        let result = validator().execute(&with_targeting(TargetingConfig {
            targeting_type: Some("multi".into()),
            target_count: Some(12),
            ..TargetingConfig::default()
        }));
        assert!(!result.has_error("targetCount"));
        assert!(result.has_warning("targetCount"));
    }

    #[test]
    fn test_self_targeting_cross_checks() {
        let mut spell = with_targeting(TargetingConfig {
            targeting_type: Some("self".into()),
            ..TargetingConfig::default()
        });
        spell.effect_types = Some(vec!["damage".into(), "control".into(), "debuff".into()]);
        let result = validator().execute(&spell);
        assert!(result.has_warning("selfDamage"));
        assert!(result.has_warning("selfControl"));
        assert!(result.has_warning("selfDebuff"));
    }

    #[test]
    fn test_unknown_type_still_cross_checked() {
        let mut spell = with_targeting(TargetingConfig {
            targeting_type: Some("everywhere".into()),
            ..TargetingConfig::default()
        });
        spell.effect_types = Some(vec!["healing".into()]);
        let result = validator().execute(&spell);
        assert_eq!(result.errors["targetingType"], "Invalid targeting type");
        assert!(!result.has_warning("aoeHealing"));
    }
}
