//! Bounds on author cost overrides and the primary class resource.

use spellforge_domain::{ResourceCosts, SpellConfig, CLASS_RESOURCE_TYPES};

use super::Findings;

pub const MAX_REASONABLE_ACTION_POINTS: i64 = 5;
pub const MAX_REASONABLE_MANA: i64 = 100;
pub const MAX_REASONABLE_COOLDOWN: i64 = 20;
/// Computed mana above which a free override is suspicious.
pub const FREE_MANA_POWER_THRESHOLD: i64 = 20;

/// Bounds-check author overrides; `costs` are the calculator's figures.
pub(super) fn check(config: &SpellConfig, costs: &ResourceCosts, findings: &mut Findings<'_>) {
    let Some(options) = &config.resource_options else {
        return;
    };

    if let Some(ap) = options.action_points.as_ref().and_then(|o| o.override_value) {
        if ap < 0 {
            findings.error("actionPoints", "Action point cost cannot be negative");
        } else if ap == 0 {
            findings.warning("freeActionPoints", "Zero action point cost may cause balance issues");
        } else if ap > MAX_REASONABLE_ACTION_POINTS {
            findings.warning(
                "highActionPoints",
                "Very high action point cost may make the spell unusable",
            );
        }
    }

    if let Some(mana) = options.mana.as_ref().and_then(|o| o.override_value) {
        if mana < 0 {
            findings.error("mana", "Mana cost cannot be negative");
        } else if mana == 0 && costs.mana > FREE_MANA_POWER_THRESHOLD {
            findings.warning(
                "freeMana",
                "Zero mana cost for a powerful spell may cause balance issues",
            );
        } else if mana > MAX_REASONABLE_MANA {
            findings.warning("highMana", "Very high mana cost may make the spell unusable");
        }
    }

    if let Some(cooldown) = options.cooldown.as_ref().and_then(|o| o.override_value) {
        if cooldown < 0 {
            findings.error("cooldown", "Cooldown cannot be negative");
        } else if cooldown > MAX_REASONABLE_COOLDOWN {
            findings.warning("longCooldown", "Very long cooldown may make the spell rarely used");
        }
    }

    if let Some(resource) = options
        .primary_class_resource
        .as_deref()
        .filter(|r| !r.is_empty())
    {
        if !CLASS_RESOURCE_TYPES.contains(&resource) {
            findings.error(
                "classResource",
                format!("Invalid class resource type: {resource}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{fireball, validator};
    use spellforge_domain::{CostOption, ResourceOptions};

    fn override_of(value: i64) -> Option<CostOption> {
        Some(CostOption {
            override_value: Some(value),
            ..CostOption::default()
        })
    }

    fn with_options(options: ResourceOptions) -> SpellConfig {
        let mut spell = fireball();
        spell.resource_options = Some(options);
        spell
    }

    #[test]
    fn test_negative_overrides_are_errors() {
        let result = validator().execute(&with_options(ResourceOptions {
            action_points: override_of(-1),
            mana: override_of(-5),
            cooldown: override_of(-2),
            ..ResourceOptions::default()
        }));
        assert_eq!(result.errors["actionPoints"], "Action point cost cannot be negative");
        assert_eq!(result.errors["mana"], "Mana cost cannot be negative");
        assert_eq!(result.errors["cooldown"], "Cooldown cannot be negative");
    }

    #[test]
    fn test_free_mana_on_powerful_spell() {
        let spell = with_options(ResourceOptions {
            mana: override_of(0),
            ..ResourceOptions::default()
        });
        // The override wins in the computed total, so supply figures directly.
        let costs = ResourceCosts {
            action_points: 2,
            mana: 0,
            cooldown: 0,
            class_resources: None,
        };
        let mut out = Vec::new();
        check(
            &spell,
            &ResourceCosts { mana: 40, ..costs.clone() },
            &mut Findings::new(spellforge_domain::ValidationPhase::Resources, &mut out),
        );
        assert!(out.iter().any(|d| d.key == "freeMana"));

        let mut out = Vec::new();
        check(
            &spell,
            &costs,
            &mut Findings::new(spellforge_domain::ValidationPhase::Resources, &mut out),
        );
        assert!(out.is_empty());
    }

    #[test]
    fn test_outlier_overrides_warn() {
        let result = validator().execute(&with_options(ResourceOptions {
            action_points: override_of(0),
            mana: override_of(150),
            cooldown: override_of(30),
            ..ResourceOptions::default()
        }));
        assert!(result.has_warning("freeActionPoints"));
        assert!(result.has_warning("highMana"));
        assert!(result.has_warning("longCooldown"));
        assert!(result.valid);
    }

    #[test]
    fn test_class_resource_allow_list() {
        let result = validator().execute(&with_options(ResourceOptions {
            primary_class_resource: Some("chi".into()),
            ..ResourceOptions::default()
        }));
        assert!(!result.has_error("classResource"));

        let result = validator().execute(&with_options(ResourceOptions {
            primary_class_resource: Some("mana_crystals".into()),
            ..ResourceOptions::default()
        }));
        assert_eq!(
            result.errors["classResource"],
            "Invalid class resource type: mana_crystals"
        );
    }
}
