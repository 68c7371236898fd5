//! Advisory power-curve heuristics. Everything here is a warning.

use spellforge_domain::{average_value, EffectKind, ResourceCosts, SpellConfig};

use super::Findings;

pub const EXPECTED_DAMAGE_PER_LEVEL: i64 = 5;
pub const EXPECTED_HEALING_PER_LEVEL: i64 = 6;
/// Estimated output above `expected * HIGH_POWER_RATIO` is flagged.
pub const HIGH_POWER_RATIO: f64 = 2.0;
/// Estimated output below `expected * LOW_POWER_RATIO` is flagged.
pub const LOW_POWER_RATIO: f64 = 0.5;
pub const HIGH_ACTION_POINT_COST: i64 = 3;
pub const HIGH_MANA_COST: i64 = 50;
pub const HIGH_COOLDOWN: i64 = 10;

pub(super) fn check(config: &SpellConfig, costs: &ResourceCosts, findings: &mut Findings<'_>) {
    if let (Some(level), Some(dice)) = (config.level, config.damage_dice()) {
        power_curve("Damage", average_value(dice), level, EXPECTED_DAMAGE_PER_LEVEL, findings);
    }
    if let (Some(level), Some(dice)) = (config.level, config.healing_dice()) {
        power_curve("Healing", average_value(dice), level, EXPECTED_HEALING_PER_LEVEL, findings);
    }

    check_combinations(config, findings);

    if config
        .duration_config
        .as_ref()
        .is_some_and(|d| d.is_instant() && d.requires_concentration())
    {
        findings.warning(
            "instantConcentration",
            "Concentration requirement on instant effects makes no sense",
        );
    }

    if costs.action_points > HIGH_ACTION_POINT_COST {
        findings.warning(
            "highActionPointCost",
            format!(
                "High action point cost ({}) may limit spell usability",
                costs.action_points
            ),
        );
    }
    if costs.mana > HIGH_MANA_COST {
        findings.warning(
            "highManaCost",
            format!("High mana cost ({}) may limit spell usability", costs.mana),
        );
    }
    if costs.cooldown > HIGH_COOLDOWN {
        findings.warning(
            "highCooldown",
            format!(
                "Long cooldown ({} rounds) may make the spell rarely used",
                costs.cooldown
            ),
        );
    }
}

/// Flags `high<label>`/`low<label>` when `estimate` strays from `level * per_level`.
fn power_curve(
    label: &str,
    estimate: f64,
    level: i64,
    per_level: i64,
    findings: &mut Findings<'_>,
) {
    let expected = level.saturating_mul(per_level);
    let shown = estimate.floor() as i64;

    if estimate > expected as f64 * HIGH_POWER_RATIO {
        findings.warning(
            format!("high{label}"),
            format!(
                "{label} (est. {shown}) is much higher than expected ({expected}) for level {level}"
            ),
        );
    } else if estimate < expected as f64 * LOW_POWER_RATIO {
        findings.warning(
            format!("low{label}"),
            format!(
                "{label} (est. {shown}) is much lower than expected ({expected}) for level {level}"
            ),
        );
    }
}

fn check_combinations(config: &SpellConfig, findings: &mut Findings<'_>) {
    let has = |kind| config.has_effect(kind);

    if config.effect_type_ids().len() > 2 {
        if has(EffectKind::Damage) && (has(EffectKind::Control) || has(EffectKind::Transformation)) {
            findings.warning(
                "powerfulCombination",
                "Combining damage with control or transformation effects may be too powerful",
            );
        }
        if has(EffectKind::Healing) && has(EffectKind::Buff) && has(EffectKind::Utility) {
            findings.warning(
                "versatileCombination",
                "Combining healing, buffs, and utility creates a very versatile spell that may overshadow others",
            );
        }
    }

    if has(EffectKind::Damage) && has(EffectKind::Control) && config.targeting_type() == Some("area") {
        findings.warning(
            "aoeControlDamage",
            "Area of effect damage combined with control effects may be too powerful",
        );
    }
    if has(EffectKind::Buff) && has(EffectKind::Debuff) {
        findings.warning(
            "buffDebuffCombo",
            "Combining buff and debuff effects in one spell is unusual",
        );
    }
    if has(EffectKind::Damage) && has(EffectKind::Healing) {
        findings.warning(
            "damageHealingCombo",
            "Combining damage and healing effects in one spell is unusual",
        );
    }
}
