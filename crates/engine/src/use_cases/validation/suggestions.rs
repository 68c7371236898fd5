//! Authoring nudges. Order is fixed and every entry appears at most once.

use spellforge_domain::{EffectKind, SpellConfig, INSTANT_DURATION};

/// Buff/debuff lasting this many rounds or fewer is "short".
pub const SHORT_BUFF_ROUNDS: f64 = 3.0;
/// Durations above this without concentration get a nudge.
pub const LONG_UNCONCENTRATED_DURATION: f64 = 5.0;

pub(super) fn suggest(config: &SpellConfig) -> Vec<String> {
    let has = |kind| config.has_effect(kind);
    let mut suggestions = Vec::new();
    let mut push = |text: &str| suggestions.push(text.to_string());

    if config.description.as_deref().map_or(true, str::is_empty) {
        push("Add a description to explain the spell's effects and flavor");
    }
    if config.icon.as_deref().map_or(true, str::is_empty) {
        push("Add an icon to represent the spell visually");
    }

    if config
        .damage_config
        .as_ref()
        .and_then(|d| d.damage_types.as_ref())
        .is_some_and(|types| types.len() == 1)
    {
        push("Consider adding a secondary damage type to make the spell more versatile");
    }

    if has(EffectKind::Damage)
        && config
            .damage_config
            .as_ref()
            .is_some_and(|d| !d.use_chain_effect && !d.use_critical_effect)
    {
        push("Consider adding chain effects or critical enhancements to make the damage more interesting");
    }

    if has(EffectKind::Healing)
        && config
            .healing_config
            .as_ref()
            .is_some_and(|h| !h.use_absorption_shield)
    {
        push("Consider adding an absorption shield to enhance the healing effect");
    }

    let short_rounds = config.duration_config.as_ref().is_some_and(|d| {
        d.duration_type.as_deref() == Some("rounds")
            && d.duration_value.is_some_and(|v| v <= SHORT_BUFF_ROUNDS)
    });
    if (has(EffectKind::Buff) || has(EffectKind::Debuff)) && short_rounds {
        push("Consider extending the duration for buff/debuff effects to increase their value");
    }

    if (has(EffectKind::Damage) || has(EffectKind::Healing)) && !config.is_persistent() {
        push("Consider adding damage/healing over time effects for more total value");
    }

    match config.targeting_type() {
        Some("single") if has(EffectKind::Damage) || has(EffectKind::Control) => {
            push("Consider changing targeting to area effect for more tactical options");
        }
        Some("self") if has(EffectKind::Buff) => {
            push("Consider changing targeting to allow buffing allies as well");
        }
        _ => {}
    }

    if config.duration_config.as_ref().is_some_and(|d| {
        d.duration_type.as_deref() != Some(INSTANT_DURATION)
            && d.duration_value.is_some_and(|v| v > LONG_UNCONCENTRATED_DURATION)
            && !d.requires_concentration()
    }) {
        push("Consider adding concentration requirement for balance of long-duration effects");
    }

    suggestions
}
