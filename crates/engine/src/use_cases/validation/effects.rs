//! Per-effect sub-configuration checks, plus persistent and proc settings.
//!
//! Each declared effect type is checked on its own, so a broken damage block
//! never hides problems in the healing block.

use spellforge_domain::{
    is_valid_dice_notation, ControlConfig, DamageConfig, EffectBinding, HealingConfig,
    PersistentConfig, ProcConfig, ReferenceCatalog, SpellConfig, StatusConfig, UtilityConfig,
    PERSISTENT_TYPES,
};

use super::{is_blank, Findings};

pub const MIN_PROC_CHANCE: f64 = 1.0;
pub const MAX_PROC_CHANCE: f64 = 100.0;

pub(super) fn check(config: &SpellConfig, catalog: &ReferenceCatalog, findings: &mut Findings<'_>) {
    for binding in config.effect_bindings() {
        match binding {
            EffectBinding::Damage(damage) => check_damage(damage, catalog, findings),
            EffectBinding::Healing(healing) => check_healing(healing, catalog, findings),
            EffectBinding::Buff(buff) => check_status("buff", "Buff", buff, catalog, findings),
            EffectBinding::Debuff(debuff) => {
                check_status("debuff", "Debuff", debuff, catalog, findings)
            }
            EffectBinding::Utility(utility) => check_utility(utility, catalog, findings),
            EffectBinding::Control(control) => check_control(control, catalog, findings),
            EffectBinding::Missing(kind) => {
                if let Some(key) = kind.config_key() {
                    findings.error(
                        key,
                        format!(
                            "{} configuration is required for {} effects",
                            kind.label(),
                            kind.as_str()
                        ),
                    );
                }
            }
            EffectBinding::Bare(_) => {}
        }
    }

    if let Some(persistent) = config.persistent_config.as_ref().filter(|p| p.is_persistent) {
        check_persistent(persistent, findings);
    }
    if let Some(proc_config) = &config.proc_config {
        check_proc(proc_config, findings);
    }
}

fn check_damage(damage: &DamageConfig, catalog: &ReferenceCatalog, findings: &mut Findings<'_>) {
    match damage.damage_types.as_deref() {
        None | Some([]) => findings.error("damageTypes", "At least one damage type must be selected"),
        Some(types) => {
            let invalid = unknown_ids(types, |id| catalog.damage_type(id).is_some());
            if !invalid.is_empty() {
                findings.error("damageTypes", format!("Invalid damage types: {invalid}"));
            }
        }
    }

    check_dice(
        damage.dice_notation.as_deref(),
        "damageDice",
        "Dice notation is required for damage amount",
        "Invalid dice notation format",
        findings,
    );

    if damage.use_chain_effect {
        match &damage.chain_config {
            None => findings.error(
                "chainConfig",
                "Chain configuration is required when chain effect is enabled",
            ),
            Some(chain) => {
                if chain.targets.map_or(true, |t| t < 1) {
                    findings.error("chainTargets", "Chain targets must be at least 1");
                }
                if is_blank(chain.falloff_type.as_deref()) {
                    findings.error("falloffType", "Falloff type is required for chain effects");
                }
            }
        }
    }

    if damage.use_critical_effect {
        match &damage.critical_config {
            None => findings.error(
                "criticalConfig",
                "Critical configuration is required when critical effect is enabled",
            ),
            Some(critical) => {
                if critical.critical_multiplier.map_or(true, |m| m <= 0.0) {
                    findings.error("criticalMultiplier", "Critical multiplier must be greater than 0");
                }
                if let Some(effects) = &critical.effects {
                    let invalid = unknown_ids(effects, |id| catalog.critical_effect(id).is_some());
                    if !invalid.is_empty() {
                        findings.error("criticalEffects", format!("Invalid critical effects: {invalid}"));
                    }
                }
            }
        }
    }
}

fn check_healing(healing: &HealingConfig, catalog: &ReferenceCatalog, findings: &mut Findings<'_>) {
    match healing.healing_type.as_deref() {
        None | Some("") => findings.error("healingType", "Healing type is required"),
        Some(id) if catalog.healing_type(id).is_none() => {
            findings.error("healingType", "Invalid healing type")
        }
        Some(_) => {}
    }

    check_dice(
        healing.dice_notation.as_deref(),
        "healingDice",
        "Dice notation is required for healing amount",
        "Invalid dice notation format",
        findings,
    );

    if !healing.use_absorption_shield {
        return;
    }
    let Some(shield) = &healing.shield_config else {
        findings.error(
            "shieldConfig",
            "Shield configuration is required when absorption shield is enabled",
        );
        return;
    };

    match shield.shield_type.as_deref() {
        None | Some("") => findings.error("shieldType", "Shield type is required"),
        Some(id) if catalog.shield_type(id).is_none() => {
            findings.error("shieldType", "Invalid shield type")
        }
        Some(_) => {}
    }

    check_dice(
        shield.shield_amount.as_deref(),
        "shieldAmount",
        "Shield amount is required",
        "Invalid shield amount dice notation",
        findings,
    );

    if let Some(reflection) = shield.reflection_type.as_deref().filter(|r| !r.is_empty()) {
        if catalog.reflection_type(reflection).is_none() {
            findings.error("reflectionType", "Invalid reflection type");
        }
    }
}

/// Buff and debuff share one shape; `prefix` namespaces the keys.
fn check_status(
    prefix: &str,
    label: &str,
    status: &StatusConfig,
    catalog: &ReferenceCatalog,
    findings: &mut Findings<'_>,
) {
    let has_modifiers = status.has_stat_modifiers();
    let has_effects = status.has_status_effects();

    if !has_modifiers && !has_effects {
        findings.error(
            format!("{prefix}Effects"),
            format!("{label} must have at least one stat modifier or status effect"),
        );
    }

    if let Some(modifiers) = status.stat_modifiers.as_ref().filter(|_| has_modifiers) {
        let invalid: Vec<&str> = modifiers
            .keys()
            .filter(|id| catalog.stat_modifier(id).is_none())
            .map(String::as_str)
            .collect();
        if !invalid.is_empty() {
            findings.error(
                format!("{prefix}StatModifiers"),
                format!("Invalid stat modifiers: {}", invalid.join(", ")),
            );
        }
    }

    if let Some(effects) = status.status_effects.as_ref().filter(|_| has_effects) {
        let invalid = unknown_ids(effects, |id| catalog.status_effect(id).is_some());
        if !invalid.is_empty() {
            findings.error(
                format!("{prefix}StatusEffects"),
                format!("Invalid status effects: {invalid}"),
            );
        }

        let missing: Vec<&str> = effects
            .iter()
            .filter(|id| {
                catalog
                    .status_effect(id)
                    .is_some_and(|entry| entry.requires_parameters)
                    && !status.has_parameters_for(id)
            })
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            findings.error(
                format!("{prefix}Parameters"),
                format!("Missing required parameters for effects: {}", missing.join(", ")),
            );
        }
    }
}

fn check_utility(utility: &UtilityConfig, catalog: &ReferenceCatalog, findings: &mut Findings<'_>) {
    let Some(type_id) = utility.utility_type.as_deref().filter(|t| !t.is_empty()) else {
        findings.error("utilityType", "Utility type is required");
        return;
    };
    let Some(utility_type) = catalog.utility_type(type_id) else {
        findings.error("utilityType", "Invalid utility type");
        return;
    };
    let Some(subtype_id) = utility.utility_subtype.as_deref().filter(|s| !s.is_empty()) else {
        findings.error("utilitySubtype", "Utility subtype is required");
        return;
    };
    let Some(subtype) = utility_type.subtype(subtype_id) else {
        findings.error(
            "utilitySubtype",
            "Invalid utility subtype for the selected utility type",
        );
        return;
    };

    let missing: Vec<&str> = subtype
        .parameters
        .iter()
        .filter(|name| {
            !utility
                .parameters
                .as_ref()
                .is_some_and(|params| params.contains_key(name.as_str()))
        })
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        findings.error(
            "utilityParameters",
            format!("Missing required parameters: {}", missing.join(", ")),
        );
    }
}

fn check_control(control: &ControlConfig, catalog: &ReferenceCatalog, findings: &mut Findings<'_>) {
    match control.control_type.as_deref() {
        None | Some("") => findings.error("controlType", "Control type is required"),
        Some(id) if catalog.control_type(id).is_none() => {
            findings.error("controlType", "Invalid control type")
        }
        Some(_) => {}
    }

    if control.duration.is_some_and(|d| d <= 0) {
        findings.error("controlDuration", "Control duration must be greater than 0");
    }
}

fn check_persistent(persistent: &PersistentConfig, findings: &mut Findings<'_>) {
    match persistent.persistent_type.as_deref() {
        None | Some("") => findings.error("persistentType", "Persistent effect type is required"),
        Some(kind) if !PERSISTENT_TYPES.contains(&kind) => {
            findings.error("persistentType", "Invalid persistent type")
        }
        Some(_) => {}
    }

    if is_blank(persistent.tick_frequency.as_deref()) {
        findings.error("tickFrequency", "Tick frequency is required for persistent effects");
    }

    match persistent.persistent_type.as_deref() {
        Some("dot" | "hot") => {
            let tick = [&persistent.tick_damage, &persistent.tick_healing]
                .into_iter()
                .flatten()
                .find(|value| !value.is_empty());
            match tick {
                None => findings.error(
                    "tickEffect",
                    "Tick damage or healing amount is required for DOT/HOT effects",
                ),
                Some(value) if !is_valid_dice_notation(value) => {
                    findings.error("tickEffect", "Invalid tick effect dice notation")
                }
                Some(_) => {}
            }
        }
        Some("trigger") if is_blank(persistent.trigger_condition.as_deref()) => {
            findings.error(
                "triggerCondition",
                "Trigger condition is required for triggered persistent effects",
            );
        }
        _ => {}
    }
}

fn check_proc(proc_config: &ProcConfig, findings: &mut Findings<'_>) {
    if is_blank(proc_config.proc_type.as_deref()) {
        findings.error("procType", "Proc type is required for proc effects");
    }

    if proc_config
        .proc_chance
        .map_or(true, |chance| !(MIN_PROC_CHANCE..=MAX_PROC_CHANCE).contains(&chance))
    {
        findings.error("procChance", "Proc chance must be between 1 and 100");
    }

    if proc_config.effects.as_ref().map_or(true, Vec::is_empty) {
        findings.error("procEffects", "At least one proc effect is required");
    }
}

fn check_dice(
    notation: Option<&str>,
    key: &str,
    missing: &str,
    malformed: &str,
    findings: &mut Findings<'_>,
) {
    match notation {
        None | Some("") => findings.error(key, missing),
        Some(notation) if !is_valid_dice_notation(notation) => findings.error(key, malformed),
        Some(_) => {}
    }
}

/// Comma-joined ids rejected by `known`, empty when all are known.
fn unknown_ids(ids: &[String], known: impl Fn(&str) -> bool) -> String {
    ids.iter()
        .filter(|id| !known(id.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
