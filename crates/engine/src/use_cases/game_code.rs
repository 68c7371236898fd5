//! Spell -> game-code artifact compilation.
//!
//! One-way: the artifact is never validated or parsed back into a spell.

use std::collections::BTreeMap;
use std::sync::Arc;

use spellforge_domain::{
    AoeSpec, CompiledEffects, CompiledTargeting, Components, ControlEffect, DamageEffect,
    EffectTarget, GameCodeArtifact, HealingEffect, ResourceCalculator, ShieldSpec, SpellConfig,
    StatusConfig, StatusEffect, TargetingTag, UtilityEffect,
};

use super::description::{resolve_icon, UNNAMED_SPELL};
use crate::infrastructure::ports::ClockPort;
use crate::infrastructure::settings::EngineSettings;

pub const TAGGED_TARGETING_MODE: &str = "tagged";
pub const DEFAULT_CRITICAL_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_HEALING_TYPE: &str = "Standard";
pub const DEFAULT_CONTROL_TYPE: &str = "stun";
pub const DEFAULT_CONTROL_ROUNDS: i64 = 1;
pub const DEFAULT_UTILITY_TYPE: &str = "movement";
pub const DEFAULT_TARGETING_TYPE: &str = "single";
pub const DEFAULT_TARGET_RESTRICTION: &str = "any";
/// Feet, used when an area spell has a shape but no size
pub const DEFAULT_AREA_SIZE: f64 = 10.0;

/// Use case: compile a spell into its compact game-code form.
pub struct CompileSpell {
    calculator: Arc<dyn ResourceCalculator>,
    clock: Arc<dyn ClockPort>,
    settings: EngineSettings,
}

impl CompileSpell {
    pub fn new(
        calculator: Arc<dyn ResourceCalculator>,
        clock: Arc<dyn ClockPort>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            calculator,
            clock,
            settings,
        }
    }

    pub fn execute(&self, config: &SpellConfig) -> GameCodeArtifact {
        let id = match config.id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => id.to_string(),
            None => format!("spell_{}", self.clock.now().timestamp_millis()),
        };
        let text_or = |value: &Option<String>, fallback: &str| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        let artifact = GameCodeArtifact {
            id,
            name: text_or(&config.name, UNNAMED_SPELL),
            description: text_or(&config.description, ""),
            level: config.level.filter(|l| *l != 0).unwrap_or(1),
            school: text_or(&config.school, &self.settings.default_school),
            casting_time: text_or(&config.casting_time, &self.settings.default_casting_time),
            range: text_or(&config.range, &self.settings.default_range),
            components: config.components.clone().unwrap_or(Components {
                verbal: true,
                somatic: true,
                material: false,
                materials: Some(String::new()),
                ..Components::default()
            }),
            duration: text_or(&config.duration, &self.settings.default_duration),
            icon: resolve_icon(config),
            resources: self.calculator.calculate(config),
            effects: compile_effects(config),
            targeting: self.compile_targeting(config),
            tags: config.tags.clone().unwrap_or_default(),
        };

        tracing::info!(
            spell_id = %artifact.id,
            spell = %artifact.name,
            action_points = artifact.resources.action_points,
            mana = artifact.resources.mana,
            "Compiled spell artifact"
        );
        artifact
    }

    fn compile_targeting(&self, config: &SpellConfig) -> Option<CompiledTargeting> {
        let targeting = config.targeting_config.as_ref()?;

        let aoe = targeting
            .area_shape
            .as_deref()
            .filter(|shape| !shape.is_empty() && targeting.targeting_type.as_deref() == Some("area"))
            .map(|shape| AoeSpec {
                shape: shape.to_string(),
                size: targeting
                    .area_size
                    .filter(|size| *size != 0.0)
                    .unwrap_or(DEFAULT_AREA_SIZE),
            });

        let (mode, effect_targets) = match tagged_targets(config) {
            Some(tags) => {
                let targets = tags
                    .iter()
                    .filter_map(|(effect, tag)| {
                        tag.target_option
                            .as_deref()
                            .filter(|t| !t.is_empty())
                            .map(|target| (effect.clone(), effect_target(target)))
                    })
                    .collect::<BTreeMap<_, _>>();
                (Some(TAGGED_TARGETING_MODE.to_string()), Some(targets))
            }
            None => (None, None),
        };

        Some(CompiledTargeting {
            targeting_type: targeting
                .targeting_type
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TARGETING_TYPE)
                .to_string(),
            range: targeting
                .range_distance
                .filter(|r| *r != 0)
                .unwrap_or(self.settings.default_range_distance),
            restrictions: targeting
                .target_restrictions
                .clone()
                .unwrap_or_else(|| vec![DEFAULT_TARGET_RESTRICTION.to_string()]),
            aoe,
            mode,
            effect_targets,
        })
    }
}

fn compile_effects(config: &SpellConfig) -> CompiledEffects {
    let hint = |effect: &str, fallback: &str| effect_hint(config, effect, fallback);

    let damage = config.damage_config.as_ref().and_then(|damage| {
        let formula = damage.dice_notation.as_deref().filter(|d| !d.is_empty())?;
        Some(DamageEffect {
            formula: formula.to_string(),
            types: damage.damage_types.clone().unwrap_or_default(),
            critical: damage.use_critical_effect.then(|| {
                damage
                    .critical_config
                    .as_ref()
                    .and_then(|c| c.critical_multiplier)
                    .filter(|m| *m != 0.0)
                    .unwrap_or(DEFAULT_CRITICAL_MULTIPLIER)
            }),
            targeting: hint("damage", "target"),
        })
    });

    let healing = config.healing_config.as_ref().and_then(|healing| {
        let formula = healing.dice_notation.as_deref().filter(|d| !d.is_empty())?;
        let shield = if healing.use_absorption_shield {
            healing
                .shield_config
                .as_ref()
                .and_then(|s| s.shield_amount.as_deref())
                .filter(|amount| !amount.is_empty())
                .map_or(ShieldSpec::Flag(true), |amount| {
                    ShieldSpec::Amount(amount.to_string())
                })
        } else {
            ShieldSpec::Flag(false)
        };
        Some(HealingEffect {
            formula: formula.to_string(),
            healing_type: healing
                .healing_type
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_HEALING_TYPE)
                .to_string(),
            shield,
            targeting: hint("healing", "self"),
        })
    });

    CompiledEffects {
        damage,
        healing,
        buff: config
            .buff_config
            .as_ref()
            .map(|buff| status_effect(buff, hint("buff", "self"))),
        debuff: config
            .debuff_config
            .as_ref()
            .map(|debuff| status_effect(debuff, hint("debuff", "target"))),
        control: config.control_config.as_ref().map(|control| ControlEffect {
            control_type: control
                .control_type
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_CONTROL_TYPE)
                .to_string(),
            duration: control
                .duration
                .filter(|d| *d != 0)
                .unwrap_or(DEFAULT_CONTROL_ROUNDS),
            targeting: hint("control", "target"),
        }),
        utility: config.utility_config.as_ref().map(|utility| UtilityEffect {
            utility_type: utility
                .utility_type
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_UTILITY_TYPE)
                .to_string(),
            targeting: hint("utility", "target"),
        }),
    }
}

fn status_effect(status: &StatusConfig, targeting: Option<EffectTarget>) -> StatusEffect {
    StatusEffect {
        stat_modifiers: status.stat_modifiers.clone().unwrap_or_default(),
        status_effects: status.status_effects.clone().unwrap_or_default(),
        targeting,
    }
}

fn tagged_targets(config: &SpellConfig) -> Option<&BTreeMap<String, TargetingTag>> {
    if !config.uses_tagged_targeting() {
        return None;
    }
    config.targeting_tags.as_ref()
}

/// Per-effect target override, present only under tagged targeting.
fn effect_hint(config: &SpellConfig, effect: &str, fallback: &str) -> Option<EffectTarget> {
    let tag = tagged_targets(config)?.get(effect)?;
    let target = tag
        .target_option
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(fallback);
    Some(effect_target(target))
}

fn effect_target(target: &str) -> EffectTarget {
    EffectTarget {
        target: target.to_string(),
    }
}
