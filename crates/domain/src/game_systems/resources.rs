//! Standard resource cost rules.
//!
//! Costs are built up additively from the effect types, targeting, duration
//! and enhancement toggles of a spell, then author overrides in
//! `resourceOptions` are applied. An `override` always returns verbatim (even
//! when negative) so the validator can flag it.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::entities::{CostOption, SpellConfig};
use crate::types::ReferenceCatalog;
use crate::value_objects::average_value;

use super::traits::ResourceCalculator;

/// Class resource ids the validator accepts for `primaryClassResource`.
pub const CLASS_RESOURCE_TYPES: [&str; 8] = [
    "rage",
    "energy",
    "focus",
    "combo_points",
    "soul_shards",
    "holy_power",
    "astral_power",
    "chi",
];

/// Healing above this average triggers a cooldown.
const MAJOR_HEALING_AVERAGE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCosts {
    pub action_points: i64,
    pub mana: i64,
    /// Rounds
    pub cooldown: i64,
    pub class_resources: Option<ClassResourceCost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResourceCost {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub cost: i64,
}

/// The built-in cost rules.
#[derive(Debug, Clone)]
pub struct StandardResourceCalculator {
    catalog: Arc<ReferenceCatalog>,
}

impl StandardResourceCalculator {
    pub fn new(catalog: Arc<ReferenceCatalog>) -> Self {
        Self { catalog }
    }

    pub fn action_points(&self, config: &SpellConfig) -> i64 {
        let mut ap: i64 = config
            .effect_type_ids()
            .iter()
            .filter_map(|id| self.catalog.effect_type(id))
            .map(|effect| effect.action_point_cost)
            .sum();

        if let Some(targeting) = &config.targeting_config {
            match targeting.targeting_type.as_deref() {
                // +1 per 30ft beyond the first 10ft
                Some("area") => {
                    if let Some(size) = targeting.area_size.filter(|s| *s != 0.0) {
                        ap = ap.saturating_add(((size - 10.0).max(0.0) / 30.0).floor() as i64);
                    }
                }
                // +1 per 3 targets beyond the first
                Some("multi") => {
                    if let Some(count) = targeting.target_count.filter(|c| *c != 0) {
                        ap = ap.saturating_add(count.saturating_sub(1).max(0) / 3);
                    }
                }
                _ => {}
            }
        }

        if config.requires_concentration() {
            ap = ap.saturating_add(1);
        }
        if config.uses_chain_effect() {
            ap = ap.saturating_add(2);
        }
        if config.uses_critical_effect() {
            ap = ap.saturating_add(1);
        }
        if config.uses_absorption_shield() {
            ap = ap.saturating_add(2);
        }

        let level = config.level.unwrap_or(0);
        if level >= 7 {
            ap = ap.saturating_add(1);
        }
        if level >= 9 {
            ap = ap.saturating_add(1);
        }

        let options = config
            .resource_options
            .as_ref()
            .and_then(|o| o.action_points.as_ref());
        if let Some(options) = options {
            if let Some(fixed) = options.override_value {
                return fixed;
            }
            ap = ap.saturating_add(options.modifier.unwrap_or(0));
        }

        if config.is_persistent() {
            ap = ap.saturating_add(1);
        }

        ap.max(1)
    }

    pub fn mana(&self, config: &SpellConfig) -> i64 {
        let mut mana: f64 = match config.level.filter(|l| *l != 0) {
            Some(level) => level as f64 * 5.0,
            None => config.effect_type_ids().len() as f64 * 5.0,
        };

        for id in config.effect_type_ids() {
            mana += match id.as_str() {
                "damage" => config
                    .damage_dice()
                    .map(|dice| (average_value(dice) / 2.0).floor())
                    .unwrap_or(5.0),
                "healing" => config
                    .healing_dice()
                    .map(|dice| (average_value(dice) * 0.75).floor())
                    .unwrap_or(8.0),
                "buff" | "debuff" => match &config.duration_config {
                    Some(duration) if !duration.is_instant() => {
                        5.0 * duration_multiplier(
                            duration.duration_type.as_deref(),
                            duration.duration_value.unwrap_or(0.0),
                        )
                    }
                    _ => 5.0,
                },
                "utility" | "control" | "summoning" | "transformation" => 10.0,
                _ => 0.0,
            };
        }

        if let Some(damage) = &config.damage_config {
            if damage.use_chain_effect {
                mana += 15.0;
                if let Some(targets) = damage.chain_config.as_ref().and_then(|c| c.targets) {
                    mana += targets as f64 * 3.0;
                }
            }
            if damage.use_critical_effect {
                mana += 10.0;
            }
        }
        if config.uses_absorption_shield() {
            mana += 15.0;
        }

        if let Some(targeting) = &config.targeting_config {
            match targeting.targeting_type.as_deref() {
                // +5 per 10ft
                Some("area") => {
                    if let Some(size) = targeting.area_size {
                        mana += (size / 10.0).floor() * 5.0;
                    }
                }
                Some("multi") => {
                    if let Some(count) = targeting.target_count {
                        mana += count as f64 * 3.0;
                    }
                }
                _ => {}
            }
        }

        if config.requires_concentration() {
            mana += 10.0;
        }

        if let Some(persistent) = config.persistent_config.as_ref().filter(|p| p.is_persistent) {
            mana += 15.0;
            if let Some(ticks) = persistent.tick_duration {
                mana += ticks as f64 * 5.0;
            }
        }

        let options = config.resource_options.as_ref().and_then(|o| o.mana.as_ref());
        if let Some(options) = options {
            if let Some(fixed) = options.override_value {
                return fixed;
            }
            mana += options.modifier.unwrap_or(0) as f64;
            if let Some(percent) = options.percent_modifier.filter(|p| *p != 0.0) {
                mana = (mana * (1.0 + percent / 100.0)).floor();
            }
        }

        (mana.floor() as i64).max(1)
    }

    pub fn cooldown(&self, config: &SpellConfig) -> i64 {
        let mut cooldown: i64 = 0;

        for id in config.effect_type_ids() {
            let floor = match id.as_str() {
                "healing" => match config.healing_dice() {
                    Some(dice) if average_value(dice) > MAJOR_HEALING_AVERAGE => 2,
                    _ => 0,
                },
                "buff" | "debuff" => 3,
                "utility" | "control" => 2,
                "summoning" | "transformation" => 5,
                _ => 0,
            };
            cooldown = cooldown.max(floor);
        }

        let level = config.level.unwrap_or(0);
        if level >= 7 {
            cooldown += 2;
        } else if level >= 5 {
            cooldown += 1;
        }

        if let Some(damage) = &config.damage_config {
            if damage.use_chain_effect {
                cooldown += 1;
            }
            if damage.use_critical_effect {
                let extra = damage
                    .critical_config
                    .as_ref()
                    .and_then(|c| c.effects.as_ref())
                    .map_or(0, Vec::len);
                cooldown = cooldown.saturating_add(extra as i64);
            }
        }
        if config.uses_absorption_shield() {
            cooldown += 2;
        }

        let options = config
            .resource_options
            .as_ref()
            .and_then(|o| o.cooldown.as_ref());
        if let Some(options) = options {
            if let Some(fixed) = options.override_value {
                return fixed;
            }
            cooldown = cooldown.saturating_add(options.modifier.unwrap_or(0));
        }

        cooldown.max(0)
    }

    /// Cost in `resource_type`; unknown resources cost nothing.
    pub fn class_resource(&self, config: &SpellConfig, resource_type: &str) -> i64 {
        let has = |id: &str| config.effect_type_ids().iter().any(|e| e == id);
        let level = config.level.unwrap_or(0);

        let base = match resource_type {
            "rage" if has("damage") => 30,
            "rage" if has("buff") => 20,
            "rage" => 10,
            "energy" => match &config.duration_config {
                Some(duration) if !duration.is_instant() => 50,
                _ => 40,
            },
            "focus" if config.targeting_type() == Some("single") => 60,
            "focus" => 50,
            "combo_points" if level >= 7 => 5,
            "combo_points" if level >= 5 => 4,
            "combo_points" if level >= 3 => 3,
            "combo_points" => 2,
            "soul_shards" if has("summoning") => 3,
            "soul_shards" if has("transformation") => 2,
            "soul_shards" => 1,
            "holy_power" if has("healing") || config.uses_absorption_shield() => 3,
            "holy_power" => 2,
            "astral_power" if has("transformation") => 60,
            "astral_power" => 40,
            _ => 0,
        };

        let options: Option<CostOption> = config
            .resource_options
            .as_ref()
            .and_then(|o| o.class_resource(resource_type));
        let mut cost: i64 = base;
        if let Some(options) = options {
            if let Some(fixed) = options.override_value {
                return fixed;
            }
            cost = cost.saturating_add(options.modifier.unwrap_or(0));
        }

        cost.max(0)
    }
}

impl ResourceCalculator for StandardResourceCalculator {
    fn calculate(&self, config: &SpellConfig) -> ResourceCosts {
        let action_points = config
            .resource_cost
            .as_ref()
            .and_then(|c| c.action_points)
            .unwrap_or_else(|| self.action_points(config));

        let class_resources = config
            .resource_options
            .as_ref()
            .and_then(|o| o.primary_class_resource.as_deref())
            .filter(|id| !id.is_empty())
            .map(|id| ClassResourceCost {
                resource_type: id.to_string(),
                cost: self.class_resource(config, id),
            });

        ResourceCosts {
            action_points,
            mana: self.mana(config),
            cooldown: self.cooldown(config),
            class_resources,
        }
    }
}

/// How strongly a buff/debuff's mana cost scales with its duration.
fn duration_multiplier(duration_type: Option<&str>, value: f64) -> f64 {
    match duration_type {
        Some("rounds") => (value / 3.0).clamp(1.0, 3.0),
        Some("minutes") => (value / 2.0).clamp(1.0, 5.0),
        Some("hours") => (value * 2.0).clamp(2.0, 10.0),
        _ => 1.0,
    }
}
