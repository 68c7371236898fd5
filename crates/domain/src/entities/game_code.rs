//! Compiled game-code artifact.
//!
//! A compact, fully defaulted projection of a spell for an execution engine.
//! It is a deployment output only and is never converted back into a
//! [`super::SpellConfig`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::spell::Components;
use crate::game_systems::ResourceCosts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameCodeArtifact {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: i64,
    pub school: String,
    pub casting_time: String,
    pub range: String,
    pub components: Components,
    pub duration: String,
    pub icon: String,
    pub resources: ResourceCosts,
    pub effects: CompiledEffects,
    /// Absent when the spell has no targeting configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<CompiledTargeting>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledEffects {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<DamageEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing: Option<HealingEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff: Option<StatusEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debuff: Option<StatusEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<ControlEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility: Option<UtilityEffect>,
}

/// Per-effect target override from tag-based targeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTarget {
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageEffect {
    pub formula: String,
    pub types: Vec<String>,
    /// Critical multiplier, null when critical effects are disabled
    pub critical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<EffectTarget>,
}

/// `shieldAmount` when a shield is configured with an amount, else a flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShieldSpec {
    Amount(String),
    Flag(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealingEffect {
    pub formula: String,
    #[serde(rename = "type")]
    pub healing_type: String,
    pub shield: ShieldSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<EffectTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEffect {
    pub stat_modifiers: BTreeMap<String, i64>,
    pub status_effects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<EffectTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlEffect {
    pub control_type: String,
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<EffectTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityEffect {
    pub utility_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting: Option<EffectTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledTargeting {
    #[serde(rename = "type")]
    pub targeting_type: String,
    /// Feet
    pub range: i64,
    pub restrictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aoe: Option<AoeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_targets: Option<BTreeMap<String, EffectTarget>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AoeSpec {
    pub shape: String,
    pub size: f64,
}
