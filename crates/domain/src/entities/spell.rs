//! Spell configuration document.
//!
//! `SpellConfig` is the authored wire document: every field is optional on the
//! wire so that incomplete drafts still parse and can be diagnosed. Field
//! names are camelCase and enum-like values are plain catalog ids, because
//! invalid ids must be reported by validation rather than rejected by the
//! parser.
//!
//! Sub-configurations are keyed by presence (`damageConfig`, `healingConfig`,
//! ...). [`SpellConfig::effect_bindings`] gives the typed view that pairs each
//! declared effect type with its sub-configuration, or marks it missing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use super::wire::{compact_float, whole_number};
use crate::error::DomainError;
use crate::types::ValidationResult;

/// Root authored document describing one ability.
///
/// Read documents through [`SpellConfig::from_document`]; plain serde
/// deserialization is strict and fails on the first wrongly typed field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Expected to be within 1..=10
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casting_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    /// Free-text duration shown to players; `durationConfig` is the structured form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Catalog effect type ids; `None` and empty are both "no effects"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_config: Option<DamageConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing_config: Option<HealingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buff_config: Option<StatusConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debuff_config: Option<StatusConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility_config: Option<UtilityConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_config: Option<ControlConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting_config: Option<TargetingConfig>,
    /// `"tagged"` enables per-effect targeting through `targetingTags`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting_tags: Option<BTreeMap<String, TargetingTag>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_config: Option<DurationConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_config: Option<PersistentConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proc_config: Option<ProcConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_options: Option<ResourceOptions>,

    /// Derived costs cached by authoring tools; stripped on clean
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_cost: Option<ResourceCost>,

    /// Diagnostics attached by deserialize / instantiate
    #[serde(
        rename = "_validation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub validation: Option<ValidationResult>,

    /// Dotted paths of fields whose authored value had the wrong type.
    ///
    /// The values themselves sit in the `extra` map of the object that held
    /// them, so they are written back unchanged.
    #[serde(skip)]
    pub rejected_fields: BTreeSet<String>,

    /// Unrecognized top-level keys, preserved verbatim
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verbal: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub somatic: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub material: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice_notation: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_chain_effect: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_config: Option<ChainConfig>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_critical_effect: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_config: Option<CriticalConfig>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub targets: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub falloff_type: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalConfig {
    #[serde(default, serialize_with = "compact_float", skip_serializing_if = "Option::is_none")]
    pub critical_multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dice_notation: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_absorption_shield: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shield_config: Option<ShieldConfig>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shield_type: Option<String>,
    /// Dice notation for the absorbed amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shield_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection_type: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Shared shape of `buffConfig` and `debuffConfig`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_modifiers: Option<BTreeMap<String, i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_effects: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_parameters: Option<BTreeMap<String, Value>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl StatusConfig {
    pub fn has_stat_modifiers(&self) -> bool {
        self.stat_modifiers.as_ref().is_some_and(|m| !m.is_empty())
    }

    pub fn has_status_effects(&self) -> bool {
        self.status_effects.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// Whether parameters were supplied for `effect_id` (null counts as absent).
    pub fn has_parameters_for(&self, effect_id: &str) -> bool {
        self.effect_parameters
            .as_ref()
            .and_then(|p| p.get(effect_id))
            .is_some_and(|v| !v.is_null())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility_subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Value>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_type: Option<String>,
    /// Rounds the control effect lasts
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targeting_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_shape: Option<String>,
    /// Feet
    #[serde(default, serialize_with = "compact_float", skip_serializing_if = "Option::is_none")]
    pub area_size: Option<f64>,
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub target_count: Option<i64>,
    /// Feet
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub range_distance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_restrictions: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetingTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_option: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<String>,
    #[serde(default, serialize_with = "compact_float", skip_serializing_if = "Option::is_none")]
    pub duration_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_concentration: Option<bool>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl DurationConfig {
    pub fn is_instant(&self) -> bool {
        self.duration_type.as_deref() == Some(INSTANT_DURATION)
    }

    pub fn requires_concentration(&self) -> bool {
        self.requires_concentration.unwrap_or(false)
    }
}

/// Duration type id meaning "no lasting effect".
pub const INSTANT_DURATION: &str = "instant";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistentConfig {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_persistent: bool,
    /// One of `dot`, `hot`, `trigger`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_frequency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_damage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_healing: Option<String>,
    /// Rounds
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub tick_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_effect: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Persistent effect kinds the validator recognizes.
pub const PERSISTENT_TYPES: [&str; 3] = ["dot", "hot", "trigger"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proc_type: Option<String>,
    /// Percent, 1..=100
    #[serde(default, serialize_with = "compact_float", skip_serializing_if = "Option::is_none")]
    pub proc_chance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Author adjustments for one resource.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostOption {
    /// Replaces the computed cost entirely
    #[serde(
        rename = "override",
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub override_value: Option<i64>,
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub modifier: Option<i64>,
    #[serde(default, serialize_with = "compact_float", skip_serializing_if = "Option::is_none")]
    pub percent_modifier: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_points: Option<CostOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana: Option<CostOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<CostOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_class_resource: Option<String>,
    /// Per-class-resource options keyed by resource id (`rage`, `holy_power`, ...)
    /// and any other keys, kept as authored
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ResourceOptions {
    /// Options for one class resource, if present and well-formed.
    pub fn class_resource(&self, resource_type: &str) -> Option<CostOption> {
        self.extra
            .get(resource_type)
            .and_then(|value| CostOption::deserialize(value).ok())
    }
}

/// Derived cost block cached on a document by authoring tools.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCost {
    #[serde(default, deserialize_with = "whole_number", skip_serializing_if = "Option::is_none")]
    pub action_points: Option<i64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Effect type ids with engine semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Damage,
    Healing,
    Buff,
    Debuff,
    Control,
    Utility,
    Summoning,
    Transformation,
    Purification,
    Restoration,
}

impl EffectKind {
    pub const ALL: [EffectKind; 10] = [
        Self::Damage,
        Self::Healing,
        Self::Buff,
        Self::Debuff,
        Self::Control,
        Self::Utility,
        Self::Summoning,
        Self::Transformation,
        Self::Purification,
        Self::Restoration,
    ];

    /// Kinds that carry a typed sub-configuration.
    pub const CONFIGURED: [EffectKind; 6] = [
        Self::Damage,
        Self::Healing,
        Self::Buff,
        Self::Debuff,
        Self::Utility,
        Self::Control,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Damage => "damage",
            Self::Healing => "healing",
            Self::Buff => "buff",
            Self::Debuff => "debuff",
            Self::Control => "control",
            Self::Utility => "utility",
            Self::Summoning => "summoning",
            Self::Transformation => "transformation",
            Self::Purification => "purification",
            Self::Restoration => "restoration",
        }
    }

    /// Capitalized name used in diagnostic keys and messages (`Damage`).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Damage => "Damage",
            Self::Healing => "Healing",
            Self::Buff => "Buff",
            Self::Debuff => "Debuff",
            Self::Control => "Control",
            Self::Utility => "Utility",
            Self::Summoning => "Summoning",
            Self::Transformation => "Transformation",
            Self::Purification => "Purification",
            Self::Restoration => "Restoration",
        }
    }

    /// Wire key of the matching sub-configuration, if this kind has one.
    pub fn config_key(&self) -> Option<&'static str> {
        match self {
            Self::Damage => Some("damageConfig"),
            Self::Healing => Some("healingConfig"),
            Self::Buff => Some("buffConfig"),
            Self::Debuff => Some("debuffConfig"),
            Self::Control => Some("controlConfig"),
            Self::Utility => Some("utilityConfig"),
            _ => None,
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown effect type: {s}")))
    }
}

/// A declared effect type paired with its sub-configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectBinding<'a> {
    Damage(&'a DamageConfig),
    Healing(&'a HealingConfig),
    Buff(&'a StatusConfig),
    Debuff(&'a StatusConfig),
    Control(&'a ControlConfig),
    Utility(&'a UtilityConfig),
    /// Declared, but its sub-configuration is absent
    Missing(EffectKind),
    /// Declared kind that has no sub-configuration shape
    Bare(EffectKind),
}

impl EffectBinding<'_> {
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::Damage(_) => EffectKind::Damage,
            Self::Healing(_) => EffectKind::Healing,
            Self::Buff(_) => EffectKind::Buff,
            Self::Debuff(_) => EffectKind::Debuff,
            Self::Control(_) => EffectKind::Control,
            Self::Utility(_) => EffectKind::Utility,
            Self::Missing(kind) | Self::Bare(kind) => *kind,
        }
    }
}

impl SpellConfig {
    /// Declared effect type ids, empty when absent.
    pub fn effect_type_ids(&self) -> &[String] {
        self.effect_types.as_deref().unwrap_or(&[])
    }

    pub fn has_effect(&self, kind: EffectKind) -> bool {
        self.effect_type_ids().iter().any(|id| id == kind.as_str())
    }

    /// Recognized effect kinds in declaration order, without duplicates.
    pub fn effect_kinds(&self) -> Vec<EffectKind> {
        let mut kinds = Vec::new();
        for id in self.effect_type_ids() {
            if let Ok(kind) = id.parse::<EffectKind>() {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
        }
        kinds
    }

    /// Whether the sub-configuration for `kind` is present.
    pub fn has_sub_config(&self, kind: EffectKind) -> bool {
        match kind {
            EffectKind::Damage => self.damage_config.is_some(),
            EffectKind::Healing => self.healing_config.is_some(),
            EffectKind::Buff => self.buff_config.is_some(),
            EffectKind::Debuff => self.debuff_config.is_some(),
            EffectKind::Control => self.control_config.is_some(),
            EffectKind::Utility => self.utility_config.is_some(),
            _ => false,
        }
    }

    /// Typed view over every declared, recognized effect type.
    pub fn effect_bindings(&self) -> Vec<EffectBinding<'_>> {
        self.effect_kinds()
            .into_iter()
            .map(|kind| self.binding(kind))
            .collect()
    }

    fn binding(&self, kind: EffectKind) -> EffectBinding<'_> {
        let bound = match kind {
            EffectKind::Damage => self.damage_config.as_ref().map(EffectBinding::Damage),
            EffectKind::Healing => self.healing_config.as_ref().map(EffectBinding::Healing),
            EffectKind::Buff => self.buff_config.as_ref().map(EffectBinding::Buff),
            EffectKind::Debuff => self.debuff_config.as_ref().map(EffectBinding::Debuff),
            EffectKind::Control => self.control_config.as_ref().map(EffectBinding::Control),
            EffectKind::Utility => self.utility_config.as_ref().map(EffectBinding::Utility),
            other => return EffectBinding::Bare(other),
        };
        bound.unwrap_or(EffectBinding::Missing(kind))
    }

    /// Sub-configurations present without a matching declared effect type.
    pub fn orphaned_configs(&self) -> Vec<EffectKind> {
        EffectKind::CONFIGURED
            .into_iter()
            .filter(|kind| self.has_sub_config(*kind) && !self.has_effect(*kind))
            .collect()
    }

    pub fn targeting_type(&self) -> Option<&str> {
        self.targeting_config
            .as_ref()
            .and_then(|t| t.targeting_type.as_deref())
    }

    pub fn duration_type(&self) -> Option<&str> {
        self.duration_config
            .as_ref()
            .and_then(|d| d.duration_type.as_deref())
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent_config
            .as_ref()
            .is_some_and(|p| p.is_persistent)
    }

    pub fn requires_concentration(&self) -> bool {
        self.duration_config
            .as_ref()
            .is_some_and(DurationConfig::requires_concentration)
    }

    pub fn uses_chain_effect(&self) -> bool {
        self.damage_config.as_ref().is_some_and(|d| d.use_chain_effect)
    }

    pub fn uses_critical_effect(&self) -> bool {
        self.damage_config
            .as_ref()
            .is_some_and(|d| d.use_critical_effect)
    }

    pub fn uses_absorption_shield(&self) -> bool {
        self.healing_config
            .as_ref()
            .is_some_and(|h| h.use_absorption_shield)
    }

    pub fn damage_dice(&self) -> Option<&str> {
        self.damage_config
            .as_ref()
            .and_then(|d| d.dice_notation.as_deref())
    }

    pub fn healing_dice(&self) -> Option<&str> {
        self.healing_config
            .as_ref()
            .and_then(|h| h.dice_notation.as_deref())
    }

    pub fn uses_tagged_targeting(&self) -> bool {
        self.targeting_mode.as_deref() == Some("tagged")
    }
}
