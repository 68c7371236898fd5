//! Tolerant reading of authored spell documents.
//!
//! Documents come from editors and hand-written files, so one field with the
//! wrong type must not make the whole document unreadable. Such a value is
//! moved into the `extra` map of the object that held it and its dotted path
//! is recorded in [`SpellConfig::rejected_fields`], where validation reports
//! it. Serialization writes it back exactly as authored.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use super::spell::{
    ChainConfig, Components, ControlConfig, CostOption, CriticalConfig, DamageConfig,
    DurationConfig, HealingConfig, PersistentConfig, ProcConfig, ResourceCost, ResourceOptions,
    ShieldConfig, SpellConfig, StatusConfig, TargetingConfig, UtilityConfig,
};
use crate::error::DomainError;

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// =============================================================================
// Number Helpers
// =============================================================================

/// Accepts integers and whole floats (`3`, `3.0`) for integer fields.
pub(crate) fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(n) = number.as_i64() {
        return Ok(Some(n));
    }
    number
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| Some(f as i64))
        .ok_or_else(|| D::Error::custom(format!("expected a whole number, found {number}")))
}

/// Writes whole floats as integers so `20` stays `20` rather than `20.0`.
pub(crate) fn compact_float<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER => {
            serializer.serialize_i64(*v as i64)
        }
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

// =============================================================================
// Document Shapes
// =============================================================================

/// Sets aside wrongly typed fields of one object, recursing into nested shapes.
type Sanitizer = fn(&mut Map<String, Value>, &str, &mut Vec<RejectedValue>);

/// A typed object in the document tree.
trait WireShape: DeserializeOwned {
    /// Sanitizer for a key that holds a nested typed object.
    fn nested(_key: &str) -> Option<Sanitizer> {
        None
    }
}

struct RejectedValue {
    parent: String,
    key: String,
    value: Value,
}

impl WireShape for SpellConfig {
    fn nested(key: &str) -> Option<Sanitizer> {
        let sanitizer: Sanitizer = match key {
            "components" => sanitize::<Components>,
            "damageConfig" => sanitize::<DamageConfig>,
            "healingConfig" => sanitize::<HealingConfig>,
            "buffConfig" | "debuffConfig" => sanitize::<StatusConfig>,
            "utilityConfig" => sanitize::<UtilityConfig>,
            "controlConfig" => sanitize::<ControlConfig>,
            "targetingConfig" => sanitize::<TargetingConfig>,
            "durationConfig" => sanitize::<DurationConfig>,
            "persistentConfig" => sanitize::<PersistentConfig>,
            "procConfig" => sanitize::<ProcConfig>,
            "resourceOptions" => sanitize::<ResourceOptions>,
            "resourceCost" => sanitize::<ResourceCost>,
            _ => return None,
        };
        Some(sanitizer)
    }
}

impl WireShape for DamageConfig {
    fn nested(key: &str) -> Option<Sanitizer> {
        let sanitizer: Sanitizer = match key {
            "chainConfig" => sanitize::<ChainConfig>,
            "criticalConfig" => sanitize::<CriticalConfig>,
            _ => return None,
        };
        Some(sanitizer)
    }
}

impl WireShape for HealingConfig {
    fn nested(key: &str) -> Option<Sanitizer> {
        (key == "shieldConfig").then_some(sanitize::<ShieldConfig> as Sanitizer)
    }
}

impl WireShape for ResourceOptions {
    fn nested(key: &str) -> Option<Sanitizer> {
        matches!(key, "actionPoints" | "mana" | "cooldown")
            .then_some(sanitize::<CostOption> as Sanitizer)
    }
}

impl WireShape for Components {}
impl WireShape for ChainConfig {}
impl WireShape for CriticalConfig {}
impl WireShape for ShieldConfig {}
impl WireShape for StatusConfig {}
impl WireShape for UtilityConfig {}
impl WireShape for ControlConfig {}
impl WireShape for TargetingConfig {}
impl WireShape for DurationConfig {}
impl WireShape for PersistentConfig {}
impl WireShape for ProcConfig {}
impl WireShape for CostOption {}
impl WireShape for ResourceCost {}

/// Removes every key of `object` that `T` cannot read.
///
/// Fields are independent, so a key is kept exactly when `T` parses from an
/// object holding that key alone.
fn sanitize<T: WireShape>(
    object: &mut Map<String, Value>,
    path: &str,
    rejected: &mut Vec<RejectedValue>,
) {
    let keys: Vec<String> = object.keys().cloned().collect();
    for key in keys {
        let field_path = join(path, &key);
        if let Some(nested) = T::nested(&key) {
            if let Some(Value::Object(inner)) = object.get_mut(&key) {
                nested(inner, &field_path, rejected);
            }
        }

        let accepted = object.get(&key).is_some_and(|value| {
            let single = Map::from_iter([(key.clone(), value.clone())]);
            serde_json::from_value::<T>(Value::Object(single)).is_ok()
        });
        if !accepted {
            if let Some(value) = object.remove(&key) {
                rejected.push(RejectedValue {
                    parent: path.to_string(),
                    key,
                    value,
                });
            }
        }
    }
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

// =============================================================================
// Tolerant Parsing
// =============================================================================

impl SpellConfig {
    /// Read an authored document, setting aside wrongly typed fields.
    ///
    /// Fails only when `document` is not a JSON object.
    pub fn from_document(document: Value) -> Result<Self, DomainError> {
        let Value::Object(mut root) = document else {
            return Err(DomainError::parse("Spell document must be a JSON object"));
        };

        let mut rejected = Vec::new();
        sanitize::<SpellConfig>(&mut root, "", &mut rejected);

        let mut config: SpellConfig = serde_json::from_value(Value::Object(root))
            .map_err(|e| DomainError::parse(format!("Malformed spell document: {e}")))?;

        for RejectedValue { parent, key, value } in rejected {
            if !key.starts_with('_') {
                config.rejected_fields.insert(join(&parent, &key));
            }
            if let Some(extra) = config.extra_at(&parent) {
                extra.insert(key, value);
            }
        }
        Ok(config)
    }

    /// The unknown-key map of the object at `path`, if that object is present.
    fn extra_at(&mut self, path: &str) -> Option<&mut BTreeMap<String, Value>> {
        let extra = match path {
            "" => &mut self.extra,
            "components" => &mut self.components.as_mut()?.extra,
            "damageConfig" => &mut self.damage_config.as_mut()?.extra,
            "damageConfig.chainConfig" => {
                &mut self.damage_config.as_mut()?.chain_config.as_mut()?.extra
            }
            "damageConfig.criticalConfig" => {
                &mut self.damage_config.as_mut()?.critical_config.as_mut()?.extra
            }
            "healingConfig" => &mut self.healing_config.as_mut()?.extra,
            "healingConfig.shieldConfig" => {
                &mut self.healing_config.as_mut()?.shield_config.as_mut()?.extra
            }
            "buffConfig" => &mut self.buff_config.as_mut()?.extra,
            "debuffConfig" => &mut self.debuff_config.as_mut()?.extra,
            "utilityConfig" => &mut self.utility_config.as_mut()?.extra,
            "controlConfig" => &mut self.control_config.as_mut()?.extra,
            "targetingConfig" => &mut self.targeting_config.as_mut()?.extra,
            "durationConfig" => &mut self.duration_config.as_mut()?.extra,
            "persistentConfig" => &mut self.persistent_config.as_mut()?.extra,
            "procConfig" => &mut self.proc_config.as_mut()?.extra,
            "resourceOptions" => &mut self.resource_options.as_mut()?.extra,
            "resourceOptions.actionPoints" => {
                &mut self.resource_options.as_mut()?.action_points.as_mut()?.extra
            }
            "resourceOptions.mana" => &mut self.resource_options.as_mut()?.mana.as_mut()?.extra,
            "resourceOptions.cooldown" => {
                &mut self.resource_options.as_mut()?.cooldown.as_mut()?.extra
            }
            "resourceCost" => &mut self.resource_cost.as_mut()?.extra,
            _ => return None,
        };
        Some(extra)
    }
}
