//! Canonical JSON in and out.

use std::sync::Arc;

use spellforge_domain::{DomainError, SpellConfig};

use super::validation::ValidateSpell;

/// Top-level keys starting with this are internal and never serialized.
pub const INTERNAL_FIELD_PREFIX: char = '_';

/// Wire key of the derived cost block.
const RESOURCE_COST_KEY: &str = "resourceCost";

#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("Malformed spell document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] DomainError),
}

/// Deep copy of `config` without internal or derived fields.
///
/// Drops the attached diagnostics, every unknown top-level key starting
/// with `_`, and the computed `resourceCost`. Everything else, including
/// unknown keys inside sub-configurations and wrongly typed values, is kept.
pub fn clean(config: &SpellConfig) -> SpellConfig {
    let mut cleaned = config.clone();
    cleaned.validation = None;
    cleaned.resource_cost = None;
    cleaned.extra.remove(RESOURCE_COST_KEY);
    cleaned
        .extra
        .retain(|key, _| !key.starts_with(INTERNAL_FIELD_PREFIX));
    cleaned.rejected_fields.retain(|path| {
        path != RESOURCE_COST_KEY && !path.starts_with("resourceCost.")
    });
    cleaned
}

/// Use case: read and write spell documents.
pub struct SpellSerializer {
    validate: Arc<ValidateSpell>,
}

impl SpellSerializer {
    pub fn new(validate: Arc<ValidateSpell>) -> Self {
        Self { validate }
    }

    /// Pretty-printed canonical JSON of [`clean`]`(config)`.
    pub fn serialize(&self, config: &SpellConfig) -> Result<String, SerializationError> {
        Ok(serde_json::to_string_pretty(&clean(config))?)
    }

    /// Parse a spell document and attach a fresh validation report.
    ///
    /// Only text that is not a JSON object fails. Wrongly typed fields are
    /// kept and reported in the attached report. Any report already present
    /// in the text is replaced.
    pub fn deserialize(&self, text: &str) -> Result<SpellConfig, SerializationError> {
        let mut config = serde_json::from_str::<serde_json::Value>(text)
            .map_err(SerializationError::from)
            .and_then(|document| {
                SpellConfig::from_document(document).map_err(SerializationError::from)
            })
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected malformed spell document"))?;

        if !config.rejected_fields.is_empty() {
            tracing::debug!(
                fields = ?config.rejected_fields,
                "Set aside wrongly typed fields"
            );
        }
        config.validation = Some(self.validate.execute(&config));
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{fireball, serializer};
    use serde_json::json;
    use spellforge_domain::ResourceCost;

    #[test]
    fn test_clean_strips_internal_and_derived_fields() {
        let mut spell = fireball();
        spell.extra.insert("_draftId".into(), json!("abc"));
        spell.extra.insert("flavor".into(), json!("smoky"));
        spell.resource_cost = Some(ResourceCost {
            action_points: Some(4),
            ..ResourceCost::default()
        });
        spell.validation = Some(Default::default());

        let cleaned = clean(&spell);
        assert!(cleaned.validation.is_none());
        assert!(cleaned.resource_cost.is_none());
        assert!(!cleaned.extra.contains_key("_draftId"));
        assert_eq!(cleaned.extra["flavor"], json!("smoky"));
        // Input is untouched.
        assert!(spell.extra.contains_key("_draftId"));
    }

    #[test]
    fn test_serialize_omits_validation() {
        let mut spell = fireball();
        spell.validation = Some(Default::default());
        let text = serializer().serialize(&spell).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert!(value.get("_validation").is_none());
        assert_eq!(value["name"], json!("Fireball"));
        assert!(text.contains('\n'), "expected pretty output");
    }

    #[test]
    fn test_deserialize_attaches_report() {
        let config = serializer()
            .deserialize(r#"{"effectTypes": ["damage"]}"#)
            .expect("parses");
        let report = config.validation.expect("report attached");
        assert!(!report.valid);
        assert!(report.has_error("name"));
        assert!(report.has_error("damageConfig"));
    }

    #[test]
    fn test_deserialize_rejects_malformed_text() {
        assert!(matches!(
            serializer().deserialize("{not json"),
            Err(SerializationError::Json(_))
        ));
        assert!(matches!(
            serializer().deserialize("[1, 2, 3]"),
            Err(SerializationError::Document(_))
        ));
    }

    #[test]
    fn test_wrongly_typed_fields_are_reported_not_fatal() {
        let config = serializer()
            .deserialize(
                r#"{
                    "name": "Frost Nova",
                    "level": "3",
                    "effectTypes": ["damage"],
                    "damageConfig": {"damageTypes": ["cold"], "diceNotation": "2d6"},
                    "durationConfig": {"durationType": "instant", "requiresConcentration": "yes"},
                    "resourceOptions": {"notes": "cheap"}
                }"#,
            )
            .expect("wrong types do not fail the document");

        let report = config.validation.as_ref().expect("report attached");
        assert_eq!(report.errors["level"], "Level must be a number between 1 and 10");
        assert_eq!(
            report.errors["concentration"],
            "Concentration requirement must be a boolean"
        );
        // Unrelated diagnostics still run.
        assert!(report.has_error("targetingConfig"));
        assert!(!report.has_error("resourceOptions"));
        assert_eq!(config.damage_dice(), Some("2d6"));
    }

    #[test]
    fn test_round_trip_keeps_authored_shape() {
        let authored = json!({
            "name": "Frost Nova",
            "level": 2,
            "effectTypes": ["damage"],
            "damageConfig": {
                "damageTypes": ["cold"],
                "diceNotation": "2d6",
                "secondaryEffect": "slow"
            },
            "targetingConfig": {
                "targetingType": "area",
                "areaShape": "circle",
                "areaSize": 20,
                "aoeParameters": {"radius": 20}
            },
            "durationConfig": {"durationType": "instant"},
            "resourceOptions": {"combo_points": {"modifier": 1, "generates": 2}}
        });
        let config = serializer()
            .deserialize(&authored.to_string())
            .expect("parses");
        let text = serializer().serialize(&config).expect("serializes");
        let written: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(written, authored);
    }

    #[test]
    fn test_clean_drops_malformed_resource_cost() {
        let config = serializer()
            .deserialize(r#"{"name": "x", "resourceCost": "free", "level": "high"}"#)
            .expect("parses");
        let cleaned = clean(&config);
        assert!(!cleaned.extra.contains_key("resourceCost"));
        assert_eq!(cleaned.extra["level"], json!("high"));
        assert!(cleaned.rejected_fields.contains("level"));
        assert!(!cleaned.rejected_fields.contains("resourceCost"));
    }
}
