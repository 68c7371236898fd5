//! Reusable spell templates.
//!
//! A template is a cleaned [`SpellConfig`] plus underscore-prefixed metadata
//! describing which fields a caller may substitute when instantiating it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::spell::SpellConfig;

/// Metadata keys a template adds on top of the spell document.
pub const TEMPLATE_METADATA_KEYS: [&str; 4] = [
    "_isTemplate",
    "_templateName",
    "_dateCreated",
    "_parameterOptions",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellTemplate {
    #[serde(flatten)]
    pub config: SpellConfig,
    #[serde(rename = "_isTemplate")]
    pub is_template: bool,
    #[serde(rename = "_templateName")]
    pub template_name: String,
    #[serde(rename = "_dateCreated")]
    pub date_created: DateTime<Utc>,
    /// Keyed by dotted field path, e.g. `damageConfig.diceNotation`
    #[serde(rename = "_parameterOptions")]
    pub parameter_options: BTreeMap<String, ParamSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Array,
}

/// Describes one substitutable template parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub description: String,
    pub default: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ParamOption>>,
}

impl ParamSpec {
    pub fn new(param_type: ParamType, description: impl Into<String>, default: Value) -> Self {
        Self {
            param_type,
            description: description.into(),
            default,
            min: None,
            max: None,
            options: None,
        }
    }

    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_options(mut self, options: Vec<ParamOption>) -> Self {
        self.options = Some(options);
        self
    }
}

/// One enumerable choice for a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamOption {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_template_wire_shape() {
        let mut parameter_options = BTreeMap::new();
        parameter_options.insert(
            "level".to_string(),
            ParamSpec::new(ParamType::Number, "Spell level (1-10)", json!(3))
                .with_bounds(Some(1.0), Some(10.0)),
        );
        let template = SpellTemplate {
            config: SpellConfig {
                name: Some("Fireball".into()),
                level: Some(3),
                ..Default::default()
            },
            is_template: true,
            template_name: "Fireball_template".into(),
            date_created: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            parameter_options,
        };

        let value = serde_json::to_value(&template).unwrap();
        assert_eq!(value["name"], json!("Fireball"));
        assert_eq!(value["_isTemplate"], json!(true));
        assert_eq!(value["_dateCreated"], json!("2024-05-01T12:00:00Z"));
        assert_eq!(value["_parameterOptions"]["level"]["type"], json!("number"));
        assert_eq!(value["_parameterOptions"]["level"]["max"], json!(10.0));
        assert!(value["_parameterOptions"]["level"].get("options").is_none());

        let back: SpellTemplate = serde_json::from_value(value).unwrap();
        assert_eq!(back, template);
        assert!(back.config.extra.is_empty());
    }
}
