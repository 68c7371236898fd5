//! Template use cases.
//!
//! A template is a cleaned spell plus a map of substitutable parameters.
//! Instantiating one strips the metadata, applies dotted-path modifications
//! and validates the result from scratch.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{json, Value};

use spellforge_domain::{
    CatalogItem, DomainError, EffectKind, FieldPath, FieldPathError, ParamOption, ParamSpec, ParamType,
    ReferenceCatalog, SpellConfig, SpellTemplate, INSTANT_DURATION, TEMPLATE_METADATA_KEYS,
};

use super::serialization::clean;
use super::validation::ValidateSpell;
use crate::infrastructure::ports::ClockPort;

/// Name stem used when the source spell has no name.
const UNNAMED_TEMPLATE_STEM: &str = "unnamed";

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template must be a JSON object")]
    NotATemplate,
    #[error("Invalid modification path '{path}': {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: FieldPathError,
    },
    #[error("Modification '{path}' conflicts with the template: {source}")]
    PathConflict {
        path: String,
        #[source]
        source: FieldPathError,
    },
    #[error("Template JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Document(#[from] DomainError),
}

// =============================================================================
// Make Template
// =============================================================================

/// Use case: capture a spell as a reusable template.
pub struct MakeTemplate {
    catalog: Arc<ReferenceCatalog>,
    clock: Arc<dyn ClockPort>,
}

impl MakeTemplate {
    pub fn new(catalog: Arc<ReferenceCatalog>, clock: Arc<dyn ClockPort>) -> Self {
        Self { catalog, clock }
    }

    /// Build a template from `config`.
    ///
    /// The template name defaults to `<spell name>_template`.
    pub fn execute(&self, config: &SpellConfig, name: Option<&str>) -> SpellTemplate {
        let template_name = match name {
            Some(name) => name.to_string(),
            None => format!(
                "{}_template",
                config.name.as_deref().unwrap_or(UNNAMED_TEMPLATE_STEM)
            ),
        };
        let parameter_options = self.parameters(config);

        tracing::info!(
            template = %template_name,
            parameters = parameter_options.len(),
            "Created spell template"
        );

        SpellTemplate {
            config: clean(config),
            is_template: true,
            template_name,
            date_created: self.clock.now(),
            parameter_options,
        }
    }

    /// Substitutable parameters, keyed by dotted path, defaulted from `config`.
    pub fn parameters(&self, config: &SpellConfig) -> BTreeMap<String, ParamSpec> {
        let mut params = BTreeMap::new();

        params.insert(
            "name".to_string(),
            ParamSpec::new(ParamType::String, "Spell name", json!(config.name)),
        );
        params.insert(
            "level".to_string(),
            ParamSpec::new(
                ParamType::Number,
                "Spell level (1-10)",
                json!(config.level.unwrap_or(1)),
            )
            .with_bounds(Some(1.0), Some(10.0)),
        );

        if let Some(damage) = config
            .damage_config
            .as_ref()
            .filter(|_| config.has_effect(EffectKind::Damage))
        {
            params.insert(
                "damageConfig.damageTypes".to_string(),
                ParamSpec::new(
                    ParamType::Array,
                    "Damage types",
                    json!(damage.damage_types.clone().unwrap_or_else(|| vec!["fire".to_string()])),
                )
                .with_options(options(self.catalog.damage_types())),
            );
            params.insert(
                "damageConfig.diceNotation".to_string(),
                ParamSpec::new(
                    ParamType::String,
                    "Damage dice notation",
                    json!(damage.dice_notation.as_deref().unwrap_or("2d6")),
                ),
            );
        }

        if let Some(healing) = config
            .healing_config
            .as_ref()
            .filter(|_| config.has_effect(EffectKind::Healing))
        {
            params.insert(
                "healingConfig.diceNotation".to_string(),
                ParamSpec::new(
                    ParamType::String,
                    "Healing dice notation",
                    json!(healing.dice_notation.as_deref().unwrap_or("2d8")),
                ),
            );
            params.insert(
                "healingConfig.useAbsorptionShield".to_string(),
                ParamSpec::new(
                    ParamType::Boolean,
                    "Apply absorption shield",
                    json!(healing.use_absorption_shield),
                ),
            );
        }

        if let Some(targeting) = &config.targeting_config {
            params.insert(
                "targetingConfig.targetingType".to_string(),
                ParamSpec::new(
                    ParamType::String,
                    "Targeting type",
                    json!(targeting.targeting_type.as_deref().unwrap_or("single")),
                )
                .with_options(options(self.catalog.targeting_types())),
            );

            match targeting.targeting_type.as_deref() {
                Some("area") => {
                    params.insert(
                        "targetingConfig.areaShape".to_string(),
                        ParamSpec::new(
                            ParamType::String,
                            "Area shape",
                            json!(targeting.area_shape.as_deref().unwrap_or("circle")),
                        )
                        .with_options(options(self.catalog.aoe_shapes())),
                    );
                    params.insert(
                        "targetingConfig.areaSize".to_string(),
                        ParamSpec::new(
                            ParamType::Number,
                            "Area size (feet)",
                            json!(targeting.area_size.unwrap_or(20.0)),
                        )
                        .with_bounds(Some(5.0), Some(100.0)),
                    );
                }
                Some("multi") => {
                    params.insert(
                        "targetingConfig.targetCount".to_string(),
                        ParamSpec::new(
                            ParamType::Number,
                            "Target count",
                            json!(targeting.target_count.unwrap_or(3)),
                        )
                        .with_bounds(Some(1.0), Some(10.0)),
                    );
                }
                _ => {}
            }
        }

        if let Some(duration) = &config.duration_config {
            let duration_type = duration.duration_type.as_deref().unwrap_or(INSTANT_DURATION);
            params.insert(
                "durationConfig.durationType".to_string(),
                ParamSpec::new(ParamType::String, "Duration type", json!(duration_type))
                    .with_options(options(self.catalog.duration_types())),
            );

            if duration_type != INSTANT_DURATION {
                params.insert(
                    "durationConfig.durationValue".to_string(),
                    ParamSpec::new(
                        ParamType::Number,
                        format!("Duration value ({duration_type})"),
                        json!(duration.duration_value.unwrap_or(1.0)),
                    )
                    .with_bounds(Some(1.0), None),
                );
                params.insert(
                    "durationConfig.requiresConcentration".to_string(),
                    ParamSpec::new(
                        ParamType::Boolean,
                        "Requires concentration",
                        json!(duration.requires_concentration()),
                    ),
                );
            }
        }

        params
    }
}

fn options<T: CatalogItem>(entries: &[T]) -> Vec<ParamOption> {
    entries
        .iter()
        .map(|entry| ParamOption {
            value: entry.id().to_string(),
            label: entry.name().to_string(),
        })
        .collect()
}

// =============================================================================
// Instantiate Template
// =============================================================================

/// Use case: materialize a new spell from a template.
pub struct InstantiateTemplate {
    validate: Arc<ValidateSpell>,
}

impl InstantiateTemplate {
    pub fn new(validate: Arc<ValidateSpell>) -> Self {
        Self { validate }
    }

    /// Instantiate a typed template.
    ///
    /// `modifications` maps dotted field paths to replacement values. Missing
    /// intermediate objects are created.
    pub fn execute(
        &self,
        template: &SpellTemplate,
        modifications: &BTreeMap<String, Value>,
    ) -> Result<SpellConfig, TemplateError> {
        let document = serde_json::to_value(template)?;
        self.execute_document(document, modifications)
    }

    /// Instantiate a template given as JSON text.
    pub fn execute_json(
        &self,
        text: &str,
        modifications: &BTreeMap<String, Value>,
    ) -> Result<SpellConfig, TemplateError> {
        let document = serde_json::from_str(text).map_err(|e| {
            tracing::warn!(error = %e, "Rejected malformed template");
            TemplateError::Json(e)
        })?;
        self.execute_document(document, modifications)
    }

    /// Instantiate a template given as a JSON document.
    pub fn execute_document(
        &self,
        document: Value,
        modifications: &BTreeMap<String, Value>,
    ) -> Result<SpellConfig, TemplateError> {
        let result = self.materialize(document, modifications);
        if let Err(e) = &result {
            tracing::warn!(error = %e, "Rejected template instantiation");
        }
        result
    }

    fn materialize(
        &self,
        document: Value,
        modifications: &BTreeMap<String, Value>,
    ) -> Result<SpellConfig, TemplateError> {
        let Value::Object(mut root) = document else {
            return Err(TemplateError::NotATemplate);
        };
        for key in TEMPLATE_METADATA_KEYS {
            root.remove(key);
        }

        for (key, value) in modifications {
            let path = FieldPath::parse(key).map_err(|source| TemplateError::InvalidPath {
                path: key.clone(),
                source,
            })?;
            path.set(&mut root, value.clone())
                .map_err(|source| TemplateError::PathConflict {
                    path: key.clone(),
                    source,
                })?;
        }

        let mut config = SpellConfig::from_document(Value::Object(root))?;
        config.validation = Some(self.validate.execute(&config));
        Ok(config)
    }
}
