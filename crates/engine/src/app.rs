//! Engine composition.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use spellforge_domain::{
    GameCodeArtifact, ReferenceCatalog, ResourceCalculator, SpellConfig, SpellTemplate,
    StandardResourceCalculator, ValidationResult,
};

use crate::infrastructure::{clock::SystemClock, ports::ClockPort, settings::EngineSettings};
use crate::use_cases::{
    self, CompileSpell, InstantiateTemplate, MakeTemplate, RenderProse, SerializationError,
    SpellSerializer, TemplateError, ValidateSpell,
};

/// The spell engine.
///
/// Holds the shared reference catalog and every use case wired against it.
/// Cheap to share behind an `Arc`; nothing inside is mutable.
pub struct SpellEngine {
    pub catalog: Arc<ReferenceCatalog>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub validate: Arc<ValidateSpell>,
    pub serializer: SpellSerializer,
    pub make_template: MakeTemplate,
    pub instantiate_template: InstantiateTemplate,
    pub render_prose: RenderProse,
    pub compile: CompileSpell,
}

impl SpellEngine {
    /// Create an engine with all use cases wired up.
    pub fn new(
        catalog: Arc<ReferenceCatalog>,
        calculator: Arc<dyn ResourceCalculator>,
        clock: Arc<dyn ClockPort>,
        settings: EngineSettings,
    ) -> Self {
        let validate = Arc::new(ValidateSpell::new(
            catalog.clone(),
            calculator.clone(),
            settings.clone(),
        ));

        let use_cases = UseCases {
            validate: validate.clone(),
            serializer: SpellSerializer::new(validate.clone()),
            make_template: MakeTemplate::new(catalog.clone(), clock.clone()),
            instantiate_template: InstantiateTemplate::new(validate),
            render_prose: RenderProse::new(catalog.clone(), calculator.clone(), settings.clone()),
            compile: CompileSpell::new(calculator, clock, settings),
        };

        Self { catalog, use_cases }
    }

    /// Engine over the built-in catalog and cost rules, the system clock
    /// and settings read from the environment.
    pub fn standard() -> Self {
        let catalog = Arc::new(ReferenceCatalog::standard());
        let calculator: Arc<dyn ResourceCalculator> =
            Arc::new(StandardResourceCalculator::new(catalog.clone()));
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        Self::new(catalog, calculator, clock, EngineSettings::from_env())
    }

    pub fn validate(&self, config: &SpellConfig) -> ValidationResult {
        self.use_cases.validate.execute(config)
    }

    pub fn clean(&self, config: &SpellConfig) -> SpellConfig {
        use_cases::clean(config)
    }

    pub fn serialize(&self, config: &SpellConfig) -> Result<String, SerializationError> {
        self.use_cases.serializer.serialize(config)
    }

    pub fn deserialize(&self, text: &str) -> Result<SpellConfig, SerializationError> {
        self.use_cases.serializer.deserialize(text)
    }

    pub fn make_template(&self, config: &SpellConfig, name: Option<&str>) -> SpellTemplate {
        self.use_cases.make_template.execute(config, name)
    }

    pub fn instantiate(
        &self,
        template: &SpellTemplate,
        modifications: &BTreeMap<String, Value>,
    ) -> Result<SpellConfig, TemplateError> {
        self.use_cases
            .instantiate_template
            .execute(template, modifications)
    }

    pub fn render_prose(&self, config: &SpellConfig) -> String {
        self.use_cases.render_prose.execute(config)
    }

    pub fn compile(&self, config: &SpellConfig) -> GameCodeArtifact {
        self.use_cases.compile.execute(config)
    }
}
