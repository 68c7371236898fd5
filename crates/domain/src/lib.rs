//! # Spellforge Domain
//!
//! The spell configuration model and everything needed to reason about it
//! without side effects: the reference catalog, dice notation, resource cost
//! rules and validation report types.
//!
//! This crate performs no I/O, reads no environment and emits no logs.

pub mod entities;
pub mod error;
pub mod game_systems;
pub mod types;
pub mod value_objects;

pub use entities::{
    AoeSpec, ChainConfig, CompiledEffects, CompiledTargeting, Components, ControlConfig,
    ControlEffect, CostOption, CriticalConfig, DamageConfig, DamageEffect, DurationConfig,
    EffectBinding, EffectKind, EffectTarget, GameCodeArtifact, HealingConfig, HealingEffect,
    ParamOption, ParamSpec, ParamType, PersistentConfig, ProcConfig, ResourceCost,
    ResourceOptions, ShieldConfig, ShieldSpec, SpellConfig, SpellTemplate, StatusConfig,
    StatusEffect, TargetingConfig, TargetingTag, UtilityConfig, UtilityEffect, INSTANT_DURATION,
    PERSISTENT_TYPES, TEMPLATE_METADATA_KEYS,
};

pub use error::DomainError;

pub use game_systems::{
    ClassResourceCost, ResourceCalculator, ResourceCosts, StandardResourceCalculator,
    CLASS_RESOURCE_TYPES,
};
#[cfg(any(test, feature = "testing"))]
pub use game_systems::MockResourceCalculator;

pub use types::{
    CatalogEntry, CatalogError, CatalogItem, Diagnostic, EffectTypeEntry, ReferenceCatalog,
    Severity, StatusEffectEntry, UtilitySubtype, UtilityTypeEntry, ValidationPhase,
    ValidationResult,
};

pub use value_objects::{
    average_value, is_valid_dice_notation, DiceFormula, DiceParseError, FieldPath,
    FieldPathError, FALLBACK_AVERAGE,
};
