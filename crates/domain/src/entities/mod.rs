//! Domain entities: the authored spell document and its derived projections.

mod game_code;
mod spell;
mod template;
mod wire;

pub use game_code::{
    AoeSpec, CompiledEffects, CompiledTargeting, ControlEffect, DamageEffect, EffectTarget,
    GameCodeArtifact, HealingEffect, ShieldSpec, StatusEffect, UtilityEffect,
};
pub use spell::{
    ChainConfig, Components, ControlConfig, CostOption, CriticalConfig, DamageConfig,
    DurationConfig, EffectBinding, EffectKind, HealingConfig, PersistentConfig, ProcConfig,
    ResourceCost, ResourceOptions, ShieldConfig, SpellConfig, StatusConfig, TargetingConfig,
    TargetingTag, UtilityConfig, INSTANT_DURATION, PERSISTENT_TYPES,
};
pub use template::{ParamOption, ParamSpec, ParamType, SpellTemplate, TEMPLATE_METADATA_KEYS};
