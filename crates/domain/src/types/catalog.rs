//! Reference catalog of valid enumeration ids and their display metadata.
//!
//! The catalog is built once (either [`ReferenceCatalog::standard`] or an
//! alternate rule set loaded with [`ReferenceCatalog::from_json`]) and is never
//! mutated afterwards. Every table is a plain ordered list; lookups are linear,
//! which is fine at these sizes and keeps the declared order available for
//! option lists.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised while loading an alternate catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Duplicate id '{id}' in catalog table '{table}'")]
    DuplicateId { table: &'static str, id: String },
}

/// Anything the catalog can look up by id.
pub trait CatalogItem {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

/// A plain id/name/description row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn new(id: &str, name: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// An effect type row, carrying its base action-point cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectTypeEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_action_point_cost")]
    pub action_point_cost: i64,
}

fn default_action_point_cost() -> i64 {
    1
}

/// A status effect row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEffectEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Beneficial (buff) as opposed to harmful (debuff)
    pub positive: bool,
    /// Spells applying this effect must supply `effectParameters[id]`
    #[serde(default)]
    pub requires_parameters: bool,
}

/// A utility subtype and the parameter names it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilitySubtype {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<String>,
}

/// A utility type with its allowed subtypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityTypeEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub subtypes: Vec<UtilitySubtype>,
}

impl UtilityTypeEntry {
    pub fn subtype(&self, id: &str) -> Option<&UtilitySubtype> {
        self.subtypes.iter().find(|s| s.id == id)
    }
}

macro_rules! impl_catalog_item {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CatalogItem for $ty {
                fn id(&self) -> &str {
                    &self.id
                }
                fn name(&self) -> &str {
                    &self.name
                }
            }
        )*
    };
}

impl_catalog_item!(
    CatalogEntry,
    EffectTypeEntry,
    StatusEffectEntry,
    UtilitySubtype,
    UtilityTypeEntry
);

fn find<'a, T: CatalogItem>(table: &'a [T], id: &str) -> Option<&'a T> {
    table.iter().find(|item| item.id() == id)
}

/// Immutable lookup tables for one rule-set version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceCatalog {
    #[serde(default)]
    effect_types: Vec<EffectTypeEntry>,
    #[serde(default)]
    damage_types: Vec<CatalogEntry>,
    #[serde(default)]
    targeting_types: Vec<CatalogEntry>,
    #[serde(default)]
    aoe_shapes: Vec<CatalogEntry>,
    #[serde(default)]
    duration_types: Vec<CatalogEntry>,
    #[serde(default)]
    status_effects: Vec<StatusEffectEntry>,
    #[serde(default)]
    stat_modifiers: Vec<CatalogEntry>,
    #[serde(default)]
    utility_types: Vec<UtilityTypeEntry>,
    #[serde(default)]
    critical_effects: Vec<CatalogEntry>,
    #[serde(default)]
    shield_types: Vec<CatalogEntry>,
    #[serde(default)]
    reflection_types: Vec<CatalogEntry>,
    #[serde(default)]
    healing_types: Vec<CatalogEntry>,
    #[serde(default)]
    control_types: Vec<CatalogEntry>,
}

impl ReferenceCatalog {
    /// Load an alternate rule set. Every table must have unique ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.check_unique_ids()?;
        Ok(catalog)
    }

    fn check_unique_ids(&self) -> Result<(), CatalogError> {
        fn unique<T: CatalogItem>(table: &'static str, rows: &[T]) -> Result<(), CatalogError> {
            let mut seen = HashSet::new();
            for row in rows {
                if !seen.insert(row.id()) {
                    return Err(CatalogError::DuplicateId {
                        table,
                        id: row.id().to_string(),
                    });
                }
            }
            Ok(())
        }

        unique("effectTypes", &self.effect_types)?;
        unique("damageTypes", &self.damage_types)?;
        unique("targetingTypes", &self.targeting_types)?;
        unique("aoeShapes", &self.aoe_shapes)?;
        unique("durationTypes", &self.duration_types)?;
        unique("statusEffects", &self.status_effects)?;
        unique("statModifiers", &self.stat_modifiers)?;
        unique("utilityTypes", &self.utility_types)?;
        unique("criticalEffects", &self.critical_effects)?;
        unique("shieldTypes", &self.shield_types)?;
        unique("reflectionTypes", &self.reflection_types)?;
        unique("healingTypes", &self.healing_types)?;
        unique("controlTypes", &self.control_types)?;
        for utility in &self.utility_types {
            unique("utilityTypes.subtypes", &utility.subtypes)?;
        }
        Ok(())
    }

    // Tables, in declared order

    pub fn effect_types(&self) -> &[EffectTypeEntry] {
        &self.effect_types
    }
    pub fn damage_types(&self) -> &[CatalogEntry] {
        &self.damage_types
    }
    pub fn targeting_types(&self) -> &[CatalogEntry] {
        &self.targeting_types
    }
    pub fn aoe_shapes(&self) -> &[CatalogEntry] {
        &self.aoe_shapes
    }
    pub fn duration_types(&self) -> &[CatalogEntry] {
        &self.duration_types
    }
    pub fn status_effects(&self) -> &[StatusEffectEntry] {
        &self.status_effects
    }
    pub fn stat_modifiers(&self) -> &[CatalogEntry] {
        &self.stat_modifiers
    }
    pub fn utility_types(&self) -> &[UtilityTypeEntry] {
        &self.utility_types
    }
    pub fn critical_effects(&self) -> &[CatalogEntry] {
        &self.critical_effects
    }
    pub fn shield_types(&self) -> &[CatalogEntry] {
        &self.shield_types
    }
    pub fn reflection_types(&self) -> &[CatalogEntry] {
        &self.reflection_types
    }
    pub fn healing_types(&self) -> &[CatalogEntry] {
        &self.healing_types
    }
    pub fn control_types(&self) -> &[CatalogEntry] {
        &self.control_types
    }

    // Lookups by id

    pub fn effect_type(&self, id: &str) -> Option<&EffectTypeEntry> {
        find(&self.effect_types, id)
    }
    pub fn damage_type(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.damage_types, id)
    }
    pub fn targeting_type(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.targeting_types, id)
    }
    pub fn aoe_shape(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.aoe_shapes, id)
    }
    pub fn duration_type(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.duration_types, id)
    }
    pub fn status_effect(&self, id: &str) -> Option<&StatusEffectEntry> {
        find(&self.status_effects, id)
    }
    pub fn stat_modifier(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.stat_modifiers, id)
    }
    pub fn utility_type(&self, id: &str) -> Option<&UtilityTypeEntry> {
        find(&self.utility_types, id)
    }
    pub fn critical_effect(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.critical_effects, id)
    }
    pub fn shield_type(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.shield_types, id)
    }
    pub fn reflection_type(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.reflection_types, id)
    }
    pub fn healing_type(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.healing_types, id)
    }
    pub fn control_type(&self, id: &str) -> Option<&CatalogEntry> {
        find(&self.control_types, id)
    }

    /// The built-in rule set.
    pub fn standard() -> Self {
        let e = CatalogEntry::new;

        Self {
            effect_types: vec![
                effect("damage", "Damage", "Deal damage to targets", 1),
                effect("healing", "Healing", "Restore health to targets", 1),
                effect("buff", "Buff", "Enhance target abilities", 1),
                effect("debuff", "Debuff", "Weaken target abilities", 1),
                effect("control", "Control", "Restrict target movement or actions", 2),
                effect("utility", "Utility", "Non-combat effects", 1),
                effect("summoning", "Summoning", "Conjure allies", 2),
                effect("transformation", "Transformation", "Change form or nature", 2),
                effect("purification", "Purification", "Remove harmful effects", 1),
                effect("restoration", "Restoration", "Restore resources", 1),
            ],
            damage_types: vec![
                e("acid", "Acid", "Corrosive damage that dissolves materials"),
                e("bludgeoning", "Bludgeoning", "Blunt force trauma damage"),
                e("cold", "Cold", "Freezing damage from extreme low temperatures"),
                e("fire", "Fire", "Burning damage from flames and heat"),
                e("force", "Force", "Pure magical energy damage"),
                e("lightning", "Lightning", "Electrical damage"),
                e("necrotic", "Necrotic", "Life-draining damage that withers matter"),
                e("piercing", "Piercing", "Damage from puncturing and impaling"),
                e("poison", "Poison", "Toxic damage from venom and toxins"),
                e("psychic", "Psychic", "Mental damage that affects the mind"),
                e("radiant", "Radiant", "Divine energy that burns and purifies"),
                e("slashing", "Slashing", "Damage from cutting and tearing"),
                e("thunder", "Thunder", "Concussive damage from sound waves"),
            ],
            targeting_types: vec![
                e("self", "Self", "Target only yourself"),
                e("single", "Single Target", "Target a single creature or object"),
                e("multi", "Multiple Targets", "Target several individual creatures"),
                e("area", "Area", "Affect everything within an area"),
                e("touch", "Touch", "Target a creature you touch"),
            ],
            aoe_shapes: vec![
                e("circle", "Circle", "Circular area of effect"),
                e("cone", "Cone", "Conical area of effect"),
                e("line", "Line", "Linear area of effect"),
                e("cube", "Cube", "Cubic area of effect"),
                e("sphere", "Sphere", "Spherical area of effect"),
            ],
            duration_types: vec![
                e("instant", "Instantaneous", "Effect happens once and immediately ends"),
                e("rounds", "Rounds", "Lasts a number of combat rounds"),
                e("minutes", "Minutes", "Lasts a number of minutes"),
                e("hours", "Hours", "Lasts a number of hours"),
                e("days", "Days", "Lasts a number of days"),
            ],
            status_effects: vec![
                status("haste", "Haste", "Target gains additional actions", true, false),
                status("invisibility", "Invisibility", "Target becomes invisible", true, false),
                status("regeneration", "Regeneration", "Target regenerates health over time", true, true),
                status("flying", "Flying", "Target can fly", true, false),
                status("blessed", "Blessed", "Target adds a bonus to rolls", true, false),
                status("stunned", "Stunned", "Target cannot take actions", false, false),
                status("poisoned", "Poisoned", "Target takes damage over time", false, true),
                status("blinded", "Blinded", "Target cannot see", false, false),
                status("charmed", "Charmed", "Target is friendly to the caster", false, false),
                status("slowed", "Slowed", "Target loses movement and actions", false, false),
                status("silenced", "Silenced", "Target cannot cast spells", false, false),
                status("weakened", "Weakened", "Target deals reduced damage", false, true),
            ],
            stat_modifiers: vec![
                e("strength", "Strength", "Modify strength"),
                e("agility", "Agility", "Modify agility"),
                e("constitution", "Constitution", "Modify constitution"),
                e("intelligence", "Intelligence", "Modify intelligence"),
                e("spirit", "Spirit", "Modify spirit"),
                e("charisma", "Charisma", "Modify charisma"),
                e("armor", "Armor", "Modify armor value"),
                e("speed", "Speed", "Modify movement speed"),
                e("attack", "Attack", "Modify attack rolls"),
                e("defense", "Defense", "Modify defense rolls"),
                e("critical", "Critical Chance", "Modify critical hit chance"),
                e("resistance", "Resistance", "Modify damage resistance"),
            ],
            utility_types: vec![
                utility(
                    "movement",
                    "Movement",
                    "Reposition creatures",
                    vec![
                        subtype("teleport", "Teleport", &["distance"]),
                        subtype("dash", "Dash", &["distance"]),
                        subtype("levitate", "Levitate", &["height"]),
                    ],
                ),
                utility(
                    "detection",
                    "Detection",
                    "Reveal hidden things",
                    vec![
                        subtype("detect_magic", "Detect Magic", &[]),
                        subtype("detect_creatures", "Detect Creatures", &["radius"]),
                        subtype("scrying", "Scrying", &["range"]),
                    ],
                ),
                utility(
                    "illusion",
                    "Illusion",
                    "Deceive the senses",
                    vec![
                        subtype("minor_illusion", "Minor Illusion", &["size"]),
                        subtype("disguise", "Disguise", &[]),
                        subtype("mirror_image", "Mirror Image", &["copies"]),
                    ],
                ),
                utility(
                    "manipulation",
                    "Manipulation",
                    "Move or reshape objects",
                    vec![
                        subtype("telekinesis", "Telekinesis", &["weight"]),
                        subtype("shape_earth", "Shape Earth", &["volume"]),
                        subtype("open_lock", "Open Lock", &[]),
                    ],
                ),
                utility(
                    "communication",
                    "Communication",
                    "Exchange information",
                    vec![
                        subtype("telepathy", "Telepathy", &["range"]),
                        subtype("tongues", "Tongues", &[]),
                        subtype("message", "Message", &["range"]),
                    ],
                ),
            ],
            critical_effects: vec![
                e("increased_damage", "Increased Damage", "Critical hits deal extra damage"),
                e("additional_effect", "Additional Effect", "Critical hits apply a status effect"),
                e("extended_duration", "Extended Duration", "Critical hits extend the duration"),
                e("reduced_cost", "Reduced Cost", "Critical hits refund part of the cost"),
            ],
            shield_types: vec![
                e("all_damage", "Absorption Shield", "Absorbs damage of any type"),
                e("spell_damage", "Spell Shield", "Absorbs magical damage"),
                e("physical_damage", "Physical Shield", "Absorbs physical damage"),
                e("specific_damage", "Elemental Shield", "Absorbs one damage type"),
            ],
            reflection_types: vec![
                e("same", "Same Type", "Reflect damage of the same type"),
                e("force", "Force", "Reflect damage as force damage"),
                e("radiant", "Radiant", "Reflect damage as radiant damage"),
            ],
            healing_types: vec![
                e("direct", "Direct", "Heals immediately"),
                e("over_time", "Over Time", "Heals across several ticks"),
                e("vampiric", "Vampiric", "Heals from damage dealt"),
                e("area", "Area", "Heals everyone in an area"),
            ],
            control_types: vec![
                e("stun", "Stun", "Target cannot act"),
                e("root", "Root", "Target cannot move"),
                e("silence", "Silence", "Target cannot cast"),
                e("knockback", "Knockback", "Target is pushed away"),
                e("fear", "Fear", "Target flees"),
                e("charm", "Charm", "Target fights for the caster"),
                e("sleep", "Sleep", "Target falls asleep"),
            ],
        }
    }
}

impl Default for ReferenceCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn effect(id: &str, name: &str, description: &str, action_point_cost: i64) -> EffectTypeEntry {
    EffectTypeEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        action_point_cost,
    }
}

fn status(
    id: &str,
    name: &str,
    description: &str,
    positive: bool,
    requires_parameters: bool,
) -> StatusEffectEntry {
    StatusEffectEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        positive,
        requires_parameters,
    }
}

fn subtype(id: &str, name: &str, parameters: &[&str]) -> UtilitySubtype {
    UtilitySubtype {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        parameters: parameters.iter().map(|p| p.to_string()).collect(),
    }
}

fn utility(id: &str, name: &str, description: &str, subtypes: Vec<UtilitySubtype>) -> UtilityTypeEntry {
    UtilityTypeEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        subtypes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookups() {
        let catalog = ReferenceCatalog::standard();
        assert_eq!(catalog.damage_type("fire").map(|d| d.name.as_str()), Some("Fire"));
        assert!(catalog.damage_type("plasma").is_none());
        assert_eq!(catalog.duration_type("instant").map(|d| d.name.as_str()), Some("Instantaneous"));
        assert_eq!(catalog.effect_type("control").map(|e| e.action_point_cost), Some(2));
        assert_eq!(catalog.damage_types().len(), 13);
    }

    #[test]
    fn test_status_effect_flags() {
        let catalog = ReferenceCatalog::standard();
        let poisoned = catalog.status_effect("poisoned").unwrap();
        assert!(!poisoned.positive);
        assert!(poisoned.requires_parameters);
        assert!(catalog.status_effect("haste").unwrap().positive);
    }

    #[test]
    fn test_utility_subtypes() {
        let catalog = ReferenceCatalog::standard();
        let movement = catalog.utility_type("movement").unwrap();
        assert_eq!(movement.subtype("teleport").unwrap().parameters, vec!["distance"]);
        assert!(movement.subtype("scrying").is_none());
    }

    #[test]
    fn test_from_json_round_trips_standard() {
        let json = serde_json::to_string(&ReferenceCatalog::standard()).unwrap();
        let loaded = ReferenceCatalog::from_json(&json).unwrap();
        assert_eq!(loaded, ReferenceCatalog::standard());
    }

    #[test]
    fn test_from_json_partial_tables() {
        let catalog = ReferenceCatalog::from_json(
            r#"{"damageTypes": [{"id": "plasma", "name": "Plasma"}]}"#,
        )
        .unwrap();
        assert!(catalog.damage_type("plasma").is_some());
        assert!(catalog.damage_type("fire").is_none());
        assert!(catalog.effect_types().is_empty());
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let err = ReferenceCatalog::from_json(
            r#"{"aoeShapes": [{"id": "cone", "name": "Cone"}, {"id": "cone", "name": "Wide Cone"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { table: "aoeShapes", .. }));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            ReferenceCatalog::from_json("{not json"),
            Err(CatalogError::Malformed(_))
        ));
    }
}
