//! End-to-end authoring scenarios.

use std::collections::BTreeMap;

use serde_json::json;

use spellforge_domain::SpellConfig;

use crate::test_fixtures::{engine, fireball};

fn spell(value: serde_json::Value) -> SpellConfig {
    serde_json::from_value(value).expect("valid spell json")
}

/// Level 1 single-target `2d6` fire bolt: on-curve and valid.
fn fire_bolt() -> SpellConfig {
    spell(json!({
        "name": "Fire Bolt",
        "level": 1,
        "effectTypes": ["damage"],
        "damageConfig": {"damageTypes": ["fire"], "diceNotation": "2d6"},
        "targetingConfig": {"targetingType": "single", "rangeDistance": 120},
        "durationConfig": {"durationType": "instant"}
    }))
}

#[test]
fn test_selected_effect_without_config_fails_twice() {
    let result = engine().validate(&spell(json!({
        "name": "Hollow Strike",
        "level": 2,
        "effectTypes": ["damage"],
        "targetingConfig": {"targetingType": "single"},
        "durationConfig": {"durationType": "instant"}
    })));

    assert!(!result.valid);
    assert!(result.has_error("damageConfig"));
    assert!(result.has_error("missingDamageConfig"));
}

#[test]
fn test_oversized_area_is_advisory() {
    let mut spell = fireball();
    spell.targeting_config = serde_json::from_value(json!({
        "targetingType": "area",
        "areaShape": "circle",
        "areaSize": 150
    }))
    .expect("valid targeting json");

    let result = engine().validate(&spell);
    assert!(result.valid, "unexpected errors: {:?}", result.errors);
    assert!(result.has_warning("areaSize"));
}

#[test]
fn test_area_damage_with_control_warns() {
    let mut spell = fireball();
    spell.effect_types = Some(vec!["damage".into(), "control".into()]);
    spell.control_config = serde_json::from_value(json!({"controlType": "knockback", "duration": 1}))
        .expect("valid control json");

    let result = engine().validate(&spell);
    assert!(result.has_warning("aoeControlDamage"));
}

#[test]
fn test_template_exposes_dice_parameter() {
    let template = engine().make_template(&fire_bolt(), None);
    assert_eq!(
        template.parameter_options["damageConfig.diceNotation"].default,
        json!("2d6")
    );
}

#[test]
fn test_instantiated_dice_change_is_revalidated() {
    let engine = engine();
    let source = fire_bolt();
    assert!(!engine.validate(&source).has_warning("highDamage"));

    let template = engine.make_template(&source, None);
    let modifications = BTreeMap::from([(
        "damageConfig.diceNotation".to_string(),
        json!("4d6"),
    )]);
    let spell = engine
        .instantiate(&template, &modifications)
        .expect("instantiates");

    assert_eq!(
        spell.damage_config.as_ref().and_then(|d| d.dice_notation.as_deref()),
        Some("4d6")
    );
    let report = spell.validation.expect("report attached");
    assert_eq!(
        report.warnings["highDamage"],
        "Damage (est. 14) is much higher than expected (5) for level 1"
    );
}

#[test]
fn test_draft_to_artifact_workflow() {
    let engine = engine();

    // Author a draft missing its targeting, fix it, then ship it.
    let mut draft = fire_bolt();
    draft.targeting_config = None;
    let text = engine.serialize(&draft).expect("serializes");
    let loaded = engine.deserialize(&text).expect("parses");
    let report = loaded.validation.clone().expect("report attached");
    assert!(report.has_error("targetingConfig"));

    let mut fixed = loaded;
    fixed.targeting_config = fire_bolt().targeting_config;
    let report = engine.validate(&fixed);
    assert!(report.valid, "unexpected errors: {:?}", report.errors);

    let prose = engine.render_prose(&fixed);
    assert!(prose.contains("\nConfiguration Errors:\n• targetingConfig: "));

    let artifact = engine.compile(&fixed);
    assert_eq!(artifact.name, "Fire Bolt");
    assert_eq!(artifact.targeting.map(|t| t.range), Some(120));
}
