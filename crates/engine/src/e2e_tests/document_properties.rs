//! Properties that must hold across clean, serialize, template and validate.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::json;

use spellforge_domain::{is_valid_dice_notation, SpellConfig};

use crate::test_fixtures::{engine, fireball, healing_word};

/// Fixtures plus spells carrying internal, unknown, mistyped and derived fields.
fn corpus() -> Vec<SpellConfig> {
    let mut decorated = fireball();
    decorated.extra.insert("_editorState".into(), json!({"step": 4}));
    decorated.extra.insert("flavorText".into(), json!("It smells of sulfur."));
    decorated.resource_cost = serde_json::from_value(json!({"actionPoints": 9}))
        .expect("valid resource cost json");
    decorated.validation = Some(Default::default());

    let broken: SpellConfig = serde_json::from_value(json!({
        "effectTypes": ["damage", "buff", "mystery"],
        "damageConfig": {"diceNotation": "lots"},
        "buffConfig": {"statusEffects": ["glowing"]},
        "durationConfig": {"durationType": "instant", "requiresConcentration": true}
    }))
    .expect("valid spell json");

    let mistyped = SpellConfig::from_document(json!({
        "name": "Frost Nova",
        "level": "3",
        "effectTypes": ["damage"],
        "damageConfig": {"diceNotation": "2d8", "secondaryEffect": {"slow": 10}},
        "targetingConfig": {"targetingType": "area", "areaSize": 10, "aoeParameters": {"radius": 10}},
        "durationConfig": {"durationType": "instant", "requiresConcentration": "yes"}
    }))
    .expect("object documents always read");

    vec![fireball(), healing_word(), decorated, broken, mistyped]
}

fn error_keys(config: &SpellConfig) -> BTreeSet<String> {
    engine().validate(config).errors.into_keys().collect()
}

#[test]
fn test_clean_is_idempotent() {
    let engine = engine();
    for spell in corpus() {
        let once = engine.clean(&spell);
        assert_eq!(engine.clean(&once), once);
    }
}

#[test]
fn test_serialize_round_trip() {
    let engine = engine();
    for spell in corpus() {
        let cleaned = engine.clean(&spell);
        let text = engine.serialize(&cleaned).expect("serializes");
        let mut back = engine.deserialize(&text).expect("parses");

        let report = back.validation.take().expect("report attached");
        assert_eq!(back, cleaned);
        assert_eq!(report, engine.validate(&cleaned));
    }
}

#[test]
fn test_validation_is_deterministic() {
    let engine = engine();
    for spell in corpus() {
        assert_eq!(engine.validate(&spell), engine.validate(&spell));
    }
}

#[test]
fn test_template_round_trip() {
    let engine = engine();
    for spell in corpus() {
        let cleaned = engine.clean(&spell);
        let template = engine.make_template(&spell, None);
        let mut instance = engine
            .instantiate(&template, &BTreeMap::new())
            .expect("instantiates");

        let report = instance.validation.take().expect("report attached");
        assert_eq!(instance, cleaned);
        assert_eq!(report, engine.validate(&cleaned));
    }
}

#[test]
fn test_supplying_missing_fields_only_removes_errors() {
    let complete = fireball();
    let strip: [fn(&mut SpellConfig); 4] = [
        |s| s.name = None,
        |s| s.damage_config = None,
        |s| s.targeting_config = None,
        |s| s.duration_config = None,
    ];

    for remove in strip {
        let mut incomplete = complete.clone();
        remove(&mut incomplete);
        let before = error_keys(&incomplete);
        let after = error_keys(&complete);
        assert!(!before.is_empty());
        assert!(after.is_subset(&before), "{after:?} not within {before:?}");
    }

    // Filling fields one at a time shrinks the error set monotonically.
    let mut spell = SpellConfig {
        effect_types: complete.effect_types.clone(),
        ..SpellConfig::default()
    };
    let mut previous = error_keys(&spell);
    let fill: [fn(&mut SpellConfig, &SpellConfig); 5] = [
        |s, c| s.name = c.name.clone(),
        |s, c| s.level = c.level,
        |s, c| s.damage_config = c.damage_config.clone(),
        |s, c| s.targeting_config = c.targeting_config.clone(),
        |s, c| s.duration_config = c.duration_config.clone(),
    ];
    for supply in fill {
        supply(&mut spell, &complete);
        let current = error_keys(&spell);
        assert!(current.is_subset(&previous), "{current:?} not within {previous:?}");
        previous = current;
    }
    assert!(previous.is_empty(), "leftover errors: {previous:?}");
}

#[test]
fn test_boundaries() {
    let engine = engine();
    for (level, rejected) in [(0, true), (1, false), (10, false), (11, true)] {
        let mut spell = fireball();
        spell.level = Some(level);
        assert_eq!(engine.validate(&spell).has_error("level"), rejected, "level {level}");
    }

    assert!(is_valid_dice_notation("2d6+3"));
    for bad in ["2d", "d6", "six"] {
        assert!(!is_valid_dice_notation(bad), "{bad}");
        let mut spell = fireball();
        if let Some(damage) = spell.damage_config.as_mut() {
            damage.dice_notation = Some(bad.into());
        }
        assert!(engine.validate(&spell).has_error("damageDice"), "{bad}");
    }

    let mut spell = fireball();
    spell.duration_config = serde_json::from_value(json!({
        "durationType": "instant",
        "requiresConcentration": true
    }))
    .expect("valid duration json");
    assert!(engine.validate(&spell).has_error("concentration"));
}
