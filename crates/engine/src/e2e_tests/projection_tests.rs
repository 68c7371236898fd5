//! Prose and game-code projections over arbitrary documents.

use std::sync::Arc;
use std::thread;

use serde_json::json;

use spellforge_domain::SpellConfig;

use crate::test_fixtures::{engine, fireball, healing_word};

/// Every configured effect at once, with ids the catalog does not know.
fn kitchen_sink() -> SpellConfig {
    serde_json::from_value(json!({
        "name": "Everything Everywhere",
        "level": 9,
        "effectTypes": ["damage", "healing", "buff", "debuff", "utility", "control", "portal"],
        "damageConfig": {
            "damageTypes": ["plasma", "fire"],
            "diceNotation": "10d10",
            "useChainEffect": true,
            "chainConfig": {"targets": 3, "falloffType": "percentage"},
            "useCriticalEffect": true,
            "criticalConfig": {"criticalMultiplier": 3, "effects": ["explode"]}
        },
        "healingConfig": {
            "healingType": "mystic",
            "diceNotation": "1d4",
            "useAbsorptionShield": true,
            "shieldConfig": {"shieldType": "prism", "reflectionType": "mirror"}
        },
        "buffConfig": {"statModifiers": {"luck": 3}},
        "debuffConfig": {"statusEffects": ["hexed"]},
        "utilityConfig": {"utilityType": "weather", "parameters": {"wind_speed": "gale"}},
        "controlConfig": {"controlType": "petrify"},
        "targetingConfig": {"targetingType": "cloud", "areaShape": "blob"},
        "durationConfig": {"durationType": "eons", "durationValue": 2},
        "persistentConfig": {"isPersistent": true, "persistentType": "trigger"},
        "targetingMode": "tagged",
        "targetingTags": {"healing": {"targetOption": "allies"}},
        "resourceOptions": {"primaryClassResource": "faith"}
    }))
    .expect("valid spell json")
}

#[test]
fn test_prose_falls_back_to_raw_ids() {
    let engine = engine();
    let mut spell = kitchen_sink();
    spell.validation = Some(engine.validate(&spell));
    let prose = engine.render_prose(&spell);

    assert!(prose.starts_with("Everything Everywhere (Level 9)\n\n"));
    assert!(prose.contains("• Damage: plasma and Fire (10d10, avg. 55.0)"));
    assert!(prose.contains("\n  - Chains to up to 3 additional targets with percentage damage reduction"));
    assert!(prose.contains("\n  - Critical hits deal 3× damage and may cause explode"));
    assert!(prose.contains("• Healing: mystic healing (1d4, avg. 2.5)\n  - Applies absorption shield"));
    assert!(prose.contains("\n  - Shield reflects damage (reflection)"));
    assert!(prose.contains("    • luck: +3\n"));
    assert!(prose.contains("    • hexed\n"));
    assert!(prose.contains("• Utility: weather\n"));
    assert!(prose.contains("• Control: petrify\n"));
    assert!(prose.contains("• portal\n"));
    assert!(prose.contains("Targeting: cloud\n"));
    assert!(prose.contains("Duration: eons (2 eons)\n\n"));
    assert!(prose.contains("\nPersistent Effects:\n• Trigger Effect: \n"));
    assert!(prose.contains("\nConfiguration Errors:\n"));
}

#[test]
fn test_effect_blocks_keep_fixed_order() {
    let mut spell = kitchen_sink();
    spell.effect_types = Some(vec![
        "portal".into(),
        "utility".into(),
        "debuff".into(),
        "buff".into(),
        "healing".into(),
        "damage".into(),
    ]);
    let prose = engine().render_prose(&spell);

    let position = |marker: &str| {
        prose
            .find(marker)
            .unwrap_or_else(|| panic!("missing {marker:?} in:\n{prose}"))
    };
    let order = [
        position("• Damage:"),
        position("• Healing:"),
        position("• Buffs:"),
        position("• Debuffs:"),
        position("• Utility:"),
        position("• portal"),
    ];
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{order:?}");
}

#[test]
fn test_compiler_never_rejects() {
    let artifact = engine().compile(&kitchen_sink());

    assert_eq!(artifact.level, 9);
    let targeting = artifact.targeting.expect("targeting");
    assert_eq!(targeting.targeting_type, "cloud");
    assert!(targeting.aoe.is_none());
    assert_eq!(targeting.range, 30);
    assert_eq!(
        artifact.effects.healing.and_then(|h| h.targeting).map(|t| t.target),
        Some("allies".to_string())
    );
    assert!(artifact.effects.damage.and_then(|d| d.targeting).is_none());
    assert_eq!(
        artifact.effects.control.map(|c| (c.control_type, c.duration)),
        Some(("petrify".to_string(), 1))
    );
    assert_eq!(
        artifact.resources.class_resources.map(|c| c.cost),
        Some(0)
    );
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = Arc::new(engine());
    let spells = [fireball(), healing_word(), kitchen_sink()];
    let expected: Vec<_> = spells.iter().map(|s| engine.validate(s)).collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            let engine = engine.clone();
            let spells = &spells;
            let expected = &expected;
            scope.spawn(move || {
                for (spell, report) in spells.iter().zip(expected) {
                    assert_eq!(&engine.validate(spell), report);
                    let _ = engine.render_prose(spell);
                    let _ = engine.compile(spell);
                }
            });
        }
    });
}
