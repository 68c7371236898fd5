//! Human-readable spell descriptions.
//!
//! Rendering never fails: unknown catalog ids fall back to the raw id and
//! missing optional fields fall back to the engine defaults.

use std::fmt::Write as _;
use std::sync::Arc;

use serde_json::Value;

use spellforge_domain::{
    average_value, CatalogItem, DamageConfig, EffectKind, HealingConfig, PersistentConfig,
    ReferenceCatalog, ResourceCalculator, ResourceCosts, SpellConfig, StatusConfig,
    UtilityConfig, ValidationResult,
};

use crate::infrastructure::settings::EngineSettings;

pub const DEFAULT_SPELL_ICON: &str = "spell_magic_polymorphrapid";
pub const UNNAMED_SPELL: &str = "Unnamed Spell";
const DEFAULT_CRITICAL_MULTIPLIER: f64 = 2.0;

/// Use case: render a spell as plain text.
pub struct RenderProse {
    catalog: Arc<ReferenceCatalog>,
    calculator: Arc<dyn ResourceCalculator>,
    settings: EngineSettings,
}

impl RenderProse {
    pub fn new(
        catalog: Arc<ReferenceCatalog>,
        calculator: Arc<dyn ResourceCalculator>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            catalog,
            calculator,
            settings,
        }
    }

    /// Render `config`, including any attached validation report.
    pub fn execute(&self, config: &SpellConfig) -> String {
        let mut out = String::new();

        out.push_str(config.name.as_deref().unwrap_or(UNNAMED_SPELL));
        if let Some(level) = config.level {
            let _ = write!(out, " (Level {level})");
        }
        out.push_str("\n\n");

        if let Some(description) = config.description.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(description);
            out.push_str("\n\n");
        }

        self.summary(config, &mut out);
        cost_lines(&self.calculator.calculate(config), &mut out);
        self.targeting_line(config, &mut out);
        self.duration_line(config, &mut out);
        self.effects(config, &mut out);

        if let Some(persistent) = config.persistent_config.as_ref().filter(|p| p.is_persistent) {
            persistent_block(persistent, &mut out);
        }
        if let Some(report) = &config.validation {
            report_sections(report, &mut out);
        }

        out
    }

    fn summary(&self, config: &SpellConfig, out: &mut String) {
        let name = config.name.as_deref().unwrap_or(UNNAMED_SPELL);
        let school = config
            .school
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.settings.default_school);
        let kind = match config.level {
            Some(level) => format!("a level {level} {school}"),
            None => format!("{} {school}", article(school)),
        };
        let _ = write!(out, "{name} is {kind} spell. ");
        let _ = write!(
            out,
            "It has a casting time of {}. ",
            non_empty_or(config.casting_time.as_deref(), &self.settings.default_casting_time)
        );
        let _ = write!(
            out,
            "The spell has a range of {}. ",
            non_empty_or(config.range.as_deref(), &self.settings.default_range)
        );

        if let Some(components) = &config.components {
            let mut parts = Vec::new();
            if components.verbal {
                parts.push("verbal".to_string());
            }
            if components.somatic {
                parts.push("somatic".to_string());
            }
            if components.material {
                parts.push(format!(
                    "material ({})",
                    non_empty_or(components.materials.as_deref(), "unspecified")
                ));
            }
            if !parts.is_empty() {
                let _ = write!(out, "It requires {} components. ", parts.join(", "));
            }
        }

        let _ = write!(
            out,
            "The spell's duration is {}.\n\n",
            non_empty_or(config.duration.as_deref(), &self.settings.default_duration)
        );
    }

    fn targeting_line(&self, config: &SpellConfig, out: &mut String) {
        let Some(targeting) = &config.targeting_config else {
            return;
        };
        let targeting_type = targeting.targeting_type.as_deref().unwrap_or_default();
        let _ = write!(
            out,
            "Targeting: {}",
            display_name(self.catalog.targeting_type(targeting_type), targeting_type)
        );

        match targeting_type {
            "area" => {
                let shape = targeting.area_shape.as_deref().unwrap_or_default();
                let _ = write!(
                    out,
                    " ({}, {} ft)",
                    display_name(self.catalog.aoe_shape(shape), shape),
                    format_number(targeting.area_size.unwrap_or_default())
                );
            }
            "multi" => {
                let _ = write!(out, " ({} targets)", targeting.target_count.unwrap_or_default());
            }
            _ => {}
        }
        out.push('\n');
    }

    fn duration_line(&self, config: &SpellConfig, out: &mut String) {
        let Some(duration) = &config.duration_config else {
            return;
        };
        let duration_type = duration.duration_type.as_deref().unwrap_or_default();
        let _ = write!(
            out,
            "Duration: {}",
            display_name(self.catalog.duration_type(duration_type), duration_type)
        );
        if !duration.is_instant() {
            let _ = write!(
                out,
                " ({} {duration_type})",
                format_number(duration.duration_value.unwrap_or_default())
            );
        }
        if duration.requires_concentration() {
            out.push_str(" (Concentration)");
        }
        out.push_str("\n\n");
    }

    fn effects(&self, config: &SpellConfig, out: &mut String) {
        if config.effect_type_ids().is_empty() {
            return;
        }
        out.push_str("Effects:\n");

        let enabled = |kind: EffectKind| config.has_effect(kind);

        if let Some(damage) = config.damage_config.as_ref().filter(|_| enabled(EffectKind::Damage)) {
            self.damage_block(damage, out);
        }
        if let Some(healing) = config.healing_config.as_ref().filter(|_| enabled(EffectKind::Healing)) {
            self.healing_block(healing, out);
        }
        if let Some(buff) = config.buff_config.as_ref().filter(|_| enabled(EffectKind::Buff)) {
            self.status_block("Buffs", buff, out);
        }
        if let Some(debuff) = config.debuff_config.as_ref().filter(|_| enabled(EffectKind::Debuff)) {
            self.status_block("Debuffs", debuff, out);
        }
        if let Some(utility) = config.utility_config.as_ref().filter(|_| enabled(EffectKind::Utility)) {
            self.utility_block(utility, out);
        }

        const DETAILED: [&str; 5] = ["damage", "healing", "buff", "debuff", "utility"];
        for id in config.effect_type_ids() {
            if DETAILED.contains(&id.as_str()) {
                continue;
            }
            let _ = write!(out, "• {}", display_name(self.catalog.effect_type(id), id));
            if let Some(control) = config.control_config.as_ref().filter(|_| id == "control") {
                if let Some(control_type) = control.control_type.as_deref() {
                    let _ = write!(
                        out,
                        ": {}",
                        display_name(self.catalog.control_type(control_type), control_type)
                    );
                }
                if let Some(rounds) = control.duration {
                    let _ = write!(out, " ({rounds} {})", plural(rounds, "round"));
                }
            }
            out.push('\n');
        }
    }

    fn damage_block(&self, damage: &DamageConfig, out: &mut String) {
        out.push_str("• Damage: ");
        if let Some(types) = damage.damage_types.as_ref().filter(|t| !t.is_empty()) {
            let names: Vec<&str> = types
                .iter()
                .map(|id| display_name(self.catalog.damage_type(id), id))
                .collect();
            out.push_str(&names.join(" and "));
        }
        if let Some(dice) = damage.dice_notation.as_deref().filter(|d| !d.is_empty()) {
            let _ = write!(out, " ({dice}, avg. {:.1})", average_value(dice));
        }

        if let Some(chain) = damage.chain_config.as_ref().filter(|_| damage.use_chain_effect) {
            let _ = write!(
                out,
                "\n  - Chains to up to {} additional targets",
                chain.targets.unwrap_or(1)
            );
            if let Some(falloff) = chain.falloff_type.as_deref().filter(|f| !f.is_empty()) {
                let _ = write!(out, " with {falloff} damage reduction");
            }
        }

        if let Some(critical) = damage.critical_config.as_ref().filter(|_| damage.use_critical_effect) {
            let _ = write!(
                out,
                "\n  - Critical hits deal {}× damage",
                format_number(critical.critical_multiplier.unwrap_or(DEFAULT_CRITICAL_MULTIPLIER))
            );
            if let Some(effects) = critical.effects.as_ref().filter(|e| !e.is_empty()) {
                let names: Vec<&str> = effects
                    .iter()
                    .map(|id| display_name(self.catalog.critical_effect(id), id))
                    .collect();
                let _ = write!(out, " and may cause {}", names.join(" or "));
            }
        }
        out.push('\n');
    }

    fn healing_block(&self, healing: &HealingConfig, out: &mut String) {
        out.push_str("• Healing: ");
        if let Some(id) = healing.healing_type.as_deref().filter(|t| !t.is_empty()) {
            let _ = write!(out, "{} healing", display_name(self.catalog.healing_type(id), id));
        }
        if let Some(dice) = healing.dice_notation.as_deref().filter(|d| !d.is_empty()) {
            let _ = write!(out, " ({dice}, avg. {:.1})", average_value(dice));
        }

        if let Some(shield) = healing.shield_config.as_ref().filter(|_| healing.use_absorption_shield) {
            let shield_name = shield
                .shield_type
                .as_deref()
                .and_then(|id| self.catalog.shield_type(id))
                .map_or("absorption shield", |entry| entry.name());
            let _ = write!(out, "\n  - Applies {shield_name}");
            if let Some(amount) = shield.shield_amount.as_deref().filter(|a| !a.is_empty()) {
                let _ = write!(out, " ({amount}, avg. {:.1})", average_value(amount));
            }
            if let Some(id) = shield.reflection_type.as_deref().filter(|r| !r.is_empty()) {
                let reflection = self
                    .catalog
                    .reflection_type(id)
                    .map_or("reflection", |entry| entry.name());
                let _ = write!(out, "\n  - Shield reflects damage ({reflection})");
            }
        }
        out.push('\n');
    }

    fn status_block(&self, heading: &str, status: &StatusConfig, out: &mut String) {
        let _ = writeln!(out, "• {heading}:");

        if let Some(modifiers) = status.stat_modifiers.as_ref().filter(|m| !m.is_empty()) {
            out.push_str("  - Stat Modifiers:\n");
            for (id, value) in modifiers {
                let sign = if *value > 0 { "+" } else { "" };
                let _ = writeln!(
                    out,
                    "    • {}: {sign}{value}",
                    display_name(self.catalog.stat_modifier(id), id)
                );
            }
        }

        if let Some(effects) = status.status_effects.as_ref().filter(|e| !e.is_empty()) {
            out.push_str("  - Status Effects:\n");
            for id in effects {
                let _ = writeln!(
                    out,
                    "    • {}",
                    display_name(self.catalog.status_effect(id), id)
                );
            }
        }
    }

    fn utility_block(&self, utility: &UtilityConfig, out: &mut String) {
        out.push_str("• Utility: ");
        let type_id = utility.utility_type.as_deref().unwrap_or_default();

        match self.catalog.utility_type(type_id) {
            Some(utility_type) => {
                out.push_str(utility_type.name());
                if let Some(subtype) = utility
                    .utility_subtype
                    .as_deref()
                    .and_then(|id| utility_type.subtype(id))
                {
                    let _ = write!(out, " ({})", subtype.name);
                }
                if let Some(parameters) = &utility.parameters {
                    out.push_str("\n  - Parameters:");
                    for (key, value) in parameters {
                        let _ = write!(
                            out,
                            "\n    • {}: {}",
                            format_parameter_name(key),
                            display_value(value)
                        );
                    }
                }
            }
            None => out.push_str(type_id),
        }
        out.push('\n');
    }
}

fn cost_lines(costs: &ResourceCosts, out: &mut String) {
    let _ = write!(
        out,
        "Cost: {} {}",
        costs.action_points,
        plural(costs.action_points, "action point")
    );
    if costs.mana > 0 {
        let _ = write!(out, ", {} mana", costs.mana);
    }
    if let Some(class) = &costs.class_resources {
        let _ = write!(out, ", {} {}", class.cost, format_resource_name(&class.resource_type));
    }
    if costs.cooldown > 0 {
        let _ = write!(
            out,
            "\nCooldown: {} {}",
            costs.cooldown,
            plural(costs.cooldown, "round")
        );
    }
    out.push_str("\n\n");
}

fn persistent_block(persistent: &PersistentConfig, out: &mut String) {
    let tick = |label: &str, amount: Option<&str>, out: &mut String| {
        let _ = write!(out, "• {label}: ");
        if let Some(amount) = amount.filter(|a| !a.is_empty()) {
            let _ = write!(out, "{amount} (avg. {:.1}) per tick", average_value(amount));
        }
        if let Some(frequency) = persistent.tick_frequency.as_deref().filter(|f| !f.is_empty()) {
            let _ = write!(out, ", occurs {frequency}");
        }
        if let Some(rounds) = persistent.tick_duration.filter(|r| *r != 0) {
            let _ = write!(out, " for {rounds} rounds");
        }
        out.push('\n');
    };

    out.push_str("\nPersistent Effects:\n");
    match persistent.persistent_type.as_deref() {
        Some("dot") => tick("Damage Over Time", persistent.tick_damage.as_deref(), out),
        Some("hot") => tick("Healing Over Time", persistent.tick_healing.as_deref(), out),
        Some("trigger") => {
            out.push_str("• Trigger Effect: ");
            if let Some(condition) = persistent.trigger_condition.as_deref().filter(|c| !c.is_empty()) {
                let _ = write!(out, "Triggers on {condition}");
            }
            if let Some(effect) = persistent.trigger_effect.as_deref().filter(|e| !e.is_empty()) {
                let _ = write!(out, ", causes {effect}");
            }
            out.push('\n');
        }
        _ => {}
    }
}

fn report_sections(report: &ValidationResult, out: &mut String) {
    if !report.valid {
        out.push_str("\nConfiguration Errors:\n");
        for (key, message) in &report.errors {
            let _ = writeln!(out, "• {key}: {message}");
        }
    }
    if !report.warnings.is_empty() {
        out.push_str("\nWarnings:\n");
        for message in report.warnings.values() {
            let _ = writeln!(out, "• {message}");
        }
    }
    if !report.suggestions.is_empty() {
        out.push_str("\nSuggestions:\n");
        for suggestion in &report.suggestions {
            let _ = writeln!(out, "• {suggestion}");
        }
    }
}

/// Icon id for `config`: the authored icon, else one derived from its
/// primary effect type.
pub fn resolve_icon(config: &SpellConfig) -> String {
    if let Some(icon) = config.icon.as_deref().filter(|i| !i.is_empty()) {
        return icon.to_string();
    }
    let Some(primary) = config.effect_type_ids().first() else {
        return DEFAULT_SPELL_ICON.to_string();
    };

    let icon = match primary.as_str() {
        "damage" => {
            let first_type = config
                .damage_config
                .as_ref()
                .and_then(|d| d.damage_types.as_ref())
                .and_then(|types| types.first())
                .map(String::as_str);
            match first_type {
                Some("fire") => "spell_fire_fireball02",
                Some("frost" | "cold") => "spell_frost_frostbolt02",
                Some("lightning") => "spell_lightning_lightningbolt01",
                Some("poison") => "spell_nature_corrosivebreath",
                Some("acid") => "spell_nature_acid_01",
                Some("necrotic") => "spell_shadow_shadowbolt",
                Some("radiant") => "spell_holy_holysmite",
                Some("force") => "spell_arcane_blast",
                Some("psychic") => "spell_shadow_mindflay",
                _ => "spell_fire_flamebolt",
            }
        }
        "healing" if config.uses_absorption_shield() => "spell_holy_powerwordshield",
        "healing" => "spell_holy_heal02",
        "buff" => "spell_holy_divineillumination",
        "debuff" => "spell_shadow_curseofsargeras",
        "utility" => {
            match config
                .utility_config
                .as_ref()
                .and_then(|u| u.utility_type.as_deref())
            {
                Some("movement") => "ability_rogue_sprint",
                Some("illusion") => "spell_shadow_teleport",
                Some("detection") => "spell_holy_mindsooth",
                _ => "spell_nature_earthbind",
            }
        }
        "control" => "spell_frost_chainsofice",
        "summoning" => "spell_shadow_summoninfernal",
        "transformation" => "spell_nature_polymorph",
        _ => DEFAULT_SPELL_ICON,
    };
    icon.to_string()
}

/// `snake_case` resource id as Title Case (`combo_points` -> `Combo Points`).
pub fn format_resource_name(resource_type: &str) -> String {
    resource_type
        .split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `camelCase` or `snake_case` parameter name as display text
/// (`maxDistance` -> `Max Distance`).
pub fn format_parameter_name(name: &str) -> String {
    let mut spaced = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(if c == '_' { ' ' } else { c });
    }
    capitalize(spaced.trim())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn display_name<'a, T: CatalogItem>(entry: Option<&'a T>, raw: &'a str) -> &'a str {
    entry.map_or(raw, |entry| entry.name())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback)
}

fn plural(count: i64, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Whole numbers without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
