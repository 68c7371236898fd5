//! Engine settings loaded from the environment.
//!
//! Settings cover display/compile fallbacks and which advisory passes run.
//! Balance thresholds are game-design constants and live with the balance
//! checks, not here.

use serde::{Deserialize, Serialize};

pub const ENV_DEFAULT_SCHOOL: &str = "SPELLFORGE_DEFAULT_SCHOOL";
pub const ENV_DEFAULT_CASTING_TIME: &str = "SPELLFORGE_DEFAULT_CASTING_TIME";
pub const ENV_DEFAULT_RANGE: &str = "SPELLFORGE_DEFAULT_RANGE";
pub const ENV_DEFAULT_DURATION: &str = "SPELLFORGE_DEFAULT_DURATION";
pub const ENV_DEFAULT_RANGE_DISTANCE: &str = "SPELLFORGE_DEFAULT_RANGE_DISTANCE";
pub const ENV_BALANCE_WARNINGS: &str = "SPELLFORGE_BALANCE_WARNINGS";
pub const ENV_SUGGESTIONS: &str = "SPELLFORGE_SUGGESTIONS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSettings {
    /// School shown/compiled when a spell has none
    pub default_school: String,
    pub default_casting_time: String,
    pub default_range: String,
    pub default_duration: String,
    /// Compiled targeting range (feet) when `rangeDistance` is absent
    pub default_range_distance: i64,
    /// Run the heuristic balance pass
    pub balance_warnings: bool,
    /// Run the suggestion pass
    pub suggestions: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_school: "arcane".to_string(),
            default_casting_time: "1 action".to_string(),
            default_range: "30 feet".to_string(),
            default_duration: "Instantaneous".to_string(),
            default_range_distance: 30,
            balance_warnings: true,
            suggestions: true,
        }
    }
}

impl EngineSettings {
    /// Load settings from `SPELLFORGE_*` environment variables.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            default_school: env_or(&lookup, ENV_DEFAULT_SCHOOL, defaults.default_school),
            default_casting_time: env_or(&lookup, ENV_DEFAULT_CASTING_TIME, defaults.default_casting_time),
            default_range: env_or(&lookup, ENV_DEFAULT_RANGE, defaults.default_range),
            default_duration: env_or(&lookup, ENV_DEFAULT_DURATION, defaults.default_duration),
            default_range_distance: env_or(&lookup, ENV_DEFAULT_RANGE_DISTANCE, defaults.default_range_distance),
            balance_warnings: env_or(&lookup, ENV_BALANCE_WARNINGS, defaults.balance_warnings),
            suggestions: env_or(&lookup, ENV_SUGGESTIONS, defaults.suggestions),
        }
    }
}

fn env_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(EngineSettings::from_lookup(lookup(&[])), EngineSettings::default());
    }

    #[test]
    fn test_overrides_are_parsed() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (ENV_DEFAULT_SCHOOL, "evocation"),
            (ENV_DEFAULT_RANGE_DISTANCE, "60"),
            (ENV_BALANCE_WARNINGS, "false"),
        ]));
        assert_eq!(settings.default_school, "evocation");
        assert_eq!(settings.default_range_distance, 60);
        assert!(!settings.balance_warnings);
        assert!(settings.suggestions);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let settings = EngineSettings::from_lookup(lookup(&[
            (ENV_DEFAULT_RANGE_DISTANCE, "far"),
            (ENV_SUGGESTIONS, "maybe"),
        ]));
        assert_eq!(settings.default_range_distance, 30);
        assert!(settings.suggestions);
    }
}
