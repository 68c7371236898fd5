//! Dotted field paths into a spell document
//!
//! A path such as `"damageConfig.criticalConfig.criticalMultiplier"` names a
//! field any number of objects deep. Paths key template parameters and
//! instantiation modifications.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Errors produced when parsing or applying a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldPathError {
    #[error("Field path is empty")]
    Empty,
    #[error("Field path '{0}' contains an empty segment")]
    EmptySegment(String),
    #[error("Cannot descend into '{segment}' of '{path}': not an object")]
    NotAnObject { path: String, segment: String },
}

/// A non-empty sequence of object keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    /// Parse a `.`-delimited path.
    pub fn parse(input: &str) -> Result<Self, FieldPathError> {
        if input.is_empty() {
            return Err(FieldPathError::Empty);
        }
        let segments: Vec<String> = input.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(FieldPathError::EmptySegment(input.to_string()));
        }
        Ok(Self(segments))
    }

    /// Write `value` at this path, creating missing intermediate objects.
    ///
    /// An intermediate that exists but is not an object is left untouched and
    /// reported as [`FieldPathError::NotAnObject`].
    pub fn set(&self, root: &mut Map<String, Value>, value: Value) -> Result<(), FieldPathError> {
        let (last, parents) = match self.0.split_last() {
            Some(split) => split,
            None => return Err(FieldPathError::Empty),
        };

        let mut cursor = root;
        for segment in parents {
            let entry = cursor
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if entry.is_null() {
                *entry = Value::Object(Map::new());
            }
            cursor = match entry {
                Value::Object(map) => map,
                _ => {
                    return Err(FieldPathError::NotAnObject {
                        path: self.to_string(),
                        segment: segment.clone(),
                    })
                }
            };
        }
        cursor.insert(last.clone(), value);
        Ok(())
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl std::str::FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = FieldPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FieldPath> for String {
    fn from(path: FieldPath) -> Self {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_nested_segments() {
        let path = FieldPath::parse("damageConfig.criticalConfig.criticalMultiplier").unwrap();
        assert_eq!(path.to_string(), "damageConfig.criticalConfig.criticalMultiplier");
    }

    #[test]
    fn rejects_empty_segments() {
        assert_eq!(FieldPath::parse(""), Err(FieldPathError::Empty));
        assert!(matches!(
            FieldPath::parse("damageConfig..diceNotation"),
            Err(FieldPathError::EmptySegment(_))
        ));
        assert!(matches!(
            FieldPath::parse("level."),
            Err(FieldPathError::EmptySegment(_))
        ));
    }

    #[test]
    fn set_creates_missing_parents() {
        let mut root = Map::new();
        FieldPath::parse("damageConfig.chainConfig.targets")
            .unwrap()
            .set(&mut root, json!(3))
            .unwrap();
        assert_eq!(
            Value::Object(root),
            json!({"damageConfig": {"chainConfig": {"targets": 3}}})
        );
    }

    #[test]
    fn set_preserves_siblings() {
        let mut root = json!({"damageConfig": {"diceNotation": "2d6", "damageTypes": ["fire"]}})
            .as_object()
            .cloned()
            .unwrap();
        FieldPath::parse("damageConfig.diceNotation")
            .unwrap()
            .set(&mut root, json!("4d6"))
            .unwrap();
        assert_eq!(root["damageConfig"]["diceNotation"], json!("4d6"));
        assert_eq!(root["damageConfig"]["damageTypes"], json!(["fire"]));
    }

    #[test]
    fn set_rejects_scalar_parent() {
        let mut root = json!({"level": 3}).as_object().cloned().unwrap();
        let err = FieldPath::parse("level.value")
            .unwrap()
            .set(&mut root, json!(1))
            .unwrap_err();
        assert!(matches!(err, FieldPathError::NotAnObject { .. }));
        assert_eq!(root["level"], json!(3));
    }

    #[test]
    fn serializes_as_dotted_string() {
        let path = FieldPath::parse("durationConfig.durationValue").unwrap();
        assert_eq!(serde_json::to_value(&path).unwrap(), json!("durationConfig.durationValue"));
    }
}
