//! Dice notation value objects and parsing
//!
//! Supports dice formulas like "2d6+3", "1d20-1", "8d6". The grammar is
//! `count "d" sides [("+"|"-") modifier]` with no whitespace and a
//! lowercase `d`; anything else is rejected.
//!
//! The expected value of a formula is `count * (sides + 1) / 2 + modifier`.
//! Callers that only need a best-effort number (balance heuristics, mana
//! estimates) use [`average_value`], which falls back to
//! [`FALLBACK_AVERAGE`] instead of failing.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Expected value reported for notation that cannot be parsed.
pub const FALLBACK_AVERAGE: f64 = 10.0;

static DICE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)d(\d+)([+-]\d+)?$").expect("dice pattern is a valid regex")
});

/// Error when parsing a dice formula
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    /// The formula string is empty
    #[error("Empty dice formula")]
    Empty,
    /// Invalid format - expected XdY or XdY+Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    /// A component does not fit the numeric range
    #[error("Dice value overflow in '{0}'")]
    Overflow(String),
}

/// A parsed dice formula like "2d6+3"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u32,
    /// Size of each die (Y in XdY)
    pub die_size: u32,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    pub modifier: i32,
}

impl DiceFormula {
    /// Parse a dice formula string like "2d6+3", "1d20-1", "8d6"
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let captures = DICE_PATTERN
            .captures(input)
            .ok_or_else(|| DiceParseError::InvalidFormat(input.to_string()))?;

        let overflow = || DiceParseError::Overflow(input.to_string());

        let dice_count: u32 = captures[1].parse().map_err(|_| overflow())?;
        let die_size: u32 = captures[2].parse().map_err(|_| overflow())?;
        let modifier: i32 = match captures.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| overflow())?,
            None => 0,
        };

        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// Expected value of the formula.
    pub fn average(&self) -> f64 {
        let per_die = (f64::from(self.die_size) + 1.0) / 2.0;
        f64::from(self.dice_count) * per_die + f64::from(self.modifier)
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.die_size)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

impl std::str::FromStr for DiceFormula {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Whether `notation` is well-formed dice notation.
pub fn is_valid_dice_notation(notation: &str) -> bool {
    DiceFormula::parse(notation).is_ok()
}

/// Expected value of `notation`, or [`FALLBACK_AVERAGE`] when it cannot be parsed.
pub fn average_value(notation: &str) -> f64 {
    DiceFormula::parse(notation)
        .map(|formula| formula.average())
        .unwrap_or(FALLBACK_AVERAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let formula = DiceFormula::parse("1d20").unwrap();
        assert_eq!(formula.dice_count, 1);
        assert_eq!(formula.die_size, 20);
        assert_eq!(formula.modifier, 0);
    }

    #[test]
    fn test_parse_with_positive_modifier() {
        let formula = DiceFormula::parse("2d6+3").unwrap();
        assert_eq!(formula.dice_count, 2);
        assert_eq!(formula.die_size, 6);
        assert_eq!(formula.modifier, 3);
    }

    #[test]
    fn test_parse_with_negative_modifier() {
        let formula = DiceFormula::parse("1d20-3").unwrap();
        assert_eq!(formula.modifier, -3);
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!(!is_valid_dice_notation("2d"));
        assert!(!is_valid_dice_notation("d6"));
        assert!(!is_valid_dice_notation("six"));
        assert!(!is_valid_dice_notation("2d6+"));
        assert!(!is_valid_dice_notation(" 2d6"));
        assert!(!is_valid_dice_notation("2D6"));
    }

    #[test]
    fn test_accepts_well_formed() {
        assert!(is_valid_dice_notation("2d6+3"));
        assert!(is_valid_dice_notation("10d10"));
        assert!(is_valid_dice_notation("1d4-1"));
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(DiceFormula::parse(""), Err(DiceParseError::Empty)));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(
            DiceFormula::parse("99999999999d6"),
            Err(DiceParseError::Overflow(_))
        ));
    }

    #[test]
    fn test_average() {
        assert_eq!(DiceFormula::parse("2d6+3").unwrap().average(), 10.0);
        assert_eq!(DiceFormula::parse("1d20").unwrap().average(), 10.5);
        assert_eq!(DiceFormula::parse("4d6").unwrap().average(), 14.0);
        assert_eq!(DiceFormula::parse("1d4-1").unwrap().average(), 1.5);
    }

    #[test]
    fn test_average_value_falls_back() {
        assert_eq!(average_value("fireball"), FALLBACK_AVERAGE);
        assert_eq!(average_value("8d6"), 28.0);
    }

    #[test]
    fn test_display() {
        for notation in ["1d20", "1d20+5", "1d20-3"] {
            assert_eq!(DiceFormula::parse(notation).unwrap().to_string(), notation);
        }
        assert_eq!("2d6+3".parse::<DiceFormula>().unwrap().to_string(), "2d6+3");
    }
}
