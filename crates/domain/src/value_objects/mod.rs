//! Value objects: immutable, self-validating building blocks of a spell document.

mod dice;
mod field_path;

pub use dice::{average_value, is_valid_dice_notation, DiceFormula, DiceParseError, FALLBACK_AVERAGE};
pub use field_path::{FieldPath, FieldPathError};
