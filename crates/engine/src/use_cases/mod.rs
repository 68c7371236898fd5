//! Use cases - one per spell-authoring operation.
//!
//! Each use case holds its dependencies behind `Arc` and exposes `execute`.
//! None of them perform I/O or hold mutable state, so all are safe to share
//! across threads.

pub mod description;
pub mod game_code;
pub mod serialization;
pub mod template;
pub mod validation;

pub use description::{resolve_icon, RenderProse};
pub use game_code::CompileSpell;
pub use serialization::{clean, SerializationError, SpellSerializer};
pub use template::{InstantiateTemplate, MakeTemplate, TemplateError};
pub use validation::ValidateSpell;
