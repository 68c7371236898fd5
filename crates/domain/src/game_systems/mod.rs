//! Rule-system mechanics: the resource calculator seam and its standard rules.

mod resources;
mod traits;

pub use resources::{
    ClassResourceCost, ResourceCosts, StandardResourceCalculator, CLASS_RESOURCE_TYPES,
};
#[cfg(any(test, feature = "testing"))]
pub use traits::MockResourceCalculator;
pub use traits::ResourceCalculator;
