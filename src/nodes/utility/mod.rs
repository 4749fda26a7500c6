//! Numeric utility nodes

mod clamp;
mod lerp;
mod range;
mod round;

pub use clamp::NumberClampNode;
pub use lerp::NumberLerpNode;
pub use range::NumberRangeNode;
pub use round::NumberRoundNode;
