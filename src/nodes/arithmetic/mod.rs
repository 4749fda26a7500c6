//! Arithmetic operator nodes

mod basic_math;
mod int_math;
mod unary_math;

pub use basic_math::BasicMathNode;
pub use int_math::IntMathNode;
pub use unary_math::UnaryMathNode;
