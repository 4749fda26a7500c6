//! Primitive input nodes
//!
//! Each primitive outputs the value the host widget holds, pass-through
//! with type enforcement.

mod boolean;
mod float;
mod integer;
mod precise_float;
mod string;

pub use boolean::BooleanInputNode;
pub use float::FloatInputNode;
pub use integer::IntegerInputNode;
pub use precise_float::PreciseFloatInputNode;
pub use string::StringInputNode;
