//! Type conversion nodes

mod float_to_type;
mod int_to_type;

pub use float_to_type::FloatToTypeNode;
pub use int_to_type::IntToTypeNode;
