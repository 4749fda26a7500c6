//! Node implementations for the Basic Math pack

pub mod arithmetic;
pub mod boolean;
pub mod comparison;
pub mod constants;
pub mod conversion;
pub mod primitives;
pub mod utility;

pub use arithmetic::{BasicMathNode, IntMathNode, UnaryMathNode};
pub use boolean::{BooleanLogicNode, BooleanUnaryNode};
pub use comparison::NumberCompareNode;
pub use constants::MathConstantsNode;
pub use conversion::{FloatToTypeNode, IntToTypeNode};
pub use primitives::{
    BooleanInputNode, FloatInputNode, IntegerInputNode, PreciseFloatInputNode, StringInputNode,
};
pub use utility::{NumberClampNode, NumberLerpNode, NumberRangeNode, NumberRoundNode};

use crate::registry::NodeRegistry;
use crate::value::Value;
use log::info;

/// Root category name for every node in this pack
pub const PACK_NAME: &str = "Basic Math";

/// Postfix appended to display names in the host's node menu
pub const DISPLAY_POSTFIX: &str = "| Basic";

/// Register every node in the pack
pub fn register_all(registry: &mut NodeRegistry) {
    registry.register::<IntegerInputNode>();
    registry.register::<FloatInputNode>();
    registry.register::<PreciseFloatInputNode>();
    registry.register::<BooleanInputNode>();
    registry.register::<StringInputNode>();
    registry.register::<IntToTypeNode>();
    registry.register::<FloatToTypeNode>();
    registry.register::<BasicMathNode>();
    registry.register::<IntMathNode>();
    registry.register::<UnaryMathNode>();
    registry.register::<MathConstantsNode>();
    registry.register::<NumberCompareNode>();
    registry.register::<NumberRoundNode>();
    registry.register::<NumberClampNode>();
    registry.register::<NumberLerpNode>();
    registry.register::<NumberRangeNode>();
    registry.register::<BooleanLogicNode>();
    registry.register::<BooleanUnaryNode>();
    info!("Registered Basic Math node pack");
}

// Shared argument extraction for evaluators. Inputs arrive ordered as the
// declared ports; a missing or uncoercible argument falls back to the
// caller's default so evaluation stays total.

pub(crate) fn arg_float(inputs: &[Value], index: usize, default: f64) -> f64 {
    inputs.get(index).and_then(Value::as_float).unwrap_or(default)
}

pub(crate) fn arg_int(inputs: &[Value], index: usize, default: i64) -> i64 {
    inputs.get(index).and_then(Value::as_int).unwrap_or(default)
}

pub(crate) fn arg_bool(inputs: &[Value], index: usize, default: bool) -> bool {
    inputs.get(index).map(Value::truthy).unwrap_or(default)
}

pub(crate) fn arg_str<'a>(inputs: &'a [Value], index: usize, default: &'a str) -> &'a str {
    match inputs.get(index) {
        Some(Value::String(s)) => s.as_str(),
        _ => default,
    }
}

pub(crate) fn is_int(inputs: &[Value], index: usize) -> bool {
    matches!(inputs.get(index), Some(Value::Int(_)))
}
