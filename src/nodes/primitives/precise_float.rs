//! Precise float input node implementation

use crate::nodes::arg_float;
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// Float input with a much finer widget step for high-precision values
#[derive(Default)]
pub struct PreciseFloatInputNode;

impl NodeFactory for PreciseFloatInputNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "PreciseFloatInput",
            "Precise Float",
            NodeCategory::primitives(),
            "Output a precise float value",
        )
        .with_icon("🔢")
        .with_inputs(vec![PortDefinition::required("value", DataType::Float)
            .with_default(0.0)
            .with_range(-999999999999.0, 999999999999.0)
            .with_step(0.0000000001)])
        .with_outputs(vec![PortDefinition::required("value", DataType::Float)])
        .with_tags(vec!["primitive", "float", "input", "precision"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        vec![Value::Float(arg_float(inputs, 0, 0.0))]
    }
}
