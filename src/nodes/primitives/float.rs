//! Float input node implementation

use crate::nodes::arg_float;
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// Float input node that outputs a configurable float value
#[derive(Default)]
pub struct FloatInputNode;

impl NodeFactory for FloatInputNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "FloatInput",
            "Float",
            NodeCategory::primitives(),
            "Output a float value",
        )
        .with_icon("🔢")
        .with_inputs(vec![PortDefinition::required("value", DataType::Float)
            .with_default(0.0)
            .with_range(-999999999999.0, 999999999999.0)
            .with_step(0.001)])
        .with_outputs(vec![PortDefinition::required("value", DataType::Float)])
        .with_tags(vec!["primitive", "float", "input"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        vec![Value::Float(arg_float(inputs, 0, 0.0))]
    }
}
