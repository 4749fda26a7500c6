//! Boolean input node implementation

use crate::nodes::arg_bool;
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// Boolean input node backed by a host checkbox
#[derive(Default)]
pub struct BooleanInputNode;

impl NodeFactory for BooleanInputNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "BooleanInput",
            "Boolean",
            NodeCategory::primitives(),
            "Output a boolean value",
        )
        .with_icon("🔘")
        .with_inputs(vec![
            PortDefinition::required("value", DataType::Boolean).with_default(false)
        ])
        .with_outputs(vec![PortDefinition::required("value", DataType::Boolean)])
        .with_tags(vec!["primitive", "boolean", "input"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        vec![Value::Boolean(arg_bool(inputs, 0, false))]
    }
}
