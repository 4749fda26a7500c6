//! String input node implementation

use crate::nodes::arg_str;
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// String input node backed by a host text field
#[derive(Default)]
pub struct StringInputNode;

impl NodeFactory for StringInputNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "StringInput",
            "String",
            NodeCategory::primitives(),
            "Output a string value",
        )
        .with_icon("🔤")
        .with_inputs(vec![
            PortDefinition::required("value", DataType::String).with_default("")
        ])
        .with_outputs(vec![PortDefinition::required("value", DataType::String)])
        .with_tags(vec!["primitive", "string", "input"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        vec![Value::String(arg_str(inputs, 0, "").to_string())]
    }
}
