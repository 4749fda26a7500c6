//! Integer input node implementation

use crate::nodes::arg_int;
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// Integer input node that outputs a configurable integer value
#[derive(Default)]
pub struct IntegerInputNode;

impl NodeFactory for IntegerInputNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "IntegerInput",
            "Integer",
            NodeCategory::primitives(),
            "Output an integer value",
        )
        .with_icon("🔢")
        .with_inputs(vec![PortDefinition::required("value", DataType::Int)
            .with_default(0)
            .with_range(i64::MIN, i64::MAX)
            .with_step(1)])
        .with_outputs(vec![PortDefinition::required("value", DataType::Int)])
        .with_tags(vec!["primitive", "integer", "input"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        vec![Value::Int(arg_int(inputs, 0, 0))]
    }
}
