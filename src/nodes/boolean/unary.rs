//! Unary boolean node

use crate::nodes::{arg_bool, arg_str};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// Unary boolean operations: NOT, or identity pass-through
#[derive(Default)]
pub struct BooleanUnaryNode;

impl NodeFactory for BooleanUnaryNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "BooleanUnary",
            "Boolean Unary",
            NodeCategory::boolean(),
            "Unary boolean operations",
        )
        .with_inputs(vec![
            PortDefinition::required("value", DataType::Boolean),
            PortDefinition::required("operation", DataType::String)
                .with_choices(&["NOT", "IDENTITY"])
                .with_default("NOT"),
        ])
        .with_outputs(vec![PortDefinition::required("result", DataType::Boolean)])
        .with_tags(vec!["boolean", "logic"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let value = arg_bool(inputs, 0, false);
        let result = match arg_str(inputs, 1, "NOT") {
            "IDENTITY" => value,
            _ => !value,
        };
        vec![Value::Boolean(result)]
    }
}
