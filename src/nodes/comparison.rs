//! Numeric comparison node

use crate::nodes::{arg_float, arg_str};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::{DataType, TypeSet};
use crate::value::Value;

/// Compare two numbers
///
/// NaN operands compare false for every operation except `!=`.
#[derive(Default)]
pub struct NumberCompareNode;

impl NodeFactory for NumberCompareNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "NumberCompare",
            "Number Compare",
            NodeCategory::comparison(),
            "Compare two numbers",
        )
        .with_icon("⚖️")
        .with_inputs(vec![
            PortDefinition::required("a", TypeSet::number()).with_default(0.0),
            PortDefinition::required("b", TypeSet::number()).with_default(0.0),
            PortDefinition::required("operation", DataType::String)
                .with_choices(&["==", "!=", "<", "<=", ">", ">="])
                .with_default("=="),
        ])
        .with_outputs(vec![PortDefinition::required("result", DataType::Boolean)])
        .with_tags(vec!["comparison", "boolean"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let a = arg_float(inputs, 0, 0.0);
        let b = arg_float(inputs, 1, 0.0);
        let result = match arg_str(inputs, 2, "==") {
            "==" => a == b,
            "!=" => a != b,
            "<" => a < b,
            "<=" => a <= b,
            ">" => a > b,
            ">=" => a >= b,
            _ => false,
        };
        vec![Value::Boolean(result)]
    }
}
