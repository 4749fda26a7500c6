//! Range check node

use crate::nodes::{arg_bool, arg_float};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::{DataType, TypeSet};
use crate::value::Value;

/// Check if a number is within a range
#[derive(Default)]
pub struct NumberRangeNode;

impl NodeFactory for NumberRangeNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "NumberRange",
            "Number Range",
            NodeCategory::utility(),
            "Check if a number is within a range",
        )
        .with_inputs(vec![
            PortDefinition::required("value", TypeSet::number()).with_default(0.0),
            PortDefinition::required("min_value", TypeSet::number()).with_default(0.0),
            PortDefinition::required("max_value", TypeSet::number()).with_default(1.0),
            PortDefinition::required("inclusive", DataType::Boolean).with_default(true),
        ])
        .with_outputs(vec![PortDefinition::required("in_range", DataType::Boolean)])
        .with_tags(vec!["utility", "range", "boolean"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let value = arg_float(inputs, 0, 0.0);
        let min_value = arg_float(inputs, 1, 0.0);
        let max_value = arg_float(inputs, 2, 1.0);
        let in_range = if arg_bool(inputs, 3, true) {
            min_value <= value && value <= max_value
        } else {
            min_value < value && value < max_value
        };
        vec![Value::Boolean(in_range)]
    }
}
