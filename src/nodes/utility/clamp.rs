//! Number clamping node

use crate::nodes::{arg_float, is_int};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::TypeSet;
use crate::value::Value;

/// Clamp a number between minimum and maximum values
#[derive(Default)]
pub struct NumberClampNode;

impl NodeFactory for NumberClampNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "NumberClamp",
            "Number Clamp",
            NodeCategory::utility(),
            "Clamp a number between minimum and maximum values",
        )
        .with_inputs(vec![
            PortDefinition::required("value", TypeSet::number()).with_default(0.0),
            PortDefinition::required("min_value", TypeSet::number()).with_default(0.0),
            PortDefinition::required("max_value", TypeSet::number()).with_default(1.0),
        ])
        .with_outputs(vec![PortDefinition::required("clamped", TypeSet::any())])
        .with_tags(vec!["utility", "clamp"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let value = arg_float(inputs, 0, 0.0);
        let min_value = arg_float(inputs, 1, 0.0);
        let max_value = arg_float(inputs, 2, 1.0);

        // The upper bound applies first, so min_value wins when the bounds
        // are inverted
        let result = value.min(max_value).max(min_value);

        if (0..3).all(|i| is_int(inputs, i)) {
            vec![Value::Int(result as i64)]
        } else {
            vec![Value::Float(result)]
        }
    }
}
