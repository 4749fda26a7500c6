//! Number rounding node

use crate::nodes::{arg_float, arg_int, is_int};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::{DataType, TypeSet};
use crate::value::Value;

/// Round a number to a given number of decimal places, ties to even
#[derive(Default)]
pub struct NumberRoundNode;

impl NodeFactory for NumberRoundNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "NumberRound",
            "Number Round",
            NodeCategory::utility(),
            "Round a number to specified decimal places",
        )
        .with_inputs(vec![
            PortDefinition::required("value", TypeSet::number()).with_default(0.0),
            PortDefinition::required("decimals", DataType::Int)
                .with_default(2)
                .with_range(0, 10)
                .with_step(1),
        ])
        .with_outputs(vec![PortDefinition::required("rounded", TypeSet::any())])
        .with_tags(vec!["utility", "rounding"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let value = arg_float(inputs, 0, 0.0);
        let decimals = arg_int(inputs, 1, 2);
        let factor = 10f64.powi(decimals.clamp(i32::MIN as i64, i32::MAX as i64) as i32);
        let result = (value * factor).round_ties_even() / factor;

        // An Int rounded to zero decimals stays Int
        if is_int(inputs, 0) && decimals == 0 {
            vec![Value::Int(result as i64)]
        } else {
            vec![Value::Float(result)]
        }
    }
}
