//! Linear interpolation node

use crate::nodes::{arg_float, is_int};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::TypeSet;
use crate::value::Value;

/// Linear interpolation between two values
#[derive(Default)]
pub struct NumberLerpNode;

impl NodeFactory for NumberLerpNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "NumberLerp",
            "Number Lerp",
            NodeCategory::utility(),
            "Linear interpolation between two values",
        )
        .with_inputs(vec![
            PortDefinition::required("a", TypeSet::number()).with_default(0.0),
            PortDefinition::required("b", TypeSet::number()).with_default(1.0),
            PortDefinition::required("t", TypeSet::number()).with_default(0.5),
        ])
        .with_outputs(vec![PortDefinition::required("result", TypeSet::any())])
        .with_tags(vec!["utility", "interpolation"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let a = arg_float(inputs, 0, 0.0);
        let b = arg_float(inputs, 1, 1.0);
        let t = arg_float(inputs, 2, 0.5);
        let result = a + t * (b - a);

        // Interpolation usually floats; keep Int only for all-Int inputs
        // landing on a whole number
        if (0..3).all(|i| is_int(inputs, i)) && result.fract() == 0.0 {
            vec![Value::Int(result as i64)]
        } else {
            vec![Value::Float(result)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolation() {
        let result = NumberLerpNode::evaluate(&[
            Value::Float(0.0),
            Value::Float(10.0),
            Value::Float(0.25),
        ]);
        assert_eq!(result, vec![Value::Float(2.5)]);
    }

    #[test]
    fn test_extrapolation_beyond_endpoints() {
        let result = NumberLerpNode::evaluate(&[
            Value::Float(0.0),
            Value::Float(10.0),
            Value::Float(1.5),
        ]);
        assert_eq!(result, vec![Value::Float(15.0)]);
    }

    #[test]
    fn test_all_int_whole_result_stays_int() {
        let result = NumberLerpNode::evaluate(&[Value::Int(0), Value::Int(10), Value::Int(1)]);
        assert_eq!(result, vec![Value::Int(10)]);

        // Int endpoints with a float t still float
        let result = NumberLerpNode::evaluate(&[
            Value::Int(0),
            Value::Int(10),
            Value::Float(0.5),
        ]);
        assert_eq!(result, vec![Value::Float(5.0)]);
    }
}
