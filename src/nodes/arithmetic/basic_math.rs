//! Binary math node over the INT,FLOAT number union

use crate::nodes::{arg_float, arg_str, is_int};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::{DataType, TypeSet};
use crate::value::Value;

/// Basic mathematical operations between two numbers
///
/// The result is Int when both inputs are Int, the operation preserves
/// integers, and the result is integral; otherwise Float. Division by zero
/// yields a signed infinity, modulo by zero yields NaN, any other failure
/// yields NaN. Evaluation never panics.
#[derive(Default)]
pub struct BasicMathNode;

impl NodeFactory for BasicMathNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "BasicMath",
            "Basic Math",
            NodeCategory::arithmetic(),
            "Basic mathematical operations between two numbers",
        )
        .with_inputs(vec![
            PortDefinition::required("a", TypeSet::number()).with_default(0.0),
            PortDefinition::required("b", TypeSet::number()).with_default(0.0),
            PortDefinition::required("operation", DataType::String)
                .with_choices(&["+", "-", "*", "/", "//", "%", "**", "min", "max"])
                .with_default("+"),
        ])
        .with_outputs(vec![PortDefinition::required("result", TypeSet::any())])
        .with_tags(vec!["math", "arithmetic", "basic"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        process_basic_math(inputs)
    }
}

/// Apply a binary operation, picking Int or Float for the result
pub fn process_basic_math(inputs: &[Value]) -> Vec<Value> {
    let a = arg_float(inputs, 0, 0.0);
    let b = arg_float(inputs, 1, 0.0);
    let operation = arg_str(inputs, 2, "+");

    // Division always produces a float
    let mut int_result = is_int(inputs, 0) && is_int(inputs, 1) && operation != "/";

    let result = match operation {
        "+" => a + b,
        "-" => a - b,
        "*" => a * b,
        "/" | "//" => {
            if b == 0.0 {
                return vec![Value::Float(signed_infinity(a))];
            }
            if operation == "/" {
                a / b
            } else {
                (a / b).floor()
            }
        }
        "%" => {
            if b == 0.0 {
                return vec![Value::Float(f64::NAN)];
            }
            // Floor modulo: sign follows the divisor
            a - b * (a / b).floor()
        }
        "**" => a.powf(b),
        "min" => a.min(b),
        "max" => a.max(b),
        _ => f64::NAN,
    };

    // Power can leave the integers even when both inputs are Int
    if result.fract() != 0.0 {
        int_result = false;
    }

    if int_result {
        vec![Value::Int(result as i64)]
    } else {
        vec![Value::Float(result)]
    }
}

fn signed_infinity(dividend: f64) -> f64 {
    if dividend > 0.0 {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}
