//! Integer math node with bitwise operations

use crate::nodes::{arg_int, arg_str};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// Basic mathematical operations between two integers
///
/// Always outputs INT. Division or modulo by zero, overflow, a negative
/// exponent, and an out-of-range shift all yield the 0 sentinel.
#[derive(Default)]
pub struct IntMathNode;

impl NodeFactory for IntMathNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "IntMath",
            "Int Math",
            NodeCategory::arithmetic(),
            "Basic mathematical operations between two integers",
        )
        .with_inputs(vec![
            PortDefinition::required("a", DataType::Int)
                .with_default(0)
                .with_range(i64::MIN, i64::MAX)
                .with_step(1),
            PortDefinition::required("b", DataType::Int)
                .with_default(0)
                .with_range(i64::MIN, i64::MAX)
                .with_step(1),
            PortDefinition::required("operation", DataType::String)
                .with_choices(&[
                    "+", "-", "*", "//", "%", "**", "min", "max", "&", "|", "^", "<<", ">>",
                ])
                .with_default("+"),
        ])
        .with_outputs(vec![PortDefinition::required("result", DataType::Int)])
        .with_tags(vec!["math", "arithmetic", "integer", "bitwise"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        process_int_math(inputs)
    }
}

/// Apply an integer operation, substituting 0 for any failure
pub fn process_int_math(inputs: &[Value]) -> Vec<Value> {
    let a = arg_int(inputs, 0, 0);
    let b = arg_int(inputs, 1, 0);

    let result = match arg_str(inputs, 2, "+") {
        "+" => a.checked_add(b),
        "-" => a.checked_sub(b),
        "*" => a.checked_mul(b),
        "//" => {
            if b == 0 {
                Some(0)
            } else {
                floor_div(a, b)
            }
        }
        "%" => {
            if b == 0 {
                Some(0)
            } else {
                floor_mod(a, b)
            }
        }
        "**" => u32::try_from(b).ok().and_then(|exp| a.checked_pow(exp)),
        "min" => Some(a.min(b)),
        "max" => Some(a.max(b)),
        "&" => Some(a & b),
        "|" => Some(a | b),
        "^" => Some(a ^ b),
        "<<" => u32::try_from(b).ok().and_then(|shift| a.checked_shl(shift)),
        ">>" => u32::try_from(b).ok().and_then(|shift| a.checked_shr(shift)),
        _ => None,
    };

    vec![Value::Int(result.unwrap_or(0))]
}

// Floor division: quotient rounds toward negative infinity, so the
// remainder's sign follows the divisor.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    let r = a - q * b;
    if r != 0 && (r < 0) != (b < 0) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

fn floor_mod(a: i64, b: i64) -> Option<i64> {
    let r = a.checked_rem(b)?;
    if r != 0 && (r < 0) != (b < 0) {
        r.checked_add(b)
    } else {
        Some(r)
    }
}
