//! Unary math node

use crate::nodes::{arg_float, arg_str, is_int};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::{DataType, TypeSet};
use crate::value::Value;

/// Unary mathematical operations on a single number
///
/// abs/neg/floor/ceil/round keep an Int input Int; everything else floats.
/// sqrt and the logs operate on |value| so negative inputs stay in domain;
/// log of zero yields negative infinity.
#[derive(Default)]
pub struct UnaryMathNode;

impl NodeFactory for UnaryMathNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "UnaryMath",
            "Unary Math",
            NodeCategory::arithmetic(),
            "Unary mathematical operations on a single number",
        )
        .with_inputs(vec![
            PortDefinition::required("value", TypeSet::number()).with_default(0.0),
            PortDefinition::required("operation", DataType::String)
                .with_choices(&[
                    "abs", "neg", "sqrt", "sin", "cos", "tan", "log", "log10", "exp", "floor",
                    "ceil", "round",
                ])
                .with_default("abs"),
        ])
        .with_outputs(vec![PortDefinition::required("result", TypeSet::any())])
        .with_tags(vec!["math", "arithmetic", "unary"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        process_unary_math(inputs)
    }
}

pub fn process_unary_math(inputs: &[Value]) -> Vec<Value> {
    let value = arg_float(inputs, 0, 0.0);
    let int_input = is_int(inputs, 0);

    let (result, preserve_int) = match arg_str(inputs, 1, "abs") {
        "abs" => (value.abs(), int_input),
        "neg" => (-value, int_input),
        "sqrt" => (value.abs().sqrt(), false),
        "sin" => (value.sin(), false),
        "cos" => (value.cos(), false),
        "tan" => (value.tan(), false),
        "log" => (log_or_neg_inf(value, f64::ln), false),
        "log10" => (log_or_neg_inf(value, f64::log10), false),
        "exp" => (value.exp(), false),
        "floor" => (value.floor(), int_input),
        "ceil" => (value.ceil(), int_input),
        "round" => (value.round_ties_even(), int_input),
        _ => (f64::NAN, false),
    };

    if preserve_int {
        vec![Value::Int(result as i64)]
    } else {
        vec![Value::Float(result)]
    }
}

fn log_or_neg_inf(value: f64, log: fn(f64) -> f64) -> f64 {
    if value == 0.0 {
        f64::NEG_INFINITY
    } else {
        log(value.abs())
    }
}
