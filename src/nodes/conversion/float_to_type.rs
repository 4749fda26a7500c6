//! Float-to-type conversion node

use crate::nodes::{arg_float, arg_str};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::{DataType, TypeSet};
use crate::value::Value;

/// Convert a float to a selectable target type
///
/// Converting to INT applies the selected rounding method; `round` is
/// ties-to-even.
#[derive(Default)]
pub struct FloatToTypeNode;

impl NodeFactory for FloatToTypeNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "FloatToType",
            "Float to Type",
            NodeCategory::conversion(),
            "Convert a float to various types",
        )
        .with_icon("🔁")
        .with_inputs(vec![
            PortDefinition::required("value", DataType::Float)
                .with_default(0.0)
                .with_range(-999999999999.0, 999999999999.0)
                .with_step(0.001),
            PortDefinition::required("output_type", DataType::String)
                .with_choices(&["INT", "FLOAT", "STRING", "BOOLEAN"])
                .with_default("INT"),
            PortDefinition::optional("round_method", DataType::String)
                .with_choices(&["round", "floor", "ceil", "trunc"])
                .with_default("round"),
        ])
        .with_outputs(vec![PortDefinition::required("value", TypeSet::any())])
        .with_tags(vec!["conversion", "float", "rounding"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let value = arg_float(inputs, 0, 0.0);
        let result = match arg_str(inputs, 1, "INT") {
            "FLOAT" => Value::Float(value),
            "STRING" => Value::String(value.to_string()),
            "BOOLEAN" => Value::Boolean(value != 0.0),
            _ => {
                let rounded = match arg_str(inputs, 2, "round") {
                    "floor" => value.floor(),
                    "ceil" => value.ceil(),
                    "trunc" => value.trunc(),
                    _ => value.round_ties_even(),
                };
                Value::Int(rounded as i64)
            }
        };
        vec![result]
    }
}
