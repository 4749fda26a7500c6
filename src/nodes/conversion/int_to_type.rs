//! Integer-to-type conversion node

use crate::nodes::{arg_int, arg_str};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::{DataType, TypeSet};
use crate::value::Value;

/// Convert an integer to a selectable target type
///
/// The output port is declared as the wildcard so it can wire into any
/// consumer; the concrete runtime type follows the `output_type` choice.
#[derive(Default)]
pub struct IntToTypeNode;

impl NodeFactory for IntToTypeNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "IntToType",
            "Int to Type",
            NodeCategory::conversion(),
            "Convert an integer to various types",
        )
        .with_icon("🔁")
        .with_inputs(vec![
            PortDefinition::required("value", DataType::Int)
                .with_default(0)
                .with_range(i64::MIN, i64::MAX)
                .with_step(1),
            PortDefinition::required("output_type", DataType::String)
                .with_choices(&["INT", "FLOAT", "STRING", "BOOLEAN"])
                .with_default("INT"),
        ])
        .with_outputs(vec![PortDefinition::required("value", TypeSet::any())])
        .with_tags(vec!["conversion", "integer"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let value = arg_int(inputs, 0, 0);
        let result = match arg_str(inputs, 1, "INT") {
            "FLOAT" => Value::Float(value as f64),
            "STRING" => Value::String(value.to_string()),
            "BOOLEAN" => Value::Boolean(value != 0),
            _ => Value::Int(value),
        };
        vec![result]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_to_type_output_is_wildcard() {
        let metadata = IntToTypeNode::metadata();
        assert!(metadata.outputs[0].type_set.is_wildcard());
        assert_eq!(
            metadata.inputs[1].choices,
            vec!["INT", "FLOAT", "STRING", "BOOLEAN"]
        );
    }

    #[test]
    fn test_int_conversions() {
        let eval = |t: &str| IntToTypeNode::evaluate(&[Value::Int(-3), Value::from(t)]);
        assert_eq!(eval("INT"), vec![Value::Int(-3)]);
        assert_eq!(eval("FLOAT"), vec![Value::Float(-3.0)]);
        assert_eq!(eval("STRING"), vec![Value::from("-3")]);
        assert_eq!(eval("BOOLEAN"), vec![Value::Boolean(true)]);

        assert_eq!(
            IntToTypeNode::evaluate(&[Value::Int(0), Value::from("BOOLEAN")]),
            vec![Value::Boolean(false)]
        );
    }
}
