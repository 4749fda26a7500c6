//! Math constants node

use crate::nodes::arg_str;
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// Common mathematical constants
#[derive(Default)]
pub struct MathConstantsNode;

impl NodeFactory for MathConstantsNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "MathConstants",
            "Math Constants",
            NodeCategory::constants(),
            "Common mathematical constants",
        )
        .with_icon("🥧")
        .with_inputs(vec![PortDefinition::required("constant", DataType::String)
            .with_choices(&["pi", "e", "tau", "inf", "nan"])
            .with_default("pi")])
        .with_outputs(vec![PortDefinition::required("value", DataType::Float)])
        .with_tags(vec!["math", "constants"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let value = match arg_str(inputs, 0, "pi") {
            "e" => std::f64::consts::E,
            "tau" => std::f64::consts::TAU,
            "inf" => f64::INFINITY,
            "nan" => f64::NAN,
            _ => std::f64::consts::PI,
        };
        vec![Value::Float(value)]
    }
}
