//! Binary boolean logic node

use crate::nodes::{arg_bool, arg_str};
use crate::registry::{NodeCategory, NodeFactory, NodeMetadata, PortDefinition};
use crate::types::DataType;
use crate::value::Value;

/// Boolean logic operations between two inputs
#[derive(Default)]
pub struct BooleanLogicNode;

impl NodeFactory for BooleanLogicNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "BooleanLogic",
            "Boolean Logic",
            NodeCategory::boolean(),
            "Boolean logic operations",
        )
        .with_icon("🔀")
        .with_inputs(vec![
            PortDefinition::required("a", DataType::Boolean),
            PortDefinition::required("b", DataType::Boolean),
            PortDefinition::required("operation", DataType::String)
                .with_choices(&["AND", "OR", "XOR", "NAND", "NOR", "XNOR"])
                .with_default("AND"),
        ])
        .with_outputs(vec![PortDefinition::required("result", DataType::Boolean)])
        .with_tags(vec!["boolean", "logic", "gate"])
    }

    fn evaluate(inputs: &[Value]) -> Vec<Value> {
        let a = arg_bool(inputs, 0, false);
        let b = arg_bool(inputs, 1, false);
        let result = match arg_str(inputs, 2, "AND") {
            "OR" => a || b,
            "XOR" => a ^ b,
            "NAND" => !(a && b),
            "NOR" => !(a || b),
            "XNOR" => !(a ^ b),
            _ => a && b,
        };
        vec![Value::Boolean(result)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(a: bool, b: bool, op: &str) -> bool {
        match BooleanLogicNode::evaluate(&[
            Value::Boolean(a),
            Value::Boolean(b),
            Value::from(op),
        ])
        .remove(0)
        {
            Value::Boolean(v) => v,
            other => panic!("expected boolean, got {:?}", other),
        }
    }

    #[test]
    fn test_truth_tables() {
        assert!(eval(true, true, "AND"));
        assert!(!eval(true, false, "AND"));
        assert!(eval(true, false, "OR"));
        assert!(!eval(false, false, "OR"));
        assert!(eval(true, false, "XOR"));
        assert!(!eval(true, true, "XOR"));
        assert!(eval(true, false, "NAND"));
        assert!(!eval(true, true, "NAND"));
        assert!(eval(false, false, "NOR"));
        assert!(!eval(true, false, "NOR"));
        assert!(eval(true, true, "XNOR"));
        assert!(!eval(true, false, "XNOR"));
    }
}
