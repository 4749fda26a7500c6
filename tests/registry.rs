//! Integration tests exercising the default registry the way a host
//! editor would: catalog discovery, wiring checks, input validation, and
//! evaluation.

use basic_math_nodes::{default_registry, DataType, NodeCategory, TypeSet, Value};
use std::collections::HashMap;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_all_pack_nodes_are_registered() {
    init_logging();
    let registry = default_registry();
    let expected = [
        "IntegerInput",
        "FloatInput",
        "PreciseFloatInput",
        "BooleanInput",
        "StringInput",
        "IntToType",
        "FloatToType",
        "BasicMath",
        "IntMath",
        "UnaryMath",
        "MathConstants",
        "NumberCompare",
        "NumberRound",
        "NumberClamp",
        "NumberLerp",
        "NumberRange",
        "BooleanLogic",
        "BooleanUnary",
    ];
    let registered = registry.node_types();
    assert_eq!(registered.len(), expected.len());
    for node_type in expected {
        assert!(
            registered.contains(&node_type),
            "missing node type {}",
            node_type
        );
        assert!(registry.metadata(node_type).is_some());
    }
}

#[test]
fn test_every_category_has_nodes() {
    init_logging();
    let registry = default_registry();
    for category in [
        NodeCategory::primitives(),
        NodeCategory::conversion(),
        NodeCategory::arithmetic(),
        NodeCategory::constants(),
        NodeCategory::comparison(),
        NodeCategory::utility(),
        NodeCategory::boolean(),
    ] {
        assert!(
            !registry.node_types_in_category(&category).is_empty(),
            "no nodes in category {}",
            category.display_string()
        );
    }
    assert_eq!(
        registry.node_types_in_category(&NodeCategory::primitives()).len(),
        5
    );
}

#[test]
fn test_wiring_compatibility() {
    init_logging();
    let registry = default_registry();

    // INT output feeds a NUMBER (INT,FLOAT) input
    assert!(registry.can_connect("IntegerInput", "value", "BasicMath", "a"));
    assert!(registry.can_connect("FloatInput", "value", "NumberClamp", "value"));

    // A wildcard output connects anywhere
    assert!(registry.can_connect("BasicMath", "result", "IntMath", "a"));
    assert!(registry.can_connect("IntToType", "value", "BooleanLogic", "a"));

    // Disjoint concrete types are rejected
    assert!(!registry.can_connect("IntegerInput", "value", "BooleanLogic", "a"));
    assert!(!registry.can_connect("StringInput", "value", "BasicMath", "b"));

    // Unknown nodes and ports are rejected, not errors
    assert!(!registry.can_connect("Missing", "value", "BasicMath", "a"));
    assert!(!registry.can_connect("IntegerInput", "nope", "BasicMath", "a"));
}

#[test]
fn test_number_union_is_asymmetric_at_the_port_level() {
    init_logging();
    let registry = default_registry();
    let clamp = registry.metadata("NumberClamp").unwrap();
    let integer = registry.metadata("IntegerInput").unwrap();

    let number_in = &clamp.input("value").unwrap().type_set;
    let int_in = &integer.input("value").unwrap().type_set;
    let int_out = &integer.output("value").unwrap().type_set;

    assert!(int_out.can_connect_to(number_in));
    assert!(!number_in.can_connect_to(int_in));
}

#[test]
fn test_input_validation_messages() {
    init_logging();
    let registry = default_registry();
    let meta = registry.metadata("BasicMath").unwrap();

    let good = HashMap::from([
        ("a".to_string(), TypeSet::single(DataType::Int)),
        ("b".to_string(), TypeSet::single(DataType::Float)),
    ]);
    assert!(meta.validate_input_types(&good).is_ok());

    let variant = HashMap::from([("a".to_string(), TypeSet::parse("INT,FLOAT"))]);
    assert!(meta.validate_input_types(&variant).is_ok());

    let bad = HashMap::from([("a".to_string(), TypeSet::single(DataType::String))]);
    let err = meta.validate_input_types(&bad).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid type of a: STRING (expected FLOAT,INT)"
    );

    // Batch mode surfaces the first failing batch
    let err = meta
        .validate_input_type_batches(&[good, bad])
        .unwrap_err();
    assert_eq!(err.key, "a");
}

#[test]
fn test_graph_style_evaluation_chain() {
    init_logging();
    let registry = default_registry();

    // IntegerInput(7) -> BasicMath(+, b=3) -> NumberCompare(== 10)
    let produced = registry
        .evaluate("IntegerInput", &[Value::Int(7)])
        .unwrap()
        .remove(0);
    let sum = registry
        .evaluate("BasicMath", &[produced, Value::Int(3), Value::from("+")])
        .unwrap()
        .remove(0);
    assert_eq!(sum, Value::Int(10));
    let check = registry
        .evaluate(
            "NumberCompare",
            &[sum, Value::Float(10.0), Value::from("==")],
        )
        .unwrap();
    assert_eq!(check, vec![Value::Boolean(true)]);
}

#[test]
fn test_sentinel_arithmetic_never_panics() {
    init_logging();
    let registry = default_registry();

    let div = registry
        .evaluate("BasicMath", &[Value::Int(1), Value::Int(0), Value::from("/")])
        .unwrap();
    assert_eq!(div, vec![Value::Float(f64::INFINITY)]);

    let neg_div = registry
        .evaluate(
            "BasicMath",
            &[Value::Float(-2.0), Value::Float(0.0), Value::from("/")],
        )
        .unwrap();
    assert_eq!(neg_div, vec![Value::Float(f64::NEG_INFINITY)]);

    let modulo = registry
        .evaluate("BasicMath", &[Value::Int(1), Value::Int(0), Value::from("%")])
        .unwrap();
    assert!(matches!(modulo[0], Value::Float(f) if f.is_nan()));

    let int_div = registry
        .evaluate("IntMath", &[Value::Int(1), Value::Int(0), Value::from("//")])
        .unwrap();
    assert_eq!(int_div, vec![Value::Int(0)]);
}

#[test]
fn test_display_names_carry_pack_postfix() {
    init_logging();
    let names = default_registry().display_names();
    assert_eq!(names.get("IntegerInput").unwrap(), "Integer | Basic");
    assert_eq!(names.get("BasicMath").unwrap(), "Basic Math | Basic");
    assert_eq!(names.len(), 18);
}

#[test]
fn test_catalog_json_round_trips() {
    init_logging();
    let json = default_registry().catalog_json().unwrap();
    let catalog: serde_json::Value = serde_json::from_str(&json).unwrap();
    let entries = catalog.as_array().unwrap();
    assert_eq!(entries.len(), 18);

    let basic_math = entries
        .iter()
        .find(|e| e["node_type"] == "BasicMath")
        .unwrap();
    // Type sets serialize in their comma-joined wire form
    assert_eq!(basic_math["inputs"][0]["type_set"], "FLOAT,INT");
    assert_eq!(basic_math["outputs"][0]["type_set"], "*");
    assert_eq!(basic_math["category"]["path"][0], "Basic Math");
}
