use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::codec::{EncodeError, Map, Value, to_value};

#[derive(Serialize)]
struct Settings {
	name: &'static str,
	ratio: f32,
	limits: Vec<u16>,
	nested: Inner,
}

#[derive(Serialize)]
struct Inner {
	enabled: bool,
}

#[test]
fn struct_becomes_map_of_typed_values() {
	let value = to_value(&Settings {
		name: "main",
		ratio: 0.5,
		limits: vec![1, 2],
		nested: Inner { enabled: true },
	})
	.expect("struct converts");

	let map = value.as_map().expect("struct is a map");
	assert_eq!(map["name"], Value::from("main"));
	assert_eq!(map["ratio"], Value::F32(0.5));
	assert_eq!(map["limits"], Value::Array(vec![Value::I32(1), Value::I32(2)]));
	assert_eq!(map["nested"].as_map().expect("nested map")["enabled"], Value::Bool(true));
}

#[test]
fn wide_integers_widen_to_float64() {
	assert_eq!(to_value(&7_i64).expect("small i64 converts"), Value::I32(7));
	assert_eq!(to_value(&3_000_000_000_u64).expect("large u64 converts"), Value::F64(3_000_000_000.0));
	assert_eq!(to_value(&i64::from(i32::MIN)).expect("i32::MIN converts"), Value::I32(i32::MIN));
}

#[test]
fn options_unwrap_or_fail_as_null() {
	assert_eq!(to_value(&Some(true)).expect("some converts"), Value::Bool(true));

	let map = HashMap::from([("x", None::<i32>)]);
	let err = to_value(&map).expect_err("none is unsupported");
	assert!(matches!(err, EncodeError::UnsupportedValueKind { kind: "null", .. }));
	assert_eq!(err.to_string(), "<root>.x: unsupported value type null");
}

#[test]
fn unit_variants_become_strings() {
	#[derive(Serialize)]
	enum Mode {
		Fast,
	}

	assert_eq!(to_value(&Mode::Fast).expect("unit variant converts"), Value::from("Fast"));
}

#[test]
fn data_carrying_variants_are_unsupported() {
	#[derive(Serialize)]
	enum Shape {
		Circle(f64),
	}

	let map = BTreeMap::from([("s", Shape::Circle(1.0))]);
	let err = to_value(&map).expect_err("newtype variant is unsupported");
	assert_eq!(err.to_string(), "<root>.s: unsupported value type enum");
}

#[test]
fn non_string_key_reports_map_path() {
	let inner = BTreeMap::from([(5, 5)]);
	let outer = BTreeMap::from([("x", inner)]);

	let err = to_value(&outer).expect_err("int key is rejected");
	assert!(matches!(err, EncodeError::NonStringMapKey { kind: "int", .. }));
	assert_eq!(err.to_string(), "<root>.x: map key type must be string, not int");
}

#[test]
fn char_keys_are_accepted() {
	let map = BTreeMap::from([('k', 1)]);
	let value = to_value(&map).expect("char key converts");
	assert_eq!(value.as_map().expect("map")["k"], Value::I32(1));
}

#[test]
fn error_inside_array_reports_index_path() {
	let map = BTreeMap::from([("list", vec![Some(1), None])]);
	let err = to_value(&map).expect_err("null element is rejected");
	assert_eq!(err.to_string(), "<root>.list.1: unsupported value type null");
}

#[test]
fn json_values_convert_with_numeric_narrowing() {
	let json = serde_json::json!({"x": {"d": 1.5, "i": 2, "big": 5_000_000_000_i64, "s": "a", "b": true}});
	let value = to_value(&json).expect("json converts");

	let x = value.as_map().expect("root map")["x"].as_map().expect("x map").clone();
	assert_eq!(x["d"], Value::F64(1.5));
	assert_eq!(x["i"], Value::I32(2));
	assert_eq!(x["big"], Value::F64(5_000_000_000.0));
	assert_eq!(x["s"], Value::from("a"));
	assert_eq!(x["b"], Value::Bool(true));
}

#[test]
fn json_null_is_rejected_with_path() {
	let json = serde_json::json!({"x": {"nil": null}});
	let err = to_value(&json).expect_err("null is unsupported");
	assert_eq!(err.to_string(), "<root>.x.nil: unsupported value type null");
}

#[test]
fn value_model_converts_to_itself() {
	let original = Value::Map(Map::from([
		("f".to_owned(), Value::F32(2.25)),
		("a".to_owned(), Value::Array(vec![Value::I32(-1), Value::from("s")])),
	]));

	assert_eq!(to_value(&original).expect("value converts"), original);
}
