use crate::codec::{Map, Value};

#[test]
fn kind_labels_match_scalar_error_names() {
	assert_eq!(Value::Bool(true).kind(), "bool");
	assert_eq!(Value::I32(1).kind(), "int");
	assert_eq!(Value::F32(1.0).kind(), "float32");
	assert_eq!(Value::F64(1.0).kind(), "float64");
	assert_eq!(Value::from("x").kind(), "string");
	assert_eq!(Value::Map(Map::new()).kind(), "map");
	assert_eq!(Value::Array(Vec::new()).kind(), "array");
}

#[test]
fn accessors_only_match_their_own_kind() {
	let value = Value::from(7);
	assert_eq!(value.as_i32(), Some(7));
	assert_eq!(value.as_bool(), None);
	assert_eq!(value.as_f64(), None);
	assert!(value.as_map().is_none());
}

#[test]
fn serializes_f32_with_its_own_shortest_text() {
	let text = serde_json::to_string(&Value::F32(1.234)).expect("value serializes");
	assert_eq!(text, "1.234");
}

#[test]
fn serializes_nested_containers_to_json() {
	let map = Map::from([(
		"list".to_owned(),
		Value::Array(vec![Value::Bool(false), Value::from("a"), Value::F64(2.5)]),
	)]);

	let json = serde_json::to_value(Value::Map(map)).expect("value serializes");
	assert_eq!(json, serde_json::json!({"list": [false, "a", 2.5]}));
}
