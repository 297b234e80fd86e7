use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Mapping from string keys to values.
///
/// Iteration order is unspecified; encoded output inherits that order.
pub type Map = HashMap<String, Value>;

/// Generic cereal value tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// `b` marker, encoded as `0` or `1`.
	Bool(bool),
	/// `i` marker, base-10 signed 32-bit integer.
	I32(i32),
	/// `f` marker, 32-bit float.
	F32(f32),
	/// `d` marker, 64-bit float.
	F64(f64),
	/// `"` marker, raw text.
	String(String),
	/// `{` marker, nested map.
	Map(Map),
	/// `[` marker, ordered sequence.
	Array(Vec<Value>),
}

impl Value {
	/// Stable lowercase label for the value kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::I32(_) => "int",
			Self::F32(_) => "float32",
			Self::F64(_) => "float64",
			Self::String(_) => "string",
			Self::Map(_) => "map",
			Self::Array(_) => "array",
		}
	}

	/// Return the boolean payload, if any.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Return the 32-bit integer payload, if any.
	pub fn as_i32(&self) -> Option<i32> {
		match self {
			Self::I32(v) => Some(*v),
			_ => None,
		}
	}

	/// Return the 32-bit float payload, if any.
	pub fn as_f32(&self) -> Option<f32> {
		match self {
			Self::F32(v) => Some(*v),
			_ => None,
		}
	}

	/// Return the 64-bit float payload, if any.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::F64(v) => Some(*v),
			_ => None,
		}
	}

	/// Return the string payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Return the nested map, if any.
	pub fn as_map(&self) -> Option<&Map> {
		match self {
			Self::Map(v) => Some(v),
			_ => None,
		}
	}

	/// Return the nested sequence, if any.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(v) => Some(v),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Self::I32(v)
	}
}

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Self::F32(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::F64(v)
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::String(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::String(v.to_owned())
	}
}

impl From<Map> for Value {
	fn from(v: Map) -> Self {
		Self::Map(v)
	}
}

impl From<Vec<Value>> for Value {
	fn from(v: Vec<Value>) -> Self {
		Self::Array(v)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Bool(v) => serializer.serialize_bool(*v),
			Self::I32(v) => serializer.serialize_i32(*v),
			Self::F32(v) => serializer.serialize_f32(*v),
			Self::F64(v) => serializer.serialize_f64(*v),
			Self::String(v) => serializer.serialize_str(v),
			Self::Map(entries) => {
				let mut map = serializer.serialize_map(Some(entries.len()))?;
				for (key, value) in entries {
					map.serialize_entry(key, value)?;
				}
				map.end()
			}
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
		}
	}
}

#[cfg(test)]
mod tests;
