//! Conversion of any [`serde::Serialize`] value into the cereal value model.
//!
//! Every serializer carries the [`Path`] of the value it produces, so a rejected
//! value or map key is reported at its exact location.

use serde::ser::{self, Impossible, Serialize};

use crate::codec::{EncodeError, EncodeResult, Map, Path, Value};

/// Normalize a serializable value into a [`Value`] rooted at `<root>`.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> EncodeResult<Value> {
	value.serialize(ValueSerializer::new(Path::root()))
}

/// Serializer producing a [`Value`] for the value located at `path`.
pub struct ValueSerializer {
	path: Path,
}

impl ValueSerializer {
	/// Create a serializer for the value located at `path`.
	pub fn new(path: Path) -> Self {
		Self { path }
	}

	fn unsupported(self, kind: &'static str) -> EncodeError {
		EncodeError::UnsupportedValueKind { kind, path: self.path }
	}
}

macro_rules! serialize_small_integer {
	($fn_name: ident, $int_type: ty) => {
		fn $fn_name(self, v: $int_type) -> EncodeResult<Value> {
			Ok(Value::I32(i32::from(v)))
		}
	};
}

/// Integers outside the 32-bit range widen to `F64`.
macro_rules! serialize_wide_integer {
	($fn_name: ident, $int_type: ty) => {
		fn $fn_name(self, v: $int_type) -> EncodeResult<Value> {
			Ok(match i32::try_from(v) {
				Ok(small) => Value::I32(small),
				Err(_) => Value::F64(v as f64),
			})
		}
	};
}

impl ser::Serializer for ValueSerializer {
	type Ok = Value;
	type Error = EncodeError;

	type SerializeSeq = SeqSerializer;
	type SerializeTuple = SeqSerializer;
	type SerializeTupleStruct = SeqSerializer;
	type SerializeTupleVariant = Impossible<Value, EncodeError>;
	type SerializeMap = MapSerializer;
	type SerializeStruct = MapSerializer;
	type SerializeStructVariant = Impossible<Value, EncodeError>;

	fn serialize_bool(self, v: bool) -> EncodeResult<Value> {
		Ok(Value::Bool(v))
	}

	serialize_small_integer! {serialize_i8, i8}
	serialize_small_integer! {serialize_i16, i16}
	serialize_small_integer! {serialize_i32, i32}
	serialize_wide_integer! {serialize_i64, i64}
	serialize_wide_integer! {serialize_i128, i128}
	serialize_small_integer! {serialize_u8, u8}
	serialize_small_integer! {serialize_u16, u16}
	serialize_wide_integer! {serialize_u32, u32}
	serialize_wide_integer! {serialize_u64, u64}
	serialize_wide_integer! {serialize_u128, u128}

	fn serialize_f32(self, v: f32) -> EncodeResult<Value> {
		Ok(Value::F32(v))
	}

	fn serialize_f64(self, v: f64) -> EncodeResult<Value> {
		Ok(Value::F64(v))
	}

	fn serialize_char(self, v: char) -> EncodeResult<Value> {
		Ok(Value::String(v.to_string()))
	}

	fn serialize_str(self, v: &str) -> EncodeResult<Value> {
		Ok(Value::String(v.to_owned()))
	}

	fn serialize_bytes(self, _: &[u8]) -> EncodeResult<Value> {
		Err(self.unsupported("bytes"))
	}

	fn serialize_none(self) -> EncodeResult<Value> {
		Err(self.unsupported("null"))
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> EncodeResult<Value> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> EncodeResult<Value> {
		Err(self.unsupported("null"))
	}

	fn serialize_unit_struct(self, _: &'static str) -> EncodeResult<Value> {
		Err(self.unsupported("null"))
	}

	fn serialize_unit_variant(self, _: &'static str, _: u32, variant: &'static str) -> EncodeResult<Value> {
		Ok(Value::String(variant.to_owned()))
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _: &'static str, value: &T) -> EncodeResult<Value> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(
		self,
		_: &'static str,
		_: u32,
		_: &'static str,
		_: &T,
	) -> EncodeResult<Value> {
		Err(self.unsupported("enum"))
	}

	fn serialize_seq(self, len: Option<usize>) -> EncodeResult<SeqSerializer> {
		Ok(SeqSerializer {
			path: self.path,
			items: Vec::with_capacity(len.unwrap_or(0)),
		})
	}

	fn serialize_tuple(self, len: usize) -> EncodeResult<SeqSerializer> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(self, _: &'static str, len: usize) -> EncodeResult<SeqSerializer> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_variant(
		self,
		_: &'static str,
		_: u32,
		_: &'static str,
		_: usize,
	) -> EncodeResult<Self::SerializeTupleVariant> {
		Err(self.unsupported("enum"))
	}

	fn serialize_map(self, _: Option<usize>) -> EncodeResult<MapSerializer> {
		Ok(MapSerializer {
			path: self.path,
			entries: Map::new(),
			pending_key: None,
		})
	}

	fn serialize_struct(self, _: &'static str, len: usize) -> EncodeResult<MapSerializer> {
		self.serialize_map(Some(len))
	}

	fn serialize_struct_variant(
		self,
		_: &'static str,
		_: u32,
		_: &'static str,
		_: usize,
	) -> EncodeResult<Self::SerializeStructVariant> {
		Err(self.unsupported("enum"))
	}
}

/// Collects sequence and tuple elements into [`Value::Array`].
pub struct SeqSerializer {
	path: Path,
	items: Vec<Value>,
}

impl SeqSerializer {
	fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> EncodeResult<()> {
		let item = value.serialize(ValueSerializer::new(self.path.index(self.items.len())))?;
		self.items.push(item);
		Ok(())
	}
}

impl ser::SerializeSeq for SeqSerializer {
	type Ok = Value;
	type Error = EncodeError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> EncodeResult<()> {
		self.push(value)
	}

	fn end(self) -> EncodeResult<Value> {
		Ok(Value::Array(self.items))
	}
}

impl ser::SerializeTuple for SeqSerializer {
	type Ok = Value;
	type Error = EncodeError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> EncodeResult<()> {
		self.push(value)
	}

	fn end(self) -> EncodeResult<Value> {
		Ok(Value::Array(self.items))
	}
}

impl ser::SerializeTupleStruct for SeqSerializer {
	type Ok = Value;
	type Error = EncodeError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> EncodeResult<()> {
		self.push(value)
	}

	fn end(self) -> EncodeResult<Value> {
		Ok(Value::Array(self.items))
	}
}

/// Collects map entries and struct fields into [`Value::Map`].
pub struct MapSerializer {
	path: Path,
	entries: Map,
	pending_key: Option<String>,
}

impl ser::SerializeMap for MapSerializer {
	type Ok = Value;
	type Error = EncodeError;

	fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> EncodeResult<()> {
		self.pending_key = Some(key.serialize(KeySerializer { path: &self.path })?);
		Ok(())
	}

	fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> EncodeResult<()> {
		let key = self.pending_key.take().ok_or_else(|| EncodeError::Custom {
			message: format!("{}: map value serialized before its key", self.path),
		})?;
		let value = value.serialize(ValueSerializer::new(self.path.child(&key)))?;
		self.entries.insert(key, value);
		Ok(())
	}

	fn end(self) -> EncodeResult<Value> {
		Ok(Value::Map(self.entries))
	}
}

impl ser::SerializeStruct for MapSerializer {
	type Ok = Value;
	type Error = EncodeError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> EncodeResult<()> {
		let value = value.serialize(ValueSerializer::new(self.path.child(key)))?;
		self.entries.insert(key.to_owned(), value);
		Ok(())
	}

	fn end(self) -> EncodeResult<Value> {
		Ok(Value::Map(self.entries))
	}
}

/// Accepts only string-like map keys; anything else is reported at the map's path.
struct KeySerializer<'p> {
	path: &'p Path,
}

impl KeySerializer<'_> {
	fn reject(&self, kind: &'static str) -> EncodeError {
		EncodeError::NonStringMapKey {
			kind,
			path: self.path.clone(),
		}
	}
}

macro_rules! reject_key {
	($fn_name: ident, $arg_type: ty, $kind: literal) => {
		fn $fn_name(self, _: $arg_type) -> EncodeResult<String> {
			Err(self.reject($kind))
		}
	};
}

impl ser::Serializer for KeySerializer<'_> {
	type Ok = String;
	type Error = EncodeError;

	type SerializeSeq = Impossible<String, EncodeError>;
	type SerializeTuple = Impossible<String, EncodeError>;
	type SerializeTupleStruct = Impossible<String, EncodeError>;
	type SerializeTupleVariant = Impossible<String, EncodeError>;
	type SerializeMap = Impossible<String, EncodeError>;
	type SerializeStruct = Impossible<String, EncodeError>;
	type SerializeStructVariant = Impossible<String, EncodeError>;

	reject_key! {serialize_bool, bool, "bool"}
	reject_key! {serialize_i8, i8, "int"}
	reject_key! {serialize_i16, i16, "int"}
	reject_key! {serialize_i32, i32, "int"}
	reject_key! {serialize_i64, i64, "int"}
	reject_key! {serialize_i128, i128, "int"}
	reject_key! {serialize_u8, u8, "uint"}
	reject_key! {serialize_u16, u16, "uint"}
	reject_key! {serialize_u32, u32, "uint"}
	reject_key! {serialize_u64, u64, "uint"}
	reject_key! {serialize_u128, u128, "uint"}
	reject_key! {serialize_f32, f32, "float32"}
	reject_key! {serialize_f64, f64, "float64"}
	reject_key! {serialize_bytes, &[u8], "bytes"}

	fn serialize_char(self, v: char) -> EncodeResult<String> {
		Ok(v.to_string())
	}

	fn serialize_str(self, v: &str) -> EncodeResult<String> {
		Ok(v.to_owned())
	}

	fn serialize_none(self) -> EncodeResult<String> {
		Err(self.reject("null"))
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> EncodeResult<String> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> EncodeResult<String> {
		Err(self.reject("null"))
	}

	fn serialize_unit_struct(self, _: &'static str) -> EncodeResult<String> {
		Err(self.reject("null"))
	}

	fn serialize_unit_variant(self, _: &'static str, _: u32, variant: &'static str) -> EncodeResult<String> {
		Ok(variant.to_owned())
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _: &'static str, value: &T) -> EncodeResult<String> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(
		self,
		_: &'static str,
		_: u32,
		_: &'static str,
		_: &T,
	) -> EncodeResult<String> {
		Err(self.reject("enum"))
	}

	fn serialize_seq(self, _: Option<usize>) -> EncodeResult<Self::SerializeSeq> {
		Err(self.reject("array"))
	}

	fn serialize_tuple(self, _: usize) -> EncodeResult<Self::SerializeTuple> {
		Err(self.reject("array"))
	}

	fn serialize_tuple_struct(self, _: &'static str, _: usize) -> EncodeResult<Self::SerializeTupleStruct> {
		Err(self.reject("array"))
	}

	fn serialize_tuple_variant(
		self,
		_: &'static str,
		_: u32,
		_: &'static str,
		_: usize,
	) -> EncodeResult<Self::SerializeTupleVariant> {
		Err(self.reject("enum"))
	}

	fn serialize_map(self, _: Option<usize>) -> EncodeResult<Self::SerializeMap> {
		Err(self.reject("map"))
	}

	fn serialize_struct(self, _: &'static str, _: usize) -> EncodeResult<Self::SerializeStruct> {
		Err(self.reject("map"))
	}

	fn serialize_struct_variant(
		self,
		_: &'static str,
		_: u32,
		_: &'static str,
		_: usize,
	) -> EncodeResult<Self::SerializeStructVariant> {
		Err(self.reject("enum"))
	}
}

#[cfg(test)]
mod tests;
