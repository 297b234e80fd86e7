use serde::Serialize;

use crate::codec::marker::{ScalarKind, TypeMarker};
use crate::codec::{EncodeError, EncodeResult, Map, Path, Value, Version, to_value};

/// Encode a root map as a cereal document.
///
/// `version` must be exactly one byte; only `1` is defined. Map entries are written
/// in the map's iteration order, which is unspecified. Keys and strings are written
/// verbatim: callers embedding structural bytes must escape them with `\` first.
pub fn encode(map: &Map, version: &str) -> EncodeResult<Vec<u8>> {
	let (mut out, version) = start_document(version)?;
	match version {
		Version::V1 => write_map(&mut out, map),
	}
	Ok(out)
}

/// Convert any serializable value into the value model, then encode it.
///
/// The value must normalize to a map at the root.
pub fn encode_serialize<T: Serialize + ?Sized>(value: &T, version: &str) -> EncodeResult<Vec<u8>> {
	let (mut out, version) = start_document(version)?;
	let map = match to_value(value)? {
		Value::Map(map) => map,
		other => {
			return Err(EncodeError::UnsupportedValueKind {
				kind: other.kind(),
				path: Path::root(),
			});
		}
	};

	match version {
		Version::V1 => write_map(&mut out, &map),
	}
	Ok(out)
}

fn start_document(version: &str) -> EncodeResult<(Vec<u8>, Version)> {
	let &[byte] = version.as_bytes() else {
		return Err(EncodeError::InvalidVersionLength { len: version.len() });
	};

	match Version::from_byte(byte) {
		Some(known) => Ok((vec![known.byte()], known)),
		None => Err(EncodeError::UnsupportedVersion {
			version: version.to_owned(),
			output: vec![byte],
		}),
	}
}

fn write_value(out: &mut Vec<u8>, value: &Value) {
	match value {
		Value::Bool(v) => write_scalar(out, ScalarKind::Bool, if *v { "1" } else { "0" }),
		Value::I32(v) => write_scalar(out, ScalarKind::Int, &v.to_string()),
		Value::F32(v) => write_scalar(out, ScalarKind::Float32, &v.to_string()),
		Value::F64(v) => write_scalar(out, ScalarKind::Float64, &v.to_string()),
		Value::String(v) => write_scalar(out, ScalarKind::String, v),
		Value::Map(map) => write_map(out, map),
		Value::Array(items) => write_array(out, items),
	}
}

fn write_scalar(out: &mut Vec<u8>, kind: ScalarKind, text: &str) {
	out.push(TypeMarker::Scalar(kind).byte());
	out.extend_from_slice(text.as_bytes());
}

fn write_map(out: &mut Vec<u8>, map: &Map) {
	out.push(TypeMarker::Map.byte());
	for (idx, (key, value)) in map.iter().enumerate() {
		if idx > 0 {
			out.push(b',');
		}
		out.extend_from_slice(key.as_bytes());
		out.push(b':');
		write_value(out, value);
	}
	out.push(b'}');
}

fn write_array(out: &mut Vec<u8>, items: &[Value]) {
	out.push(TypeMarker::Array.byte());
	for (idx, item) in items.iter().enumerate() {
		if idx > 0 {
			out.push(b',');
		}
		write_value(out, item);
	}
	out.push(b']');
}
