use std::path::PathBuf;

use cereal::codec::encode_serialize;

use crate::cmd::util::{read_input, write_output};
use crate::error::Result;

/// Parse the JSON input and print it as a cereal document without a trailing newline.
pub fn run(input: PathBuf, version: &str) -> Result<()> {
	let bytes = read_input(&input)?;
	let out = render(&bytes, version)?;
	write_output(&out)
}

/// Convert JSON text into cereal bytes.
///
/// JSON integers that fit in 32 bits become `i` values; every other number becomes `d`.
pub fn render(bytes: &[u8], version: &str) -> Result<Vec<u8>> {
	let json: serde_json::Value = serde_json::from_slice(bytes)?;
	Ok(encode_serialize(&json, version)?)
}

#[cfg(test)]
mod tests {
	use cereal::codec::{EncodeError, Value, decode};

	use super::render;
	use crate::error::CliError;

	#[test]
	fn single_key_renders_exactly() {
		let out = render(br#"{"b": true}"#, "1").expect("json renders");
		assert_eq!(out, b"1{b:b1}");
	}

	#[test]
	fn numbers_split_into_int_and_double() {
		let out = render(br#"{"i": 2, "d": 1.0, "big": 4294967296}"#, "1").expect("json renders");
		let map = decode(&out).expect("output decodes");
		assert_eq!(map["i"], Value::I32(2));
		assert_eq!(map["d"], Value::F64(1.0));
		assert_eq!(map["big"], Value::F64(4294967296.0));
	}

	#[test]
	fn null_is_rejected_with_path() {
		let err = render(br#"{"x": {"nil": null}}"#, "1").expect_err("null fails");
		assert!(matches!(err, CliError::Encode(EncodeError::UnsupportedValueKind { .. })));
		assert_eq!(err.to_string(), "<root>.x.nil: unsupported value type null");
	}

	#[test]
	fn non_object_root_is_rejected() {
		let err = render(b"[1, 2]", "1").expect_err("array root fails");
		assert_eq!(err.to_string(), "<root>: unsupported value type array");
	}

	#[test]
	fn malformed_json_is_reported() {
		let err = render(b"{", "1").expect_err("truncated json fails");
		assert!(matches!(err, CliError::Json(_)));
	}

	#[test]
	fn version_is_forwarded() {
		let err = render(b"{}", "2").expect_err("version 2 is undefined");
		assert_eq!(err.to_string(), "invalid version 2");
	}
}
