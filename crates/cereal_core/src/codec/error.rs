use thiserror::Error;

use crate::codec::Path;

/// Result of a decode call.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Result of an encode or value conversion call.
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;

/// Errors produced while decoding cereal bytes.
///
/// Every variant is terminal: the decoder never returns a partial tree.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Reader failure in [`crate::codec::decode_reader`].
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input contained no bytes at all.
	#[error("expected a version in the first byte")]
	EmptyInput,
	/// Leading version marker is not a known revision.
	#[error("unexpected version '{}'", char::from(*byte).escape_default())]
	UnsupportedVersion {
		/// Raw marker byte.
		byte: u8,
	},
	/// Input ended before the current container closed.
	#[error("{path}: unexpected end of input")]
	UnexpectedEndOfInput {
		/// Location of the unfinished container.
		path: Path,
	},
	/// Root container did not start with `{`.
	#[error("{path}: expected '{{'")]
	ExpectedOpenBrace {
		/// Location of the root.
		path: Path,
	},
	/// Byte in type position is not one of `b i f d " { [`.
	#[error("{path}: invalid type marker '{}'", char::from(*marker).escape_default())]
	InvalidTypeMarker {
		/// Offending byte.
		marker: u8,
		/// Location where the marker was read.
		path: Path,
	},
	/// Scalar text could not be parsed for its marker.
	#[error("{path}: invalid {kind} '{raw}'")]
	InvalidScalar {
		/// Scalar kind label (`bool`, `int`, `float32`, `float64`).
		kind: &'static str,
		/// Accumulated text after escape removal.
		raw: String,
		/// Location of the field.
		path: Path,
	},
	/// Container nesting exceeded [`crate::codec::DecodeOptions::max_depth`].
	#[error("{path}: nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured ceiling.
		max_depth: usize,
		/// Location of the container that crossed the ceiling.
		path: Path,
	},
}

/// Errors produced while encoding values or converting them into the value model.
#[derive(Debug, Error)]
pub enum EncodeError {
	/// Version argument was not exactly one byte long.
	#[error("version must be exactly one byte")]
	InvalidVersionLength {
		/// Byte length of the supplied version.
		len: usize,
	},
	/// Version byte is not a known revision.
	///
	/// `output` holds what was written before the failure: the version byte alone.
	#[error("invalid version {version}")]
	UnsupportedVersion {
		/// Supplied version text.
		version: String,
		/// Bytes written before the failure.
		output: Vec<u8>,
	},
	/// Value has no cereal representation.
	#[error("{path}: unsupported value type {kind}")]
	UnsupportedValueKind {
		/// Kind label of the rejected value.
		kind: &'static str,
		/// Location of the value.
		path: Path,
	},
	/// Map key did not serialize as a string.
	#[error("{path}: map key type must be string, not {kind}")]
	NonStringMapKey {
		/// Kind label of the rejected key.
		kind: &'static str,
		/// Location of the map.
		path: Path,
	},
	/// Error raised by a `Serialize` implementation.
	#[error("{message}")]
	Custom {
		/// Message supplied by the implementation.
		message: String,
	},
}

impl serde::ser::Error for EncodeError {
	fn custom<T: std::fmt::Display>(msg: T) -> Self {
		Self::Custom { message: msg.to_string() }
	}
}
