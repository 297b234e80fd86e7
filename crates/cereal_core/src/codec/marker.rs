/// Scalar kinds whose text accumulates until the next structural byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
	/// `b`
	Bool,
	/// `i`
	Int,
	/// `f`
	Float32,
	/// `d`
	Float64,
	/// `"`
	String,
}

impl ScalarKind {
	/// Label used in `invalid <kind>` messages.
	pub fn label(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float32 => "float32",
			Self::Float64 => "float64",
			Self::String => "string",
		}
	}
}

/// Kind selected by the single byte that precedes every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeMarker {
	/// Scalar value terminated by `,` or the enclosing close byte.
	Scalar(ScalarKind),
	/// `{`
	Map,
	/// `[`
	Array,
}

impl TypeMarker {
	/// Map a marker byte to its kind.
	pub fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			b'b' => Some(Self::Scalar(ScalarKind::Bool)),
			b'i' => Some(Self::Scalar(ScalarKind::Int)),
			b'f' => Some(Self::Scalar(ScalarKind::Float32)),
			b'd' => Some(Self::Scalar(ScalarKind::Float64)),
			b'"' => Some(Self::Scalar(ScalarKind::String)),
			b'{' => Some(Self::Map),
			b'[' => Some(Self::Array),
			_ => None,
		}
	}

	/// Marker byte written before a value of this kind.
	pub fn byte(self) -> u8 {
		match self {
			Self::Scalar(ScalarKind::Bool) => b'b',
			Self::Scalar(ScalarKind::Int) => b'i',
			Self::Scalar(ScalarKind::Float32) => b'f',
			Self::Scalar(ScalarKind::Float64) => b'd',
			Self::Scalar(ScalarKind::String) => b'"',
			Self::Map => b'{',
			Self::Array => b'[',
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{ScalarKind, TypeMarker};

	#[test]
	fn marker_bytes_map_both_ways() {
		for byte in *b"bifd\"{[" {
			let marker = TypeMarker::from_byte(byte).expect("known marker");
			assert_eq!(marker.byte(), byte);
		}
	}

	#[test]
	fn unknown_bytes_are_rejected() {
		assert_eq!(TypeMarker::from_byte(b'X'), None);
		assert_eq!(TypeMarker::from_byte(b'}'), None);
	}

	#[test]
	fn scalar_labels_match_error_text() {
		assert_eq!(ScalarKind::Int.label(), "int");
		assert_eq!(ScalarKind::Float32.label(), "float32");
	}
}
