use std::io::Read;

use crate::codec::bytes::Cursor;
use crate::codec::marker::{ScalarKind, TypeMarker};
use crate::codec::{DecodeError, DecodeResult, Map, Path, Value, Version};

/// Runtime limits for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum number of simultaneously open containers, root map included.
	pub max_depth: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 512 }
	}
}

/// Decode a complete cereal document into its root map.
pub fn decode(bytes: &[u8]) -> DecodeResult<Map> {
	decode_with_options(bytes, &DecodeOptions::default())
}

/// Decode a complete cereal document with explicit limits.
///
/// Bytes following the root map's closing `}` are ignored.
pub fn decode_with_options(bytes: &[u8], options: &DecodeOptions) -> DecodeResult<Map> {
	let mut cursor = Cursor::new(bytes);
	let byte = cursor.next_byte().ok_or(DecodeError::EmptyInput)?;

	match Version::from_byte(byte) {
		Some(Version::V1) => Decoder { cursor, options }.read_document_v1(),
		None => Err(DecodeError::UnsupportedVersion { byte }),
	}
}

/// Read `reader` to the end, then decode the collected bytes.
pub fn decode_reader<R: Read>(mut reader: R) -> DecodeResult<Map> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes)?;
	decode(&bytes)
}

#[derive(Debug, Clone, Copy)]
enum MapState {
	ReadingKey,
	ReadingType,
	ReadingValue(ScalarKind),
}

#[derive(Debug, Clone, Copy)]
enum ArrayState {
	ReadingType,
	ReadingValue(ScalarKind),
}

struct Decoder<'a, 'o> {
	cursor: Cursor<'a>,
	options: &'o DecodeOptions,
}

impl Decoder<'_, '_> {
	fn read_document_v1(&mut self) -> DecodeResult<Map> {
		let path = Path::root();
		match self.cursor.next_byte() {
			Some(b'{') => self.read_map(&path, 1),
			Some(_) => Err(DecodeError::ExpectedOpenBrace { path }),
			None => Err(DecodeError::UnexpectedEndOfInput { path }),
		}
	}

	fn next_byte(&mut self, path: &Path) -> DecodeResult<u8> {
		self.cursor
			.next_byte()
			.ok_or_else(|| DecodeError::UnexpectedEndOfInput { path: path.clone() })
	}

	fn check_depth(&self, path: &Path, depth: usize) -> DecodeResult<()> {
		if depth > self.options.max_depth {
			return Err(DecodeError::DepthExceeded {
				max_depth: self.options.max_depth,
				path: path.clone(),
			});
		}
		Ok(())
	}

	/// Parse a map body whose opening `{` was already consumed.
	fn read_map(&mut self, path: &Path, depth: usize) -> DecodeResult<Map> {
		self.check_depth(path, depth)?;

		let mut out = Map::new();
		let mut state = MapState::ReadingKey;
		let mut key = Vec::new();
		let mut value = Vec::new();
		let mut escaped = false;

		loop {
			let byte = self.next_byte(path)?;
			match state {
				MapState::ReadingKey => {
					if escaped {
						escaped = false;
						key.push(byte);
					} else if byte == b'}' && key.is_empty() {
						return Ok(out);
					} else if byte == b',' && key.is_empty() {
						continue;
					} else if byte == b':' {
						state = MapState::ReadingType;
					} else if byte == b'\\' {
						escaped = true;
					} else {
						key.push(byte);
					}
				}
				MapState::ReadingType => {
					// Map-level path: the key is not part of the location yet.
					let marker = TypeMarker::from_byte(byte).ok_or_else(|| DecodeError::InvalidTypeMarker {
						marker: byte,
						path: path.clone(),
					})?;

					match marker {
						TypeMarker::Scalar(kind) => state = MapState::ReadingValue(kind),
						TypeMarker::Map => {
							let name = take_text(&mut key);
							let nested = self.read_map(&path.child(&name), depth + 1)?;
							out.insert(name, Value::Map(nested));
							state = MapState::ReadingKey;
						}
						TypeMarker::Array => {
							let name = take_text(&mut key);
							let nested = self.read_array(&path.child(&name), depth + 1)?;
							out.insert(name, Value::Array(nested));
							state = MapState::ReadingKey;
						}
					}
				}
				MapState::ReadingValue(kind) => {
					if escaped {
						escaped = false;
						value.push(byte);
					} else if byte == b',' || byte == b'}' {
						let name = take_text(&mut key);
						let parsed = parse_scalar(kind, take_text(&mut value), &path.child(&name))?;
						out.insert(name, parsed);
						if byte == b'}' {
							return Ok(out);
						}
						state = MapState::ReadingKey;
					} else if byte == b'\\' {
						escaped = true;
					} else {
						value.push(byte);
					}
				}
			}
		}
	}

	/// Parse an array body whose opening `[` was already consumed.
	fn read_array(&mut self, path: &Path, depth: usize) -> DecodeResult<Vec<Value>> {
		self.check_depth(path, depth)?;

		let mut out = Vec::new();
		let mut state = ArrayState::ReadingType;
		let mut value = Vec::new();
		let mut escaped = false;

		loop {
			let byte = self.next_byte(path)?;
			match state {
				ArrayState::ReadingType => {
					if byte == b']' {
						return Ok(out);
					}
					if byte == b',' {
						continue;
					}

					let element = path.index(out.len());
					let marker = TypeMarker::from_byte(byte).ok_or_else(|| DecodeError::InvalidTypeMarker {
						marker: byte,
						path: element.clone(),
					})?;

					match marker {
						TypeMarker::Scalar(kind) => state = ArrayState::ReadingValue(kind),
						TypeMarker::Map => {
							let nested = self.read_map(&element, depth + 1)?;
							out.push(Value::Map(nested));
						}
						TypeMarker::Array => {
							let nested = self.read_array(&element, depth + 1)?;
							out.push(Value::Array(nested));
						}
					}
				}
				ArrayState::ReadingValue(kind) => {
					if escaped {
						escaped = false;
						value.push(byte);
					} else if byte == b',' || byte == b']' {
						let parsed = parse_scalar(kind, take_text(&mut value), &path.index(out.len()))?;
						out.push(parsed);
						if byte == b']' {
							return Ok(out);
						}
						state = ArrayState::ReadingType;
					} else if byte == b'\\' {
						escaped = true;
					} else {
						value.push(byte);
					}
				}
			}
		}
	}
}

/// Drain an accumulation buffer into text. Invalid UTF-8 is replaced, never rejected.
fn take_text(buf: &mut Vec<u8>) -> String {
	let bytes = std::mem::take(buf);
	String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

fn parse_scalar(kind: ScalarKind, raw: String, path: &Path) -> DecodeResult<Value> {
	let parsed = match kind {
		ScalarKind::Bool => match raw.as_str() {
			"0" => Some(Value::Bool(false)),
			"1" => Some(Value::Bool(true)),
			_ => None,
		},
		ScalarKind::Int => raw.parse::<i32>().ok().map(Value::I32),
		ScalarKind::Float32 => parse_finite(&raw, |v: &f32| v.is_infinite()).map(Value::F32),
		ScalarKind::Float64 => parse_finite(&raw, |v: &f64| v.is_infinite()).map(Value::F64),
		ScalarKind::String => return Ok(Value::String(raw)),
	};

	parsed.ok_or_else(|| DecodeError::InvalidScalar {
		kind: kind.label(),
		raw,
		path: path.clone(),
	})
}

/// Parse a float literal, rejecting finite-looking text that overflows the target width.
fn parse_finite<T: std::str::FromStr>(raw: &str, is_infinite: fn(&T) -> bool) -> Option<T> {
	let value = raw.parse::<T>().ok()?;
	if is_infinite(&value) && !raw.to_ascii_lowercase().contains("inf") {
		return None;
	}
	Some(value)
}
