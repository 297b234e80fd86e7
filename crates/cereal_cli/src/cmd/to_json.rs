use std::path::PathBuf;

use cereal::codec::{DecodeOptions, decode_with_options};

use crate::cmd::util::{read_input, write_output};
use crate::error::Result;

/// Output and decoder settings for `to-json`.
#[derive(Debug, Clone, Copy)]
pub struct ToJsonOptions {
	/// Pretty-print the JSON output.
	pub pretty: bool,
	/// Decoder nesting ceiling.
	pub max_depth: usize,
}

impl Default for ToJsonOptions {
	fn default() -> Self {
		Self {
			pretty: false,
			max_depth: DecodeOptions::default().max_depth,
		}
	}
}

/// Decode the cereal input and print it as one line of JSON.
pub fn run(input: PathBuf, options: ToJsonOptions) -> Result<()> {
	let bytes = read_input(&input)?;
	let json = render(&bytes, options)?;
	write_output(json.as_bytes())
}

/// Convert cereal bytes to JSON text terminated by a newline.
pub fn render(bytes: &[u8], options: ToJsonOptions) -> Result<String> {
	let decode_options = DecodeOptions {
		max_depth: options.max_depth,
	};
	let map = decode_with_options(bytes, &decode_options)?;
	log::debug!("decoded {} top-level entries", map.len());

	let mut out = if options.pretty {
		serde_json::to_string_pretty(&map)?
	} else {
		serde_json::to_string(&map)?
	};
	out.push('\n');
	Ok(out)
}
