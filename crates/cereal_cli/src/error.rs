use std::path::PathBuf;

use cereal::codec::{DecodeError, EncodeError};
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the command-line front-ends.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading the named input failed.
	#[error("{}: {source}", path.display())]
	ReadInput {
		/// Input path as given on the command line.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Writing converted output failed.
	#[error("write output: {0}")]
	WriteOutput(#[from] std::io::Error),
	/// Input contained zero bytes.
	#[error("input is empty")]
	EmptyInput,
	/// JSON input could not be parsed or output could not be rendered.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Cereal input was rejected by the decoder.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Value was rejected by the encoder.
	#[error(transparent)]
	Encode(#[from] EncodeError),
}
