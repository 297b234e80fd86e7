use std::io::{self, Read, Write};
use std::path::Path;

use crate::error::{CliError, Result};

/// Read the whole input named on the command line; `-` selects standard input.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
	let bytes = if path.as_os_str() == "-" {
		log::debug!("reading standard input");
		let mut bytes = Vec::new();
		io::stdin().lock().read_to_end(&mut bytes).map_err(|source| CliError::ReadInput {
			path: path.to_owned(),
			source,
		})?;
		bytes
	} else {
		log::debug!("reading {}", path.display());
		std::fs::read(path).map_err(|source| CliError::ReadInput {
			path: path.to_owned(),
			source,
		})?
	};

	log::debug!("read {} input bytes", bytes.len());
	if bytes.is_empty() {
		return Err(CliError::EmptyInput);
	}
	Ok(bytes)
}

/// Write converted bytes to standard output.
pub(crate) fn write_output(bytes: &[u8]) -> Result<()> {
	log::debug!("writing {} output bytes", bytes.len());
	let mut stdout = io::stdout().lock();
	stdout.write_all(bytes)?;
	stdout.flush()?;
	Ok(())
}
