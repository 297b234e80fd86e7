#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "cereal", about = "Convert between cereal and JSON documents")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode a cereal document and print it as JSON.
	#[command(visible_alias = "cereal2json")]
	ToJson {
		/// Input file, or `-` for standard input.
		input: PathBuf,
		/// Pretty-print the JSON output.
		#[arg(long)]
		pretty: bool,
		/// Maximum container nesting accepted by the decoder.
		#[arg(long, default_value_t = cereal::codec::DecodeOptions::default().max_depth)]
		max_depth: usize,
	},
	/// Parse a JSON object and print it as a cereal document.
	#[command(visible_alias = "json2cereal")]
	FromJson {
		/// Input file, or `-` for standard input.
		input: PathBuf,
		/// Single-byte grammar version written at the start of the output.
		#[arg(long, default_value = "1")]
		format_version: String,
	},
}

fn main() {
	init_logging();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging() {
	let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
	pretty_env_logger::formatted_builder().parse_filters(&filters).init();
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::ToJson { input, pretty, max_depth } => cmd::to_json::run(input, cmd::to_json::ToJsonOptions { pretty, max_depth }),
		Commands::FromJson { input, format_version } => cmd::from_json::run(input, &format_version),
	}
}
