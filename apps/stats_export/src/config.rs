use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "Stats Export")]
#[command(about = "Computes advanced per-team game stats and appends them to a CSV", long_about = None)]
pub struct Cli {
	/// Path to the env.toml file
	#[arg(short, long, value_name = "FILE")]
	pub config: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Config {
	/// Directory of per-game extracted-table JSON files
	pub input_dir: String,
	/// Path to the output CSV file
	pub output_file: String,
	/// Optional JSON roster file backing player-to-team lookups
	#[serde(default)]
	pub roster_file: Option<String>,
}

impl Config {
	pub fn from_toml(file_path: &Path) -> Result<Self, config::ConfigError> {
		config::Config::builder().add_source(config::File::from(file_path)).build()?.try_deserialize()
	}
}
