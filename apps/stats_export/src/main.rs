mod config;
mod error;
mod roster_file;

use crate::config::{Cli, Config};
use crate::error::ExportError;
use crate::roster_file::FileRoster;
use anyhow::Context;
use clap::Parser;
use csv::WriterBuilder;
use game_stats::{compute_game, GameRecord, GameSheet, NoRoster, RosterLookup};
use std::fs::{self, File, OpenOptions};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::filter::EnvFilter;

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_sheet(path: &Path) -> Result<GameSheet, ExportError> {
	let file = File::open(path)?;
	serde_json::from_reader(BufReader::new(file)).map_err(|source| ExportError::bad_sheet(path, source))
}

fn game_sheet_paths(input_dir: &str) -> Result<Vec<PathBuf>, ExportError> {
	let mut paths: Vec<PathBuf> = fs::read_dir(input_dir)?
		.filter_map(Result::ok)
		.map(|entry| entry.path())
		.filter(|path| path.extension().is_some_and(|ext| ext == "json"))
		.collect();
	paths.sort();
	Ok(paths)
}

fn write_to_csv(records: Vec<GameRecord>, output_path: &Path) -> Result<(), ExportError> {
	let file = OpenOptions::new().append(true).create(true).open(output_path)?;

	let is_empty = file.metadata().map(|m| m.len() == 0).unwrap_or(true);

	let mut wtr = WriterBuilder::new().has_headers(is_empty).from_writer(file);
	for record in records {
		wtr.serialize(record)?;
	}
	wtr.flush()?;
	Ok(())
}

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();
	init_tracing();

	let cli = Cli::parse();
	let config = Config::from_toml(&cli.config).context("could not load config")?;

	let roster: Box<dyn RosterLookup> = match &config.roster_file {
		Some(path) => Box::new(FileRoster::load(Path::new(path)).context("could not load roster file")?),
		None => Box::new(NoRoster),
	};

	let paths = game_sheet_paths(&config.input_dir).context("could not list game sheets")?;

	// A bad game sheet is that game's problem, not the whole run's.
	let mut records = Vec::new();
	for path in &paths {
		let sheet = match load_sheet(path) {
			Ok(sheet) => sheet,
			Err(err) => {
				warn!(path = %path.display(), %err, "skipping unreadable game sheet");
				continue;
			}
		};
		match compute_game(&sheet, roster.as_ref()) {
			Ok(record) => records.push(record),
			Err(err) => warn!(path = %path.display(), %err, "skipping game that failed to compute"),
		}
	}

	let written = records.len();
	write_to_csv(records, Path::new(&config.output_file)).context("could not write CSV")?;
	info!(games = written, scanned = paths.len(), output = %config.output_file, "CSV file updated");

	Ok(())
}
