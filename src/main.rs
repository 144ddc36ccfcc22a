//! Collecto Reports
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::path::Path;
use std::{fs, io};

use collecto_reports::Config;
use color_eyre::eyre::{self, WrapErr};

mod cli;

/// Used if no configuration file is passed explicitly.
const DEFAULT_CONFIG_PATH: &str = "./collecto-reports.toml";

fn main() -> eyre::Result<()>
{
	color_eyre::install()?;

	let cli_args = cli::args();

	if let Some(path) = cli_args.env_file.as_deref() {
		dotenvy::from_path(path).wrap_err("failed to load `.env` file")?;
	} else {
		ignore_missing(dotenvy::dotenv()).wrap_err("failed to load `.env` file")?;
	}

	let mut config = if let Some(config_path) = cli_args.config_path.as_deref() {
		Config::load_from_file(config_path)?
	} else if fs::exists(DEFAULT_CONFIG_PATH)? {
		Config::load_from_file(Path::new(DEFAULT_CONFIG_PATH))?
	} else {
		Config::default()
	};

	cli_args.apply_to_config(&mut config);

	collecto_reports::run(config).wrap_err("failed to run server")
}

/// Treats a missing `.env` file as empty; parse errors are still reported.
fn ignore_missing<T>(result: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error>
{
	match result {
		Ok(_) => Ok(()),
		Err(dotenvy::Error::Io(error)) if error.kind() == io::ErrorKind::NotFound => Ok(()),
		Err(error) => Err(error),
	}
}

#[cfg(test)]
mod tests
{
	use std::env;

	use super::*;

	#[test]
	fn missing_env_file_is_ignored() -> anyhow::Result<()>
	{
		let path = env::temp_dir().join("collecto-reports-does-not-exist.env");

		ignore_missing(dotenvy::from_path(&path))?;

		Ok(())
	}

	#[test]
	fn malformed_env_file_is_reported() -> anyhow::Result<()>
	{
		let path = env::temp_dir().join(format!("collecto-reports-{}.env", std::process::id()));
		fs::write(&path, "COLLECTO_REPORTS_MALFORMED=\"unterminated\n")?;

		let result = ignore_missing(dotenvy::from_path(&path));
		fs::remove_file(&path)?;

		assert!(result.is_err());

		Ok(())
	}
}
