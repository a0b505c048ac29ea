mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Defaults, Ranking, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.catalog_path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "service.catalog_path must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation { message: "service.log_level must be non-empty.".to_string() });
	}
	if !cfg.ranking.boost_cap.is_finite() {
		return Err(Error::Validation {
			message: "ranking.boost_cap must be a finite number.".to_string(),
		});
	}
	if !(0.0..=1.0).contains(&cfg.ranking.boost_cap) {
		return Err(Error::Validation {
			message: "ranking.boost_cap must be in the range 0.0-1.0.".to_string(),
		});
	}
	if cfg.ranking.boost_ref_count == 0 {
		return Err(Error::Validation {
			message: "ranking.boost_ref_count must be greater than zero.".to_string(),
		});
	}
	if !matches!(cfg.ranking.tie_breaker.as_str(), "vote_count" | "title") {
		return Err(Error::Validation {
			message: "ranking.tie_breaker must be one of vote_count or title.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.ranking.tie_breaker = cfg.ranking.tie_breaker.trim().to_ascii_lowercase();
}
