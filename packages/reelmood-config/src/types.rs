use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub defaults: Defaults,
	#[serde(default)]
	pub ranking: Ranking,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	/// Path to the enriched catalog JSON produced by the upstream pipeline.
	pub catalog_path: PathBuf,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

/// Request defaults applied when the caller leaves a knob unset.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Defaults {
	pub top_k: usize,
	pub min_review_count: u64,
}
impl Default for Defaults {
	fn default() -> Self {
		Self { top_k: 10, min_review_count: 5 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Ranking {
	/// Upper bound of the confidence boost.
	pub boost_cap: f64,
	/// Review count at which the boost saturates at `boost_cap`.
	pub boost_ref_count: u64,
	/// Default tie-breaker mode: "vote_count" or "title".
	pub tie_breaker: String,
}
impl Default for Ranking {
	fn default() -> Self {
		Self { boost_cap: 0.20, boost_ref_count: 100, tie_breaker: "vote_count".to_string() }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
