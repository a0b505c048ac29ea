use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use reelmood_domain::EmotionProfile;

static LEADING_YEAR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(\d{4})").expect("leading-year pattern is valid"));

/// One catalog item as supplied by the upstream producer.
///
/// Records are assumed validated upstream; the only data-quality signal the
/// engine handles is whether `emotions` is present. Movies without a profile
/// are permanently unrankable.
#[derive(Clone, Debug, Deserialize)]
pub struct Movie {
	pub id: u64,
	pub title: String,
	#[serde(default)]
	pub overview: Option<String>,
	#[serde(default)]
	pub release_date: Option<String>,
	#[serde(default)]
	pub genre_ids: Vec<u32>,
	#[serde(default)]
	pub vote_average: f64,
	#[serde(default)]
	pub vote_count: u64,
	#[serde(default)]
	pub review_count_used: u64,
	#[serde(default, alias = "emotions_avg")]
	pub emotions: Option<EmotionProfile>,
	/// Extracted from `release_date` when the snapshot is built; not part of
	/// the producer record.
	#[serde(skip)]
	pub year: Option<i32>,
}

/// Extracts the leading 4-digit year of a release-date string, if any.
pub fn release_year(date: Option<&str>) -> Option<i32> {
	let date = date?;

	LEADING_YEAR.captures(date)?.get(1)?.as_str().parse().ok()
}
