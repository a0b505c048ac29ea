use std::{collections::HashSet, path::PathBuf};

use clap::{
	Parser, Subcommand,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use color_eyre::eyre;
use tracing_subscriber::EnvFilter;

use reelmood_catalog::{CatalogSnapshot, SharedCatalog};
use reelmood_domain::{Emotion, SYNONYMS};
use reelmood_engine::{Filters, RankRequest, Ranker, TieBreak};

#[derive(Debug, Parser)]
#[command(
	version,
	rename_all = "kebab",
	styles = styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Rank the catalog for an emotion label.
	Rank(RankArgs),
	/// Print the accepted emotion labels: canonical categories and synonyms.
	Vocabulary,
}

#[derive(Debug, Parser)]
pub struct RankArgs {
	/// joy | sadness | anger | fear | love | surprise, or a known synonym.
	#[arg(long, short = 'e')]
	pub emotion: String,
	/// Top N results; falls back to the configured default.
	#[arg(long, short = 'k')]
	pub topk: Option<usize>,
	/// Minimum reviews behind a movie's emotion profile.
	#[arg(long)]
	pub min_review_count: Option<u64>,
	#[arg(long)]
	pub min_vote_count: Option<u64>,
	#[arg(long)]
	pub min_vote_average: Option<f64>,
	#[arg(long)]
	pub year_min: Option<i32>,
	#[arg(long)]
	pub year_max: Option<i32>,
	/// Comma-separated genre ids to require, e.g. "18,35".
	#[arg(long, value_name = "IDS")]
	pub include_genres: Option<String>,
	/// Comma-separated genre ids to reject.
	#[arg(long, value_name = "IDS")]
	pub exclude_genres: Option<String>,
	/// Keyword contained in title or overview (case-insensitive).
	#[arg(long, short = 'q')]
	pub query: Option<String>,
	/// Disable the review-count confidence boost.
	#[arg(long)]
	pub no_boost: bool,
	/// Tie-breaker between equal scores: vote_count or title.
	#[arg(long, value_name = "MODE")]
	pub tie_break: Option<String>,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let cfg = reelmood_config::load(&args.config)?;

	init_tracing(&cfg);

	match args.command {
		Command::Rank(rank_args) => rank(&cfg, rank_args),
		Command::Vocabulary => vocabulary(),
	}
}

fn rank(cfg: &reelmood_config::Config, args: RankArgs) -> color_eyre::Result<()> {
	let snapshot = CatalogSnapshot::load(&cfg.service.catalog_path)?;
	let ranker = Ranker::new(SharedCatalog::with_snapshot(snapshot), &cfg.ranking)?;
	let tie_break = args
		.tie_break
		.as_deref()
		.map(|mode| {
			TieBreak::parse(mode)
				.ok_or_else(|| eyre::eyre!("--tie-break must be vote_count or title."))
		})
		.transpose()?;
	let request = RankRequest {
		emotion: args.emotion,
		top_k: args.topk.unwrap_or(cfg.defaults.top_k),
		filters: Filters {
			min_review_count: args.min_review_count.unwrap_or(cfg.defaults.min_review_count),
			min_vote_count: args.min_vote_count.unwrap_or(0),
			min_vote_average: args.min_vote_average,
			year_range: year_range(args.year_min, args.year_max),
			include_genres: parse_genre_list(args.include_genres.as_deref()),
			exclude_genres: parse_genre_list(args.exclude_genres.as_deref()),
			query_text: args.query,
		},
		use_confidence_boost: !args.no_boost,
		tie_break,
	};
	let results = ranker.rank(&request)?;

	println!("{}", serde_json::to_string_pretty(&results)?);

	Ok(())
}

fn vocabulary() -> color_eyre::Result<()> {
	println!("Canonical categories:");

	for emotion in Emotion::ALL {
		println!("  {emotion}");
	}

	println!("Synonyms:");

	for (label, emotion) in SYNONYMS {
		println!("  {label} -> {emotion}");
	}

	Ok(())
}

/// Both bounds are required to activate the range; out-of-order bounds are
/// swapped, not rejected.
fn year_range(min: Option<i32>, max: Option<i32>) -> Option<(i32, i32)> {
	match (min, max) {
		(Some(min), Some(max)) if min > max => Some((max, min)),
		(Some(min), Some(max)) => Some((min, max)),
		_ => None,
	}
}

/// Comma- or whitespace-separated genre ids; unparseable entries are ignored.
fn parse_genre_list(raw: Option<&str>) -> Option<HashSet<u32>> {
	let raw = raw?.trim();

	if raw.is_empty() {
		return None;
	}

	let ids: HashSet<u32> = raw
		.split(|ch: char| ch == ',' || ch.is_whitespace())
		.filter(|part| !part.is_empty())
		.filter_map(|part| part.parse().ok())
		.collect();

	if ids.is_empty() { None } else { Some(ids) }
}

fn init_tracing(cfg: &reelmood_config::Config) {
	let filter = EnvFilter::try_new(&cfg.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default() | Effects::BOLD)
		.usage(AnsiColor::Red.on_default() | Effects::BOLD)
		.literal(AnsiColor::Blue.on_default() | Effects::BOLD)
		.placeholder(AnsiColor::Green.on_default())
}

#[cfg(test)]
mod tests {
	use super::{parse_genre_list, year_range};

	#[test]
	fn parses_comma_and_whitespace_separated_genres() {
		assert_eq!(parse_genre_list(Some("18,35")), Some([18, 35].into()));
		assert_eq!(parse_genre_list(Some(" 18 35 ")), Some([18, 35].into()));
		assert_eq!(parse_genre_list(Some("")), None);
		assert_eq!(parse_genre_list(None), None);
	}

	#[test]
	fn year_range_requires_both_bounds_and_swaps_them() {
		assert_eq!(year_range(Some(2_010), Some(2_015)), Some((2_010, 2_015)));
		assert_eq!(year_range(Some(2_015), Some(2_010)), Some((2_010, 2_015)));
		assert_eq!(year_range(Some(2_010), None), None);
		assert_eq!(year_range(None, None), None);
	}
}
