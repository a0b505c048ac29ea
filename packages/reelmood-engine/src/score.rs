use std::cmp::Ordering;

use serde::Deserialize;

use reelmood_catalog::Movie;
use reelmood_domain::Emotion;

/// Confidence-boost shape: saturates at `cap` once `ref_count` reviews back
/// the affinity estimate.
#[derive(Clone, Copy, Debug)]
pub struct BoostParams {
	pub cap: f64,
	pub ref_count: u64,
}
impl Default for BoostParams {
	fn default() -> Self {
		Self { cap: 0.20, ref_count: 100 }
	}
}

/// Bounded, saturating bonus for affinity estimates backed by more reviews.
///
/// 0 at `n = 0`, then `min(cap, cap * ln(1 + n) / ln(1 + ref_count))`:
/// monotone non-decreasing and never above `cap`, so the boost cannot
/// dominate a raw affinity in [0, 1].
pub fn confidence_boost(review_count: u64, params: &BoostParams) -> f64 {
	if review_count == 0 || params.cap <= 0.0 {
		return 0.0;
	}

	let ratio = (review_count as f64).ln_1p() / (params.ref_count as f64).ln_1p();

	(params.cap * ratio).clamp(0.0, params.cap)
}

/// Tie-breaker applied between equal scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
	/// Higher vote count wins.
	#[default]
	VoteCount,
	/// Lexicographically earlier title wins.
	Title,
}
impl TieBreak {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::VoteCount => "vote_count",
			Self::Title => "title",
		}
	}

	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"vote_count" => Some(Self::VoteCount),
			"title" => Some(Self::Title),
			_ => None,
		}
	}
}

/// A movie that survived filtering, paired with its ranking score.
///
/// Borrows the shared record instead of attaching a transient score field to
/// it; discarded when the request completes.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
	pub movie: &'a Movie,
	/// The target category's raw profile value.
	pub affinity: f64,
	/// `affinity`, plus the confidence boost when enabled.
	pub score: f64,
}
impl<'a> Candidate<'a> {
	/// Total order with the best-ranked candidate first: score descending,
	/// then the tie-breaker, then ascending movie id so two distinct movies
	/// never compare equal.
	pub fn rank_cmp(&self, other: &Self, tie_break: TieBreak) -> Ordering {
		other
			.score
			.total_cmp(&self.score)
			.then_with(|| match tie_break {
				TieBreak::VoteCount => other.movie.vote_count.cmp(&self.movie.vote_count),
				TieBreak::Title => self.movie.title.cmp(&other.movie.title),
			})
			.then_with(|| self.movie.id.cmp(&other.movie.id))
	}
}

/// Scores every candidate against the target category.
pub fn score_candidates<'a>(
	movies: Vec<&'a Movie>,
	target: Emotion,
	use_confidence_boost: bool,
	params: &BoostParams,
) -> Vec<Candidate<'a>> {
	movies
		.into_iter()
		.filter_map(|movie| {
			let affinity = movie.emotions.as_ref()?.score(target);
			let score = if use_confidence_boost {
				affinity + confidence_boost(movie.review_count_used, params)
			} else {
				affinity
			};

			Some(Candidate { movie, affinity, score })
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use std::cmp::Ordering;

	use super::{BoostParams, Candidate, TieBreak, confidence_boost, score_candidates};
	use reelmood_domain::Emotion;
	use reelmood_testkit::MovieBuilder;

	#[test]
	fn boost_is_zero_without_reviews() {
		assert_eq!(confidence_boost(0, &BoostParams::default()), 0.0);
	}

	#[test]
	fn boost_is_monotone_and_capped() {
		let params = BoostParams::default();
		let mut previous = 0.0;

		for n in [1, 2, 5, 10, 50, 100, 1_000, 1_000_000] {
			let boost = confidence_boost(n, &params);

			assert!(boost >= previous, "boost must not decrease at n = {n}");
			assert!(boost <= params.cap, "boost must stay capped at n = {n}");

			previous = boost;
		}
	}

	#[test]
	fn boost_saturates_at_the_reference_count() {
		let params = BoostParams::default();

		assert!((confidence_boost(100, &params) - 0.20).abs() < 1e-12);
		assert_eq!(confidence_boost(10_000, &params), 0.20);
	}

	#[test]
	fn boost_flips_the_worked_example_ordering() {
		let params = BoostParams::default();
		let a = MovieBuilder::new(1, "A").emotion(Emotion::Joy, 0.70).reviews(100).build();
		let b = MovieBuilder::new(2, "B").emotion(Emotion::Joy, 0.85).reviews(1).build();

		let boosted = score_candidates(vec![&a, &b], Emotion::Joy, true, &params);

		assert!((boosted[0].score - 0.90).abs() < 1e-12);
		assert!(boosted[0].score > boosted[1].score);

		let raw = score_candidates(vec![&a, &b], Emotion::Joy, false, &params);

		assert_eq!(raw[0].score, 0.70);
		assert!(raw[1].score > raw[0].score);
	}

	#[test]
	fn vote_count_breaks_score_ties() {
		let popular =
			MovieBuilder::new(1, "Popular").emotion(Emotion::Fear, 0.5).votes(7.0, 900).build();
		let niche = MovieBuilder::new(2, "Niche").emotion(Emotion::Fear, 0.5).votes(7.0, 90).build();
		let candidates = score_candidates(vec![&niche, &popular], Emotion::Fear, false, &BoostParams::default());

		assert_eq!(candidates[1].rank_cmp(&candidates[0], TieBreak::VoteCount), Ordering::Less);
	}

	#[test]
	fn title_mode_prefers_the_earlier_title() {
		let alpha = MovieBuilder::new(1, "Alpha").emotion(Emotion::Fear, 0.5).build();
		let zulu = MovieBuilder::new(2, "Zulu").emotion(Emotion::Fear, 0.5).build();
		let candidates = score_candidates(vec![&zulu, &alpha], Emotion::Fear, false, &BoostParams::default());

		assert_eq!(candidates[1].rank_cmp(&candidates[0], TieBreak::Title), Ordering::Less);
	}

	#[test]
	fn id_is_the_deterministic_fallback() {
		let first = MovieBuilder::new(10, "Twin").emotion(Emotion::Fear, 0.5).votes(7.0, 100).build();
		let second = MovieBuilder::new(20, "Twin").emotion(Emotion::Fear, 0.5).votes(7.0, 100).build();
		let candidates = score_candidates(vec![&second, &first], Emotion::Fear, false, &BoostParams::default());

		assert_eq!(candidates[1].rank_cmp(&candidates[0], TieBreak::VoteCount), Ordering::Less);
		assert_eq!(candidates[1].rank_cmp(&candidates[0], TieBreak::Title), Ordering::Less);
		assert_eq!(candidates[0].rank_cmp(&candidates[0], TieBreak::Title), Ordering::Equal);
	}
}
