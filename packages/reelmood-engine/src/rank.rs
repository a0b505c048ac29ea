use serde::Serialize;

use crate::{
	Error, Ranker, Result, filter,
	filter::Filters,
	score::{self, Candidate, TieBreak},
	topk,
};
use reelmood_domain::{Emotion, EmotionProfile, vocabulary};

/// One ranking request. Independent of every other request; the engine
/// holds no per-request state.
#[derive(Clone, Debug, Default)]
pub struct RankRequest {
	pub emotion: String,
	pub top_k: usize,
	pub filters: Filters,
	pub use_confidence_boost: bool,
	/// Overrides the configured tie-breaker mode when set.
	pub tie_break: Option<TieBreak>,
}

/// External projection of a ranked candidate; built fresh per request and
/// never persisted.
#[derive(Clone, Debug, Serialize)]
pub struct RankedResult {
	pub id: u64,
	pub title: String,
	pub year: Option<i32>,
	pub genre_ids: Vec<u32>,
	pub vote_average: f64,
	pub vote_count: u64,
	pub review_count_used: u64,
	pub emotion: Emotion,
	/// Raw affinity for the requested category, rounded to 3 decimals.
	pub emotion_score: f64,
	pub emotions: EmotionProfile,
	pub overview: Option<String>,
}

impl Ranker {
	/// Ranks the current snapshot for one emotion label.
	///
	/// Normalizes the label, narrows the snapshot through the filter
	/// predicates, scores the survivors, selects the top `k`, and projects
	/// them into [`RankedResult`] values. An empty match set is a valid,
	/// non-error outcome. Deterministic: identical arguments against an
	/// unchanged snapshot yield identical ordered output.
	pub fn rank(&self, request: &RankRequest) -> Result<Vec<RankedResult>> {
		let emotion =
			Emotion::resolve(&request.emotion).ok_or_else(|| Error::UnsupportedEmotion {
				input: request.emotion.clone(),
				vocabulary: vocabulary().join(", "),
			})?;
		let snapshot = self.catalog.snapshot().map_err(|_| Error::CatalogUnavailable)?;
		let predicates = request.filters.predicates(emotion);
		let candidates = filter::apply(&snapshot, &predicates);

		tracing::debug!(
			emotion = %emotion,
			movies = snapshot.len(),
			candidates = candidates.len(),
			predicates = predicates.len(),
			"Filter stage complete."
		);

		let scored =
			score::score_candidates(candidates, emotion, request.use_confidence_boost, &self.boost);
		let tie_break = request.tie_break.unwrap_or(self.tie_break);
		let top = topk::select_top_k(scored, request.top_k, tie_break);

		tracing::debug!(
			emotion = %emotion,
			top_k = request.top_k,
			tie_break = tie_break.as_str(),
			returned = top.len(),
			"Ranking complete."
		);

		Ok(top.iter().map(|candidate| project(candidate, emotion)).collect())
	}
}

fn project(candidate: &Candidate<'_>, emotion: Emotion) -> RankedResult {
	let movie = candidate.movie;

	RankedResult {
		id: movie.id,
		title: movie.title.clone(),
		year: movie.year,
		genre_ids: movie.genre_ids.clone(),
		vote_average: movie.vote_average,
		vote_count: movie.vote_count,
		review_count_used: movie.review_count_used,
		emotion,
		emotion_score: round_to_3(candidate.affinity),
		emotions: movie.emotions.unwrap_or_default(),
		overview: movie.overview.clone(),
	}
}

fn round_to_3(value: f64) -> f64 {
	(value * 1_000.0).round() / 1_000.0
}

#[cfg(test)]
mod tests {
	use super::round_to_3;

	#[test]
	fn rounds_to_3_decimals() {
		assert_eq!(round_to_3(0.123_4), 0.123);
		assert_eq!(round_to_3(0.879_6), 0.88);
		assert_eq!(round_to_3(0.9), 0.9);
		assert_eq!(round_to_3(0.0), 0.0);
	}
}
