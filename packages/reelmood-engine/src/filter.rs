use std::collections::HashSet;

use serde::Deserialize;

use reelmood_catalog::{CatalogSnapshot, Movie};
use reelmood_domain::Emotion;

/// Request-scoped hard filters. Every field is optional; absence (or a zero
/// minimum, or an empty set) means "no constraint".
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Filters {
	pub min_review_count: u64,
	pub min_vote_count: u64,
	pub min_vote_average: Option<f64>,
	/// Inclusive year bounds; swapped if given out of order.
	pub year_range: Option<(i32, i32)>,
	pub include_genres: Option<HashSet<u32>>,
	pub exclude_genres: Option<HashSet<u32>>,
	/// Case-insensitive substring over title or overview.
	pub query_text: Option<String>,
}
impl Filters {
	/// Expands into the ordered predicate list the engine evaluates with
	/// logical AND. Profile presence is always checked first; a movie with
	/// no emotion profile is excluded regardless of the other fields.
	pub fn predicates(&self, target: Emotion) -> Vec<Predicate> {
		let mut out = vec![Predicate::HasProfile(target)];

		if self.min_review_count > 0 {
			out.push(Predicate::MinReviewCount(self.min_review_count));
		}
		if self.min_vote_count > 0 {
			out.push(Predicate::MinVoteCount(self.min_vote_count));
		}
		if let Some(min) = self.min_vote_average {
			out.push(Predicate::MinVoteAverage(min));
		}
		if let Some((a, b)) = self.year_range {
			let (min, max) = if a <= b { (a, b) } else { (b, a) };

			out.push(Predicate::YearRange { min, max });
		}
		if let Some(genres) = self.include_genres.as_ref().filter(|set| !set.is_empty()) {
			out.push(Predicate::IncludeGenres(genres.clone()));
		}
		if let Some(genres) = self.exclude_genres.as_ref().filter(|set| !set.is_empty()) {
			out.push(Predicate::ExcludeGenres(genres.clone()));
		}
		if let Some(query) = self.query_text.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
			out.push(Predicate::Query(query.to_lowercase()));
		}

		out
	}
}

/// One hard predicate over a movie record.
#[derive(Clone, Debug)]
pub enum Predicate {
	/// The emotion profile must be present. The profile always carries all
	/// six categories, so presence alone makes the target rankable.
	HasProfile(Emotion),
	MinReviewCount(u64),
	MinVoteCount(u64),
	MinVoteAverage(f64),
	/// Requires a parseable release year inside the inclusive bounds;
	/// movies with missing or unparseable dates are excluded while active.
	YearRange { min: i32, max: i32 },
	IncludeGenres(HashSet<u32>),
	ExcludeGenres(HashSet<u32>),
	/// Lowercased needle matched against title OR overview.
	Query(String),
}
impl Predicate {
	pub fn accept(&self, movie: &Movie) -> bool {
		match self {
			Self::HasProfile(_) => movie.emotions.is_some(),
			Self::MinReviewCount(min) => movie.review_count_used >= *min,
			Self::MinVoteCount(min) => movie.vote_count >= *min,
			Self::MinVoteAverage(min) => movie.vote_average >= *min,
			Self::YearRange { min, max } =>
				movie.year.is_some_and(|year| (*min..=*max).contains(&year)),
			Self::IncludeGenres(genres) => movie.genre_ids.iter().any(|id| genres.contains(id)),
			Self::ExcludeGenres(genres) => !movie.genre_ids.iter().any(|id| genres.contains(id)),
			Self::Query(needle) =>
				movie.title.to_lowercase().contains(needle)
					|| movie
						.overview
						.as_deref()
						.is_some_and(|overview| overview.to_lowercase().contains(needle)),
		}
	}
}

/// Narrows the snapshot to the movies accepted by every predicate.
///
/// Pure over its inputs; an empty result is a valid outcome, not an error.
pub fn apply<'a>(snapshot: &'a CatalogSnapshot, predicates: &[Predicate]) -> Vec<&'a Movie> {
	snapshot
		.movies()
		.iter()
		.filter(|movie| predicates.iter().all(|predicate| predicate.accept(movie)))
		.collect()
}
