//! In-memory fixtures shared by package tests.

use reelmood_catalog::{CatalogSnapshot, Movie};
use reelmood_domain::{Emotion, EmotionProfile};

pub struct MovieBuilder {
	movie: Movie,
}
impl MovieBuilder {
	pub fn new(id: u64, title: &str) -> Self {
		Self {
			movie: Movie {
				id,
				title: title.to_string(),
				overview: None,
				release_date: None,
				genre_ids: Vec::new(),
				vote_average: 0.0,
				vote_count: 0,
				review_count_used: 0,
				emotions: None,
				year: None,
			},
		}
	}

	pub fn overview(mut self, overview: &str) -> Self {
		self.movie.overview = Some(overview.to_string());

		self
	}

	pub fn release_date(mut self, date: &str) -> Self {
		self.movie.release_date = Some(date.to_string());

		self
	}

	pub fn genres(mut self, ids: &[u32]) -> Self {
		self.movie.genre_ids = ids.to_vec();

		self
	}

	pub fn votes(mut self, average: f64, count: u64) -> Self {
		self.movie.vote_average = average;
		self.movie.vote_count = count;

		self
	}

	pub fn reviews(mut self, count: u64) -> Self {
		self.movie.review_count_used = count;

		self
	}

	pub fn profile(mut self, profile: EmotionProfile) -> Self {
		self.movie.emotions = Some(profile);

		self
	}

	/// Profile with a single non-zero category; the other five stay 0.
	pub fn emotion(mut self, emotion: Emotion, score: f64) -> Self {
		let mut profile = self.movie.emotions.unwrap_or_default();

		match emotion {
			Emotion::Joy => profile.joy = score,
			Emotion::Sadness => profile.sadness = score,
			Emotion::Anger => profile.anger = score,
			Emotion::Fear => profile.fear = score,
			Emotion::Love => profile.love = score,
			Emotion::Surprise => profile.surprise = score,
		}

		self.movie.emotions = Some(profile);

		self
	}

	pub fn build(self) -> Movie {
		self.movie
	}
}

/// Snapshot from builders; release years are extracted as in production.
pub fn snapshot(movies: Vec<Movie>) -> CatalogSnapshot {
	CatalogSnapshot::from_movies(movies)
}
