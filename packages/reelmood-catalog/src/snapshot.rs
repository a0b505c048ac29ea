use std::{
	fs,
	path::Path,
	sync::{Arc, RwLock},
};

use crate::{
	Error, Result,
	movie::{Movie, release_year},
};

/// An immutable, point-in-time view of the catalog.
///
/// Built once from producer records and never mutated afterwards; every
/// ranking request reads it through a shared reference.
#[derive(Clone, Debug, Default)]
pub struct CatalogSnapshot {
	movies: Vec<Movie>,
}
impl CatalogSnapshot {
	pub fn from_movies(mut movies: Vec<Movie>) -> Self {
		for movie in &mut movies {
			movie.year = release_year(movie.release_date.as_deref());
		}

		Self { movies }
	}

	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadCatalog { path: path.to_path_buf(), source: err })?;
		let movies: Vec<Movie> = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseCatalog { path: path.to_path_buf(), source: err })?;
		let snapshot = Self::from_movies(movies);

		tracing::info!(path = %path.display(), movies = snapshot.len(), "Catalog snapshot loaded.");

		Ok(snapshot)
	}

	pub fn movies(&self) -> &[Movie] {
		&self.movies
	}

	pub fn len(&self) -> usize {
		self.movies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.movies.is_empty()
	}
}

/// Process-wide handle to the current snapshot.
///
/// Readers clone the inner [`Arc`] and keep ranking against it even if the
/// snapshot is replaced mid-request; [`SharedCatalog::replace`] swaps the
/// whole reference so a partially updated structure is never observable.
#[derive(Debug, Default)]
pub struct SharedCatalog {
	inner: RwLock<Option<Arc<CatalogSnapshot>>>,
}
impl SharedCatalog {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_snapshot(snapshot: CatalogSnapshot) -> Self {
		Self { inner: RwLock::new(Some(Arc::new(snapshot))) }
	}

	pub fn snapshot(&self) -> Result<Arc<CatalogSnapshot>> {
		let guard = self.inner.read().unwrap_or_else(|err| err.into_inner());

		guard.as_ref().cloned().ok_or(Error::CatalogUnavailable)
	}

	pub fn replace(&self, snapshot: CatalogSnapshot) {
		let movies = snapshot.len();
		let mut guard = self.inner.write().unwrap_or_else(|err| err.into_inner());

		*guard = Some(Arc::new(snapshot));

		tracing::info!(movies, "Catalog snapshot replaced.");
	}
}
