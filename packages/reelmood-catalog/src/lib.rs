mod error;
mod movie;
mod snapshot;

pub use error::{Error, Result};
pub use movie::{Movie, release_year};
pub use snapshot::{CatalogSnapshot, SharedCatalog};
