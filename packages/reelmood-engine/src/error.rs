pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The requested label resolved to neither a canonical category nor a
	/// known synonym. Non-retryable.
	#[error("Unsupported emotion: {input}. Choose one of: {vocabulary}.")]
	UnsupportedEmotion { input: String, vocabulary: String },
	/// The catalog snapshot was never initialized; an upstream dependency or
	/// configuration fault, propagated without retry.
	#[error("Catalog snapshot is not initialized.")]
	CatalogUnavailable,
	#[error("Invalid ranking config: {message}")]
	InvalidConfig { message: String },
}
