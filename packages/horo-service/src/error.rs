pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Missing required input: {}.", fields.join(", "))]
	MissingInput { fields: Vec<String> },
	#[error("Invalid input: {message}")]
	InvalidInput { message: String },
	#[error("Generation failed: {message}")]
	GenerationFailed { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<horo_storage::Error> for Error {
	fn from(err: horo_storage::Error) -> Self {
		match err {
			horo_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			horo_storage::Error::InvalidArgument(message) => Self::Storage { message },
		}
	}
}
