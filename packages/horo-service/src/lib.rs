pub mod generate;
pub mod natal_analysis;

mod error;

pub use error::{Error, Result};
pub use generate::{GenerateRequest, GenerateResponse, UserData};
pub use natal_analysis::{NatalAnalysisRequest, NatalAnalysisResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use horo_config::{Config, LlmProviderConfig};
use horo_providers::generator;
use horo_storage::{
	db::Db,
	models::{NatalAnalysisKey, NatalAnalysisRecord, PredictionKey, PredictionRecord},
	queries,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait TextGenerator
where
	Self: Send + Sync,
{
	fn generate<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		prompt: &'a str,
	) -> BoxFuture<'a, horo_providers::Result<String>>;
}

pub trait PredictionStore
where
	Self: Send + Sync,
{
	fn find<'a>(
		&'a self,
		key: PredictionKey<'a>,
	) -> BoxFuture<'a, horo_storage::Result<Option<PredictionRecord>>>;

	fn insert<'a>(
		&'a self,
		record: &'a PredictionRecord,
	) -> BoxFuture<'a, horo_storage::Result<()>>;

	fn find_natal<'a>(
		&'a self,
		key: NatalAnalysisKey<'a>,
	) -> BoxFuture<'a, horo_storage::Result<Option<NatalAnalysisRecord>>>;

	fn insert_natal<'a>(
		&'a self,
		record: &'a NatalAnalysisRecord,
	) -> BoxFuture<'a, horo_storage::Result<()>>;
}

/// Postgres-backed [`PredictionStore`].
pub struct PgPredictionStore {
	pub db: Db,
}
impl PgPredictionStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl PredictionStore for PgPredictionStore {
	fn find<'a>(
		&'a self,
		key: PredictionKey<'a>,
	) -> BoxFuture<'a, horo_storage::Result<Option<PredictionRecord>>> {
		Box::pin(async move { queries::find_prediction(&self.db, &key).await })
	}

	fn insert<'a>(
		&'a self,
		record: &'a PredictionRecord,
	) -> BoxFuture<'a, horo_storage::Result<()>> {
		Box::pin(queries::insert_prediction(&self.db, record))
	}

	fn find_natal<'a>(
		&'a self,
		key: NatalAnalysisKey<'a>,
	) -> BoxFuture<'a, horo_storage::Result<Option<NatalAnalysisRecord>>> {
		Box::pin(async move { queries::find_natal_analysis(&self.db, &key).await })
	}

	fn insert_natal<'a>(
		&'a self,
		record: &'a NatalAnalysisRecord,
	) -> BoxFuture<'a, horo_storage::Result<()>> {
		Box::pin(queries::insert_natal_analysis(&self.db, record))
	}
}

struct HttpGenerator;
impl TextGenerator for HttpGenerator {
	fn generate<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		prompt: &'a str,
	) -> BoxFuture<'a, horo_providers::Result<String>> {
		Box::pin(generator::generate(cfg, prompt))
	}
}

pub struct PredictionService {
	pub cfg: Config,
	pub store: Arc<dyn PredictionStore>,
	pub generator: Arc<dyn TextGenerator>,
}
impl PredictionService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self {
			cfg,
			store: Arc::new(PgPredictionStore::new(db)),
			generator: Arc::new(HttpGenerator),
		}
	}

	pub fn with_backends(
		cfg: Config,
		store: Arc<dyn PredictionStore>,
		generator: Arc<dyn TextGenerator>,
	) -> Self {
		Self { cfg, store, generator }
	}
}

/// Rejects the first value carrying a NUL character, which Postgres text and jsonb cannot store.
fn reject_nul<'a>(fields: impl IntoIterator<Item = (&'static str, &'a str)>) -> Result<()> {
	match fields.into_iter().find(|(_, value)| value.contains('\0')) {
		Some((field, _)) => Err(Error::InvalidInput {
			message: format!("{field} must not contain NUL characters."),
		}),
		None => Ok(()),
	}
}

fn missing_fields<'a>(fields: impl IntoIterator<Item = (&'static str, &'a str)>) -> Vec<String> {
	fields
		.into_iter()
		.filter(|(_, value)| value.is_empty())
		.map(|(field, _)| field.to_string())
		.collect()
}
