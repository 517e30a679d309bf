use std::sync::Arc;

use horo_service::PredictionService;
use horo_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<PredictionService>,
}
impl AppState {
	pub async fn new(config: horo_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		Ok(Self::from_service(PredictionService::new(config, db)))
	}

	pub fn from_service(service: PredictionService) -> Self {
		Self { service: Arc::new(service) }
	}
}
