use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use horo_domain::NatalChart;
use horo_storage::models::{NatalAnalysisKey, NatalAnalysisRecord};

use crate::{Error, PredictionService, Result};

/// The app posts its whole profile chart flat, with `uid` next to the chart fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NatalAnalysisRequest {
	#[serde(default)]
	pub uid: Option<String>,
	#[serde(flatten)]
	pub chart: NatalChart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatalAnalysisResponse {
	pub analysis: String,
	pub cached: bool,
}

impl PredictionService {
	/// Returns the stored reading for this exact chart, generating and storing one on a miss.
	pub async fn analyze_natal(&self, req: NatalAnalysisRequest) -> Result<NatalAnalysisResponse> {
		let NatalAnalysisRequest { uid, chart } = req;
		let uid = uid.unwrap_or_default();
		let missing = crate::missing_fields([
			("name", chart.name.as_str()),
			("sun", chart.sun.as_str()),
			("moon", chart.moon.as_str()),
		]);

		if !missing.is_empty() {
			return Err(Error::MissingInput { fields: missing });
		}

		crate::reject_nul(std::iter::once(("uid", uid.as_str())).chain(chart.text_fields()))?;

		let chart_json = serde_json::to_value(&chart)
			.map_err(|err| Error::InvalidInput { message: err.to_string() })?;
		let key = NatalAnalysisKey { uid: &uid, chart: &chart_json };

		if let Some(record) = self.store.find_natal(key).await? {
			tracing::debug!(record_id = %record.record_id, "Natal analysis cache hit.");

			return Ok(NatalAnalysisResponse { analysis: record.analysis, cached: true });
		}

		tracing::info!(
			%uid,
			provider = %self.cfg.providers.generator.provider_id,
			"Natal analysis cache miss; generating."
		);

		let prompt = horo_domain::build_natal_prompt(&chart);
		let raw = self.generator.generate(&self.cfg.providers.generator, &prompt).await.map_err(
			|err| {
				tracing::error!(error = %err, "Natal analysis generation failed.");

				Error::GenerationFailed { message: err.to_string() }
			},
		)?;
		let record = NatalAnalysisRecord {
			record_id: Uuid::new_v4(),
			uid,
			chart: chart_json,
			analysis: horo_domain::strip_fences(&raw),
			created_at: OffsetDateTime::now_utc(),
		};

		self.store.insert_natal(&record).await?;

		Ok(NatalAnalysisResponse { analysis: record.analysis, cached: false })
	}
}
