use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use horo_domain::{Category, Day, LoveMetrics, NatalInputs, ResponseShape};
use horo_storage::models::{PredictionKey, PredictionRecord};

use crate::{Error, PredictionService, Result};

/// Natal inputs sent by the app. Profiles carry many more fields; they are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserData {
	#[serde(default)]
	pub uid: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub sun: Option<String>,
	#[serde(default)]
	pub moon: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
	#[serde(rename = "userData", default)]
	pub user_data: UserData,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub day: Option<String>,
}

/// Wire shape of a prediction. `love_metrics` flattens its four fields next to `cached`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
	LoveMetrics {
		#[serde(flatten)]
		metrics: LoveMetrics,
		cached: bool,
	},
	Text {
		prediction: String,
		cached: bool,
	},
}
impl GenerateResponse {
	pub fn cached(&self) -> bool {
		match self {
			Self::LoveMetrics { cached, .. } | Self::Text { cached, .. } => *cached,
		}
	}
}

enum Payload {
	Text(String),
	Metrics(LoveMetrics),
}
impl Payload {
	fn from_record(record: &PredictionRecord) -> Result<Self> {
		if let (Some(love_luck), Some(best_match), Some(compatibility), Some(quote)) = (
			record.love_luck,
			record.best_match.as_ref(),
			record.compatibility,
			record.quote.as_ref(),
		) {
			return Ok(Self::Metrics(LoveMetrics {
				love_luck,
				best_match: best_match.clone(),
				compatibility,
				quote: quote.clone(),
			}));
		}

		record.prediction.clone().map(Self::Text).ok_or_else(|| Error::Storage {
			message: format!("Stored prediction {} has no payload.", record.record_id),
		})
	}

	fn into_record(self, key: PredictionKey<'_>, created_at: OffsetDateTime) -> PredictionRecord {
		let mut record = PredictionRecord {
			record_id: Uuid::new_v4(),
			uid: key.uid.to_string(),
			name: key.name.to_string(),
			sun: key.sun.to_string(),
			moon: key.moon.to_string(),
			category: key.category.to_string(),
			day: key.day.to_string(),
			prediction: None,
			love_luck: None,
			best_match: None,
			compatibility: None,
			quote: None,
			created_at,
		};

		match self {
			Self::Text(text) => record.prediction = Some(text),
			Self::Metrics(metrics) => {
				record.love_luck = Some(metrics.love_luck);
				record.best_match = Some(metrics.best_match);
				record.compatibility = Some(metrics.compatibility);
				record.quote = Some(metrics.quote);
			},
		}

		record
	}

	fn into_response(self, cached: bool) -> GenerateResponse {
		match self {
			Self::Text(prediction) => GenerateResponse::Text { prediction, cached },
			Self::Metrics(metrics) => GenerateResponse::LoveMetrics { metrics, cached },
		}
	}
}

impl PredictionService {
	/// Returns the stored prediction for the exact request key, generating and storing one on a
	/// miss.
	pub async fn generate(&self, req: GenerateRequest) -> Result<GenerateResponse> {
		let GenerateRequest { user_data, category, day } = req;
		let uid = user_data.uid.unwrap_or_default();
		let name = user_data.name.unwrap_or_default();
		let sun = user_data.sun.unwrap_or_default();
		let moon = user_data.moon.unwrap_or_default();
		let category = category.unwrap_or_else(|| Category::DEFAULT_LABEL.to_string());
		let day = day.unwrap_or_else(|| Day::DEFAULT_LABEL.to_string());
		let missing = crate::missing_fields([("name", &*name), ("sun", &*sun), ("moon", &*moon)]);

		if !missing.is_empty() {
			return Err(Error::MissingInput { fields: missing });
		}

		crate::reject_nul([
			("uid", &*uid),
			("name", &*name),
			("sun", &*sun),
			("moon", &*moon),
			("category", &*category),
			("day", &*day),
		])?;

		let key = PredictionKey {
			uid: &uid,
			name: &name,
			sun: &sun,
			moon: &moon,
			category: &category,
			day: &day,
		};

		if let Some(record) = self.store.find(key).await? {
			tracing::debug!(
				record_id = %record.record_id,
				%category,
				%day,
				"Prediction cache hit."
			);

			return Ok(Payload::from_record(&record)?.into_response(true));
		}

		tracing::info!(
			%uid,
			%category,
			%day,
			provider = %self.cfg.providers.generator.provider_id,
			"Prediction cache miss; generating."
		);

		let kind = Category::from_label(&category);

		if !Category::is_recognized(&category) {
			tracing::warn!(%category, "Unrecognized category; using the daily template.");
		}

		let prompt = horo_domain::build_prompt(
			kind,
			NatalInputs { name: &name, sun: &sun, moon: &moon },
			Day::from_label(&day),
		);
		let raw = self.generator.generate(&self.cfg.providers.generator, &prompt).await.map_err(
			|err| {
				tracing::error!(error = %err, %category, "Prediction generation failed.");

				Error::GenerationFailed { message: err.to_string() }
			},
		)?;
		let cleaned = horo_domain::strip_fences(&raw);
		let payload = match kind.shape() {
			ResponseShape::Text => Payload::Text(cleaned),
			ResponseShape::Metrics => match LoveMetrics::parse(&cleaned) {
				Ok(metrics) => Payload::Metrics(metrics),
				Err(err) => {
					tracing::warn!(error = %err, "Love metrics did not parse; using fallback.");

					Payload::Metrics(LoveMetrics::fallback())
				},
			},
		};
		let record = payload.into_record(key, OffsetDateTime::now_utc());

		self.store.insert(&record).await?;

		Ok(Payload::from_record(&record)?.into_response(false))
	}
}
