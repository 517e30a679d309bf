use serde_json::Value;
use time::OffsetDateTime;
use uuid::Uuid;

/// One stored generation outcome.
///
/// Text categories fill `prediction`; `love_metrics` fills the four metric columns. The other
/// payload columns stay `NULL`.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PredictionRecord {
	pub record_id: Uuid,
	pub uid: String,
	pub name: String,
	pub sun: String,
	pub moon: String,
	pub category: String,
	pub day: String,
	pub prediction: Option<String>,
	pub love_luck: Option<i64>,
	pub best_match: Option<String>,
	pub compatibility: Option<i64>,
	pub quote: Option<String>,
	pub created_at: OffsetDateTime,
}

/// The exact-match cache key. Values are compared verbatim.
#[derive(Debug, Clone, Copy)]
pub struct PredictionKey<'a> {
	pub uid: &'a str,
	pub name: &'a str,
	pub sun: &'a str,
	pub moon: &'a str,
	pub category: &'a str,
	pub day: &'a str,
}
impl PredictionRecord {
	pub fn key(&self) -> PredictionKey<'_> {
		PredictionKey {
			uid: &self.uid,
			name: &self.name,
			sun: &self.sun,
			moon: &self.moon,
			category: &self.category,
			day: &self.day,
		}
	}
}

/// One stored natal chart reading. `chart` holds the submitted chart exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct NatalAnalysisRecord {
	pub record_id: Uuid,
	pub uid: String,
	pub chart: Value,
	pub analysis: String,
	pub created_at: OffsetDateTime,
}
impl NatalAnalysisRecord {
	pub fn key(&self) -> NatalAnalysisKey<'_> {
		NatalAnalysisKey { uid: &self.uid, chart: &self.chart }
	}
}

/// Cache key for natal readings. Charts compare as JSON values, so key order does not matter.
#[derive(Debug, Clone, Copy)]
pub struct NatalAnalysisKey<'a> {
	pub uid: &'a str,
	pub chart: &'a Value,
}
