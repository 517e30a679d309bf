use sqlx::types::Json;

use crate::{
	Error, Result,
	db::Db,
	models::{NatalAnalysisKey, NatalAnalysisRecord, PredictionKey, PredictionRecord},
};

/// Returns the earliest record stored under `key`, if any.
pub async fn find_prediction(
	db: &Db,
	key: &PredictionKey<'_>,
) -> Result<Option<PredictionRecord>> {
	let record = sqlx::query_as::<_, PredictionRecord>(
		"\
SELECT
	record_id,
	uid,
	name,
	sun,
	moon,
	category,
	day,
	prediction,
	love_luck,
	best_match,
	compatibility,
	quote,
	created_at
FROM predictions
WHERE uid = $1
	AND name = $2
	AND sun = $3
	AND moon = $4
	AND category = $5
	AND day = $6
ORDER BY created_at ASC, record_id ASC
LIMIT 1",
	)
	.bind(key.uid)
	.bind(key.name)
	.bind(key.sun)
	.bind(key.moon)
	.bind(key.category)
	.bind(key.day)
	.fetch_optional(&db.pool)
	.await?;

	Ok(record)
}

/// Appends `record` unconditionally. Identical keys are allowed to repeat.
pub async fn insert_prediction(db: &Db, record: &PredictionRecord) -> Result<()> {
	let has_text = record.prediction.is_some();
	let has_metrics = record.love_luck.is_some()
		&& record.best_match.is_some()
		&& record.compatibility.is_some()
		&& record.quote.is_some();

	if has_text == has_metrics {
		return Err(Error::InvalidArgument(
			"A prediction record carries either text or love metrics.".to_string(),
		));
	}

	sqlx::query(
		"\
INSERT INTO predictions (
	record_id,
	uid,
	name,
	sun,
	moon,
	category,
	day,
	prediction,
	love_luck,
	best_match,
	compatibility,
	quote,
	created_at
)
VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13)",
	)
	.bind(record.record_id)
	.bind(record.uid.as_str())
	.bind(record.name.as_str())
	.bind(record.sun.as_str())
	.bind(record.moon.as_str())
	.bind(record.category.as_str())
	.bind(record.day.as_str())
	.bind(record.prediction.as_deref())
	.bind(record.love_luck)
	.bind(record.best_match.as_deref())
	.bind(record.compatibility)
	.bind(record.quote.as_deref())
	.bind(record.created_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}

pub async fn count_predictions(db: &Db, key: &PredictionKey<'_>) -> Result<i64> {
	let count: i64 = sqlx::query_scalar(
		"\
SELECT count(*)
FROM predictions
WHERE uid = $1
	AND name = $2
	AND sun = $3
	AND moon = $4
	AND category = $5
	AND day = $6",
	)
	.bind(key.uid)
	.bind(key.name)
	.bind(key.sun)
	.bind(key.moon)
	.bind(key.category)
	.bind(key.day)
	.fetch_one(&db.pool)
	.await?;

	Ok(count)
}

/// Returns the earliest natal reading stored for `key`, if any.
pub async fn find_natal_analysis(
	db: &Db,
	key: &NatalAnalysisKey<'_>,
) -> Result<Option<NatalAnalysisRecord>> {
	let record = sqlx::query_as::<_, NatalAnalysisRecord>(
		"\
SELECT record_id, uid, chart, analysis, created_at
FROM natal_analyses
WHERE uid = $1 AND chart = $2
ORDER BY created_at ASC, record_id ASC
LIMIT 1",
	)
	.bind(key.uid)
	.bind(Json(key.chart))
	.fetch_optional(&db.pool)
	.await?;

	Ok(record)
}

pub async fn insert_natal_analysis(db: &Db, record: &NatalAnalysisRecord) -> Result<()> {
	if !record.chart.is_object() {
		return Err(Error::InvalidArgument("A natal chart must be a JSON object.".to_string()));
	}

	sqlx::query(
		"\
INSERT INTO natal_analyses (record_id, uid, chart, analysis, created_at)
VALUES ($1,$2,$3,$4,$5)",
	)
	.bind(record.record_id)
	.bind(record.uid.as_str())
	.bind(Json(&record.chart))
	.bind(record.analysis.as_str())
	.bind(record.created_at)
	.execute(&db.pool)
	.await?;

	Ok(())
}
