use serde::{Deserialize, Serialize};

pub const FALLBACK_LOVE_LUCK: i64 = 80;
pub const FALLBACK_BEST_MATCH: &str = "Kim Ngưu";
pub const FALLBACK_COMPATIBILITY: i64 = 85;
pub const FALLBACK_QUOTE: &str =
	"Tình yêu là hành trình tự khám phá bản thân qua ánh mắt người khác.";

#[derive(Debug, thiserror::Error)]
pub enum LoveMetricsError {
	#[error("Generated text contains no JSON object.")]
	MissingObject,
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoveMetrics {
	pub love_luck: i64,
	pub best_match: String,
	pub compatibility: i64,
	pub quote: String,
}
impl LoveMetrics {
	/// Substituted whenever generated text does not parse.
	pub fn fallback() -> Self {
		Self {
			love_luck: FALLBACK_LOVE_LUCK,
			best_match: FALLBACK_BEST_MATCH.to_string(),
			compatibility: FALLBACK_COMPATIBILITY,
			quote: FALLBACK_QUOTE.to_string(),
		}
	}

	/// Parses the span from the first `{` to the last `}` of already cleaned text.
	///
	/// All four fields must be present with the declared types. Extra fields are ignored.
	pub fn parse(cleaned: &str) -> Result<Self, LoveMetricsError> {
		let object = json_object_span(cleaned).ok_or(LoveMetricsError::MissingObject)?;

		Ok(serde_json::from_str(object)?)
	}
}

fn json_object_span(text: &str) -> Option<&str> {
	let start = text.find('{')?;
	let end = text.rfind('}')?;

	if end < start {
		return None;
	}

	Some(&text[start..=end])
}
