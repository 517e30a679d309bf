/// The prediction flavor selected by a request.
///
/// Requests carry the category as a free string. Anything outside the known set resolves to
/// [`Category::Daily`] for prompting, while the literal string is still what gets stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
	Daily,
	Love,
	Work,
	LoveMetrics,
}
impl Category {
	pub const DEFAULT_LABEL: &'static str = "daily";

	pub fn from_label(label: &str) -> Self {
		match label {
			"daily" => Self::Daily,
			"love" => Self::Love,
			"work" => Self::Work,
			"love_metrics" => Self::LoveMetrics,
			_ => Self::Daily,
		}
	}

	pub fn is_recognized(label: &str) -> bool {
		matches!(label, "daily" | "love" | "work" | "love_metrics")
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Daily => "daily",
			Self::Love => "love",
			Self::Work => "work",
			Self::LoveMetrics => "love_metrics",
		}
	}

	pub fn shape(self) -> ResponseShape {
		match self {
			Self::LoveMetrics => ResponseShape::Metrics,
			Self::Daily | Self::Love | Self::Work => ResponseShape::Text,
		}
	}
}

/// How generated text is turned into a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
	/// Cleaned text is used verbatim as `prediction`.
	Text,
	/// Cleaned text is parsed into [`crate::LoveMetrics`].
	Metrics,
}
