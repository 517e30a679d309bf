#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
	Yesterday,
	Today,
	Tomorrow,
}
impl Day {
	pub const DEFAULT_LABEL: &'static str = "today";

	/// Unknown labels read as [`Day::Today`].
	pub fn from_label(label: &str) -> Self {
		match label {
			"yesterday" => Self::Yesterday,
			"tomorrow" => Self::Tomorrow,
			_ => Self::Today,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Yesterday => "yesterday",
			Self::Today => "today",
			Self::Tomorrow => "tomorrow",
		}
	}

	/// Vietnamese label interpolated into prompts.
	pub fn label_vi(self) -> &'static str {
		match self {
			Self::Yesterday => "hôm qua",
			Self::Today => "hôm nay",
			Self::Tomorrow => "ngày mai",
		}
	}
}
