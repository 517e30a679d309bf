use regex::Regex;

const FENCE_PATTERN: &str = r#"(?:```|'''|""")(?:json)?"#;

/// Removes code-fence and triple-quote markers anywhere in `raw`, with or without a lowercase
/// `json` tag, then trims surrounding whitespace.
pub fn strip_fences(raw: &str) -> String {
	let stripped = match Regex::new(FENCE_PATTERN) {
		Ok(re) => re.replace_all(raw, "").into_owned(),
		Err(_) => raw.to_string(),
	};

	stripped.trim().to_string()
}
