use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	#[serde(default)]
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub generator: LlmProviderConfig,
}

/// An OpenAI-compatible chat completions endpoint.
///
/// Gemini is reached through its OpenAI-compatible surface, e.g.
/// `api_base = "https://generativelanguage.googleapis.com"` and
/// `path = "/v1beta/openai/chat/completions"`.
#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Security {
	/// Mirror any origin, method, and header in CORS responses. The mobile client talks to the
	/// service from arbitrary LAN addresses.
	pub cors_allow_any_origin: bool,
}
impl Default for Security {
	fn default() -> Self {
		Self { cors_allow_any_origin: true }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
