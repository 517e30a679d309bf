mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, LlmProviderConfig, Postgres, Providers, Security, Service, Storage};

use std::{fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.http_bind must be a socket address.".to_string(),
		});
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.postgres.dsn must be non-empty.".to_string(),
		});
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	let generator = &cfg.providers.generator;

	for (label, value) in [
		("api_base", &generator.api_base),
		("api_key", &generator.api_key),
		("model", &generator.model),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("providers.generator.{label} must be non-empty."),
			});
		}
	}

	if !generator.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.generator.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&generator.temperature) {
		return Err(Error::Validation {
			message: "providers.generator.temperature must be in the range 0.0-2.0.".to_string(),
		});
	}
	if generator.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.generator.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if generator.default_headers.values().any(|value| !value.is_string()) {
		return Err(Error::Validation {
			message: "providers.generator.default_headers values must be strings.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let generator = &mut cfg.providers.generator;
	let api_base = generator.api_base.trim().trim_end_matches('/').to_string();

	generator.api_base = api_base;

	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = "info".to_string();
	}
}
