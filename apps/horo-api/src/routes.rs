use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use horo_service::{
	Error as ServiceError, GenerateRequest, GenerateResponse, NatalAnalysisRequest,
	NatalAnalysisResponse,
};

use crate::state::AppState;

pub const BANNER: &str = "Chatbox Bói Toán Backend đang chạy!";

pub fn router(state: AppState) -> Router {
	let allow_any_origin = state.service.cfg.security.cors_allow_any_origin;
	let router = Router::new()
		.route("/", get(banner))
		.route("/health", get(health))
		.route("/generate", post(generate))
		.route("/natal-analysis", post(natal_analysis))
		.with_state(state);
	let router = if allow_any_origin { router.layer(CorsLayer::permissive()) } else { router };

	router.layer(TraceLayer::new_for_http())
}

#[derive(Debug, Serialize)]
struct BannerBody {
	message: &'static str,
}

async fn banner() -> Json<BannerBody> {
	Json(BannerBody { message: BANNER })
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn generate(
	State(state): State<AppState>,
	Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
	let response = state.service.generate(payload).await?;

	Ok(Json(response))
}

async fn natal_analysis(
	State(state): State<AppState>,
	Json(payload): Json<NatalAnalysisRequest>,
) -> Result<Json<NatalAnalysisResponse>, ApiError> {
	let response = state.service.analyze_natal(payload).await?;

	Ok(Json(response))
}

/// Error payload. The mobile client checks `error` to decide whether a call failed.
#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: &'static str,
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: &'static str,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, error_code: &'static str, message: impl Into<String>) -> Self {
		Self { status, error_code, message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::MissingInput { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "MISSING_INPUT", err.to_string()),
			ServiceError::InvalidInput { .. } =>
				Self::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", err.to_string()),
			ServiceError::GenerationFailed { .. } =>
				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "GENERATION_FAILED", err.to_string()),
			ServiceError::Storage { .. } => {
				tracing::error!(error = %err, "Prediction storage failed.");

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", err.to_string())
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code, error: self.message };

		(self.status, Json(body)).into_response()
	}
}
