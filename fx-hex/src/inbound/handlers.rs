//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use fx_types::{
    AppError, ConversionRequest, ConversionResponse, CurrencyCode, HistoricalRatesRequest,
    RateSource,
};

use crate::ConverterService;

/// Application state shared across handlers.
pub struct AppState<S: RateSource> {
    pub service: ConverterService<S>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Get the latest rate snapshot for a base currency.
#[tracing::instrument(skip(state), fields(base = %base))]
pub async fn latest_rates<S: RateSource>(
    State(state): State<Arc<AppState<S>>>,
    Path(base): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let base: CurrencyCode = base.parse().map_err(AppError::from)?;

    let snapshot = state.service.latest_rates(&base).await?;
    Ok(Json(snapshot))
}

/// Convert an amount between two currencies at the latest rate.
#[tracing::instrument(skip(state), fields(from = %req.from, to = %req.to, amount = %req.amount))]
pub async fn convert<S: RateSource>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<ConversionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let conversion = state.service.convert(req).await?;
    Ok(Json(ConversionResponse::from(conversion)))
}

/// Get one page of the historical rate series for a base currency.
#[tracing::instrument(
    skip(state),
    fields(base = %req.base, page = req.page, page_size = req.page_size)
)]
pub async fn historical_rates<S: RateSource>(
    State(state): State<Arc<AppState<S>>>,
    Query(req): Query<HistoricalRatesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let response = state.service.historical_rates(req).await?;
    Ok(Json(response))
}
