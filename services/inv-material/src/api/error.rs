//! API 错误映射

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mill_errors::AppError;
use serde_json::json;
use tracing::error;

/// AppError 的 HTTP 包装
///
/// 校验错误与未找到错误原样透出，
/// 存储层故障只记日志不泄露细节
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &self.0 {
            AppError::NotFound(msg) | AppError::Validation(msg) => msg.clone(),
            other => {
                error!("Request failed: {}", other);
                "internal error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
