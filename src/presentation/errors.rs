// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::utils::errors::{RepositoryError, ServiceError};

/// 应用错误类型
///
/// 封装所有可能的应用层错误，按 `ServiceError` 变体映射 HTTP 状态码
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self(ServiceError::Unauthorized(message.into()).into())
    }

    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<ServiceError>() {
            Some(ServiceError::Conflict(_)) => StatusCode::CONFLICT,
            Some(ServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Some(ServiceError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            Some(ServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            Some(ServiceError::Repository(RepositoryError::NotFound)) => StatusCode::NOT_FOUND,
            Some(ServiceError::Repository(RepositoryError::UniqueViolation(_))) => {
                StatusCode::CONFLICT
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {:#}", self.0);
            "Internal server error".to_string()
        } else {
            self.0.to_string()
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
