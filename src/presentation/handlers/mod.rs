// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod auth_handler;
pub mod common_handler;
pub mod employer_job_handler;
pub mod info_handler;
pub mod job_handler;

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

/// 成功响应包装 `{"errors": {}, "data": ...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub errors: Map<String, Value>,
    pub data: T,
}

pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        errors: Map::new(),
        data,
    })
}
