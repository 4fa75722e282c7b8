// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::services::info_service::InfoService;
use crate::presentation::errors::AppError;
use crate::presentation::handlers::ok;

pub async fn list_cities(
    Extension(info): Extension<Arc<InfoService>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.list_cities().await?))
}

pub async fn list_districts(
    Extension(info): Extension<Arc<InfoService>>,
    Path(city_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.list_districts(city_id).await?))
}

pub async fn list_careers(
    Extension(info): Extension<Arc<InfoService>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.list_careers().await?))
}
