// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::dto::info_dto::{
    AddCompanyImageRequest, CompanyQuery, CreateResumeRequest, UpdateCompanyRequest,
    UpdateProfileRequest,
};
use crate::application::services::info_service::InfoService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::CurrentUser;
use crate::presentation::handlers::ok;

pub async fn list_companies(
    Extension(info): Extension<Arc<InfoService>>,
    Query(query): Query<CompanyQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.find_companies(query).await?))
}

pub async fn get_company(
    Extension(info): Extension<Arc<InfoService>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.get_public_company(&slug).await?))
}

/// 当前招聘方的公司
pub async fn get_own_company(
    Extension(info): Extension<Arc<InfoService>>,
    CurrentUser(claims): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.get_own_company(claims.id).await?))
}

pub async fn update_own_company(
    Extension(info): Extension<Arc<InfoService>>,
    CurrentUser(claims): CurrentUser,
    Json(payload): Json<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.update_own_company(claims.id, payload).await?))
}

pub async fn add_company_image(
    Extension(info): Extension<Arc<InfoService>>,
    CurrentUser(claims): CurrentUser,
    Json(payload): Json<AddCompanyImageRequest>,
) -> Result<impl IntoResponse, AppError> {
    let image = info.add_company_image(claims.id, payload).await?;
    Ok((StatusCode::CREATED, ok(image)))
}

pub async fn get_profile(
    Extension(info): Extension<Arc<InfoService>>,
    CurrentUser(claims): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.get_profile(claims.id).await?))
}

pub async fn update_profile(
    Extension(info): Extension<Arc<InfoService>>,
    CurrentUser(claims): CurrentUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.update_profile(claims.id, payload).await?))
}

pub async fn list_resumes(
    Extension(info): Extension<Arc<InfoService>>,
    CurrentUser(claims): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(info.find_resumes(claims.id).await?))
}

pub async fn create_resume(
    Extension(info): Extension<Arc<InfoService>>,
    CurrentUser(claims): CurrentUser,
    Json(payload): Json<CreateResumeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let resume = info.create_resume(claims.id, payload).await?;
    Ok((StatusCode::CREATED, ok(resume)))
}
