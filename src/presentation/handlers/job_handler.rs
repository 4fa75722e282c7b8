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

use crate::application::dto::job_post_dto::{
    CreateActivityRequest, CreateNotificationRequest, JobPostQuery, PaginationQuery,
};
use crate::application::services::job_service::JobService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::{CurrentUser, OptionalBearer};
use crate::presentation::handlers::ok;

/// 公开的招聘信息列表
pub async fn list_job_posts(
    Extension(jobs): Extension<Arc<JobService>>,
    Query(query): Query<JobPostQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.find_job_posts(query).await?))
}

/// 招聘信息详情，令牌可选
pub async fn get_job_post(
    Extension(jobs): Extension<Arc<JobService>>,
    Path(slug): Path<String>,
    OptionalBearer(token): OptionalBearer,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.get_public_job_post(&slug, token.as_deref()).await?))
}

pub async fn toggle_saved(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.toggle_saved_job_post(&slug, claims.id).await?))
}

pub async fn list_saved(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.find_saved_job_posts(claims.id, query).await?))
}

pub async fn list_activities(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.find_job_post_activities(claims.id, query).await?))
}

/// 投递简历
pub async fn create_activity(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Json(payload): Json<CreateActivityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let activity = jobs.create_job_post_activity(claims.id, payload).await?;
    Ok((StatusCode::CREATED, ok(activity)))
}

pub async fn list_notifications(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Query(query): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.find_job_post_notifications(claims.id, query).await?))
}

pub async fn create_notification(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Json(payload): Json<CreateNotificationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let notification = jobs.create_job_post_notification(claims.id, payload).await?;
    Ok((StatusCode::CREATED, ok(notification)))
}

/// 切换职位订阅的启用状态
pub async fn toggle_notification(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.toggle_job_post_notification(id, claims.id).await?))
}
