// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::dto::job_post_dto::{
    CreateJobPostRequest, JobPostQuery, UpdateJobPostRequest,
};
use crate::application::services::job_service::JobService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::auth_user::CurrentUser;
use crate::presentation::handlers::ok;

const EXPORT_FILE_NAME: &str = "job-posts.csv";

pub async fn list_job_posts(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Query(query): Query<JobPostQuery>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.find_private_job_posts(claims.id, query).await?))
}

/// 创建招聘信息
pub async fn create_job_post(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Json(payload): Json<CreateJobPostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let post = jobs.create_private_job_post(claims.id, payload).await?;
    Ok((StatusCode::CREATED, ok(post)))
}

/// 以 CSV 附件导出招聘信息
pub async fn export_job_posts(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Query(query): Query<JobPostQuery>,
) -> Result<impl IntoResponse, AppError> {
    let csv = jobs.export_private_job_posts(claims.id, query).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        csv,
    ))
}

pub async fn get_job_post(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.get_private_job_post(id, claims.id).await?))
}

pub async fn update_job_post(
    Extension(jobs): Extension<Arc<JobService>>,
    CurrentUser(claims): CurrentUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateJobPostRequest>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(jobs.update_private_job_post(id, claims.id, payload).await?))
}
