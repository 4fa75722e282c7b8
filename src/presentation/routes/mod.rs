// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::container::AppServices;
use crate::presentation::handlers::{
    auth_handler, common_handler, employer_job_handler, info_handler, job_handler,
};
use crate::presentation::middleware::auth_middleware::auth_middleware;
use axum::{
    middleware,
    routing::{get, post, put},
    Extension, Router,
};
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `services` - 应用服务容器
///
/// # 返回值
///
/// 返回配置好的路由，受保护路由需要 bearer 令牌
pub fn routes(services: AppServices) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route(
            "/auth/job-seeker/register",
            post(auth_handler::register_job_seeker),
        )
        .route("/auth/employer/register", post(auth_handler::register_employer))
        .route("/auth/check-creds", post(auth_handler::check_creds))
        .route("/auth/token", post(auth_handler::token))
        .route("/auth/revoke-token", post(auth_handler::revoke_token))
        .route("/job/web/job-posts", get(job_handler::list_job_posts))
        .route("/job/web/job-posts/{slug}", get(job_handler::get_job_post))
        .route("/info/web/companies", get(info_handler::list_companies))
        .route("/info/web/companies/{slug}", get(info_handler::get_company))
        .route("/common/cities", get(common_handler::list_cities))
        .route(
            "/common/cities/{id}/districts",
            get(common_handler::list_districts),
        )
        .route("/common/careers", get(common_handler::list_careers));

    let protected_routes = Router::new()
        .route("/auth/user-info", get(auth_handler::user_info))
        .route("/auth/settings", get(auth_handler::settings))
        .route(
            "/job/web/job-posts/{slug}/save",
            post(job_handler::toggle_saved),
        )
        .route("/job/web/saved-job-posts", get(job_handler::list_saved))
        .route(
            "/job/web/job-post-activities",
            get(job_handler::list_activities).post(job_handler::create_activity),
        )
        .route(
            "/job/web/job-post-notifications",
            get(job_handler::list_notifications).post(job_handler::create_notification),
        )
        .route(
            "/job/web/job-post-notifications/{id}/active",
            put(job_handler::toggle_notification),
        )
        .route(
            "/job/employer/job-posts",
            get(employer_job_handler::list_job_posts).post(employer_job_handler::create_job_post),
        )
        .route(
            "/job/employer/job-posts/export",
            get(employer_job_handler::export_job_posts),
        )
        .route(
            "/job/employer/job-posts/{id}",
            get(employer_job_handler::get_job_post).put(employer_job_handler::update_job_post),
        )
        .route(
            "/info/web/company",
            get(info_handler::get_own_company).put(info_handler::update_own_company),
        )
        .route(
            "/info/web/company/images",
            post(info_handler::add_company_image),
        )
        .route(
            "/info/web/job-seeker-profile",
            get(info_handler::get_profile).put(info_handler::update_profile),
        )
        .route(
            "/info/web/resumes",
            get(info_handler::list_resumes).post(info_handler::create_resume),
        )
        .route_layer(middleware::from_fn_with_state(
            services.tokens.clone(),
            auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(services.auth))
        .layer(Extension(services.jobs))
        .layer(Extension(services.info))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
