// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::application::services::{
    auth_service::AuthService,
    info_service::InfoService,
    job_service::{JobRepositories, JobService},
};
use crate::config::settings::Settings;
use crate::domain::repositories::{
    catalog_repository::CatalogRepository, company_repository::CompanyRepository,
    job_post_activity_repository::JobPostActivityRepository,
    job_post_repository::JobPostRepository, resume_repository::ResumeRepository,
    user_repository::UserRepository,
};
use crate::domain::services::{password_service::PasswordService, token_service::TokenService};
use crate::infrastructure::repositories::{
    catalog_repo_impl::CatalogRepositoryImpl, company_repo_impl::CompanyRepositoryImpl,
    job_post_activity_repo_impl::JobPostActivityRepositoryImpl,
    job_post_repo_impl::JobPostRepositoryImpl, resume_repo_impl::ResumeRepositoryImpl,
    user_repo_impl::UserRepositoryImpl,
};
use crate::infrastructure::security::{jwt::JwtTokenService, password::Argon2PasswordService};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 应用服务容器
///
/// 在启动时组装仓库与服务，路由层通过 `Extension` 共享
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<AuthService>,
    pub jobs: Arc<JobService>,
    pub info: Arc<InfoService>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppServices {
    /// 根据数据库连接与配置构建全部服务
    pub fn build(db: Arc<DatabaseConnection>, settings: &Settings) -> anyhow::Result<Self> {
        let users: Arc<dyn UserRepository> = Arc::new(UserRepositoryImpl::new(db.clone()));
        let companies: Arc<dyn CompanyRepository> =
            Arc::new(CompanyRepositoryImpl::new(db.clone()));
        let catalog: Arc<dyn CatalogRepository> = Arc::new(CatalogRepositoryImpl::new(db.clone()));
        let resumes: Arc<dyn ResumeRepository> = Arc::new(ResumeRepositoryImpl::new(db.clone()));
        let job_posts: Arc<dyn JobPostRepository> =
            Arc::new(JobPostRepositoryImpl::new(db.clone()));
        let activities: Arc<dyn JobPostActivityRepository> =
            Arc::new(JobPostActivityRepositoryImpl::new(db));

        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(&settings.jwt));
        let passwords: Arc<dyn PasswordService> =
            Arc::new(Argon2PasswordService::new(&settings.password)?);

        let auth = AuthService::new(
            users.clone(),
            companies.clone(),
            catalog.clone(),
            passwords,
            tokens.clone(),
        );
        let jobs = JobService::new(
            JobRepositories {
                users: users.clone(),
                companies: companies.clone(),
                catalog: catalog.clone(),
                resumes: resumes.clone(),
                job_posts,
                activities,
            },
            tokens.clone(),
            settings.pagination.clone(),
            settings.job_posts.auto_publish,
        );
        let info = InfoService::new(
            users,
            companies,
            resumes,
            catalog,
            settings.pagination.clone(),
        );

        Ok(Self {
            auth: Arc::new(auth),
            jobs: Arc::new(jobs),
            info: Arc::new(info),
            tokens,
        })
    }
}
