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

use crate::application::dto::job_post_dto::{
    check_salary_range, ActivityResponse, CreateActivityRequest, CreateJobPostRequest,
    CreateNotificationRequest, JobPostCardResponse, JobPostDetailResponse, JobPostExportRow,
    JobPostQuery, NotificationResponse, PaginationQuery, PrivateJobPostResponse,
    SaveJobPostResponse, UpdateJobPostRequest, EXPORT_HEADERS,
};
use crate::application::services::{check_location, page_request, unique_slug, SLUG_RETRY_LIMIT};
use crate::config::settings::PaginationSettings;
use crate::domain::models::job_post::{
    JobPost, JobPostFilter, JobPostOrdering, JobPostStatus, NewJobPost, NewJobPostActivity,
    NewJobPostNotification,
};
use crate::domain::models::pagination::Page;
use crate::domain::models::user::RoleName;
use crate::domain::repositories::{
    catalog_repository::CatalogRepository, company_repository::CompanyRepository,
    job_post_activity_repository::JobPostActivityRepository,
    job_post_repository::JobPostRepository, resume_repository::ResumeRepository,
    user_repository::UserRepository,
};
use crate::domain::services::token_service::TokenService;
use crate::utils::errors::{RepositoryError, ServiceError};
use chrono::{DateTime, FixedOffset, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

/// 招聘服务依赖的仓库集合
#[derive(Clone)]
pub struct JobRepositories {
    pub users: Arc<dyn UserRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub resumes: Arc<dyn ResumeRepository>,
    pub job_posts: Arc<dyn JobPostRepository>,
    pub activities: Arc<dyn JobPostActivityRepository>,
}

/// 招聘信息服务
pub struct JobService {
    repos: JobRepositories,
    tokens: Arc<dyn TokenService>,
    pagination: PaginationSettings,
    /// 新建招聘信息是否直接发布
    auto_publish: bool,
}

fn now() -> DateTime<FixedOffset> {
    Utc::now().fixed_offset()
}

/// 将查询参数转换为过滤条件，非法排序列或状态值直接拒绝
fn build_filter(query: &JobPostQuery) -> Result<JobPostFilter, ServiceError> {
    let ordering = match query.ordering.as_deref().filter(|o| !o.trim().is_empty()) {
        Some(raw) => raw
            .parse::<JobPostOrdering>()
            .map_err(|e| ServiceError::Validation(e.to_string()))?,
        None => JobPostOrdering::default(),
    };
    let status = query
        .status_id
        .map(JobPostStatus::try_from)
        .transpose()
        .map_err(|e| ServiceError::Validation(e.to_string()))?;

    Ok(JobPostFilter {
        keyword: query.keyword.clone(),
        career_id: query.career_id,
        company_id: query.company_id,
        city_id: query.city_id,
        is_urgent: query.is_urgent,
        status,
        ordering,
    })
}

/// 将更新请求中提供的字段合并到已有记录
fn merge_update(post: &mut JobPost, dto: UpdateJobPostRequest) {
    if let Some(v) = dto.deadline {
        post.deadline = v;
    }
    if let Some(v) = dto.quantity {
        post.quantity = v;
    }
    if let Some(v) = dto.job_description {
        post.job_description = v;
    }
    if let Some(v) = dto.job_requirement {
        post.job_requirement = v;
    }
    if let Some(v) = dto.benefits_enjoyed {
        post.benefits_enjoyed = v;
    }
    if let Some(v) = dto.position {
        post.position = v;
    }
    if let Some(v) = dto.type_of_workplace {
        post.type_of_workplace = v;
    }
    if let Some(v) = dto.experience {
        post.experience = v;
    }
    if let Some(v) = dto.academic_level {
        post.academic_level = v;
    }
    if let Some(v) = dto.job_type {
        post.job_type = v;
    }
    if let Some(v) = dto.salary_min {
        post.salary_min = v;
    }
    if let Some(v) = dto.salary_max {
        post.salary_max = v;
    }
    if let Some(v) = dto.is_urgent {
        post.is_urgent = v;
    }
    if let Some(v) = dto.is_hot {
        post.is_hot = v;
    }
    if let Some(v) = dto.contact_person_name {
        post.contact_person_name = v;
    }
    if let Some(v) = dto.contact_person_phone {
        post.contact_person_phone = v;
    }
    if let Some(v) = dto.contact_person_email {
        post.contact_person_email = v;
    }
    if let Some(v) = dto.career {
        post.career_id = v;
    }
}

impl JobService {
    pub fn new(
        repos: JobRepositories,
        tokens: Arc<dyn TokenService>,
        pagination: PaginationSettings,
        auto_publish: bool,
    ) -> Self {
        Self {
            repos,
            tokens,
            pagination,
            auto_publish,
        }
    }

    async fn owned_post(&self, id: i32, user_id: Uuid) -> Result<JobPost, ServiceError> {
        self.repos
            .job_posts
            .find_by_id(id)
            .await?
            .filter(|p| p.user_id == user_id)
            .ok_or_else(|| ServiceError::not_found("Job post"))
    }

    async fn check_career(&self, career_id: i32) -> Result<(), ServiceError> {
        match self.repos.catalog.find_career(career_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::not_found("Career")),
        }
    }

    async fn job_post_slug(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<String, ServiceError> {
        unique_slug(name, |candidate| {
            let job_posts = self.repos.job_posts.clone();
            async move { job_posts.slug_exists(&candidate, exclude_id).await }
        })
        .await
    }

    /// 公开的招聘信息列表：仅已发布且未过期
    pub async fn find_job_posts(
        &self,
        query: JobPostQuery,
    ) -> Result<Page<JobPostCardResponse>, ServiceError> {
        let filter = build_filter(&query)?;
        let page = page_request(query.page, query.page_size, &self.pagination)?;

        let page = self
            .repos
            .job_posts
            .find_published(&filter, now(), page)
            .await?;
        Ok(page.map(JobPostCardResponse::from))
    }

    /// 招聘方自己的招聘信息列表
    pub async fn find_private_job_posts(
        &self,
        user_id: Uuid,
        query: JobPostQuery,
    ) -> Result<Page<PrivateJobPostResponse>, ServiceError> {
        let filter = build_filter(&query)?;
        let page = page_request(query.page, query.page_size, &self.pagination)?;

        let now = now();
        let page = self
            .repos
            .job_posts
            .find_by_owner(user_id, &filter, Some(page))
            .await?;
        Ok(page.map(|row| PrivateJobPostResponse::from_row(row, now)))
    }

    /// 以 CSV 导出招聘方的全部招聘信息（忽略分页参数）
    pub async fn export_private_job_posts(
        &self,
        user_id: Uuid,
        query: JobPostQuery,
    ) -> Result<String, ServiceError> {
        let filter = build_filter(&query)?;
        let rows = self
            .repos
            .job_posts
            .find_by_owner(user_id, &filter, None)
            .await?
            .results;

        let csv_err = |e: csv::Error| ServiceError::Internal(format!("CSV export failed: {}", e));
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(EXPORT_HEADERS).map_err(csv_err)?;
        for (index, row) in rows.iter().enumerate() {
            writer
                .serialize(JobPostExportRow::new(index + 1, row))
                .map_err(csv_err)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ServiceError::Internal(format!("CSV export failed: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| ServiceError::Internal(e.to_string()))
    }

    pub async fn get_private_job_post(
        &self,
        id: i32,
        user_id: Uuid,
    ) -> Result<JobPostDetailResponse, ServiceError> {
        let post = self.owned_post(id, user_id).await?;
        let view = self
            .repos
            .job_posts
            .find_views_by_ids(&[post.id])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::not_found("Job post"))?;

        Ok(JobPostDetailResponse::new(view, None))
    }

    /// 创建招聘信息
    ///
    /// 地址与招聘信息在同一事务中写入；slug 唯一索引冲突时重新生成并重试
    pub async fn create_private_job_post(
        &self,
        user_id: Uuid,
        dto: CreateJobPostRequest,
    ) -> Result<JobPost, ServiceError> {
        dto.validate()?;

        let employer_missing = || ServiceError::NotFound("Employer or company not found".into());
        let user = self
            .repos
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(employer_missing)?;
        let company = self
            .repos
            .companies
            .find_by_user(user.id)
            .await?
            .ok_or_else(employer_missing)?;
        if user.role_name != RoleName::Employer {
            return Err(ServiceError::Conflict(
                "Only employers can create job posts".to_string(),
            ));
        }

        self.check_career(dto.career).await?;
        check_location(self.repos.catalog.as_ref(), &dto.location).await?;

        let status = if self.auto_publish {
            JobPostStatus::Published
        } else {
            JobPostStatus::Pending
        };

        for attempt in 1..=SLUG_RETRY_LIMIT {
            let slug = self.job_post_slug(&dto.job_name, None).await?;
            let new_post = NewJobPost {
                job_name: dto.job_name.clone(),
                slug,
                deadline: dto.deadline,
                quantity: dto.quantity,
                job_description: dto.job_description.clone(),
                job_requirement: dto.job_requirement.clone(),
                benefits_enjoyed: dto.benefits_enjoyed.clone(),
                position: dto.position,
                type_of_workplace: dto.type_of_workplace,
                experience: dto.experience,
                academic_level: dto.academic_level,
                job_type: dto.job_type,
                salary_min: dto.salary_min,
                salary_max: dto.salary_max,
                is_urgent: dto.is_urgent,
                is_hot: dto.is_hot,
                contact_person_name: dto.contact_person_name.clone(),
                contact_person_phone: dto.contact_person_phone.clone(),
                contact_person_email: dto.contact_person_email.clone(),
                status,
                career_id: dto.career,
                company_id: company.company.id,
                user_id: user.id,
            };

            match self
                .repos
                .job_posts
                .create(dto.location.clone().into(), new_post)
                .await
            {
                Ok(post) => {
                    info!("Job post {} created with slug {}", post.id, post.slug);
                    return Ok(post);
                }
                Err(RepositoryError::UniqueViolation(msg)) => {
                    warn!(
                        "Job post slug collision on attempt {}/{}: {}",
                        attempt, SLUG_RETRY_LIMIT, msg
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::Conflict(
            "Could not allocate a unique job post slug".to_string(),
        ))
    }

    /// 更新招聘信息，名称变化时重新生成 slug
    pub async fn update_private_job_post(
        &self,
        id: i32,
        user_id: Uuid,
        dto: UpdateJobPostRequest,
    ) -> Result<JobPost, ServiceError> {
        dto.validate()?;

        let mut post = self.owned_post(id, user_id).await?;

        if let Some(career_id) = dto.career {
            self.check_career(career_id).await?;
        }
        let location = match dto.location.clone() {
            Some(location) => {
                check_location(self.repos.catalog.as_ref(), &location).await?;
                Some(location.into())
            }
            None => None,
        };

        let renamed = dto
            .job_name
            .clone()
            .filter(|name| *name != post.job_name);
        merge_update(&mut post, dto);
        check_salary_range(post.salary_min, post.salary_max)
            .map_err(|_| ServiceError::Validation("salaryMin must not exceed salaryMax".into()))?;

        if let Some(name) = renamed {
            post.slug = self.job_post_slug(&name, Some(post.id)).await?;
            post.job_name = name;
        }

        for attempt in 1..=SLUG_RETRY_LIMIT {
            match self.repos.job_posts.update(&post, location.clone()).await {
                Ok(updated) => return Ok(updated),
                Err(RepositoryError::UniqueViolation(msg)) => {
                    warn!(
                        "Job post slug collision on update attempt {}/{}: {}",
                        attempt, SLUG_RETRY_LIMIT, msg
                    );
                    post.slug = self.job_post_slug(&post.job_name, Some(post.id)).await?;
                }
                Err(RepositoryError::NotFound) => {
                    return Err(ServiceError::not_found("Job post"));
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::Conflict(
            "Could not allocate a unique job post slug".to_string(),
        ))
    }

    /// 公开详情
    ///
    /// 令牌可选，无效令牌按匿名处理；每次访问浏览量原子加一
    pub async fn get_public_job_post(
        &self,
        slug: &str,
        bearer: Option<&str>,
    ) -> Result<JobPostDetailResponse, ServiceError> {
        let post = self
            .repos
            .job_posts
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job post"))?;

        let requester = bearer.and_then(|token| match self.tokens.verify(token) {
            Ok(claims) => Some(claims.id),
            Err(e) => {
                debug!("Ignoring invalid bearer token on public job post: {}", e);
                None
            }
        });
        let is_saved = match requester {
            Some(user_id) => Some(self.repos.job_posts.is_saved(user_id, post.id).await?),
            None => None,
        };

        let views = self.repos.job_posts.increment_views(post.id).await?;
        let mut view = self
            .repos
            .job_posts
            .find_views_by_ids(&[post.id])
            .await?
            .pop()
            .ok_or_else(|| ServiceError::not_found("Job post"))?;
        view.post.views = views;

        Ok(JobPostDetailResponse::new(view, is_saved))
    }

    pub async fn toggle_saved_job_post(
        &self,
        slug: &str,
        user_id: Uuid,
    ) -> Result<SaveJobPostResponse, ServiceError> {
        let post = self
            .repos
            .job_posts
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job post"))?;

        let is_saved = self.repos.job_posts.toggle_saved(user_id, post.id).await?;
        Ok(SaveJobPostResponse { is_saved })
    }

    pub async fn find_saved_job_posts(
        &self,
        user_id: Uuid,
        query: PaginationQuery,
    ) -> Result<Page<JobPostCardResponse>, ServiceError> {
        let page = page_request(query.page, query.page_size, &self.pagination)?;
        let page = self
            .repos
            .job_posts
            .find_saved(user_id, now(), page)
            .await?;
        Ok(page.map(JobPostCardResponse::from))
    }

    async fn cards_by_id(
        &self,
        ids: &[i32],
    ) -> Result<HashMap<i32, JobPostCardResponse>, ServiceError> {
        let views = self.repos.job_posts.find_views_by_ids(ids).await?;
        Ok(views
            .into_iter()
            .map(|v| (v.post.id, JobPostCardResponse::from(v)))
            .collect())
    }

    /// 投递简历
    pub async fn create_job_post_activity(
        &self,
        user_id: Uuid,
        dto: CreateActivityRequest,
    ) -> Result<ActivityResponse, ServiceError> {
        dto.validate()?;

        if self.repos.users.find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::not_found("User"));
        }
        self.repos
            .resumes
            .find_by_id(dto.resume)
            .await?
            .filter(|r| r.user_id == user_id)
            .ok_or_else(|| ServiceError::not_found("Resume"))?;
        let post = self
            .repos
            .job_posts
            .find_by_id(dto.job_post)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job post"))?;

        let activity = self
            .repos
            .activities
            .create_activity(NewJobPostActivity {
                user_id,
                job_post_id: post.id,
                resume_id: dto.resume,
                full_name: dto.full_name,
                email: dto.email,
                phone: dto.phone,
            })
            .await?;
        info!("User {} applied to job post {}", user_id, post.id);

        let mut cards = self.cards_by_id(&[post.id]).await?;
        let card = cards.remove(&post.id);
        Ok(ActivityResponse::new(activity, card))
    }

    pub async fn find_job_post_activities(
        &self,
        user_id: Uuid,
        query: PaginationQuery,
    ) -> Result<Page<ActivityResponse>, ServiceError> {
        let page = page_request(query.page, query.page_size, &self.pagination)?;
        let page = self.repos.activities.find_activities(user_id, page).await?;

        let ids: Vec<i32> = page.results.iter().map(|a| a.job_post_id).collect();
        let cards = self.cards_by_id(&ids).await?;
        Ok(page.map(|activity| {
            let card = cards.get(&activity.job_post_id).cloned();
            ActivityResponse::new(activity, card)
        }))
    }

    /// 创建职位订阅，仅保存不推送
    pub async fn create_job_post_notification(
        &self,
        user_id: Uuid,
        dto: CreateNotificationRequest,
    ) -> Result<NotificationResponse, ServiceError> {
        dto.validate()?;

        self.check_career(dto.career).await?;
        if self.repos.catalog.find_city(dto.city).await?.is_none() {
            return Err(ServiceError::not_found("City"));
        }

        let notification = self
            .repos
            .activities
            .create_notification(NewJobPostNotification {
                user_id,
                job_name: dto.job_name,
                position: dto.position,
                experience: dto.experience,
                salary: dto.salary,
                frequency: dto.frequency,
                career_id: dto.career,
                city_id: dto.city,
            })
            .await?;

        Ok(notification.into())
    }

    pub async fn find_job_post_notifications(
        &self,
        user_id: Uuid,
        query: PaginationQuery,
    ) -> Result<Page<NotificationResponse>, ServiceError> {
        let page = page_request(query.page, query.page_size, &self.pagination)?;
        let page = self
            .repos
            .activities
            .find_notifications(user_id, page)
            .await?;
        Ok(page.map(NotificationResponse::from))
    }

    pub async fn toggle_job_post_notification(
        &self,
        id: i32,
        user_id: Uuid,
    ) -> Result<NotificationResponse, ServiceError> {
        self.repos
            .activities
            .toggle_notification(id, user_id)
            .await?
            .map(NotificationResponse::from)
            .ok_or_else(|| ServiceError::not_found("Job post notification"))
    }
}
