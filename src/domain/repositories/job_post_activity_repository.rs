// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_post::{
    JobPostActivity, JobPostNotification, NewJobPostActivity, NewJobPostNotification,
};
use crate::domain::models::pagination::{Page, PageRequest};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 求职者行为仓库特质
///
/// 管理职位投递记录与职位订阅通知
#[async_trait]
pub trait JobPostActivityRepository: Send + Sync {
    /// 创建投递记录
    async fn create_activity(
        &self,
        activity: NewJobPostActivity,
    ) -> Result<JobPostActivity, RepositoryError>;
    /// 分页查询用户的投递记录，最新的在前
    async fn find_activities(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<JobPostActivity>, RepositoryError>;
    /// 创建订阅
    async fn create_notification(
        &self,
        notification: NewJobPostNotification,
    ) -> Result<JobPostNotification, RepositoryError>;
    /// 分页查询用户的订阅，最新的在前
    async fn find_notifications(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<JobPostNotification>, RepositoryError>;
    /// 原子地翻转订阅的启用状态，订阅不属于该用户时返回 None
    async fn toggle_notification(
        &self,
        id: i32,
        user_id: Uuid,
    ) -> Result<Option<JobPostNotification>, RepositoryError>;
}
