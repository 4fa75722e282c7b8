// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::company::NewLocation;
use crate::domain::models::job_post::{
    JobPost, JobPostFilter, JobPostView, NewJobPost, PrivateJobPostRow,
};
use crate::domain::models::pagination::{Page, PageRequest};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

/// 招聘信息仓库特质
///
/// slug 与收藏记录的唯一性由唯一索引保证，
/// 冲突以 [`RepositoryError::UniqueViolation`] 返回
#[async_trait]
pub trait JobPostRepository: Send + Sync {
    /// 检查slug是否被其他招聘信息占用
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>)
        -> Result<bool, RepositoryError>;
    /// 在同一事务内创建地址与招聘信息
    async fn create(
        &self,
        location: NewLocation,
        post: NewJobPost,
    ) -> Result<JobPost, RepositoryError>;
    /// 在同一事务内更新招聘信息，给定地址时原地更新
    async fn update(
        &self,
        post: &JobPost,
        location: Option<NewLocation>,
    ) -> Result<JobPost, RepositoryError>;
    /// 根据ID查找
    async fn find_by_id(&self, id: i32) -> Result<Option<JobPost>, RepositoryError>;
    /// 根据slug查找
    async fn find_by_slug(&self, slug: &str) -> Result<Option<JobPost>, RepositoryError>;
    /// 批量加载招聘信息及关联数据，保持传入顺序
    async fn find_views_by_ids(&self, ids: &[i32]) -> Result<Vec<JobPostView>, RepositoryError>;
    /// 查询已发布且未过期的招聘信息
    async fn find_published(
        &self,
        filter: &JobPostFilter,
        now: DateTime<FixedOffset>,
        page: PageRequest,
    ) -> Result<Page<JobPostView>, RepositoryError>;
    /// 查询用户发布的招聘信息，`page` 为空时返回全部
    async fn find_by_owner(
        &self,
        user_id: Uuid,
        filter: &JobPostFilter,
        page: Option<PageRequest>,
    ) -> Result<Page<PrivateJobPostRow>, RepositoryError>;
    /// 原子地将浏览量加一，返回新的浏览量
    async fn increment_views(&self, id: i32) -> Result<i32, RepositoryError>;
    /// 检查用户是否已收藏
    async fn is_saved(&self, user_id: Uuid, job_post_id: i32) -> Result<bool, RepositoryError>;
    /// 切换收藏状态，返回切换后是否处于收藏状态
    async fn toggle_saved(&self, user_id: Uuid, job_post_id: i32)
        -> Result<bool, RepositoryError>;
    /// 查询用户收藏且仍有效的招聘信息，最近收藏的在前
    async fn find_saved(
        &self,
        user_id: Uuid,
        now: DateTime<FixedOffset>,
        page: PageRequest,
    ) -> Result<Page<JobPostView>, RepositoryError>;
}
