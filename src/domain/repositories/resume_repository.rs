// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::resume::Resume;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 简历仓库特质
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// 创建简历
    async fn create(
        &self,
        user_id: Uuid,
        title: &str,
        file_url: Option<String>,
    ) -> Result<Resume, RepositoryError>;
    /// 根据ID查找简历
    async fn find_by_id(&self, id: i32) -> Result<Option<Resume>, RepositoryError>;
    /// 查询用户的全部简历，最新的在前
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Resume>, RepositoryError>;
}
