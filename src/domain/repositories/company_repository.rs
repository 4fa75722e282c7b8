// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::company::{
    Company, CompanyFilter, CompanyImage, CompanyWithLocation, NewLocation,
};
use crate::domain::models::pagination::{Page, PageRequest};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 公司仓库特质
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// 查找用户拥有的公司
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CompanyWithLocation>, RepositoryError>;
    /// 根据slug查找公司
    async fn find_by_slug(&self, slug: &str)
        -> Result<Option<CompanyWithLocation>, RepositoryError>;
    /// 检查slug是否被其他公司占用
    async fn slug_exists(&self, slug: &str, exclude_id: Option<i32>)
        -> Result<bool, RepositoryError>;
    /// 更新公司，给定地址时原地更新公司地址
    async fn update(
        &self,
        company: &Company,
        location: Option<NewLocation>,
    ) -> Result<CompanyWithLocation, RepositoryError>;
    /// 分页查询公司
    async fn find_all(
        &self,
        filter: &CompanyFilter,
        page: PageRequest,
    ) -> Result<Page<CompanyWithLocation>, RepositoryError>;
    /// 添加公司图片
    async fn add_image(
        &self,
        company_id: i32,
        image_url: &str,
    ) -> Result<CompanyImage, RepositoryError>;
    /// 查询公司图片
    async fn find_images(&self, company_id: i32) -> Result<Vec<CompanyImage>, RepositoryError>;
}
