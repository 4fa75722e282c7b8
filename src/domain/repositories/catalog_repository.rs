// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog::{Career, City, District};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 目录仓库特质
///
/// 城市、区县与行业的只读目录，另提供写入接口用于初始化数据
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn find_city(&self, id: i32) -> Result<Option<City>, RepositoryError>;
    async fn find_district(&self, id: i32) -> Result<Option<District>, RepositoryError>;
    async fn find_career(&self, id: i32) -> Result<Option<Career>, RepositoryError>;
    async fn list_cities(&self) -> Result<Vec<City>, RepositoryError>;
    async fn list_districts(&self, city_id: i32) -> Result<Vec<District>, RepositoryError>;
    async fn list_careers(&self) -> Result<Vec<Career>, RepositoryError>;
    async fn create_city(&self, name: &str) -> Result<City, RepositoryError>;
    async fn create_district(&self, city_id: i32, name: &str)
        -> Result<District, RepositoryError>;
    async fn create_career(&self, name: &str) -> Result<Career, RepositoryError>;
}
