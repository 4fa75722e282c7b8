// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 应用服务层
//!
//! 每个服务组合若干仓库，接收请求 DTO 并返回 `ServiceError` 类型化的结果

pub mod auth_service;
pub mod info_service;
pub mod job_service;

use crate::application::dto::location_dto::LocationRequest;
use crate::config::settings::PaginationSettings;
use crate::domain::models::pagination::PageRequest;
use crate::domain::repositories::catalog_repository::CatalogRepository;
use crate::utils::errors::{RepositoryError, ServiceError};
use crate::utils::slug::{next_slug_candidate, slugify};
use std::future::Future;

/// slug 唯一索引冲突时的最大重试次数
pub(crate) const SLUG_RETRY_LIMIT: usize = 5;

/// 解析分页参数
///
/// `page` 从 1 开始；`page_size` 缺省取配置默认值，且不得超过上限
pub(crate) fn page_request(
    page: Option<u64>,
    page_size: Option<u64>,
    settings: &PaginationSettings,
) -> Result<PageRequest, ServiceError> {
    let page = page.unwrap_or(1);
    if page < 1 {
        return Err(ServiceError::Validation("page must be >= 1".to_string()));
    }

    let page_size = page_size.unwrap_or(settings.default_page_size);
    if page_size < 1 || page_size > settings.max_page_size {
        return Err(ServiceError::Validation(format!(
            "pageSize must be between 1 and {}",
            settings.max_page_size
        )));
    }

    // 偏移量必须能放进 i64
    let in_range = (page - 1)
        .checked_mul(page_size)
        .is_some_and(|offset| offset <= i64::MAX as u64);
    if !in_range {
        return Err(ServiceError::Validation("page is out of range".to_string()));
    }

    Ok(PageRequest::new(page, page_size))
}

/// 校验地址中的城市与区县
pub(crate) async fn check_location(
    catalog: &dyn CatalogRepository,
    location: &LocationRequest,
) -> Result<(), ServiceError> {
    if catalog.find_city(location.city).await?.is_none() {
        return Err(ServiceError::not_found("City"));
    }

    let district = catalog
        .find_district(location.district)
        .await?
        .ok_or_else(|| ServiceError::not_found("District"))?;
    if district.city_id != location.city {
        return Err(ServiceError::Validation(
            "District does not belong to the selected city".to_string(),
        ));
    }

    Ok(())
}

/// 生成当前未被占用的 slug
///
/// `exists` 查询候选值是否已被使用，冲突时按 `foo`、`foo-1`、`foo-2` 递增
pub(crate) async fn unique_slug<F, Fut>(name: &str, mut exists: F) -> Result<String, ServiceError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, RepositoryError>>,
{
    let mut slug = slugify(name);
    while exists(slug.clone()).await? {
        slug = next_slug_candidate(&slug);
    }
    Ok(slug)
}
