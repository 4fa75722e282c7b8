// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 公司默认头像
pub const DEFAULT_COMPANY_IMAGE_URL: &str = "https://res.cloudinary.com/dtnpj540t/image/upload/v1682831706/my-job/images_default/company_image_default.png";
/// 公司默认封面
pub const DEFAULT_COMPANY_COVER_IMAGE_URL: &str =
    "https://cdn1.vieclam24h.vn/tvn/images/assets/img/generic_18.jpg";

/// 地址
///
/// 由公司或招聘信息独占
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i32,
    pub city_id: i32,
    pub district_id: i32,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// 待写入的地址
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub city_id: i32,
    pub district_id: i32,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// 公司
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i32,
    pub user_id: Uuid,
    pub company_name: String,
    pub slug: String,
    pub company_email: String,
    pub company_phone: String,
    pub website_url: Option<String>,
    pub tax_code: String,
    pub since: Option<NaiveDate>,
    pub field_operation: String,
    pub description: Option<String>,
    pub employee_size: i32,
    pub company_image_url: String,
    pub company_cover_image_url: String,
    pub facebook_url: Option<String>,
    pub youtube_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub location_id: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// 待创建的公司，`user_id` 与 `location_id` 在事务内补齐
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub company_name: String,
    pub slug: String,
    pub company_email: String,
    pub company_phone: String,
    pub website_url: Option<String>,
    pub tax_code: String,
    pub since: Option<NaiveDate>,
    pub field_operation: String,
    pub description: Option<String>,
    pub employee_size: i32,
}

/// 公司及其地址
#[derive(Debug, Clone)]
pub struct CompanyWithLocation {
    pub company: Company,
    pub location: Location,
}

/// 公司图片
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyImage {
    pub id: i32,
    pub company_id: i32,
    pub image_url: String,
    pub created_at: DateTime<FixedOffset>,
}

/// 公司列表过滤条件
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    pub keyword: Option<String>,
    pub city_id: Option<i32>,
}
