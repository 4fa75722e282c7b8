// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::location_dto::{LocationRequest, LocationResponse};
use crate::domain::models::company::{CompanyImage, CompanyWithLocation};
use crate::domain::models::user::{JobSeekerProfile, User};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 公司详情
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: i32,
    pub slug: String,
    pub company_name: String,
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
    pub location_dict: LocationResponse,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub company_images: Vec<CompanyImage>,
}

impl CompanyResponse {
    pub fn new(value: CompanyWithLocation, images: Vec<CompanyImage>) -> Self {
        let c = value.company;
        Self {
            id: c.id,
            slug: c.slug,
            company_name: c.company_name,
            company_email: c.company_email,
            company_phone: c.company_phone,
            website_url: c.website_url,
            tax_code: c.tax_code,
            since: c.since,
            field_operation: c.field_operation,
            description: c.description,
            employee_size: c.employee_size,
            company_image_url: c.company_image_url,
            company_cover_image_url: c.company_cover_image_url,
            facebook_url: c.facebook_url,
            youtube_url: c.youtube_url,
            linkedin_url: c.linkedin_url,
            location_dict: value.location.into(),
            company_images: images,
        }
    }
}

impl From<CompanyWithLocation> for CompanyResponse {
    fn from(value: CompanyWithLocation) -> Self {
        Self::new(value, Vec::new())
    }
}

/// 更新公司信息请求
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub company_name: Option<String>,
    #[validate(email)]
    pub company_email: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub company_phone: Option<String>,
    #[validate(url)]
    pub website_url: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub tax_code: Option<String>,
    pub since: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255))]
    pub field_operation: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub employee_size: Option<i32>,
    #[validate(url)]
    pub facebook_url: Option<String>,
    #[validate(url)]
    pub youtube_url: Option<String>,
    #[validate(url)]
    pub linkedin_url: Option<String>,
    #[validate(nested)]
    pub location: Option<LocationRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyQuery {
    pub keyword: Option<String>,
    pub city_id: Option<i32>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCompanyImageRequest {
    #[validate(url)]
    pub image_url: String,
}

/// 求职者档案
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i32,
    pub user_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city: Option<i32>,
}

impl ProfileResponse {
    pub fn new(profile: JobSeekerProfile, user: User) -> Self {
        Self {
            id: profile.id,
            user_id: user.id,
            full_name: user.full_name,
            email: user.email,
            phone: profile.phone,
            birthday: profile.birthday,
            gender: profile.gender,
            address: profile.address,
            city: profile.city_id,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    #[validate(length(min = 1, max = 10))]
    pub gender: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,
    pub city: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(url)]
    pub file_url: Option<String>,
}
