// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::location_dto::LocationRequest;
use crate::domain::models::job_post::CompanySummary;
use crate::domain::models::user::{JobSeekerProfile, RoleName, User};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 求职者注册请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterJobSeekerRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// 招聘方注册时提交的公司信息
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployerCompanyRequest {
    #[validate(length(min = 1, max = 255))]
    pub company_name: String,
    #[validate(email)]
    pub company_email: String,
    #[validate(length(min = 1, max = 20))]
    pub company_phone: String,
    #[validate(url)]
    pub website_url: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub tax_code: String,
    pub since: Option<NaiveDate>,
    #[validate(length(min = 1, max = 255))]
    pub field_operation: String,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub employee_size: i32,
    #[validate(nested)]
    pub location: LocationRequest,
}

/// 招聘方注册请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterEmployerRequest {
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    #[validate(nested)]
    pub company: EmployerCompanyRequest,
}

/// 账号检查请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CheckCredsRequest {
    #[validate(email)]
    pub email: String,
}

/// 账号检查结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckCredsResponse {
    pub email: String,
    pub email_verified: bool,
    pub exists: bool,
}

/// 获取令牌请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct TokenRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// 令牌响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub scope: String,
    pub token_type: String,
    pub backend: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// 撤销令牌请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RevokeTokenRequest {
    #[validate(length(min = 1))]
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileBrief {
    pub id: i32,
    pub phone: Option<String>,
}

/// 当前用户信息
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub is_active: bool,
    pub is_verify_email: bool,
    pub avatar_url: Option<String>,
    pub role_name: RoleName,
    pub job_seeker_profile_id: Option<i32>,
    pub job_seeker_profile: Option<ProfileBrief>,
    pub company_id: Option<i32>,
    pub company: Option<CompanySummary>,
}

impl UserInfoResponse {
    pub fn new(
        user: User,
        profile: Option<JobSeekerProfile>,
        company: Option<CompanySummary>,
    ) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            is_active: user.is_active,
            is_verify_email: user.is_verify_email,
            avatar_url: user.avatar_url,
            role_name: user.role_name,
            job_seeker_profile_id: profile.as_ref().map(|p| p.id),
            job_seeker_profile: profile.map(|p| ProfileBrief {
                id: p.id,
                phone: p.phone,
            }),
            company_id: company.as_ref().map(|c| c.id),
            company,
        }
    }
}

/// 通知设置
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub email_notification_active: bool,
    pub sms_notifications_active: bool,
}
