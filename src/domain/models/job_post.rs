// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use super::company::{Company, Location};

/// 招聘信息审核状态
///
/// 持久化为整数：1 待审核、2 已拒绝、3 已发布
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum JobPostStatus {
    Pending,
    Rejected,
    Published,
}

impl From<JobPostStatus> for i32 {
    fn from(status: JobPostStatus) -> Self {
        match status {
            JobPostStatus::Pending => 1,
            JobPostStatus::Rejected => 2,
            JobPostStatus::Published => 3,
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown job post status: {0}")]
pub struct UnknownStatusError(pub i32);

impl TryFrom<i32> for JobPostStatus {
    type Error = UnknownStatusError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(JobPostStatus::Pending),
            2 => Ok(JobPostStatus::Rejected),
            3 => Ok(JobPostStatus::Published),
            other => Err(UnknownStatusError(other)),
        }
    }
}

/// 招聘信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPost {
    pub id: i32,
    pub job_name: String,
    pub slug: String,
    pub deadline: DateTime<FixedOffset>,
    pub quantity: i32,
    pub job_description: String,
    pub job_requirement: String,
    pub benefits_enjoyed: String,
    pub position: i32,
    pub type_of_workplace: i32,
    pub experience: i32,
    pub academic_level: i32,
    pub job_type: i32,
    pub salary_min: i64,
    pub salary_max: i64,
    pub is_urgent: bool,
    pub is_hot: bool,
    pub contact_person_name: String,
    pub contact_person_phone: String,
    pub contact_person_email: String,
    pub views: i32,
    pub status: JobPostStatus,
    pub career_id: i32,
    pub location_id: i32,
    pub company_id: i32,
    pub user_id: Uuid,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl JobPost {
    /// 截止时间早于 `now` 即视为过期
    pub fn is_expired(&self, now: DateTime<FixedOffset>) -> bool {
        self.deadline < now
    }
}

/// 待创建的招聘信息，`location_id` 在事务内补齐
#[derive(Debug, Clone)]
pub struct NewJobPost {
    pub job_name: String,
    pub slug: String,
    pub deadline: DateTime<FixedOffset>,
    pub quantity: i32,
    pub job_description: String,
    pub job_requirement: String,
    pub benefits_enjoyed: String,
    pub position: i32,
    pub type_of_workplace: i32,
    pub experience: i32,
    pub academic_level: i32,
    pub job_type: i32,
    pub salary_min: i64,
    pub salary_max: i64,
    pub is_urgent: bool,
    pub is_hot: bool,
    pub contact_person_name: String,
    pub contact_person_phone: String,
    pub contact_person_email: String,
    pub status: JobPostStatus,
    pub career_id: i32,
    pub company_id: i32,
    pub user_id: Uuid,
}

/// 列表卡片中的公司摘要
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: i32,
    pub slug: String,
    pub company_name: String,
    pub employee_size: i32,
    pub company_image_url: String,
}

impl From<&Company> for CompanySummary {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            slug: company.slug.clone(),
            company_name: company.company_name.clone(),
            employee_size: company.employee_size,
            company_image_url: company.company_image_url.clone(),
        }
    }
}

/// 招聘信息及其关联的公司、地址与城市名
#[derive(Debug, Clone)]
pub struct JobPostView {
    pub post: JobPost,
    pub company: Option<CompanySummary>,
    pub location: Option<Location>,
    pub city_name: Option<String>,
}

/// 招聘方私有列表行
#[derive(Debug, Clone)]
pub struct PrivateJobPostRow {
    pub post: JobPost,
    /// 投递数量
    pub applied_number: i64,
}

/// 排序列白名单
///
/// 只允许这些列出现在 ORDER BY 中，统一按降序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobPostOrdering {
    #[default]
    CreatedAt,
    UpdatedAt,
    Deadline,
    Views,
    SalaryMin,
    SalaryMax,
    JobName,
    Id,
}

#[derive(Debug, Error)]
#[error("Unsupported ordering: {0}")]
pub struct UnknownOrderingError(pub String);

impl FromStr for JobPostOrdering {
    type Err = UnknownOrderingError;

    /// 同时接受 camelCase 与 snake_case，忽略前导 `-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('-');
        match name {
            "createdAt" | "created_at" | "createAt" => Ok(JobPostOrdering::CreatedAt),
            "updatedAt" | "updated_at" => Ok(JobPostOrdering::UpdatedAt),
            "deadline" => Ok(JobPostOrdering::Deadline),
            "views" => Ok(JobPostOrdering::Views),
            "salaryMin" | "salary_min" => Ok(JobPostOrdering::SalaryMin),
            "salaryMax" | "salary_max" => Ok(JobPostOrdering::SalaryMax),
            "jobName" | "job_name" => Ok(JobPostOrdering::JobName),
            "id" => Ok(JobPostOrdering::Id),
            _ => Err(UnknownOrderingError(s.to_string())),
        }
    }
}

impl fmt::Display for JobPostOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JobPostOrdering::CreatedAt => "createdAt",
            JobPostOrdering::UpdatedAt => "updatedAt",
            JobPostOrdering::Deadline => "deadline",
            JobPostOrdering::Views => "views",
            JobPostOrdering::SalaryMin => "salaryMin",
            JobPostOrdering::SalaryMax => "salaryMax",
            JobPostOrdering::JobName => "jobName",
            JobPostOrdering::Id => "id",
        };
        f.write_str(name)
    }
}

/// 招聘信息过滤条件
#[derive(Debug, Clone, Default)]
pub struct JobPostFilter {
    /// 职位名称子串匹配，空串视为未提供
    pub keyword: Option<String>,
    pub career_id: Option<i32>,
    pub company_id: Option<i32>,
    pub city_id: Option<i32>,
    pub is_urgent: Option<bool>,
    pub status: Option<JobPostStatus>,
    pub ordering: JobPostOrdering,
}

/// 职位投递记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostActivity {
    pub id: i32,
    pub user_id: Uuid,
    pub job_post_id: i32,
    pub resume_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone)]
pub struct NewJobPostActivity {
    pub user_id: Uuid,
    pub job_post_id: i32,
    pub resume_id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// 职位订阅通知
///
/// 仅存储订阅条件，不负责推送
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostNotification {
    pub id: i32,
    pub user_id: Uuid,
    pub job_name: String,
    pub position: Option<i32>,
    pub experience: Option<i32>,
    pub salary: Option<i64>,
    pub frequency: i32,
    pub career_id: i32,
    pub city_id: i32,
    pub is_active: bool,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Debug, Clone)]
pub struct NewJobPostNotification {
    pub user_id: Uuid,
    pub job_name: String,
    pub position: Option<i32>,
    pub experience: Option<i32>,
    pub salary: Option<i64>,
    pub frequency: i32,
    pub career_id: i32,
    pub city_id: i32,
}
