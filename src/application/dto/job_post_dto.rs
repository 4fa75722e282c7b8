// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::location_dto::LocationRequest;
use crate::domain::models::job_post::{
    CompanySummary, JobPost, JobPostActivity, JobPostNotification, JobPostView,
    PrivateJobPostRow,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 创建招聘信息请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_salary_range"))]
pub struct CreateJobPostRequest {
    #[validate(length(min = 1, max = 255))]
    pub job_name: String,
    pub deadline: DateTime<FixedOffset>,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(length(min = 1))]
    pub job_description: String,
    #[validate(length(min = 1))]
    pub job_requirement: String,
    #[validate(length(min = 1))]
    pub benefits_enjoyed: String,
    pub position: i32,
    pub type_of_workplace: i32,
    pub experience: i32,
    pub academic_level: i32,
    pub job_type: i32,
    #[validate(range(min = 0))]
    pub salary_min: i64,
    #[validate(range(min = 0))]
    pub salary_max: i64,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default)]
    pub is_hot: bool,
    #[validate(length(min = 1, max = 100))]
    pub contact_person_name: String,
    #[validate(length(min = 1, max = 20))]
    pub contact_person_phone: String,
    #[validate(email)]
    pub contact_person_email: String,
    /// 行业ID
    pub career: i32,
    #[validate(nested)]
    pub location: LocationRequest,
}

fn validate_create_salary_range(req: &CreateJobPostRequest) -> Result<(), ValidationError> {
    check_salary_range(req.salary_min, req.salary_max)
}

pub(crate) fn check_salary_range(min: i64, max: i64) -> Result<(), ValidationError> {
    if min > max {
        let mut err = ValidationError::new("salary_range");
        err.message = Some("salaryMin must not exceed salaryMax".into());
        return Err(err);
    }
    Ok(())
}

/// 更新招聘信息请求，未提供的字段保持不变
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPostRequest {
    #[validate(length(min = 1, max = 255))]
    pub job_name: Option<String>,
    pub deadline: Option<DateTime<FixedOffset>>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    #[validate(length(min = 1))]
    pub job_description: Option<String>,
    #[validate(length(min = 1))]
    pub job_requirement: Option<String>,
    #[validate(length(min = 1))]
    pub benefits_enjoyed: Option<String>,
    pub position: Option<i32>,
    pub type_of_workplace: Option<i32>,
    pub experience: Option<i32>,
    pub academic_level: Option<i32>,
    pub job_type: Option<i32>,
    #[validate(range(min = 0))]
    pub salary_min: Option<i64>,
    #[validate(range(min = 0))]
    pub salary_max: Option<i64>,
    pub is_urgent: Option<bool>,
    pub is_hot: Option<bool>,
    #[validate(length(min = 1, max = 100))]
    pub contact_person_name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub contact_person_phone: Option<String>,
    #[validate(email)]
    pub contact_person_email: Option<String>,
    pub career: Option<i32>,
    #[validate(nested)]
    pub location: Option<LocationRequest>,
}

/// 招聘信息列表查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostQuery {
    pub keyword: Option<String>,
    pub career_id: Option<i32>,
    pub company_id: Option<i32>,
    pub city_id: Option<i32>,
    pub is_urgent: Option<bool>,
    pub status_id: Option<i32>,
    pub ordering: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// 通用分页查询参数
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationDict {
    pub city: i32,
}

/// 公开列表卡片
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostCardResponse {
    pub id: i32,
    pub slug: String,
    pub job_name: String,
    pub deadline: DateTime<FixedOffset>,
    pub salary_min: i64,
    pub salary_max: i64,
    pub is_hot: bool,
    pub is_urgent: bool,
    pub company_dict: Option<CompanySummary>,
    pub location_dict: Option<LocationDict>,
}

impl From<JobPostView> for JobPostCardResponse {
    fn from(view: JobPostView) -> Self {
        let post = view.post;
        Self {
            id: post.id,
            slug: post.slug,
            job_name: post.job_name,
            deadline: post.deadline,
            salary_min: post.salary_min,
            salary_max: post.salary_max,
            is_hot: post.is_hot,
            is_urgent: post.is_urgent,
            company_dict: view.company,
            location_dict: view.location.map(|l| LocationDict { city: l.city_id }),
        }
    }
}

/// 招聘方私有列表行
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateJobPostResponse {
    pub id: i32,
    pub slug: String,
    pub job_name: String,
    pub deadline: DateTime<FixedOffset>,
    pub is_urgent: bool,
    pub status: i32,
    pub create_at: DateTime<FixedOffset>,
    pub applied_number: i64,
    pub views: i32,
    pub is_expired: bool,
}

impl PrivateJobPostResponse {
    pub fn from_row(row: PrivateJobPostRow, now: DateTime<FixedOffset>) -> Self {
        let is_expired = row.post.is_expired(now);
        let post = row.post;
        Self {
            id: post.id,
            slug: post.slug,
            job_name: post.job_name,
            deadline: post.deadline,
            is_urgent: post.is_urgent,
            status: post.status.into(),
            create_at: post.created_at,
            applied_number: row.applied_number,
            views: post.views,
            is_expired,
        }
    }
}

/// CSV 导出表头
pub const EXPORT_HEADERS: [&str; 7] = [
    "STT",
    "Job ID",
    "Job Name",
    "Deadline",
    "Posted At",
    "Applications",
    "Views",
];

/// CSV 导出行，字段顺序与 `EXPORT_HEADERS` 一致
#[derive(Debug, Clone, Serialize)]
pub struct JobPostExportRow {
    pub index: usize,
    pub id: i32,
    pub job_name: String,
    pub deadline: String,
    pub posted_at: String,
    pub applied_number: i64,
    pub views: i32,
}

impl JobPostExportRow {
    pub fn new(index: usize, row: &PrivateJobPostRow) -> Self {
        Self {
            index,
            id: row.post.id,
            job_name: row.post.job_name.clone(),
            deadline: row.post.deadline.format("%Y-%m-%d").to_string(),
            posted_at: row.post.created_at.format("%Y-%m-%d").to_string(),
            applied_number: row.applied_number,
            views: row.post.views,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetail {
    pub city: i32,
    pub city_name: Option<String>,
    pub district: i32,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// 招聘信息详情
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPostDetailResponse {
    #[serde(flatten)]
    pub post: JobPost,
    /// 匿名访问时为 null
    pub is_saved: Option<bool>,
    pub company_dict: Option<CompanySummary>,
    pub location_dict: Option<LocationDetail>,
}

impl JobPostDetailResponse {
    pub fn new(view: JobPostView, is_saved: Option<bool>) -> Self {
        let city_name = view.city_name;
        Self {
            post: view.post,
            is_saved,
            company_dict: view.company,
            location_dict: view.location.map(|l| LocationDetail {
                city: l.city_id,
                city_name,
                district: l.district_id,
                address: l.address,
                lat: l.lat,
                lng: l.lng,
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJobPostResponse {
    pub is_saved: bool,
}

/// 投递请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    #[serde(alias = "job_post")]
    pub job_post: i32,
    pub resume: i32,
    #[validate(length(min = 1, max = 100))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 20))]
    pub phone: String,
}

/// 投递记录
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub id: i32,
    pub job_post: i32,
    pub job_post_dict: Option<JobPostCardResponse>,
    pub resume: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub create_at: DateTime<FixedOffset>,
}

impl ActivityResponse {
    pub fn new(activity: JobPostActivity, job_post: Option<JobPostCardResponse>) -> Self {
        Self {
            id: activity.id,
            job_post: activity.job_post_id,
            job_post_dict: job_post,
            resume: activity.resume_id,
            full_name: activity.full_name,
            email: activity.email,
            phone: activity.phone,
            create_at: activity.created_at,
        }
    }
}

/// 职位订阅请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, max = 255))]
    pub job_name: String,
    pub position: Option<i32>,
    pub experience: Option<i32>,
    #[validate(range(min = 0))]
    pub salary: Option<i64>,
    #[validate(range(min = 1, max = 30))]
    pub frequency: i32,
    pub career: i32,
    pub city: i32,
}

/// 职位订阅
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: i32,
    pub job_name: String,
    pub position: Option<i32>,
    pub experience: Option<i32>,
    pub salary: Option<i64>,
    pub frequency: i32,
    pub career: i32,
    pub city: i32,
    pub is_active: bool,
}

impl From<JobPostNotification> for NotificationResponse {
    fn from(n: JobPostNotification) -> Self {
        Self {
            id: n.id,
            job_name: n.job_name,
            position: n.position,
            experience: n.experience,
            salary: n.salary,
            frequency: n.frequency,
            career: n.career_id,
            city: n.city_id,
            is_active: n.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_request_json() -> serde_json::Value {
        json!({
            "jobName": "Rust Engineer",
            "deadline": "2030-01-01T00:00:00Z",
            "quantity": 2,
            "jobDescription": "Build services",
            "jobRequirement": "Rust",
            "benefitsEnjoyed": "Remote",
            "position": 1,
            "typeOfWorkplace": 1,
            "experience": 2,
            "academicLevel": 1,
            "jobType": 1,
            "salaryMin": 1000,
            "salaryMax": 2000,
            "contactPersonName": "Alice",
            "contactPersonPhone": "0123456789",
            "contactPersonEmail": "alice@example.com",
            "career": 1,
            "location": {"city": 1, "district": 1, "address": "1 Main St"}
        })
    }

    #[test]
    fn test_create_request_validates() {
        let req: CreateJobPostRequest = serde_json::from_value(create_request_json()).unwrap();
        assert!(req.validate().is_ok());
        assert!(!req.is_urgent);
    }

    #[test]
    fn test_create_request_rejects_inverted_salary() {
        let mut value = create_request_json();
        value["salaryMin"] = json!(5000);
        let req: CreateJobPostRequest = serde_json::from_value(value).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_activity_request_accepts_snake_case_job_post() {
        let req: CreateActivityRequest = serde_json::from_value(json!({
            "job_post": 7,
            "resume": 3,
            "fullName": "Bob",
            "email": "bob@example.com",
            "phone": "0987654321"
        }))
        .unwrap();
        assert_eq!(req.job_post, 7);
    }
}
