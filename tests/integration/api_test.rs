// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::helpers::{create_test_app, register_employer, register_job_seeker, TEST_PASSWORD};
use axum::http::StatusCode;
use serde_json::{json, Value};

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

fn job_post_body(job_name: &str, city: i32, district: i32, career: i32) -> Value {
    json!({
        "jobName": job_name,
        "deadline": "2099-12-31T00:00:00Z",
        "quantity": 1,
        "jobDescription": "Own the public API",
        "jobRequirement": "Rust and SQL",
        "benefitsEnjoyed": "Learning budget",
        "position": 2,
        "typeOfWorkplace": 1,
        "experience": 2,
        "academicLevel": 1,
        "jobType": 1,
        "salaryMin": 2000,
        "salaryMax": 4000,
        "isUrgent": true,
        "contactPersonName": "Tran Thi B",
        "contactPersonPhone": "0241234567",
        "contactPersonEmail": "hr@example.com",
        "career": career,
        "location": {"city": city, "district": district, "address": "1 Tràng Tiền"}
    })
}

/// 健康检查测试
#[tokio::test]
async fn test_health_and_version() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");

    let response = app.server.get("/version").await;
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = create_test_app().await;

    let response = app.server.get("/auth/user-info").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert!(body["error"].is_string());

    let response = app
        .server
        .get("/job/employer/job-posts")
        .add_header("Authorization", bearer("forged.token.value"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

/// 注册、登录与用户信息的完整流程
#[tokio::test]
async fn test_register_login_and_user_info_flow() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/job-seeker/register")
        .json(&json!({
            "fullName": "Nguyen Van A",
            "email": "a@x.com",
            "password": TEST_PASSWORD
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["errors"], json!({}));
    assert_eq!(body["data"]["email"], "a@x.com");
    assert_eq!(body["data"]["roleName"], "JOB_SEEKER");
    assert!(body["data"].get("password").is_none());

    let response = app
        .server
        .post("/auth/job-seeker/register")
        .json(&json!({
            "fullName": "Nguyen Van A",
            "email": "a@x.com",
            "password": TEST_PASSWORD
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = app
        .server
        .post("/auth/check-creds")
        .json(&json!({"email": "a@x.com"}))
        .await;
    let body: Value = response.json();
    assert_eq!(
        body["data"],
        json!({"email": "a@x.com", "email_verified": false, "exists": true})
    );

    let response = app
        .server
        .post("/auth/token")
        .json(&json!({"email": "a@x.com", "password": "wrong-password"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app
        .server
        .post("/auth/token")
        .json(&json!({"email": "a@x.com", "password": TEST_PASSWORD}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["token_type"], "Bearer");
    let token = body["data"]["access_token"].as_str().unwrap().to_string();

    let response = app
        .server
        .get("/auth/user-info")
        .add_header("Authorization", bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["fullName"], "Nguyen Van A");
    assert!(body["data"]["jobSeekerProfileId"].is_number());
    assert!(body["data"]["companyId"].is_null());

    let response = app
        .server
        .get("/auth/settings")
        .add_header("Authorization", bearer(&token))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["emailNotificationActive"], true);
}

#[tokio::test]
async fn test_employer_job_post_lifecycle_over_http() {
    let app = create_test_app().await;
    let (_, employer_token) = register_employer(&app, "boss@corp.com", "Http Co").await;
    let (_, seeker_token) = register_job_seeker(&app, "seeker@x.com").await;
    let catalog = app.catalog;

    let response = app
        .server
        .post("/job/employer/job-posts")
        .add_header("Authorization", bearer(&employer_token))
        .json(&job_post_body(
            "Platform Engineer",
            catalog.city_id,
            catalog.district_id,
            catalog.career_id,
        ))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["slug"], "platform-engineer");
    assert_eq!(body["data"]["status"], 3);

    let response = app.server.get("/job/web/job-posts").await;
    let body: Value = response.json();
    assert_eq!(body["data"]["count"], 1);
    let card = &body["data"]["results"][0];
    assert_eq!(card["jobName"], "Platform Engineer");
    assert_eq!(card["isUrgent"], true);
    assert_eq!(card["companyDict"]["companyName"], "Http Co");
    assert_eq!(card["locationDict"]["city"], catalog.city_id);

    let response = app
        .server
        .get("/job/web/job-posts")
        .add_query_param("ordering", "secret_column")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .get("/job/web/job-posts/platform-engineer")
        .add_header("Authorization", bearer("expired-or-forged"))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["data"]["isSaved"].is_null());
    assert_eq!(body["data"]["views"], 1);

    let response = app
        .server
        .post("/job/web/job-posts/platform-engineer/save")
        .add_header("Authorization", bearer(&seeker_token))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["isSaved"], true);

    let response = app
        .server
        .get("/job/web/job-posts/platform-engineer")
        .add_header("Authorization", bearer(&seeker_token))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["isSaved"], true);
    assert_eq!(body["data"]["views"], 2);

    let response = app
        .server
        .put(&format!("/job/employer/job-posts/{}", id))
        .add_header("Authorization", bearer(&employer_token))
        .json(&json!({"jobName": "Staff Platform Engineer"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["slug"], "staff-platform-engineer");

    let response = app
        .server
        .get(&format!("/job/employer/job-posts/{}", id))
        .add_header("Authorization", bearer(&seeker_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app
        .server
        .get("/job/employer/job-posts")
        .add_header("Authorization", bearer(&employer_token))
        .await;
    let body: Value = response.json();
    let row = &body["data"]["results"][0];
    assert_eq!(row["appliedNumber"], 0);
    assert_eq!(row["views"], 2);
    assert_eq!(row["isExpired"], false);

    let response = app
        .server
        .get("/job/employer/job-posts/export")
        .add_header("Authorization", bearer(&employer_token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/csv"));
    assert!(response.text().starts_with("STT,Job ID,Job Name"));
}

#[tokio::test]
async fn test_catalog_and_company_routes() {
    let app = create_test_app().await;
    register_employer(&app, "boss@corp.com", "Public Co").await;

    let response = app.server.get("/common/cities").await;
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));

    let response = app
        .server
        .get(&format!("/common/cities/{}/districts", app.catalog.city_id))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"][0]["name"], "Ba Đình");

    let response = app.server.get("/info/web/companies/public-co").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["companyName"], "Public Co");

    let response = app.server.get("/info/web/companies/nobody").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Company not found");
}
