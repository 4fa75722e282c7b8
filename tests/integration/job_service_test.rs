// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    create_test_app, create_test_app_with, job_post_request, register_employer,
    register_job_seeker, test_settings,
};
use chrono::{Duration, Utc};
use jobboard::application::dto::info_dto::CreateResumeRequest;
use jobboard::application::dto::job_post_dto::{
    CreateActivityRequest, CreateNotificationRequest, JobPostQuery, PaginationQuery,
    UpdateJobPostRequest,
};
use jobboard::domain::models::job_post::JobPostStatus;
use jobboard::infrastructure::database::entities::job_post as job_post_entity;
use jobboard::utils::errors::ServiceError;
use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter};

fn page(page: u64, page_size: u64) -> JobPostQuery {
    JobPostQuery {
        page: Some(page),
        page_size: Some(page_size),
        ..Default::default()
    }
}

/// 同名招聘信息的 slug 依次追加递增后缀
#[tokio::test]
async fn test_job_post_slugs_are_unique() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Slug Co").await;
    let jobs = &app.services.jobs;

    let mut slugs = Vec::new();
    for _ in 0..3 {
        let post = jobs
            .create_private_job_post(employer.id, job_post_request("Rust Developer", &app.catalog))
            .await
            .unwrap();
        slugs.push(post.slug);
    }

    assert_eq!(slugs, vec!["rust-developer", "rust-developer-1", "rust-developer-2"]);
}

#[tokio::test]
async fn test_create_job_post_requires_employer_with_company() {
    let app = create_test_app().await;
    let (seeker, _) = register_job_seeker(&app, "seeker@x.com").await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Career Co").await;
    let jobs = &app.services.jobs;

    let err = jobs
        .create_private_job_post(seeker.id, job_post_request("Backend", &app.catalog))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let mut request = job_post_request("Backend", &app.catalog);
    request.career = 9999;
    let err = jobs
        .create_private_job_post(employer.id, request)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let mut request = job_post_request("Backend", &app.catalog);
    request.salary_min = 5000;
    let err = jobs
        .create_private_job_post(employer.id, request)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_new_posts_wait_for_review_without_auto_publish() {
    let mut settings = test_settings();
    settings.job_posts.auto_publish = false;
    let app = create_test_app_with(settings).await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Review Co").await;

    let post = app
        .services
        .jobs
        .create_private_job_post(employer.id, job_post_request("Reviewer", &app.catalog))
        .await
        .unwrap();
    assert_eq!(post.status, JobPostStatus::Pending);

    let listing = app.services.jobs.find_job_posts(JobPostQuery::default()).await.unwrap();
    assert_eq!(listing.count, 0);
}

/// 公开列表只包含已发布且未过期的招聘信息，并遵循分页
#[tokio::test]
async fn test_public_listing_filters_and_paginates() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "List Co").await;
    let jobs = &app.services.jobs;

    for name in ["Alpha", "Beta", "Gamma"] {
        jobs.create_private_job_post(employer.id, job_post_request(name, &app.catalog))
            .await
            .unwrap();
    }

    let pending = jobs
        .create_private_job_post(employer.id, job_post_request("Pending", &app.catalog))
        .await
        .unwrap();
    job_post_entity::Entity::update_many()
        .col_expr(job_post_entity::Column::Status, Expr::value(1))
        .filter(job_post_entity::Column::Id.eq(pending.id))
        .exec(app.db.as_ref())
        .await
        .unwrap();

    let mut expired = job_post_request("Expired", &app.catalog);
    expired.deadline = (Utc::now() - Duration::days(1)).fixed_offset();
    jobs.create_private_job_post(employer.id, expired).await.unwrap();

    let first = jobs.find_job_posts(page(1, 2)).await.unwrap();
    assert_eq!(first.count, 3);
    assert_eq!(first.results.len(), 2);

    let second = jobs.find_job_posts(page(2, 2)).await.unwrap();
    assert_eq!(second.count, 3);
    assert_eq!(second.results.len(), 1);

    let names: Vec<String> = first
        .results
        .iter()
        .chain(second.results.iter())
        .map(|c| c.job_name.clone())
        .collect();
    assert_eq!(names, vec!["Gamma", "Beta", "Alpha"]);

    let card = &first.results[0];
    let company = card.company_dict.as_ref().expect("company summary");
    assert_eq!(company.slug, "list-co");
    assert_eq!(
        card.location_dict.as_ref().map(|l| l.city),
        Some(app.catalog.city_id)
    );

    let keyword = jobs
        .find_job_posts(JobPostQuery {
            keyword: Some("amm".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(keyword.count, 1);
    assert_eq!(keyword.results[0].job_name, "Gamma");

    let other_city = jobs
        .find_job_posts(JobPostQuery {
            city_id: Some(app.catalog.other_city_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(other_city.count, 0);

    let pending_only = jobs
        .find_job_posts(JobPostQuery {
            status_id: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(pending_only.count, 0);
}

/// 关键字中的 LIKE 通配符按字面量匹配
#[tokio::test]
async fn test_keyword_treats_wildcards_literally() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Keyword Co").await;
    let jobs = &app.services.jobs;

    for name in ["Rust Developer", "100% Remote Engineer"] {
        jobs.create_private_job_post(employer.id, job_post_request(name, &app.catalog))
            .await
            .unwrap();
    }

    let count = |keyword: &str| {
        let query = JobPostQuery {
            keyword: Some(keyword.to_string()),
            ..Default::default()
        };
        async move { jobs.find_job_posts(query).await.unwrap().count }
    };

    assert_eq!(count("_").await, 0);
    assert_eq!(count("Rust%").await, 0);
    assert_eq!(count("%").await, 1);
    assert_eq!(count("100%").await, 1);
    assert_eq!(count("Developer").await, 1);
}

/// 超出范围的页码被拒绝而不是溢出
#[tokio::test]
async fn test_listing_rejects_out_of_range_page() {
    let app = create_test_app().await;

    let err = app
        .services
        .jobs
        .find_job_posts(page(u64::MAX, 100))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_listing_orders_by_allow_listed_column() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Order Co").await;
    let jobs = &app.services.jobs;

    for (name, salary) in [("Low", 1000), ("High", 9000), ("Mid", 5000)] {
        let mut request = job_post_request(name, &app.catalog);
        request.salary_min = salary;
        request.salary_max = salary + 1000;
        jobs.create_private_job_post(employer.id, request).await.unwrap();
    }

    let by_salary = jobs
        .find_job_posts(JobPostQuery {
            ordering: Some("salaryMax".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    let names: Vec<&str> = by_salary.results.iter().map(|c| c.job_name.as_str()).collect();
    assert_eq!(names, vec!["High", "Mid", "Low"]);

    let err = jobs
        .find_job_posts(JobPostQuery {
            ordering: Some("password".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = jobs.find_job_posts(page(0, 10)).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

/// 每次访问公开详情浏览量恰好加一
#[tokio::test]
async fn test_public_detail_increments_views() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "View Co").await;
    let (_, seeker_token) = register_job_seeker(&app, "seeker@x.com").await;
    let jobs = &app.services.jobs;

    let post = jobs
        .create_private_job_post(employer.id, job_post_request("Viewed", &app.catalog))
        .await
        .unwrap();
    assert_eq!(post.views, 0);

    let anonymous = jobs.get_public_job_post(&post.slug, None).await.unwrap();
    assert_eq!(anonymous.post.views, 1);
    assert_eq!(anonymous.is_saved, None);

    let invalid = jobs
        .get_public_job_post(&post.slug, Some("not-a-token"))
        .await
        .unwrap();
    assert_eq!(invalid.post.views, 2);
    assert_eq!(invalid.is_saved, None);

    let signed_in = jobs
        .get_public_job_post(&post.slug, Some(&seeker_token))
        .await
        .unwrap();
    assert_eq!(signed_in.post.views, 3);
    assert_eq!(signed_in.is_saved, Some(false));

    let stored = job_post_entity::Entity::find_by_id(post.id)
        .one(app.db.as_ref())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.views, 3);

    let err = jobs.get_public_job_post("missing", None).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

/// 收藏切换：先收藏再取消
#[tokio::test]
async fn test_toggle_saved_job_post() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Save Co").await;
    let (seeker, token) = register_job_seeker(&app, "seeker@x.com").await;
    let jobs = &app.services.jobs;

    let post = jobs
        .create_private_job_post(employer.id, job_post_request("Saved", &app.catalog))
        .await
        .unwrap();

    assert!(jobs.toggle_saved_job_post(&post.slug, seeker.id).await.unwrap().is_saved);

    let saved = jobs
        .find_saved_job_posts(seeker.id, PaginationQuery::default())
        .await
        .unwrap();
    assert_eq!(saved.count, 1);
    assert_eq!(saved.results[0].id, post.id);

    let detail = jobs.get_public_job_post(&post.slug, Some(&token)).await.unwrap();
    assert_eq!(detail.is_saved, Some(true));

    assert!(!jobs.toggle_saved_job_post(&post.slug, seeker.id).await.unwrap().is_saved);
    let saved = jobs
        .find_saved_job_posts(seeker.id, PaginationQuery::default())
        .await
        .unwrap();
    assert_eq!(saved.count, 0);
}

#[tokio::test]
async fn test_update_job_post_regenerates_slug_on_rename() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Update Co").await;
    let (other, _) = register_employer(&app, "other@corp.com", "Other Co").await;
    let jobs = &app.services.jobs;

    let post = jobs
        .create_private_job_post(employer.id, job_post_request("Junior Dev", &app.catalog))
        .await
        .unwrap();

    let unchanged = jobs
        .update_private_job_post(
            post.id,
            employer.id,
            UpdateJobPostRequest {
                quantity: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(unchanged.slug, "junior-dev");
    assert_eq!(unchanged.quantity, 5);

    let renamed = jobs
        .update_private_job_post(
            post.id,
            employer.id,
            UpdateJobPostRequest {
                job_name: Some("Senior Dev".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.slug, "senior-dev");
    assert_eq!(renamed.job_name, "Senior Dev");
    assert_eq!(renamed.quantity, 5);

    let err = jobs
        .update_private_job_post(
            post.id,
            employer.id,
            UpdateJobPostRequest {
                salary_min: Some(999_999),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = jobs
        .update_private_job_post(post.id, other.id, UpdateJobPostRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = jobs.get_private_job_post(post.id, other.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    let own = jobs.get_private_job_post(post.id, employer.id).await.unwrap();
    assert_eq!(own.post.slug, "senior-dev");
}

/// 投递后私有列表的投递数与 CSV 导出
#[tokio::test]
async fn test_activity_counts_and_export() {
    let app = create_test_app().await;
    let (employer, _) = register_employer(&app, "boss@corp.com", "Apply Co").await;
    let (seeker, _) = register_job_seeker(&app, "seeker@x.com").await;
    let (stranger, _) = register_job_seeker(&app, "stranger@x.com").await;
    let jobs = &app.services.jobs;

    let post = jobs
        .create_private_job_post(employer.id, job_post_request("Applied Role", &app.catalog))
        .await
        .unwrap();
    let resume = app
        .services
        .info
        .create_resume(
            seeker.id,
            CreateResumeRequest {
                title: "My CV".to_string(),
                file_url: None,
            },
        )
        .await
        .unwrap();

    let application = |resume_id: i32, job_post: i32| CreateActivityRequest {
        job_post,
        resume: resume_id,
        full_name: "Nguyen Van A".to_string(),
        email: "seeker@x.com".to_string(),
        phone: "0912345678".to_string(),
    };

    let err = jobs
        .create_job_post_activity(stranger.id, application(resume.id, post.id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = jobs
        .create_job_post_activity(seeker.id, application(resume.id, 9999))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let activity = jobs
        .create_job_post_activity(seeker.id, application(resume.id, post.id))
        .await
        .unwrap();
    assert_eq!(activity.job_post, post.id);
    assert_eq!(
        activity.job_post_dict.as_ref().map(|c| c.slug.as_str()),
        Some("applied-role")
    );

    let history = jobs
        .find_job_post_activities(seeker.id, PaginationQuery::default())
        .await
        .unwrap();
    assert_eq!(history.count, 1);

    let private = jobs
        .find_private_job_posts(employer.id, JobPostQuery::default())
        .await
        .unwrap();
    assert_eq!(private.count, 1);
    assert_eq!(private.results[0].applied_number, 1);
    assert_eq!(private.results[0].status, 3);
    assert!(!private.results[0].is_expired);

    let csv = jobs
        .export_private_job_posts(employer.id, JobPostQuery::default())
        .await
        .unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("STT,Job ID,Job Name,Deadline,Posted At,Applications,Views")
    );
    let row = lines.next().expect("one exported row");
    assert!(row.starts_with(&format!("1,{},Applied Role,", post.id)));
    assert!(row.ends_with(",1,0"));
    assert_eq!(lines.next(), None);
}

#[tokio::test]
async fn test_notification_subscriptions() {
    let app = create_test_app().await;
    let (seeker, _) = register_job_seeker(&app, "seeker@x.com").await;
    let (other, _) = register_job_seeker(&app, "other@x.com").await;
    let jobs = &app.services.jobs;

    let request = |city: i32| CreateNotificationRequest {
        job_name: "Rust".to_string(),
        position: None,
        experience: Some(2),
        salary: Some(2000),
        frequency: 7,
        career: app.catalog.career_id,
        city,
    };

    let err = jobs
        .create_job_post_notification(seeker.id, request(9999))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let created = jobs
        .create_job_post_notification(seeker.id, request(app.catalog.city_id))
        .await
        .unwrap();
    assert!(created.is_active);
    assert_eq!(created.city, app.catalog.city_id);

    let toggled = jobs
        .toggle_job_post_notification(created.id, seeker.id)
        .await
        .unwrap();
    assert!(!toggled.is_active);

    let err = jobs
        .toggle_job_post_notification(created.id, other.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let listed = jobs
        .find_job_post_notifications(seeker.id, PaginationQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.count, 1);
    assert!(!listed.results[0].is_active);
}
