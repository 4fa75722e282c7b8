// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use chrono::{Duration, Utc};
use jobboard::application::container::AppServices;
use jobboard::application::dto::auth_dto::{
    EmployerCompanyRequest, RegisterEmployerRequest, RegisterJobSeekerRequest, TokenRequest,
};
use jobboard::application::dto::job_post_dto::CreateJobPostRequest;
use jobboard::application::dto::location_dto::LocationRequest;
use jobboard::config::settings::{
    DatabaseSettings, JobPostSettings, JwtSettings, PaginationSettings, PasswordSettings,
    ServerSettings, Settings,
};
use jobboard::domain::models::user::User;
use jobboard::domain::repositories::catalog_repository::CatalogRepository;
use jobboard::infrastructure::database::connection;
use jobboard::infrastructure::repositories::catalog_repo_impl::CatalogRepositoryImpl;
use jobboard::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// 预置的目录数据
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub city_id: i32,
    pub district_id: i32,
    pub other_city_id: i32,
    pub other_district_id: i32,
    pub career_id: i32,
}

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub services: AppServices,
    pub catalog: Catalog,
}

pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: None,
            min_connections: None,
            connect_timeout: None,
            idle_timeout: None,
            run_migrations: true,
        },
        jwt: JwtSettings {
            secret: "integration-test-secret".to_string(),
            access_token_ttl_secs: None,
            refresh_token_ttl_secs: 7 * 24 * 60 * 60,
        },
        password: PasswordSettings {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        },
        pagination: PaginationSettings::default(),
        job_posts: JobPostSettings { auto_publish: true },
    }
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(test_settings()).await
}

pub async fn create_test_app_with(settings: Settings) -> TestApp {
    let db = Arc::new(
        connection::create_pool(&settings.database)
            .await
            .expect("Failed to connect to in-memory SQLite"),
    );
    Migrator::up(db.as_ref(), None)
        .await
        .expect("Failed to run migrations");

    let catalog = seed_catalog(db.clone()).await;
    let services = AppServices::build(db.clone(), &settings).expect("Failed to build services");
    let server = TestServer::new(routes::routes(services.clone())).expect("Failed to start server");

    TestApp {
        server,
        db,
        services,
        catalog,
    }
}

async fn seed_catalog(db: Arc<DatabaseConnection>) -> Catalog {
    let repo = CatalogRepositoryImpl::new(db);

    let city = repo.create_city("Hà Nội").await.unwrap();
    let district = repo.create_district(city.id, "Ba Đình").await.unwrap();
    let other_city = repo.create_city("Hồ Chí Minh").await.unwrap();
    let other_district = repo.create_district(other_city.id, "Quận 1").await.unwrap();
    let career = repo.create_career("Software Engineering").await.unwrap();

    Catalog {
        city_id: city.id,
        district_id: district.id,
        other_city_id: other_city.id,
        other_district_id: other_district.id,
        career_id: career.id,
    }
}

pub fn location_request(catalog: &Catalog) -> LocationRequest {
    LocationRequest {
        city: catalog.city_id,
        district: catalog.district_id,
        address: "1 Tràng Tiền".to_string(),
        lat: Some(21.0245),
        lng: Some(105.8412),
    }
}

pub fn job_seeker_request(email: &str) -> RegisterJobSeekerRequest {
    RegisterJobSeekerRequest {
        full_name: "Nguyen Van A".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

pub fn employer_request(
    email: &str,
    company_name: &str,
    catalog: &Catalog,
) -> RegisterEmployerRequest {
    RegisterEmployerRequest {
        full_name: "Tran Thi B".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        company: EmployerCompanyRequest {
            company_name: company_name.to_string(),
            company_email: "hr@company.example.com".to_string(),
            company_phone: "0241234567".to_string(),
            website_url: Some("https://example.com".to_string()),
            tax_code: "0101234567".to_string(),
            since: None,
            field_operation: "Software".to_string(),
            description: None,
            employee_size: 50,
            location: location_request(catalog),
        },
    }
}

pub fn job_post_request(job_name: &str, catalog: &Catalog) -> CreateJobPostRequest {
    CreateJobPostRequest {
        job_name: job_name.to_string(),
        deadline: (Utc::now() + Duration::days(30)).fixed_offset(),
        quantity: 2,
        job_description: "Build and operate backend services".to_string(),
        job_requirement: "Three years of Rust".to_string(),
        benefits_enjoyed: "Remote friendly".to_string(),
        position: 1,
        type_of_workplace: 1,
        experience: 3,
        academic_level: 1,
        job_type: 1,
        salary_min: 1000,
        salary_max: 3000,
        is_urgent: false,
        is_hot: false,
        contact_person_name: "Tran Thi B".to_string(),
        contact_person_phone: "0241234567".to_string(),
        contact_person_email: "hr@example.com".to_string(),
        career: catalog.career_id,
        location: location_request(catalog),
    }
}

/// 注册招聘方并返回用户与访问令牌
pub async fn register_employer(app: &TestApp, email: &str, company_name: &str) -> (User, String) {
    let user = app
        .services
        .auth
        .register_employer(employer_request(email, company_name, &app.catalog))
        .await
        .unwrap();
    let token = access_token(app, email).await;
    (user, token)
}

/// 注册求职者并返回用户与访问令牌
pub async fn register_job_seeker(app: &TestApp, email: &str) -> (User, String) {
    let user = app
        .services
        .auth
        .register_job_seeker(job_seeker_request(email))
        .await
        .unwrap();
    let token = access_token(app, email).await;
    (user, token)
}

pub async fn access_token(app: &TestApp, email: &str) -> String {
    app.services
        .auth
        .get_token(TokenRequest {
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap()
        .access_token
}
