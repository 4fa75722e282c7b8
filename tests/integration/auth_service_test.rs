// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{
    create_test_app, employer_request, job_seeker_request, register_employer, TEST_PASSWORD,
};
use jobboard::application::dto::auth_dto::{
    CheckCredsRequest, CheckCredsResponse, RevokeTokenRequest, TokenRequest,
};
use jobboard::domain::models::user::RoleName;
use jobboard::infrastructure::database::entities::user as user_entity;
use jobboard::utils::errors::{RepositoryError, ServiceError};
use sea_orm::{sea_query::Expr, ColumnTrait, EntityTrait, QueryFilter};

/// 重复注册同一邮箱返回冲突
#[tokio::test]
async fn test_register_job_seeker_rejects_duplicate_email() {
    let app = create_test_app().await;
    let auth = &app.services.auth;

    let user = auth
        .register_job_seeker(job_seeker_request("a@x.com"))
        .await
        .unwrap();
    assert_eq!(user.role_name, RoleName::JobSeeker);
    assert!(user.is_active);
    assert!(!user.is_verify_email);
    assert_ne!(user.password, TEST_PASSWORD);

    let err = auth
        .register_job_seeker(job_seeker_request("a@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)));
}

#[tokio::test]
async fn test_register_rejects_invalid_payload() {
    let app = create_test_app().await;

    let mut request = job_seeker_request("not-an-email");
    request.password = "short".to_string();
    let err = app
        .services
        .auth
        .register_job_seeker(request)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
}

#[tokio::test]
async fn test_check_credentials_truth_table() {
    let app = create_test_app().await;
    let auth = &app.services.auth;
    let check = |email: &str| CheckCredsRequest {
        email: email.to_string(),
    };

    let unknown = auth.check_credentials(check("ghost@x.com")).await.unwrap();
    assert_eq!(
        unknown,
        CheckCredsResponse {
            email: "ghost@x.com".to_string(),
            email_verified: false,
            exists: false,
        }
    );

    auth.register_job_seeker(job_seeker_request("seeker@x.com"))
        .await
        .unwrap();
    let unverified = auth.check_credentials(check("seeker@x.com")).await.unwrap();
    assert!(unverified.exists);
    assert!(!unverified.email_verified);

    user_entity::Entity::update_many()
        .col_expr(user_entity::Column::IsVerifyEmail, Expr::value(true))
        .filter(user_entity::Column::Email.eq("seeker@x.com"))
        .exec(app.db.as_ref())
        .await
        .unwrap();
    let verified = auth.check_credentials(check("seeker@x.com")).await.unwrap();
    assert!(verified.exists);
    assert!(verified.email_verified);
}

/// 正确凭据签发的令牌携带 id、角色与邮箱
#[tokio::test]
async fn test_get_token_embeds_identity() {
    let app = create_test_app().await;
    let auth = &app.services.auth;
    let user = auth
        .register_job_seeker(job_seeker_request("seeker@x.com"))
        .await
        .unwrap();

    let response = auth
        .get_token(TokenRequest {
            email: "seeker@x.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.token_type, "Bearer");
    assert_eq!(response.scope, "read write");
    assert_eq!(response.backend, "backend");

    let claims = app.services.tokens.verify(&response.access_token).unwrap();
    assert_eq!(claims.id, user.id);
    assert_eq!(claims.role_name, RoleName::JobSeeker);
    assert_eq!(claims.email, "seeker@x.com");

    let refresh = app.services.tokens.verify(&response.refresh_token).unwrap();
    assert!(refresh.exp.is_some());

    let err = auth
        .get_token(TokenRequest {
            email: "seeker@x.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = auth
        .get_token(TokenRequest {
            email: "nobody@x.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn test_register_employer_creates_company_with_unique_slug() {
    let app = create_test_app().await;

    let (first, _) = register_employer(&app, "one@corp.com", "Acme Software").await;
    let (second, _) = register_employer(&app, "two@corp.com", "Acme Software").await;
    assert_eq!(first.role_name, RoleName::Employer);

    let first_info = app.services.auth.get_user_info("one@corp.com").await.unwrap();
    let second_info = app.services.auth.get_user_info("two@corp.com").await.unwrap();

    let first_company = first_info.company.expect("employer has a company");
    let second_company = second_info.company.expect("employer has a company");
    assert_eq!(first_company.slug, "acme-software");
    assert_eq!(second_company.slug, "acme-software-1");
    assert_eq!(first_info.company_id, Some(first_company.id));
    assert!(first_info.job_seeker_profile.is_none());
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_register_employer_validates_location() {
    let app = create_test_app().await;

    let mut request = employer_request("boss@corp.com", "Mismatch Ltd", &app.catalog);
    request.company.location.district = app.catalog.other_district_id;
    let err = app
        .services
        .auth
        .register_employer(request)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let mut request = employer_request("boss@corp.com", "Missing City Ltd", &app.catalog);
    request.company.location.city = 9999;
    let err = app
        .services
        .auth
        .register_employer(request)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // 校验失败不应留下用户
    let creds = app
        .services
        .auth
        .check_credentials(CheckCredsRequest {
            email: "boss@corp.com".to_string(),
        })
        .await
        .unwrap();
    assert!(!creds.exists);
}

#[tokio::test]
async fn test_user_info_for_job_seeker_carries_profile() {
    let app = create_test_app().await;
    app.services
        .auth
        .register_job_seeker(job_seeker_request("seeker@x.com"))
        .await
        .unwrap();

    let info = app.services.auth.get_user_info("seeker@x.com").await.unwrap();
    assert_eq!(info.role_name, RoleName::JobSeeker);
    assert!(info.job_seeker_profile_id.is_some());
    assert_eq!(
        info.job_seeker_profile.as_ref().map(|p| p.id),
        info.job_seeker_profile_id
    );
    assert!(info.company_id.is_none());
    assert!(info.company.is_none());

    let err = app
        .services
        .auth
        .get_user_info("ghost@x.com")
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn test_revoke_token_requires_valid_token() {
    let app = create_test_app().await;
    let (_, token) = register_employer(&app, "boss@corp.com", "Revoke Co").await;

    assert!(app
        .services
        .auth
        .revoke_token(RevokeTokenRequest { token })
        .is_ok());

    let err = app
        .services
        .auth
        .revoke_token(RevokeTokenRequest {
            token: "garbage".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized(_)));
}

/// 存储中无法识别的角色返回错误而不是被改写
#[tokio::test]
async fn test_unknown_stored_role_is_reported() {
    let app = create_test_app().await;
    let auth = &app.services.auth;
    auth.register_job_seeker(job_seeker_request("seeker@x.com"))
        .await
        .unwrap();

    user_entity::Entity::update_many()
        .col_expr(user_entity::Column::RoleName, Expr::value("ADMIN"))
        .filter(user_entity::Column::Email.eq("seeker@x.com"))
        .exec(app.db.as_ref())
        .await
        .unwrap();

    let err = auth
        .get_token(TokenRequest {
            email: "seeker@x.com".to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Repository(RepositoryError::InvalidData(_))
    ));
}
