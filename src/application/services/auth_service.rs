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

use crate::application::dto::auth_dto::{
    CheckCredsRequest, CheckCredsResponse, RegisterEmployerRequest, RegisterJobSeekerRequest,
    RevokeTokenRequest, SettingsResponse, TokenRequest, TokenResponse, UserInfoResponse,
};
use crate::application::services::{check_location, unique_slug, SLUG_RETRY_LIMIT};
use crate::domain::models::company::NewCompany;
use crate::domain::models::job_post::CompanySummary;
use crate::domain::models::user::{NewUser, RoleName, User};
use crate::domain::repositories::{
    catalog_repository::CatalogRepository, company_repository::CompanyRepository,
    user_repository::UserRepository,
};
use crate::domain::services::{
    password_service::PasswordService,
    token_service::TokenService,
};
use crate::utils::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

const EMAIL_TAKEN: &str = "Email already exists";

/// 认证服务
///
/// 负责注册、凭据检查、令牌签发与用户信息查询
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    companies: Arc<dyn CompanyRepository>,
    catalog: Arc<dyn CatalogRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        companies: Arc<dyn CompanyRepository>,
        catalog: Arc<dyn CatalogRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            companies,
            catalog,
            passwords,
            tokens,
        }
    }

    fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        self.passwords
            .hash(password)
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    /// 注册求职者，用户与求职者档案在同一事务中创建
    pub async fn register_job_seeker(
        &self,
        dto: RegisterJobSeekerRequest,
    ) -> Result<User, ServiceError> {
        dto.validate()?;

        if self.users.email_exists(&dto.email).await? {
            return Err(ServiceError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let new_user = NewUser {
            email: dto.email,
            password_hash: self.hash_password(&dto.password)?,
            full_name: dto.full_name,
            role_name: RoleName::JobSeeker,
        };

        let (user, _profile) = self
            .users
            .create_job_seeker(new_user)
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => {
                    ServiceError::Conflict(EMAIL_TAKEN.to_string())
                }
                other => other.into(),
            })?;

        info!("Registered job seeker {}", user.id);
        Ok(user)
    }

    /// 注册招聘方
    ///
    /// 用户、公司地址与公司在同一事务中创建；公司 slug 冲突时重新生成并重试
    pub async fn register_employer(
        &self,
        dto: RegisterEmployerRequest,
    ) -> Result<User, ServiceError> {
        dto.validate()?;

        if self.users.email_exists(&dto.email).await? {
            return Err(ServiceError::Conflict(EMAIL_TAKEN.to_string()));
        }
        check_location(self.catalog.as_ref(), &dto.company.location).await?;

        let password_hash = self.hash_password(&dto.password)?;
        let company = dto.company;

        for attempt in 1..=SLUG_RETRY_LIMIT {
            let slug = unique_slug(&company.company_name, |candidate| {
                let companies = self.companies.clone();
                async move { companies.slug_exists(&candidate, None).await }
            })
            .await?;

            let new_user = NewUser {
                email: dto.email.clone(),
                password_hash: password_hash.clone(),
                full_name: dto.full_name.clone(),
                role_name: RoleName::Employer,
            };
            let new_company = NewCompany {
                company_name: company.company_name.clone(),
                slug,
                company_email: company.company_email.clone(),
                company_phone: company.company_phone.clone(),
                website_url: company.website_url.clone(),
                tax_code: company.tax_code.clone(),
                since: company.since,
                field_operation: company.field_operation.clone(),
                description: company.description.clone(),
                employee_size: company.employee_size,
            };

            match self
                .users
                .create_employer(new_user, company.location.clone().into(), new_company)
                .await
            {
                Ok((user, company)) => {
                    info!("Registered employer {} with company {}", user.id, company.slug);
                    return Ok(user);
                }
                Err(RepositoryError::UniqueViolation(msg)) => {
                    if self.users.email_exists(&dto.email).await? {
                        return Err(ServiceError::Conflict(EMAIL_TAKEN.to_string()));
                    }
                    warn!(
                        "Company slug collision on attempt {}/{}: {}",
                        attempt, SLUG_RETRY_LIMIT, msg
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::Conflict(
            "Could not allocate a unique company slug".to_string(),
        ))
    }

    /// 检查邮箱状态，从不因用户不存在而失败
    pub async fn check_credentials(
        &self,
        dto: CheckCredsRequest,
    ) -> Result<CheckCredsResponse, ServiceError> {
        dto.validate()?;

        let user = self.users.find_by_email(&dto.email).await?;
        Ok(CheckCredsResponse {
            email: dto.email,
            email_verified: user.as_ref().is_some_and(|u| u.is_verify_email),
            exists: user.is_some(),
        })
    }

    /// 校验邮箱与密码并签发令牌对
    pub async fn get_token(&self, dto: TokenRequest) -> Result<TokenResponse, ServiceError> {
        dto.validate()?;

        let invalid = || ServiceError::NotFound("Invalid email or password".to_string());
        let user = self
            .users
            .find_by_email(&dto.email)
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(invalid)?;

        if !self.passwords.verify(&dto.password, &user.password) {
            return Err(invalid());
        }

        let pair = self
            .tokens
            .issue(&user)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(TokenResponse {
            scope: "read write".to_string(),
            token_type: "Bearer".to_string(),
            backend: "backend".to_string(),
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    /// 校验令牌；不维护吊销列表
    pub fn revoke_token(&self, dto: RevokeTokenRequest) -> Result<(), ServiceError> {
        dto.validate()?;
        self.tokens
            .verify(&dto.token)
            .map(|_| ())
            .map_err(|e| ServiceError::Unauthorized(e.to_string()))
    }

    pub async fn get_user_info(&self, email: &str) -> Result<UserInfoResponse, ServiceError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        let (profile, company) = match user.role_name {
            RoleName::JobSeeker => (self.users.find_profile_by_user(user.id).await?, None),
            RoleName::Employer => (
                None,
                self.companies
                    .find_by_user(user.id)
                    .await?
                    .map(|c| CompanySummary::from(&c.company)),
            ),
        };

        Ok(UserInfoResponse::new(user, profile, company))
    }

    pub fn get_settings(&self) -> SettingsResponse {
        SettingsResponse {
            email_notification_active: true,
            sms_notifications_active: true,
        }
    }
}
