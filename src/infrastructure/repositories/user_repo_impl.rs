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

use crate::domain::models::company::{
    Company, NewCompany, NewLocation, DEFAULT_COMPANY_COVER_IMAGE_URL, DEFAULT_COMPANY_IMAGE_URL,
};
use crate::domain::models::user::{JobSeekerProfile, NewUser, RoleName, User};
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::{
    company as company_entity, job_seeker_profile as profile_entity,
    location as location_entity, user as user_entity,
};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// 用户仓库实现
///
/// 基于SeaORM实现的用户与求职者档案数据访问层
#[derive(Clone)]
pub struct UserRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的用户仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<user_entity::Model> for User {
    type Error = RepositoryError;

    fn try_from(model: user_entity::Model) -> Result<Self, Self::Error> {
        let role_name = model.role_name.parse::<RoleName>().map_err(|e| {
            warn!("User {} has an unrecognised role: {}", model.id, e);
            RepositoryError::InvalidData(format!("user {}: {}", model.id, e))
        })?;

        Ok(Self {
            id: model.id,
            email: model.email,
            password: model.password,
            full_name: model.full_name,
            role_name,
            is_active: model.is_active,
            is_verify_email: model.is_verify_email,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl From<profile_entity::Model> for JobSeekerProfile {
    fn from(model: profile_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            phone: model.phone,
            birthday: model.birthday,
            gender: model.gender,
            address: model.address,
            city_id: model.city_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

fn new_user_model(user: NewUser) -> user_entity::ActiveModel {
    let now = Utc::now().fixed_offset();
    user_entity::ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(user.email),
        password: Set(user.password_hash),
        full_name: Set(user.full_name),
        role_name: Set(user.role_name.to_string()),
        is_active: Set(true),
        is_verify_email: Set(false),
        avatar_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        model.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find()
            .filter(user_entity::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await?;

        model.map(User::try_from).transpose()
    }

    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let count = user_entity::Entity::find()
            .filter(user_entity::Column::Email.eq(email))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn create_job_seeker(
        &self,
        user: NewUser,
    ) -> Result<(User, JobSeekerProfile), RepositoryError> {
        let txn = self.db.begin().await?;

        let user = new_user_model(user).insert(&txn).await?;

        let now = Utc::now().fixed_offset();
        let profile = profile_entity::ActiveModel {
            user_id: Set(user.id),
            phone: Set(None),
            birthday: Set(None),
            gender: Set(None),
            address: Set(None),
            city_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok((user.try_into()?, profile.into()))
    }

    async fn create_employer(
        &self,
        user: NewUser,
        location: NewLocation,
        company: NewCompany,
    ) -> Result<(User, Company), RepositoryError> {
        let txn = self.db.begin().await?;

        let user = new_user_model(user).insert(&txn).await?;

        let location = location_entity::ActiveModel {
            city_id: Set(location.city_id),
            district_id: Set(location.district_id),
            address: Set(location.address),
            lat: Set(location.lat),
            lng: Set(location.lng),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let now = Utc::now().fixed_offset();
        let company = company_entity::ActiveModel {
            user_id: Set(user.id),
            company_name: Set(company.company_name),
            slug: Set(company.slug),
            company_email: Set(company.company_email),
            company_phone: Set(company.company_phone),
            website_url: Set(company.website_url),
            tax_code: Set(company.tax_code),
            since: Set(company.since),
            field_operation: Set(company.field_operation),
            description: Set(company.description),
            employee_size: Set(company.employee_size),
            company_image_url: Set(DEFAULT_COMPANY_IMAGE_URL.to_string()),
            company_cover_image_url: Set(DEFAULT_COMPANY_COVER_IMAGE_URL.to_string()),
            facebook_url: Set(None),
            youtube_url: Set(None),
            linkedin_url: Set(None),
            location_id: Set(location.id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok((user.try_into()?, company.into()))
    }

    async fn find_profile_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<JobSeekerProfile>, RepositoryError> {
        let model = profile_entity::Entity::find()
            .filter(profile_entity::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update_profile(
        &self,
        profile: &JobSeekerProfile,
        full_name: Option<String>,
    ) -> Result<JobSeekerProfile, RepositoryError> {
        let txn = self.db.begin().await?;
        let now = Utc::now().fixed_offset();

        let model = profile_entity::ActiveModel {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            phone: Set(profile.phone.clone()),
            birthday: Set(profile.birthday),
            gender: Set(profile.gender.clone()),
            address: Set(profile.address.clone()),
            city_id: Set(profile.city_id),
            created_at: Set(profile.created_at),
            updated_at: Set(now),
        };
        let updated = model.update(&txn).await?;

        if let Some(full_name) = full_name {
            user_entity::Entity::update_many()
                .col_expr(user_entity::Column::FullName, Expr::value(full_name))
                .col_expr(user_entity::Column::UpdatedAt, Expr::value(now))
                .filter(user_entity::Column::Id.eq(profile.user_id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(updated.into())
    }
}
