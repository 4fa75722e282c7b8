// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::resume::Resume;
use crate::domain::repositories::resume_repository::ResumeRepository;
use crate::infrastructure::database::entities::resume as resume_entity;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 简历仓库实现
#[derive(Clone)]
pub struct ResumeRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<resume_entity::Model> for Resume {
    fn from(model: resume_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            file_url: model.file_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryImpl {
    async fn create(
        &self,
        user_id: Uuid,
        title: &str,
        file_url: Option<String>,
    ) -> Result<Resume, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = resume_entity::ActiveModel {
            user_id: Set(user_id),
            title: Set(title.to_string()),
            file_url: Set(file_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(model.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Resume>, RepositoryError> {
        let model = resume_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Resume>, RepositoryError> {
        let models = resume_entity::Entity::find()
            .filter(resume_entity::Column::UserId.eq(user_id))
            .order_by_desc(resume_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
