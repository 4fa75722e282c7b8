// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_post::{
    JobPostActivity, JobPostNotification, NewJobPostActivity, NewJobPostNotification,
};
use crate::domain::models::pagination::{Page, PageRequest};
use crate::domain::repositories::job_post_activity_repository::JobPostActivityRepository;
use crate::infrastructure::database::entities::{
    job_post_activity as activity_entity, job_post_notification as notification_entity,
};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

/// 求职者行为仓库实现
#[derive(Clone)]
pub struct JobPostActivityRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl JobPostActivityRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<activity_entity::Model> for JobPostActivity {
    fn from(model: activity_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            job_post_id: model.job_post_id,
            resume_id: model.resume_id,
            full_name: model.full_name,
            email: model.email,
            phone: model.phone,
            created_at: model.created_at,
        }
    }
}

impl From<notification_entity::Model> for JobPostNotification {
    fn from(model: notification_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            job_name: model.job_name,
            position: model.position,
            experience: model.experience,
            salary: model.salary,
            frequency: model.frequency,
            career_id: model.career_id,
            city_id: model.city_id,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl JobPostActivityRepository for JobPostActivityRepositoryImpl {
    async fn create_activity(
        &self,
        activity: NewJobPostActivity,
    ) -> Result<JobPostActivity, RepositoryError> {
        let model = activity_entity::ActiveModel {
            user_id: Set(activity.user_id),
            job_post_id: Set(activity.job_post_id),
            resume_id: Set(activity.resume_id),
            full_name: Set(activity.full_name),
            email: Set(activity.email),
            phone: Set(activity.phone),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(model.into())
    }

    async fn find_activities(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<JobPostActivity>, RepositoryError> {
        let paginator = activity_entity::Entity::find()
            .filter(activity_entity::Column::UserId.eq(user_id))
            .order_by_desc(activity_entity::Column::CreatedAt)
            .order_by_desc(activity_entity::Column::Id)
            .paginate(self.db.as_ref(), page.page_size);

        let count = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page.saturating_sub(1)).await?;

        Ok(Page {
            count,
            results: models.into_iter().map(Into::into).collect(),
        })
    }

    async fn create_notification(
        &self,
        notification: NewJobPostNotification,
    ) -> Result<JobPostNotification, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = notification_entity::ActiveModel {
            user_id: Set(notification.user_id),
            job_name: Set(notification.job_name),
            position: Set(notification.position),
            experience: Set(notification.experience),
            salary: Set(notification.salary),
            frequency: Set(notification.frequency),
            career_id: Set(notification.career_id),
            city_id: Set(notification.city_id),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(model.into())
    }

    async fn find_notifications(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Page<JobPostNotification>, RepositoryError> {
        let paginator = notification_entity::Entity::find()
            .filter(notification_entity::Column::UserId.eq(user_id))
            .order_by_desc(notification_entity::Column::CreatedAt)
            .order_by_desc(notification_entity::Column::Id)
            .paginate(self.db.as_ref(), page.page_size);

        let count = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page.saturating_sub(1)).await?;

        Ok(Page {
            count,
            results: models.into_iter().map(Into::into).collect(),
        })
    }

    async fn toggle_notification(
        &self,
        id: i32,
        user_id: Uuid,
    ) -> Result<Option<JobPostNotification>, RepositoryError> {
        let result = notification_entity::Entity::update_many()
            .col_expr(
                notification_entity::Column::IsActive,
                Expr::col(notification_entity::Column::IsActive).not(),
            )
            .col_expr(
                notification_entity::Column::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(notification_entity::Column::Id.eq(id))
            .filter(notification_entity::Column::UserId.eq(user_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        let model = notification_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }
}
