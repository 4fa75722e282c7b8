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

use crate::domain::models::company::{Location, NewLocation};
use crate::domain::models::job_post::{
    CompanySummary, JobPost, JobPostFilter, JobPostOrdering, JobPostStatus, JobPostView,
    NewJobPost, PrivateJobPostRow,
};
use crate::domain::models::pagination::{Page, PageRequest};
use crate::domain::repositories::job_post_repository::JobPostRepository;
use crate::infrastructure::database::entities::{
    city as city_entity, company as company_entity, job_post as job_post_entity,
    job_post_activity as activity_entity, job_post_saved as saved_entity,
    location as location_entity,
};
use crate::infrastructure::repositories::company_repo_impl::overwrite_location;
use crate::infrastructure::repositories::contains_pattern;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
    TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// 招聘信息仓库实现
///
/// 列表查询先分页取出招聘信息，再按ID批量加载公司、地址与城市
#[derive(Clone)]
pub struct JobPostRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl JobPostRepositoryImpl {
    /// 创建新的招聘信息仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 为查询附加通用过滤条件
    fn apply_filter(
        mut query: Select<job_post_entity::Entity>,
        filter: &JobPostFilter,
    ) -> Select<job_post_entity::Entity> {
        if let Some(keyword) = filter.keyword.as_deref().map(str::trim) {
            if !keyword.is_empty() {
                query = query.filter(
                    Expr::col((job_post_entity::Entity, job_post_entity::Column::JobName))
                        .like(contains_pattern(keyword)),
                );
            }
        }
        if let Some(career_id) = filter.career_id {
            query = query.filter(job_post_entity::Column::CareerId.eq(career_id));
        }
        if let Some(company_id) = filter.company_id {
            query = query.filter(job_post_entity::Column::CompanyId.eq(company_id));
        }
        if let Some(is_urgent) = filter.is_urgent {
            query = query.filter(job_post_entity::Column::IsUrgent.eq(is_urgent));
        }
        if let Some(status) = filter.status {
            query = query.filter(job_post_entity::Column::Status.eq(i32::from(status)));
        }
        if let Some(city_id) = filter.city_id {
            query = query
                .join(
                    JoinType::InnerJoin,
                    job_post_entity::Relation::Location.def(),
                )
                .filter(location_entity::Column::CityId.eq(city_id));
        }

        query
            .order_by_desc(order_column(filter.ordering))
            .order_by_desc(job_post_entity::Column::Id)
    }

    /// 执行分页查询
    async fn fetch_page(
        &self,
        query: Select<job_post_entity::Entity>,
        page: PageRequest,
    ) -> Result<(u64, Vec<job_post_entity::Model>), RepositoryError> {
        let paginator = query.paginate(self.db.as_ref(), page.page_size);
        let count = paginator.num_items().await?;
        let models = paginator.fetch_page(page.page.saturating_sub(1)).await?;
        Ok((count, models))
    }

    /// 批量加载关联的公司、地址与城市
    async fn load_views(
        &self,
        models: Vec<job_post_entity::Model>,
    ) -> Result<Vec<JobPostView>, RepositoryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let company_ids: Vec<i32> = models.iter().map(|m| m.company_id).collect();
        let location_ids: Vec<i32> = models.iter().map(|m| m.location_id).collect();

        let companies: HashMap<i32, CompanySummary> = company_entity::Entity::find()
            .filter(company_entity::Column::Id.is_in(company_ids))
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|c| {
                (
                    c.id,
                    CompanySummary {
                        id: c.id,
                        slug: c.slug,
                        company_name: c.company_name,
                        employee_size: c.employee_size,
                        company_image_url: c.company_image_url,
                    },
                )
            })
            .collect();

        let locations: HashMap<i32, Location> = location_entity::Entity::find()
            .filter(location_entity::Column::Id.is_in(location_ids))
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|l| (l.id, Location::from(l)))
            .collect();

        let city_ids: Vec<i32> = locations.values().map(|l| l.city_id).collect();
        let cities: HashMap<i32, String> = city_entity::Entity::find()
            .filter(city_entity::Column::Id.is_in(city_ids))
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|c| (c.id, c.name))
            .collect();

        models
            .into_iter()
            .map(|model| -> Result<JobPostView, RepositoryError> {
                let location = locations.get(&model.location_id).cloned();
                let city_name = location
                    .as_ref()
                    .and_then(|l| cities.get(&l.city_id).cloned());
                Ok(JobPostView {
                    company: companies.get(&model.company_id).cloned(),
                    location,
                    city_name,
                    post: model.try_into()?,
                })
            })
            .collect()
    }

    /// 统计每条招聘信息的投递数量
    async fn applied_counts(&self, ids: Vec<i32>) -> Result<HashMap<i32, i64>, RepositoryError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = activity_entity::Entity::find()
            .select_only()
            .column(activity_entity::Column::JobPostId)
            .column_as(Expr::col(activity_entity::Column::Id).count(), "applied")
            .filter(activity_entity::Column::JobPostId.is_in(ids))
            .group_by(activity_entity::Column::JobPostId)
            .into_tuple()
            .all(self.db.as_ref())
            .await?;

        Ok(rows.into_iter().collect())
    }
}

fn order_column(ordering: JobPostOrdering) -> job_post_entity::Column {
    match ordering {
        JobPostOrdering::CreatedAt => job_post_entity::Column::CreatedAt,
        JobPostOrdering::UpdatedAt => job_post_entity::Column::UpdatedAt,
        JobPostOrdering::Deadline => job_post_entity::Column::Deadline,
        JobPostOrdering::Views => job_post_entity::Column::Views,
        JobPostOrdering::SalaryMin => job_post_entity::Column::SalaryMin,
        JobPostOrdering::SalaryMax => job_post_entity::Column::SalaryMax,
        JobPostOrdering::JobName => job_post_entity::Column::JobName,
        JobPostOrdering::Id => job_post_entity::Column::Id,
    }
}

impl TryFrom<job_post_entity::Model> for JobPost {
    type Error = RepositoryError;

    fn try_from(model: job_post_entity::Model) -> Result<Self, Self::Error> {
        let status = JobPostStatus::try_from(model.status).map_err(|e| {
            warn!("Job post {} has an unrecognised status: {}", model.id, e);
            RepositoryError::InvalidData(format!("job post {}: {}", model.id, e))
        })?;

        Ok(Self {
            id: model.id,
            job_name: model.job_name,
            slug: model.slug,
            deadline: model.deadline,
            quantity: model.quantity,
            job_description: model.job_description,
            job_requirement: model.job_requirement,
            benefits_enjoyed: model.benefits_enjoyed,
            position: model.position,
            type_of_workplace: model.type_of_workplace,
            experience: model.experience,
            academic_level: model.academic_level,
            job_type: model.job_type,
            salary_min: model.salary_min,
            salary_max: model.salary_max,
            is_urgent: model.is_urgent,
            is_hot: model.is_hot,
            contact_person_name: model.contact_person_name,
            contact_person_phone: model.contact_person_phone,
            contact_person_email: model.contact_person_email,
            views: model.views,
            status,
            career_id: model.career_id,
            location_id: model.location_id,
            company_id: model.company_id,
            user_id: model.user_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[async_trait]
impl JobPostRepository for JobPostRepositoryImpl {
    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError> {
        let mut query =
            job_post_entity::Entity::find().filter(job_post_entity::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(job_post_entity::Column::Id.ne(id));
        }

        Ok(query.count(self.db.as_ref()).await? > 0)
    }

    async fn create(
        &self,
        location: NewLocation,
        post: NewJobPost,
    ) -> Result<JobPost, RepositoryError> {
        let txn = self.db.begin().await?;

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
        let model = job_post_entity::ActiveModel {
            job_name: Set(post.job_name),
            slug: Set(post.slug),
            deadline: Set(post.deadline),
            quantity: Set(post.quantity),
            job_description: Set(post.job_description),
            job_requirement: Set(post.job_requirement),
            benefits_enjoyed: Set(post.benefits_enjoyed),
            position: Set(post.position),
            type_of_workplace: Set(post.type_of_workplace),
            experience: Set(post.experience),
            academic_level: Set(post.academic_level),
            job_type: Set(post.job_type),
            salary_min: Set(post.salary_min),
            salary_max: Set(post.salary_max),
            is_urgent: Set(post.is_urgent),
            is_hot: Set(post.is_hot),
            contact_person_name: Set(post.contact_person_name),
            contact_person_phone: Set(post.contact_person_phone),
            contact_person_email: Set(post.contact_person_email),
            views: Set(0),
            status: Set(post.status.into()),
            career_id: Set(post.career_id),
            location_id: Set(location.id),
            company_id: Set(post.company_id),
            user_id: Set(post.user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        model.try_into()
    }

    async fn update(
        &self,
        post: &JobPost,
        location: Option<NewLocation>,
    ) -> Result<JobPost, RepositoryError> {
        let txn = self.db.begin().await?;

        if let Some(location) = location {
            overwrite_location(&txn, post.location_id, location).await?;
        }

        // views 由原子自增维护，这里不覆盖
        let model = job_post_entity::ActiveModel {
            id: Set(post.id),
            job_name: Set(post.job_name.clone()),
            slug: Set(post.slug.clone()),
            deadline: Set(post.deadline),
            quantity: Set(post.quantity),
            job_description: Set(post.job_description.clone()),
            job_requirement: Set(post.job_requirement.clone()),
            benefits_enjoyed: Set(post.benefits_enjoyed.clone()),
            position: Set(post.position),
            type_of_workplace: Set(post.type_of_workplace),
            experience: Set(post.experience),
            academic_level: Set(post.academic_level),
            job_type: Set(post.job_type),
            salary_min: Set(post.salary_min),
            salary_max: Set(post.salary_max),
            is_urgent: Set(post.is_urgent),
            is_hot: Set(post.is_hot),
            contact_person_name: Set(post.contact_person_name.clone()),
            contact_person_phone: Set(post.contact_person_phone.clone()),
            contact_person_email: Set(post.contact_person_email.clone()),
            career_id: Set(post.career_id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        let updated = model.update(&txn).await?;

        txn.commit().await?;
        updated.try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<JobPost>, RepositoryError> {
        let model = job_post_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        model.map(JobPost::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<JobPost>, RepositoryError> {
        let model = job_post_entity::Entity::find()
            .filter(job_post_entity::Column::Slug.eq(slug))
            .one(self.db.as_ref())
            .await?;
        model.map(JobPost::try_from).transpose()
    }

    async fn find_views_by_ids(&self, ids: &[i32]) -> Result<Vec<JobPostView>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<i32, job_post_entity::Model> = job_post_entity::Entity::find()
            .filter(job_post_entity::Column::Id.is_in(ids.to_vec()))
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let ordered: Vec<_> = ids.iter().filter_map(|id| by_id.remove(id)).collect();
        self.load_views(ordered).await
    }

    async fn find_published(
        &self,
        filter: &JobPostFilter,
        now: DateTime<FixedOffset>,
        page: PageRequest,
    ) -> Result<Page<JobPostView>, RepositoryError> {
        let query = Self::apply_filter(job_post_entity::Entity::find(), filter)
            .filter(job_post_entity::Column::Status.eq(i32::from(JobPostStatus::Published)))
            .filter(job_post_entity::Column::Deadline.gte(now));

        let (count, models) = self.fetch_page(query, page).await?;
        debug!("Found {} published job posts", count);

        Ok(Page {
            count,
            results: self.load_views(models).await?,
        })
    }

    async fn find_by_owner(
        &self,
        user_id: Uuid,
        filter: &JobPostFilter,
        page: Option<PageRequest>,
    ) -> Result<Page<PrivateJobPostRow>, RepositoryError> {
        let query = Self::apply_filter(job_post_entity::Entity::find(), filter)
            .filter(job_post_entity::Column::UserId.eq(user_id));

        let (count, models) = match page {
            Some(page) => self.fetch_page(query, page).await?,
            None => {
                let models = query.all(self.db.as_ref()).await?;
                (models.len() as u64, models)
            }
        };

        let counts = self
            .applied_counts(models.iter().map(|m| m.id).collect())
            .await?;

        let results = models
            .into_iter()
            .map(|model| -> Result<PrivateJobPostRow, RepositoryError> {
                Ok(PrivateJobPostRow {
                    applied_number: counts.get(&model.id).copied().unwrap_or(0),
                    post: model.try_into()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page { count, results })
    }

    async fn increment_views(&self, id: i32) -> Result<i32, RepositoryError> {
        let result = job_post_entity::Entity::update_many()
            .col_expr(
                job_post_entity::Column::Views,
                Expr::col(job_post_entity::Column::Views).add(1),
            )
            .filter(job_post_entity::Column::Id.eq(id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        let views: Option<i32> = job_post_entity::Entity::find_by_id(id)
            .select_only()
            .column(job_post_entity::Column::Views)
            .into_tuple()
            .one(self.db.as_ref())
            .await?;

        views.ok_or(RepositoryError::NotFound)
    }

    async fn is_saved(&self, user_id: Uuid, job_post_id: i32) -> Result<bool, RepositoryError> {
        let count = saved_entity::Entity::find()
            .filter(saved_entity::Column::UserId.eq(user_id))
            .filter(saved_entity::Column::JobPostId.eq(job_post_id))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    async fn toggle_saved(
        &self,
        user_id: Uuid,
        job_post_id: i32,
    ) -> Result<bool, RepositoryError> {
        let deleted = saved_entity::Entity::delete_many()
            .filter(saved_entity::Column::UserId.eq(user_id))
            .filter(saved_entity::Column::JobPostId.eq(job_post_id))
            .exec(self.db.as_ref())
            .await?;
        if deleted.rows_affected > 0 {
            return Ok(false);
        }

        let inserted = saved_entity::ActiveModel {
            user_id: Set(user_id),
            job_post_id: Set(job_post_id),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await;

        match inserted.map_err(RepositoryError::from) {
            Ok(_) => Ok(true),
            // 并发请求已插入同一条收藏记录
            Err(RepositoryError::UniqueViolation(_)) => Ok(true),
            Err(e) => Err(e),
        }
    }

    async fn find_saved(
        &self,
        user_id: Uuid,
        now: DateTime<FixedOffset>,
        page: PageRequest,
    ) -> Result<Page<JobPostView>, RepositoryError> {
        let query = job_post_entity::Entity::find()
            .join(
                JoinType::InnerJoin,
                job_post_entity::Relation::JobPostSaved.def(),
            )
            .filter(saved_entity::Column::UserId.eq(user_id))
            .filter(job_post_entity::Column::Status.eq(i32::from(JobPostStatus::Published)))
            .filter(job_post_entity::Column::Deadline.gte(now))
            .order_by_desc(saved_entity::Column::CreatedAt)
            .order_by_desc(saved_entity::Column::Id);

        let (count, models) = self.fetch_page(query, page).await?;
        Ok(Page {
            count,
            results: self.load_views(models).await?,
        })
    }
}
