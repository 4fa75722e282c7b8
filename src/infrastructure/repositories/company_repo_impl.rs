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
    Company, CompanyFilter, CompanyImage, CompanyWithLocation, Location, NewLocation,
};
use crate::domain::models::pagination::{Page, PageRequest};
use crate::domain::repositories::company_repository::CompanyRepository;
use crate::infrastructure::database::entities::{
    company as company_entity, company_image as image_entity, location as location_entity,
};
use crate::infrastructure::repositories::contains_pattern;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

/// 公司仓库实现
#[derive(Clone)]
pub struct CompanyRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CompanyRepositoryImpl {
    /// 创建新的公司仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<company_entity::Model> for Company {
    fn from(model: company_entity::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            company_name: model.company_name,
            slug: model.slug,
            company_email: model.company_email,
            company_phone: model.company_phone,
            website_url: model.website_url,
            tax_code: model.tax_code,
            since: model.since,
            field_operation: model.field_operation,
            description: model.description,
            employee_size: model.employee_size,
            company_image_url: model.company_image_url,
            company_cover_image_url: model.company_cover_image_url,
            facebook_url: model.facebook_url,
            youtube_url: model.youtube_url,
            linkedin_url: model.linkedin_url,
            location_id: model.location_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<location_entity::Model> for Location {
    fn from(model: location_entity::Model) -> Self {
        Self {
            id: model.id,
            city_id: model.city_id,
            district_id: model.district_id,
            address: model.address,
            lat: model.lat,
            lng: model.lng,
        }
    }
}

impl From<image_entity::Model> for CompanyImage {
    fn from(model: image_entity::Model) -> Self {
        Self {
            id: model.id,
            company_id: model.company_id,
            image_url: model.image_url,
            created_at: model.created_at,
        }
    }
}

fn with_location(
    (company, location): (company_entity::Model, Option<location_entity::Model>),
) -> Result<CompanyWithLocation, RepositoryError> {
    let location = location.ok_or(RepositoryError::NotFound)?;
    Ok(CompanyWithLocation {
        company: company.into(),
        location: location.into(),
    })
}

/// 原地覆盖地址字段
pub(crate) async fn overwrite_location<C: ConnectionTrait>(
    conn: &C,
    location_id: i32,
    location: NewLocation,
) -> Result<(), RepositoryError> {
    let result = location_entity::Entity::update_many()
        .col_expr(location_entity::Column::CityId, Expr::value(location.city_id))
        .col_expr(
            location_entity::Column::DistrictId,
            Expr::value(location.district_id),
        )
        .col_expr(location_entity::Column::Address, Expr::value(location.address))
        .col_expr(location_entity::Column::Lat, Expr::value(location.lat))
        .col_expr(location_entity::Column::Lng, Expr::value(location.lng))
        .filter(location_entity::Column::Id.eq(location_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(RepositoryError::NotFound);
    }
    Ok(())
}

#[async_trait]
impl CompanyRepository for CompanyRepositoryImpl {
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<CompanyWithLocation>, RepositoryError> {
        company_entity::Entity::find()
            .filter(company_entity::Column::UserId.eq(user_id))
            .find_also_related(location_entity::Entity)
            .one(self.db.as_ref())
            .await?
            .map(with_location)
            .transpose()
    }

    async fn find_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<CompanyWithLocation>, RepositoryError> {
        company_entity::Entity::find()
            .filter(company_entity::Column::Slug.eq(slug))
            .find_also_related(location_entity::Entity)
            .one(self.db.as_ref())
            .await?
            .map(with_location)
            .transpose()
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError> {
        let mut query =
            company_entity::Entity::find().filter(company_entity::Column::Slug.eq(slug));
        if let Some(id) = exclude_id {
            query = query.filter(company_entity::Column::Id.ne(id));
        }

        Ok(query.count(self.db.as_ref()).await? > 0)
    }

    async fn update(
        &self,
        company: &Company,
        location: Option<NewLocation>,
    ) -> Result<CompanyWithLocation, RepositoryError> {
        let txn = self.db.begin().await?;

        if let Some(location) = location {
            overwrite_location(&txn, company.location_id, location).await?;
        }

        let model = company_entity::ActiveModel {
            id: Set(company.id),
            user_id: Set(company.user_id),
            company_name: Set(company.company_name.clone()),
            slug: Set(company.slug.clone()),
            company_email: Set(company.company_email.clone()),
            company_phone: Set(company.company_phone.clone()),
            website_url: Set(company.website_url.clone()),
            tax_code: Set(company.tax_code.clone()),
            since: Set(company.since),
            field_operation: Set(company.field_operation.clone()),
            description: Set(company.description.clone()),
            employee_size: Set(company.employee_size),
            company_image_url: Set(company.company_image_url.clone()),
            company_cover_image_url: Set(company.company_cover_image_url.clone()),
            facebook_url: Set(company.facebook_url.clone()),
            youtube_url: Set(company.youtube_url.clone()),
            linkedin_url: Set(company.linkedin_url.clone()),
            location_id: Set(company.location_id),
            created_at: Set(company.created_at),
            updated_at: Set(Utc::now().fixed_offset()),
        };
        let updated = model.update(&txn).await?;

        let location = location_entity::Entity::find_by_id(updated.location_id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        txn.commit().await?;
        Ok(CompanyWithLocation {
            company: updated.into(),
            location: location.into(),
        })
    }

    async fn find_all(
        &self,
        filter: &CompanyFilter,
        page: PageRequest,
    ) -> Result<Page<CompanyWithLocation>, RepositoryError> {
        let mut query = company_entity::Entity::find().find_also_related(location_entity::Entity);

        if let Some(keyword) = filter.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            query = query.filter(
                Expr::col((company_entity::Entity, company_entity::Column::CompanyName))
                    .like(contains_pattern(keyword.trim())),
            );
        }
        if let Some(city_id) = filter.city_id {
            query = query.filter(location_entity::Column::CityId.eq(city_id));
        }

        let paginator = query
            .order_by_desc(company_entity::Column::Id)
            .paginate(self.db.as_ref(), page.page_size);
        let count = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.page.saturating_sub(1)).await?;

        let results = rows
            .into_iter()
            .map(with_location)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page { count, results })
    }

    async fn add_image(
        &self,
        company_id: i32,
        image_url: &str,
    ) -> Result<CompanyImage, RepositoryError> {
        let model = image_entity::ActiveModel {
            company_id: Set(company_id),
            image_url: Set(image_url.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;

        Ok(model.into())
    }

    async fn find_images(&self, company_id: i32) -> Result<Vec<CompanyImage>, RepositoryError> {
        let models = image_entity::Entity::find()
            .filter(image_entity::Column::CompanyId.eq(company_id))
            .order_by_asc(image_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
