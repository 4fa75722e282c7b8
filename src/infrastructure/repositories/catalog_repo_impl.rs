// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog::{Career, City, District};
use crate::domain::repositories::catalog_repository::CatalogRepository;
use crate::infrastructure::database::entities::{
    career as career_entity, city as city_entity, district as district_entity,
};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

/// 目录仓库实现
#[derive(Clone)]
pub struct CatalogRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CatalogRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<city_entity::Model> for City {
    fn from(model: city_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<district_entity::Model> for District {
    fn from(model: district_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            city_id: model.city_id,
        }
    }
}

impl From<career_entity::Model> for Career {
    fn from(model: career_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn find_city(&self, id: i32) -> Result<Option<City>, RepositoryError> {
        let model = city_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_district(&self, id: i32) -> Result<Option<District>, RepositoryError> {
        let model = district_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_career(&self, id: i32) -> Result<Option<Career>, RepositoryError> {
        let model = career_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn list_cities(&self) -> Result<Vec<City>, RepositoryError> {
        let models = city_entity::Entity::find()
            .order_by_asc(city_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_districts(&self, city_id: i32) -> Result<Vec<District>, RepositoryError> {
        let models = district_entity::Entity::find()
            .filter(district_entity::Column::CityId.eq(city_id))
            .order_by_asc(district_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn list_careers(&self) -> Result<Vec<Career>, RepositoryError> {
        let models = career_entity::Entity::find()
            .order_by_asc(career_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create_city(&self, name: &str) -> Result<City, RepositoryError> {
        let model = city_entity::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;
        Ok(model.into())
    }

    async fn create_district(
        &self,
        city_id: i32,
        name: &str,
    ) -> Result<District, RepositoryError> {
        let model = district_entity::ActiveModel {
            name: Set(name.to_string()),
            city_id: Set(city_id),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;
        Ok(model.into())
    }

    async fn create_career(&self, name: &str) -> Result<Career, RepositoryError> {
        let model = career_entity::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db.as_ref())
        .await?;
        Ok(model.into())
    }
}
