// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub job_name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub deadline: ChronoDateTimeWithTimeZone,
    pub quantity: i32,
    #[sea_orm(column_type = "Text")]
    pub job_description: String,
    #[sea_orm(column_type = "Text")]
    pub job_requirement: String,
    #[sea_orm(column_type = "Text")]
    pub benefits_enjoyed: String,
    pub position: i32,
    pub type_of_workplace: i32,
    pub experience: i32,
    pub academic_level: i32,
    pub job_type: i32,
    pub salary_min: i64,
    pub salary_max: i64,
    pub is_urgent: bool,
    pub is_hot: bool,
    pub contact_person_name: String,
    pub contact_person_phone: String,
    pub contact_person_email: String,
    pub views: i32,
    pub status: i32,
    pub career_id: i32,
    pub location_id: i32,
    pub company_id: i32,
    pub user_id: Uuid,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id"
    )]
    Location,
    #[sea_orm(has_many = "super::job_post_saved::Entity")]
    JobPostSaved,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::job_post_saved::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPostSaved.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
