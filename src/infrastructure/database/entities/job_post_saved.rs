// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "job_post_saved")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Uuid,
    pub job_post_id: i32,
    pub created_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::job_post::Entity",
        from = "Column::JobPostId",
        to = "super::job_post::Column::Id",
        on_delete = "Cascade"
    )]
    JobPost,
}

impl Related<super::job_post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobPost.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
