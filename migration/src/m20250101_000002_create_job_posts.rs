// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_accounts::{
    CommonCareers, CommonCities, Companies, Locations, Resumes, Users,
};

/// 招聘信息相关表迁移
///
/// 创建招聘信息、收藏、投递记录与订阅通知表。
/// slug 与 (user_id, job_post_id) 上的唯一索引保证并发写入下的唯一性。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPosts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobPosts::JobName).string().not_null())
                    .col(ColumnDef::new(JobPosts::Slug).string().not_null())
                    .col(
                        ColumnDef::new(JobPosts::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobPosts::Quantity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(JobPosts::JobDescription).text().not_null())
                    .col(ColumnDef::new(JobPosts::JobRequirement).text().not_null())
                    .col(ColumnDef::new(JobPosts::BenefitsEnjoyed).text().not_null())
                    .col(ColumnDef::new(JobPosts::Position).integer().not_null())
                    .col(ColumnDef::new(JobPosts::TypeOfWorkplace).integer().not_null())
                    .col(ColumnDef::new(JobPosts::Experience).integer().not_null())
                    .col(ColumnDef::new(JobPosts::AcademicLevel).integer().not_null())
                    .col(ColumnDef::new(JobPosts::JobType).integer().not_null())
                    .col(ColumnDef::new(JobPosts::SalaryMin).big_integer().not_null())
                    .col(ColumnDef::new(JobPosts::SalaryMax).big_integer().not_null())
                    .col(
                        ColumnDef::new(JobPosts::IsUrgent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(JobPosts::IsHot)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(JobPosts::ContactPersonName).string().not_null())
                    .col(ColumnDef::new(JobPosts::ContactPersonPhone).string().not_null())
                    .col(ColumnDef::new(JobPosts::ContactPersonEmail).string().not_null())
                    .col(
                        ColumnDef::new(JobPosts::Views)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(JobPosts::Status)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(JobPosts::CareerId).integer().not_null())
                    .col(ColumnDef::new(JobPosts::LocationId).integer().not_null())
                    .col(ColumnDef::new(JobPosts::CompanyId).integer().not_null())
                    .col(ColumnDef::new(JobPosts::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(JobPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_post_career")
                            .from(JobPosts::Table, JobPosts::CareerId)
                            .to(CommonCareers::Table, CommonCareers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_post_location")
                            .from(JobPosts::Table, JobPosts::LocationId)
                            .to(Locations::Table, Locations::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_post_company")
                            .from(JobPosts::Table, JobPosts::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_post_user")
                            .from(JobPosts::Table, JobPosts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_posts_slug")
                    .table(JobPosts::Table)
                    .col(JobPosts::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_posts_status_deadline")
                    .table(JobPosts::Table)
                    .col(JobPosts::Status)
                    .col(JobPosts::Deadline)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_posts_user_id")
                    .table(JobPosts::Table)
                    .col(JobPosts::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobPostSaved::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPostSaved::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobPostSaved::UserId).uuid().not_null())
                    .col(ColumnDef::new(JobPostSaved::JobPostId).integer().not_null())
                    .col(
                        ColumnDef::new(JobPostSaved::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saved_user")
                            .from(JobPostSaved::Table, JobPostSaved::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saved_job_post")
                            .from(JobPostSaved::Table, JobPostSaved::JobPostId)
                            .to(JobPosts::Table, JobPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_post_saved_user_job")
                    .table(JobPostSaved::Table)
                    .col(JobPostSaved::UserId)
                    .col(JobPostSaved::JobPostId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobPostActivities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPostActivities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobPostActivities::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(JobPostActivities::JobPostId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobPostActivities::ResumeId).integer().not_null())
                    .col(ColumnDef::new(JobPostActivities::FullName).string().not_null())
                    .col(ColumnDef::new(JobPostActivities::Email).string().not_null())
                    .col(ColumnDef::new(JobPostActivities::Phone).string().not_null())
                    .col(
                        ColumnDef::new(JobPostActivities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_user")
                            .from(JobPostActivities::Table, JobPostActivities::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_job_post")
                            .from(JobPostActivities::Table, JobPostActivities::JobPostId)
                            .to(JobPosts::Table, JobPosts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_activity_resume")
                            .from(JobPostActivities::Table, JobPostActivities::ResumeId)
                            .to(Resumes::Table, Resumes::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_job_post_activities_job_post_id")
                    .table(JobPostActivities::Table)
                    .col(JobPostActivities::JobPostId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobPostNotifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobPostNotifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobPostNotifications::UserId).uuid().not_null())
                    .col(ColumnDef::new(JobPostNotifications::JobName).string().not_null())
                    .col(ColumnDef::new(JobPostNotifications::Position).integer().null())
                    .col(ColumnDef::new(JobPostNotifications::Experience).integer().null())
                    .col(ColumnDef::new(JobPostNotifications::Salary).big_integer().null())
                    .col(
                        ColumnDef::new(JobPostNotifications::Frequency)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobPostNotifications::CareerId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobPostNotifications::CityId).integer().not_null())
                    .col(
                        ColumnDef::new(JobPostNotifications::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(JobPostNotifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobPostNotifications::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_user")
                            .from(JobPostNotifications::Table, JobPostNotifications::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_career")
                            .from(JobPostNotifications::Table, JobPostNotifications::CareerId)
                            .to(CommonCareers::Table, CommonCareers::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_city")
                            .from(JobPostNotifications::Table, JobPostNotifications::CityId)
                            .to(CommonCities::Table, CommonCities::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobPostNotifications::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPostActivities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPostSaved::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobPosts {
    Table,
    Id,
    JobName,
    Slug,
    Deadline,
    Quantity,
    JobDescription,
    JobRequirement,
    BenefitsEnjoyed,
    Position,
    TypeOfWorkplace,
    Experience,
    AcademicLevel,
    JobType,
    SalaryMin,
    SalaryMax,
    IsUrgent,
    IsHot,
    ContactPersonName,
    ContactPersonPhone,
    ContactPersonEmail,
    Views,
    Status,
    CareerId,
    LocationId,
    CompanyId,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum JobPostSaved {
    Table,
    Id,
    UserId,
    JobPostId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum JobPostActivities {
    Table,
    Id,
    UserId,
    JobPostId,
    ResumeId,
    FullName,
    Email,
    Phone,
    CreatedAt,
}

#[derive(DeriveIden)]
enum JobPostNotifications {
    Table,
    Id,
    UserId,
    JobName,
    Position,
    Experience,
    Salary,
    Frequency,
    CareerId,
    CityId,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
