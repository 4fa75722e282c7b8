// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 账户与基础资料表迁移
///
/// 创建用户、求职者档案、城市/区县/行业目录、地址、公司、公司图片与简历表
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. Catalog tables (No dependencies)
        manager
            .create_table(
                Table::create()
                    .table(CommonCities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CommonCities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CommonCities::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CommonDistricts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CommonDistricts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CommonDistricts::Name).string().not_null())
                    .col(ColumnDef::new(CommonDistricts::CityId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_district_city")
                            .from(CommonDistricts::Table, CommonDistricts::CityId)
                            .to(CommonCities::Table, CommonCities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CommonCareers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CommonCareers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CommonCareers::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 2. Users
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Email).string().not_null())
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(ColumnDef::new(Users::FullName).string().not_null())
                    .col(ColumnDef::new(Users::RoleName).string_len(20).not_null())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::IsVerifyEmail)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::AvatarUrl).string().null())
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 3. Locations (Depends on cities and districts)
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::CityId).integer().not_null())
                    .col(ColumnDef::new(Locations::DistrictId).integer().not_null())
                    .col(ColumnDef::new(Locations::Address).string().not_null())
                    .col(ColumnDef::new(Locations::Lat).double().null())
                    .col(ColumnDef::new(Locations::Lng).double().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_city")
                            .from(Locations::Table, Locations::CityId)
                            .to(CommonCities::Table, CommonCities::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_location_district")
                            .from(Locations::Table, Locations::DistrictId)
                            .to(CommonDistricts::Table, CommonDistricts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. Job seeker profiles (Depends on users)
        manager
            .create_table(
                Table::create()
                    .table(JobSeekerProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobSeekerProfiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobSeekerProfiles::UserId).uuid().not_null())
                    .col(ColumnDef::new(JobSeekerProfiles::Phone).string().null())
                    .col(ColumnDef::new(JobSeekerProfiles::Birthday).date().null())
                    .col(ColumnDef::new(JobSeekerProfiles::Gender).string_len(10).null())
                    .col(ColumnDef::new(JobSeekerProfiles::Address).string().null())
                    .col(ColumnDef::new(JobSeekerProfiles::CityId).integer().null())
                    .col(
                        ColumnDef::new(JobSeekerProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(JobSeekerProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_user")
                            .from(JobSeekerProfiles::Table, JobSeekerProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_profiles_user_id")
                    .table(JobSeekerProfiles::Table)
                    .col(JobSeekerProfiles::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 5. Companies (Depends on users and locations)
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::UserId).uuid().not_null())
                    .col(ColumnDef::new(Companies::CompanyName).string().not_null())
                    .col(ColumnDef::new(Companies::Slug).string().not_null())
                    .col(ColumnDef::new(Companies::CompanyEmail).string().not_null())
                    .col(ColumnDef::new(Companies::CompanyPhone).string().not_null())
                    .col(ColumnDef::new(Companies::WebsiteUrl).string().null())
                    .col(ColumnDef::new(Companies::TaxCode).string().not_null())
                    .col(ColumnDef::new(Companies::Since).date().null())
                    .col(ColumnDef::new(Companies::FieldOperation).string().not_null())
                    .col(ColumnDef::new(Companies::Description).text().null())
                    .col(
                        ColumnDef::new(Companies::EmployeeSize)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Companies::CompanyImageUrl).string().not_null())
                    .col(
                        ColumnDef::new(Companies::CompanyCoverImageUrl)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Companies::FacebookUrl).string().null())
                    .col(ColumnDef::new(Companies::YoutubeUrl).string().null())
                    .col(ColumnDef::new(Companies::LinkedinUrl).string().null())
                    .col(ColumnDef::new(Companies::LocationId).integer().not_null())
                    .col(
                        ColumnDef::new(Companies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Companies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_user")
                            .from(Companies::Table, Companies::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_location")
                            .from(Companies::Table, Companies::LocationId)
                            .to(Locations::Table, Locations::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_user_id")
                    .table(Companies::Table)
                    .col(Companies::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_slug")
                    .table(Companies::Table)
                    .col(Companies::Slug)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CompanyImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyImages::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CompanyImages::CompanyId).integer().not_null())
                    .col(ColumnDef::new(CompanyImages::ImageUrl).string().not_null())
                    .col(
                        ColumnDef::new(CompanyImages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_image_company")
                            .from(CompanyImages::Table, CompanyImages::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 6. Resumes (Depends on users)
        manager
            .create_table(
                Table::create()
                    .table(Resumes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resumes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resumes::UserId).uuid().not_null())
                    .col(ColumnDef::new(Resumes::Title).string().not_null())
                    .col(ColumnDef::new(Resumes::FileUrl).string().null())
                    .col(
                        ColumnDef::new(Resumes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Resumes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resume_user")
                            .from(Resumes::Table, Resumes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resumes_user_id")
                    .table(Resumes::Table)
                    .col(Resumes::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resumes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CompanyImages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(JobSeekerProfiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CommonCareers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CommonDistricts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CommonCities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommonCities {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum CommonDistricts {
    Table,
    Id,
    Name,
    CityId,
}

#[derive(DeriveIden)]
pub enum CommonCareers {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Email,
    Password,
    FullName,
    RoleName,
    IsActive,
    IsVerifyEmail,
    AvatarUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Locations {
    Table,
    Id,
    CityId,
    DistrictId,
    Address,
    Lat,
    Lng,
}

#[derive(DeriveIden)]
enum JobSeekerProfiles {
    Table,
    Id,
    UserId,
    Phone,
    Birthday,
    Gender,
    Address,
    CityId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum Companies {
    Table,
    Id,
    UserId,
    CompanyName,
    Slug,
    CompanyEmail,
    CompanyPhone,
    WebsiteUrl,
    TaxCode,
    Since,
    FieldOperation,
    Description,
    EmployeeSize,
    CompanyImageUrl,
    CompanyCoverImageUrl,
    FacebookUrl,
    YoutubeUrl,
    LinkedinUrl,
    LocationId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CompanyImages {
    Table,
    Id,
    CompanyId,
    ImageUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum Resumes {
    Table,
    Id,
    UserId,
    Title,
    FileUrl,
    CreatedAt,
    UpdatedAt,
}
