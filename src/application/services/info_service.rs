// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::info_dto::{
    AddCompanyImageRequest, CompanyQuery, CompanyResponse, CreateResumeRequest, ProfileResponse,
    UpdateCompanyRequest, UpdateProfileRequest,
};
use crate::application::services::{check_location, page_request, unique_slug, SLUG_RETRY_LIMIT};
use crate::config::settings::PaginationSettings;
use crate::domain::models::catalog::{Career, City, District};
use crate::domain::models::company::{CompanyFilter, CompanyImage, CompanyWithLocation};
use crate::domain::models::pagination::Page;
use crate::domain::models::resume::Resume;
use crate::domain::repositories::{
    catalog_repository::CatalogRepository, company_repository::CompanyRepository,
    resume_repository::ResumeRepository, user_repository::UserRepository,
};
use crate::utils::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// 公司、求职者档案、简历与基础目录服务
pub struct InfoService {
    users: Arc<dyn UserRepository>,
    companies: Arc<dyn CompanyRepository>,
    resumes: Arc<dyn ResumeRepository>,
    catalog: Arc<dyn CatalogRepository>,
    pagination: PaginationSettings,
}

impl InfoService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        companies: Arc<dyn CompanyRepository>,
        resumes: Arc<dyn ResumeRepository>,
        catalog: Arc<dyn CatalogRepository>,
        pagination: PaginationSettings,
    ) -> Self {
        Self {
            users,
            companies,
            resumes,
            catalog,
            pagination,
        }
    }

    async fn own_company(&self, user_id: Uuid) -> Result<CompanyWithLocation, ServiceError> {
        self.companies
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Company"))
    }

    async fn with_images(
        &self,
        company: CompanyWithLocation,
    ) -> Result<CompanyResponse, ServiceError> {
        let images = self.companies.find_images(company.company.id).await?;
        Ok(CompanyResponse::new(company, images))
    }

    pub async fn get_own_company(&self, user_id: Uuid) -> Result<CompanyResponse, ServiceError> {
        let company = self.own_company(user_id).await?;
        self.with_images(company).await
    }

    /// 更新当前招聘方的公司，名称变化时重新生成 slug，地址原地更新
    pub async fn update_own_company(
        &self,
        user_id: Uuid,
        dto: UpdateCompanyRequest,
    ) -> Result<CompanyResponse, ServiceError> {
        dto.validate()?;

        let CompanyWithLocation { mut company, .. } = self.own_company(user_id).await?;
        let location = match dto.location {
            Some(location) => {
                check_location(self.catalog.as_ref(), &location).await?;
                Some(location.into())
            }
            None => None,
        };

        if let Some(name) = dto.company_name.filter(|n| *n != company.company_name) {
            company.company_name = name;
            company.slug = self.company_slug(&company.company_name, company.id).await?;
        }
        if let Some(v) = dto.company_email {
            company.company_email = v;
        }
        if let Some(v) = dto.company_phone {
            company.company_phone = v;
        }
        if dto.website_url.is_some() {
            company.website_url = dto.website_url;
        }
        if let Some(v) = dto.tax_code {
            company.tax_code = v;
        }
        if dto.since.is_some() {
            company.since = dto.since;
        }
        if let Some(v) = dto.field_operation {
            company.field_operation = v;
        }
        if dto.description.is_some() {
            company.description = dto.description;
        }
        if let Some(v) = dto.employee_size {
            company.employee_size = v;
        }
        if dto.facebook_url.is_some() {
            company.facebook_url = dto.facebook_url;
        }
        if dto.youtube_url.is_some() {
            company.youtube_url = dto.youtube_url;
        }
        if dto.linkedin_url.is_some() {
            company.linkedin_url = dto.linkedin_url;
        }

        for attempt in 1..=SLUG_RETRY_LIMIT {
            match self.companies.update(&company, location.clone()).await {
                Ok(updated) => return self.with_images(updated).await,
                Err(RepositoryError::UniqueViolation(msg)) => {
                    warn!(
                        "Company slug collision on update attempt {}/{}: {}",
                        attempt, SLUG_RETRY_LIMIT, msg
                    );
                    company.slug = self.company_slug(&company.company_name, company.id).await?;
                }
                Err(RepositoryError::NotFound) => return Err(ServiceError::not_found("Company")),
                Err(e) => return Err(e.into()),
            }
        }

        Err(ServiceError::Conflict(
            "Could not allocate a unique company slug".to_string(),
        ))
    }

    async fn company_slug(&self, name: &str, company_id: i32) -> Result<String, ServiceError> {
        unique_slug(name, |candidate| {
            let companies = self.companies.clone();
            async move { companies.slug_exists(&candidate, Some(company_id)).await }
        })
        .await
    }

    pub async fn find_companies(
        &self,
        query: CompanyQuery,
    ) -> Result<Page<CompanyResponse>, ServiceError> {
        let page = page_request(query.page, query.page_size, &self.pagination)?;
        let filter = CompanyFilter {
            keyword: query.keyword,
            city_id: query.city_id,
        };

        let page = self.companies.find_all(&filter, page).await?;
        Ok(page.map(CompanyResponse::from))
    }

    pub async fn get_public_company(&self, slug: &str) -> Result<CompanyResponse, ServiceError> {
        let company = self
            .companies
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Company"))?;
        self.with_images(company).await
    }

    /// 记录公司图片地址（文件本身由外部存储托管）
    pub async fn add_company_image(
        &self,
        user_id: Uuid,
        dto: AddCompanyImageRequest,
    ) -> Result<CompanyImage, ServiceError> {
        dto.validate()?;
        let company = self.own_company(user_id).await?;
        let image = self
            .companies
            .add_image(company.company.id, &dto.image_url)
            .await?;
        info!("Added image {} to company {}", image.id, company.company.id);
        Ok(image)
    }

    pub async fn get_profile(&self, user_id: Uuid) -> Result<ProfileResponse, ServiceError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        let profile = self
            .users
            .find_profile_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job seeker profile"))?;

        Ok(ProfileResponse::new(profile, user))
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        dto: UpdateProfileRequest,
    ) -> Result<ProfileResponse, ServiceError> {
        dto.validate()?;

        let mut profile = self
            .users
            .find_profile_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Job seeker profile"))?;

        if let Some(city_id) = dto.city {
            if self.catalog.find_city(city_id).await?.is_none() {
                return Err(ServiceError::not_found("City"));
            }
            profile.city_id = Some(city_id);
        }
        if dto.phone.is_some() {
            profile.phone = dto.phone;
        }
        if dto.birthday.is_some() {
            profile.birthday = dto.birthday;
        }
        if dto.gender.is_some() {
            profile.gender = dto.gender;
        }
        if dto.address.is_some() {
            profile.address = dto.address;
        }

        let profile = self.users.update_profile(&profile, dto.full_name).await?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;

        Ok(ProfileResponse::new(profile, user))
    }

    pub async fn create_resume(
        &self,
        user_id: Uuid,
        dto: CreateResumeRequest,
    ) -> Result<Resume, ServiceError> {
        dto.validate()?;
        let resume = self
            .resumes
            .create(user_id, &dto.title, dto.file_url)
            .await?;
        Ok(resume)
    }

    pub async fn find_resumes(&self, user_id: Uuid) -> Result<Vec<Resume>, ServiceError> {
        Ok(self.resumes.find_by_user(user_id).await?)
    }

    pub async fn list_cities(&self) -> Result<Vec<City>, ServiceError> {
        Ok(self.catalog.list_cities().await?)
    }

    pub async fn list_districts(&self, city_id: i32) -> Result<Vec<District>, ServiceError> {
        if self.catalog.find_city(city_id).await?.is_none() {
            return Err(ServiceError::not_found("City"));
        }
        Ok(self.catalog.list_districts(city_id).await?)
    }

    pub async fn list_careers(&self) -> Result<Vec<Career>, ServiceError> {
        Ok(self.catalog.list_careers().await?)
    }
}
