// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::company::{Company, NewCompany, NewLocation};
use crate::domain::models::user::{JobSeekerProfile, NewUser, User};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use uuid::Uuid;

/// 用户仓库特质
///
/// 定义用户与求职者档案的数据访问接口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据ID查找用户
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    /// 根据邮箱查找用户
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// 检查邮箱是否已注册
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;
    /// 在同一事务内创建求职者及其档案
    async fn create_job_seeker(
        &self,
        user: NewUser,
    ) -> Result<(User, JobSeekerProfile), RepositoryError>;
    /// 在同一事务内创建招聘方、公司地址与公司
    async fn create_employer(
        &self,
        user: NewUser,
        location: NewLocation,
        company: NewCompany,
    ) -> Result<(User, Company), RepositoryError>;
    /// 查找用户的求职者档案
    async fn find_profile_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<JobSeekerProfile>, RepositoryError>;
    /// 更新求职者档案，同时更新用户姓名
    async fn update_profile(
        &self,
        profile: &JobSeekerProfile,
        full_name: Option<String>,
    ) -> Result<JobSeekerProfile, RepositoryError>;
}
