// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleName {
    /// 求职者
    #[default]
    JobSeeker,
    /// 招聘方
    Employer,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::JobSeeker => "JOB_SEEKER",
            RoleName::Employer => "EMPLOYER",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown role name: {0}")]
pub struct UnknownRoleError(pub String);

impl FromStr for RoleName {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JOB_SEEKER" => Ok(RoleName::JobSeeker),
            "EMPLOYER" => Ok(RoleName::Employer),
            other => Err(UnknownRoleError(other.to_string())),
        }
    }
}

/// 用户实体
///
/// 求职者拥有一个求职档案，招聘方拥有一家公司
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Argon2 PHC 格式哈希，永不序列化输出
    #[serde(skip_serializing, default)]
    pub password: String,
    pub full_name: String,
    pub role_name: RoleName,
    pub is_active: bool,
    pub is_verify_email: bool,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// 待创建的用户
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role_name: RoleName,
}

/// 求职者档案
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSeekerProfile {
    pub id: i32,
    pub user_id: Uuid,
    pub phone: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub city_id: Option<i32>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_round_trip() {
        assert_eq!("EMPLOYER".parse::<RoleName>().unwrap(), RoleName::Employer);
        assert_eq!(RoleName::JobSeeker.to_string(), "JOB_SEEKER");
        assert!("ADMIN".parse::<RoleName>().is_err());
        assert_eq!(
            serde_json::to_string(&RoleName::JobSeeker).unwrap(),
            "\"JOB_SEEKER\""
        );
    }
}
