// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
pub mod career;
pub mod city;
pub mod company;
pub mod company_image;
pub mod district;
pub mod job_post;
pub mod job_post_activity;
pub mod job_post_notification;
pub mod job_post_saved;
pub mod job_seeker_profile;
pub mod location;
pub mod resume;
pub mod user;
