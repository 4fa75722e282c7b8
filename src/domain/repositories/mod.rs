// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 用户仓库（user_repository）：用户与求职者档案
/// - 公司仓库（company_repository）：公司、公司地址与图片
/// - 目录仓库（catalog_repository）：城市、区县与行业
/// - 简历仓库（resume_repository）：求职者简历
/// - 招聘信息仓库（job_post_repository）：职位、浏览量与收藏
/// - 求职者行为仓库（job_post_activity_repository）：投递记录与订阅通知
pub mod catalog_repository;
pub mod company_repository;
pub mod job_post_activity_repository;
pub mod job_post_repository;
pub mod resume_repository;
pub mod user_repository;
