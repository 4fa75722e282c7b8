// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 用户（user）：账号、角色与求职者档案
/// - 公司（company）：公司、公司图片与地址
/// - 目录（catalog）：城市、区县与行业
/// - 简历（resume）：求职者上传的简历
/// - 招聘信息（job_post）：职位、投递记录与订阅通知
/// - 分页（pagination）：分页请求与结果
pub mod catalog;
pub mod company;
pub mod job_post;
pub mod pagination;
pub mod resume;
pub mod user;
