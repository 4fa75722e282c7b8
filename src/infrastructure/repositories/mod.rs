// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于SeaORM实现领域层定义的仓库接口
pub mod catalog_repo_impl;
pub mod company_repo_impl;
pub mod job_post_activity_repo_impl;
pub mod job_post_repo_impl;
pub mod resume_repo_impl;
pub mod user_repo_impl;

use sea_orm::sea_query::LikeExpr;

const LIKE_ESCAPE: char = '\\';

/// 转义 LIKE 通配符，使 `%`、`_` 与转义符按字面量匹配
fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// 构造子串匹配的 LIKE 模式
pub(crate) fn contains_pattern(keyword: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(keyword))).escape(LIKE_ESCAPE)
}
