// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 分页请求，`page` 从 1 开始
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// 跳过的记录数 `(page - 1) * page_size`
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1) * self.page_size
    }
}

/// 分页结果
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// 满足条件的总记录数
    pub count: u64,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            count: self.count,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
