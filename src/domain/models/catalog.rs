// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 城市
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: i32,
    pub name: String,
}

/// 区县
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: i32,
    pub name: String,
    pub city_id: i32,
}

/// 行业
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: i32,
    pub name: String,
}
