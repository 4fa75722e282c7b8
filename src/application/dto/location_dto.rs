// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::company::{Location, NewLocation};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 地址请求体
///
/// `city` 与 `district` 为目录ID，区县必须属于该城市
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LocationRequest {
    #[validate(range(min = 1))]
    pub city: i32,
    #[validate(range(min = 1))]
    pub district: i32,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<LocationRequest> for NewLocation {
    fn from(req: LocationRequest) -> Self {
        Self {
            city_id: req.city,
            district_id: req.district,
            address: req.address,
            lat: req.lat,
            lng: req.lng,
        }
    }
}

/// 地址响应体
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: i32,
    pub city: i32,
    pub district: i32,
    pub address: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            city: location.city_id,
            district: location.district_id,
            address: location.address,
            lat: location.lat,
            lng: location.lng,
        }
    }
}
