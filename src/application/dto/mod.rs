// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod auth_dto;
pub mod info_dto;
pub mod job_post_dto;
pub mod location_dto;
