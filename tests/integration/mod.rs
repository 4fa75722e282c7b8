// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod api_test;
pub mod auth_service_test;
pub mod helpers;
pub mod info_service_test;
pub mod job_service_test;
