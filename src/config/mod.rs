// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. The catalog base
//! URL may additionally be overridden with the `CAMPFIRE_API_URL` environment
//! variable.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::RoyaltySplit;

const CONFIG_NAME: &str = "campfire";

pub const API_URL_ENV: &str = "CAMPFIRE_API_URL";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub catalog_base_url: String,
    pub fetch_timeout_ms: u64,
    pub init_timeout_ms: u64,
    pub default_volume: f64,
    pub listening_minutes: f64,
    pub royalty_splits: Vec<RoyaltySplit>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            catalog_base_url: "http://localhost:8081/api".to_string(),
            fetch_timeout_ms: 5_000,
            init_timeout_ms: 5_000,
            default_volume: 0.8,
            listening_minutes: 250.0,
            royalty_splits: vec![
                RoyaltySplit {
                    artist_name: "Tester Artist".to_string(),
                    amount: 2.50,
                },
                RoyaltySplit {
                    artist_name: "Bluesy Bob".to_string(),
                    amount: 1.80,
                },
            ],
        }
    }
}

impl AppConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    pub fn init_timeout(&self) -> Duration {
        Duration::from_millis(self.init_timeout_ms)
    }

    fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.catalog_base_url = url;
        }
        self
    }
}

pub fn load_config() -> AppConfig {
    let config = confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    config.with_env_override(std::env::var(API_URL_ENV).ok())
}
