// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kindred-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kindred and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::RangeInclusive;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 7;
pub const DEFAULT_MAX_DEPTH: u8 = 4;
pub const DEPTH_RANGE: RangeInclusive<u8> = MIN_DEPTH..=MAX_DEPTH;

/// Spacing rules for the placed cards. All values are in render units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LayoutConfig {
    pub card_width: f64,
    pub card_height: f64,
    /// Horizontal gap between neighbouring cards.
    pub base_gap: f64,
    /// Vertical gap between rows.
    pub vgap: f64,
    /// Minimum x/y of the normalised output.
    pub margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: 160.0,
            card_height: 60.0,
            base_gap: 20.0,
            vgap: 40.0,
            margin: 10.0,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must be a non-negative finite number (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("failed to read layout config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse layout config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LayoutConfig {
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&src)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("card_width", self.card_width), ("card_height", self.card_height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("base_gap", self.base_gap),
            ("vgap", self.vgap),
            ("margin", self.margin),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Horizontal distance between the centres of two adjacent cards.
    pub(crate) fn unit(&self) -> f64 {
        self.card_width + self.base_gap
    }

    /// Vertical distance between the tops of two adjacent rows.
    pub(crate) fn row_step(&self) -> f64 {
        self.card_height + self.vgap
    }
}
