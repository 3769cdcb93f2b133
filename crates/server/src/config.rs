//! Server configuration, read from a JSON file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tools::{brush, bucket};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub paint: PaintConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            paint: PaintConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Uses added to a brush per paint bucket.
    pub bucket_charge: u32,
    /// Most uses a brush can hold.
    pub brush_capacity: u32,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            bucket_charge: bucket::MAX_PAINTS,
            brush_capacity: brush::MAX_PAINT_USES,
        }
    }
}

impl ServerConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ServerConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        anyhow::ensure!(
            config.paint.brush_capacity > 0,
            "paint.brush_capacity must be positive"
        );
        Ok(config)
    }
}
