//! Serializable pagination configuration.
//!
//! Hosts that keep table settings in a file can load the non-callback part of
//! the pagination options from TOML or JSON:
//!
//! ```toml
//! auto_reset_page_index = false
//! debug = true
//!
//! [initial_pagination]
//! page_size = 25
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::pagination::{PaginationState, UNKNOWN_PAGE_COUNT};

/// Pagination settings that can be stored outside the program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Global override for every auto-reset feature. `Some(false)` disables
    /// them all, `Some(true)` enables them all.
    pub auto_reset_all: Option<bool>,
    /// Reset the page index when the upstream row set is rebuilt.
    pub auto_reset_page_index: bool,
    /// Log recomputation of derived pagination values.
    pub debug: bool,
    /// Seed used by the reset operations.
    pub initial_pagination: Option<PaginationState>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            auto_reset_all: None,
            auto_reset_page_index: true,
            debug: false,
            initial_pagination: None,
        }
    }
}

impl PaginationConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects seeds that would violate the pagination invariants.
    ///
    /// Unlike runtime updates, a stored seed is not clamped.
    pub fn validate(&self) -> Result<()> {
        let Some(seed) = &self.initial_pagination else {
            return Ok(());
        };
        if seed.page_size < 1 {
            return Err(ConfigError::Invalid(format!(
                "initial page_size must be at least 1, got {}",
                seed.page_size
            )));
        }
        if seed.page_count < UNKNOWN_PAGE_COUNT {
            return Err(ConfigError::Invalid(format!(
                "initial page_count must be at least -1, got {}",
                seed.page_count
            )));
        }
        if !seed.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "initial page_index {} is outside 0..{}",
                seed.page_index, seed.page_count
            )));
        }
        Ok(())
    }
}
