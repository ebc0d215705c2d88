//! Collapse configuration
//!
//! Tunables for a [`CollapsingHeader`](crate::CollapsingHeader). Values can be
//! built in code or loaded from TOML:
//!
//! ```ignore
//! let config = CollapseConfig::from_toml_str(r#"
//!     minimum_header_height = 72.0
//!     always_collapse = false
//! "#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CollapseError, Result};

/// Default collapsed header height in points
pub const DEFAULT_MINIMUM_HEADER_HEIGHT: f32 = 60.0;

/// Default fade-in opacity gained per point of scroll once collapsed
pub const DEFAULT_FADE_IN_RATE: f32 = 3.0 / 1000.0;

/// Configuration for header collapse behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseConfig {
    /// Height of the header once fully collapsed (default: 60)
    pub minimum_header_height: f32,
    /// Pad the content's bottom inset when there isn't enough content to
    /// scroll the header fully closed (default: true)
    pub always_collapse: bool,
    /// Opacity per point of raw offset for fade-in elements (default: 3/1000)
    pub fade_in_rate: f32,
    /// Clamp fade-in opacity to `[0, 1]` (default: false)
    pub clamp_fade_in: bool,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            minimum_header_height: DEFAULT_MINIMUM_HEADER_HEIGHT,
            always_collapse: true,
            fade_in_rate: DEFAULT_FADE_IN_RATE,
            clamp_fade_in: false,
        }
    }
}

impl CollapseConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: CollapseConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CollapseError::Config(e.to_string()))
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if !self.minimum_header_height.is_finite() || self.minimum_header_height < 0.0 {
            return Err(CollapseError::InvalidMinimumHeight(
                self.minimum_header_height,
            ));
        }
        if !self.fade_in_rate.is_finite() {
            return Err(CollapseError::Config(format!(
                "fade_in_rate must be finite, got {}",
                self.fade_in_rate
            )));
        }
        Ok(())
    }

    /// Set the collapsed header height
    pub fn with_minimum_header_height(mut self, height: f32) -> Self {
        self.minimum_header_height = height;
        self
    }

    /// Enable or disable bottom-inset padding for short content
    pub fn with_always_collapse(mut self, always_collapse: bool) -> Self {
        self.always_collapse = always_collapse;
        self
    }

    /// Set the fade-in opacity rate
    pub fn with_fade_in_rate(mut self, rate: f32) -> Self {
        self.fade_in_rate = rate;
        self
    }

    /// Clamp fade-in opacity to `[0, 1]`
    pub fn with_clamped_fade_in(mut self, clamp: bool) -> Self {
        self.clamp_fade_in = clamp;
        self
    }

    /// Never pad content; skip ticks that can't fully collapse
    pub fn no_padding() -> Self {
        Self {
            always_collapse: false,
            ..Default::default()
        }
    }
}
