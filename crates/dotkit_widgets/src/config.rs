//! Dot row configuration
//!
//! [`DotConfig`] is built in code with the builder methods, or loaded from
//! TOML:
//!
//! ```toml
//! count = 3
//! style = "typing"
//! size = 8.0
//! spacing = 4.0
//! duration = 0.6
//! color = "#3366FF"
//! ```
//!
//! Omitted keys take the [`DotConfig::default`] values.

use dotkit_core::Color;
use serde::Deserialize;
use thiserror::Error;

use crate::style::AnimationStyle;

/// Errors raised while validating or loading a [`DotConfig`]
#[derive(Error, Debug)]
pub enum DotConfigError {
    /// Dot diameter must be positive and finite
    #[error("invalid dot size {0}: must be a positive number")]
    InvalidSize(f32),

    /// Spacing must be non-negative and finite
    #[error("invalid dot spacing {0}: must be zero or a positive number")]
    InvalidSpacing(f32),

    /// Duration must be positive and finite
    #[error("invalid animation duration {0}s: must be a positive number")]
    InvalidDuration(f32),

    /// Color string is not `#RRGGBB` or `#RRGGBBAA`
    #[error("invalid color {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// TOML syntax or schema error
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, DotConfigError>;

/// Parameters of one dot row. Immutable once handed to a widget.
#[derive(Clone, Debug, PartialEq)]
pub struct DotConfig {
    /// Number of dots; zero renders nothing
    pub count: usize,
    pub style: AnimationStyle,
    /// Dot diameter
    pub size: f32,
    /// Edge-to-edge gap between neighbouring dots
    pub spacing: f32,
    /// Cycle length in seconds (spring styles settle on their own time)
    pub duration: f32,
    pub color: Color,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            count: 3,
            style: AnimationStyle::default(),
            size: 10.0,
            spacing: 8.0,
            duration: 0.6,
            color: Color::GRAY,
        }
    }
}

impl DotConfig {
    /// Create a config with the given count and style
    pub fn new(count: usize, style: AnimationStyle) -> Self {
        Self {
            count,
            style,
            ..Default::default()
        }
    }

    /// Set the dot diameter
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the gap between dots
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the cycle duration in seconds
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the dot color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Check the numeric parameters
    pub fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(DotConfigError::InvalidSize(self.size));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(DotConfigError::InvalidSpacing(self.spacing));
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(DotConfigError::InvalidDuration(self.duration));
        }
        Ok(())
    }

    /// Parse and validate a TOML config document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawDotConfig = toml::from_str(source)?;
        let config = raw.into_config()?;
        config.validate()?;
        Ok(config)
    }
}

/// On-disk shape of [`DotConfig`]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDotConfig {
    #[serde(default = "default_count")]
    count: usize,
    #[serde(default)]
    style: AnimationStyle,
    #[serde(default = "default_size")]
    size: f32,
    #[serde(default = "default_spacing")]
    spacing: f32,
    #[serde(default = "default_duration")]
    duration: f32,
    #[serde(default)]
    color: Option<String>,
}

fn default_count() -> usize {
    DotConfig::default().count
}

fn default_size() -> f32 {
    DotConfig::default().size
}

fn default_spacing() -> f32 {
    DotConfig::default().spacing
}

fn default_duration() -> f32 {
    DotConfig::default().duration
}

impl RawDotConfig {
    fn into_config(self) -> Result<DotConfig> {
        let color = match self.color {
            Some(hex) => parse_hex_color(&hex)?,
            None => DotConfig::default().color,
        };
        Ok(DotConfig {
            count: self.count,
            style: self.style,
            size: self.size,
            spacing: self.spacing,
            duration: self.duration,
            color,
        })
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
pub fn parse_hex_color(input: &str) -> Result<Color> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let invalid = || DotConfigError::InvalidColor(input.to_string());

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    match digits.len() {
        6 => Ok(Color::from_hex(value)),
        8 => Ok(Color::from_hex_rgba(value)),
        _ => Err(invalid()),
    }
}
