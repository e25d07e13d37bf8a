//! Display palette configuration
//!
//! Colors used by the presentation adapter, with environment overrides.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SUCCESS_COLOR_VAR: &str = "PWD_CHECKLIST_SUCCESS_COLOR";
pub const FAILURE_COLOR_VAR: &str = "PWD_CHECKLIST_FAILURE_COLOR";
pub const FOREGROUND_COLOR_VAR: &str = "PWD_CHECKLIST_FOREGROUND_COLOR";
pub const ACCENT_COLOR_VAR: &str = "PWD_CHECKLIST_ACCENT_COLOR";
pub const BACKGROUND_COLOR_VAR: &str = "PWD_CHECKLIST_BACKGROUND_COLOR";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),
    #[error("Invalid value for {var}: {source}")]
    InvalidOverride {
        var: &'static str,
        #[source]
        source: Box<PaletteError>,
    },
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    /// Parses `#RRGGBB` (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaletteError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Colors of the checklist window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Met criterion.
    pub success: Color,
    /// Unmet criterion.
    pub failure: Color,
    /// Text before the first check, and the masked toggle icon.
    pub foreground: Color,
    /// Revealed toggle icon.
    pub accent: Color,
    pub background: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            success: Color::rgb(0x32, 0xCD, 0x32),
            failure: Color::rgb(0xFF, 0x00, 0x00),
            foreground: Color::rgb(0xEC, 0xF0, 0xF1),
            accent: Color::rgb(0x34, 0x98, 0xDB),
            background: Color::rgb(0x2C, 0x3E, 0x50),
        }
    }
}

impl Palette {
    /// Builds the palette from defaults plus environment overrides.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_CHECKLIST_SUCCESS_COLOR`
    /// - `PWD_CHECKLIST_FAILURE_COLOR`
    /// - `PWD_CHECKLIST_FOREGROUND_COLOR`
    /// - `PWD_CHECKLIST_ACCENT_COLOR`
    /// - `PWD_CHECKLIST_BACKGROUND_COLOR`
    ///
    /// Unset variables keep the default color.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::InvalidOverride` if a set variable is not `#RRGGBB`.
    pub fn from_env() -> Result<Self, PaletteError> {
        let defaults = Palette::default();
        Ok(Self {
            success: color_from_env(SUCCESS_COLOR_VAR, defaults.success)?,
            failure: color_from_env(FAILURE_COLOR_VAR, defaults.failure)?,
            foreground: color_from_env(FOREGROUND_COLOR_VAR, defaults.foreground)?,
            accent: color_from_env(ACCENT_COLOR_VAR, defaults.accent)?,
            background: color_from_env(BACKGROUND_COLOR_VAR, defaults.background)?,
        })
    }
}

fn color_from_env(var: &'static str, default: Color) -> Result<Color, PaletteError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Palette override rejected: {} = {:?}", var, value);
            PaletteError::InvalidOverride {
                var,
                source: Box::new(e),
            }
        }),
        Err(_) => Ok(default),
    }
}
