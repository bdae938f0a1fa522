// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use alloc::string::String;
use core::fmt;

/// Names one numeric input of a [`DrawerConfig`](crate::DrawerConfig).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// Height of the display area.
    ScreenHeight,
    /// Height of the drawer panel.
    ContainerHeight,
    /// Space reserved above the up position.
    Offset,
    /// Distance the down position falls below the up position.
    DownDisplay,
    /// Y coordinate of the all-down position.
    AlldownDisplay,
}

impl ConfigField {
    /// Returns the option name as it appears in the configuration surface.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScreenHeight => "screen_height",
            Self::ContainerHeight => "container_height",
            Self::Offset => "offset",
            Self::DownDisplay => "down_display",
            Self::AlldownDisplay => "alldown_display",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a drawer configuration cannot produce any position.
///
/// A drawer with a rejected configuration never renders; see
/// [`DrawerState::set_config`](crate::DrawerState::set_config).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A numeric input is NaN or infinite.
    NonFinite {
        /// The offending input.
        field: ConfigField,
        /// The value that was supplied.
        value: f64,
    },
    /// The background color string could not be parsed.
    InvalidColor {
        /// The string that was supplied.
        input: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => {
                write!(f, "drawer option `{field}` must be finite, got {value}")
            }
            Self::InvalidColor { input } => {
                write!(f, "drawer background color {input:?} is not a valid CSS color")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Returns `value` if it is finite, otherwise a [`ConfigError::NonFinite`] for `field`.
pub(crate) fn ensure_finite(field: ConfigField, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}
