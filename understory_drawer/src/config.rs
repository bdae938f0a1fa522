// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration and the values derived from it.

use kurbo::Point;

use crate::error::{ConfigError, ConfigField, ensure_finite};
use crate::geometry;
use crate::state::DrawerPosition;

/// Inputs driving the drawer geometry.
///
/// The screen height is an explicit input so hosts can feed a new value on
/// rotation or window resize.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Height of the display area.
    pub screen_height: f64,
    /// Height of the drawer panel.
    pub container_height: f64,
    /// Vertical space reserved above the up position (header, tab bar, ...).
    pub offset: f64,
    /// Distance the down position falls below the up position.
    ///
    /// `None` means two thirds of the container height.
    pub down_display: Option<f64>,
    /// Y coordinate of the fully hidden state.
    pub alldown_display: f64,
    /// Whether the drawer starts expanded.
    pub start_up: bool,
}

impl DrawerConfig {
    /// Creates a configuration with the default offset (`0`), no explicit
    /// down display, an all-down coordinate of `0` and `start_up` set.
    #[must_use]
    pub fn new(screen_height: f64, container_height: f64) -> Self {
        Self {
            screen_height,
            container_height,
            offset: 0.0,
            down_display: None,
            alldown_display: 0.0,
            start_up: true,
        }
    }

    /// Sets the screen height.
    #[must_use]
    pub fn with_screen_height(mut self, screen_height: f64) -> Self {
        self.screen_height = screen_height;
        self
    }

    /// Sets the space reserved above the up position.
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets whether the drawer starts expanded.
    #[must_use]
    pub fn with_start_up(mut self, start_up: bool) -> Self {
        self.start_up = start_up;
        self
    }

    /// Sets the distance between the up and down positions.
    #[must_use]
    pub fn with_down_display(mut self, down_display: Option<f64>) -> Self {
        self.down_display = down_display;
        self
    }

    /// Sets the y coordinate of the all-down position.
    #[must_use]
    pub fn with_alldown_display(mut self, alldown_display: f64) -> Self {
        self.alldown_display = alldown_display;
        self
    }

    /// Checks that every numeric input is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite(ConfigField::ScreenHeight, self.screen_height)?;
        ensure_finite(ConfigField::ContainerHeight, self.container_height)?;
        ensure_finite(ConfigField::Offset, self.offset)?;
        if let Some(down_display) = self.down_display {
            ensure_finite(ConfigField::DownDisplay, down_display)?;
        }
        ensure_finite(ConfigField::AlldownDisplay, self.alldown_display)?;
        Ok(())
    }

    /// Shorthand for [`derive_configuration`].
    pub fn derive(&self) -> Result<DerivedConfig, ConfigError> {
        derive_configuration(self)
    }
}

/// Values computed from a [`DrawerConfig`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DerivedConfig {
    /// Drag distance required to flip between up and down.
    pub toggle_threshold: f64,
    /// Resolved distance between the up and down positions.
    pub down_display: f64,
    /// Expanded coordinate.
    pub up_position: Point,
    /// Collapsed coordinate.
    pub down_position: Point,
    /// Fully hidden coordinate.
    pub all_down_position: Point,
}

impl DerivedConfig {
    /// Returns the coordinate of a named position.
    #[must_use]
    pub fn position(&self, position: DrawerPosition) -> Point {
        match position {
            DrawerPosition::Up => self.up_position,
            DrawerPosition::Down => self.down_position,
            DrawerPosition::AllDown => self.all_down_position,
        }
    }

    /// Returns the named position located exactly at `point`, if any.
    ///
    /// When several positions coincide, `Up` wins over `Down`, which wins
    /// over `AllDown`.
    #[must_use]
    pub fn position_at(&self, point: Point) -> Option<DrawerPosition> {
        [
            DrawerPosition::Up,
            DrawerPosition::Down,
            DrawerPosition::AllDown,
        ]
        .into_iter()
        .find(|&position| self.position(position) == point)
    }

    /// Returns the coordinate the drawer initially rests at.
    #[must_use]
    pub fn initial_position(&self, start_up: bool) -> Point {
        self.position(DrawerPosition::initial(start_up))
    }
}

/// Derives the threshold, resolved down display and the three coordinates.
///
/// This is a pure function of `config`: identical inputs always yield
/// identical outputs. Non-finite inputs are rejected; negative or inverted
/// geometry is returned as computed.
pub fn derive_configuration(config: &DrawerConfig) -> Result<DerivedConfig, ConfigError> {
    config.validate()?;

    let down_display = geometry::resolve_down_display(config.container_height, config.down_display);
    let up_position =
        geometry::up_position(config.screen_height, config.container_height, config.offset);

    Ok(DerivedConfig {
        toggle_threshold: geometry::toggle_threshold(config.container_height),
        down_display,
        up_position,
        down_position: geometry::down_position(up_position, down_display),
        all_down_position: geometry::all_down_position(config.alldown_display),
    })
}
