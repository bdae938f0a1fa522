// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual options passed through to the renderer.

use alloc::string::ToString;

use kurbo::RoundedRectRadii;
use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::error::ConfigError;

/// Appearance of the drawer panel.
///
/// None of these options affect the drawer geometry.
#[derive(Copy, Clone, Debug)]
pub struct DrawerStyle {
    /// Fill color of the panel and its footer spacer.
    pub background_color: Color,
    /// Whether the top corners are rounded by the renderer.
    pub rounded_edges: bool,
    /// Whether a drop shadow is rendered.
    pub shadow: bool,
    /// Radius applied to every corner without a specific radius.
    pub border_radius: f64,
    /// Top-left radius, overriding `border_radius`.
    pub border_top_left_radius: Option<f64>,
    /// Top-right radius, overriding `border_radius`.
    pub border_top_right_radius: Option<f64>,
    /// Bottom-right radius, overriding `border_radius`.
    pub border_bottom_right_radius: Option<f64>,
    /// Bottom-left radius, overriding `border_radius`.
    pub border_bottom_left_radius: Option<f64>,
}

impl Default for DrawerStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            rounded_edges: true,
            shadow: true,
            border_radius: 0.0,
            border_top_left_radius: None,
            border_top_right_radius: None,
            border_bottom_right_radius: None,
            border_bottom_left_radius: None,
        }
    }
}

impl DrawerStyle {
    /// Sets the background color.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Sets the background color from a CSS color string such as `"#ffffff"`.
    pub fn with_background_css(mut self, css: &str) -> Result<Self, ConfigError> {
        self.background_color = parse_background(css)?;
        Ok(self)
    }

    /// Sets whether the top corners are rounded.
    #[must_use]
    pub fn with_rounded_edges(mut self, rounded_edges: bool) -> Self {
        self.rounded_edges = rounded_edges;
        self
    }

    /// Sets whether a drop shadow is rendered.
    #[must_use]
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    /// Sets the radius shared by all corners.
    #[must_use]
    pub fn with_border_radius(mut self, radius: f64) -> Self {
        self.border_radius = radius;
        self
    }

    /// Sets per-corner radii, in top-left, top-right, bottom-right, bottom-left order.
    #[must_use]
    pub fn with_corner_radii(
        mut self,
        top_left: Option<f64>,
        top_right: Option<f64>,
        bottom_right: Option<f64>,
        bottom_left: Option<f64>,
    ) -> Self {
        self.border_top_left_radius = top_left;
        self.border_top_right_radius = top_right;
        self.border_bottom_right_radius = bottom_right;
        self.border_bottom_left_radius = bottom_left;
        self
    }

    /// Resolves the four corner radii.
    #[must_use]
    pub fn corner_radii(&self) -> RoundedRectRadii {
        let base = self.border_radius;
        RoundedRectRadii::new(
            self.border_top_left_radius.unwrap_or(base),
            self.border_top_right_radius.unwrap_or(base),
            self.border_bottom_right_radius.unwrap_or(base),
            self.border_bottom_left_radius.unwrap_or(base),
        )
    }
}

/// Parses a CSS color string into an sRGB color.
pub fn parse_background(css: &str) -> Result<Color, ConfigError> {
    parse_color(css)
        .map(|color| color.to_alpha_color::<Srgb>())
        .map_err(|_| ConfigError::InvalidColor {
            input: css.to_string(),
        })
}
