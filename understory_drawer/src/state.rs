// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position state holder: the drawer's current coordinate and its derived geometry.
//!
//! ## Usage
//!
//! 1) Build a [`DrawerState`] from a [`DrawerConfig`]; the initial position is
//!    chosen by [`DrawerConfig::start_up`].
//! 2) Whenever an input changes, call the matching setter. The geometry is
//!    re-derived synchronously and the current position is reset according to
//!    the [`ResetPolicy`].
//! 3) The gesture/animation layer reports drag progress with
//!    [`DrawerState::set_current_position`] and settled states with
//!    [`DrawerState::settle`].
//!
//! ```
//! use kurbo::Point;
//! use understory_drawer::{DrawerConfig, DrawerPosition, DrawerState};
//!
//! let config = DrawerConfig::new(800.0, 200.0).with_offset(50.0);
//! let mut state = DrawerState::new(config).unwrap();
//! assert_eq!(state.current_position(), Some(Point::new(0.0, 550.0)));
//!
//! state.settle(DrawerPosition::Down);
//! assert_eq!(state.settled(), Some(DrawerPosition::Down));
//!
//! // Changing an input resets the drawer to its start position.
//! state.set_offset(0.0).unwrap();
//! assert_eq!(state.current_position(), Some(Point::new(0.0, 600.0)));
//! ```

use kurbo::Point;

use crate::config::{DerivedConfig, DrawerConfig, derive_configuration};
use crate::error::ConfigError;

/// A named resting position of the drawer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DrawerPosition {
    /// Expanded.
    Up,
    /// Collapsed, partially visible.
    Down,
    /// Fully hidden.
    AllDown,
}

impl DrawerPosition {
    /// Returns the position a freshly configured drawer rests at.
    #[must_use]
    pub const fn initial(start_up: bool) -> Self {
        if start_up { Self::Up } else { Self::Down }
    }
}

/// Coarse lifecycle phase of a [`DrawerState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DrawerPhase {
    /// No configuration has been derived yet; nothing is rendered.
    Unset,
    /// Resting at a named position.
    Settled(DrawerPosition),
    /// At a coordinate that matches no named position, typically mid-drag.
    Moving,
}

/// What happens to the current position when the geometry is re-derived.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ResetPolicy {
    /// Always jump back to the start position.
    ///
    /// Any position the user dragged the drawer to is discarded.
    #[default]
    Always,
    /// Only the first derivation picks the start position.
    ///
    /// Afterwards a drawer resting at a named position stays at that named
    /// position (at its new coordinate); a drawer caught mid-drag is reset to
    /// the start position.
    PreserveSettled,
}

/// Holds the drawer configuration, the geometry derived from it, and the
/// current coordinate.
#[derive(Clone, Debug, Default)]
pub struct DrawerState {
    config: Option<DrawerConfig>,
    derived: Option<DerivedConfig>,
    current: Option<Point>,
    settled: Option<DrawerPosition>,
    reset_policy: ResetPolicy,
    revision: u64,
}

impl DrawerState {
    /// Creates a configured state resting at the start position.
    pub fn new(config: DrawerConfig) -> Result<Self, ConfigError> {
        let mut state = Self::default();
        state.set_config(config)?;
        Ok(state)
    }

    /// Sets the reset policy, returning `self`.
    #[must_use]
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Returns the reset policy.
    #[must_use]
    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    /// Sets the reset policy. Takes effect on the next re-derivation.
    pub fn set_reset_policy(&mut self, policy: ResetPolicy) {
        self.reset_policy = policy;
    }

    /// Returns the current configuration, if any was accepted.
    #[must_use]
    pub fn config(&self) -> Option<&DrawerConfig> {
        self.config.as_ref()
    }

    /// Returns the derived geometry, if any configuration was accepted.
    #[must_use]
    pub fn derived(&self) -> Option<&DerivedConfig> {
        self.derived.as_ref()
    }

    /// Returns `true` once the geometry has been derived and the drawer may render.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current coordinate, or `None` before the first derivation.
    #[must_use]
    pub fn current_position(&self) -> Option<Point> {
        self.current
    }

    /// Returns the named position the drawer rests at, if any.
    #[must_use]
    pub fn settled(&self) -> Option<DrawerPosition> {
        self.settled
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DrawerPhase {
        match (self.current, self.settled) {
            (None, _) => DrawerPhase::Unset,
            (Some(_), Some(position)) => DrawerPhase::Settled(position),
            (Some(_), None) => DrawerPhase::Moving,
        }
    }

    /// Returns a counter bumped on every re-derivation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the whole configuration.
    ///
    /// Returns `Ok(true)` if the geometry was re-derived, `Ok(false)` if the
    /// configuration is unchanged. On error the state is left untouched.
    pub fn set_config(&mut self, config: DrawerConfig) -> Result<bool, ConfigError> {
        if self.config.as_ref() == Some(&config) {
            return Ok(false);
        }
        let derived = derive_configuration(&config)?;

        let first = self.derived.is_none();
        let target = match self.reset_policy {
            ResetPolicy::Always => DrawerPosition::initial(config.start_up),
            ResetPolicy::PreserveSettled if first => DrawerPosition::initial(config.start_up),
            ResetPolicy::PreserveSettled => self
                .settled
                .unwrap_or(DrawerPosition::initial(config.start_up)),
        };

        self.config = Some(config);
        self.derived = Some(derived);
        self.current = Some(derived.position(target));
        self.settled = Some(target);
        self.revision = self.revision.wrapping_add(1);
        Ok(true)
    }

    /// Sets the screen height, for example after a rotation.
    ///
    /// Before the first configuration this is a no-op returning `Ok(false)`;
    /// the same holds for the other per-field setters.
    pub fn set_screen_height(&mut self, screen_height: f64) -> Result<bool, ConfigError> {
        self.update(|c| c.screen_height = screen_height)
    }

    /// Sets the drawer panel height.
    pub fn set_container_height(&mut self, container_height: f64) -> Result<bool, ConfigError> {
        self.update(|c| c.container_height = container_height)
    }

    /// Sets the space reserved above the up position.
    pub fn set_offset(&mut self, offset: f64) -> Result<bool, ConfigError> {
        self.update(|c| c.offset = offset)
    }

    /// Sets the distance between the up and down positions.
    pub fn set_down_display(&mut self, down_display: Option<f64>) -> Result<bool, ConfigError> {
        self.update(|c| c.down_display = down_display)
    }

    /// Sets the y coordinate of the all-down position.
    pub fn set_alldown_display(&mut self, alldown_display: f64) -> Result<bool, ConfigError> {
        self.update(|c| c.alldown_display = alldown_display)
    }

    /// Sets whether the drawer starts expanded.
    pub fn set_start_up(&mut self, start_up: bool) -> Result<bool, ConfigError> {
        self.update(|c| c.start_up = start_up)
    }

    fn update(&mut self, edit: impl FnOnce(&mut DrawerConfig)) -> Result<bool, ConfigError> {
        let Some(mut config) = self.config else {
            return Ok(false);
        };
        edit(&mut config);
        self.set_config(config)
    }

    /// Stores a coordinate reported by the gesture layer.
    ///
    /// If `point` matches a named position exactly, the drawer counts as
    /// settled there; otherwise it is [`DrawerPhase::Moving`]. Ignored before
    /// the first derivation.
    pub fn set_current_position(&mut self, point: Point) {
        let Some(derived) = &self.derived else {
            return;
        };
        self.settled = derived.position_at(point);
        self.current = Some(point);
    }

    /// Moves the drawer to a named position.
    ///
    /// Returns the new coordinate, or `None` before the first derivation.
    pub fn settle(&mut self, position: DrawerPosition) -> Option<Point> {
        let point = self.derived.as_ref()?.position(position);
        self.current = Some(point);
        self.settled = Some(position);
        Some(point)
    }
}
