// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer widget model and its contract with the gesture/animation layer.
//!
//! [`BottomDrawer`] owns a [`DrawerState`], a [`DrawerStyle`] and a set of
//! [`DrawerCallbacks`]. It does not track pointers or animate anything; the
//! gesture layer reads a [`DrawerView`] each frame, reports drag progress
//! through [`BottomDrawer::set_current_position`] and reports settled states
//! through [`BottomDrawer::settle`].
//!
//! ```
//! use understory_drawer::{BottomDrawer, DrawerConfig, DrawerEvent, DrawerPosition, FnCallbacks};
//!
//! let mut expanded = 0;
//! let mut collapsed = 0;
//! let callbacks = FnCallbacks::new(|| expanded += 1, || collapsed += 1);
//!
//! let mut drawer = BottomDrawer::new(DrawerConfig::new(800.0, 200.0), callbacks).unwrap();
//! let view = drawer.view().unwrap();
//! assert_eq!(view.current_position, view.up_position);
//!
//! assert_eq!(drawer.settle(DrawerPosition::Down), Some(DrawerEvent::Collapsed));
//! assert_eq!(drawer.settle(DrawerPosition::Up), Some(DrawerEvent::Expanded));
//! drop(drawer);
//! assert_eq!((expanded, collapsed), (1, 1));
//! ```

use kurbo::{Point, Rect, RoundedRect, RoundedRectRadii};

use crate::anomaly::{GeometryAnomaly, check_geometry};
use crate::config::{DerivedConfig, DrawerConfig};
use crate::error::ConfigError;
use crate::geometry;
use crate::state::{DrawerPhase, DrawerPosition, DrawerState, ResetPolicy};
use crate::style::DrawerStyle;

/// Notification emitted when the drawer settles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DrawerEvent {
    /// Settled in the up position.
    Expanded,
    /// Settled in the down position.
    Collapsed,
}

impl DrawerEvent {
    /// Returns the event fired when settling at `position`, if any.
    #[must_use]
    pub const fn for_position(position: DrawerPosition) -> Option<Self> {
        match position {
            DrawerPosition::Up => Some(Self::Expanded),
            DrawerPosition::Down => Some(Self::Collapsed),
            DrawerPosition::AllDown => None,
        }
    }
}

/// Callbacks invoked by a [`BottomDrawer`]. Every method defaults to a no-op.
pub trait DrawerCallbacks {
    /// Called when the drawer settles in the up position.
    fn on_expanded(&mut self) {}

    /// Called when the drawer settles in the down position.
    fn on_collapsed(&mut self) {}

    /// Called for each advisory anomaly found after a re-derivation.
    fn on_geometry_anomaly(&mut self, anomaly: GeometryAnomaly) {
        let _ = anomaly;
    }
}

impl DrawerCallbacks for () {}

/// [`DrawerCallbacks`] built from two closures.
pub struct FnCallbacks<E, C> {
    on_expanded: E,
    on_collapsed: C,
}

impl<E, C> FnCallbacks<E, C>
where
    E: FnMut(),
    C: FnMut(),
{
    /// Wraps the expanded and collapsed closures.
    pub fn new(on_expanded: E, on_collapsed: C) -> Self {
        Self {
            on_expanded,
            on_collapsed,
        }
    }
}

impl<E, C> core::fmt::Debug for FnCallbacks<E, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnCallbacks").finish_non_exhaustive()
    }
}

impl<E, C> DrawerCallbacks for FnCallbacks<E, C>
where
    E: FnMut(),
    C: FnMut(),
{
    fn on_expanded(&mut self) {
        (self.on_expanded)();
    }

    fn on_collapsed(&mut self) {
        (self.on_collapsed)();
    }
}

/// Everything the gesture/animation layer needs for one frame.
#[derive(Copy, Clone, Debug)]
pub struct DrawerView<'a> {
    /// Where the drawer currently is.
    pub current_position: Point,
    /// Drag distance required to flip between up and down.
    pub toggle_threshold: f64,
    /// Expanded coordinate.
    pub up_position: Point,
    /// Collapsed coordinate.
    pub down_position: Point,
    /// Fully hidden coordinate.
    pub all_down_position: Point,
    /// Height of the drawer panel.
    pub container_height: f64,
    /// Height of the spacer painted below the content.
    pub footer_height: f64,
    /// Appearance options.
    pub style: &'a DrawerStyle,
}

impl DrawerView<'_> {
    /// Returns the panel outline at the current position for a drawer `width` wide.
    ///
    /// The outline covers the content and the footer spacer.
    #[must_use]
    pub fn panel_rect(&self, width: f64) -> RoundedRect {
        let top = self.current_position.y;
        let rect = Rect::new(
            self.current_position.x,
            top,
            self.current_position.x + width,
            top + self.container_height + self.footer_height,
        );
        RoundedRect::from_rect(rect, self.corner_radii())
    }

    /// Returns the corner radii of the panel.
    #[must_use]
    pub fn corner_radii(&self) -> RoundedRectRadii {
        self.style.corner_radii()
    }
}

/// A draggable bottom drawer.
#[derive(Debug)]
pub struct BottomDrawer<C = ()> {
    state: DrawerState,
    style: DrawerStyle,
    callbacks: C,
}

impl<C: DrawerCallbacks> BottomDrawer<C> {
    /// Creates a drawer with the default style.
    ///
    /// Anomalies in the initial geometry are reported to `callbacks` right away.
    pub fn new(config: DrawerConfig, callbacks: C) -> Result<Self, ConfigError> {
        Self::with_options(config, DrawerStyle::default(), ResetPolicy::default(), callbacks)
    }

    /// Creates a drawer with an explicit style and reset policy.
    pub fn with_options(
        config: DrawerConfig,
        style: DrawerStyle,
        reset_policy: ResetPolicy,
        callbacks: C,
    ) -> Result<Self, ConfigError> {
        let mut drawer = Self {
            state: DrawerState::default().with_reset_policy(reset_policy),
            style,
            callbacks,
        };
        drawer.set_config(config)?;
        Ok(drawer)
    }

    /// Returns the position state.
    #[must_use]
    pub fn state(&self) -> &DrawerState {
        &self.state
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &DrawerStyle {
        &self.style
    }

    /// Replaces the style. Geometry is unaffected.
    pub fn set_style(&mut self, style: DrawerStyle) {
        self.style = style;
    }

    /// Returns the callbacks.
    #[must_use]
    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    /// Returns the callbacks mutably.
    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    /// Consumes the drawer, returning its callbacks.
    pub fn into_callbacks(self) -> C {
        self.callbacks
    }

    /// Returns the frame bundle, or `None` while nothing may be rendered.
    #[must_use]
    pub fn view(&self) -> Option<DrawerView<'_>> {
        let current_position = self.state.current_position()?;
        let config = self.state.config()?;
        let derived = self.state.derived()?;
        Some(DrawerView {
            current_position,
            toggle_threshold: derived.toggle_threshold,
            up_position: derived.up_position,
            down_position: derived.down_position,
            all_down_position: derived.all_down_position,
            container_height: config.container_height,
            footer_height: geometry::footer_height(config.screen_height),
            style: &self.style,
        })
    }

    /// Replaces the whole configuration; see [`DrawerState::set_config`].
    pub fn set_config(&mut self, config: DrawerConfig) -> Result<bool, ConfigError> {
        let result = self.state.set_config(config);
        self.after_update(result)
    }

    /// Sets the screen height, for example after a rotation.
    pub fn set_screen_height(&mut self, screen_height: f64) -> Result<bool, ConfigError> {
        let result = self.state.set_screen_height(screen_height);
        self.after_update(result)
    }

    /// Sets the drawer panel height.
    pub fn set_container_height(&mut self, container_height: f64) -> Result<bool, ConfigError> {
        let result = self.state.set_container_height(container_height);
        self.after_update(result)
    }

    /// Sets the space reserved above the up position.
    pub fn set_offset(&mut self, offset: f64) -> Result<bool, ConfigError> {
        let result = self.state.set_offset(offset);
        self.after_update(result)
    }

    /// Sets the distance between the up and down positions.
    pub fn set_down_display(&mut self, down_display: Option<f64>) -> Result<bool, ConfigError> {
        let result = self.state.set_down_display(down_display);
        self.after_update(result)
    }

    /// Sets the y coordinate of the all-down position.
    pub fn set_alldown_display(&mut self, alldown_display: f64) -> Result<bool, ConfigError> {
        let result = self.state.set_alldown_display(alldown_display);
        self.after_update(result)
    }

    /// Sets whether the drawer starts expanded.
    pub fn set_start_up(&mut self, start_up: bool) -> Result<bool, ConfigError> {
        let result = self.state.set_start_up(start_up);
        self.after_update(result)
    }

    /// Stores a drag coordinate reported by the gesture layer. Fires no callbacks.
    pub fn set_current_position(&mut self, point: Point) {
        self.state.set_current_position(point);
    }

    /// Records that the gesture layer settled the drawer at `position`.
    ///
    /// Fires at most one callback and returns the matching event. Nothing
    /// fires before the first derivation, nor for [`DrawerPosition::AllDown`].
    pub fn settle(&mut self, position: DrawerPosition) -> Option<DrawerEvent> {
        self.state.settle(position)?;
        let event = DrawerEvent::for_position(position)?;
        match event {
            DrawerEvent::Expanded => self.callbacks.on_expanded(),
            DrawerEvent::Collapsed => self.callbacks.on_collapsed(),
        }
        Some(event)
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DrawerPhase {
        self.state.phase()
    }

    fn after_update(&mut self, result: Result<bool, ConfigError>) -> Result<bool, ConfigError> {
        match &result {
            Ok(true) => {
                if let (Some(config), Some(derived)) = (self.state.config(), self.state.derived()) {
                    let screen_height = config.screen_height;
                    let derived = *derived;
                    self.report_geometry(&derived, screen_height);
                }
            }
            Ok(false) => {}
            Err(_err) => {
                #[cfg(feature = "log")]
                log::error!("rejected drawer configuration: {_err}");
            }
        }
        result
    }

    fn report_geometry(&mut self, derived: &DerivedConfig, screen_height: f64) {
        #[cfg(feature = "log")]
        log::debug!(
            "drawer geometry r{}: up {:?}, down {:?}, all-down {:?}, threshold {}",
            self.state.revision(),
            derived.up_position,
            derived.down_position,
            derived.all_down_position,
            derived.toggle_threshold,
        );
        for anomaly in check_geometry(derived, screen_height) {
            #[cfg(feature = "log")]
            log::warn!("{anomaly}");
            self.callbacks.on_geometry_anomaly(anomaly);
        }
    }
}
