// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: headless geometry and position state for bottom drawers.
//!
//! A bottom drawer is a panel anchored to the bottom of the screen that the
//! user drags between an expanded ("up") and a collapsed ("down") position,
//! with an optional fully hidden ("all-down") position. This crate computes
//! those positions from a handful of inputs and holds the drawer's current
//! coordinate. It does **not** track pointers, animate, or render; a
//! gesture/animation layer on top reads the derived values and reports back
//! where the drawer went.
//!
//! - [`geometry`]: pure position arithmetic.
//! - [`DrawerConfig`] / [`derive_configuration`]: inputs and the derived
//!   threshold and coordinates.
//! - [`DrawerState`]: current position, reset on input changes.
//! - [`BottomDrawer`]: state + [`DrawerStyle`] + [`DrawerCallbacks`], and the
//!   [`DrawerView`] bundle handed to the gesture layer.
//! - [`anomaly`]: advisory checks for inverted or off-screen geometry.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_drawer::{BottomDrawer, DrawerConfig, DrawerEvent, DrawerPosition};
//!
//! // 800px tall screen, 200px drawer, 50px header above it.
//! let config = DrawerConfig::new(800.0, 200.0).with_offset(50.0);
//! let mut drawer = BottomDrawer::new(config, ()).unwrap();
//!
//! let view = drawer.view().unwrap();
//! assert_eq!(view.up_position, Point::new(0.0, 550.0));
//! assert_eq!(view.down_position.y, 550.0 + 200.0 / 1.5);
//! assert_eq!(view.all_down_position, Point::ZERO);
//! assert_eq!(view.current_position, view.up_position);
//!
//! // The gesture layer drags the drawer, then settles it collapsed.
//! drawer.set_current_position(Point::new(0.0, 600.0));
//! assert_eq!(drawer.settle(DrawerPosition::Down), Some(DrawerEvent::Collapsed));
//!
//! // Rotating the device feeds a new screen height.
//! drawer.set_screen_height(400.0).unwrap();
//! assert_eq!(drawer.view().unwrap().up_position, Point::new(0.0, 150.0));
//! ```
//!
//! ## Resetting on input changes
//!
//! By default every re-derivation moves the drawer back to its start position
//! (`start_up`), discarding wherever the user left it. Use
//! [`ResetPolicy::PreserveSettled`] to keep a settled drawer in its named
//! position instead.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's and Peniko's float backend.
//! - `log`: emit `log` records for recomputes, anomalies and rejected configurations.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod anomaly;
mod config;
mod drawer;
mod error;
pub mod geometry;
mod state;
mod style;

pub use anomaly::{Anomalies, GeometryAnomaly, check_geometry};
pub use config::{DerivedConfig, DrawerConfig, derive_configuration};
pub use drawer::{BottomDrawer, DrawerCallbacks, DrawerEvent, DrawerView, FnCallbacks};
pub use error::{ConfigError, ConfigField};
pub use state::{DrawerPhase, DrawerPosition, DrawerState, ResetPolicy};
pub use style::{DrawerStyle, parse_background};
