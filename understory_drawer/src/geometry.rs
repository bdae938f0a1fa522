// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position calculator: pure arithmetic over screen height and drawer options.
//!
//! All coordinates are screen-relative with the origin at the top of the
//! screen and `y` growing downwards. The horizontal component is always `0.0`.
//!
//! None of these functions validate their inputs. Negative or inverted results
//! are returned as computed; see [`crate::anomaly`] for advisory checks.
//!
//! ```
//! use kurbo::Point;
//! use understory_drawer::geometry;
//!
//! let up = geometry::up_position(800.0, 200.0, 50.0);
//! assert_eq!(up, Point::new(0.0, 550.0));
//!
//! let down = geometry::down_position(up, 100.0);
//! assert_eq!(down, Point::new(0.0, 650.0));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`

use kurbo::Point;

/// Divisor applied to the container height to obtain the toggle threshold.
pub const TOGGLE_THRESHOLD_DIVISOR: f64 = 11.0;

/// Divisor applied to the container height when no down display is given.
pub const DEFAULT_DOWN_DISPLAY_DIVISOR: f64 = 1.5;

/// Expanded coordinate: the drawer's top edge sits `container_height + offset`
/// above the bottom of the screen.
#[must_use]
pub fn up_position(screen_height: f64, container_height: f64, offset: f64) -> Point {
    Point::new(0.0, screen_height - (container_height + offset))
}

/// Collapsed coordinate, `down_display` below the expanded one.
#[must_use]
pub fn down_position(up_position: Point, down_display: f64) -> Point {
    Point::new(0.0, up_position.y + down_display)
}

/// Fully hidden coordinate.
#[must_use]
pub fn all_down_position(alldown_display: f64) -> Point {
    Point::new(0.0, alldown_display)
}

/// Drag distance required before the drawer flips between up and down.
#[must_use]
pub fn toggle_threshold(container_height: f64) -> f64 {
    container_height / TOGGLE_THRESHOLD_DIVISOR
}

/// Returns `down_display`, or two thirds of the container height when absent.
///
/// An explicit `Some(0.0)` is kept as is.
#[must_use]
pub fn resolve_down_display(container_height: f64, down_display: Option<f64>) -> f64 {
    down_display.unwrap_or(container_height / DEFAULT_DOWN_DISPLAY_DIVISOR)
}

/// Height of the spacer painted below the drawer content.
///
/// The spacer extends the drawer background past the bottom of the screen so
/// an overshooting drag never uncovers what lies behind the panel.
#[must_use]
pub fn footer_height(screen_height: f64) -> f64 {
    screen_height.max(0.0).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_position_subtracts_container_and_offset() {
        assert_eq!(up_position(800.0, 200.0, 50.0), Point::new(0.0, 550.0));
        assert_eq!(up_position(800.0, 200.0, 0.0), Point::new(0.0, 600.0));
    }

    #[test]
    fn up_position_may_go_negative() {
        // A drawer taller than the screen starts above the top edge.
        assert_eq!(up_position(400.0, 500.0, 20.0), Point::new(0.0, -120.0));
    }

    #[test]
    fn negative_offset_moves_the_drawer_down() {
        assert_eq!(up_position(800.0, 200.0, -50.0), Point::new(0.0, 650.0));
    }

    #[test]
    fn down_position_adds_down_display() {
        let up = Point::new(0.0, 550.0);
        assert_eq!(down_position(up, 20.0), Point::new(0.0, 570.0));
        assert_eq!(down_position(up, 0.0), up);
    }

    #[test]
    fn down_position_ignores_up_x() {
        let up = Point::new(42.0, 10.0);
        assert_eq!(down_position(up, 5.0), Point::new(0.0, 15.0));
    }

    #[test]
    fn all_down_position_is_independent() {
        assert_eq!(all_down_position(0.0), Point::ZERO);
        assert_eq!(all_down_position(900.0), Point::new(0.0, 900.0));
    }

    #[test]
    fn threshold_is_an_eleventh() {
        assert_eq!(toggle_threshold(220.0), 20.0);
        assert_eq!(toggle_threshold(200.0), 200.0 / 11.0);
    }

    #[test]
    fn down_display_falls_back_to_two_thirds() {
        assert_eq!(resolve_down_display(300.0, None), 200.0);
        assert_eq!(resolve_down_display(200.0, None), 200.0 / 1.5);
        assert_eq!(resolve_down_display(200.0, Some(40.0)), 40.0);
    }

    #[test]
    fn explicit_zero_down_display_is_kept() {
        assert_eq!(resolve_down_display(300.0, Some(0.0)), 0.0);
    }

    #[test]
    fn footer_is_square_root_of_screen() {
        assert_eq!(footer_height(900.0), 30.0);
        assert_eq!(footer_height(0.0), 0.0);
        assert_eq!(footer_height(-4.0), 0.0);
    }

    #[test]
    fn calculation_is_idempotent() {
        let a = up_position(812.0, 333.3, 17.25);
        let b = up_position(812.0, 333.3, 17.25);
        assert_eq!(a, b);
        assert_eq!(down_position(a, 12.5), down_position(b, 12.5));
    }
}
