// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advisory checks for suspicious drawer geometry.
//!
//! Derivation never fails because of the shape of its result: an inverted
//! drawer or one placed off screen is still rendered. These checks let the
//! embedding application find out about it.

use core::fmt;

use smallvec::SmallVec;

use crate::config::DerivedConfig;
use crate::state::DrawerPosition;

/// A non-fatal oddity in derived drawer geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GeometryAnomaly {
    /// The up position lies below the down position.
    Inverted {
        /// Y coordinate of the up position.
        up_y: f64,
        /// Y coordinate of the down position.
        down_y: f64,
    },
    /// A named position lies above the top edge of the screen.
    AboveScreen {
        /// The position in question.
        position: DrawerPosition,
        /// Its y coordinate.
        y: f64,
    },
    /// A named position lies below the bottom edge of the screen.
    BelowScreen {
        /// The position in question.
        position: DrawerPosition,
        /// Its y coordinate.
        y: f64,
        /// The screen height it was compared against.
        screen_height: f64,
    },
}

impl fmt::Display for GeometryAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { up_y, down_y } => write!(
                f,
                "drawer up position ({up_y}) lies below its down position ({down_y})"
            ),
            Self::AboveScreen { position, y } => {
                write!(f, "drawer {position:?} position ({y}) is above the screen")
            }
            Self::BelowScreen {
                position,
                y,
                screen_height,
            } => write!(
                f,
                "drawer {position:?} position ({y}) is below the screen ({screen_height})"
            ),
        }
    }
}

/// Anomalies found by a single [`check_geometry`] pass.
pub type Anomalies = SmallVec<[GeometryAnomaly; 3]>;

/// Inspects the up and down positions of `derived` against the screen.
///
/// The all-down position is not checked; it hides the drawer and usually sits
/// at or past the bottom edge.
#[must_use]
pub fn check_geometry(derived: &DerivedConfig, screen_height: f64) -> Anomalies {
    let mut out = Anomalies::new();

    let up_y = derived.up_position.y;
    let down_y = derived.down_position.y;
    if up_y > down_y {
        out.push(GeometryAnomaly::Inverted { up_y, down_y });
    }

    for position in [DrawerPosition::Up, DrawerPosition::Down] {
        let y = derived.position(position).y;
        if y < 0.0 {
            out.push(GeometryAnomaly::AboveScreen { position, y });
        } else if y > screen_height {
            out.push(GeometryAnomaly::BelowScreen {
                position,
                y,
                screen_height,
            });
        }
    }

    out
}
