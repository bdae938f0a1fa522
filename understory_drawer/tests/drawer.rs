// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_drawer` crate.
//!
//! These exercise the public API end to end: deriving geometry from a
//! configuration, the initial position, reacting to input changes, and the
//! callbacks fired as a gesture layer settles the drawer.

use kurbo::Point;
use understory_drawer::{
    BottomDrawer, DrawerCallbacks, DrawerConfig, DrawerEvent, DrawerPhase, DrawerPosition,
    DrawerState, DrawerStyle, GeometryAnomaly, ResetPolicy, derive_configuration, geometry,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}

#[derive(Debug, Default)]
struct Log {
    events: Vec<DrawerEvent>,
    anomalies: Vec<GeometryAnomaly>,
}

impl DrawerCallbacks for Log {
    fn on_expanded(&mut self) {
        self.events.push(DrawerEvent::Expanded);
    }

    fn on_collapsed(&mut self) {
        self.events.push(DrawerEvent::Collapsed);
    }

    fn on_geometry_anomaly(&mut self, anomaly: GeometryAnomaly) {
        self.anomalies.push(anomaly);
    }
}

#[test]
fn reference_scenario_start_up() {
    let config = DrawerConfig::new(800.0, 200.0).with_offset(50.0);
    let derived = derive_configuration(&config).unwrap();

    assert_eq!(derived.up_position, Point::new(0.0, 550.0));
    assert!(close(derived.down_display, 133.33));
    assert_eq!(derived.down_position.x, 0.0);
    assert!(close(derived.down_position.y, 683.33));
    assert_eq!(derived.all_down_position, Point::new(0.0, 0.0));

    let state = DrawerState::new(config).unwrap();
    assert_eq!(state.current_position(), Some(Point::new(0.0, 550.0)));
}

#[test]
fn reference_scenario_start_down() {
    let config = DrawerConfig::new(800.0, 200.0)
        .with_offset(50.0)
        .with_start_up(false);
    let state = DrawerState::new(config).unwrap();

    let current = state.current_position().unwrap();
    assert_eq!(current.x, 0.0);
    assert!(close(current.y, 683.33));
    assert_eq!(state.phase(), DrawerPhase::Settled(DrawerPosition::Down));
}

#[test]
fn formulas_hold_over_a_grid_of_inputs() {
    for screen_height in [480.0, 667.0, 812.0, 1366.0] {
        for container_height in [0.0, 120.0, 333.0, 2000.0] {
            for offset in [-30.0, 0.0, 64.5] {
                let config = DrawerConfig::new(screen_height, container_height)
                    .with_offset(offset)
                    .with_alldown_display(screen_height);
                let derived = config.derive().unwrap();

                assert_eq!(
                    derived.up_position.y,
                    screen_height - (container_height + offset)
                );
                assert_eq!(
                    derived.down_position.y,
                    derived.up_position.y + container_height / 1.5
                );
                assert_eq!(derived.toggle_threshold, container_height / 11.0);
                assert_eq!(derived.all_down_position, Point::new(0.0, screen_height));
                assert_eq!(config.derive(), Ok(derived));
            }
        }
    }
}

#[test]
fn all_down_ignores_other_inputs() {
    let a = DrawerConfig::new(800.0, 200.0).with_alldown_display(42.0);
    let b = DrawerConfig::new(300.0, 90.0)
        .with_offset(12.0)
        .with_down_display(Some(7.0))
        .with_alldown_display(42.0);
    assert_eq!(a.derive().unwrap().all_down_position, Point::new(0.0, 42.0));
    assert_eq!(b.derive().unwrap().all_down_position, Point::new(0.0, 42.0));
    assert_eq!(geometry::all_down_position(42.0), Point::new(0.0, 42.0));
}

#[test]
fn container_change_after_first_render_recomputes_everything() {
    let config = DrawerConfig::new(800.0, 200.0).with_offset(50.0);
    let mut drawer = BottomDrawer::new(config, Log::default()).unwrap();
    drawer.settle(DrawerPosition::Down);

    assert_eq!(drawer.set_container_height(330.0), Ok(true));
    let view = drawer.view().unwrap();
    assert_eq!(view.up_position, Point::new(0.0, 420.0));
    assert_eq!(view.down_position, Point::new(0.0, 640.0));
    assert_eq!(view.toggle_threshold, 30.0);
    assert_eq!(view.container_height, 330.0);
    assert_eq!(view.current_position, view.up_position);
}

#[test]
fn nothing_renders_before_configuration() {
    let state = DrawerState::default();
    assert!(!state.is_ready());
    assert_eq!(state.phase(), DrawerPhase::Unset);

    assert!(BottomDrawer::new(DrawerConfig::new(800.0, f64::NAN), Log::default()).is_err());
}

#[test]
fn gesture_session_fires_callbacks_on_settle_only() {
    let config = DrawerConfig::new(800.0, 300.0).with_down_display(Some(200.0));
    let mut drawer = BottomDrawer::new(config, Log::default()).unwrap();
    let threshold = drawer.view().unwrap().toggle_threshold;

    // Drag down past the threshold, then let the gesture layer settle.
    let up = drawer.view().unwrap().up_position;
    drawer.set_current_position(Point::new(0.0, up.y + threshold * 0.5));
    drawer.set_current_position(Point::new(0.0, up.y + threshold * 2.0));
    assert_eq!(drawer.phase(), DrawerPhase::Moving);
    assert!(drawer.callbacks().events.is_empty());

    assert_eq!(drawer.settle(DrawerPosition::Down), Some(DrawerEvent::Collapsed));
    assert_eq!(drawer.settle(DrawerPosition::Up), Some(DrawerEvent::Expanded));
    assert_eq!(drawer.settle(DrawerPosition::AllDown), None);

    let log = drawer.into_callbacks();
    assert_eq!(log.events, [DrawerEvent::Collapsed, DrawerEvent::Expanded]);
    assert!(log.anomalies.is_empty());
}

#[test]
fn off_screen_geometry_is_reported_but_still_renders() {
    let config = DrawerConfig::new(400.0, 500.0).with_down_display(Some(50.0));
    let drawer = BottomDrawer::new(config, Log::default()).unwrap();

    assert_eq!(
        drawer.callbacks().anomalies,
        [
            GeometryAnomaly::AboveScreen {
                position: DrawerPosition::Up,
                y: -100.0,
            },
            GeometryAnomaly::AboveScreen {
                position: DrawerPosition::Down,
                y: -50.0,
            },
        ]
    );
    assert_eq!(
        drawer.view().unwrap().current_position,
        Point::new(0.0, -100.0)
    );
}

#[test]
fn preserve_settled_policy_survives_config_changes() {
    let config = DrawerConfig::new(800.0, 200.0);
    let mut drawer = BottomDrawer::with_options(
        config,
        DrawerStyle::default(),
        ResetPolicy::PreserveSettled,
        Log::default(),
    )
    .unwrap();

    drawer.settle(DrawerPosition::Down);
    drawer.set_offset(100.0).unwrap();

    let view = drawer.view().unwrap();
    assert_eq!(view.current_position, view.down_position);
    assert_eq!(drawer.phase(), DrawerPhase::Settled(DrawerPosition::Down));
}
