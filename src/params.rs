/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the flocking simulation. These parameters can
 * be modified through the UI. It also provides methods for parameter change
 * detection so the app module can react to slider edits.
 */

use std::f32::consts::PI;
use std::ops::RangeInclusive;

// Parameters for the simulation that can be adjusted via UI
pub struct SimulationParams {
    pub num_boids: usize,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub perception_radius: f32,
    pub max_speed: f32,
    pub max_force: f32,
    /// Half-angle of the field of view in radians; PI or wider sees everything.
    pub field_of_view: f32,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
struct ParamSnapshot {
    num_boids: usize,
    perception_radius: f32,
    max_speed: f32,
    max_force: f32,
    field_of_view: f32,
    show_debug: bool,
    pause_simulation: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 50,
            canvas_width: 800.0,
            canvas_height: 600.0,
            perception_radius: 75.0,
            max_speed: 5.0,
            max_force: 0.3,
            field_of_view: PI,
            show_debug: false,
            pause_simulation: false,
            // Initialize with no previous values
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Boids closer than this repel each other
    pub fn separation_radius(&self) -> f32 {
        self.perception_radius / 2.0
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(ParamSnapshot {
            num_boids: self.num_boids,
            perception_radius: self.perception_radius,
            max_speed: self.max_speed,
            max_force: self.max_force,
            field_of_view: self.field_of_view,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        });
    }

    // Check if any parameters have changed since the last snapshot
    // Returns a tuple of (should_reset_boids, num_boids_changed, any_ui_changed)
    pub fn detect_changes(&self) -> (bool, bool, bool) {
        let mut num_boids_changed = false;
        let mut ui_changed = false;

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if self.num_boids != prev.num_boids {
                num_boids_changed = true;
                ui_changed = true;
            }

            if self.perception_radius != prev.perception_radius
                || self.max_speed != prev.max_speed
                || self.max_force != prev.max_force
                || self.field_of_view != prev.field_of_view
                || self.show_debug != prev.show_debug
                || self.pause_simulation != prev.pause_simulation
            {
                ui_changed = true;
            }
        }

        // The first element (should_reset_boids) is set by the UI when the
        // reset button is clicked
        (false, num_boids_changed, ui_changed)
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> RangeInclusive<usize> {
        10..=500
    }

    pub fn get_perception_radius_range() -> RangeInclusive<f32> {
        10.0..=150.0
    }

    pub fn get_max_speed_range() -> RangeInclusive<f32> {
        1.0..=10.0
    }

    pub fn get_max_force_range() -> RangeInclusive<f32> {
        0.05..=1.0
    }

    pub fn get_field_of_view_range() -> RangeInclusive<f32> {
        0.0..=PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_standard_scene() {
        let params = SimulationParams::default();
        assert_eq!(params.num_boids, 50);
        assert_eq!(params.canvas_width, 800.0);
        assert_eq!(params.canvas_height, 600.0);
        assert_eq!(params.perception_radius, 75.0);
        assert_eq!(params.max_speed, 5.0);
        assert_eq!(params.max_force, 0.3);
        assert_eq!(params.field_of_view, PI);
        assert!(!params.show_debug);
        assert!(!params.pause_simulation);
    }

    #[test]
    fn separation_radius_is_half_the_perception_radius() {
        let mut params = SimulationParams::default();
        assert_eq!(params.separation_radius(), 37.5);

        params.perception_radius = 100.0;
        assert_eq!(params.separation_radius(), 50.0);
    }

    #[test]
    fn detect_changes_reports_edits_since_the_snapshot() {
        let mut params = SimulationParams::default();

        // No snapshot yet, so nothing counts as changed
        assert_eq!(params.detect_changes(), (false, false, false));

        params.take_snapshot();
        assert_eq!(params.detect_changes(), (false, false, false));

        params.max_speed = 7.0;
        assert_eq!(params.detect_changes(), (false, false, true));

        params.take_snapshot();
        params.num_boids = 80;
        let (_, num_boids_changed, ui_changed) = params.detect_changes();
        assert!(num_boids_changed);
        assert!(ui_changed);
    }
}
