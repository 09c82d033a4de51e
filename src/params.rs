/*
 * Wing Parameters Module
 *
 * This module defines the WingParams struct that contains all the
 * adjustable parameters for the wing. These parameters can be modified
 * through the UI or seeded from a config file. The ParamTracker holds the
 * last frame's values and decides whether an edit requires rebuilding the
 * feathers or only affects rendering and animation.
 */

use std::f32::consts::PI;

use nannou::prelude::*;

use crate::curve::subdivisions_for;
use crate::placement::{PlacementParams, DEFAULT_PHASE_SEED};

// Parameters for the wing that can be adjusted via UI
#[derive(Clone, Debug)]
pub struct WingParams {
    // Rest pose of the wing bone
    pub control_points: [Vec3; 4],
    pub distribution: u32,
    pub layers: u32,
    pub feather_length: f32,
    pub feather_width: f32,
    pub feather_color: [f32; 3],
    pub sky_color: [f32; 3],
    pub wind_speed: f32,
    // Gust rotation about x, y and z in radians
    pub wind_direction: Vec3,
    pub flap_speed: f32,
    pub phase_seed: u64,
    pub show_curve: bool,
    pub show_debug: bool,
    pub pause_animation: bool,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    control_points: [Vec3; 4],
    distribution: u32,
    layers: u32,
    feather_length: f32,
    feather_width: f32,
    feather_color: [f32; 3],
    sky_color: [f32; 3],
    wind_speed: f32,
    wind_direction: Vec3,
    flap_speed: f32,
    show_curve: bool,
    show_debug: bool,
    pause_animation: bool,
}

// Result of comparing the parameters against the last snapshot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub rebuild: bool,
    pub ui_changed: bool,
}

impl Default for WingParams {
    fn default() -> Self {
        Self {
            control_points: [
                vec3(0.0, 0.0, 0.0),
                vec3(1.0, -1.0, 0.0),
                vec3(2.0, 1.0, 0.0),
                vec3(5.0, -1.0, 0.0),
            ],
            distribution: 6,
            layers: 2,
            feather_length: 0.8,
            feather_width: 1.0,
            feather_color: [0.667, 0.667, 0.667],
            sky_color: [0.53, 0.72, 0.9],
            wind_speed: 0.0,
            wind_direction: Vec3::ZERO,
            flap_speed: 0.0,
            phase_seed: DEFAULT_PHASE_SEED,
            show_curve: true,
            show_debug: false,
            pause_animation: false,
        }
    }
}

impl WingParams {
    // Inputs for the placement engine
    pub fn placement(&self) -> PlacementParams {
        PlacementParams {
            subdivisions: subdivisions_for(self.distribution),
            layers: self.layers,
            feather_length: self.feather_length,
            feather_width: self.feather_width,
            phase_seed: self.phase_seed,
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            control_points: self.control_points,
            distribution: self.distribution,
            layers: self.layers,
            feather_length: self.feather_length,
            feather_width: self.feather_width,
            feather_color: self.feather_color,
            sky_color: self.sky_color,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            flap_speed: self.flap_speed,
            show_curve: self.show_curve,
            show_debug: self.show_debug,
            pause_animation: self.pause_animation,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_distribution_range() -> std::ops::RangeInclusive<u32> {
        1..=20
    }

    pub fn get_layers_range() -> std::ops::RangeInclusive<u32> {
        0..=5
    }

    pub fn get_feather_length_range() -> std::ops::RangeInclusive<f32> {
        0.1..=2.0
    }

    pub fn get_feather_width_range() -> std::ops::RangeInclusive<f32> {
        0.2..=3.0
    }

    pub fn get_wind_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }

    pub fn get_wind_direction_range() -> std::ops::RangeInclusive<f32> {
        -PI..=PI
    }

    pub fn get_flap_speed_range() -> std::ops::RangeInclusive<f32> {
        0.0..=5.0
    }

    // Clamp values that may come from a config file into the slider ranges
    pub fn clamp_to_ranges(&mut self) {
        let clamp_range = |value: f32, range: std::ops::RangeInclusive<f32>| value.clamp(*range.start(), *range.end());
        self.distribution = self.distribution.clamp(*Self::get_distribution_range().start(), *Self::get_distribution_range().end());
        self.layers = self.layers.min(*Self::get_layers_range().end());
        self.feather_length = clamp_range(self.feather_length, Self::get_feather_length_range());
        self.feather_width = clamp_range(self.feather_width, Self::get_feather_width_range());
        self.wind_speed = clamp_range(self.wind_speed, Self::get_wind_speed_range());
        self.flap_speed = clamp_range(self.flap_speed, Self::get_flap_speed_range());
        let direction = Self::get_wind_direction_range();
        self.wind_direction = vec3(
            clamp_range(self.wind_direction.x, direction.clone()),
            clamp_range(self.wind_direction.y, direction.clone()),
            clamp_range(self.wind_direction.z, direction),
        );
    }
}

// Remembers the parameters as they were before the panel ran
#[derive(Clone, Debug, Default)]
pub struct ParamTracker {
    previous_values: Option<ParamSnapshot>,
}

impl ParamTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self, params: &WingParams) {
        self.previous_values = Some(params.snapshot());
    }

    // Check if any parameters have changed since the last snapshot
    pub fn detect_changes(&self, params: &WingParams) -> ParamChanges {
        let mut changes = ParamChanges::default();

        // If we don't have previous values, nothing has changed
        if let Some(prev) = &self.previous_values {
            if params.control_points != prev.control_points
                || params.distribution != prev.distribution
                || params.layers != prev.layers
                || params.feather_length != prev.feather_length
                || params.feather_width != prev.feather_width
            {
                changes.rebuild = true;
            }

            changes.ui_changed = *prev != params.snapshot();
        }

        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_snapshot_means_no_changes() {
        let tracker = ParamTracker::new();
        let mut params = WingParams::default();
        params.layers = 4;
        assert_eq!(tracker.detect_changes(&params), ParamChanges::default());
    }

    #[test]
    fn shape_edits_request_a_rebuild() {
        let mut tracker = ParamTracker::new();
        let mut params = WingParams::default();
        tracker.take_snapshot(&params);
        params.control_points[2].y += 0.5;
        assert_eq!(tracker.detect_changes(&params), ParamChanges { rebuild: true, ui_changed: true });

        tracker.take_snapshot(&params);
        params.distribution = 8;
        assert!(tracker.detect_changes(&params).rebuild);
    }

    #[test]
    fn cosmetic_edits_do_not_rebuild() {
        let mut tracker = ParamTracker::new();
        let mut params = WingParams::default();
        tracker.take_snapshot(&params);
        params.feather_color = [1.0, 0.0, 0.0];
        params.wind_speed = 1.0;
        assert_eq!(tracker.detect_changes(&params), ParamChanges { rebuild: false, ui_changed: true });
    }

    #[test]
    fn unchanged_params_report_nothing() {
        let mut tracker = ParamTracker::new();
        let params = WingParams { flap_speed: 2.0, ..Default::default() };
        tracker.take_snapshot(&params);
        assert_eq!(tracker.detect_changes(&params), ParamChanges::default());
    }

    #[test]
    fn placement_uses_distribution_for_subdivisions() {
        let params = WingParams::default();
        let placement = params.placement();
        assert_eq!(placement.subdivisions, 60);
        assert_eq!(placement.layers, 2);
    }

    #[test]
    fn clamp_pulls_values_into_ranges() {
        let mut params = WingParams {
            distribution: 0,
            layers: 12,
            feather_length: 9.0,
            wind_direction: vec3(10.0, -10.0, 0.5),
            ..Default::default()
        };
        params.clamp_to_ranges();
        assert_eq!(params.distribution, 1);
        assert_eq!(params.layers, 5);
        assert_eq!(params.feather_length, 2.0);
        assert_eq!(params.wind_direction, vec3(PI, -PI, 0.5));
    }
}
