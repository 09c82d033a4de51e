/*
 * Animator Module
 *
 * Per-frame wind and flapping state machine.
 *
 * Flapping walks the wing's control points toward the head keyframe in a
 * fixed number of equal steps, then rotates the keyframe ring and starts
 * over toward the next pose. Wind never touches the rest state: each
 * frame every feather is reset to its truth transform and a fresh flutter
 * is applied on top.
 */

use nannou::prelude::*;

use crate::keyframe::KeyframeRing;
use crate::params::WingParams;
use crate::wing::Wing;

// Speeds at or below this count as "off"
pub const EPSILON: f32 = 1e-3;

// Steps per keyframe transition at flap speed 1.0
pub const FLAP_BASE_STEPS: f32 = 30.0;

// Angular frequency of the wind flutter in radians per second
pub const WIND_FREQUENCY: f32 = 8.0;

// Flutter angle in radians per unit of wind speed
pub const WIND_AMPLITUDE: f32 = 0.08;

// Number of steps a keyframe transition takes at the given flap speed
pub fn step_count_for(flap_speed: f32) -> u32 {
    (FLAP_BASE_STEPS / flap_speed).round().max(1.0) as u32
}

#[derive(Clone, Debug, Default)]
pub struct FlapAnimator {
    // None until a transition has been planned
    step: Option<u32>,
    step_count: u32,
    offsets: [Vec3; 4],
}

impl FlapAnimator {
    pub fn step(&self) -> Option<u32> {
        self.step
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn reset(&mut self) {
        self.step = None;
    }

    /// Advance the flap by one frame.
    ///
    /// Returns true when this frame completed a transition and the ring moved
    /// on to the next keyframe.
    pub fn update(&mut self, wing: &mut Wing, keyframes: &mut KeyframeRing, rest: &[Vec3; 4], flap_speed: f32) -> bool {
        if flap_speed <= EPSILON {
            self.reset();
            return false;
        }

        let step = match self.step {
            Some(step) => step,
            None => {
                let target = match keyframes.head() {
                    Some(frame) => frame.target(rest),
                    None => return false,
                };
                self.step_count = step_count_for(flap_speed);
                let divisor = self.step_count as f32;
                for ((offset, goal), current) in self.offsets.iter_mut().zip(&target).zip(&wing.control_points) {
                    *offset = (*goal - *current) / divisor;
                }
                0
            }
        };

        wing.displace(&self.offsets);
        let step = step + 1;

        if step >= self.step_count {
            keyframes.advance();
            self.step = None;
            tracing::debug!(head = keyframes.head_index(), "flap reached keyframe");
            true
        } else {
            self.step = Some(step);
            false
        }
    }
}

// Rotation applied to a feather by the wind at a given time
pub fn wind_rotation(time: f32, phase: f32, speed: f32, direction: Vec3) -> Quat {
    let gust = Quat::from_rotation_x(direction.x) * Quat::from_rotation_y(direction.y) * Quat::from_rotation_z(direction.z);
    let flutter = (time * WIND_FREQUENCY + phase).sin() * speed * WIND_AMPLITUDE;
    gust * Quat::from_rotation_x(flutter)
}

#[derive(Clone, Debug, Default)]
pub struct Animator {
    pub flap: FlapAnimator,
    wind_active: bool,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wind_active(&self) -> bool {
        self.wind_active
    }

    // Forget any in-flight transition, e.g. after the wing was rebuilt
    pub fn reset(&mut self) {
        self.flap.reset();
        self.wind_active = false;
    }

    // Run one frame of flapping followed by wind
    pub fn update(&mut self, wing: &mut Wing, keyframes: &mut KeyframeRing, params: &WingParams, time: f32) {
        self.flap.update(wing, keyframes, &params.control_points, params.flap_speed);

        if params.wind_speed > EPSILON {
            for feather in &mut wing.feathers {
                let rotation = wind_rotation(time, feather.phase, params.wind_speed, params.wind_direction);
                feather.perturb(rotation);
            }
            self.wind_active = true;
        } else if self.wind_active {
            wing.restore_feathers();
            self.wind_active = false;
        }
    }
}
