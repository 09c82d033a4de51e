/*
 * Camera Module
 *
 * This module defines the orbit Camera that looks at the wing. It handles
 * zooming and orbiting and provides the perspective projection from world
 * space to nannou's window space.
 */

use nannou::prelude::*;

pub struct Camera {
    pub target: Vec3,
    // Angle around the y axis, 0 looks down -z
    pub yaw: f32,
    // Elevation above the xz plane
    pub pitch: f32,
    pub distance: f32,
    pub fov_degrees: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

// Point projected into window space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub screen: Vec2,
    // Distance along the view direction, larger is further away
    pub depth: f32,
}

const NEAR: f32 = 0.1;
const FAR: f32 = 500.0;
const MAX_PITCH: f32 = 1.5;
const ORBIT_SPEED: f32 = 0.01;

impl Camera {
    pub fn new() -> Self {
        Self::looking_at(vec3(5.0, 3.0, 15.0), vec3(5.0, 0.0, 0.0))
    }

    // Build an orbit camera from an eye position and a target
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(NEAR);
        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
            fov_degrees: 45.0,
            min_distance: 2.0,
            max_distance: 100.0,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    pub fn get_fov_range() -> std::ops::RangeInclusive<f32> {
        1.0..=179.0
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + vec3(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        let fov = self.fov_degrees.clamp(1.0, 179.0).to_radians();
        Mat4::perspective_rh(fov, aspect.max(1e-3), NEAR, FAR) * self.view()
    }

    // Project a world point into window space; None when behind the camera
    pub fn world_to_screen(&self, point: Vec3, view_projection: &Mat4, window_rect: Rect) -> Option<Projected> {
        let clip = *view_projection * point.extend(1.0);
        if clip.w <= NEAR {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let screen = vec2(ndc.x * window_rect.w() / 2.0, ndc.y * window_rect.h() / 2.0) + window_rect.xy();
        Some(Projected { screen, depth: clip.w })
    }

    // Handle mouse wheel events for zooming
    pub fn zoom(&mut self, scroll_delta: Vec2) {
        let zoom_factor = 1.0 - scroll_delta.y * 0.1;
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    // Start orbiting
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Orbit around the target while dragging
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;
            if delta.length_squared() > 0.0 {
                self.yaw -= delta.x * ORBIT_SPEED;
                self.pitch = (self.pitch - delta.y * ORBIT_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
                self.last_cursor_pos = position;
            }
        }
    }

    // End orbiting
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }

    pub fn reset(&mut self) {
        let fov = self.fov_degrees;
        *self = Self::new();
        self.fov_degrees = fov;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
