/*
 * Renderer Module
 *
 * This module turns the wing into something nannou can draw.
 * nannou's Draw API is two dimensional, so feathers are projected through
 * the orbit camera on the CPU, shaded with a single directional light plus
 * ambient (two-sided Lambert) and drawn back to front.
 *
 * The projected scene is built once per update and only drawn in view.
 */

use std::cmp::Ordering;

use nannou::prelude::*;

use crate::app::Model;
use crate::camera::Camera;
use crate::ui;
use crate::wing::Wing;

pub const AMBIENT: f32 = 0.2;
pub const LIGHT_COLOR: [f32; 3] = [1.0, 0.96, 0.9];

pub fn light_direction() -> Vec3 {
    vec3(1.0, 3.0, 2.0).normalize()
}

// One projected, lit triangle
#[derive(Clone, Copy, Debug)]
pub struct ShadedTriangle {
    pub points: [Vec2; 3],
    pub depth: f32,
    pub color: [f32; 3],
}

// Everything view needs, already in window space
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub triangles: Vec<ShadedTriangle>,
    pub curve: Vec<Vec2>,
    pub control_points: Vec<Vec2>,
}

// Two-sided Lambert shading of a surface with the given normal
pub fn shade(normal: Vec3, base: [f32; 3]) -> [f32; 3] {
    let diffuse = normal.dot(light_direction()).abs();
    let mut color = [0.0; 3];
    for i in 0..3 {
        color[i] = (base[i] * (AMBIENT + diffuse * LIGHT_COLOR[i])).min(1.0);
    }
    color
}

// Project and light the whole wing for the current camera
pub fn build_scene(wing: &Wing, camera: &Camera, window_rect: Rect, feather_color: [f32; 3]) -> Scene {
    let view_projection = camera.view_projection(window_rect.w() / window_rect.h());
    let project = |p: Vec3| camera.world_to_screen(p, &view_projection, window_rect);

    let mut triangles = Vec::with_capacity(wing.triangle_count());
    let mut world = Vec::with_capacity(wing.mesh.positions.len());

    for feather in &wing.feathers {
        let matrix = feather.transform.matrix();
        world.clear();
        world.extend(wing.mesh.positions.iter().map(|&p| matrix.transform_point3(p)));

        for &[a, b, c] in &wing.mesh.triangles {
            let (a, b, c) = (world[a as usize], world[b as usize], world[c as usize]);
            let normal = (b - a).cross(c - a);
            if normal.length_squared() == 0.0 {
                continue;
            }
            // Drop triangles that cross the near plane rather than clip them
            let (pa, pb, pc) = match (project(a), project(b), project(c)) {
                (Some(pa), Some(pb), Some(pc)) => (pa, pb, pc),
                _ => continue,
            };
            triangles.push(ShadedTriangle {
                points: [pa.screen, pb.screen, pc.screen],
                depth: (pa.depth + pb.depth + pc.depth) / 3.0,
                color: shade(normal.normalize(), feather_color),
            });
        }
    }

    // Painter's algorithm: furthest first
    triangles.sort_by(|x, y| y.depth.partial_cmp(&x.depth).unwrap_or(Ordering::Equal));

    Scene {
        triangles,
        curve: wing.samples.iter().filter_map(|&p| project(p)).map(|p| p.screen).collect(),
        control_points: wing.control_points.iter().filter_map(|&p| project(p)).map(|p| p.screen).collect(),
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let [r, g, b] = model.params.sky_color;
    draw.background().color(rgb(r, g, b));

    for triangle in &model.scene.triangles {
        let [r, g, b] = triangle.color;
        draw.polygon()
            .color(rgb(r, g, b))
            .points(triangle.points.iter().cloned());
    }

    if model.params.show_curve {
        draw.polyline()
            .weight(2.0)
            .points(model.scene.curve.iter().cloned())
            .color(WHITE);

        for point in &model.scene.control_points {
            draw.ellipse()
                .xy(*point)
                .radius(4.0)
                .no_fill()
                .stroke(ORANGE)
                .stroke_weight(1.5);
        }
    }

    if model.params.show_debug {
        ui::draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        tracing::error!("failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        tracing::error!("failed to draw ui: {:?}", err);
    }
}
