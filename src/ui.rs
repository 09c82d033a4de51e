/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It exposes every wing parameter, the keyframe poses of
 * the flapping cycle and the camera field of view.
 * Parameter change detection is handled by the ParamTracker.
 */

use nannou_egui::{egui, Egui};

use crate::camera::Camera;
use crate::debug::DebugInfo;
use crate::keyframe::{Keyframe, KeyframeRing};
use crate::params::{ParamChanges, ParamTracker, WingParams};

// What the panel asked for this frame
#[derive(Clone, Copy, Debug, Default)]
pub struct UiResponse {
    pub changes: ParamChanges,
    pub reset_wing: bool,
    pub reset_camera: bool,
}

const CONTROL_POINT_LABELS: [&str; 4] = ["Shoulder", "Elbow", "Wrist", "Tip"];

// Update the UI and report parameter changes and button presses
pub fn update_ui(
    egui: &mut Egui,
    params: &mut WingParams,
    tracker: &mut ParamTracker,
    keyframes: &mut KeyframeRing,
    camera: &mut Camera,
    debug_info: &DebugInfo,
) -> UiResponse {
    let mut response = UiResponse::default();

    // Take a snapshot of current parameter values for change detection
    tracker.take_snapshot(params);

    let ctx = egui.begin_frame();

    egui::Window::new("Wing Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Wing", |ui| {
                for (point, label) in params.control_points.iter_mut().zip(CONTROL_POINT_LABELS) {
                    ui.horizontal(|ui| {
                        ui.label(label);
                        ui.add(egui::DragValue::new(&mut point.x).speed(0.05).prefix("x: "));
                        ui.add(egui::DragValue::new(&mut point.y).speed(0.05).prefix("y: "));
                        ui.add(egui::DragValue::new(&mut point.z).speed(0.05).prefix("z: "));
                    });
                }
                if ui.button("Reset Wing").clicked() {
                    response.reset_wing = true;
                }
            });

            ui.collapsing("Feathers", |ui| {
                ui.add(egui::Slider::new(&mut params.distribution, WingParams::get_distribution_range()).text("Distribution"));
                ui.add(egui::Slider::new(&mut params.layers, WingParams::get_layers_range()).text("Layers"));
                ui.add(egui::Slider::new(&mut params.feather_length, WingParams::get_feather_length_range()).text("Feather Length"));
                ui.add(egui::Slider::new(&mut params.feather_width, WingParams::get_feather_width_range()).text("Feather Width"));
                ui.horizontal(|ui| {
                    ui.label("Feather Color");
                    ui.color_edit_button_rgb(&mut params.feather_color);
                });
            });

            ui.collapsing("Wind", |ui| {
                ui.add(egui::Slider::new(&mut params.wind_speed, WingParams::get_wind_speed_range()).text("Wind Speed"));
                ui.add(egui::Slider::new(&mut params.wind_direction.x, WingParams::get_wind_direction_range()).text("Direction X"));
                ui.add(egui::Slider::new(&mut params.wind_direction.y, WingParams::get_wind_direction_range()).text("Direction Y"));
                ui.add(egui::Slider::new(&mut params.wind_direction.z, WingParams::get_wind_direction_range()).text("Direction Z"));
            });

            ui.collapsing("Flapping", |ui| {
                ui.add(egui::Slider::new(&mut params.flap_speed, WingParams::get_flap_speed_range()).text("Flap Speed"));
                ui.checkbox(&mut params.pause_animation, "Pause Animation");
            });

            ui.collapsing("Keyframes", |ui| {
                keyframe_controls(ui, keyframes);
            });

            ui.collapsing("Camera", |ui| {
                ui.add(egui::Slider::new(&mut camera.fov_degrees, Camera::get_fov_range()).text("Field of View"));
                ui.label("Orbit: click and drag");
                ui.label("Zoom: mouse wheel or trackpad");
                if ui.button("Reset Camera").clicked() {
                    response.reset_camera = true;
                }
                ui.horizontal(|ui| {
                    ui.label("Sky Color");
                    ui.color_edit_button_rgb(&mut params.sky_color);
                });
            });

            ui.collapsing("Performance", |ui| {
                for line in debug_info.lines() {
                    ui.label(line);
                }
            });

            ui.checkbox(&mut params.show_curve, "Show Curve");
            ui.checkbox(&mut params.show_debug, "Show Debug Info");
        });

    response.changes = tracker.detect_changes(params);
    response
}

// Per-keyframe control point offsets, plus add/remove
fn keyframe_controls(ui: &mut egui::Ui, keyframes: &mut KeyframeRing) {
    ui.label(playback_order(keyframes));

    let head = keyframes.head_index();
    for (index, frame) in keyframes.frames_mut().iter_mut().enumerate() {
        let title = if index == head {
            format!("Keyframe {} (next)", index + 1)
        } else {
            format!("Keyframe {}", index + 1)
        };
        // Stable id so the section stays open while the head moves
        egui::CollapsingHeader::new(title).id_source(index).show(ui, |ui| {
            for (offset, label) in frame.offsets.iter_mut().zip(CONTROL_POINT_LABELS) {
                ui.horizontal(|ui| {
                    ui.label(label);
                    ui.add(egui::DragValue::new(&mut offset.x).speed(0.05).prefix("x: "));
                    ui.add(egui::DragValue::new(&mut offset.y).speed(0.05).prefix("y: "));
                    ui.add(egui::DragValue::new(&mut offset.z).speed(0.05).prefix("z: "));
                });
            }
        });
    }

    ui.horizontal(|ui| {
        if ui.button("Add Keyframe").clicked() {
            keyframes.push(Keyframe::default());
        }
        if ui.button("Remove Last").clicked() && keyframes.len() > 1 {
            keyframes.pop();
        }
    });
}

// e.g. "Playback: 2 > 3 > 1"
pub fn playback_order(keyframes: &KeyframeRing) -> String {
    let order: Vec<String> = keyframes.iter_from_head().map(|(index, _)| (index + 1).to_string()).collect();
    if order.is_empty() {
        return "Playback: no keyframes".to_string();
    }
    format!("Playback: {}", order.join(" > "))
}

// Draw debug information on the screen
pub fn draw_debug_info(draw: &nannou::Draw, debug_info: &DebugInfo, window_rect: nannou::geom::Rect) {
    let lines = debug_info.lines();

    // Create a background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = panel_x;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(text_x, y)
            .w(panel_width - margin)
            .left_justify()
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_order_starts_at_the_head() {
        let mut keyframes = KeyframeRing::new(vec![Keyframe::default(); 3]);
        assert_eq!(playback_order(&keyframes), "Playback: 1 > 2 > 3");
        keyframes.advance();
        assert_eq!(playback_order(&keyframes), "Playback: 2 > 3 > 1");
        assert_eq!(playback_order(&KeyframeRing::new(Vec::new())), "Playback: no keyframes");
    }
}
