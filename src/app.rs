/*
 * Application Module
 *
 * This module defines the main application model and logic for the wing viewer.
 * It handles the initialization and per-frame update; drawing lives in the
 * renderer module.
 *
 * Each frame:
 * - The parameter panel runs and reports what changed
 * - Shape changes rebuild the wing, everything else is picked up live
 * - The animator flaps the wing and applies wind
 * - The wing is projected into a scene for view to draw
 */

use std::path::PathBuf;

use clap::Parser;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::animator::Animator;
use crate::camera::Camera;
use crate::config::WingConfig;
use crate::debug::DebugInfo;
use crate::input::{mouse_moved, mouse_pressed, mouse_released, mouse_wheel, raw_window_event};
use crate::keyframe::KeyframeRing;
use crate::mesh::FeatherMesh;
use crate::params::{ParamTracker, WingParams};
use crate::renderer::{self, Scene};
use crate::ui;
use crate::wing::Wing;

// Command line options
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "bird_wing", about = "Procedural bird wing with wind and flapping")]
pub struct Cli {
    /// TOML file with initial wing parameters and keyframes
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Wavefront OBJ file used as the feather template
    #[arg(short, long)]
    pub feather_mesh: Option<PathBuf>,

    /// Seed for the per-feather wind phases
    #[arg(long)]
    pub seed: Option<u64>,
}

// Main model for the application
pub struct Model {
    pub wing: Wing,
    pub params: WingParams,
    pub tracker: ParamTracker,
    pub keyframes: KeyframeRing,
    pub animator: Animator,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
    pub scene: Scene,
    // Seconds of animation time; stands still while paused
    pub animation_time: f32,
}

// Parameters and keyframes from the command line, falling back to defaults
pub fn load_settings(cli: &Cli) -> (WingParams, KeyframeRing) {
    let mut params = WingParams::default();
    if let Some(seed) = cli.seed {
        params.phase_seed = seed;
    }

    let config = match &cli.config {
        Some(path) => WingConfig::load(path).unwrap_or_else(|err| {
            tracing::warn!("{}; using built-in defaults", err);
            WingConfig::default()
        }),
        None => WingConfig::default(),
    };
    config.apply(&mut params);

    (params, config.keyframes())
}

// Feather template from the command line, falling back to the built-in vane
pub fn load_feather_mesh(cli: &Cli) -> FeatherMesh {
    match &cli.feather_mesh {
        Some(path) => FeatherMesh::load_obj(path).unwrap_or_else(|err| {
            tracing::warn!("{}; using built-in feather", err);
            FeatherMesh::default()
        }),
        None => FeatherMesh::default(),
    }
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let cli = Cli::parse();

    let window_id = app
        .new_window()
        .title("Procedural Bird Wing")
        .size(1280, 800)
        .view(renderer::view)
        .mouse_moved(mouse_moved)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_wheel(mouse_wheel)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to create window");

    let window = app.window(window_id).expect("window was just created");

    // Create the UI
    let egui = Egui::from_window(&window);

    let (params, keyframes) = load_settings(&cli);
    let wing = Wing::new(params.control_points, params.placement(), load_feather_mesh(&cli));

    Model {
        wing,
        params,
        tracker: ParamTracker::new(),
        keyframes,
        animator: Animator::new(),
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(),
        mouse_position: Vec2::ZERO,
        scene: Scene::default(),
        animation_time: 0.0,
    }
}

// Put the wing back into its rest pose with the current parameters
pub fn rebuild_wing(model: &mut Model) {
    model.wing.reshape(model.params.control_points, model.params.placement());
    model.animator.reset();
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let response = ui::update_ui(
        &mut model.egui,
        &mut model.params,
        &mut model.tracker,
        &mut model.keyframes,
        &mut model.camera,
        &model.debug_info,
    );

    if response.reset_camera {
        model.camera.reset();
    }
    if response.changes.rebuild || response.reset_wing {
        rebuild_wing(model);
    }

    if !model.params.pause_animation {
        model.animation_time += update.since_last.as_secs_f32();
        let Model { wing, keyframes, animator, params, animation_time, .. } = model;
        animator.update(wing, keyframes, params, *animation_time);
    }

    model.scene = renderer::build_scene(&model.wing, &model.camera, app.window_rect(), model.params.feather_color);

    model.debug_info.feather_count = model.wing.feathers.len();
    model.debug_info.triangle_count = model.wing.triangle_count();
    model.debug_info.drawn_triangles = model.scene.triangles.len();
    model.debug_info.flap_step = model.animator.flap.step();
    model.debug_info.flap_step_count = model.animator.flap.step_count();
    model.debug_info.keyframe_head = model.keyframes.head_index();
    model.debug_info.keyframe_count = model.keyframes.len();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_all_options() {
        let cli = Cli::try_parse_from(["bird_wing", "--config", "wing.toml", "--feather-mesh", "feather.obj", "--seed", "7"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("wing.toml")));
        assert_eq!(cli.feather_mesh, Some(PathBuf::from("feather.obj")));
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let cli = Cli {
            config: Some(PathBuf::from("/no/such/wing.toml")),
            feather_mesh: Some(PathBuf::from("/no/such/feather.obj")),
            seed: Some(11),
        };
        let (params, keyframes) = load_settings(&cli);
        assert_eq!(params.phase_seed, 11);
        assert_eq!(params.control_points, WingParams::default().control_points);
        assert_eq!(keyframes, KeyframeRing::default());
        assert_eq!(load_feather_mesh(&cli), FeatherMesh::default());
    }
}
