/*
 * Procedural Bird Wing - Module Definitions
 *
 * This file defines the module structure for the wing viewer.
 * The geometry and animation modules (curve, placement, wing, animator)
 * do not depend on a window and can be used on their own; the remaining
 * modules wire them into a nannou application.
 */

// Re-export key components for easier access
pub use animator::Animator;
pub use app::Model;
pub use camera::Camera;
pub use curve::CubicBezier;
pub use debug::DebugInfo;
pub use error::WingError;
pub use feather::{Feather, Transform, TruthTransform};
pub use keyframe::{Keyframe, KeyframeRing};
pub use mesh::FeatherMesh;
pub use params::{ParamTracker, WingParams};
pub use placement::{place_feathers, PlacementParams, Region};
pub use wing::Wing;

// Define modules
pub mod animator;
pub mod app;
pub mod camera;
pub mod config;
pub mod curve;
pub mod debug;
pub mod easing;
pub mod error;
pub mod feather;
pub mod input;
pub mod keyframe;
pub mod mesh;
pub mod params;
pub mod placement;
pub mod renderer;
pub mod ui;
pub mod wing;
