/*
 * Config Module
 *
 * Optional TOML startup configuration. Every field is optional; anything
 * missing keeps the built-in default from WingParams and KeyframeRing.
 *
 *     [wing]
 *     control_points = [[0, 0, 0], [1, -1, 0], [2, 1, 0], [5, -1, 0]]
 *     distribution = 6
 *     layers = 2
 *
 *     [[keyframes]]
 *     offsets = [[0, 0, 0], [0, 0.8, 0.3], [-0.3, 2, 0.6], [-1, 3, 1]]
 */

use std::fs;
use std::path::Path;

use nannou::prelude::*;
use serde::Deserialize;

use crate::error::{Result, WingError};
use crate::keyframe::{Keyframe, KeyframeRing};
use crate::params::WingParams;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WingConfig {
    pub wing: WingSection,
    pub keyframes: Vec<KeyframeConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WingSection {
    pub control_points: Option<[[f32; 3]; 4]>,
    pub distribution: Option<u32>,
    pub layers: Option<u32>,
    pub feather_length: Option<f32>,
    pub feather_width: Option<f32>,
    pub feather_color: Option<[f32; 3]>,
    pub sky_color: Option<[f32; 3]>,
    pub wind_speed: Option<f32>,
    pub wind_direction: Option<[f32; 3]>,
    pub flap_speed: Option<f32>,
    pub show_curve: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KeyframeConfig {
    pub offsets: [[f32; 3]; 4],
}

impl WingConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| WingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&source).map_err(|source| WingError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), keyframes = config.keyframes.len(), "loaded config");
        Ok(config)
    }

    // Overwrite the parameters this config sets, then clamp to slider ranges
    pub fn apply(&self, params: &mut WingParams) {
        let wing = &self.wing;
        if let Some(points) = wing.control_points {
            params.control_points = points.map(to_vec3);
        }
        if let Some(distribution) = wing.distribution {
            params.distribution = distribution;
        }
        if let Some(layers) = wing.layers {
            params.layers = layers;
        }
        if let Some(length) = wing.feather_length {
            params.feather_length = length;
        }
        if let Some(width) = wing.feather_width {
            params.feather_width = width;
        }
        if let Some(color) = wing.feather_color {
            params.feather_color = color;
        }
        if let Some(color) = wing.sky_color {
            params.sky_color = color;
        }
        if let Some(speed) = wing.wind_speed {
            params.wind_speed = speed;
        }
        if let Some(direction) = wing.wind_direction {
            params.wind_direction = to_vec3(direction);
        }
        if let Some(speed) = wing.flap_speed {
            params.flap_speed = speed;
        }
        if let Some(show) = wing.show_curve {
            params.show_curve = show;
        }
        params.clamp_to_ranges();
    }

    // Keyframe ring from the config, or the default cycle if none are listed
    pub fn keyframes(&self) -> KeyframeRing {
        if self.keyframes.is_empty() {
            return KeyframeRing::default();
        }
        KeyframeRing::new(
            self.keyframes
                .iter()
                .map(|k| Keyframe::new(k.offsets.map(to_vec3)))
                .collect(),
        )
    }
}

fn to_vec3(v: [f32; 3]) -> Vec3 {
    vec3(v[0], v[1], v[2])
}
