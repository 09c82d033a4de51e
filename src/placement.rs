/*
 * Placement Module
 *
 * This module populates the sampled wing curve with feathers.
 * The curve is split into three regions (tertiaries near the body,
 * secondaries along the middle and primaries out at the tip) and each
 * region shapes its feathers with its own easing profile:
 * - Tertiaries: cubic pulse, long near the body
 * - Secondaries: parabola, fullest mid-wing
 * - Primaries: power curve, swept back toward the tip
 *
 * Layers stack duplicate feathers behind each other with graduated
 * scale and depth. Placement is deterministic: identical inputs always
 * produce the identical feather set, wind phases included.
 */

use std::f32::consts::{PI, TAU};
use std::ops::Range;

use nannou::prelude::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::easing::{cubic_pulse, lerp, parabola, power_curve};
use crate::feather::{Feather, Transform};

// Seed for per-feather wind phases when none is configured
pub const DEFAULT_PHASE_SEED: u64 = 0x5EED_F0E1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Tertiaries,
    Secondaries,
    Primaries,
}

impl Region {
    // Regions in the order feathers are emitted
    pub const PLACEMENT_ORDER: [Region; 3] = [Region::Primaries, Region::Secondaries, Region::Tertiaries];

    pub fn label(self) -> &'static str {
        match self {
            Region::Tertiaries => "tertiaries",
            Region::Secondaries => "secondaries",
            Region::Primaries => "primaries",
        }
    }

    // Fractional bounds of the region along the curve
    pub fn bounds(self) -> (f32, f32) {
        match self {
            Region::Tertiaries => (0.0, 0.25),
            Region::Secondaries => (0.25, 0.75),
            Region::Primaries => (0.75, 1.0),
        }
    }

    // Yaw of the first and last feather in the region
    pub fn yaw_bounds(self) -> (f32, f32) {
        match self {
            Region::Tertiaries => (PI / 8.0, PI / 16.0),
            Region::Secondaries => (PI / 16.0, 0.0),
            Region::Primaries => (0.0, -PI / 4.0),
        }
    }

    /// Sample indices covered by this region for a curve with `subdivisions`.
    ///
    /// Lower bounds are floored fractions of the subdivision count and the upper
    /// bound is exclusive, except for the primaries which run through the tip
    /// sample.
    pub fn sample_range(self, subdivisions: usize) -> Range<usize> {
        let (lower, upper) = self.bounds();
        let lower = (lower * subdivisions as f32).floor() as usize;
        let upper = match self {
            Region::Primaries => subdivisions + 1,
            _ => (upper * subdivisions as f32).floor() as usize,
        };
        lower..upper.max(lower)
    }

    // Divisor used to normalize a local index into [0, 1]
    fn span(self, subdivisions: usize) -> usize {
        let range = self.sample_range(subdivisions);
        match self {
            Region::Primaries => range.len().saturating_sub(1),
            _ => range.len(),
        }
    }

    // Length (local x) and width (local z) of a feather before the global width factor
    fn scale(self, i: usize, t: f32, span: usize, depth: f32, length: f32, layer_t: f32) -> (f32, f32) {
        match self {
            Region::Primaries => {
                let x = lerp(0.2, length, layer_t) + power_curve(t, 3.0, 1.0) / 2.0 + 0.3;
                (x, 1.0 + 0.2 * depth)
            }
            Region::Secondaries => {
                let x = lerp(0.3, length, layer_t) + lerp(0.1, 0.3, t) + parabola(t, 1.5) / 6.0;
                (x, 1.0 + 0.5 * depth)
            }
            Region::Tertiaries => {
                let x = lerp(0.3, length, layer_t) + cubic_pulse(0.0, span as f32 + 5.0, i as f32) / 2.0;
                (x, 2.0)
            }
        }
    }
}

// Inputs to the placement engine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementParams {
    pub subdivisions: usize,
    pub layers: u32,
    pub feather_length: f32,
    pub feather_width: f32,
    pub phase_seed: u64,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            subdivisions: 60,
            layers: 2,
            feather_length: 0.8,
            feather_width: 1.0,
            phase_seed: DEFAULT_PHASE_SEED,
        }
    }
}

// Rest orientation of the feather template: Euler XYZ (0, PI/2, -PI/2)
pub fn template_orientation() -> Quat {
    Quat::from_rotation_x(0.0) * Quat::from_rotation_y(PI / 2.0) * Quat::from_rotation_z(-PI / 2.0)
}

// Depth offset of a layer; the front layer (j == layers) sits on the curve
pub fn layer_offset(layers: u32, layer: u32) -> f32 {
    if layers == 0 {
        return 0.0;
    }
    (layers - layer) as f32 / (layers as f32 * 10.0)
}

// Place every feather for the given curve sample
pub fn place_feathers(samples: &[Vec3], params: &PlacementParams) -> Vec<Feather> {
    let mut rng = StdRng::seed_from_u64(params.phase_seed);
    let mut feathers = Vec::new();
    let subdivisions = params.subdivisions.min(samples.len().saturating_sub(1));

    for region in Region::PLACEMENT_ORDER {
        let range = region.sample_range(subdivisions);
        let span = region.span(subdivisions);
        if range.is_empty() || span == 0 {
            continue;
        }
        let (yaw_start, yaw_end) = region.yaw_bounds();

        for (i, &sample) in samples[range.clone()].iter().enumerate() {
            let t = i as f32 / span as f32;

            for j in (0..=params.layers).rev() {
                // Back layers are thinned out: layer j only keeps every (layers - j + 1)th sample
                if i % (params.layers - j + 1) as usize != 0 {
                    continue;
                }

                let depth = (params.layers - j) as f32;
                let layer_t = if params.layers == 0 { 1.0 } else { j as f32 / params.layers as f32 };
                let (length, width) = region.scale(i, t, span, depth, params.feather_length, layer_t);
                let offset = layer_offset(params.layers, j);

                let transform = Transform {
                    position: sample + Vec3::new(0.0, 0.0, offset),
                    rotation: template_orientation() * Quat::from_rotation_y(lerp(yaw_start, yaw_end, t)),
                    scale: Vec3::new(length, 1.0, width * params.feather_width),
                };
                let phase = rng.gen_range(0.0..TAU);

                feathers.push(Feather::new(region, range.start + i, j, offset, phase, transform));
            }
        }
    }

    feathers
}
