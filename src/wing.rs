/*
 * Wing Module
 *
 * The wing owns the live control points, the curve sample derived from
 * them and the feathers attached to that sample. Shape changes rebuild
 * the feathers from scratch; control-point motion (flapping) only moves
 * the existing feathers to their new attachment points.
 */

use nannou::prelude::*;

use crate::curve::CubicBezier;
use crate::feather::Feather;
use crate::mesh::FeatherMesh;
use crate::placement::{place_feathers, PlacementParams};

pub struct Wing {
    pub control_points: [Vec3; 4],
    pub samples: Vec<Vec3>,
    pub feathers: Vec<Feather>,
    pub placement: PlacementParams,
    // Template shared by every feather instance
    pub mesh: FeatherMesh,
}

impl Wing {
    pub fn new(control_points: [Vec3; 4], placement: PlacementParams, mesh: FeatherMesh) -> Self {
        let mut wing = Self {
            control_points,
            samples: Vec::new(),
            feathers: Vec::new(),
            placement,
            mesh,
        };
        wing.rebuild();
        wing
    }

    pub fn curve(&self) -> CubicBezier {
        CubicBezier::new(self.control_points)
    }

    // Regenerate the curve sample and every feather
    pub fn rebuild(&mut self) {
        self.regenerate_curve();
        self.feathers = place_feathers(&self.samples, &self.placement);
        tracing::info!(
            feathers = self.feathers.len(),
            subdivisions = self.placement.subdivisions,
            layers = self.placement.layers,
            "rebuilt wing"
        );
        for feather in &self.feathers {
            tracing::trace!(feather = %feather.name(), phase = feather.phase, "placed");
        }
    }

    // Replace the shape inputs and rebuild
    pub fn reshape(&mut self, control_points: [Vec3; 4], placement: PlacementParams) {
        self.control_points = control_points;
        self.placement = placement;
        self.rebuild();
    }

    pub fn regenerate_curve(&mut self) {
        self.samples = self.curve().sample(self.placement.subdivisions);
    }

    // Move existing feathers onto the current curve sample
    pub fn reposition_feathers(&mut self) {
        for feather in &mut self.feathers {
            if let Some(&sample) = self.samples.get(feather.attachment_index) {
                feather.reposition(sample);
            }
        }
    }

    // Shift the control points and carry the feathers along
    pub fn displace(&mut self, offsets: &[Vec3; 4]) {
        for (point, offset) in self.control_points.iter_mut().zip(offsets) {
            *point += *offset;
        }
        self.regenerate_curve();
        self.reposition_feathers();
    }

    pub fn restore_feathers(&mut self) {
        for feather in &mut self.feathers {
            feather.restore();
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.feathers.len() * self.mesh.triangle_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rest_points() -> [Vec3; 4] {
        [
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, -1.0, 0.0),
            vec3(2.0, 1.0, 0.0),
            vec3(5.0, -1.0, 0.0),
        ]
    }

    #[test]
    fn new_wing_is_populated() {
        let wing = Wing::new(rest_points(), PlacementParams::default(), FeatherMesh::default());
        assert_eq!(wing.samples.len(), 61);
        assert!(!wing.feathers.is_empty());
        assert_eq!(wing.triangle_count(), wing.feathers.len() * wing.mesh.triangle_count());
    }

    #[test]
    fn displace_moves_feathers_with_the_curve() {
        let mut wing = Wing::new(rest_points(), PlacementParams::default(), FeatherMesh::default());
        let count = wing.feathers.len();
        let lift = [vec3(0.0, 1.0, 0.0); 4];
        wing.displace(&lift);

        assert_eq!(wing.feathers.len(), count);
        for feather in &wing.feathers {
            let expected = wing.samples[feather.attachment_index] + vec3(0.0, 0.0, feather.layer_offset);
            assert_eq!(feather.truth.transform().position, expected);
        }
        // A uniform lift translates every sample by the same amount
        let original = CubicBezier::new(rest_points()).sample(60);
        for (moved, rest) in wing.samples.iter().zip(&original) {
            assert!((*moved - *rest - vec3(0.0, 1.0, 0.0)).length() < 1e-5);
        }
    }

    #[test]
    fn reshape_changes_feather_count() {
        let mut wing = Wing::new(rest_points(), PlacementParams::default(), FeatherMesh::default());
        let before = wing.feathers.len();
        let placement = PlacementParams { layers: 0, ..wing.placement };
        wing.reshape(rest_points(), placement);
        assert_eq!(wing.feathers.len(), 61);
        assert!(wing.feathers.len() < before);
    }
}
