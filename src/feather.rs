/*
 * Feather Module
 *
 * This module defines a single feather instance attached to the wing curve,
 * its transform, and the truth snapshot the wind animation reverts to.
 */

use nannou::prelude::{Mat4, Quat, Vec3};

use crate::placement::Region;

// Position, rotation and scale of one feather
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    // Local-to-world matrix (scale, then rotate, then translate)
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    // Apply an extra rotation in the feather's local frame
    pub fn rotate_local(&mut self, rotation: Quat) {
        self.rotation = self.rotation * rotation;
    }
}

/// Rest-state transform of a feather as last placed.
///
/// Transient motion (wind) is always applied on top of a copy of this value,
/// so restoring the feather is a plain copy back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TruthTransform(pub Transform);

impl TruthTransform {
    pub fn transform(&self) -> Transform {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Feather {
    pub region: Region,
    // Index into the wing's curve sample
    pub attachment_index: usize,
    pub layer: u32,
    // Depth offset from stacking, kept so repositioning can reapply it
    pub layer_offset: f32,
    // Wind flutter phase in radians
    pub phase: f32,
    pub transform: Transform,
    pub truth: TruthTransform,
}

impl Feather {
    pub fn new(
        region: Region,
        attachment_index: usize,
        layer: u32,
        layer_offset: f32,
        phase: f32,
        transform: Transform,
    ) -> Self {
        Self {
            region,
            attachment_index,
            layer,
            layer_offset,
            phase,
            transform,
            truth: TruthTransform(transform),
        }
    }

    // Human readable identifier, e.g. "primaries_47_2"
    pub fn name(&self) -> String {
        format!("{}_{}_{}", self.region.label(), self.attachment_index, self.layer)
    }

    // Record the current transform as the new rest state
    pub fn commit(&mut self) {
        self.truth = TruthTransform(self.transform);
    }

    // Revert any transient perturbation
    pub fn restore(&mut self) {
        self.transform = self.truth.transform();
    }

    /// Rotate the feather away from its rest state.
    ///
    /// The rotation is always composed onto the truth transform, never onto the
    /// current one, so repeated calls do not accumulate.
    pub fn perturb(&mut self, rotation: Quat) {
        self.restore();
        self.transform.rotate_local(rotation);
    }

    // Move the feather to a new attachment point, keeping rotation and scale
    pub fn reposition(&mut self, sample: Vec3) {
        let mut rest = self.truth.transform();
        rest.position = sample + Vec3::new(0.0, 0.0, self.layer_offset);
        self.transform = rest;
        self.commit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_feather() -> Feather {
        let transform = Transform {
            position: Vec3::new(1.0, -0.5, 0.1),
            rotation: Quat::from_rotation_y(0.3),
            scale: Vec3::new(0.9, 1.0, 1.4),
        };
        Feather::new(Region::Secondaries, 20, 1, 0.05, 0.7, transform)
    }

    #[test]
    fn restore_after_perturb_is_exact() {
        let mut feather = sample_feather();
        let truth = feather.truth;
        feather.perturb(Quat::from_rotation_x(0.42) * Quat::from_rotation_z(-1.1));
        assert_ne!(feather.transform, truth.transform());
        feather.restore();
        assert_eq!(feather.transform, truth.transform());
    }

    #[test]
    fn perturb_does_not_accumulate() {
        let mut feather = sample_feather();
        let wobble = Quat::from_rotation_x(0.2);
        feather.perturb(wobble);
        let once = feather.transform;
        feather.perturb(wobble);
        assert_eq!(feather.transform, once);
    }

    #[test]
    fn reposition_updates_truth_and_keeps_shape() {
        let mut feather = sample_feather();
        let before = feather.truth.transform();
        feather.perturb(Quat::from_rotation_z(0.5));
        feather.reposition(Vec3::new(2.0, 1.0, 0.0));
        let after = feather.truth.transform();
        assert_eq!(after.position, Vec3::new(2.0, 1.0, 0.05));
        assert_eq!(after.rotation, before.rotation);
        assert_eq!(after.scale, before.scale);
        assert_eq!(feather.transform, after);
    }

    #[test]
    fn name_includes_region_index_and_layer() {
        assert_eq!(sample_feather().name(), "secondaries_20_1");
    }
}
