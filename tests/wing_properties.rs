// End-to-end properties of the wing geometry and animation

use bird_wing::animator::Animator;
use bird_wing::curve::subdivisions_for;
use bird_wing::{CubicBezier, FeatherMesh, KeyframeRing, Wing, WingParams};
use nannou::prelude::*;

fn bezier(p: [Vec3; 4], t: f32) -> Vec3 {
    let mt = 1.0 - t;
    p[0] * mt.powi(3) + p[1] * (3.0 * mt * mt * t) + p[2] * (3.0 * mt * t * t) + p[3] * t.powi(3)
}

#[test]
fn default_wing_matches_the_bezier_formula() {
    let params = WingParams::default();
    assert_eq!(params.distribution, 6);
    let points = [
        vec3(0.0, 0.0, 0.0),
        vec3(1.0, -1.0, 0.0),
        vec3(2.0, 1.0, 0.0),
        vec3(5.0, -1.0, 0.0),
    ];
    assert_eq!(params.control_points, points);

    let subdivisions = subdivisions_for(params.distribution);
    assert_eq!(subdivisions, 60);

    let samples = CubicBezier::new(points).sample(subdivisions);
    assert_eq!(samples.len(), 61);
    for (i, sample) in samples.iter().enumerate() {
        let expected = bezier(points, i as f32 / 60.0);
        assert!((*sample - expected).length() < 1e-5, "sample {} was {:?}, expected {:?}", i, sample, expected);
    }
}

#[test]
fn identical_inputs_build_identical_wings() {
    let params = WingParams { layers: 3, distribution: 9, feather_length: 1.1, ..Default::default() };
    let a = Wing::new(params.control_points, params.placement(), FeatherMesh::default());
    let b = Wing::new(params.control_points, params.placement(), FeatherMesh::default());

    assert_eq!(a.feathers.len(), b.feathers.len());
    for (x, y) in a.feathers.iter().zip(&b.feathers) {
        assert_eq!(
            (x.transform.position, x.transform.rotation, x.transform.scale),
            (y.transform.position, y.transform.rotation, y.transform.scale)
        );
    }
}

#[test]
fn every_feather_recovers_its_rest_state_after_animation() {
    let params = WingParams { wind_speed: 3.0, wind_direction: vec3(0.2, -0.4, 0.1), ..Default::default() };
    let mut wing = Wing::new(params.control_points, params.placement(), FeatherMesh::default());
    let mut keyframes = KeyframeRing::default();
    let mut animator = Animator::new();

    for frame in 0..120 {
        animator.update(&mut wing, &mut keyframes, &params, frame as f32 / 60.0);
    }
    assert!(wing.feathers.iter().any(|f| f.transform != f.truth.transform()));

    let rest: Vec<_> = wing.feathers.iter().map(|f| f.truth).collect();
    wing.restore_feathers();
    for (feather, truth) in wing.feathers.iter().zip(rest) {
        assert_eq!(feather.transform, truth.transform());
    }
}

#[test]
fn flapping_cycles_back_to_the_first_keyframe() {
    let params = WingParams { flap_speed: 5.0, ..Default::default() };
    let mut wing = Wing::new(params.control_points, params.placement(), FeatherMesh::default());
    let mut keyframes = KeyframeRing::default();
    let mut animator = Animator::new();
    let first_target = keyframes.head().unwrap().target(&params.control_points);

    // Two keyframes, six steps each at speed 5: a full cycle plus one transition
    for frame in 0..18 {
        animator.update(&mut wing, &mut keyframes, &params, frame as f32 / 60.0);
    }
    assert_eq!(keyframes.head_index(), 1);
    for (point, goal) in wing.control_points.iter().zip(&first_target) {
        assert!((*point - *goal).length() < 1e-4);
    }

    // Feathers ride along with the curve
    for feather in &wing.feathers {
        let attached = wing.samples[feather.attachment_index] + vec3(0.0, 0.0, feather.layer_offset);
        assert!((feather.truth.transform().position - attached).length() < 1e-6);
    }
}
