/*
 * Keyframe Module
 *
 * Poses of the flapping cycle. Each keyframe stores offsets from the
 * wing's rest control points, and the ring hands them out in a fixed
 * cyclic order.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub offsets: [Vec3; 4],
}

impl Keyframe {
    pub fn new(offsets: [Vec3; 4]) -> Self {
        Self { offsets }
    }

    // Absolute control points of this pose for a given rest pose
    pub fn target(&self, rest: &[Vec3; 4]) -> [Vec3; 4] {
        let mut target = *rest;
        for (point, offset) in target.iter_mut().zip(&self.offsets) {
            *point += *offset;
        }
        target
    }
}

impl Default for Keyframe {
    fn default() -> Self {
        Self::new([Vec3::ZERO; 4])
    }
}

/// Cyclic list of keyframes with a moving head.
///
/// Advancing moves the head to the tail without reordering storage, so
/// keyframe `i` in the panel always refers to the same pose.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyframeRing {
    frames: Vec<Keyframe>,
    head: usize,
}

impl KeyframeRing {
    pub fn new(frames: Vec<Keyframe>) -> Self {
        Self { frames, head: 0 }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn head_index(&self) -> usize {
        self.head
    }

    pub fn head(&self) -> Option<&Keyframe> {
        self.frames.get(self.head)
    }

    pub fn advance(&mut self) {
        if !self.frames.is_empty() {
            self.head = (self.head + 1) % self.frames.len();
        }
    }

    pub fn frames(&self) -> &[Keyframe] {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut [Keyframe] {
        &mut self.frames
    }

    pub fn push(&mut self, frame: Keyframe) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) -> Option<Keyframe> {
        let frame = self.frames.pop();
        if self.head >= self.frames.len() {
            self.head = 0;
        }
        frame
    }

    // Keyframes with their storage index in playback order, starting at the head
    pub fn iter_from_head(&self) -> impl Iterator<Item = (usize, &Keyframe)> {
        let split = self.head.min(self.frames.len());
        let (tail, front) = self.frames.split_at(split);
        front
            .iter()
            .enumerate()
            .map(move |(i, frame)| (split + i, frame))
            .chain(tail.iter().enumerate())
    }
}

impl Default for KeyframeRing {
    // Upstroke then downstroke, pivoting at the shoulder
    fn default() -> Self {
        Self::new(vec![
            Keyframe::new([
                Vec3::ZERO,
                vec3(0.0, 0.8, 0.3),
                vec3(-0.3, 2.0, 0.6),
                vec3(-1.0, 3.0, 1.0),
            ]),
            Keyframe::new([
                Vec3::ZERO,
                vec3(0.0, -0.6, -0.2),
                vec3(-0.2, -1.5, -0.5),
                vec3(-0.8, -2.5, -0.8),
            ]),
        ])
    }
}
