/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and animation state to be displayed in the UI and the on-screen overlay.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Feather and triangle counts
 * - Flap step and keyframe head
 */

use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub feather_count: usize,
    pub triangle_count: usize,
    // Triangles drawn last frame after clipping
    pub drawn_triangles: usize,
    pub flap_step: Option<u32>,
    pub flap_step_count: u32,
    pub keyframe_head: usize,
    pub keyframe_count: usize,
}

impl DebugInfo {
    // Lines shown in the overlay and the performance panel
    pub fn lines(&self) -> Vec<String> {
        let flap = match self.flap_step {
            Some(step) => format!("Flap step: {}/{}", step, self.flap_step_count),
            None => "Flap step: idle".to_string(),
        };
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Feathers: {}", self.feather_count),
            format!("Triangles: {} ({} drawn)", self.triangle_count, self.drawn_triangles),
            flap,
            format!("Keyframe: {}/{}", self.keyframe_head + 1, self.keyframe_count.max(1)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_flap_is_reported() {
        let info = DebugInfo { feather_count: 120, ..Default::default() };
        let lines = info.lines();
        assert!(lines.contains(&"Feathers: 120".to_string()));
        assert!(lines.contains(&"Flap step: idle".to_string()));
    }

    #[test]
    fn active_flap_shows_progress() {
        let info = DebugInfo { flap_step: Some(4), flap_step_count: 30, ..Default::default() };
        assert!(info.lines().contains(&"Flap step: 4/30".to_string()));
    }
}
