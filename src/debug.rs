/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct with the counters shown by the
 * on-screen debug overlay: frame rate, frame time, and how many fixed
 * simulation ticks ran during the last loop iteration.
 */

use std::time::Duration;

pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_this_frame: usize,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks_this_frame: 0,
        }
    }
}
