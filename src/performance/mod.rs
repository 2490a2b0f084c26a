//! # Frame Timing
//!
//! Rolling frame-time statistics for the FPS readout in the editor panel.
//!
//! ```rust
//! use raybuilder::performance::FrameStats;
//! use std::time::Duration;
//!
//! let mut stats = FrameStats::new();
//! stats.record(Duration::from_millis(16));
//! assert!(stats.fps() > 60.0);
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling window of recent frame durations
#[derive(Debug, Clone)]
pub struct FrameStats {
    /// Ring buffer of recent frame times for averaging
    frame_times: VecDeque<Duration>,
    /// Maximum number of frame times to keep for averaging
    max_samples: usize,
    /// When the previous frame ended
    last_frame: Option<Instant>,
}

impl FrameStats {
    /// Keeps about two seconds of history at 60 FPS
    pub fn new() -> Self {
        Self::with_capacity(120)
    }

    pub fn with_capacity(max_samples: usize) -> Self {
        let max_samples = max_samples.max(1);
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            max_samples,
            last_frame: None,
        }
    }

    /// Marks the end of a frame, recording the time since the previous one
    pub fn tick(&mut self) {
        let now = Instant::now();
        if let Some(previous) = self.last_frame.replace(now) {
            self.record(now - previous);
        }
    }

    /// Add a frame time sample
    pub fn record(&mut self, frame_time: Duration) {
        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(frame_time);
    }

    /// Mean frame time over the window, zero before the first sample
    pub fn average_frame_time(&self) -> Duration {
        if self.frame_times.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.frame_times.iter().sum();
        total / self.frame_times.len() as u32
    }

    /// Average frame time in milliseconds
    pub fn frame_time_ms(&self) -> f32 {
        self.average_frame_time().as_secs_f32() * 1000.0
    }

    /// Frames per second derived from the average frame time
    pub fn fps(&self) -> f32 {
        let average = self.average_frame_time().as_secs_f32();
        if average > 0.0 {
            1.0 / average
        } else {
            0.0
        }
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Reset all history
    pub fn reset(&mut self) {
        self.frame_times.clear();
        self.last_frame = None;
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_report_zero() {
        let stats = FrameStats::new();
        assert_eq!(stats.fps(), 0.0);
        assert_eq!(stats.average_frame_time(), Duration::ZERO);
    }

    #[test]
    fn test_fps_from_average() {
        let mut stats = FrameStats::new();
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(30));
        assert_eq!(stats.average_frame_time(), Duration::from_millis(20));
        assert!((stats.fps() - 50.0).abs() < 0.01);
        assert!((stats.frame_time_ms() - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_window_drops_oldest_samples() {
        let mut stats = FrameStats::with_capacity(2);
        stats.record(Duration::from_millis(100));
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(10));
        assert_eq!(stats.sample_count(), 2);
        assert_eq!(stats.average_frame_time(), Duration::from_millis(10));
    }

    #[test]
    fn test_first_tick_only_starts_timing() {
        let mut stats = FrameStats::new();
        stats.tick();
        assert_eq!(stats.sample_count(), 0);
        stats.tick();
        assert_eq!(stats.sample_count(), 1);

        stats.reset();
        assert_eq!(stats.sample_count(), 0);
    }
}
