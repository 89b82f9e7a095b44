//! Playback-position tracking and bar-height mapping.
//!
//! The playhead converts elapsed wall-clock time into an offset into the
//! mono sample buffer and maps one sample per bar to a height. Visual sync
//! is an approximation: elapsed time is measured on the render thread, not
//! reported back by the audio device, so the two can drift. That matches
//! the behaviour this visualizer has always had rather than fixing it.

use std::sync::Arc;

use super::BAR_COUNT;

/// Minimum height a bar ever renders at, even for silence.
pub const MIN_BAR_HEIGHT: f32 = 0.1;

/// Multiplier from absolute sample amplitude to bar height.
pub const HEIGHT_GAIN: f32 = 10.0;

/// Sample offset for a given elapsed time.
pub fn start_index(elapsed_secs: f64, sample_rate: u32) -> usize {
    (elapsed_secs * sample_rate as f64).floor() as usize
}

/// Height of a bar driven by a single sample.
pub fn bar_height(sample: f32) -> f32 {
    (sample.abs() * HEIGHT_GAIN).max(MIN_BAR_HEIGHT)
}

/// Tracks playback position through a static mono buffer.
///
/// Runs until the sample window would read past the end of the buffer,
/// then latches into a stopped state from which no further updates are
/// produced.
pub struct Playhead {
    samples: Arc<[f32]>,
    sample_rate: u32,
    stopped: bool,
}

impl Playhead {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples: samples.into(),
            sample_rate,
            stopped: false,
        }
    }

    /// Whether the playhead has run past the end of the buffer.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// The sample window starting at the offset for `elapsed_secs`.
    ///
    /// Pure with respect to elapsed time: the same input always yields the
    /// same window while the playhead is running.
    pub fn window(&self, elapsed_secs: f64) -> Option<&[f32]> {
        let start = start_index(elapsed_secs, self.sample_rate);
        if start + BAR_COUNT >= self.samples.len() {
            return None;
        }
        Some(&self.samples[start..start + BAR_COUNT])
    }

    /// Compute bar heights for the current elapsed time.
    ///
    /// Returns `None` once playback position runs past the end of the
    /// buffer; from then on every call returns `None` without touching
    /// any state.
    pub fn advance(&mut self, elapsed_secs: f64) -> Option<[f32; BAR_COUNT]> {
        if self.stopped {
            return None;
        }

        let window = match self.window(elapsed_secs) {
            Some(w) => w,
            None => {
                self.stopped = true;
                return None;
            }
        };

        let mut heights = [MIN_BAR_HEIGHT; BAR_COUNT];
        for (h, &s) in heights.iter_mut().zip(window) {
            *h = bar_height(s);
        }
        Some(heights)
    }
}
