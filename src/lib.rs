//! Barviz
//!
//! A 3D bar audio visualizer with synchronized playback.
//!
//! # Features
//!
//! - Audio loading (WAV, MP3, FLAC, AAC) via Symphonia
//! - Mono 16-bit playback via cpal
//! - GPU rendering via wgpu into a winit window
//! - 64 cuboid bars driven by the instantaneous sample amplitude at the
//!   current playback position

pub mod app;
pub mod audio;
pub mod gpu;
pub mod scene;

// Re-export commonly used types
pub use app::App;
pub use audio::{load_audio, load_or_silence, quantize, AudioData, AudioError};
pub use gpu::{BarRenderer, GpuContext, GpuError};
pub use scene::{bar_height, start_index, Playhead, BAR_COUNT, MIN_BAR_HEIGHT};
