//! Audio loading, playback, and test-signal generation.
//!
//! This module provides:
//! - Audio file loading via Symphonia (WAV, MP3, FLAC, AAC)
//! - Mono downmix and 16-bit conversion for playback
//! - Audio output via cpal
//! - Synthetic signal generation for tests

pub mod loader;
pub mod playback;
pub mod synth;

// Re-export commonly used types
pub use loader::{load_audio, load_or_silence, AudioData, AudioError};
pub use playback::{play, quantize, PlaybackError, PlaybackHandle};
pub use synth::{generate_silence, generate_sine, generate_white_noise};
