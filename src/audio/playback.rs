//! Audio output via cpal.
//!
//! The whole clip is converted to 16-bit once and handed off to a mono
//! output stream. Playback is fire-and-forget: nothing downstream waits on
//! the audio thread, and a playback failure leaves the visualization
//! running silently.

use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use thiserror::Error;

/// Errors that can occur while setting up audio output.
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("No audio output device found")]
    NoDevice,

    #[error("Failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
}

/// Keeps the output stream alive; dropping it stops playback.
pub struct PlaybackHandle {
    _stream: cpal::Stream,
}

/// Convert float samples to 16-bit signed integers.
///
/// Each sample is scaled by 32767, rounded, and clipped to the i16 range.
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s * 32767.0).round().clamp(i16::MIN as f32, i16::MAX as f32) as i16)
        .collect()
}

/// Play a mono 16-bit buffer at the given sample rate.
///
/// The buffer is submitted in its entirety; the stream callback walks a
/// cursor through it and writes equilibrium (zero) once past the end.
pub fn play(samples: Vec<i16>, sample_rate: u32) -> Result<PlaybackHandle, PlaybackError> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(PlaybackError::NoDevice)?;

    log::info!(
        "Audio output: {} @ {}Hz, {} samples",
        device.name().unwrap_or_else(|_| "Unknown".to_string()),
        sample_rate,
        samples.len()
    );

    let config = cpal::StreamConfig {
        channels: 1,
        sample_rate: cpal::SampleRate(sample_rate),
        buffer_size: cpal::BufferSize::Default,
    };

    let samples: Arc<[i16]> = samples.into();
    let mut cursor = 0usize;

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [i16], _: &cpal::OutputCallbackInfo| {
            for out in data.iter_mut() {
                *out = samples.get(cursor).copied().unwrap_or(0);
                cursor = cursor.saturating_add(1);
            }
        },
        |err| log::error!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;

    Ok(PlaybackHandle { _stream: stream })
}
