//! Application shell: window lifecycle and the per-frame update.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::audio::{self, AudioData, PlaybackHandle};
use crate::gpu::BarRenderer;
use crate::scene::Playhead;

pub const WINDOW_TITLE: &str = "Audio Visualizer";

/// Winit application driving playback and the visualizer.
pub struct App {
    mono: Vec<f32>,
    sample_rate: u32,
    window: Option<Arc<Window>>,
    renderer: Option<BarRenderer>,
    playhead: Option<Playhead>,
    // Must keep the stream alive or audio stops
    _playback: Option<PlaybackHandle>,
    // Set on the first frame update; elapsed time is measured from here.
    // Visual position is wall-clock derived, so it can drift from the
    // audio device's true playback position.
    started: Option<Instant>,
}

impl App {
    pub fn new(audio: AudioData) -> Self {
        let sample_rate = audio.sample_rate;
        let mono = audio.to_mono();
        Self {
            mono,
            sample_rate,
            window: None,
            renderer: None,
            playhead: None,
            _playback: None,
            started: None,
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only initialise once
        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(BarRenderer::new(window.clone())) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialise renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        // Fire-and-forget playback; a failure here leaves the bars running
        // silently.
        let playback_data = audio::quantize(&self.mono);
        match audio::play(playback_data, self.sample_rate) {
            Ok(handle) => self._playback = Some(handle),
            Err(e) => log::error!("Error playing audio: {}", e),
        }

        self.playhead = Some(Playhead::new(self.mono.clone(), self.sample_rate));
        self.renderer = Some(renderer);
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(r) = &mut self.renderer {
                    r.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let elapsed = self
                    .started
                    .get_or_insert_with(Instant::now)
                    .elapsed()
                    .as_secs_f64();

                if let Some(playhead) = &mut self.playhead {
                    if let Some(heights) = playhead.advance(elapsed) {
                        if let Some(r) = &mut self.renderer {
                            r.set_heights(&heights);
                        }
                    }
                    // Once stopped the bars simply hold their last state;
                    // the render loop keeps presenting.
                }

                if let Some(r) = &self.renderer {
                    match r.render() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                            r.reconfigure();
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Surface out of memory, exiting");
                            event_loop.exit();
                        }
                        Err(e) => log::warn!("Surface error: {}", e),
                    }
                }
            }

            _ => {}
        }
    }

    /// Called after all pending events have been processed; request the
    /// next frame so updates run at the display rate.
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }
}
