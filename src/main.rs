use std::path::Path;

use winit::event_loop::EventLoop;

use barviz::audio::load_or_silence;
use barviz::App;

/// Audio clip to visualize. No CLI flags; edit this to change the input.
const AUDIO_FILE: &str = "track.mp3";

fn main() {
    env_logger::init();

    if !Path::new(AUDIO_FILE).exists() {
        println!("Error: File not found - {}", AUDIO_FILE);
        println!("Please update AUDIO_FILE in src/main.rs");
        return;
    }

    // A corrupt or undecodable file degrades to silence rather than aborting
    let audio = load_or_silence(Path::new(AUDIO_FILE));
    log::info!(
        "Loaded {:.2}s of audio at {}Hz ({} channels)",
        audio.duration(),
        audio.sample_rate,
        audio.channels
    );

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            println!("Error creating event loop: {}", e);
            return;
        }
    };

    let mut app = App::new(audio);
    if let Err(e) = event_loop.run_app(&mut app) {
        println!("Event loop error: {}", e);
    }
}
