//! Benchmarks for the per-startup audio conversions and the per-frame
//! playhead update.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use barviz::audio::{generate_sine, quantize, AudioData};
use barviz::scene::Playhead;

fn bench_quantize(c: &mut Criterion) {
    // One minute of audio at 44.1kHz
    let samples = generate_sine(440.0, 44100, 60.0, 0.8);

    c.bench_function("quantize_60s", |b| {
        b.iter(|| quantize(black_box(&samples)))
    });
}

fn bench_downmix(c: &mut Criterion) {
    let mono = generate_sine(440.0, 44100, 60.0, 0.8);
    let stereo: Vec<f32> = mono.iter().flat_map(|&s| [s, -s]).collect();
    let audio = AudioData {
        samples: stereo,
        sample_rate: 44100,
        channels: 2,
    };

    c.bench_function("downmix_60s_stereo", |b| b.iter(|| black_box(&audio).to_mono()));
}

fn bench_playhead_advance(c: &mut Criterion) {
    let samples = generate_sine(440.0, 44100, 60.0, 0.8);
    let mut playhead = Playhead::new(samples, 44100);

    c.bench_function("playhead_advance", |b| {
        b.iter(|| playhead.advance(black_box(30.0)))
    });
}

criterion_group!(benches, bench_quantize, bench_downmix, bench_playhead_advance);
criterion_main!(benches);
