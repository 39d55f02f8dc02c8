//! Envelope and noise primitives shared by every synthesis layer.
//!
//! All functions take a sample count and return a vector of that exact
//! length. They are pure given their RNG input; none of them keeps state
//! between calls.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::dsp::filter::IirFilter;

pub const TWO_PI: f32 = 2.0 * std::f32::consts::PI;

/// `exp(-rate · t)` over `n` samples: monotonically decreasing from 1.
pub fn exponential_decay(n: usize, rate: f32, sample_rate: u32) -> Vec<f32> {
    let sr = sample_rate as f32;
    (0..n).map(|i| (-rate * i as f32 / sr).exp()).collect()
}

/// `(i/(n-1))^exponent` over `n` samples: rises from 0 to 1.
///
/// The buildup ratio is undefined for a single-sample window, so `n < 2`
/// degrades to a flat unit envelope rather than failing.
pub fn power_buildup(n: usize, exponent: f32) -> Vec<f32> {
    if n < 2 {
        return vec![1.0; n];
    }
    let denom = (n - 1) as f32;
    (0..n).map(|i| (i as f32 / denom).powf(exponent)).collect()
}

/// Gaussian noise of the given standard deviation.
pub fn gaussian_noise<R: Rng>(n: usize, stddev: f32, rng: &mut R) -> Vec<f32> {
    if stddev <= 0.0 {
        return vec![0.0; n];
    }
    // stddev > 0 is checked above, so construction cannot fail
    let normal = Normal::new(0.0f32, stddev).unwrap();
    (0..n).map(|_| normal.sample(rng)).collect()
}

/// Gaussian noise passed through an IIR filter. Stateless: the filter runs
/// with zero initial conditions over exactly these `n` samples.
pub fn filtered_noise<R: Rng>(n: usize, stddev: f32, filter: &IirFilter, rng: &mut R) -> Vec<f32> {
    let noise = gaussian_noise(n, stddev, rng);
    filter.apply(&noise)
}

/// Sine wave at `freq` Hz with a phase offset, over `n` samples.
pub fn sine_wave(n: usize, freq: f32, phase: f32, sample_rate: u32) -> Vec<f32> {
    let sr = sample_rate as f32;
    (0..n)
        .map(|i| (TWO_PI * freq * i as f32 / sr + phase).sin())
        .collect()
}

/// Short decaying sine burst: `sin(2π·f·t) · exp(-rate·t)`, the shape shared
/// by bubbles, drips, and splash tones.
pub fn decaying_tone(n: usize, freq: f32, decay_rate: f32, sample_rate: u32) -> Vec<f32> {
    let sr = sample_rate as f32;
    (0..n)
        .map(|i| {
            let t = i as f32 / sr;
            (TWO_PI * freq * t).sin() * (-decay_rate * t).exp()
        })
        .collect()
}
