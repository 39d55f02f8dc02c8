//! Deep ocean swell layer.
//!
//! Additive synthesis of the primary wave motion. The five base frequencies
//! are sub-audio: they shape the slow rise-and-fall of the mix rather than
//! producing audible tones. Each frequency carries up to three harmonic
//! partials whose amplitudes are biased by the harmonic weight table, plus
//! a wave-interference term and a slow amplitude modulation.

use rand::Rng;

use crate::engine::AudioBuffer;
use crate::synth::harmonics::HarmonicWeightTable;
use crate::synth::primitives::TWO_PI;

/// Swell base frequencies in Hz. Lower entries dominate the mix.
pub const SWELL_FREQUENCIES: [f32; 5] = [0.02, 0.035, 0.051, 0.078, 0.095];

/// Maximum harmonic partials per swell frequency.
const MAX_HARMONICS: usize = 3;

/// Render the swell layer and add it into the master buffer.
pub fn render<R: Rng>(buffer: &mut AudioBuffer, table: &HarmonicWeightTable, rng: &mut R) {
    let n = buffer.len();
    let sr = buffer.sample_rate() as f32;

    // One random phase per base frequency, drawn up front so the harmonic
    // partials of a frequency share its phase.
    let phases: Vec<f32> = SWELL_FREQUENCIES
        .iter()
        .map(|_| rng.gen_range(0.0..TWO_PI))
        .collect();

    let mut deep_swells = vec![0.0f32; n];

    for (i, &freq) in SWELL_FREQUENCIES.iter().enumerate() {
        let weights = match table.weights(i) {
            Some(w) => w,
            None => continue,
        };
        let phase = phases[i];
        let base_amplitude = 0.6 / (i + 1) as f32;

        // Fewer table entries than requested harmonics reduces the partial
        // count; it never fails the layer.
        let num_harmonics = MAX_HARMONICS.min(weights.len());

        for (sample, swell) in deep_swells.iter_mut().enumerate() {
            let t = sample as f32 / sr;

            // Interference and amplitude-variation terms
            let wave_mod = 0.3 * (TWO_PI * freq * 0.7 * t + phase).sin();
            let amplitude_mod = 1.0 + 0.4 * (TWO_PI * freq * 0.1 * t).sin();

            let mut primary = base_amplitude * (TWO_PI * freq * t + phase).sin();

            for (j, &weight) in weights.iter().take(num_harmonics).enumerate() {
                let harmonic_freq = freq * (j + 2) as f32;
                let harmonic_amp = base_amplitude * 0.3 / (j + 2) as f32;
                let harmonic_weight = 1.0 + weight * 0.2;
                primary += harmonic_amp
                    * harmonic_weight
                    * (TWO_PI * harmonic_freq * t + phase + j as f32 * std::f32::consts::FRAC_PI_4)
                        .sin();
            }

            *swell += primary * amplitude_mod * (1.0 + wave_mod);
        }
    }

    buffer.mix(&deep_swells);
}
