//! Ambient layers: underwater pressure and wind-water interaction.
//!
//! Each contribution is a full-length vector added straight into the master
//! buffer. The filter coefficients are tuning constants that set the
//! spectral weight of each layer, not calibrated cutoff frequencies.

use rand::Rng;

use crate::dsp::filter::IirFilter;
use crate::engine::AudioBuffer;
use crate::synth::primitives::{gaussian_noise, TWO_PI};

/// Deep pressure wave frequency in Hz
const PRESSURE_FREQ: f32 = 0.008;
/// Distant wave interaction frequency in Hz
const DISTANT_FREQ: f32 = 0.015;
/// Wind band frequencies in Hz
const WIND_FREQUENCIES: [f32; 3] = [0.03, 0.07, 0.12];

/// Render the underwater ambience (pressure waves, distant interactions,
/// subsurface currents) into the master buffer.
pub fn render_underwater<R: Rng>(buffer: &mut AudioBuffer, rng: &mut R) {
    let n = buffer.len();
    let sr = buffer.sample_rate() as f32;

    // Deep pressure waves with a tertiary-frequency amplitude modulation
    let mut layer: Vec<f32> = (0..n)
        .map(|i| {
            let t = i as f32 / sr;
            let pressure = 0.15 * (TWO_PI * PRESSURE_FREQ * t).sin();
            let modulation = 0.1 * (TWO_PI * PRESSURE_FREQ * 3.0 * t).sin();
            pressure * (1.0 + modulation)
        })
        .collect();

    // Distant wave interactions, smoothed by a gentle low-pass
    let distant: Vec<f32> = (0..n)
        .map(|i| 0.1 * (TWO_PI * DISTANT_FREQ * i as f32 / sr).sin())
        .collect();
    let distant_filter = IirFilter::smoothing(0.05, 0.95, -0.9);
    for (acc, s) in layer.iter_mut().zip(distant_filter.apply(&distant)) {
        *acc += s;
    }

    // Subsurface currents: noise through a near-integrator, a rumbling drift
    let current_filter = IirFilter::smoothing(0.01, 0.99, -0.98);
    let currents = current_filter.apply(&gaussian_noise(n, 0.03, rng));
    for (acc, s) in layer.iter_mut().zip(currents) {
        *acc += s;
    }

    buffer.mix(&layer);
}

/// Render the wind layer: three noise bands, each amplitude-modulated at
/// its band frequency, low-passed, summed, and scaled down.
pub fn render_wind<R: Rng>(buffer: &mut AudioBuffer, rng: &mut R) {
    let n = buffer.len();
    let sr = buffer.sample_rate() as f32;
    let wind_filter = IirFilter::smoothing(0.1, 0.9, -0.85);

    let mut wind = vec![0.0f32; n];
    for &freq in &WIND_FREQUENCIES {
        let noise = gaussian_noise(n, 0.08, rng);
        let modulated: Vec<f32> = noise
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                let t = i as f32 / sr;
                x * (1.0 + 0.5 * (TWO_PI * freq * t).sin())
            })
            .collect();
        for (acc, s) in wind.iter_mut().zip(wind_filter.apply(&modulated)) {
            *acc += s;
        }
    }

    for s in &mut wind {
        *s *= 0.3;
    }
    buffer.mix(&wind);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_underwater_writes_bounded_data() {
        let mut buf = AudioBuffer::silent(44100, 44100);
        let mut rng = Pcg32::seed_from_u64(21);
        render_underwater(&mut buf, &mut rng);
        assert!(buf.is_valid());
        assert!(buf.samples().iter().any(|&s| s != 0.0));
        // Pressure (<=0.165) + distant (<=~0.1) + smoothed quiet noise
        assert!(buf.peak() < 0.8, "peak={}", buf.peak());
    }

    #[test]
    fn test_wind_is_quiet_and_valid() {
        let mut buf = AudioBuffer::silent(44100, 44100);
        let mut rng = Pcg32::seed_from_u64(22);
        render_wind(&mut buf, &mut rng);
        assert!(buf.is_valid());
        assert!(buf.samples().iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_ambient_layers_are_deterministic() {
        let render_both = |seed: u64| {
            let mut buf = AudioBuffer::silent(22050, 44100);
            let mut rng = Pcg32::seed_from_u64(seed);
            render_underwater(&mut buf, &mut rng);
            render_wind(&mut buf, &mut rng);
            buf
        };
        assert_eq!(render_both(5).samples(), render_both(5).samples());
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut buf = AudioBuffer::silent(0, 44100);
        let mut rng = Pcg32::seed_from_u64(1);
        render_underwater(&mut buf, &mut rng);
        render_wind(&mut buf, &mut rng);
        assert!(buf.is_empty());
    }
}
