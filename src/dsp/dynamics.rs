//! Multi-band dynamics: the final processing stage.
//!
//! The enhanced mix is split into three bands with cascaded smoothing
//! filters, each band is soft-clipped with its own drive and makeup gain,
//! the bands are recombined, a small harmonic enrichment term is added, and
//! the result is normalized into `[-1, 1]`.

use crate::dsp::filter::IirFilter;
use crate::engine::AudioBuffer;

/// Per-band soft-clip settings: tanh pre-gain and linear post-gain.
#[derive(Debug, Clone, Copy)]
struct BandCompression {
    pre_gain: f32,
    post_gain: f32,
}

const LOW_BAND: BandCompression = BandCompression {
    pre_gain: 2.0,
    post_gain: 0.5,
};
const MID_BAND: BandCompression = BandCompression {
    pre_gain: 1.5,
    post_gain: 0.7,
};
const HIGH_BAND: BandCompression = BandCompression {
    pre_gain: 1.2,
    post_gain: 0.8,
};

/// Bounded saturating nonlinearity: limits peaks while keeping small
/// signals nearly linear.
#[inline]
fn soft_clip(x: f32, band: BandCompression) -> f32 {
    (x * band.pre_gain).tanh() * band.post_gain
}

/// Run the complete dynamics stage in place, ending with normalization.
pub fn process(buffer: &mut AudioBuffer) {
    let input = buffer.samples().to_vec();

    // Band split by subtraction: low is a smoothed copy, mid is the
    // smoothed remainder, high is whatever neither band captured.
    let low_filter = IirFilter::smoothing(0.1, 0.9, -0.8);
    let mid_filter = IirFilter::smoothing(0.3, 0.7, -0.6);

    let low = low_filter.apply(&input);
    let mid_raw: Vec<f32> = input.iter().zip(&low).map(|(x, l)| x - l).collect();
    let mid = mid_filter.apply(&mid_raw);

    for (i, out) in buffer.samples_mut().iter_mut().enumerate() {
        let high = input[i] - low[i] - mid[i];
        let recombined = soft_clip(low[i], LOW_BAND)
            + soft_clip(mid[i], MID_BAND)
            + soft_clip(high, HIGH_BAND);

        // Harmonic enrichment: odd/even coloration on the recombined signal
        *out = recombined + 0.03 * (8.0 * recombined).sin() + 0.02 * (12.0 * recombined).sin();
    }

    buffer.normalize();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_soft_clip_bounds() {
        for x in [-100.0f32, -2.0, 2.0, 100.0] {
            assert!(soft_clip(x, LOW_BAND).abs() <= LOW_BAND.post_gain);
            assert!(soft_clip(x, MID_BAND).abs() <= MID_BAND.post_gain);
            assert!(soft_clip(x, HIGH_BAND).abs() <= HIGH_BAND.post_gain);
        }
    }

    #[test]
    fn test_soft_clip_small_signal_nearly_linear() {
        let x = 0.01f32;
        assert_relative_eq!(
            soft_clip(x, LOW_BAND),
            x * LOW_BAND.pre_gain * LOW_BAND.post_gain,
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_process_output_in_range() {
        // A loud, spiky input must come out bounded.
        let samples: Vec<f32> = (0..44100)
            .map(|i| 3.0 * (i as f32 * 0.05).sin() + if i % 1000 == 0 { 5.0 } else { 0.0 })
            .collect();
        let mut buf = AudioBuffer::from_samples(samples, 44100);
        process(&mut buf);
        assert!(buf.is_valid());
        assert!(buf.peak() <= 1.0 + f32::EPSILON);
    }

    #[test]
    fn test_process_silence_stays_silent() {
        let mut buf = AudioBuffer::silent(4096, 44100);
        process(&mut buf);
        assert!(buf.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_process_preserves_length() {
        let mut buf = AudioBuffer::from_samples(vec![0.5; 12345], 44100);
        process(&mut buf);
        assert_eq!(buf.len(), 12345);
    }

    #[test]
    fn test_process_is_deterministic() {
        let samples: Vec<f32> = (0..8192).map(|i| (i as f32 * 0.01).sin()).collect();
        let mut a = AudioBuffer::from_samples(samples.clone(), 44100);
        let mut b = AudioBuffer::from_samples(samples, 44100);
        process(&mut a);
        process(&mut b);
        assert_eq!(a.samples(), b.samples());
    }
}
