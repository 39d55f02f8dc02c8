//! Audio buffer type for soundscape synthesis
//!
//! The buffer is a mono sample accumulator: every synthesis layer adds its
//! contribution into the same buffer, then the dynamics stage rewrites it
//! in place. Samples are 32-bit float throughout.

/// Mono audio buffer used as the master accumulator for one generation call.
#[derive(Clone, Debug)]
pub struct AudioBuffer {
    /// Sample data
    samples: Vec<f32>,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a silent buffer with the given length.
    pub fn silent(num_samples: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; num_samples],
            sample_rate,
        }
    }

    /// Wrap existing samples.
    pub fn from_samples(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Get a reference to all samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Get a mutable reference to all samples
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Consume the buffer, returning the raw samples.
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Time vector `t[i] = i / sample_rate`, shared by every layer that
    /// evaluates continuous-time functions over the buffer.
    pub fn time_vector(&self) -> Vec<f32> {
        let sr = self.sample_rate as f32;
        (0..self.samples.len()).map(|i| i as f32 / sr).collect()
    }

    /// Overlap-add `slice` into the buffer starting at `offset`.
    ///
    /// Any tail running past the end of the buffer is truncated; an offset
    /// at or past the end writes nothing. Never wraps, never panics.
    pub fn mix_at(&mut self, offset: usize, slice: &[f32]) {
        if offset >= self.samples.len() {
            return;
        }
        let end = (offset + slice.len()).min(self.samples.len());
        for (dst, src) in self.samples[offset..end].iter_mut().zip(slice.iter()) {
            *dst += *src;
        }
    }

    /// Add a full-length layer into the buffer (shorter layers truncate).
    pub fn mix(&mut self, layer: &[f32]) {
        self.mix_at(0, layer);
    }

    /// Peak absolute amplitude
    pub fn peak(&self) -> f32 {
        self.samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max)
    }

    /// Scale so peak absolute amplitude is at most 1. Buffers already
    /// within range are left untouched.
    pub fn normalize(&mut self) {
        let peak = self.peak();
        if peak > 1.0 {
            let inv = 1.0 / peak;
            for s in &mut self.samples {
                *s *= inv;
            }
        }
    }

    /// Check the buffer contains valid audio (no NaN/Inf)
    pub fn is_valid(&self) -> bool {
        self.samples.iter().all(|s| s.is_finite())
    }

    /// RMS level in dB, for diagnostics
    pub fn rms_db(&self) -> f64 {
        if self.samples.is_empty() {
            return f64::NEG_INFINITY;
        }
        let sum_sq: f64 = self.samples.iter().map(|&s| (s as f64).powi(2)).sum();
        let rms = (sum_sq / self.samples.len() as f64).sqrt();
        if rms > 0.0 {
            20.0 * rms.log10()
        } else {
            f64::NEG_INFINITY
        }
    }
}
