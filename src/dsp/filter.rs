//! Whole-vector IIR filtering.
//!
//! Filters here are applied to a complete input vector in one pass with
//! zero initial state, so repeated generation calls never leak filter
//! history into each other. Coefficient convention matches the standard
//! difference equation
//!
//! `a[0]·y[n] = Σ b[k]·x[n-k] − Σ a[k]·y[n-k]`
//!
//! with `a[0]` normalized to 1.

/// IIR filter defined by its feed-forward (`b`) and feedback (`a`)
/// coefficient vectors. Stateless across calls to [`IirFilter::apply`].
#[derive(Debug, Clone)]
pub struct IirFilter {
    feedforward: Vec<f32>,
    feedback: Vec<f32>,
}

impl IirFilter {
    /// Build a filter from coefficient vectors. `feedback[0]` must be 1
    /// (coefficients are used as given, not renormalized).
    pub fn new(feedforward: Vec<f32>, feedback: Vec<f32>) -> Self {
        debug_assert!(!feedforward.is_empty());
        debug_assert!(!feedback.is_empty());
        Self {
            feedforward,
            feedback,
        }
    }

    /// Single-pole low-pass in smoothing form: `b = [c]`, `a = [1, -(1-c)]`.
    ///
    /// `c` near 0 integrates heavily (low cutoff), `c` near 1 passes the
    /// input through. These are tuning constants, not calibrated cutoffs.
    pub fn single_pole_lowpass(c: f32) -> Self {
        Self::new(vec![c], vec![1.0, -(1.0 - c)])
    }

    /// Two-tap smoothing low-pass: `b = [b0, b1]`, `a = [1, a1]`.
    pub fn smoothing(b0: f32, b1: f32, a1: f32) -> Self {
        Self::new(vec![b0, b1], vec![1.0, a1])
    }

    /// Filter a full input vector with zero initial conditions.
    pub fn apply(&self, input: &[f32]) -> Vec<f32> {
        let mut output = vec![0.0f32; input.len()];
        for n in 0..input.len() {
            let mut acc = 0.0f32;
            for (k, &b) in self.feedforward.iter().enumerate() {
                if n >= k {
                    acc += b * input[n - k];
                }
            }
            for (k, &a) in self.feedback.iter().enumerate().skip(1) {
                if n >= k {
                    acc -= a * output[n - k];
                }
            }
            output[n] = acc;
        }
        output
    }

    /// Filter in place (same semantics as [`IirFilter::apply`]).
    pub fn apply_in_place(&self, samples: &mut [f32]) {
        let filtered = self.apply(samples);
        samples.copy_from_slice(&filtered);
    }
}
