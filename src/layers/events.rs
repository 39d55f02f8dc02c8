//! Transient event engine.
//!
//! Every short sound in the scene — a breaking wave, a tidal-pool drip, a
//! distant gull — follows the same lifecycle: a scheduler draws how many
//! events occur, where each starts, how long it lasts and how hard it hits;
//! a per-type voice synthesizes the waveform; the result is overlap-added
//! into the master buffer. The three voices only differ in their synthesis
//! parameters, so the scheduling skeleton lives here once and the voices
//! implement [`EventVoice`].
//!
//! Degenerate draws (zero-length phases, offsets with no room left) are
//! clamped to the nearest valid value. The engine always produces some
//! valid waveform; it never propagates a scheduling error.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::dsp::filter::IirFilter;
use crate::engine::AudioBuffer;
use crate::synth::primitives::{
    decaying_tone, exponential_decay, gaussian_noise, power_buildup, sine_wave, TWO_PI,
};

/// One scheduled transient. Created by the scheduler, consumed immediately
/// by the voice, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct TransientEvent {
    /// Start offset in samples
    pub start: usize,
    /// Total duration in samples (>= 1)
    pub duration: usize,
    /// Peak intensity in the voice's range
    pub intensity: f32,
}

/// A transient sound type: how often it happens and what it sounds like.
pub trait EventVoice {
    /// Voice name for logging
    fn name(&self) -> &'static str;

    /// Number of events for a rendering of `duration_seconds`.
    fn event_count(&self, duration_seconds: f64, rng: &mut Pcg32) -> usize;

    /// Event duration range in seconds (inclusive)
    fn duration_range_secs(&self) -> (f32, f32);

    /// Event intensity range (inclusive)
    fn intensity_range(&self) -> (f32, f32);

    /// Synthesize one event's waveform, exactly `event.duration` samples.
    fn synthesize(&self, event: &TransientEvent, sample_rate: u32, rng: &mut Pcg32) -> Vec<f32>;
}

/// Schedule and render all of a voice's events into the buffer.
pub fn render_events<V: EventVoice>(voice: &V, buffer: &mut AudioBuffer, rng: &mut Pcg32) {
    if buffer.is_empty() {
        return;
    }
    let count = voice.event_count(buffer.duration(), rng);
    if count == 0 {
        return;
    }

    let sr = buffer.sample_rate();
    let (lo_secs, hi_secs) = voice.duration_range_secs();
    let min_duration = ((lo_secs * sr as f32) as usize).max(1);
    let max_duration = ((hi_secs * sr as f32) as usize).max(min_duration);
    let (lo_int, hi_int) = voice.intensity_range();

    log::debug!("{}: scheduling {} events", voice.name(), count);

    for _ in 0..count {
        // Leave room for the maximum duration; a buffer shorter than one
        // event clamps the start to 0 and relies on mix_at truncation.
        let start = if buffer.len() > max_duration {
            rng.gen_range(0..buffer.len() - max_duration)
        } else {
            0
        };
        let event = TransientEvent {
            start,
            duration: rng.gen_range(min_duration..=max_duration),
            intensity: rng.gen_range(lo_int..=hi_int),
        };
        let waveform = voice.synthesize(&event, sr, rng);
        buffer.mix_at(event.start, &waveform);
    }
}

// ------------------------------- Wave breaks -------------------------------

/// Shore wave breaking: approach, crash, retreat.
#[derive(Debug, Clone, Copy)]
pub struct WaveBreak {
    /// Average breaks per second
    pub density: f32,
}

impl WaveBreak {
    pub fn new(density: f32) -> Self {
        Self {
            density: density.max(0.0),
        }
    }

    /// Rising wave front: a single sine under a quadratic buildup.
    fn approach(n: usize, intensity: f32, sr: u32, rng: &mut Pcg32) -> Vec<f32> {
        let freq = rng.gen_range(100.0..300.0);
        let env = power_buildup(n, 2.0);
        sine_wave(n, freq, 0.0, sr)
            .iter()
            .zip(env.iter())
            .map(|(s, e)| intensity * 0.3 * s * e)
            .collect()
    }

    /// Main impact: low thud, mid splash, high spray, and shaped noise.
    fn crash(n: usize, intensity: f32, sr: u32, rng: &mut Pcg32) -> Vec<f32> {
        let low_freq = rng.gen_range(80.0..200.0);
        let mid_freq = rng.gen_range(500.0..1500.0);
        let high_freq = rng.gen_range(2000.0..6000.0);

        let low = sine_wave(n, low_freq, 0.0, sr);
        let mid = sine_wave(n, mid_freq, 0.0, sr);
        let high = sine_wave(n, high_freq, 0.0, sr);
        let mid_env = exponential_decay(n, 8.0, sr);
        let high_env = exponential_decay(n, 12.0, sr);
        let noise = gaussian_noise(n, 0.5, rng);

        (0..n)
            .map(|i| {
                intensity * 0.8 * low[i]
                    + intensity * 0.6 * mid[i] * mid_env[i]
                    + intensity * 0.4 * high[i] * high_env[i]
                    + intensity * 0.3 * noise[i] * mid_env[i]
            })
            .collect()
    }

    /// Receding water: foam hiss, popping bubbles, low drainage.
    fn retreat(n: usize, intensity: f32, sr: u32, rng: &mut Pcg32) -> Vec<f32> {
        // Foam hiss: low-passed noise under a slow decay
        let foam_cutoff = rng.gen_range(0.1..0.3);
        let foam_filter = IirFilter::single_pole_lowpass(foam_cutoff);
        let foam_noise = gaussian_noise(n, intensity * 0.2, rng);
        let foam = foam_filter.apply(&foam_noise);
        let foam_env = exponential_decay(n, 3.0, sr);

        // Bubble sub-scheduler: density scales with the retreat window
        let mut bubbles = vec![0.0f32; n];
        let num_bubbles = (n as f32 * 0.01).round() as usize;
        for _ in 0..num_bubbles {
            let pos = if n > 100 { rng.gen_range(0..n - 100) } else { 0 };
            let dur = rng.gen_range(20..=100).min(n.max(1));
            let freq = rng.gen_range(800.0..3000.0);
            let bubble_intensity = rng.gen_range(0.01..0.05) * intensity;
            let pop = decaying_tone(dur, freq, 20.0, sr);
            let end = (pos + dur).min(n);
            for (i, sample) in bubbles[pos..end].iter_mut().enumerate() {
                *sample += bubble_intensity * pop[i];
            }
        }

        // Drainage: low sine draining away
        let drainage_freq = rng.gen_range(50.0..150.0);
        let drainage = decaying_tone(n, drainage_freq, 2.0, sr);

        (0..n)
            .map(|i| foam[i] * foam_env[i] + bubbles[i] + intensity * 0.2 * drainage[i])
            .collect()
    }
}

impl EventVoice for WaveBreak {
    fn name(&self) -> &'static str {
        "wave_breaks"
    }

    fn event_count(&self, duration_seconds: f64, _rng: &mut Pcg32) -> usize {
        (duration_seconds * self.density as f64).round() as usize
    }

    fn duration_range_secs(&self) -> (f32, f32) {
        (0.05, 0.2)
    }

    fn intensity_range(&self) -> (f32, f32) {
        (0.1, 0.8)
    }

    fn synthesize(&self, event: &TransientEvent, sample_rate: u32, rng: &mut Pcg32) -> Vec<f32> {
        let n = event.duration;
        let approach_len = (n as f32 * 0.3) as usize;
        let crash_len = (n as f32 * 0.4) as usize;
        let retreat_len = n - approach_len - crash_len;

        let mut waveform = Self::approach(approach_len, event.intensity, sample_rate, rng);
        waveform.extend(Self::crash(crash_len, event.intensity, sample_rate, rng));
        waveform.extend(Self::retreat(retreat_len, event.intensity, sample_rate, rng));
        debug_assert_eq!(waveform.len(), n);
        waveform
    }
}

// ------------------------------- Tidal pool --------------------------------

/// Water on rock: short drips and splashes around tidal pools.
#[derive(Debug, Clone, Copy)]
pub struct TidalPool {
    /// Average events per second
    pub density: f32,
}

impl TidalPool {
    pub fn new(density: f32) -> Self {
        Self {
            density: density.max(0.0),
        }
    }
}

impl EventVoice for TidalPool {
    fn name(&self) -> &'static str {
        "tidal_pool"
    }

    fn event_count(&self, duration_seconds: f64, _rng: &mut Pcg32) -> usize {
        (duration_seconds * self.density as f64).round() as usize
    }

    fn duration_range_secs(&self) -> (f32, f32) {
        (0.01, 0.05)
    }

    fn intensity_range(&self) -> (f32, f32) {
        (0.02, 0.15)
    }

    fn synthesize(&self, event: &TransientEvent, sample_rate: u32, rng: &mut Pcg32) -> Vec<f32> {
        let n = event.duration;
        let intensity = event.intensity;

        if rng.gen::<f32>() < 0.6 {
            // Drip: bare decaying tone
            let freq = rng.gen_range(800.0..2500.0);
            decaying_tone(n, freq, 15.0, sample_rate)
                .iter()
                .map(|s| intensity * s)
                .collect()
        } else {
            // Splash: tone plus noise under a faster decay
            let freq = rng.gen_range(1500.0..4000.0);
            let env = exponential_decay(n, 20.0, sample_rate);
            let tone = sine_wave(n, freq, 0.0, sample_rate);
            let noise = gaussian_noise(n, 1.0, rng);
            (0..n)
                .map(|i| intensity * env[i] * (0.7 * tone[i] + 0.3 * noise[i]))
                .collect()
        }
    }
}

// -------------------------------- Gull calls -------------------------------

/// Occasional distant gull calls: frequency-modulated cries kept quiet
/// enough to read as far away.
#[derive(Debug, Clone, Copy)]
pub struct GullCall {
    /// Probability that any calls occur at all in one render
    pub probability: f32,
}

impl GullCall {
    pub fn new(probability: f32) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl EventVoice for GullCall {
    fn name(&self) -> &'static str {
        "gull_calls"
    }

    fn event_count(&self, _duration_seconds: f64, rng: &mut Pcg32) -> usize {
        if self.probability > 0.0 && rng.gen::<f32>() < self.probability {
            rng.gen_range(1..=3)
        } else {
            0
        }
    }

    fn duration_range_secs(&self) -> (f32, f32) {
        (0.2, 0.5)
    }

    fn intensity_range(&self) -> (f32, f32) {
        (0.02, 0.08)
    }

    fn synthesize(&self, event: &TransientEvent, sample_rate: u32, rng: &mut Pcg32) -> Vec<f32> {
        let n = event.duration;
        let intensity = event.intensity;
        let sr = sample_rate as f32;

        let base_freq: f32 = rng.gen_range(800.0..1500.0);
        let noise = gaussian_noise(n, 1.0, rng);

        (0..n)
            .map(|i| {
                let t = i as f32 / sr;
                // Slow vibrato, ±30% of the base frequency at 3 Hz
                let freq = base_freq + base_freq * 0.3 * (TWO_PI * 3.0 * t).sin();
                // Attack-release shape: fast rise, slow fade
                let env = (-0.5 * t).exp() * (1.0 - (-5.0 * t).exp());
                intensity * env * ((TWO_PI * freq * t).sin() + 0.1 * noise[i])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_wave_break_event_count_scales_with_duration() {
        let voice = WaveBreak::new(8.0);
        assert_eq!(voice.event_count(1.0, &mut rng(0)), 8);
        assert_eq!(voice.event_count(10.0, &mut rng(0)), 80);
        assert_eq!(voice.event_count(0.0, &mut rng(0)), 0);
    }

    #[test]
    fn test_zero_density_renders_nothing() {
        let mut buf = AudioBuffer::silent(44100, 44100);
        render_events(&WaveBreak::new(0.0), &mut buf, &mut rng(1));
        render_events(&TidalPool::new(0.0), &mut buf, &mut rng(2));
        render_events(&GullCall::new(0.0), &mut buf, &mut rng(3));
        assert!(buf.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_wave_break_waveform_length_and_validity() {
        let voice = WaveBreak::new(8.0);
        let mut r = rng(9);
        for duration in [1usize, 2, 3, 10, 2205, 8820] {
            let event = TransientEvent {
                start: 0,
                duration,
                intensity: 0.5,
            };
            let w = voice.synthesize(&event, 44100, &mut r);
            assert_eq!(w.len(), duration);
            assert!(w.iter().all(|s| s.is_finite()));
        }
    }

    #[test]
    fn test_tidal_pool_waveform_decays() {
        let voice = TidalPool::new(15.0);
        let event = TransientEvent {
            start: 0,
            duration: 2205,
            intensity: 0.15,
        };
        let w = voice.synthesize(&event, 44100, &mut rng(4));
        let head: f32 = w[..200].iter().map(|s| s.abs()).fold(0.0, f32::max);
        let tail: f32 = w[2000..].iter().map(|s| s.abs()).fold(0.0, f32::max);
        assert!(tail < head);
    }

    #[test]
    fn test_gull_call_stays_distant() {
        let voice = GullCall::new(1.0);
        let event = TransientEvent {
            start: 0,
            duration: 22050,
            intensity: 0.08,
        };
        let w = voice.synthesize(&event, 44100, &mut rng(5));
        assert_eq!(w.len(), 22050);
        // 0.08 intensity with |sin + 0.1·noise| rarely exceeding ~1.5
        assert!(w.iter().all(|s| s.abs() < 0.3));
    }

    #[test]
    fn test_gull_count_respects_probability() {
        let always = GullCall::new(1.0);
        let never = GullCall::new(0.0);
        for seed in 0..16 {
            let c = always.event_count(10.0, &mut rng(seed));
            assert!((1..=3).contains(&c));
            assert_eq!(never.event_count(10.0, &mut rng(seed)), 0);
        }
    }

    #[test]
    fn test_events_never_write_past_buffer_end() {
        // Buffer shorter than one maximum event: starts clamp to 0 and the
        // overlap-add truncates. Must not panic.
        let mut buf = AudioBuffer::silent(100, 44100);
        render_events(&WaveBreak::new(8.0), &mut buf, &mut rng(6));
        render_events(&TidalPool::new(15.0), &mut buf, &mut rng(7));
        render_events(&GullCall::new(1.0), &mut buf, &mut rng(8));
        assert_eq!(buf.len(), 100);
        assert!(buf.is_valid());
    }

    #[test]
    fn test_events_are_deterministic_per_seed() {
        let mut a = AudioBuffer::silent(44100, 44100);
        let mut b = AudioBuffer::silent(44100, 44100);
        render_events(&WaveBreak::new(8.0), &mut a, &mut rng(42));
        render_events(&WaveBreak::new(8.0), &mut b, &mut rng(42));
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn test_events_populate_buffer() {
        let mut buf = AudioBuffer::silent(44100, 44100);
        render_events(&TidalPool::new(15.0), &mut buf, &mut rng(11));
        assert!(buf.samples().iter().any(|&s| s != 0.0));
    }
}
