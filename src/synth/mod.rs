//! The synthesis pipeline.
//!
//! [`OceanSynth`] owns a configuration and renders complete buffers:
//! validate parameters, build the harmonic weight table, accumulate the
//! swell, transient, and ambient layers, then run the spatial, enhancement,
//! and dynamics passes. Data flows strictly forward; each layer draws from
//! its own seeded random stream so layers stay independently reproducible.

pub mod harmonics;
pub mod primitives;
pub mod rng;

use crate::config::OceanConfig;
use crate::dsp::{dynamics, spatial};
use crate::engine::AudioBuffer;
use crate::error::{PelagosError, Result};
use crate::layers::{ambient, events, swell};
use crate::layers::{GullCall, TidalPool, WaveBreak};
use harmonics::HarmonicWeightTable;
use rng::Stream;

/// Ocean soundscape synthesizer.
#[derive(Debug, Clone, Default)]
pub struct OceanSynth {
    config: OceanConfig,
}

impl OceanSynth {
    pub fn new(config: OceanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OceanConfig {
        &self.config
    }

    /// Render one complete soundscape buffer.
    ///
    /// Output length is exactly `round(sample_rate · duration_seconds)` and
    /// every sample lies in `[-1, 1]`. Non-positive parameters fail with
    /// `InvalidParameter` before any buffer is allocated.
    pub fn render(&self, sample_rate: u32, duration_seconds: f64) -> Result<AudioBuffer> {
        if sample_rate == 0 {
            return Err(PelagosError::InvalidParameter {
                name: "sample_rate",
                value: 0.0,
            });
        }
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(PelagosError::InvalidParameter {
                name: "duration_seconds",
                value: duration_seconds,
            });
        }

        let num_samples = (sample_rate as f64 * duration_seconds).round() as usize;
        let master_seed = self.config.seed.unwrap_or_else(rng::entropy_seed);

        log::info!(
            "rendering {duration_seconds}s at {sample_rate} Hz ({num_samples} samples), seed {master_seed}"
        );

        let mut table_rng = rng::create_stream(master_seed, Stream::Harmonics);
        let table =
            HarmonicWeightTable::build(swell::SWELL_FREQUENCIES.len(), &mut table_rng);

        let mut buffer = AudioBuffer::silent(num_samples, sample_rate);

        swell::render(
            &mut buffer,
            &table,
            &mut rng::create_stream(master_seed, Stream::Swell),
        );
        events::render_events(
            &WaveBreak::new(self.config.break_density),
            &mut buffer,
            &mut rng::create_stream(master_seed, Stream::WaveBreaks),
        );
        events::render_events(
            &TidalPool::new(self.config.pool_density),
            &mut buffer,
            &mut rng::create_stream(master_seed, Stream::TidalPool),
        );
        events::render_events(
            &GullCall::new(self.config.gull_probability),
            &mut buffer,
            &mut rng::create_stream(master_seed, Stream::GullCalls),
        );
        ambient::render_underwater(
            &mut buffer,
            &mut rng::create_stream(master_seed, Stream::Underwater),
        );
        ambient::render_wind(
            &mut buffer,
            &mut rng::create_stream(master_seed, Stream::Wind),
        );

        spatial::spatial_modulation(&mut buffer);
        spatial::enhance(&mut buffer, &table);
        dynamics::process(&mut buffer);

        log::debug!(
            "render complete: peak {:.3}, rms {:.1} dB",
            buffer.peak(),
            buffer.rms_db()
        );
        Ok(buffer)
    }
}

/// Generate an ocean soundscape with the default scene configuration and an
/// entropy-drawn seed. The single entry point for callers that do not need
/// configuration: returns the raw sample sequence.
pub fn generate_ocean_soundscape(sample_rate: u32, duration_seconds: f64) -> Result<Vec<f32>> {
    let synth = OceanSynth::new(OceanConfig::default());
    Ok(synth.render(sample_rate, duration_seconds)?.into_samples())
}
