//! Pelagos - Procedural Ocean Soundscape Engine
//!
//! Pelagos synthesizes a multi-layered ocean soundscape as a complete
//! time-domain buffer from `(sample_rate, duration)`. Nothing is recorded
//! or sampled; every sound comes from mathematical models and stochastic
//! event placement.
//!
//! # Architecture
//!
//! The pipeline accumulates layers into one master buffer, then shapes it:
//! - Deep swells: additive sub-audio synthesis biased by a harmonic weight table
//! - Transient events: wave breaks, tidal-pool drips, distant gull calls
//! - Ambience: underwater pressure, subsurface currents, wind bands
//! - Finishing: spatial modulation, weight-table enhancement, multi-band
//!   dynamics, normalization
//!
//! # Example
//!
//! ```no_run
//! let samples = pelagos::generate_ocean_soundscape(44100, 10.0).unwrap();
//! assert_eq!(samples.len(), 441000);
//! ```

pub mod cli;
pub mod config;
pub mod dsp;
pub mod engine;
pub mod error;
pub mod layers;
pub mod synth;

pub use config::OceanConfig;
pub use engine::{export_wav, AudioBuffer, ExportFormat};
pub use error::{PelagosError, Result};
pub use synth::{generate_ocean_soundscape, OceanSynth};
