//! Soundscape layers.
//!
//! Each layer contributes additively to the master buffer: the
//! deterministic swell motion, the three stochastic transient voices, and
//! the filtered-noise ambience. Layers are independent until their
//! accumulation step, so they each draw from their own random stream.

pub mod ambient;
pub mod events;
pub mod swell;

pub use events::{render_events, EventVoice, GullCall, TidalPool, TransientEvent, WaveBreak};
