//! Engine types: the master audio buffer and WAV export.

pub mod buffer;
pub mod io;

pub use buffer::AudioBuffer;
pub use io::{export_wav, ExportFormat};
