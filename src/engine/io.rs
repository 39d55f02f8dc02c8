//! WAV export for rendered soundscapes
//!
//! The engine produces a finished mono buffer; this module is the
//! collaborator that writes it to disk. Primary format is WAV with
//! 16/24-bit integer or 32-bit float samples.

use std::path::Path;

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::engine::buffer::AudioBuffer;
use crate::error::{PelagosError, Result};

/// Export format configuration
#[derive(Debug, Clone, Copy)]
pub struct ExportFormat {
    /// Bit depth: 16, 24, or 32 (default: 24)
    pub bit_depth: u16,
}

impl Default for ExportFormat {
    fn default() -> Self {
        ExportFormat { bit_depth: 24 }
    }
}

impl ExportFormat {
    /// Create a new export format with the given bit depth
    pub fn new(bit_depth: u16) -> Self {
        ExportFormat { bit_depth }
    }

    /// CD quality (16-bit)
    pub fn cd_quality() -> Self {
        ExportFormat { bit_depth: 16 }
    }

    /// Maximum quality (32-bit float)
    pub fn max_quality() -> Self {
        ExportFormat { bit_depth: 32 }
    }
}

/// Export a rendered buffer as a mono WAV file.
///
/// The buffer's own sample rate is written; no resampling happens here.
pub fn export_wav(buffer: &AudioBuffer, path: &Path, format: ExportFormat) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: format.bit_depth,
        sample_format: if format.bit_depth == 32 {
            SampleFormat::Float
        } else {
            SampleFormat::Int
        },
    };

    let mut writer = WavWriter::create(path, spec)?;

    match format.bit_depth {
        16 => {
            for &sample in buffer.samples() {
                let scaled = (sample * 32767.0).clamp(-32768.0, 32767.0) as i16;
                writer.write_sample(scaled)?;
            }
        }
        24 => {
            for &sample in buffer.samples() {
                // 24-bit stored as i32 in hound
                let scaled = (sample * 8388607.0).clamp(-8388608.0, 8388607.0) as i32;
                writer.write_sample(scaled)?;
            }
        }
        32 => {
            for &sample in buffer.samples() {
                writer.write_sample(sample)?;
            }
        }
        other => {
            return Err(PelagosError::Export {
                reason: format!("{}-bit audio (only 16, 24, 32 supported)", other),
            });
        }
    }

    writer.finalize()?;
    Ok(())
}
