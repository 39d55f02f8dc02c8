//! CLI Command Implementations

use std::path::Path;

use log::info;

use crate::config::OceanConfig;
use crate::engine::{export_wav, ExportFormat};
use crate::error::Result;
use crate::synth::OceanSynth;

/// Render a soundscape and write it as a WAV file.
pub fn render(
    output: &Path,
    duration: f64,
    sample_rate: u32,
    seed: Option<u64>,
    bit_depth: u16,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => OceanConfig::from_json_file(path)?,
        None => OceanConfig::default(),
    };
    // --seed wins over the config file
    if seed.is_some() {
        config.seed = seed;
    }

    let synth = OceanSynth::new(config);
    let buffer = synth.render(sample_rate, duration)?;

    export_wav(&buffer, output, ExportFormat::new(bit_depth))?;
    info!(
        "wrote {} ({:.1}s at {} Hz, {}-bit)",
        output.display(),
        buffer.duration(),
        buffer.sample_rate(),
        bit_depth
    );
    println!("Soundscape written: {}", output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_command_writes_wav() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ocean.wav");
        render(&path, 0.1, 22050, Some(42), 16, None).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 22050);
        assert_eq!(reader.len(), 2205);
    }

    #[test]
    fn test_render_command_respects_config_file() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("scene.json");
        std::fs::write(&cfg_path, r#"{"seed": 9, "break_density": 0.0}"#).unwrap();

        let path = dir.path().join("ocean.wav");
        render(&path, 0.1, 22050, None, 16, Some(&cfg_path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_command_rejects_bad_duration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ocean.wav");
        let err = render(&path, -1.0, 44100, None, 16, None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
        assert!(!path.exists());
    }
}
