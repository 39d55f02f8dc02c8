//! CLI Module
//!
//! Command-line interface around the soundscape engine. The engine itself
//! only sees `(sample_rate, duration)`; everything here is the collaborator
//! shell that parses arguments and writes the result to disk.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pelagos - procedural ocean soundscape generator
#[derive(Parser, Debug)]
#[command(name = "pelagos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a soundscape to a WAV file
    #[command(name = "render")]
    Render {
        /// Output WAV path
        output: PathBuf,

        /// Duration in seconds
        #[arg(short, long, default_value_t = 10.0)]
        duration: f64,

        /// Sample rate in Hz
        #[arg(short, long, default_value_t = 44100)]
        sample_rate: u32,

        /// Master seed (omit for a fresh soundscape each run)
        #[arg(long)]
        seed: Option<u64>,

        /// Output bit depth (16, 24, or 32)
        #[arg(short, long, default_value_t = 24)]
        bit_depth: u16,

        /// JSON config file overriding the default scene
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
