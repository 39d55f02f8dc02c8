//! Signal processing passes applied to the accumulated mix.

pub mod dynamics;
pub mod filter;
pub mod spatial;

pub use filter::IirFilter;
