//! Hand detector orchestrating the per-frame pipeline.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and demo tools.
//! - `pipeline` – the main [`HandDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::HandParams;
pub use pipeline::HandDetector;
