#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;
pub mod projection;
pub mod types;

// "Expert" modules – still public, but considered unstable internals.
pub mod config;
pub mod contours;
pub mod defects;
pub mod edges;
pub mod foreground;
pub mod tracker;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{HandDetector, HandParams};
pub use crate::types::HandResult;

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// Camera-geometry helpers that are generally useful.
pub use crate::projection::{CameraPose, PinholeIntrinsics, Transform3D, UnitPlaneMapping};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use hand_detector::prelude::*;
/// use hand_detector::projection::{CameraPose, Transform3D};
///
/// # fn main() {
/// let (w, h) = (448usize, 450usize);
/// let buffer = vec![0u16; w * h];
/// let frame = DepthU16 { w, h, stride: w, data: &buffer };
///
/// let pose = CameraPose {
///     view_transform: Transform3D::identity(),
///     frame_to_origin: Transform3D::identity(),
/// };
///
/// let mut det = HandDetector::new(HandParams::default());
/// let result = det.process(frame, &pose, |_uv: (f32, f32)| (0.0, 0.0));
/// println!("found={} latency_ms={:.3}", result.found, result.latency_ms);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::DepthU16;
    pub use crate::{HandDetector, HandParams, HandResult};
}
