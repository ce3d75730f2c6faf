//! Exponential smoothing of the 2D hand anchor.
//!
//! Only the 2D anchor is smoothed; the sampled depth and the final world
//! point are deliberately left raw.
use nalgebra::Point2;

/// `(previous * factor + raw) / (1 + factor)`; a factor of 0 disables
/// smoothing, and the first sample passes through unchanged.
pub fn smooth(previous: Option<Point2<f32>>, raw: Point2<f32>, factor: f32) -> Point2<f32> {
    match previous {
        Some(prev) if factor > 0.0 => {
            let total = prev.coords * factor + raw.coords;
            Point2::from(total / (1.0 + factor))
        }
        _ => raw,
    }
}
