//! Multi-point depth sampling around the hand anchors.
//!
//! Sampling walks from an anchor into the hand mass (against the hand
//! direction, away from the silhouette edge) so the readings land on the
//! hand instead of the background behind the finger gap.
use crate::image::DepthU16;
use nalgebra::{Point2, Vector2};

/// Knobs for a sampling run.
#[derive(Clone, Copy, Debug)]
pub struct SampleParams {
    pub count: u32,
    pub spacing: f32,
    pub offset: f32,
    /// Valid millimetre band; readings outside it are discarded.
    pub min: f32,
    pub max: f32,
}

/// Average raw depth over `count` samples stepped along `direction` from
/// `start`. Samples outside the valid band or outside the frame are
/// discarded; returns 0 when no sample is valid.
pub fn sample_depth_in_direction(
    depth: &DepthU16,
    start: Point2<f32>,
    direction: Vector2<f32>,
    params: &SampleParams,
) -> f32 {
    let mut total = 0.0f32;
    let mut valid = 0u32;

    for i in 0..params.count {
        let pos = start + direction * (params.offset + params.spacing * i as f32);
        let Some(raw) = depth.get_checked(pos.x as i32, pos.y as i32) else {
            continue;
        };
        let value = raw as f32;
        if value > params.min && value < params.max {
            total += value;
            valid += 1;
        }
    }

    if valid > 0 {
        total / valid as f32
    } else {
        0.0
    }
}
