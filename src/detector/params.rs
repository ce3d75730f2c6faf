//! Parameter types configuring the detector stages.
//!
//! All knobs are plain numbers tuned against the physical rig; defaults
//! match the values the pipeline shipped with. For tuning, start with
//! `max_detection_threshold` (how far away objects still count as
//! foreground) and the contour/defect biases.

use serde::Deserialize;

/// Detector-wide parameters controlling the per-frame pipeline.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HandParams {
    /// Depth range (millimetres) mapped onto the 8-bit working image.
    pub max_image_depth: f32,
    /// Foreground cut-off on the scaled image. Higher detects objects
    /// further away.
    pub max_detection_threshold: u8,
    /// Lower hysteresis threshold of the edge detector.
    pub canny_low: f32,
    /// Upper hysteresis threshold of the edge detector.
    pub canny_high: f32,
    /// Window of the box blur closing gaps in the edge map.
    pub blur_size: usize,
    /// Minimum bounding width and height of a valid contour (pixels).
    pub min_contour_size: i32,
    /// Higher selects more central contours.
    pub contour_centrality_bias: f32,
    /// Higher selects larger contours.
    pub contour_area_bias: f32,
    /// Minimum depth (pixels) for a valid convexity defect.
    pub min_defect_depth: f32,
    /// Higher selects defects towards the top of the image.
    pub height_bias: f32,
    /// Higher selects deeper defects.
    pub depth_bias: f32,
    /// Higher selects defects opening along the image vertical.
    pub verticality_bias: f32,
    /// Number of depth samples per sampling run.
    pub depth_sample_count: u32,
    /// Pixel spacing between consecutive samples.
    pub depth_sample_spacing: f32,
    /// Offset of the first sample along the sampling direction.
    pub depth_sample_offset: f32,
    /// Samples at or below this millimetre value are discarded.
    pub depth_sample_min: f32,
    /// Samples at or above this millimetre value are discarded.
    pub depth_sample_max: f32,
    /// Higher smooths the 2D anchor more against previous frames; 0
    /// disables smoothing.
    pub position_smoothing: f32,
    /// Valid band (millimetres) for the averaged hand depth; frames
    /// outside it report no hand.
    pub min_hand_depth: f32,
    pub max_hand_depth: f32,
    /// Not-found frames tolerated before the tracker clears its persisted
    /// direction and smoothing history.
    pub miss_hold_frames: u32,
}

impl Default for HandParams {
    fn default() -> Self {
        Self {
            max_image_depth: 1000.0,
            max_detection_threshold: 170,
            canny_low: 200.0,
            canny_high: 250.0,
            blur_size: 6,
            min_contour_size: 40,
            contour_centrality_bias: 0.0,
            contour_area_bias: 1.0,
            min_defect_depth: 20.0,
            height_bias: 1.0,
            depth_bias: 0.5,
            verticality_bias: 10.0,
            depth_sample_count: 3,
            depth_sample_spacing: 5.0 / 3.0,
            depth_sample_offset: 2.0,
            depth_sample_min: 200.0,
            depth_sample_max: 1000.0,
            position_smoothing: 0.0,
            min_hand_depth: 200.0,
            max_hand_depth: 1000.0,
            miss_hold_frames: 5,
        }
    }
}

impl HandParams {
    pub(crate) fn sample_params(&self) -> crate::tracker::SampleParams {
        crate::tracker::SampleParams {
            count: self.depth_sample_count,
            spacing: self.depth_sample_spacing,
            offset: self.depth_sample_offset,
            min: self.depth_sample_min,
            max: self.depth_sample_max,
        }
    }
}
