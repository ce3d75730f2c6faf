//! Structured per-frame trace of the detector pipeline.
use crate::contours::Bound;
use crate::defects::Defect;
use crate::diagnostics::{DrawCommand, TimingBreakdown};
use crate::types::HandResult;
use serde::Serialize;

/// Result produced by
/// [`HandDetector::process_with_diagnostics`](crate::HandDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub hand: HandResult,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ForegroundStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contours: Option<ContourStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defects: Option<DefectStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling: Option<SamplingStage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overlay: Vec<DrawCommand>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub hand_closed: bool,
}

/// Depth normalization / foreground isolation stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForegroundStage {
    pub near_pixels: usize,
}

/// Contour extraction and hand-candidate selection stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContourStage {
    /// Contours extracted before size filtering.
    pub extracted: usize,
    /// Candidates surviving the size filter.
    pub candidates: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<ContourPick>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContourPick {
    pub bound: Bound,
    pub score: f32,
    pub points: usize,
}

/// Convexity-defect stage (OPEN frames only).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefectStage {
    /// Defects computed on the winning contour.
    pub evaluated: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Defect>,
}

/// Depth-sampling stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplingStage {
    pub depth_mm: f32,
    pub within_valid_band: bool,
}
