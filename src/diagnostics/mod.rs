//! Diagnostics data model exposed by the detector.
//!
//! [`DetectionReport`] bundles the per-frame result with a
//! [`PipelineTrace`] describing every stage the pipeline executed, and
//! [`DrawCommand`]s describe the debug overlay without the pipeline ever
//! drawing into its own working images.

pub mod overlay;
pub mod pipeline;
pub mod timing;

pub use overlay::{render_overlay, DrawCommand};
pub use pipeline::{
    ContourPick, ContourStage, DefectStage, DetectionReport, ForegroundStage, InputDescriptor,
    PipelineTrace, SamplingStage,
};
pub use timing::{StageTiming, TimingBreakdown};
