//! Detector pipeline orchestrating end-to-end hand detection.
//!
//! The [`HandDetector`] exposes a simple API: feed a depth frame plus the
//! frame's camera pose and get a world-space hand estimate. Internally it
//! coordinates foreground isolation, edge/contour extraction, the
//! open/closed pose estimator, depth sampling, anchor smoothing and the
//! camera back-projection.
//!
//! Stages
//! - Foreground: rescale u16 depth to 8 bits, mask far pixels.
//! - Edges: Canny-style detection plus a box blur closing outline gaps.
//! - Contours: external border following, size filter, heuristic scoring.
//! - Pose: OPEN locates the thumb/finger gap via convexity defects and
//!   refreshes the persisted hand direction; CLOSED walks the contour
//!   along the stored direction.
//! - Sampling: multi-point raw-depth average into the hand mass.
//! - Smoothing: exponential filter on the 2D anchor only.
//! - Projection: unit-plane ray scaled by depth, rotated into the world.
//!
//! Every failure path resolves to `found = false`; the pipeline raises no
//! errors and keeps no partial state for missed frames beyond the
//! configured hold.

use super::params::HandParams;
use crate::contours::{
    extract_external_contours, filter_contours, find_best_contour, ContourScoring,
};
use crate::defects::{compute_defects, DefectScoring};
use crate::diagnostics::{
    ContourPick, ContourStage, DefectStage, DetectionReport, DrawCommand, ForegroundStage,
    InputDescriptor, PipelineTrace, SamplingStage,
};
use crate::edges::{box_blur, detect_edges};
use crate::foreground::isolate_foreground;
use crate::image::{DepthU16, GrayImageU8};
use crate::projection::{project_to_world, CameraPose, UnitPlaneMapping};
use crate::tracker::{estimate_closed, estimate_open, hand_depth, smooth, TrackerState};
use crate::types::HandResult;
use log::debug;
use nalgebra::Point2;
use std::time::Instant;

/// Hand detector owning all cross-frame state. Invoke once per rendered
/// frame from a single thread; `&mut self` enforces the single-writer
/// contract on the tracker state.
pub struct HandDetector {
    params: HandParams,
    state: TrackerState,
    is_closed: bool,
    show_debug: bool,
    debug_image: Option<GrayImageU8>,
}

impl HandDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: HandParams) -> Self {
        Self {
            params,
            state: TrackerState::default(),
            is_closed: false,
            show_debug: false,
            debug_image: None,
        }
    }

    /// Gesture signal from the spatial-input collaborator, set before each
    /// frame's processing.
    pub fn set_hand_closed(&mut self, is_closed: bool) {
        self.is_closed = is_closed;
    }

    /// Enable or disable the debug overlay (and the per-frame cost of
    /// rasterizing it).
    pub fn show_debug_info(&mut self, enabled: bool) {
        self.show_debug = enabled;
        if !enabled {
            self.debug_image = None;
        }
    }

    /// Overlay rendered during the most recent frame, when enabled.
    pub fn debug_image(&self) -> Option<&GrayImageU8> {
        self.debug_image.as_ref()
    }

    /// Replace the detector parameters; tracking state is preserved.
    pub fn set_params(&mut self, params: HandParams) {
        self.params = params;
    }

    pub fn params(&self) -> &HandParams {
        &self.params
    }

    /// Run the pipeline for one frame.
    pub fn process<M: UnitPlaneMapping>(
        &mut self,
        depth: DepthU16,
        pose: &CameraPose,
        mapping: M,
    ) -> HandResult {
        self.process_with_diagnostics(depth, pose, mapping).hand
    }

    /// Run the pipeline and capture the full stage trace.
    pub fn process_with_diagnostics<M: UnitPlaneMapping>(
        &mut self,
        depth: DepthU16,
        pose: &CameraPose,
        mapping: M,
    ) -> DetectionReport {
        let total_start = Instant::now();
        let mut trace = PipelineTrace {
            input: InputDescriptor {
                width: depth.w,
                height: depth.h,
                hand_closed: self.is_closed,
            },
            ..Default::default()
        };
        let mut overlay = Vec::new();

        let hand = self.run_frame(&depth, pose, &mapping, &mut trace, &mut overlay);

        let mut hand = hand.unwrap_or_else(|| {
            self.state.register_miss(self.params.miss_hold_frames);
            HandResult {
                hand_closed: self.is_closed,
                ..Default::default()
            }
        });
        hand.latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        trace.timings.total_ms = hand.latency_ms;

        if self.show_debug {
            trace.overlay = overlay;
        }

        DetectionReport { hand, trace }
    }

    /// The fallible core; `None` means "no hand this frame".
    fn run_frame<M: UnitPlaneMapping>(
        &mut self,
        depth: &DepthU16,
        pose: &CameraPose,
        mapping: &M,
        trace: &mut PipelineTrace,
        overlay: &mut Vec<DrawCommand>,
    ) -> Option<HandResult> {
        let params = &self.params;

        // Foreground isolation.
        let stage_start = Instant::now();
        let fg = isolate_foreground(depth, params.max_image_depth, params.max_detection_threshold);
        trace.foreground = Some(ForegroundStage {
            near_pixels: fg.near_pixels,
        });
        trace
            .timings
            .record("foreground", stage_start.elapsed().as_secs_f64() * 1000.0);

        // Edge detection and gap closing.
        let stage_start = Instant::now();
        let edges = detect_edges(&fg.hands.as_view(), params.canny_low, params.canny_high);
        let blurred = box_blur(&edges, params.blur_size);
        trace
            .timings
            .record("edges", stage_start.elapsed().as_secs_f64() * 1000.0);

        // Contour extraction and candidate selection.
        let stage_start = Instant::now();
        let raw_contours = extract_external_contours(&blurred);
        let extracted = raw_contours.len();
        let candidates = filter_contours(raw_contours, params.min_contour_size);
        let scoring = ContourScoring {
            image_width: depth.w,
            image_height: depth.h,
            centrality_bias: params.contour_centrality_bias,
            area_bias: params.contour_area_bias,
        };
        let best = find_best_contour(&candidates, &scoring);
        trace.contours = Some(ContourStage {
            extracted,
            candidates: candidates.len(),
            winner: best.map(|i| ContourPick {
                bound: candidates[i].1,
                score: scoring.score(&candidates[i].1),
                points: candidates[i].0.len(),
            }),
        });
        trace
            .timings
            .record("contours", stage_start.elapsed().as_secs_f64() * 1000.0);

        if self.show_debug {
            for (contour, bound) in &candidates {
                overlay.push(DrawCommand::Outline {
                    points: contour.points.iter().map(|p| (p.x, p.y)).collect(),
                    intensity: 255,
                });
                overlay.push(DrawCommand::Rect {
                    bound: *bound,
                    intensity: 100,
                });
            }
        }

        let Some(best_idx) = best else {
            debug!("no qualifying contour ({extracted} extracted)");
            self.render_debug(&fg.scaled, overlay);
            return None;
        };
        let contour = &candidates[best_idx].0;

        // Pose estimation.
        let stage_start = Instant::now();
        let anchor = if self.is_closed {
            let anchor = estimate_closed(contour, &mut self.state);
            if anchor.is_none() {
                debug!("closed frame before any open frame; no direction");
            }
            anchor
        } else {
            let defect_scoring = DefectScoring {
                image_height: depth.h,
                height_bias: params.height_bias,
                depth_bias: params.depth_bias,
                verticality_bias: params.verticality_bias,
            };
            let evaluated = compute_defects(contour).len();
            let estimate = estimate_open(
                contour,
                params.min_defect_depth,
                &defect_scoring,
                &mut self.state,
            );
            trace.defects = Some(DefectStage {
                evaluated,
                winner: estimate.as_ref().map(|e| e.defect.clone()),
            });
            estimate.map(|e| e.anchor)
        };
        trace
            .timings
            .record("pose", stage_start.elapsed().as_secs_f64() * 1000.0);

        let Some(anchor) = anchor else {
            self.render_debug(&fg.scaled, overlay);
            return None;
        };

        // Depth sampling.
        let stage_start = Instant::now();
        let depth_mm = hand_depth(depth, &self.state, self.is_closed, &params.sample_params());
        let within_valid_band = depth_mm > params.min_hand_depth && depth_mm < params.max_hand_depth;
        trace.sampling = Some(SamplingStage {
            depth_mm,
            within_valid_band,
        });
        trace
            .timings
            .record("sampling", stage_start.elapsed().as_secs_f64() * 1000.0);

        // Anchor smoothing (depth and world point stay raw).
        let smoothed = smooth(self.state.smoothed, anchor, params.position_smoothing);
        self.state.smoothed = Some(smoothed);

        if self.show_debug {
            self.push_pose_overlay(overlay, smoothed, depth_mm);
        }
        self.render_debug(&fg.scaled, overlay);

        if !within_valid_band {
            debug!("hand depth {depth_mm:.0}mm outside valid band; dropping frame");
            return None;
        }

        // Back-projection into the world frame.
        let stage_start = Instant::now();
        let position = project_to_world(smoothed, depth_mm, pose, mapping)?;
        trace
            .timings
            .record("projection", stage_start.elapsed().as_secs_f64() * 1000.0);

        self.state.register_found();
        Some(HandResult {
            found: true,
            position,
            anchor: (smoothed.x, smoothed.y),
            depth_mm,
            hand_closed: self.is_closed,
            latency_ms: 0.0, // filled in by the caller
        })
    }

    fn push_pose_overlay(
        &self,
        overlay: &mut Vec<DrawCommand>,
        anchor: Point2<f32>,
        depth_mm: f32,
    ) {
        overlay.push(DrawCommand::Cross {
            x: anchor.x,
            y: anchor.y,
            size: 6.0,
            intensity: 255,
        });
        if let Some(direction) = self.state.direction {
            overlay.push(DrawCommand::Line {
                x1: anchor.x,
                y1: anchor.y,
                x2: anchor.x + direction.x * 50.0,
                y2: anchor.y + direction.y * 50.0,
                intensity: 200,
            });
        }
        if self.is_closed {
            overlay.push(DrawCommand::Label {
                x: 20.0,
                y: 20.0,
                text: "Closed".into(),
            });
        } else {
            overlay.push(DrawCommand::Label {
                x: 20.0,
                y: 20.0,
                text: "Open".into(),
            });
            if let Some((f1, f2)) = self.state.finger_positions {
                for finger in [f1, f2] {
                    overlay.push(DrawCommand::Circle {
                        x: finger.x,
                        y: finger.y,
                        radius: 6,
                        intensity: 255,
                    });
                }
            }
            if let Some(palm) = self.state.palm_position {
                overlay.push(DrawCommand::Circle {
                    x: palm.x,
                    y: palm.y,
                    radius: 6,
                    intensity: 255,
                });
            }
        }
        overlay.push(DrawCommand::Label {
            x: 20.0,
            y: 40.0,
            text: format!("{depth_mm:.0}"),
        });
    }

    fn render_debug(&mut self, scaled: &GrayImageU8, overlay: &[DrawCommand]) {
        if self.show_debug {
            self.debug_image = Some(crate::diagnostics::render_overlay(scaled, overlay));
        }
    }
}
