//! Two-state (open/closed) hand pose estimation and cross-frame state.
//!
//! OPEN frames locate the thumb/finger gap via convexity defects and
//! refresh the persistent hand direction; CLOSED frames reuse the last
//! direction to follow the fist's leading edge along the contour. The
//! direction is only ever written in the OPEN state.

pub mod sampling;
pub mod smoothing;

pub use sampling::{sample_depth_in_direction, SampleParams};
pub use smoothing::smooth;

use crate::contours::Contour;
use crate::defects::{find_best_defect, Defect, DefectScoring};
use crate::image::DepthU16;
use log::debug;
use nalgebra::{Point2, Vector2};

/// Cross-frame tracking state. Owned by the detector; mutated once per
/// frame by the estimator and the smoother.
#[derive(Clone, Debug, Default)]
pub struct TrackerState {
    /// Raw 2D anchor of the current frame.
    pub position: Option<Point2<f32>>,
    /// Smoothed 2D anchor carried across frames.
    pub smoothed: Option<Point2<f32>>,
    /// Thumb and finger tips from the last OPEN estimate.
    pub finger_positions: Option<(Point2<f32>, Point2<f32>)>,
    /// Deepest point of the winning defect (palm side of the gap).
    pub palm_position: Option<Point2<f32>>,
    /// Hand direction from the most recent OPEN frame, unit length.
    pub direction: Option<Vector2<f32>>,
    /// Whether the previous frame produced a hand estimate.
    pub last_found: bool,
    /// Consecutive frames without an estimate.
    pub misses: u32,
}

impl TrackerState {
    /// Register a not-found frame. The direction and smoothing history are
    /// held for `hold_frames` consecutive misses, then cleared so a stale
    /// direction cannot steer a much later CLOSED frame.
    pub fn register_miss(&mut self, hold_frames: u32) {
        self.last_found = false;
        self.misses = self.misses.saturating_add(1);
        if self.misses > hold_frames {
            self.direction = None;
            self.smoothed = None;
            self.finger_positions = None;
            self.palm_position = None;
            self.position = None;
        }
    }

    pub fn register_found(&mut self) {
        self.last_found = true;
        self.misses = 0;
    }
}

/// Outcome of an OPEN-state estimate.
#[derive(Clone, Debug)]
pub struct OpenEstimate {
    pub anchor: Point2<f32>,
    pub defect: Defect,
}

/// OPEN state: anchor at the midpoint of the winning defect; the hand
/// direction is the normal of the finger-tip chord, oriented away from the
/// contour's center of mass toward the gap.
///
/// Returns `None` when no qualifying defect exists or the defect's chord
/// is degenerate (start == end leaves the direction undefined).
pub fn estimate_open(
    contour: &Contour,
    min_defect_depth: f32,
    scoring: &DefectScoring,
    state: &mut TrackerState,
) -> Option<OpenEstimate> {
    let defect = find_best_defect(contour, min_defect_depth, scoring)?;

    let across = Vector2::new(
        (defect.start.x - defect.end.x) as f32,
        (defect.start.y - defect.end.y) as f32,
    );
    let norm = across.norm();
    if norm <= f32::EPSILON {
        debug!("defect chord degenerate: start == end at {:?}", defect.start);
        return None;
    }
    let mut direction = Vector2::new(across.y, -across.x) / norm;

    let mid = defect.mid();
    if let Some(com) = contour.centroid() {
        // Orient the direction out of the hand mass toward the gap.
        if direction.dot(&(mid - com)) < 0.0 {
            direction = -direction;
        }
    }

    state.position = Some(mid);
    state.direction = Some(direction);
    state.finger_positions = Some((
        Point2::new(defect.start.x as f32, defect.start.y as f32),
        Point2::new(defect.end.x as f32, defect.end.y as f32),
    ));
    state.palm_position = Some(Point2::new(defect.far.x as f32, defect.far.y as f32));

    Some(OpenEstimate {
        anchor: mid,
        defect,
    })
}

/// CLOSED state: anchor at the contour point furthest along the persisted
/// hand direction. `None` when no OPEN frame has established a direction
/// yet or the contour is empty.
pub fn estimate_closed(contour: &Contour, state: &mut TrackerState) -> Option<Point2<f32>> {
    let direction = state.direction?;
    let mut best: Option<(f32, Point2<f32>)> = None;
    for p in &contour.points {
        let pf = Vector2::new(p.x as f32, p.y as f32);
        let distance = direction.dot(&pf);
        if best.map_or(true, |(d, _)| distance > d) {
            best = Some((distance, Point2::new(pf.x, pf.y)));
        }
    }
    let (_, anchor) = best?;
    state.position = Some(anchor);
    Some(anchor)
}

/// Average hand depth in millimetres, or 0 when every sample is invalid.
///
/// OPEN: mean of the two per-finger sampling runs (kept as a plain average
/// of the two means, matching the estimator's original behavior even when
/// one run comes back empty). CLOSED: a single run from the anchor. Both
/// sample against the hand direction, into the hand mass.
pub fn hand_depth(
    depth: &DepthU16,
    state: &TrackerState,
    is_closed: bool,
    params: &SampleParams,
) -> f32 {
    let Some(direction) = state.direction else {
        return 0.0;
    };
    let into_hand = -direction;

    if is_closed {
        match state.position {
            Some(anchor) => sample_depth_in_direction(depth, anchor, into_hand, params),
            None => 0.0,
        }
    } else {
        match state.finger_positions {
            Some((f1, f2)) => {
                let total = sample_depth_in_direction(depth, f1, into_hand, params)
                    + sample_depth_in_direction(depth, f2, into_hand, params);
                total / 2.0
            }
            None => 0.0,
        }
    }
}
