//! Convexity defects and finger/thumb-split selection.
//!
//! A defect is the concavity between two hull-adjacent contour points: the
//! hull vertices `start`/`end` and the deepest contour point `far` between
//! them. On an open hand the gap between thumb and fingers produces the
//! dominant defect; its score weighs image height, defect depth and how
//! vertically the concavity opens.

pub mod hull;

pub use hull::convex_hull_indices;

use crate::contours::Contour;
use log::debug;
use nalgebra::{Point2, Vector2};
use serde::Serialize;

/// Geometric gap between two hull vertices. Depth is in pixels, quantized
/// to 1/256 steps (the fixed-point resolution of the source data format).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    pub start: Point2<i32>,
    pub end: Point2<i32>,
    pub far: Point2<i32>,
    pub depth: f32,
}

impl Defect {
    /// Midpoint between the two hull vertices; the 2D hand anchor when
    /// this defect wins.
    pub fn mid(&self) -> Point2<f32> {
        Point2::new(
            (self.start.x + self.end.x) as f32 * 0.5,
            (self.start.y + self.end.y) as f32 * 0.5,
        )
    }
}

/// Scoring context: image height plus the three bias knobs.
#[derive(Clone, Copy, Debug)]
pub struct DefectScoring {
    pub image_height: usize,
    /// Higher favors defects towards the top of the image.
    pub height_bias: f32,
    /// Higher favors deeper defects.
    pub depth_bias: f32,
    /// Higher favors defects opening upwards.
    pub verticality_bias: f32,
}

impl DefectScoring {
    /// `None` when the defect is degenerate (mid == far, no opening
    /// direction).
    pub fn score(&self, defect: &Defect) -> Option<f32> {
        let far = Point2::new(defect.far.x as f32, defect.far.y as f32);
        let opening = defect.mid() - far;
        let norm = opening.norm();
        if norm <= f32::EPSILON {
            debug!("degenerate defect at {:?}: mid == far", defect.far);
            return None;
        }
        let direction = opening / norm;

        let height = self.image_height as f32 - far.y;
        let verticality = Vector2::new(0.0, 1.0).dot(&direction);

        Some(
            height * self.height_bias
                + defect.depth * self.depth_bias
                + verticality * self.verticality_bias,
        )
    }
}

/// Compute all convexity defects of a contour, ordered by the contour
/// index of their `start` vertex.
///
/// Each pair of hull-adjacent contour points delimits a contour arc; the
/// arc point with the greatest perpendicular distance to the hull edge is
/// the defect's `far` point. Arcs with no interior points produce no
/// defect. Every emitted defect is a genuine concavity, so no positional
/// placeholder entry exists in the returned list.
pub fn compute_defects(contour: &Contour) -> Vec<Defect> {
    let points = &contour.points;
    let hull = convex_hull_indices(points);
    if hull.len() < 2 {
        return Vec::new();
    }

    let mut defects = Vec::new();
    for (k, &start_idx) in hull.iter().enumerate() {
        let end_idx = hull[(k + 1) % hull.len()];
        let start = points[start_idx];
        let end = points[end_idx];
        if start == end {
            continue;
        }

        let mut deepest: Option<(usize, f64)> = None;
        let mut visit = |i: usize| {
            let d = point_line_distance(&points[i], &start, &end);
            if deepest.map_or(true, |(_, best)| d > best) {
                deepest = Some((i, d));
            }
        };

        // Walk the contour arc strictly between the two hull vertices,
        // wrapping past the end of the point list on the closing edge.
        if start_idx < end_idx {
            for i in start_idx + 1..end_idx {
                visit(i);
            }
        } else {
            for i in start_idx + 1..points.len() {
                visit(i);
            }
            for i in 0..end_idx {
                visit(i);
            }
        }

        if let Some((far_idx, dist)) = deepest {
            let depth = ((dist * 256.0).round() / 256.0) as f32;
            defects.push(Defect {
                start,
                end,
                far: points[far_idx],
                depth,
            });
        }
    }
    defects
}

/// Best-scoring defect deeper than `min_defect_depth`, or `None`.
///
/// Selection uses a strict comparison, so repeated runs on identical input
/// pick the identical defect, first occurrence winning ties.
pub fn find_best_defect(
    contour: &Contour,
    min_defect_depth: f32,
    scoring: &DefectScoring,
) -> Option<Defect> {
    let defects = compute_defects(contour);
    let mut best: Option<(f32, Defect)> = None;

    for defect in defects {
        if defect.depth <= min_defect_depth {
            continue;
        }
        let Some(score) = scoring.score(&defect) else {
            continue;
        };
        if score > 0.0 && best.as_ref().map_or(true, |(s, _)| score > *s) {
            best = Some((score, defect));
        }
    }

    best.map(|(_, d)| d)
}

fn point_line_distance(p: &Point2<i32>, a: &Point2<i32>, b: &Point2<i32>) -> f64 {
    let abx = (b.x - a.x) as f64;
    let aby = (b.y - a.y) as f64;
    let apx = (p.x - a.x) as f64;
    let apy = (p.y - a.y) as f64;
    let len = (abx * abx + aby * aby).sqrt();
    if len <= f64::EPSILON {
        return (apx * apx + apy * apy).sqrt();
    }
    (abx * apy - aby * apx).abs() / len
}
