//! Contour extraction and hand-candidate selection.
//!
//! Extracts the outer boundaries of connected foreground regions from the
//! blurred edge image, discards tiny ones and scores the rest to pick the
//! single best hand candidate; the pipeline tracks exactly one hand per
//! frame.

pub mod select;
pub mod trace;

pub use select::{filter_contours, find_best_contour, ContourScoring};
pub use trace::extract_external_contours;

use nalgebra::Point2;
use serde::Serialize;

/// Ordered boundary of a connected foreground region. Fresh each frame;
/// carries no identity across frames.
#[derive(Clone, Debug)]
pub struct Contour {
    pub points: Vec<Point2<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point2<i32>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis-aligned bounding rectangle, `None` for an empty contour.
    pub fn bound(&self) -> Option<Bound> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in &self.points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Bound {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        })
    }

    /// Center of mass of the boundary polygon.
    ///
    /// Uses the shoelace centroid; a degenerate polygon (near-zero area)
    /// falls back to the mean of the boundary points.
    pub fn centroid(&self) -> Option<Point2<f32>> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len();
        let mut area2 = 0.0f64;
        let mut cx = 0.0f64;
        let mut cy = 0.0f64;
        for i in 0..n {
            let p = &self.points[i];
            let q = &self.points[(i + 1) % n];
            let cross = p.x as f64 * q.y as f64 - q.x as f64 * p.y as f64;
            area2 += cross;
            cx += (p.x + q.x) as f64 * cross;
            cy += (p.y + q.y) as f64 * cross;
        }
        if area2.abs() > 1e-6 {
            let scale = 1.0 / (3.0 * area2);
            return Some(Point2::new((cx * scale) as f32, (cy * scale) as f32));
        }
        let mut sx = 0.0f64;
        let mut sy = 0.0f64;
        for p in &self.points {
            sx += p.x as f64;
            sy += p.y as f64;
        }
        Some(Point2::new(
            (sx / n as f64) as f32,
            (sy / n as f64) as f32,
        ))
    }
}

/// Axis-aligned integer rectangle derived from a contour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bound {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bound {
    pub fn center(&self) -> Point2<f32> {
        Point2::new(
            self.x as f32 + self.w as f32 * 0.5,
            self.y as f32 + self.h as f32 * 0.5,
        )
    }

    pub fn area(&self) -> f32 {
        self.w as f32 * self.h as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn bound_covers_all_points() {
        let c = Contour::new(vec![
            Point2::new(3, 4),
            Point2::new(10, 4),
            Point2::new(10, 9),
            Point2::new(3, 9),
        ]);
        let b = c.bound().unwrap();
        assert_eq!(b, Bound { x: 3, y: 4, w: 8, h: 6 });
        assert_eq!(b.center(), Point2::new(7.0, 7.0));
        assert_eq!(b.area(), 48.0);
    }

    #[test]
    fn centroid_of_a_square_is_its_center() {
        let c = Contour::new(vec![
            Point2::new(0, 0),
            Point2::new(4, 0),
            Point2::new(4, 4),
            Point2::new(0, 4),
        ]);
        let com = c.centroid().unwrap();
        assert!((com.x - 2.0).abs() < 1e-5);
        assert!((com.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn collinear_contour_falls_back_to_point_mean() {
        let c = Contour::new(vec![
            Point2::new(0, 0),
            Point2::new(2, 0),
            Point2::new(4, 0),
        ]);
        let com = c.centroid().unwrap();
        assert!((com.x - 2.0).abs() < 1e-5);
        assert!(com.y.abs() < 1e-5);
    }
}
