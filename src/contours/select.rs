//! Hand-candidate filtering and scoring.
//!
//! Small contours are discarded outright; the survivors are scored by a
//! centrality/area heuristic and the strict maximum wins. Ties keep the
//! first occurrence so repeated runs on identical input select the same
//! contour.
use super::{Bound, Contour};
use log::debug;
use nalgebra::Point2;

/// Scoring context for a frame: image geometry plus the two bias knobs.
#[derive(Clone, Copy, Debug)]
pub struct ContourScoring {
    pub image_width: usize,
    pub image_height: usize,
    /// Higher favors contours near the image center.
    pub centrality_bias: f32,
    /// Higher favors contours with a larger bounding area.
    pub area_bias: f32,
}

impl ContourScoring {
    /// Heuristic suitability of a contour given its bound.
    pub fn score(&self, bound: &Bound) -> f32 {
        let image_center = Point2::new(
            self.image_width as f32 * 0.5,
            self.image_height as f32 * 0.5,
        );
        let centrality =
            self.image_width as f32 * 0.5 - (image_center - bound.center()).norm();
        centrality * self.centrality_bias + bound.area() * self.area_bias
    }
}

/// Discard contours whose bound is not strictly larger than
/// `min_contour_size` in both dimensions. Idempotent.
pub fn filter_contours(contours: Vec<Contour>, min_contour_size: i32) -> Vec<(Contour, Bound)> {
    contours
        .into_iter()
        .filter_map(|c| {
            let bound = c.bound()?;
            (bound.w > min_contour_size && bound.h > min_contour_size).then_some((c, bound))
        })
        .collect()
}

/// Index of the contour with the strictly highest score, first occurrence
/// winning ties. `None` when the slice is empty.
pub fn find_best_contour(candidates: &[(Contour, Bound)], scoring: &ContourScoring) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, (_, bound)) in candidates.iter().enumerate() {
        let score = scoring.score(bound);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((i, score));
        }
    }
    if let Some((i, score)) = best {
        debug!("contour {i} selected with score {score:.1}");
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn rect_contour(x: i32, y: i32, w: i32, h: i32) -> Contour {
        Contour::new(vec![
            Point2::new(x, y),
            Point2::new(x + w - 1, y),
            Point2::new(x + w - 1, y + h - 1),
            Point2::new(x, y + h - 1),
        ])
    }

    fn scoring() -> ContourScoring {
        ContourScoring {
            image_width: 200,
            image_height: 200,
            centrality_bias: 0.0,
            area_bias: 1.0,
        }
    }

    #[test]
    fn small_contours_are_discarded() {
        let contours = vec![
            rect_contour(0, 0, 10, 10),
            rect_contour(0, 0, 80, 80),
            rect_contour(0, 0, 80, 10), // tall enough in one axis only
        ];
        let filtered = filter_contours(contours, 40);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].1.w, 80);
    }

    #[test]
    fn filtering_is_idempotent() {
        let contours = vec![rect_contour(0, 0, 10, 10), rect_contour(0, 0, 80, 80)];
        let once = filter_contours(contours, 40);
        let bounds_once: Vec<Bound> = once.iter().map(|(_, b)| *b).collect();
        let twice = filter_contours(once.into_iter().map(|(c, _)| c).collect(), 40);
        let bounds_twice: Vec<Bound> = twice.iter().map(|(_, b)| *b).collect();
        assert_eq!(bounds_once, bounds_twice);
    }

    #[test]
    fn largest_area_wins_with_area_bias() {
        let candidates = filter_contours(
            vec![rect_contour(0, 0, 50, 50), rect_contour(100, 100, 90, 90)],
            40,
        );
        let best = find_best_contour(&candidates, &scoring()).unwrap();
        assert_eq!(candidates[best].1.w, 90);
    }

    #[test]
    fn ties_keep_the_first_occurrence() {
        let candidates = filter_contours(
            vec![rect_contour(0, 0, 60, 60), rect_contour(100, 100, 60, 60)],
            40,
        );
        for _ in 0..3 {
            assert_eq!(find_best_contour(&candidates, &scoring()), Some(0));
        }
    }

    #[test]
    fn centrality_bias_prefers_central_contours() {
        let candidates = filter_contours(
            vec![rect_contour(0, 0, 60, 60), rect_contour(70, 70, 60, 60)],
            40,
        );
        let scoring = ContourScoring {
            centrality_bias: 1.0,
            area_bias: 0.0,
            ..scoring()
        };
        assert_eq!(find_best_contour(&candidates, &scoring), Some(1));
    }

    #[test]
    fn empty_candidate_set_has_no_winner() {
        assert_eq!(find_best_contour(&[], &scoring()), None);
    }
}
