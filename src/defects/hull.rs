//! Convex hull of a contour as indices into the contour point list.
//!
//! Andrew monotone chain over (point, index) pairs. The result is sorted
//! by contour index so hull neighbors delimit contiguous contour arcs for
//! the defect walk.
use nalgebra::Point2;

/// Indices of the contour points on the convex hull, ascending by contour
/// index. Duplicated coordinates keep their first occurrence.
pub fn convex_hull_indices(points: &[Point2<i32>]) -> Vec<usize> {
    if points.len() < 3 {
        return (0..points.len()).collect();
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by_key(|&i| (points[i].x, points[i].y));
    order.dedup_by(|&mut a, &mut b| points[a] == points[b]);

    if order.len() < 3 {
        return order;
    }

    let cross = |o: usize, a: usize, b: usize| -> i64 {
        let (po, pa, pb) = (points[o], points[a], points[b]);
        (pa.x - po.x) as i64 * (pb.y - po.y) as i64 - (pa.y - po.y) as i64 * (pb.x - po.x) as i64
    };

    let mut hull: Vec<usize> = Vec::with_capacity(order.len() * 2);

    // Lower hull.
    for &i in &order {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], i) <= 0 {
            hull.pop();
        }
        hull.push(i);
    }
    // Upper hull.
    let lower_len = hull.len() + 1;
    for &i in order.iter().rev().skip(1) {
        while hull.len() >= lower_len && cross(hull[hull.len() - 2], hull[hull.len() - 1], i) <= 0 {
            hull.pop();
        }
        hull.push(i);
    }
    hull.pop(); // last point equals the first

    hull.sort_unstable();
    hull.dedup();
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn square_hull_keeps_only_corners() {
        let points = vec![
            Point2::new(0, 0),
            Point2::new(5, 0),
            Point2::new(10, 0),
            Point2::new(10, 5),
            Point2::new(10, 10),
            Point2::new(5, 10),
            Point2::new(0, 10),
            Point2::new(0, 5),
        ];
        let hull = convex_hull_indices(&points);
        assert_eq!(hull, vec![0, 2, 4, 6]);
    }

    #[test]
    fn concave_vertex_is_excluded() {
        let points = vec![
            Point2::new(0, 0),
            Point2::new(10, 0),
            Point2::new(5, 5), // notch
            Point2::new(10, 10),
            Point2::new(0, 10),
        ];
        let hull = convex_hull_indices(&points);
        assert!(!hull.contains(&2));
        assert_eq!(hull, vec![0, 1, 3, 4]);
    }

    #[test]
    fn degenerate_inputs_pass_through() {
        assert!(convex_hull_indices(&[]).is_empty());
        let two = vec![Point2::new(0, 0), Point2::new(3, 3)];
        assert_eq!(convex_hull_indices(&two), vec![0, 1]);
    }
}
