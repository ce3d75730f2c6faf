//! External contour extraction by Moore-neighbor border following.
//!
//! Scans the binary image row-major; each unvisited foreground pixel starts
//! a new connected component whose outer boundary is traced clockwise and
//! whose pixels are then flood-marked so the component is emitted once.
//! Only outer boundaries are produced; holes are ignored.
use super::Contour;
use crate::image::GrayImageU8;
use nalgebra::Point2;

// Clockwise Moore neighborhood starting west.
const NEIGH_CW: [(i32, i32); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// Extract the outer boundary of every connected nonzero region.
pub fn extract_external_contours(image: &GrayImageU8) -> Vec<Contour> {
    let w = image.width();
    let h = image.height();
    let mut visited = vec![false; w * h];
    let mut contours = Vec::new();

    for y in 0..h {
        for x in 0..w {
            if image.get(x, y) == 0 || visited[y * w + x] {
                continue;
            }
            let start = Point2::new(x as i32, y as i32);
            let boundary = trace_boundary(image, start);
            flood_mark(image, &mut visited, x, y);
            contours.push(Contour::new(boundary));
        }
    }

    contours
}

#[inline]
fn is_fg(image: &GrayImageU8, x: i32, y: i32) -> bool {
    x >= 0
        && y >= 0
        && (x as usize) < image.width()
        && (y as usize) < image.height()
        && image.get(x as usize, y as usize) > 0
}

/// Moore-neighbor tracing, stopping when the walk re-enters the start
/// pixel along the same edge it first left it (state repeat).
///
/// `start` is the topmost-leftmost pixel of the component (scan order), so
/// its west neighbor is guaranteed background and serves as the initial
/// backtrack position.
fn trace_boundary(image: &GrayImageU8, start: Point2<i32>) -> Vec<Point2<i32>> {
    let mut boundary = vec![start];

    let Some((first_next, first_dir)) = next_cw(image, start, 0) else {
        // Isolated pixel.
        return boundary;
    };

    let mut current = start;
    let mut next = first_next;
    let mut dir = first_dir;
    let mut started = false;

    // A boundary pixel is visited at most 8 times; this caps runaway loops.
    let max_steps = 8 * image.width() * image.height() + 8;

    for _ in 0..max_steps {
        if started && current == start && next == first_next && dir == first_dir {
            break;
        }
        started = true;

        boundary.push(next);
        current = next;
        // New backtrack: the position opposite the direction of motion.
        let backtrack = (dir + 4) % 8;
        match next_cw(image, current, backtrack) {
            Some((n, d)) => {
                next = n;
                dir = d;
            }
            None => break,
        }
    }

    // The stop condition pushes the start pixel once more as the loop
    // closes; drop the duplicate.
    if boundary.len() > 1 && boundary.last() == Some(&start) {
        boundary.pop();
    }
    boundary
}

/// First foreground neighbor scanning clockwise after `backtrack`.
#[inline]
fn next_cw(
    image: &GrayImageU8,
    current: Point2<i32>,
    backtrack: usize,
) -> Option<(Point2<i32>, usize)> {
    for step in 1..=8usize {
        let dir = (backtrack + step) % 8;
        let (dx, dy) = NEIGH_CW[dir];
        let nx = current.x + dx;
        let ny = current.y + dy;
        if is_fg(image, nx, ny) {
            return Some((Point2::new(nx, ny), dir));
        }
    }
    None
}

fn flood_mark(image: &GrayImageU8, visited: &mut [bool], sx: usize, sy: usize) {
    let w = image.width();
    let h = image.height();
    let mut stack = vec![(sx, sy)];
    visited[sy * w + sx] = true;
    while let Some((x, y)) = stack.pop() {
        for (dx, dy) in NEIGH_CW {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                continue;
            }
            let idx = ny as usize * w + nx as usize;
            if !visited[idx] && image.get(nx as usize, ny as usize) > 0 {
                visited[idx] = true;
                stack.push((nx as usize, ny as usize));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    fn filled_rect(w: usize, h: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> GrayImageU8 {
        let mut img = GrayImageU8::new(w, h);
        for y in y0..y1 {
            for x in x0..x1 {
                img.set(x, y, 255);
            }
        }
        img
    }

    #[test]
    fn single_region_yields_single_contour() {
        let img = filled_rect(20, 20, 5, 5, 15, 12);
        let contours = extract_external_contours(&img);
        assert_eq!(contours.len(), 1);
        let bound = contours[0].bound().unwrap();
        assert_eq!((bound.x, bound.y, bound.w, bound.h), (5, 5, 10, 7));
    }

    #[test]
    fn separate_regions_yield_separate_contours() {
        let mut img = filled_rect(30, 30, 2, 2, 8, 8);
        for y in 20..26 {
            for x in 20..26 {
                img.set(x, y, 255);
            }
        }
        let contours = extract_external_contours(&img);
        assert_eq!(contours.len(), 2);
    }

    #[test]
    fn hole_does_not_produce_an_inner_contour() {
        let mut img = filled_rect(20, 20, 4, 4, 16, 16);
        for y in 8..12 {
            for x in 8..12 {
                img.set(x, y, 0);
            }
        }
        let contours = extract_external_contours(&img);
        assert_eq!(contours.len(), 1);
    }

    #[test]
    fn isolated_pixel_is_a_one_point_contour() {
        let mut img = GrayImageU8::new(5, 5);
        img.set(2, 2, 255);
        let contours = extract_external_contours(&img);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 1);
    }

    #[test]
    fn boundary_points_are_connected() {
        let img = filled_rect(16, 16, 3, 3, 12, 12);
        let contour = &extract_external_contours(&img)[0];
        for pair in contour.points.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(dx <= 1 && dy <= 1, "non-adjacent boundary step {pair:?}");
        }
    }
}
