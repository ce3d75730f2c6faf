//! Canny-style edge detection: Sobel gradients, direction-aligned
//! non-maximum suppression and dual-threshold hysteresis.
//!
//! Produces a binary edge image (255 on edges) from the masked 8-bit
//! foreground image. NMS compares each pixel against its two neighbors
//! along the quantized gradient direction; the comparison is strict on one
//! side only so that the flat magnitude plateaus of ideal step edges keep
//! exactly one response.
use super::grad::{sobel_gradients, Grad};
use crate::image::{GrayImageU8, ImageU8};

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Detect edges with hysteresis thresholds `low`/`high` on the Sobel
/// magnitude. Pixels at or above `high` seed edges; pixels at or above
/// `low` extend them through 8-connectivity.
pub fn detect_edges(image: &ImageU8, low: f32, high: f32) -> GrayImageU8 {
    let w = image.w;
    let h = image.h;
    let mut out = GrayImageU8::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let grad = sobel_gradients(image);

    // 0 = suppressed, 1 = weak, 2 = strong.
    let mut classes = vec![0u8; w * h];
    let mut seeds = Vec::new();
    for y in 1..h - 1 {
        let mag_prev = grad.row_mag(y - 1);
        let mag_row = grad.row_mag(y);
        let mag_next = grad.row_mag(y + 1);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag < low {
                continue;
            }
            if !is_local_maximum(&grad, mag_prev, mag_row, mag_next, x, y, mag) {
                continue;
            }
            let idx = y * w + x;
            if mag >= high {
                classes[idx] = 2;
                seeds.push(idx);
            } else {
                classes[idx] = 1;
            }
        }
    }

    // Grow strong edges through weak neighbors.
    let mut stack = seeds;
    while let Some(idx) = stack.pop() {
        let x = idx % w;
        let y = idx / w;
        out.set(x, y, 255);
        for dy in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                    continue;
                }
                let nidx = ny as usize * w + nx as usize;
                if classes[nidx] == 1 {
                    classes[nidx] = 2;
                    stack.push(nidx);
                }
            }
        }
    }

    out
}

#[inline]
fn is_local_maximum(
    grad: &Grad,
    mag_prev: &[f32],
    mag_row: &[f32],
    mag_next: &[f32],
    x: usize,
    y: usize,
    mag: f32,
) -> bool {
    let idx = y * grad.w + x;
    let gx = grad.gx[idx];
    let gy = grad.gy[idx];
    let abs_gx = gx.abs();
    let abs_gy = gy.abs();
    let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

    // neighbor1 sits on the negative-direction side; ties there survive so
    // a two-pixel plateau keeps its leading pixel.
    let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
        if abs_gy <= abs_gx * TAN_22_5_DEG {
            (mag_row[x - 1], mag_row[x + 1])
        } else if same_sign {
            (mag_prev[x + 1], mag_next[x - 1])
        } else {
            (mag_prev[x - 1], mag_next[x + 1])
        }
    } else if abs_gx <= abs_gy * TAN_22_5_DEG {
        (mag_prev[x], mag_next[x])
    } else if same_sign {
        (mag_prev[x + 1], mag_next[x - 1])
    } else {
        (mag_prev[x - 1], mag_next[x + 1])
    };

    mag >= neighbor1 && mag > neighbor2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    fn step_image() -> GrayImageU8 {
        let mut img = GrayImageU8::new(16, 16);
        for y in 0..16 {
            for x in 8..16 {
                img.set(x, y, 80);
            }
        }
        img
    }

    #[test]
    fn step_edge_survives_nms_and_hysteresis() {
        let img = step_image();
        let edges = detect_edges(&img.as_view(), 200.0, 250.0);
        let hits: usize = (1..15)
            .map(|y| (1..15).filter(|&x| edges.get(x, y) > 0).count())
            .sum();
        assert!(hits > 0, "expected the step boundary to produce edges");
    }

    #[test]
    fn flat_image_produces_no_edges() {
        let img = GrayImageU8::from_raw(16, 16, vec![70u8; 256]);
        let edges = detect_edges(&img.as_view(), 200.0, 250.0);
        assert!(edges.as_view().data.iter().all(|&p| p == 0));
    }

    #[test]
    fn high_threshold_gates_weak_edges() {
        let img = step_image();
        // Step of 80 peaks near 320; a high threshold above that kills it.
        let edges = detect_edges(&img.as_view(), 200.0, 400.0);
        assert!(edges.as_view().data.iter().all(|&p| p == 0));
    }
}
