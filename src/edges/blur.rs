//! Small box blur used to close gaps in the edge map before contour
//! extraction. A broken silhouette outline would otherwise split the hand
//! into several contours.
use crate::image::{GrayImageU8, ImageView};

/// Mean filter with a `size × size` window anchored at the pixel's
/// top-left, clamped at the borders.
pub fn box_blur(image: &GrayImageU8, size: usize) -> GrayImageU8 {
    let w = image.width();
    let h = image.height();
    let mut out = GrayImageU8::new(w, h);
    if size <= 1 || w == 0 || h == 0 {
        return image.clone();
    }

    let half = (size / 2) as i32;
    let lo = -half;
    let hi = (size as i32 - 1) - half;

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let mut sum = 0u32;
            let mut count = 0u32;
            for dy in lo..=hi {
                let yy = (y + dy).clamp(0, h as i32 - 1) as usize;
                let row = image.row(yy);
                for dx in lo..=hi {
                    let xx = (x + dx).clamp(0, w as i32 - 1) as usize;
                    sum += row[xx] as u32;
                    count += 1;
                }
            }
            out.set(x as usize, y as usize, (sum / count) as u8);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_bridges_a_one_pixel_gap() {
        let mut img = GrayImageU8::new(12, 12);
        // Horizontal edge with a missing pixel.
        for x in 2..10 {
            if x != 6 {
                img.set(x, 6, 255);
            }
        }
        let blurred = box_blur(&img, 6);
        assert!(blurred.get(6, 6) > 0, "gap should be filled by the blur");
    }

    #[test]
    fn size_one_is_identity() {
        let img = GrayImageU8::from_raw(4, 4, (0u8..16).collect());
        let blurred = box_blur(&img, 1);
        assert_eq!(blurred.as_view().data, img.as_view().data);
    }
}
