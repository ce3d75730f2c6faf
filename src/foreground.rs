//! Depth normalization and foreground isolation.
//!
//! Rescales the raw u16 millimetre frame into an 8-bit working image and
//! zeroes everything beyond the detection threshold, leaving only near
//! objects (the hands). Purely numeric; there are no failure paths.
use crate::image::{DepthU16, GrayImageU8, ImageView, ImageViewMut};

/// Scaled depth plus the masked near-object image derived from it.
#[derive(Clone, Debug)]
pub struct ForegroundImages {
    /// Raw depth rescaled into 8 bits; kept as the debug overlay base.
    pub scaled: GrayImageU8,
    /// `scaled` with all pixels beyond the detection threshold zeroed.
    pub hands: GrayImageU8,
    /// Number of pixels that survived the mask.
    pub near_pixels: usize,
}

/// Rescale depth into `[0, 255]` over `max_image_depth` millimetres and
/// mask out pixels scaling above `max_detection_threshold`.
pub fn isolate_foreground(
    depth: &DepthU16,
    max_image_depth: f32,
    max_detection_threshold: u8,
) -> ForegroundImages {
    let w = depth.w;
    let h = depth.h;
    let mut scaled = GrayImageU8::new(w, h);
    let mut hands = GrayImageU8::new(w, h);
    let mut near_pixels = 0usize;

    for y in 0..h {
        let src = depth.row(y);
        let scaled_row = scaled.row_mut(y);
        for (x, &raw) in src.iter().enumerate() {
            let v = (raw as f32 / max_image_depth * 255.0).clamp(0.0, 255.0) as u8;
            scaled_row[x] = v;
        }
        let hands_row = hands.row_mut(y);
        let scaled_row = scaled.row(y);
        for x in 0..w {
            let v = scaled_row[x];
            if v <= max_detection_threshold {
                hands_row[x] = v;
                if v > 0 {
                    near_pixels += 1;
                }
            }
        }
    }

    ForegroundImages {
        scaled,
        hands,
        near_pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::DepthU16;

    fn frame<'a>(data: &'a [u16], w: usize, h: usize) -> DepthU16<'a> {
        DepthU16 {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[test]
    fn near_pixels_survive_and_far_pixels_are_masked() {
        // 300mm scales to 76, 900mm to 229 with a 1000mm range.
        let data = vec![300u16, 900, 300, 900];
        let fg = isolate_foreground(&frame(&data, 2, 2), 1000.0, 170);
        assert_eq!(fg.hands.get(0, 0), 76);
        assert_eq!(fg.hands.get(1, 0), 0);
        assert_eq!(fg.scaled.get(1, 0), 229);
        assert_eq!(fg.near_pixels, 2);
    }

    #[test]
    fn depth_beyond_the_range_saturates() {
        let data = vec![5000u16];
        let fg = isolate_foreground(&frame(&data, 1, 1), 1000.0, 170);
        assert_eq!(fg.scaled.get(0, 0), 255);
        assert_eq!(fg.hands.get(0, 0), 0);
    }
}
