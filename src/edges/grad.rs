//! Sobel gradients over an 8-bit image.
//!
//! Convolves the 3×3 Sobel pair with border clamping and returns per-pixel
//! `gx`, `gy` and the Euclidean magnitude. Magnitudes are on the scale of
//! the input values (a unit step of height `s` peaks near `4·s`), which is
//! what the edge-detection thresholds are calibrated against.
use crate::image::{ImageU8, ImageView};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers in row-major layout (stride == width).
#[derive(Clone, Debug)]
pub struct Grad {
    pub w: usize,
    pub h: usize,
    pub gx: Vec<f32>,
    pub gy: Vec<f32>,
    pub mag: Vec<f32>,
}

impl Grad {
    #[inline]
    pub fn row_mag(&self, y: usize) -> &[f32] {
        &self.mag[y * self.w..(y + 1) * self.w]
    }
}

/// Compute Sobel gradients of an 8-bit image with replicated borders.
pub fn sobel_gradients(image: &ImageU8) -> Grad {
    let w = image.w;
    let h = image.h;
    let mut gx = vec![0.0f32; w * h];
    let mut gy = vec![0.0f32; w * h];
    let mut mag = vec![0.0f32; w * h];

    if w == 0 || h == 0 {
        return Grad { w, h, gx, gy, mag };
    }

    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [image.row(y_idx[0]), image.row(y_idx[1]), image.row(y_idx[2])];
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                let kx_row = &SOBEL_KERNEL_X[ky];
                let ky_row = &SOBEL_KERNEL_Y[ky];
                let p0 = row[x_idx[0]] as f32;
                let p1 = row[x_idx[1]] as f32;
                let p2 = row[x_idx[2]] as f32;
                sum_x += p0 * kx_row[0] + p1 * kx_row[1] + p2 * kx_row[2];
                sum_y += p0 * ky_row[0] + p1 * ky_row[1] + p2 * ky_row[2];
            }

            let idx = y * w + x;
            gx[idx] = sum_x;
            gy[idx] = sum_y;
            mag[idx] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { w, h, gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::GrayImageU8;

    #[test]
    fn vertical_step_peaks_at_the_boundary() {
        let mut img = GrayImageU8::new(8, 8);
        for y in 0..8 {
            for x in 4..8 {
                img.set(x, y, 100);
            }
        }
        let grad = sobel_gradients(&img.as_view());
        let mid = grad.row_mag(4);
        assert!(mid[3] > 0.0 && mid[4] > 0.0);
        assert_eq!(mid[1], 0.0);
        assert_eq!(mid[6], 0.0);
    }

    #[test]
    fn flat_image_has_zero_gradient() {
        let img = GrayImageU8::from_raw(6, 6, vec![42u8; 36]);
        let grad = sobel_gradients(&img.as_view());
        assert!(grad.mag.iter().all(|&m| m == 0.0));
    }
}
