//! Borrowed view over a raw 16-bit depth frame (millimetres per pixel).
//!
//! The sensor collaborator owns the buffer; the pipeline only reads it.

#[derive(Clone, Debug)]
pub struct DepthU16<'a> {
    pub w: usize,
    pub h: usize,
    /// Elements between consecutive rows.
    pub stride: usize,
    pub data: &'a [u16],
}

impl<'a> DepthU16<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u16 {
        self.data[y * self.stride + x]
    }

    /// Depth at a signed pixel coordinate, `None` outside the frame.
    #[inline]
    pub fn get_checked(&self, x: i32, y: i32) -> Option<u16> {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return None;
        }
        Some(self.get(x as usize, y as usize))
    }
}

impl<'a> crate::image::traits::ImageView for DepthU16<'a> {
    type Pixel = u16;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u16] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u16]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
