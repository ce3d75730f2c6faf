//! Edge processing: Sobel gradients, Canny-style detection and the gap
//! closing blur applied before contour extraction.

pub mod blur;
pub mod canny;
pub mod grad;

pub use blur::box_blur;
pub use canny::detect_edges;
pub use grad::{sobel_gradients, Grad};
