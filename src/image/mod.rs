//! Image containers used across the pipeline.
//!
//! The raw sensor frame is a borrowed [`DepthU16`] view (u16 millimetres);
//! all intermediate working images are owned 8-bit [`GrayImageU8`] buffers.

pub mod io;
pub mod traits;
pub mod u16;
pub mod u8;

pub use io::{load_depth_image, save_grayscale_u8, write_json_file, DepthImageU16};
pub use traits::{ImageView, ImageViewMut};
pub use u16::DepthU16;
pub use u8::{GrayImageU8, ImageU8};
