pub mod synthetic_depth;
