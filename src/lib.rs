//! Random-dot stereogram generation: a procedural star depth field drives
//! per-pixel horizontal disparity, scattering random dots into red (left
//! eye) and cyan (right eye) channels for viewing with 3D glasses.

pub mod depth;
pub mod error;
pub mod raster;
pub mod render;

pub use depth::DepthField;
pub use error::Error;
pub use raster::Raster;
pub use render::{render, Mode, Output};
