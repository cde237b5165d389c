//! rasterlab-transform - Geometric transformations for RasterLab
//!
//! This crate provides the geometric operations of the engine:
//!
//! - Horizontal and vertical flips
//! - Margin crop
//! - Arbitrary-angle rotation about the image center
//! - Shear about the image center
//! - Scaling (direct resampling and border-indexed replication)
//!
//! Rotation and shear go through a shared inverse-affine resampling
//! framework in [`affine`]; all transforms replace the raster grid
//! wholesale and fail closed on invalid parameters.

pub mod affine;
pub mod crop;
mod error;
pub mod flip;
pub mod rotate;
pub mod scale;
pub mod shear;

pub use affine::{InverseMap, map_inverse};
pub use crop::crop;
pub use error::{TransformError, TransformResult};
pub use flip::{flip_horizontal, flip_vertical};
pub use rotate::rotate;
pub use scale::{scale, scale_by_indexing};
pub use shear::shear;
