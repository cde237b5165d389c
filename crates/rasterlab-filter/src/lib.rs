//! rasterlab-filter - Spatial filtering for RasterLab
//!
//! This crate provides the spatial-filter operations of the engine:
//!
//! - Validated convolution kernels, including the fixed Gaussian blur preset
//! - True (180-degree-flipped) kernel convolution with cut-off or
//!   renormalizing bounding and border-indexed edge sampling
//! - Order-statistic (min/median/max) filtering over city-block and
//!   chess-board neighbourhoods

pub mod convolve;
mod error;
pub mod kernel;
pub mod rank;

pub use convolve::{Bounding, convolve, gaussian_blur};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;
pub use rank::{Neighbourhood, RankFilter, rank_filter};
