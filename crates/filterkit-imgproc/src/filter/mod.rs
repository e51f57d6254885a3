//! Filter operations
//!
//! This module provides edge detectors, moving averages and the gradient magnitude,
//! each in a direct form and, where the kernel factorizes, in a separable form.

/// One dimensional kernels.
pub mod kernels;

/// Gradient magnitude.
mod gradient;
pub use gradient::*;

/// Edge detectors and moving averages.
mod ops;
pub use ops::*;

/// Separable filter operations
mod separable_filter;
pub use separable_filter::*;

/// Direct neighborhood filter operations
mod stencil_filter;
pub use stencil_filter::*;
