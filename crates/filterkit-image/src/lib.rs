#![deny(missing_docs)]
//! Image types and traits for storing and accessing scalar sample fields

/// mirror boundary extension.
pub mod border;

/// Error types for the image module.
pub mod error;

/// image representation for filtering purposes.
pub mod image;

/// elementwise image operations.
pub mod ops;

pub use crate::border::mirror_index;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
