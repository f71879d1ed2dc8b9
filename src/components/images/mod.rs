//! Image handling components
//!
//! Pick local images for the logo, signature and portrait slots.

pub mod image_upload;

pub use image_upload::{ImageAspect, ImageUpload};
