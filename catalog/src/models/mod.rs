/// Module for the product records.
pub mod product;
pub use product::*;

/// Module for image reference sniffing.
pub mod image;
pub use image::*;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";
