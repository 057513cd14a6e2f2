//! # catalog
//! Two interchangeable data sources for a small product catalog.
//!
//! - [`remote::CatalogClient`] reads products from a hosted collection service.
//! - [`url_store`] keeps the product list inside a page address, so a link
//!   is all a second viewer needs to see the same catalog.
//!
//! The hosted collection itself is described by [`schema`], including the
//! reversible migrations that create and reseed it.
//!
//! ## Example
//! ```rust
//! use catalog::url_store::{self, MemoryLocation, NewProduct};
//!
//! let mut location = MemoryLocation::parse("https://shop.example/catalog?tab=2").unwrap();
//!
//! let products = url_store::read_from_address(&location, "data");
//! let products = url_store::add(&products, NewProduct {
//!     name: "Mechanical Keyboard".to_owned(),
//!     category: "electronics".to_owned(),
//!     image: "https://images.example/keyboard.png".to_owned(),
//! });
//!
//! url_store::write_to_address(&mut location, "data", &products);
//! assert_eq!(products, url_store::read_from_address(&location, "data"));
//!
//! let electronics = url_store::filter_by_category(&products, "electronics");
//! assert!(electronics.iter().all(|p| p.category == "electronics"));
//! ```

/// Module for the errors.
pub mod error;
pub use error::*;

/// Module for the runtime configuration.
pub mod config;
pub use config::CatalogConfig;

/// Module for the product data model.
pub mod models;

/// Module for the hosted collection schema and its migrations.
pub mod schema;

/// Module for the hosted collection client.
pub mod remote;

/// Module for the address-encoded product store.
pub mod url_store;
