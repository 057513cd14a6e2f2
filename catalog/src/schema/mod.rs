//! Declarative description of the hosted `products` collection.
//!
//! The hosted service is reached through the [`App`] trait, so migrations
//! can run against the real store or against [`MemoryApp`].

/// Module for collection, field and index definitions.
mod collection;
pub use collection::*;

/// Module for the hosted store abstraction.
mod app;
pub use app::*;

/// Module for the fixed seed rows.
pub mod seed;

/// Module for the paired forward/reverse schema revisions.
pub mod migrations;
pub use migrations::{Migration, Migrator};

pub const PRODUCTS_COLLECTION: &str = "products";

/// The first revision of the `products` collection, including `rating`.
pub fn products_collection() -> Collection {
    Collection::base(PRODUCTS_COLLECTION)
        .with_rules(AccessRules::open())
        .add_field(Field::text("name").required())
        .add_field(Field::text("category").required())
        .add_field(Field::number("price").required())
        .add_field(Field::text("image").required())
        .add_field(rating_field())
        .add_index(Index::new("idx_products_category", "category"))
        .add_index(Index::new("idx_products_price", "price"))
}

pub fn rating_field() -> Field {
    Field::number("rating").required()
}
