use crate::schema::migrations::Migration;
use crate::schema::seed::{self, PLACEHOLDER_SEED, RATED_SEED};
use crate::schema::{rating_field, App, PRODUCTS_COLLECTION};
use crate::StoreError;

/// Drops `rating` and swaps the emoji images for inline PNG placeholders.
///
/// Both directions rebuild the rows from scratch.
pub struct RemoveRating;

impl Migration for RemoveRating {
    fn version(&self) -> i64 {
        1706000001
    }

    fn name(&self) -> &str {
        "update_products_remove_rating_add_images"
    }

    fn up(&self, app: &mut dyn App) -> Result<(), StoreError> {
        let Some(mut collection) = app.find_collection(PRODUCTS_COLLECTION) else {
            log::info!("Collection {PRODUCTS_COLLECTION} not found, skipping");
            return Ok(());
        };

        collection.remove_field("rating");
        app.save_collection(collection)?;

        seed::reseed(app, PRODUCTS_COLLECTION, &PLACEHOLDER_SEED)
    }

    fn down(&self, app: &mut dyn App) -> Result<(), StoreError> {
        let Some(mut collection) = app.find_collection(PRODUCTS_COLLECTION) else {
            log::info!("Collection {PRODUCTS_COLLECTION} not found, nothing to revert");
            return Ok(());
        };

        if collection.field("rating").is_none() {
            collection.fields.push(rating_field());
        }
        app.save_collection(collection)?;

        seed::reseed(app, PRODUCTS_COLLECTION, &RATED_SEED)
    }
}
