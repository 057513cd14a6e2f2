use crate::schema::migrations::Migration;
use crate::schema::seed::{self, RATED_SEED};
use crate::schema::{products_collection, App, PRODUCTS_COLLECTION};
use crate::StoreError;

/// Creates the `products` collection and fills it with the rated seed rows.
pub struct CreateProducts;

impl Migration for CreateProducts {
    fn version(&self) -> i64 {
        1706000000
    }

    fn name(&self) -> &str {
        "create_products"
    }

    fn up(&self, app: &mut dyn App) -> Result<(), StoreError> {
        app.save_collection(products_collection())?;
        seed::insert_all(app, PRODUCTS_COLLECTION, &RATED_SEED)
    }

    fn down(&self, app: &mut dyn App) -> Result<(), StoreError> {
        if app.find_collection(PRODUCTS_COLLECTION).is_none() {
            log::info!("Collection {PRODUCTS_COLLECTION} not found, nothing to revert");
            return Ok(());
        }

        app.delete_collection(PRODUCTS_COLLECTION)
    }
}
