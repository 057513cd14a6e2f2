use crate::schema::App;
use crate::StoreError;
use serde_json::{Map, Value};

/// One fixed row of seed data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedProduct {
    pub name: &'static str,
    pub category: &'static str,
    pub price: f64,
    pub image: &'static str,
    pub rating: Option<f64>,
}

impl SeedProduct {
    const fn rated(
        name: &'static str,
        category: &'static str,
        price: f64,
        image: &'static str,
        rating: f64,
    ) -> Self {
        SeedProduct {
            name,
            category,
            price,
            image,
            rating: Some(rating),
        }
    }

    const fn unrated(
        name: &'static str,
        category: &'static str,
        price: f64,
        image: &'static str,
    ) -> Self {
        SeedProduct {
            name,
            category,
            price,
            image,
            rating: None,
        }
    }

    pub fn to_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("name".to_owned(), Value::from(self.name));
        data.insert("category".to_owned(), Value::from(self.category));
        data.insert("price".to_owned(), Value::from(self.price));
        data.insert("image".to_owned(), Value::from(self.image));
        if let Some(rating) = self.rating {
            data.insert("rating".to_owned(), Value::from(rating));
        }
        data
    }
}

/// Rows of the first revision: emoji images and a rating.
pub const RATED_SEED: [SeedProduct; 12] = [
    SeedProduct::rated("Laptop Pro", "electronics", 1299.0, "💻", 4.5),
    SeedProduct::rated("Cotton T-Shirt", "clothing", 29.0, "👕", 4.2),
    SeedProduct::rated("JavaScript Guide", "books", 39.0, "📚", 4.8),
    SeedProduct::rated("Garden Tools Set", "home", 89.0, "🏠", 4.3),
    SeedProduct::rated("Soccer Ball", "sports", 25.0, "⚽", 4.1),
    SeedProduct::rated("Gaming Console", "toys", 499.0, "🎮", 4.7),
    SeedProduct::rated("Lipstick Set", "beauty", 45.0, "💄", 4.4),
    SeedProduct::rated("Car Accessories", "automotive", 129.0, "🚗", 4.0),
    SeedProduct::rated("Smartphone", "electronics", 799.0, "📱", 4.6),
    SeedProduct::rated("Jeans", "clothing", 79.0, "👖", 4.3),
    SeedProduct::rated("Cookbook", "books", 24.0, "📖", 4.5),
    SeedProduct::rated("Plant Pot", "home", 19.0, "🪴", 4.2),
];

const PNG_A: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==";
const PNG_B: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/5+hHgAHggJ/PchI7wAAAABJRU5ErkJggg==";
const PNG_C: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChAGA4849a0AAAABJRU5ErkJggg==";
const PNG_D: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk+P+fAQAEhAGAhKmMIQAAAABJRU5ErkJggg==";
const PNG_E: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP4/58BAQAEhAGAWjR9awAAAABJRU5ErkJggg==";
const PNG_F: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYGBgAAAABQABh6FO1AAAAABJRU5ErkJggg==";
const PNG_G: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/5+BAQAEhAGAWjR9awAAAABJRU5ErkJggg==";
const PNG_H: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/58BAQAEhAGAWjR9awAAAABJRU5ErkJggg==";

/// Rows of the second revision: no rating, 1x1 inline PNG placeholders.
pub const PLACEHOLDER_SEED: [SeedProduct; 12] = [
    SeedProduct::unrated("Laptop Pro", "electronics", 1299.0, PNG_A),
    SeedProduct::unrated("Cotton T-Shirt", "clothing", 29.0, PNG_B),
    SeedProduct::unrated("JavaScript Guide", "books", 39.0, PNG_C),
    SeedProduct::unrated("Garden Tools Set", "home", 89.0, PNG_D),
    SeedProduct::unrated("Soccer Ball", "sports", 25.0, PNG_E),
    SeedProduct::unrated("Gaming Console", "toys", 499.0, PNG_F),
    SeedProduct::unrated("Lipstick Set", "beauty", 45.0, PNG_G),
    SeedProduct::unrated("Car Accessories", "automotive", 129.0, PNG_A),
    SeedProduct::unrated("Smartphone", "electronics", 799.0, PNG_D),
    SeedProduct::unrated("Jeans", "clothing", 79.0, PNG_H),
    SeedProduct::unrated("Cookbook", "books", 24.0, PNG_C),
    SeedProduct::unrated("Plant Pot", "home", 19.0, PNG_A),
];

/// Inserts `rows` into `collection`, in order.
pub fn insert_all(
    app: &mut dyn App,
    collection: &str,
    rows: &[SeedProduct],
) -> Result<(), StoreError> {
    for row in rows {
        app.insert_record(collection, row.to_data())?;
    }
    Ok(())
}

/// Deletes every record of `collection` and inserts `rows` in their place.
pub fn reseed(app: &mut dyn App, collection: &str, rows: &[SeedProduct]) -> Result<(), StoreError> {
    for record in app.find_records(collection)? {
        app.delete_record(collection, &record.id)?;
    }
    insert_all(app, collection, rows)
}
