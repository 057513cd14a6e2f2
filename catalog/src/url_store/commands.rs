use crate::models::{timestamp_now, Product};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The caller-supplied part of a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub image: String,
}

/// Fields to overwrite on an existing product; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

/// Returns `products` with a new product appended. The new product gets a
/// fresh id and `created`/`updated` set to now.
pub fn add(products: &[Product], new_product: NewProduct) -> Vec<Product> {
    let mut id = Uuid::new_v4().to_string();
    while products.iter().any(|p| p.id == id) {
        id = Uuid::new_v4().to_string();
    }

    let now = timestamp_now();
    let product = Product {
        id,
        name: new_product.name,
        category: new_product.category,
        image: new_product.image,
        created: Some(now.clone()),
        updated: Some(now),
    };

    let mut next = products.to_vec();
    next.push(product);
    next
}

/// Returns `products` with `patch` merged into the product with `id` and its
/// `updated` stamp refreshed. Unknown ids leave the list as it was.
pub fn update(products: &[Product], id: &str, patch: ProductPatch) -> Vec<Product> {
    products
        .iter()
        .map(|product| {
            if product.id != id {
                return product.clone();
            }

            let mut product = product.clone();
            if let Some(name) = &patch.name {
                product.name = name.clone();
            }
            if let Some(category) = &patch.category {
                product.category = category.clone();
            }
            if let Some(image) = &patch.image {
                product.image = image.clone();
            }
            product.updated = Some(timestamp_now());
            product
        })
        .collect()
}

/// Returns `products` without the product with `id`.
pub fn remove(products: &[Product], id: &str) -> Vec<Product> {
    products.iter().filter(|p| p.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_store::default_products;

    fn keyboard() -> NewProduct {
        NewProduct {
            name: "Mechanical Keyboard".to_owned(),
            category: "electronics".to_owned(),
            image: "⌨️".to_owned(),
        }
    }

    #[test]
    fn add_appends_a_stamped_product() {
        let products = default_products();
        let next = add(&products, keyboard());

        assert_eq!(products.len() + 1, next.len());
        assert_eq!(products[..], next[..products.len()]);

        let added = next.last().unwrap();
        assert_eq!("Mechanical Keyboard", added.name);
        assert_eq!("electronics", added.category);
        assert_eq!("⌨️", added.image);
        assert!(added.created.is_some());
        assert_eq!(added.created, added.updated);
        assert!(products.iter().all(|p| p.id != added.id));
    }

    #[test]
    fn repeated_adds_get_distinct_ids() {
        let mut products = Vec::new();
        for _ in 0..50 {
            products = add(&products, keyboard());
        }

        let mut ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(50, ids.len());
    }

    #[test]
    fn update_merges_fields_and_refreshes_stamp() {
        let products = default_products();
        let patch = ProductPatch {
            name: Some("X".to_owned()),
            ..ProductPatch::default()
        };

        let next = update(&products, "3", patch);

        assert_eq!(products.len(), next.len());
        assert_eq!("X", next[2].name);
        assert_eq!(products[2].category, next[2].category);
        assert_eq!(products[2].image, next[2].image);
        assert!(next[2].updated.is_some());
        assert_eq!(None, next[2].created);

        for (i, (before, after)) in products.iter().zip(next.iter()).enumerate() {
            if i != 2 {
                assert_eq!(before, after);
            }
        }
    }

    #[test]
    fn update_then_remove_drops_exactly_that_product() {
        let products = default_products();
        let patch = ProductPatch {
            name: Some("X".to_owned()),
            ..ProductPatch::default()
        };

        let next = remove(&update(&products, "5", patch), "5");

        let mut expected = products.clone();
        expected.remove(4);
        assert_eq!(expected, next);
    }

    #[test]
    fn unknown_ids_change_nothing() {
        let products = default_products();
        let patch = ProductPatch {
            category: Some("toys".to_owned()),
            ..ProductPatch::default()
        };

        assert_eq!(products, update(&products, "missing", patch));
        assert_eq!(products, remove(&products, "missing"));
    }

    #[test]
    fn patch_fields_are_optional() {
        let patch: ProductPatch =
            serde_json::from_str(r#"{"image":"https://cdn.example/obsidian.png"}"#).unwrap();

        assert_eq!(None, patch.name);
        assert_eq!(None, patch.category);
        assert_eq!(Some("https://cdn.example/obsidian.png".to_owned()), patch.image);
    }
}
