use crate::models::{Product, ALL_CATEGORIES};

/// Products whose category equals `category`, in their original order.
/// `"all"` returns every product.
pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    if category == ALL_CATEGORIES {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| p.category == category)
        .cloned()
        .collect()
}

/// Distinct categories in order of first appearance.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}
