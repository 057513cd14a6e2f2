use crate::models::Product;

const DEFAULT_CATALOG: [(&str, &str, &str); 12] = [
    (
        "MacBook Pro M3",
        "electronics",
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400&h=400&fit=crop",
    ),
    (
        "iPad Pro",
        "electronics",
        "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400&h=400&fit=crop",
    ),
    (
        "iPhone 15 Pro",
        "electronics",
        "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=400&h=400&fit=crop",
    ),
    (
        "Apple Watch Ultra",
        "electronics",
        "https://images.unsplash.com/photo-1434493789847-2f02dc6ca35d?w=400&h=400&fit=crop",
    ),
    (
        "VS Code",
        "software",
        "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&h=400&fit=crop",
    ),
    (
        "Figma",
        "software",
        "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=400&h=400&fit=crop",
    ),
    (
        "Obsidian",
        "software",
        "https://images.unsplash.com/photo-1586281380349-632531db7ed4?w=400&h=400&fit=crop",
    ),
    (
        "Alacritty Terminal",
        "software",
        "https://images.unsplash.com/photo-1629654297299-c8506221ca97?w=400&h=400&fit=crop",
    ),
    (
        "AER Duffel Bag",
        "clothing",
        "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=400&h=400&fit=crop",
    ),
    (
        "Minimalist Backpack",
        "clothing",
        "https://images.unsplash.com/photo-1581605405669-fcdf81165afa?w=400&h=400&fit=crop",
    ),
    (
        "Quality T-Shirt",
        "clothing",
        "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400&h=400&fit=crop",
    ),
    (
        "Denim Jacket",
        "clothing",
        "https://images.unsplash.com/photo-1544966503-7cc5ac882d5f?w=400&h=400&fit=crop",
    ),
];

const STARTER_CATALOG: [(&str, &str, &str); 2] = [
    (
        "MacBook Pro 13'' (2020)",
        "electronics",
        "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400&h=400&fit=crop",
    ),
    (
        "Darn Tough Socks T4033",
        "clothing",
        "https://darntough.com/cdn/shop/products/xron3ocgc7ke4jsf8gb7.png?v=1739281899&width=1800",
    ),
];

fn numbered(entries: &[(&str, &str, &str)]) -> Vec<Product> {
    entries
        .iter()
        .enumerate()
        .map(|(i, (name, category, image))| Product {
            id: (i + 1).to_string(),
            name: (*name).to_owned(),
            category: (*category).to_owned(),
            image: (*image).to_owned(),
            created: None,
            updated: None,
        })
        .collect()
}

/// The catalog shown when the address carries no usable data.
pub fn default_products() -> Vec<Product> {
    numbered(&DEFAULT_CATALOG)
}

/// A two-item catalog for a fresh start.
pub fn starter_products() -> Vec<Product> {
    numbered(&STARTER_CATALOG)
}
