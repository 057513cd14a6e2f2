mod get_all_products;
pub use get_all_products::*;
