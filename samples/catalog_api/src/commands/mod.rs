mod add_product;
pub use add_product::*;

mod update_product;
pub use update_product::*;

mod delete_product;
pub use delete_product::*;
