use crate::events::ProductUpdatedEvent;
use catalog::models::Product;
use catalog::url_store::{self, ProductPatch};
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

/// Merges `patch` into the product with `id`. Resolves to `None` when the
/// list has no such product.
#[derive(Debug, Clone)]
pub struct UpdateProductCommand {
    pub products: Vec<Product>,
    pub id: String,
    pub patch: ProductPatch,
}

impl Request<Option<Vec<Product>>> for UpdateProductCommand {}

pub struct UpdateProductRequestHandler(pub DefaultMediator);
impl RequestHandler<UpdateProductCommand, Option<Vec<Product>>> for UpdateProductRequestHandler {
    fn handle(&mut self, command: UpdateProductCommand) -> Option<Vec<Product>> {
        if !command.products.iter().any(|p| p.id == command.id) {
            return None;
        }

        let products = url_store::update(&command.products, &command.id, command.patch);
        let updated = products.iter().find(|p| p.id == command.id)?;

        if let Err(e) = self.0.publish(ProductUpdatedEvent(updated.clone())) {
            log::error!("Could not publish event: {e}");
        }

        Some(products)
    }
}
