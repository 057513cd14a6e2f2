use crate::events::ProductDeletedEvent;
use catalog::models::Product;
use catalog::url_store;
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

#[derive(Debug, Clone)]
pub struct DeleteProductCommand {
    pub products: Vec<Product>,
    pub id: String,
}

impl Request<Option<Vec<Product>>> for DeleteProductCommand {}

pub struct DeleteProductRequestHandler(pub DefaultMediator);
impl RequestHandler<DeleteProductCommand, Option<Vec<Product>>> for DeleteProductRequestHandler {
    fn handle(&mut self, command: DeleteProductCommand) -> Option<Vec<Product>> {
        let deleted = command.products.iter().find(|p| p.id == command.id)?.clone();
        let products = url_store::remove(&command.products, &command.id);

        if let Err(e) = self.0.publish(ProductDeletedEvent(deleted)) {
            log::error!("Could not publish event: {e}");
        }

        Some(products)
    }
}
