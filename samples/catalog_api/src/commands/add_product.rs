use crate::events::ProductAddedEvent;
use catalog::models::Product;
use catalog::url_store::{self, NewProduct};
use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

/// Appends `product` to the list read from the request address.
#[derive(Debug, Clone)]
pub struct AddProductCommand {
    pub products: Vec<Product>,
    pub product: NewProduct,
}

impl Request<Vec<Product>> for AddProductCommand {}

pub struct AddProductRequestHandler(pub DefaultMediator);
impl RequestHandler<AddProductCommand, Vec<Product>> for AddProductRequestHandler {
    fn handle(&mut self, command: AddProductCommand) -> Vec<Product> {
        let products = url_store::add(&command.products, command.product);

        if let Some(added) = products.last() {
            if let Err(e) = self.0.publish(ProductAddedEvent(added.clone())) {
                log::error!("Could not publish event: {e}");
            }
        }

        products
    }
}
