use catalog::models::Product;
use catalog::url_store;
use mediator::{Request, RequestHandler};

pub struct GetAllProductsRequest {
    pub products: Vec<Product>,
    pub category: String,
}

impl Request<Vec<Product>> for GetAllProductsRequest {}

pub struct GetAllProductsRequestHandler;
impl RequestHandler<GetAllProductsRequest, Vec<Product>> for GetAllProductsRequestHandler {
    fn handle(&mut self, request: GetAllProductsRequest) -> Vec<Product> {
        url_store::filter_by_category(&request.products, &request.category)
    }
}
