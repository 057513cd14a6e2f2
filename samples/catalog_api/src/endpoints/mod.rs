pub mod products;
pub mod remote;

use crate::SharedMediator;
use actix_web::error::ErrorInternalServerError;
use actix_web::web;
use mediator::{Mediator, Request};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .service(products::create)
            .service(products::update)
            .service(products::delete)
            .service(products::get_all),
    )
    .service(web::scope("/api/remote/products").service(remote::get_all));
}

/// Sends `req` through the shared mediator.
fn dispatch<Req, Res>(mediator: &SharedMediator, req: Req) -> actix_web::Result<Res>
where
    Req: Request<Res> + 'static,
    Res: 'static,
{
    let mut mediator = mediator
        .lock()
        .map_err(|_| ErrorInternalServerError("Unable to lock mediator"))?;

    mediator.send(req).map_err(ErrorInternalServerError)
}
