mod commands;
mod endpoints;
mod events;
mod queries;

use actix_web::middleware::TrailingSlash;
use actix_web::web::Data;
use actix_web::{middleware, App, HttpServer};
use catalog::remote::CatalogClient;
use catalog::CatalogConfig;
use mediator::DefaultMediator;
use std::sync::{Arc, Mutex};

pub type SharedCatalogClient = Data<CatalogClient>;
pub type SharedMediator = Arc<Mutex<DefaultMediator>>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));

    let port = std::env::var("PORT")
        .map(|port| port.parse::<u16>().ok())
        .ok()
        .flatten()
        .unwrap_or(8080);

    let config = CatalogConfig::from_env();
    let client: SharedCatalogClient = Data::new(CatalogClient::from_config(&config)?);
    let config = Data::new(config);
    let mediator = create_mediator_service();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::NormalizePath::new(TrailingSlash::Always))
            .wrap(middleware::Logger::default())
            .app_data(Data::new(mediator.clone()))
            .app_data(config.clone())
            .app_data(client.clone())
            .configure(endpoints::configure)
    })
    .bind(("0.0.0.0", port))?
    .run();

    // On server start
    tokio::join!(server, on_server_start(port)).0?;
    Ok(())
}

async fn on_server_start(port: u16) {
    log::info!("Catalog server listening on port {port}");
}

fn create_mediator_service() -> SharedMediator {
    use commands::*;
    use events::*;
    use queries::*;

    let mediator = DefaultMediator::builder()
        // Requests
        .add_handler(GetAllProductsRequestHandler)
        .add_handler_deferred(|m| AddProductRequestHandler(m))
        .add_handler_deferred(|m| UpdateProductRequestHandler(m))
        .add_handler_deferred(|m| DeleteProductRequestHandler(m))
        // Events
        .subscribe_fn(|event: ProductAddedEvent| {
            log::info!("Added: {} - {}", event.0.name, event.0.id);
        })
        .subscribe_fn(|event: ProductUpdatedEvent| {
            log::info!("Updated: {} - {}", event.0.name, event.0.id);
        })
        .subscribe_fn(|event: ProductDeletedEvent| {
            log::info!("Deleted: {} - {}", event.0.name, event.0.id);
        })
        .build();

    Arc::new(Mutex::new(mediator))
}
