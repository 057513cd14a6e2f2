use super::dispatch;
use crate::commands::{AddProductCommand, DeleteProductCommand, UpdateProductCommand};
use crate::queries::GetAllProductsRequest;
use crate::SharedMediator;
use actix_web::web::{Data, Json, Query};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use catalog::models::{Product, ALL_CATEGORIES};
use catalog::url_store::{self, MemoryLocation, NewProduct, ProductPatch};
use catalog::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

type CatalogQuery = Query<HashMap<String, String>>;

/// Body of an update: the product id plus the fields to overwrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductBody {
    pub id: String,
    #[serde(flatten)]
    pub patch: ProductPatch,
}

/// A product list after a change, with everything needed to share it.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub data: String,
    pub link: String,
}

fn current_products(config: &CatalogConfig, query: &CatalogQuery) -> Vec<Product> {
    let payload = query
        .get(&config.data_param)
        .map(String::as_str)
        .unwrap_or_default();
    url_store::decode(payload)
}

fn request_location(req: &HttpRequest) -> Option<MemoryLocation> {
    let href = {
        let info = req.connection_info();
        format!("{}://{}{}", info.scheme(), info.host(), req.uri())
    };

    match MemoryLocation::parse(&href) {
        Ok(location) => Some(location),
        Err(e) => {
            log::error!("Unable to read request address {href}: {e}");
            None
        }
    }
}

/// Writes `products` into the request's address and returns the updated
/// address along with the snapshot.
fn snapshot(
    req: &HttpRequest,
    config: &CatalogConfig,
    products: Vec<Product>,
) -> (Option<String>, CatalogSnapshot) {
    let data = url_store::encode(&products);

    let (address, link) = match request_location(req) {
        Some(mut location) => {
            url_store::write_to_address(&mut location, &config.data_param, &products);
            let link = url_store::shareable_link(&location, &config.data_param, &products);
            (Some(location.url().to_string()), link)
        }
        None => (None, String::new()),
    };

    (address, CatalogSnapshot { products, data, link })
}

fn respond(
    mut builder: actix_web::HttpResponseBuilder,
    address: Option<String>,
    body: CatalogSnapshot,
) -> HttpResponse {
    if let Some(address) = address {
        builder.insert_header(("Location", address));
    }
    builder.json(body)
}

#[post("/")]
pub async fn create(
    req: HttpRequest,
    mediator: Data<SharedMediator>,
    config: Data<CatalogConfig>,
    query: CatalogQuery,
    body: Json<NewProduct>,
) -> actix_web::Result<HttpResponse> {
    let command = AddProductCommand {
        products: current_products(&config, &query),
        product: body.into_inner(),
    };
    let products = dispatch(&mediator, command)?;

    let (address, body) = snapshot(&req, &config, products);
    Ok(respond(HttpResponse::Created(), address, body))
}

#[put("/")]
pub async fn update(
    req: HttpRequest,
    mediator: Data<SharedMediator>,
    config: Data<CatalogConfig>,
    query: CatalogQuery,
    body: Json<UpdateProductBody>,
) -> actix_web::Result<HttpResponse> {
    let UpdateProductBody { id, patch } = body.into_inner();
    let command = UpdateProductCommand {
        products: current_products(&config, &query),
        id,
        patch,
    };

    match dispatch(&mediator, command)? {
        Some(products) => {
            let (address, body) = snapshot(&req, &config, products);
            Ok(respond(HttpResponse::Ok(), address, body))
        }
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[delete("/{id}/")]
pub async fn delete(
    path: web::Path<String>,
    req: HttpRequest,
    mediator: Data<SharedMediator>,
    config: Data<CatalogConfig>,
    query: CatalogQuery,
) -> actix_web::Result<HttpResponse> {
    let command = DeleteProductCommand {
        products: current_products(&config, &query),
        id: path.into_inner(),
    };

    match dispatch(&mediator, command)? {
        Some(products) => {
            let (address, body) = snapshot(&req, &config, products);
            Ok(respond(HttpResponse::Ok(), address, body))
        }
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

#[get("/")]
pub async fn get_all(
    mediator: Data<SharedMediator>,
    config: Data<CatalogConfig>,
    query: CatalogQuery,
) -> actix_web::Result<HttpResponse> {
    let category = query
        .get("category")
        .map(String::as_str)
        .unwrap_or(ALL_CATEGORIES)
        .to_owned();

    let request = GetAllProductsRequest {
        products: current_products(&config, &query),
        category,
    };
    let products = dispatch(&mediator, request)?;
    Ok(HttpResponse::Ok().json(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use catalog::url_store::default_products;

    fn app_config() -> Data<CatalogConfig> {
        Data::new(CatalogConfig::default())
    }

    fn app_mediator() -> Data<SharedMediator> {
        Data::new(crate::create_mediator_service())
    }

    #[actix_web::test]
    async fn get_all_without_data_lists_defaults() {
        let app = test::init_service(
            App::new()
                .app_data(app_mediator())
                .app_data(app_config())
                .service(web::scope("/api/products").service(get_all)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/products/?category=software")
            .to_request();
        let products: Vec<Product> = test::call_and_read_body_json(&app, req).await;

        let expected = url_store::filter_by_category(&default_products(), "software");
        assert_eq!(expected, products);
    }

    #[actix_web::test]
    async fn create_returns_shareable_snapshot() {
        let app = test::init_service(
            App::new()
                .app_data(app_mediator())
                .app_data(app_config())
                .service(web::scope("/api/products").service(create)),
        )
        .await;

        let mut location =
            MemoryLocation::parse("http://localhost/api/products/?view=grid").unwrap();
        url_store::write_to_address(&mut location, "data", &default_products()[..1]);
        let uri = format!(
            "{}?{}",
            location.url().path(),
            location.url().query().unwrap_or_default()
        );

        let req = test::TestRequest::post()
            .uri(&uri)
            .set_json(NewProduct {
                name: "Desk Lamp".to_owned(),
                category: "home".to_owned(),
                image: "💡".to_owned(),
            })
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(StatusCode::CREATED, resp.status());
        assert!(resp.headers().contains_key("location"));

        let snapshot: CatalogSnapshot = test::read_body_json(resp).await;
        assert_eq!(2, snapshot.products.len());
        assert_eq!("Desk Lamp", snapshot.products[1].name);
        assert_eq!(snapshot.products, url_store::decode(&snapshot.data));
        assert!(!snapshot.link.contains("view=grid"));
    }

    #[actix_web::test]
    async fn unknown_ids_are_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(app_mediator())
                .app_data(app_config())
                .service(web::scope("/api/products").service(update).service(delete)),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/products/missing/")
            .to_request();
        assert_eq!(StatusCode::NOT_FOUND, test::call_service(&app, req).await.status());

        let req = test::TestRequest::put()
            .uri("/api/products/")
            .set_json(serde_json::json!({ "id": "missing", "name": "X" }))
            .to_request();
        assert_eq!(StatusCode::NOT_FOUND, test::call_service(&app, req).await.status());
    }

    #[actix_web::test]
    async fn update_merges_patch_into_payload() {
        let app = test::init_service(
            App::new()
                .app_data(app_mediator())
                .app_data(app_config())
                .service(web::scope("/api/products").service(update)),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/products/")
            .set_json(UpdateProductBody {
                id: "7".to_owned(),
                patch: ProductPatch {
                    category: Some("books".to_owned()),
                    ..ProductPatch::default()
                },
            })
            .to_request();
        let snapshot: CatalogSnapshot = test::call_and_read_body_json(&app, req).await;

        let defaults = default_products();
        assert_eq!(12, snapshot.products.len());
        assert_eq!("books", snapshot.products[6].category);
        assert_eq!(defaults[6].name, snapshot.products[6].name);
        assert_eq!(snapshot.products, url_store::decode(&snapshot.data));
    }

    #[actix_web::test]
    async fn delete_removes_from_payload() {
        let app = test::init_service(
            App::new()
                .app_data(app_mediator())
                .app_data(app_config())
                .service(web::scope("/api/products").service(delete)),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/products/3/")
            .to_request();
        let snapshot: CatalogSnapshot = test::call_and_read_body_json(&app, req).await;

        assert_eq!(11, snapshot.products.len());
        assert!(snapshot.products.iter().all(|p| p.id != "3"));
    }
}
