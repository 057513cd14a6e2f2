use crate::SharedCatalogClient;
use actix_web::web::Query;
use actix_web::{get, HttpResponse, Responder};
use catalog::models::ALL_CATEGORIES;
use std::collections::HashMap;

#[get("/")]
pub async fn get_all(
    client: SharedCatalogClient,
    query: Query<HashMap<String, String>>,
) -> impl Responder {
    let category = query
        .get("category")
        .map(String::as_str)
        .unwrap_or(ALL_CATEGORIES);

    HttpResponse::Ok().json(client.get_by_category(category).await)
}
