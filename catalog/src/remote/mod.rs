//! Read-only client for the hosted `products` collection.
//!
//! Failures never reach the caller: they are logged and the client answers
//! with an empty list.

mod transport;
pub use transport::*;

use crate::models::{ProductRecord, ALL_CATEGORIES};
use crate::{CatalogConfig, ClientError};

/// Page size used when walking the full list.
pub const FULL_LIST_BATCH: u32 = 500;

pub struct CatalogClient<T = HttpTransport> {
    transport: T,
    collection: String,
}

impl CatalogClient<HttpTransport> {
    pub fn from_config(config: &CatalogConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config.base_url)?;
        Ok(CatalogClient::new(transport, config.collection.clone()))
    }
}

impl<T: RecordTransport> CatalogClient<T> {
    pub fn new<S: Into<String>>(transport: T, collection: S) -> Self {
        CatalogClient {
            transport,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Every record in the collection, or an empty list if the request fails.
    pub async fn get_all(&self) -> Vec<ProductRecord> {
        match self.full_list(None).await {
            Ok(records) => records,
            Err(e) => {
                log::error!("Error fetching products: {e}");
                Vec::new()
            }
        }
    }

    /// Records whose category equals `category` exactly. `"all"` returns everything.
    pub async fn get_by_category(&self, category: &str) -> Vec<ProductRecord> {
        if category == ALL_CATEGORIES {
            return self.get_all().await;
        }

        match self.full_list(Some(category_filter(category))).await {
            Ok(records) => records,
            Err(e) => {
                log::error!("Error fetching products by category {category:?}: {e}");
                Vec::new()
            }
        }
    }

    async fn full_list(&self, filter: Option<String>) -> Result<Vec<ProductRecord>, ClientError> {
        let mut records = Vec::new();
        let mut query = ListQuery {
            page: 1,
            per_page: FULL_LIST_BATCH,
            filter,
        };

        loop {
            let page = self.transport.list(&self.collection, &query).await?;
            let count = page.items.len();
            records.extend(page.items);

            if count < query.per_page as usize {
                return Ok(records);
            }
            query.page += 1;
        }
    }
}

/// Filter expression matching `category` exactly.
pub fn category_filter(category: &str) -> String {
    let escaped = category.replace('\\', "\\\\").replace('"', "\\\"");
    format!("category = \"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn record(id: usize, category: &str) -> ProductRecord {
        ProductRecord {
            id: format!("r{id}"),
            name: format!("Product {id}"),
            category: category.to_owned(),
            price: id as f64,
            image: "📦".to_owned(),
            created: "2024-01-23 10:00:00.000Z".to_owned(),
            updated: "2024-01-23 10:00:00.000Z".to_owned(),
        }
    }

    /// Serves `records` in pages, applying exact category filters.
    struct FakeTransport {
        records: Vec<ProductRecord>,
        queries: Mutex<Vec<ListQuery>>,
    }

    impl FakeTransport {
        fn new(records: Vec<ProductRecord>) -> Self {
            FakeTransport {
                records,
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RecordTransport for FakeTransport {
        async fn list(&self, _: &str, query: &ListQuery) -> Result<RecordPage, ClientError> {
            self.queries.lock().unwrap().push(query.clone());

            let matching: Vec<ProductRecord> = self
                .records
                .iter()
                .filter(|r| match &query.filter {
                    Some(filter) => *filter == category_filter(&r.category),
                    None => true,
                })
                .cloned()
                .collect();

            let start = ((query.page - 1) * query.per_page) as usize;
            let items = matching
                .into_iter()
                .skip(start)
                .take(query.per_page as usize)
                .collect();

            Ok(RecordPage {
                page: query.page,
                per_page: query.per_page,
                items,
            })
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl RecordTransport for FailingTransport {
        async fn list(&self, _: &str, _: &ListQuery) -> Result<RecordPage, ClientError> {
            Err(ClientError::Status {
                status: 503,
                message: "unavailable".to_owned(),
            })
        }
    }

    #[tokio::test]
    async fn get_all_walks_every_page() {
        let records: Vec<ProductRecord> = (0..1203).map(|i| record(i, "books")).collect();
        let client = CatalogClient::new(FakeTransport::new(records.clone()), "products");

        assert_eq!(records, client.get_all().await);

        let pages: Vec<u32> = client
            .transport
            .queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.page)
            .collect();
        assert_eq!(vec![1, 2, 3], pages);
    }

    #[tokio::test]
    async fn get_by_category_matches_exactly() {
        let records = vec![
            record(1, "electronics"),
            record(2, "Electronics"),
            record(3, "clothing"),
            record(4, "electronics"),
        ];
        let client = CatalogClient::new(FakeTransport::new(records), "products");

        let ids: Vec<String> = client
            .get_by_category("electronics")
            .await
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(vec!["r1", "r4"], ids);
        assert!(client.get_by_category("toys").await.is_empty());
    }

    #[tokio::test]
    async fn all_category_is_get_all() {
        let records = vec![record(1, "electronics"), record(2, "clothing")];
        let client = CatalogClient::new(FakeTransport::new(records), "products");

        assert_eq!(client.get_all().await, client.get_by_category("all").await);
        assert!(client
            .transport
            .queries
            .lock()
            .unwrap()
            .iter()
            .all(|q| q.filter.is_none()));
    }

    #[tokio::test]
    async fn failures_yield_empty_lists() {
        let client = CatalogClient::new(FailingTransport, "products");

        assert!(client.get_all().await.is_empty());
        assert!(client.get_by_category("books").await.is_empty());
        assert!(client.get_by_category("all").await.is_empty());
    }

    #[tokio::test]
    async fn unreachable_server_yields_empty_list() {
        let config = CatalogConfig {
            base_url: "http://127.0.0.1:1".to_owned(),
            ..CatalogConfig::default()
        };
        let client = CatalogClient::from_config(&config).unwrap();

        assert!(client.get_all().await.is_empty());
    }

    #[test]
    fn category_filter_escapes_quotes() {
        assert_eq!(r#"category = "books""#, category_filter("books"));
        assert_eq!(r#"category = "say \"hi\"""#, category_filter(r#"say "hi""#));
        assert_eq!(r#"category = "a\\b""#, category_filter(r"a\b"));
    }
}
