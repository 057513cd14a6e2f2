use crate::models::ProductRecord;
use crate::ClientError;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// One page request against a collection's list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub filter: Option<String>,
}

/// One page of records as returned by the list endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage {
    pub page: u32,
    pub per_page: u32,
    pub items: Vec<ProductRecord>,
}

/// Fetches pages of product records from the hosted store.
#[async_trait]
pub trait RecordTransport: Send + Sync {
    async fn list(&self, collection: &str, query: &ListQuery) -> Result<RecordPage, ClientError>;
}

/// [`RecordTransport`] over the hosted service's REST API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::BaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(base_url.to_string()));
        }

        Ok(HttpTransport {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// `{base}/api/collections/{collection}/records`
    pub fn records_url(&self, collection: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "collections", collection, "records"]);
        Ok(url)
    }
}

#[async_trait]
impl RecordTransport for HttpTransport {
    async fn list(&self, collection: &str, query: &ListQuery) -> Result<RecordPage, ClientError> {
        let url = self.records_url(collection)?;

        let mut params = vec![
            ("page", query.page.to_string()),
            ("perPage", query.per_page.to_string()),
            ("skipTotal", "1".to_owned()),
        ];
        if let Some(filter) = &query.filter {
            params.push(("filter", filter.clone()));
        }

        log::debug!("GET {url} page={} filter={:?}", query.page, query.filter);
        let response = self.http.get(url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<RecordPage>().await?)
    }
}
