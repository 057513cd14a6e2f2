pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8090";
pub const DEFAULT_COLLECTION: &str = "products";
pub const DEFAULT_DATA_PARAM: &str = "data";

/// Where the hosted collection lives and which query parameter carries link data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    pub collection: String,
    pub data_param: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: DEFAULT_BASE_URL.to_owned(),
            collection: DEFAULT_COLLECTION.to_owned(),
            data_param: DEFAULT_DATA_PARAM.to_owned(),
        }
    }
}

impl CatalogConfig {
    /// Reads `CATALOG_URL`, `CATALOG_COLLECTION` and `CATALOG_DATA_PARAM`,
    /// keeping the default for any variable that is unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        CatalogConfig {
            base_url: read("CATALOG_URL", DEFAULT_BASE_URL),
            collection: read("CATALOG_COLLECTION", DEFAULT_COLLECTION),
            data_param: read("CATALOG_DATA_PARAM", DEFAULT_DATA_PARAM),
        }
    }
}
