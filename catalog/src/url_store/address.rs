use crate::models::Product;
use crate::url_store::codec::{decode, encode};
use crate::url_store::defaults::default_products;
use crate::AddressError;
use url::Url;

/// The page address the product list is persisted in.
pub trait Location {
    /// The full current address.
    fn href(&self) -> String;

    /// Replaces the current history entry with `url`, without navigating.
    fn replace_state(&mut self, url: &Url);
}

/// A [`Location`] held in memory, standing in for a browser address bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLocation {
    url: Url,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(url: Url) -> Self {
        MemoryLocation {
            url,
            replacements: 0,
        }
    }

    pub fn parse(href: &str) -> Result<Self, AddressError> {
        Ok(Self::new(Url::parse(href)?))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// How many times the current entry has been replaced.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Location for MemoryLocation {
    fn href(&self) -> String {
        self.url.to_string()
    }

    fn replace_state(&mut self, url: &Url) {
        self.url = url.clone();
        self.replacements += 1;
    }
}

/// Stores `products` in the `param` query parameter of the current address.
///
/// An empty list, or one that cannot be encoded, removes the parameter
/// instead of leaving `param=` behind.
pub fn write_to_address<L: Location + ?Sized>(
    location: &mut L,
    param: &str,
    products: &[Product],
) {
    let mut url = match current_url(location) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Error updating address: {e}");
            return;
        }
    };

    let payload = if products.is_empty() {
        None
    } else {
        non_empty_payload(products)
    };
    set_query_param(&mut url, param, payload.as_deref());
    location.replace_state(&url);
}

/// Origin and path of the current address with `products` attached as
/// `param`. Other query parameters and the fragment are dropped.
///
/// An empty list is still attached, so the link opens to an empty list
/// rather than the defaults.
///
/// Returns an empty string if the current address cannot be parsed.
pub fn shareable_link<L: Location + ?Sized>(
    location: &L,
    param: &str,
    products: &[Product],
) -> String {
    let mut url = match current_url(location) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Error building shareable link: {e}");
            return String::new();
        }
    };

    url.set_query(None);
    url.set_fragment(None);
    set_query_param(&mut url, param, non_empty_payload(products).as_deref());
    url.to_string()
}

/// The product list stored in the current address, or the default list
/// when the parameter is absent or unreadable.
pub fn read_from_address<L: Location + ?Sized>(location: &L, param: &str) -> Vec<Product> {
    let url = match current_url(location) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Error reading address: {e}");
            return default_products();
        }
    };

    match url.query_pairs().find(|(key, _)| key == param) {
        Some((_, payload)) => decode(&payload),
        None => default_products(),
    }
}

fn current_url<L: Location + ?Sized>(location: &L) -> Result<Url, AddressError> {
    Ok(Url::parse(&location.href())?)
}

fn non_empty_payload(products: &[Product]) -> Option<String> {
    Some(encode(products)).filter(|payload| !payload.is_empty())
}

/// Sets `key` to `value` in place of its first occurrence, dropping any
/// repeats. `None` removes every occurrence.
fn set_query_param(url: &mut Url, key: &str, value: Option<&str>) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    match value {
        Some(value) => match pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                pairs[first].1 = value.to_owned();
                let mut index = 0;
                pairs.retain(|(k, _)| {
                    let keep = k != key || index == first;
                    index += 1;
                    keep
                });
            }
            None => pairs.push((key.to_owned(), value.to_owned())),
        },
        None => pairs.retain(|(k, _)| k != key),
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
}
