use crate::models::Product;
use crate::url_store::defaults::default_products;
use crate::{DecodeError, EncodeError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

/// JSON, then percent-encoding, then base64.
pub fn try_encode(products: &[Product]) -> Result<String, EncodeError> {
    let json = serde_json::to_string(products)?;
    let escaped = urlencoding::encode(&json);
    Ok(STANDARD.encode(escaped.as_bytes()))
}

/// Like [`try_encode`], but logs a failure and returns an empty string.
pub fn encode(products: &[Product]) -> String {
    try_encode(products).unwrap_or_else(|e| {
        log::error!("Error encoding products: {e}");
        String::new()
    })
}

pub fn try_decode(text: &str) -> Result<Vec<Product>, DecodeError> {
    let bytes = STANDARD.decode(text.trim())?;
    let escaped = String::from_utf8(bytes).map_err(DecodeError::Text)?;
    check_escapes(&escaped)?;
    let json = urlencoding::decode(&escaped).map_err(DecodeError::PercentUtf8)?;

    let value: Value = serde_json::from_str(&json)?;
    if !value.is_array() {
        return Err(DecodeError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}

/// Reads a payload produced by [`encode`].
///
/// An empty payload, or one that fails any decoding step, yields the
/// default product list. Failures are logged.
pub fn decode(text: &str) -> Vec<Product> {
    if text.is_empty() {
        return default_products();
    }

    try_decode(text).unwrap_or_else(|e| {
        log::error!("Error decoding products: {e}");
        default_products()
    })
}

/// Every `%` must start a two-digit hex escape.
fn check_escapes(text: &str) -> Result<(), DecodeError> {
    let bytes = text.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }
        let well_formed = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(DecodeError::MalformedEscape(i));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product {
                id: "1".to_owned(),
                name: "MacBook Pro 13'' (2020)".to_owned(),
                category: "electronics".to_owned(),
                image: "https://images.unsplash.com/photo-1541807084?w=400&h=400&fit=crop"
                    .to_owned(),
                created: None,
                updated: None,
            },
            Product {
                id: "1706000000000".to_owned(),
                name: "Café crème ☕".to_owned(),
                category: "food & drink".to_owned(),
                image: "☕".to_owned(),
                created: Some("2024-01-23T10:00:00.000Z".to_owned()),
                updated: Some("2024-01-24T08:30:00.000Z".to_owned()),
            },
        ]
    }

    #[test]
    fn decode_reverses_encode() {
        let products = products();
        let encoded = encode(&products);

        assert!(!encoded.is_empty());
        assert_eq!(products, decode(&encoded));
        assert_eq!(Vec::<Product>::new(), decode(&encode(&[])));
    }

    #[test]
    fn payload_is_base64_of_escaped_json() {
        let encoded = encode(&[]);
        assert_eq!("JTVCJTVE", encoded);
    }

    #[test]
    fn reads_payloads_with_unescaped_punctuation() {
        // Browsers leave !'()* unescaped.
        let json = r#"[{"id":"1","name":"Tee (L)!","category":"clothing","image":"*"}]"#;
        let escaped = json
            .replace('"', "%22")
            .replace(' ', "%20")
            .replace('[', "%5B")
            .replace(']', "%5D")
            .replace('{', "%7B")
            .replace('}', "%7D")
            .replace(':', "%3A")
            .replace(',', "%2C");
        let payload = STANDARD.encode(escaped);

        let products = try_decode(&payload).unwrap();
        assert_eq!("Tee (L)!", products[0].name);
        assert_eq!("*", products[0].image);
    }

    #[test]
    fn empty_payload_is_the_default_list() {
        assert_eq!(default_products(), decode(""));
    }

    #[test]
    fn malformed_payloads_fall_back_to_defaults() {
        let not_base64 = "@@not base64@@";
        let bad_escape = STANDARD.encode("%5B%zz");
        let not_json = STANDARD.encode("%7Bnope");
        let not_array = STANDARD.encode(urlencoding::encode(r#"{"id":"1"}"#).as_bytes());

        for payload in [
            not_base64,
            bad_escape.as_str(),
            not_json.as_str(),
            not_array.as_str(),
        ] {
            assert_eq!(default_products(), decode(payload), "payload {payload:?}");
        }

        assert!(matches!(try_decode(not_base64), Err(DecodeError::Base64(_))));
        assert!(matches!(try_decode(&bad_escape), Err(DecodeError::MalformedEscape(3))));
        assert!(matches!(try_decode(&not_json), Err(DecodeError::Json(_))));
        assert!(matches!(try_decode(&not_array), Err(DecodeError::NotAnArray)));
    }

    #[test]
    fn fallback_is_not_empty() {
        assert!(!decode("garbage").is_empty());
    }
}
