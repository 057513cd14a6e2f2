use url::Url;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg"];
const IMAGE_HOSTS: &[&str] = &["unsplash.com", "images.", "cdn."];

/// The three shapes an `image` field can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef<'a> {
    /// A `data:` URI with the image bytes inline.
    DataUri(&'a str),
    /// An absolute external URL.
    External(Url),
    /// Anything else, usually a short glyph such as an emoji.
    Glyph(&'a str),
}

impl<'a> ImageRef<'a> {
    pub fn classify(text: &'a str) -> Self {
        if text.starts_with("data:") {
            return ImageRef::DataUri(text);
        }

        match Url::parse(text) {
            Ok(url) => ImageRef::External(url),
            Err(_) => ImageRef::Glyph(text),
        }
    }
}

/// Heuristic check that `text` is an absolute URL pointing at an image.
///
/// Accepts URLs ending in a common image extension or mentioning a known
/// image host. A `true` here does not mean the image will load.
pub fn is_plausible_image_reference(text: &str) -> bool {
    if Url::parse(text).is_err() {
        return false;
    }

    let lower = text.to_ascii_lowercase();
    let has_extension = IMAGE_EXTENSIONS.iter().any(|ext| {
        lower
            .strip_suffix(ext)
            .is_some_and(|rest| rest.ends_with('.'))
    });

    has_extension || IMAGE_HOSTS.iter().any(|host| text.contains(host))
}
