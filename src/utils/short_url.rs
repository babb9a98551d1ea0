//! Rendering of public short links.

use url::Url;

/// Builds `{base}/{short_code}` links for display and copying.
#[derive(Debug, Clone)]
pub struct ShortUrlBuilder {
    base: String,
}

impl ShortUrlBuilder {
    pub fn new(base: &Url) -> Self {
        Self {
            base: base.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn build(&self, short_code: &str) -> String {
        format!("{}/{}", self.base, short_code)
    }
}
