//! Utility helpers.
//!
//! - [`short_url`] - Public short link rendering

pub mod short_url;

pub use short_url::ShortUrlBuilder;
