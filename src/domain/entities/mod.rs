//! Core entities of the link management client.
//!
//! - [`UrlRecord`] - A shortened link as listed by the service
//! - [`RecordStats`] - Click statistics for one link

pub mod url_record;

pub use url_record::{RecordStats, UrlRecord};
