//! Extended-M3U playlist ingestion for IPTV applications.
//!
//! Two pieces make up the core: [`parse_m3u`], a pure and total parser that
//! turns raw playlist text into an ordered list of [`Channel`] records, and
//! [`M3uIngestor`], the HTTP retrieval wrapper that feeds it remote
//! documents. Everything that can fail lives on the retrieval path and
//! surfaces as a [`RetrievalError`]; an empty channel list is a valid,
//! non-error outcome.

pub mod config;
pub mod errors;
pub mod ingestor;
pub mod models;

pub use errors::RetrievalError;
pub use ingestor::{parse_m3u, M3uIngestor};
pub use models::{Channel, Playlist};
