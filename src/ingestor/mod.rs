pub mod ingest_m3u;
pub mod m3u_parser;

pub use ingest_m3u::M3uIngestor;
pub use m3u_parser::parse_m3u;
