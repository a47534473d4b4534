use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One playable stream entry extracted from a playlist document.
///
/// Records are created fresh on every parse, carry no back-reference to the
/// source document, and are immutable once constructed. Ownership of the
/// emitted sequence passes entirely to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Slug derived from name + URL. Unique within a parse batch except for
    /// inputs that repeat the same name/URL pair, and not namespaced across
    /// independent playlists.
    pub id: String,
    /// Declared `tvg-chno` when present, otherwise synthesized sequentially
    /// starting at 1001.
    pub number: i32,
    pub name: String,
    pub url: String,
    pub logo: Option<String>,
    pub group: String,
    pub country: String,
    pub tvg_id: Option<String>,
    /// Reserved for downstream enrichment; never set by this crate.
    pub resolution: Option<Resolution>,
    /// Reserved for downstream enrichment; never set by this crate.
    pub epg: Option<ChannelEpg>,
}

/// Stream quality tag, filled in by collaborators that probe the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "4K")]
    FourK,
    #[serde(rename = "HD")]
    Hd,
    #[serde(rename = "SD")]
    Sd,
}

/// A single program-guide entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpgProgram {
    pub title: String,
    pub start: String,
    pub end: String,
    pub progress: f32,
}

/// Current and upcoming programming for a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelEpg {
    pub current: EpgProgram,
    pub next: EpgProgram,
}

/// Caller-level aggregate wrapping the channels ingested from one source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub channels: Vec<Channel>,
    pub last_updated: DateTime<Utc>,
}
