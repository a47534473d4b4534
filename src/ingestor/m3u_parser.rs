//! Extended-M3U playlist parser
//!
//! Converts raw playlist text into an ordered list of channel records.
//! Parsing is total: malformed or partial input degrades to fewer emitted
//! records, never an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::Channel;

static LOGO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-logo="([^"]*)""#).unwrap());
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"group-title="([^"]*)""#).unwrap());
static TVG_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-id="([^"]*)""#).unwrap());
static CHNO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"tvg-chno="([^"]*)""#).unwrap());

/// Metadata accumulated from an `#EXTINF:` line, waiting for its URL line.
///
/// Only one pending channel exists at a time; a new `#EXTINF:` line
/// replaces an unfinalized one.
struct PendingChannel {
    name: String,
    number: i32,
    logo: Option<String>,
    group: String,
    country: String,
    tvg_id: Option<String>,
}

impl PendingChannel {
    fn into_channel(self, url: &str) -> Channel {
        Channel {
            id: channel_id(&self.name, url),
            number: self.number,
            name: self.name,
            url: url.to_string(),
            logo: self.logo,
            group: self.group,
            country: self.country,
            tvg_id: self.tvg_id,
            resolution: None,
            epg: None,
        }
    }
}

/// Parse an extended-M3U document into channel records, in document order.
///
/// A single forward scan over the trimmed lines. `#EXTINF:` lines start a
/// pending channel, lines beginning with `http` finalize it, everything
/// else (headers, comments, blank lines) is ignored. A URL line with no
/// pending channel is dropped, as is a pending channel never followed by a
/// URL line. Channel numbers without an explicit `tvg-chno` are synthesized
/// from a per-call counter starting at 1001; the counter only advances on
/// synthesis.
pub fn parse_m3u(content: &str) -> Vec<Channel> {
    let mut channels = Vec::new();
    let mut pending: Option<PendingChannel> = None;
    let mut channel_counter = 1000;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with("#EXTINF:") {
            pending = Some(parse_extinf_line(line, &mut channel_counter));
        } else if line.starts_with("http") {
            if let Some(channel) = pending.take() {
                channels.push(channel.into_channel(line));
            }
        }
    }

    debug!("parsed {} channels from playlist document", channels.len());
    channels
}

fn parse_extinf_line(line: &str, channel_counter: &mut i32) -> PendingChannel {
    let logo = capture(&LOGO_RE, line);
    let group = capture(&GROUP_RE, line).unwrap_or_else(|| "Uncategorized".to_string());
    let tvg_id = capture(&TVG_ID_RE, line);

    let name = match line.rfind(',') {
        Some(pos) => line[pos + 1..].trim(),
        None => "",
    };
    let name = if name.is_empty() { "Unknown Channel" } else { name }.to_string();

    let number = match capture(&CHNO_RE, line).and_then(|v| v.trim().parse::<i32>().ok()) {
        Some(explicit) => explicit,
        None => {
            *channel_counter += 1;
            *channel_counter
        }
    };

    let country = classify_country(&group, &name);

    PendingChannel {
        name,
        number,
        logo,
        group,
        country,
        tvg_id,
    }
}

fn capture(re: &Regex, line: &str) -> Option<String> {
    re.captures(line).map(|c| c[1].to_string())
}

/// Country classification derived from the group string. Checks run in
/// fixed priority order, first match wins; the channel name participates
/// only in the Arabic check.
fn classify_country(group: &str, name: &str) -> String {
    let group = group.to_lowercase();

    let country = if group.contains("arabic")
        || group.contains("middle east")
        || group.contains("ar:")
        || name.to_lowercase().contains("ar:")
    {
        "Arabic"
    } else if group.contains("france") || group.contains("fr:") {
        "France"
    } else if group.contains("germany") || group.contains("de:") {
        "Germany"
    } else if group.contains("usa") || group.contains("us:") {
        "USA"
    } else {
        "International"
    };

    country.to_string()
}

/// Slug of name + URL: lowercased, every character outside `[a-z0-9]`
/// replaced with a hyphen. Lossy and not collision-proof; distinct entries
/// that normalize identically both keep the same id.
fn channel_id(name: &str, url: &str) -> String {
    format!("{}-{}", name, url)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
