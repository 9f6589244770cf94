//! Report formatting for generated links.

use maplink_core::MapLink;

/// Human-readable report: counts, length, then the link itself.
pub fn render_text(link: &MapLink) -> String {
    format!(
        "Mandatory points: {}\nFiller points added: {}\nTotal URL Length: {}\n\nGenerated Link:\n{}",
        link.stats.mandatory_points, link.stats.filler_points, link.stats.url_length, link.url
    )
}

pub fn render_json(link: &MapLink) -> serde_json::Result<String> {
    serde_json::to_string_pretty(link)
}
