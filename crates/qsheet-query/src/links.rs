//! Detection of link-like cells.

use serde::Serialize;

/// Practice sites whose addresses are shown as links even without a scheme.
pub const LINK_HOSTS: &[&str] = &[
    "leetcode.com",
    "geeksforgeeks.org",
    "codechef.com",
    "codeforces.com",
    "hackerrank.com",
    "github.com",
];

/// How a cell should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    Empty,
    Text(String),
    Link { href: String, label: String },
}

/// Classifies a cell as empty, plain text, or a link.
pub fn classify_cell(value: &str) -> CellContent {
    if value.is_empty() {
        return CellContent::Empty;
    }
    if !is_link(value) {
        return CellContent::Text(value.to_string());
    }

    let href = if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{value}")
    };
    CellContent::Link {
        href,
        label: link_label(value).to_string(),
    }
}

fn is_link(value: &str) -> bool {
    value.starts_with("http://")
        || value.starts_with("https://")
        || LINK_HOSTS.iter().any(|host| value.contains(host))
}

/// Drops the scheme and a leading `www.` for display.
fn link_label(value: &str) -> &str {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value);
    rest.strip_prefix("www.").unwrap_or(rest)
}
