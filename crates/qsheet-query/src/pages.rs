//! Page navigation controls.

use std::fmt;

use serde::Serialize;

/// Most numbered page buttons shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One element of the page navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    Previous { target: usize },
    Page { number: usize, current: bool },
    Ellipsis,
    Next { target: usize },
}

impl PageControl {
    /// Page this control navigates to, if it is clickable.
    pub fn target(&self) -> Option<usize> {
        match *self {
            Self::Previous { target } | Self::Next { target } => Some(target),
            Self::Page { number, .. } => Some(number),
            Self::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Previous { .. } => f.write_str("← Previous"),
            Self::Page {
                number,
                current: true,
            } => write!(f, "[{number}]"),
            Self::Page { number, .. } => write!(f, "{number}"),
            Self::Ellipsis => f.write_str("..."),
            Self::Next { .. } => f.write_str("Next →"),
        }
    }
}

/// Builds the navigation bar for `current` out of `total` pages.
///
/// Shows a window of up to [`MAX_VISIBLE_PAGES`] numbered pages centered on
/// the current page, with jumps to the first and last page and ellipses over
/// the gaps. A single page (or none) needs no controls.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }

    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = total.min(start + MAX_VISIBLE_PAGES - 1);
    if end + 1 < start + MAX_VISIBLE_PAGES {
        start = end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1);
    }

    let mut controls = Vec::with_capacity(MAX_VISIBLE_PAGES + 6);
    if current > 1 {
        controls.push(PageControl::Previous {
            target: current - 1,
        });
    }
    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            current: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }
    controls.extend((start..=end).map(|number| PageControl::Page {
        number,
        current: number == current,
    }));
    if end < total {
        if end + 1 < total {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total,
            current: false,
        });
    }
    if current < total {
        controls.push(PageControl::Next {
            target: current + 1,
        });
    }
    controls
}
