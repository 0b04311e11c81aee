//! In-page anchor scrolling math.

/// Selector for every same-page anchor link
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Extract the fragment selector from an anchor's `href`.
///
/// Returns `None` for anything that is not a same-page fragment, and for the bare `#`
/// (which keeps its default jump-to-top behavior).
pub fn fragment_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}

/// Absolute scroll offset that leaves the target just below the fixed navbar.
///
/// `target_top` is the target's top relative to the viewport, `page_offset` the current
/// vertical scroll position. The navbar height is measured per click since it changes
/// with the layout.
pub fn scroll_destination(
    target_top: f64,
    page_offset: f64,
    navbar_height: f64,
    margin: f64,
) -> f64 {
    target_top + page_offset - navbar_height - margin
}
