//! Helpers to interpret the posting fields of the site configuration.

use std::ops::Range;

use chrono::{DateTime, Duration, Utc};

/// Returns whether a post scheduled at `publish_at` is visible at `now`.
///
/// With a margin the post shows up `margin` before its publish time, without one
/// it shows up once the publish time has passed.
pub fn is_published(
    publish_at: DateTime<Utc>,
    now: DateTime<Utc>,
    margin: Option<Duration>,
) -> bool {
    let visible_from = match margin {
        Some(margin) => publish_at
            .checked_sub_signed(margin)
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
        None => publish_at,
    };
    now > visible_from
}

/// Number of listing pages needed for `total` posts. There is always at least one page.
pub fn page_count(total: usize, per_page: u32) -> usize {
    let per_page = (per_page as usize).max(1);
    total.div_ceil(per_page).max(1)
}

/// Indices of the posts shown on the 1-based `page`
pub fn page_range(page: usize, total: usize, per_page: u32) -> Range<usize> {
    let per_page = (per_page as usize).max(1);
    let Some(start) = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(per_page))
        .filter(|start| *start < total)
    else {
        return total..total;
    };

    start..start.saturating_add(per_page).min(total)
}
