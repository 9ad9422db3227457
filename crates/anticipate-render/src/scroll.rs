//! Scroll window arithmetic.
//!
//! Indices named `highlighted` or `first_visible` are global (into the full
//! match list); the thumb position is a local row within the visible window.

/// Local row of the scrollbar thumb.
///
/// The thumb pins to the top row while the highlight is still inside the
/// first window, pins to the bottom row on the last candidate, and otherwise
/// glides through the interior rows in proportion to how far the highlight
/// has travelled through the remaining candidates.
///
/// Only meaningful when `total > scroll`; callers gate on that before drawing
/// a scrollbar at all.
pub fn thumb_row(
    highlighted: Option<usize>,
    scroll: usize,
    total: usize,
    visible_rows: usize,
) -> usize {
    debug_assert!(
        total > scroll,
        "scrollbar drawn for {total} matches in a window of {scroll}"
    );

    let last_row = visible_rows.saturating_sub(1);
    let Some(highlighted) = highlighted else {
        return 0;
    };

    if highlighted < scroll {
        return 0;
    }
    if highlighted + 1 == total {
        return last_row;
    }

    // Rows strictly between the first and last visible row. Without any,
    // the bottom row is reserved for the last candidate.
    let inner_rows = last_row.saturating_sub(1);
    if inner_rows == 0 {
        return 0;
    }

    let percent = (highlighted + 1 - scroll) as f64 / (total - scroll) as f64;

    let position = (percent * inner_rows as f64 - 1.0).ceil().max(0.0) as usize;
    1 + position.min(inner_rows - 1)
}

/// First visible index after moving the window the minimum distance needed
/// to show `highlighted`.
pub fn follow(first_visible: usize, highlighted: usize, scroll: usize) -> usize {
    if highlighted < first_visible {
        highlighted
    } else if highlighted >= first_visible + scroll {
        highlighted + 1 - scroll
    } else {
        first_visible
    }
}
