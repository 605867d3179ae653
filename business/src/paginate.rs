//! Pagination over the visible row set.
//!
//! Pages are 1-based. The control strip shows a sliding window of up to five
//! numbered pages around the current one, an ellipsis when the window stops
//! short of the final page, and the final page itself.

/// Page sizes the footer dropdown offers.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Number of pages needed for `row_count` rows. `page_size` must be non-zero.
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size)
}

/// The rows belonging to `page`. Out-of-range pages yield an empty slice.
pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// One element of the pagination strip, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { enabled: bool },
    Page { number: usize, current: bool },
    Ellipsis,
    Next { enabled: bool },
}

/// Build the control strip for `current` out of `total` pages.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    const MAX_NUMBERED: usize = 5;

    let mut controls = vec![PageControl::Previous {
        enabled: current > 1,
    }];

    let mut start = current.saturating_sub(MAX_NUMBERED / 2).max(1);
    let end = (start + MAX_NUMBERED - 1).min(total);
    if end + 1 < start + MAX_NUMBERED {
        start = end.saturating_sub(MAX_NUMBERED - 1).max(1);
    }

    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            current: number == current,
        });
    }

    if end < total {
        if end < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total,
            current: total == current,
        });
    }

    controls.push(PageControl::Next {
        enabled: current < total,
    });
    controls
}
