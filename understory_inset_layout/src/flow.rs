// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-flow placement: the line-wrapping cursor walk over items.
//!
//! Items are visited section-major, item-minor. Each one either continues the
//! current row, sharing its top edge, or wraps to a new row below the lowest
//! bottom reached so far. The first item of every section always wraps.

use kurbo::{Point, Rect, Size};
use log::warn;

use crate::metadata::SectionMetrics;
use crate::types::{ItemLocator, LayoutStats};

/// Overshoot below this is treated as float noise rather than overflow.
const OVERFLOW_TOLERANCE: f64 = 0.01;

/// Running position carried between placement steps.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct Cursor {
    /// Top edge of the current row.
    pub(crate) row_top: f64,
    /// Right edge of the last element placed on the current row.
    pub(crate) row_right: f64,
    /// Lowest bottom edge reached so far.
    pub(crate) bottom: f64,
}

impl Cursor {
    /// Cursor after a block (header, footer or row start) occupying `frame`.
    pub(crate) fn after(frame: Rect) -> Self {
        Self {
            row_top: frame.y0,
            row_right: frame.x1,
            bottom: frame.y1,
        }
    }

    /// The same cursor moved down by `dy`.
    pub(crate) fn shifted_down(self, dy: f64) -> Self {
        Self {
            row_top: self.row_top + dy,
            row_right: self.row_right,
            bottom: self.bottom + dy,
        }
    }
}

/// Place one item and return its frame together with the advanced cursor.
///
/// `content_width` is the width items wrap within. Items wider than that
/// keep their full size and are reported, never clipped.
pub(crate) fn place_item(
    locator: ItemLocator,
    size: Size,
    section: &SectionMetrics,
    cursor: Cursor,
    content_width: f64,
    stats: &mut LayoutStats,
) -> (Rect, Cursor) {
    let style = &section.style;
    let first = locator.item == 0;

    let lead = if first {
        style.inset.x0
    } else {
        style.interitem_spacing
    };
    let tentative_x = cursor.row_right + lead;
    let wraps = first || tentative_x + size.width > content_width;

    let (frame, next) = if wraps {
        let gap = if first {
            style.header_spacing
        } else {
            style.line_spacing
        };
        let origin = Point::new(style.inset.x0, cursor.bottom + gap);
        let frame = Rect::from_origin_size(origin, size);
        (frame, Cursor::after(frame))
    } else {
        let origin = Point::new(tentative_x, cursor.row_top);
        let frame = Rect::from_origin_size(origin, size);
        let next = Cursor {
            row_top: cursor.row_top,
            row_right: frame.x1,
            bottom: cursor.bottom.max(frame.y1),
        };
        (frame, next)
    };

    report_overflow(locator, frame, section, content_width, stats);
    (frame, next)
}

fn report_overflow(
    locator: ItemLocator,
    frame: Rect,
    section: &SectionMetrics,
    content_width: f64,
    stats: &mut LayoutStats,
) {
    let width = frame.width();
    if width > content_width {
        warn!(
            "item {locator} is {width} wide, more than the content width {content_width} (overflow {})",
            width - content_width
        );
        stats.overflowing_items += 1;
        return;
    }

    let safe_right = content_width - section.style.inset.x1;
    let overshoot = frame.x1 - safe_right;
    if overshoot >= OVERFLOW_TOLERANCE {
        warn!(
            "item {locator} ends at x {}, past the section's right inset at {safe_right} (overflow {overshoot})",
            frame.x1
        );
        stats.overflowing_items += 1;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Rect, Size};

    use super::{Cursor, place_item};
    use crate::metadata::SectionMetrics;
    use crate::types::{ItemLocator, LayoutStats, SectionStyle};

    fn section(style: SectionStyle, item_count: usize) -> SectionMetrics {
        SectionMetrics {
            style,
            header: Size::ZERO,
            footer: Size::ZERO,
            first_item: 0,
            item_count,
            decoration: None,
        }
    }

    /// Place `sizes` into one section starting from a fresh cursor.
    fn run(style: SectionStyle, sizes: &[Size], width: f64) -> (alloc::vec::Vec<Rect>, LayoutStats) {
        let metrics = section(style, sizes.len());
        let mut stats = LayoutStats::default();
        let mut cursor = Cursor::default();
        let mut frames = alloc::vec::Vec::new();
        for (item, size) in sizes.iter().enumerate() {
            let (frame, next) = place_item(
                ItemLocator::new(0, item),
                *size,
                &metrics,
                cursor,
                width,
                &mut stats,
            );
            frames.push(frame);
            cursor = next;
        }
        (frames, stats)
    }

    #[test]
    fn wraps_when_the_next_item_does_not_fit() {
        let style = SectionStyle::default()
            .with_line_spacing(10.0)
            .with_interitem_spacing(10.0);
        let square = Size::new(100.0, 100.0);
        let (frames, stats) = run(style, &[square, square, square], 250.0);

        assert_eq!(frames[0], Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(frames[1], Rect::new(110.0, 0.0, 210.0, 100.0));
        assert_eq!(frames[2], Rect::new(0.0, 110.0, 100.0, 210.0));
        assert_eq!(stats.overflowing_items, 0);
    }

    #[test]
    fn rows_share_a_top_edge_and_wrap_below_the_tallest() {
        let style = SectionStyle::default().with_line_spacing(5.0);
        let sizes = [
            Size::new(40.0, 30.0),
            Size::new(40.0, 60.0),
            Size::new(40.0, 20.0),
            Size::new(40.0, 10.0),
        ];
        let (frames, _) = run(style, &sizes, 120.0);

        assert_eq!(frames[0].y0, 0.0);
        assert_eq!(frames[1].y0, 0.0);
        assert_eq!(frames[2].y0, 0.0);
        // The second row starts below the tallest item of the first.
        assert_eq!(frames[3].y0, 65.0);
    }

    #[test]
    fn first_item_starts_at_left_inset_after_header_spacing() {
        let style = SectionStyle::default()
            .with_inset(Insets::new(16.0, 0.0, 16.0, 0.0))
            .with_header_spacing(8.0)
            .with_interitem_spacing(4.0);
        let (frames, _) = run(style, &[Size::new(20.0, 20.0), Size::new(20.0, 20.0)], 200.0);

        assert_eq!(frames[0].origin().x, 16.0);
        assert_eq!(frames[0].origin().y, 8.0);
        assert_eq!(frames[1].origin().x, 40.0);
        assert_eq!(frames[1].origin().y, 8.0);
    }

    #[test]
    fn first_item_wraps_even_when_the_row_has_room() {
        let metrics = section(SectionStyle::default(), 1);
        let mut stats = LayoutStats::default();
        let cursor = Cursor {
            row_top: 50.0,
            row_right: 10.0,
            bottom: 70.0,
        };
        let (frame, next) = place_item(
            ItemLocator::new(1, 0),
            Size::new(10.0, 10.0),
            &metrics,
            cursor,
            500.0,
            &mut stats,
        );
        assert_eq!(frame, Rect::new(0.0, 70.0, 10.0, 80.0));
        assert_eq!(next.bottom, 80.0);
    }

    #[test]
    fn wide_items_overflow_without_clipping() {
        let (frames, stats) = run(
            SectionStyle::default(),
            &[Size::new(10.0, 10.0), Size::new(400.0, 10.0)],
            300.0,
        );
        assert_eq!(frames[1].width(), 400.0);
        assert_eq!(frames[1].x0, 0.0);
        assert_eq!(frames[1].y0, 10.0);
        assert_eq!(stats.overflowing_items, 1);
    }

    #[test]
    fn items_past_the_right_inset_are_reported() {
        let style = SectionStyle::default().with_inset(Insets::new(0.0, 0.0, 20.0, 0.0));
        let (_, stats) = run(style, &[Size::new(90.0, 10.0)], 100.0);
        assert_eq!(stats.overflowing_items, 1);
    }

    #[test]
    fn zero_sized_items_still_take_part() {
        let style = SectionStyle::default().with_interitem_spacing(5.0);
        let (frames, _) = run(style, &[Size::ZERO, Size::new(10.0, 10.0)], 100.0);
        assert_eq!(frames[0], Rect::ZERO);
        assert_eq!(frames[1].x0, 5.0);
    }
}
