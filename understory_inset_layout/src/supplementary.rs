// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header and footer placement around a section's items.

use kurbo::{Point, Rect};
use log::warn;

use crate::flow::Cursor;
use crate::metadata::SectionMetrics;
use crate::types::LayoutStats;

/// Place the header of `section` ahead of its first item.
///
/// Sections after the first are pushed down by their top inset whether or not
/// they have a header. The first section's top inset is left to the
/// viewport's content insets.
pub(crate) fn place_header(
    index: usize,
    section: &SectionMetrics,
    cursor: Cursor,
    content_width: f64,
    stats: &mut LayoutStats,
) -> (Option<Rect>, Cursor) {
    let inset = section.style.inset;
    let leading = index != 0;

    if !section.has_header() {
        let next = if leading {
            cursor.shifted_down(inset.y0)
        } else {
            cursor
        };
        return (None, next);
    }

    let origin = if leading {
        Point::new(inset.x0, cursor.bottom + inset.y0)
    } else {
        Point::new(0.0, cursor.bottom)
    };
    let frame = Rect::from_origin_size(origin, section.header);

    if frame.x1 > content_width {
        warn!(
            "header of section {index} ends at x {}, past the content width {content_width}",
            frame.x1
        );
        stats.overflowing_headers += 1;
    }

    (Some(frame), Cursor::after(frame))
}

/// Place the footer of `section` after its last item.
///
/// Without a footer the cursor still moves by the bottom inset and the footer
/// spacing. A footer replaces the bottom inset.
pub(crate) fn place_footer(section: &SectionMetrics, cursor: Cursor) -> (Option<Rect>, Cursor) {
    let spacing = section.style.footer_spacing;

    if !section.has_footer() {
        return (None, cursor.shifted_down(section.style.inset.y1 + spacing));
    }

    let origin = Point::new(0.0, cursor.bottom + spacing);
    let frame = Rect::from_origin_size(origin, section.footer);
    (Some(frame), Cursor::after(frame))
}
