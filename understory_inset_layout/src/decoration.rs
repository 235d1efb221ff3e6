// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decoration derivation: the background region behind a section.

use kurbo::Rect;

use crate::metadata::SectionMetrics;
use crate::types::{DECORATION_Z_INDEX, Decoration, DecorationBounds};
use crate::viewport::Viewport;

/// Derive the decoration of `section` from its placed item frames.
///
/// `items` are the frames of this section only. Returns `None` when the
/// section declares no decoration or has no items.
///
/// The base region spans from the first item to the last one, across the
/// content width minus the section's horizontal inset, and covers the header
/// and footer spacing. The [`DecorationBounds`] flags then grow it, in the
/// order content inset, section inset, header, footer. Offsets and extents
/// are accumulated separately and the size is assigned once at the end.
pub(crate) fn derive_decoration(
    section: &SectionMetrics,
    items: &[Rect],
    viewport: &Viewport,
) -> Option<Decoration> {
    let (kind, bounds) = section.decoration?;
    let first = items.first()?;
    let last = items.get(section.last_item()?)?;

    let union = first.union(*last);
    let style = &section.style;
    let inset = style.inset;

    let mut x = union.x0;
    let mut y = union.y0 - style.header_spacing;
    let mut width = viewport.content_width() - (inset.x0 + inset.x1);
    let mut height = union.height() + style.header_spacing + style.footer_spacing;

    if bounds.contains(DecorationBounds::CONTENT_INSET) {
        let content = viewport.content_insets();
        width += content.x0 + content.x1;
        x -= content.x0;
    }

    if bounds.contains(DecorationBounds::INSET) {
        width += inset.x0 + inset.x1;
        x -= inset.x0;
        y -= inset.y0;
        height += inset.y0 + inset.y1;
    }

    if bounds.contains(DecorationBounds::HEADER) {
        y -= section.header.height;
        height += section.header.height;
    }

    if bounds.contains(DecorationBounds::FOOTER) {
        height += section.footer.height;
    }

    Some(Decoration {
        kind,
        frame: Rect::new(x, y, x + width, y + height),
        z_index: DECORATION_Z_INDEX,
    })
}

#[cfg(test)]
mod tests {
    use kurbo::{Insets, Rect, Size};

    use super::derive_decoration;
    use crate::metadata::SectionMetrics;
    use crate::types::{DECORATION_Z_INDEX, DecorationBounds, DecorationKind, SectionStyle};
    use crate::viewport::Viewport;

    fn section(bounds: DecorationBounds) -> SectionMetrics {
        SectionMetrics {
            style: SectionStyle::default()
                .with_inset(Insets::new(10.0, 20.0, 10.0, 5.0))
                .with_header_spacing(4.0)
                .with_footer_spacing(6.0),
            header: Size::new(200.0, 40.0),
            footer: Size::new(200.0, 20.0),
            first_item: 0,
            item_count: 3,
            decoration: Some((DecorationKind(1), bounds)),
        }
    }

    fn items() -> [Rect; 3] {
        [
            Rect::new(10.0, 104.0, 60.0, 154.0),
            Rect::new(70.0, 104.0, 120.0, 154.0),
            Rect::new(10.0, 164.0, 60.0, 214.0),
        ]
    }

    fn viewport() -> Viewport {
        Viewport::new(240.0, Insets::new(8.0, 0.0, 12.0, 0.0)).unwrap()
    }

    #[test]
    fn bare_decoration_spans_items_and_spacing() {
        let decoration =
            derive_decoration(&section(DecorationBounds::empty()), &items(), &viewport()).unwrap();
        // Content width 220, minus 20 of section inset.
        assert_eq!(decoration.frame, Rect::new(10.0, 100.0, 210.0, 220.0));
        assert_eq!(decoration.kind, DecorationKind(1));
        assert_eq!(decoration.z_index, DECORATION_Z_INDEX);
    }

    #[test]
    fn default_bounds_cover_header_and_footer() {
        let decoration =
            derive_decoration(&section(DecorationBounds::default()), &items(), &viewport()).unwrap();
        assert_eq!(decoration.frame, Rect::new(10.0, 60.0, 210.0, 240.0));
    }

    #[test]
    fn inset_and_content_inset_widen_the_region() {
        let decoration = derive_decoration(
            &section(DecorationBounds::INSET | DecorationBounds::CONTENT_INSET),
            &items(),
            &viewport(),
        )
        .unwrap();
        // x: 10 - 8 - 10; width: 200 + 20 + 20; y: 100 - 20; height: 120 + 25.
        assert_eq!(decoration.frame, Rect::new(-8.0, 80.0, 232.0, 225.0));
    }

    #[test]
    fn every_toggle_at_once_does_not_double_count() {
        let decoration =
            derive_decoration(&section(DecorationBounds::all()), &items(), &viewport()).unwrap();
        assert_eq!(decoration.frame.width(), 240.0);
        assert_eq!(decoration.frame.height(), 120.0 + 25.0 + 40.0 + 20.0);
        assert_eq!(decoration.frame.y0, 100.0 - 20.0 - 40.0);
    }

    #[test]
    fn decoration_contains_first_and_last_item() {
        let items = items();
        let decoration =
            derive_decoration(&section(DecorationBounds::empty()), &items, &viewport()).unwrap();
        assert_eq!(decoration.frame.union(items[0]), decoration.frame);
        assert_eq!(decoration.frame.union(items[2]), decoration.frame);
    }

    #[test]
    fn no_kind_or_no_items_means_no_decoration() {
        let mut plain = section(DecorationBounds::default());
        plain.decoration = None;
        assert_eq!(derive_decoration(&plain, &items(), &viewport()), None);

        let mut empty = section(DecorationBounds::default());
        empty.item_count = 0;
        assert_eq!(derive_decoration(&empty, &[], &viewport()), None);
    }
}
