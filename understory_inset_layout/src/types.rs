// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: locators, section styles, decoration markers and output elements.

use core::fmt;

use kurbo::{Insets, Rect};

/// Stacking order shared by items, headers and footers.
pub const ITEM_Z_INDEX: i32 = 0;

/// Stacking order of section decorations; always directly behind the items.
pub const DECORATION_Z_INDEX: i32 = ITEM_Z_INDEX - 1;

/// Identifies one item: its section and its index within that section.
///
/// Locators order section-major, which is also the order the layout pass
/// visits items in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemLocator {
    /// Zero-based section index.
    pub section: usize,
    /// Zero-based item index within the section.
    pub item: usize,
}

impl ItemLocator {
    /// Create a locator for `item` in `section`.
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for ItemLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

/// Spacing rules for a single section.
///
/// Every value defaults to zero. `inset` uses kurbo's convention:
/// `x0` is the left inset, `y0` the top, `x1` the right and `y1` the bottom.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SectionStyle {
    /// Insets around the section's items.
    pub inset: Insets,
    /// Vertical gap between consecutive rows.
    pub line_spacing: f64,
    /// Horizontal gap between neighbouring items on a row.
    pub interitem_spacing: f64,
    /// Gap between the header (or the section start) and the first row.
    pub header_spacing: f64,
    /// Gap between the last row and the footer (or the section end).
    pub footer_spacing: f64,
}

impl Default for SectionStyle {
    fn default() -> Self {
        Self {
            inset: Insets::ZERO,
            line_spacing: 0.0,
            interitem_spacing: 0.0,
            header_spacing: 0.0,
            footer_spacing: 0.0,
        }
    }
}

impl SectionStyle {
    /// Returns a copy with the given section inset.
    #[must_use]
    pub fn with_inset(mut self, inset: Insets) -> Self {
        self.inset = inset;
        self
    }

    /// Returns a copy with the given line spacing.
    #[must_use]
    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Returns a copy with the given interitem spacing.
    #[must_use]
    pub fn with_interitem_spacing(mut self, spacing: f64) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    /// Returns a copy with the given header-to-first-row spacing.
    #[must_use]
    pub fn with_header_spacing(mut self, spacing: f64) -> Self {
        self.header_spacing = spacing;
        self
    }

    /// Returns a copy with the given last-row-to-footer spacing.
    #[must_use]
    pub fn with_footer_spacing(mut self, spacing: f64) -> Self {
        self.footer_spacing = spacing;
        self
    }
}

/// Host-chosen marker naming the decoration view of a section.
///
/// The layout never interprets the value; it is handed back on every
/// [`Decoration`] so hosts can pick the view type to realize.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecorationKind(pub u32);

bitflags::bitflags! {
    /// Which parts of a section a decoration's bounds should cover.
    ///
    /// The decoration always covers the section's first and last item. Each
    /// flag grows it further and the flags compose independently.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DecorationBounds: u8 {
        /// Grow by the section inset on all four sides.
        const INSET         = 0b0000_0001;
        /// Grow horizontally by the viewport's content insets.
        const CONTENT_INSET = 0b0000_0010;
        /// Extend upwards over the section header.
        const HEADER        = 0b0000_0100;
        /// Extend downwards over the section footer.
        const FOOTER        = 0b0000_1000;
    }
}

impl Default for DecorationBounds {
    fn default() -> Self {
        Self::HEADER | Self::FOOTER
    }
}

/// A computed section decoration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decoration {
    /// The marker supplied by the host for this section.
    pub kind: DecorationKind,
    /// Absolute frame of the decoration.
    pub frame: Rect,
    /// Stacking order; see [`DECORATION_Z_INDEX`].
    pub z_index: i32,
}

/// What a [`LayoutElement`] represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A regular item.
    Item(ItemLocator),
    /// The header of a section.
    Header(usize),
    /// The footer of a section.
    Footer(usize),
    /// The decoration of a section.
    Decoration {
        /// Section the decoration belongs to.
        section: usize,
        /// Marker supplied by the host.
        kind: DecorationKind,
    },
}

impl ElementKind {
    /// The section this element belongs to.
    #[must_use]
    pub const fn section(&self) -> usize {
        match *self {
            Self::Item(locator) => locator.section,
            Self::Header(section) | Self::Footer(section) => section,
            Self::Decoration { section, .. } => section,
        }
    }
}

/// One positioned element returned by rectangle queries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutElement {
    /// What the element is.
    pub kind: ElementKind,
    /// Absolute frame of the element.
    pub frame: Rect,
    /// Stacking order. Higher is drawn on top.
    pub z_index: i32,
}

/// Diagnostic counters gathered during one layout pass.
///
/// None of these stop a pass; they record where the output may look off.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutStats {
    /// Number of sections visited.
    pub sections: usize,
    /// Number of items placed.
    pub items: usize,
    /// Items whose size the sizing source could not report.
    pub missing_sizes: usize,
    /// Sizes, spacings or insets that were not finite (or negative sizes) and were replaced by zero.
    pub sanitized_values: usize,
    /// Items wider than the content width or extending past their section's right inset.
    pub overflowing_items: usize,
    /// Headers extending past the content width.
    pub overflowing_headers: usize,
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::{DecorationBounds, DecorationKind, ElementKind, ItemLocator};

    #[test]
    fn locators_order_section_major() {
        let a = ItemLocator::new(0, 7);
        let b = ItemLocator::new(1, 0);
        let c = ItemLocator::new(1, 2);
        assert!(a < b, "earlier section must sort first");
        assert!(b < c, "earlier item must sort first within a section");
        assert_eq!(format!("{c}"), "[1, 2]");
    }

    #[test]
    fn decoration_bounds_default_covers_header_and_footer() {
        let bounds = DecorationBounds::default();
        assert!(bounds.contains(DecorationBounds::HEADER));
        assert!(bounds.contains(DecorationBounds::FOOTER));
        assert!(!bounds.contains(DecorationBounds::INSET));
        assert!(!bounds.contains(DecorationBounds::CONTENT_INSET));
    }

    #[test]
    fn element_kind_reports_section() {
        assert_eq!(ElementKind::Item(ItemLocator::new(3, 1)).section(), 3);
        assert_eq!(ElementKind::Header(2).section(), 2);
        assert_eq!(ElementKind::Footer(4).section(), 4);
        let decoration = ElementKind::Decoration {
            section: 5,
            kind: DecorationKind(9),
        };
        assert_eq!(decoration.section(), 5);
    }
}
