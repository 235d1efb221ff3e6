// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Metadata collection: the first step of a pass.
//!
//! Everything the host reports is read exactly once here and stored in
//! index-addressed arenas, so the placement steps never call back into the
//! sources.

use alloc::vec::Vec;

use kurbo::{Insets, Size};
use log::{debug, warn};

use crate::source::Sources;
use crate::types::{DecorationBounds, DecorationKind, ItemLocator, LayoutStats, SectionStyle};

/// Everything known about one section for the duration of a pass.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SectionMetrics {
    pub(crate) style: SectionStyle,
    pub(crate) header: Size,
    pub(crate) footer: Size,
    /// Offset of this section's first item in [`Metadata::item_sizes`].
    pub(crate) first_item: usize,
    pub(crate) item_count: usize,
    pub(crate) decoration: Option<(DecorationKind, DecorationBounds)>,
}

impl SectionMetrics {
    /// Index of the last item, or `None` for an empty section.
    pub(crate) fn last_item(&self) -> Option<usize> {
        self.item_count.checked_sub(1)
    }

    pub(crate) fn has_header(&self) -> bool {
        self.header != Size::ZERO
    }

    pub(crate) fn has_footer(&self) -> bool {
        self.footer != Size::ZERO
    }
}

/// Per-section metrics plus the flat per-item size arena.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Metadata {
    pub(crate) sections: Vec<SectionMetrics>,
    pub(crate) item_sizes: Vec<Size>,
}

impl Metadata {
    /// Query every source once and sanitize the answers.
    pub(crate) fn collect(sources: &Sources<'_>, stats: &mut LayoutStats) -> Self {
        let section_count = sources.structure.section_count();
        let mut sections = Vec::with_capacity(section_count);
        let mut item_sizes = Vec::new();

        for section in 0..section_count {
            let item_count = sources.structure.item_count(section);
            let style = sanitize_style(sources.spacing.section_style(section), section, stats);
            let header = sanitize_size(sources.sizing.header_size(section), stats, || {
                warn!("header of section {section} has an invalid size; using zero");
            });
            let footer = sanitize_size(sources.sizing.footer_size(section), stats, || {
                warn!("footer of section {section} has an invalid size; using zero");
            });
            let decoration = sources.decoration.and_then(|source| {
                source
                    .decoration_kind(section)
                    .map(|kind| (kind, source.decoration_bounds(section)))
            });

            let first_item = item_sizes.len();
            item_sizes.reserve(item_count);
            for item in 0..item_count {
                let locator = ItemLocator::new(section, item);
                let size = match sources.sizing.item_size(locator) {
                    Some(size) => sanitize_size(size, stats, || {
                        warn!("item {locator} has an invalid size {size:?}; using zero");
                    }),
                    None => {
                        debug!("no size reported for item {locator}; using zero");
                        stats.missing_sizes += 1;
                        Size::ZERO
                    }
                };
                item_sizes.push(size);
            }

            sections.push(SectionMetrics {
                style,
                header,
                footer,
                first_item,
                item_count,
                decoration,
            });
        }

        stats.sections = section_count;
        stats.items = item_sizes.len();
        Self {
            sections,
            item_sizes,
        }
    }

    /// Size of the item at `locator`, zero if it is out of range.
    pub(crate) fn item_size(&self, locator: ItemLocator) -> Size {
        self.sections
            .get(locator.section)
            .filter(|section| locator.item < section.item_count)
            .and_then(|section| self.item_sizes.get(section.first_item + locator.item))
            .copied()
            .unwrap_or(Size::ZERO)
    }
}

/// Sizes must be finite and non-negative.
fn sanitize_size(size: Size, stats: &mut LayoutStats, report: impl FnOnce()) -> Size {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if valid(size.width) && valid(size.height) {
        size
    } else {
        report();
        stats.sanitized_values += 1;
        Size::new(
            if valid(size.width) { size.width } else { 0.0 },
            if valid(size.height) { size.height } else { 0.0 },
        )
    }
}

/// Spacings and insets may be negative (overlapping rows are the host's call)
/// but must be finite.
fn sanitize_style(style: SectionStyle, section: usize, stats: &mut LayoutStats) -> SectionStyle {
    let mut invalid = 0;
    let mut finite = |v: f64| {
        if v.is_finite() {
            v
        } else {
            invalid += 1;
            0.0
        }
    };
    let clean = SectionStyle {
        inset: Insets::new(
            finite(style.inset.x0),
            finite(style.inset.y0),
            finite(style.inset.x1),
            finite(style.inset.y1),
        ),
        line_spacing: finite(style.line_spacing),
        interitem_spacing: finite(style.interitem_spacing),
        header_spacing: finite(style.header_spacing),
        footer_spacing: finite(style.footer_spacing),
    };
    if invalid > 0 {
        warn!("section {section} has {invalid} non-finite spacing values; using zero for them");
        stats.sanitized_values += invalid;
    }
    clean
}
