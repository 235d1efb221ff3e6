// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The result of one layout pass and the geometry queries over it.

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::types::{
    Decoration, ElementKind, ITEM_Z_INDEX, ItemLocator, LayoutElement, LayoutStats,
};

/// Every frame produced by one layout pass.
///
/// Storage is index-addressed: item frames live in one flat vector, sliced per
/// section, and per-section frames live in vectors indexed by section. A
/// snapshot is never patched; each pass produces a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutFrames {
    /// All item frames, section-major.
    pub(crate) items: Vec<Rect>,
    /// `section_offsets[s]..section_offsets[s + 1]` are the items of section `s`.
    pub(crate) section_offsets: Vec<usize>,
    pub(crate) headers: Vec<Option<Rect>>,
    pub(crate) footers: Vec<Option<Rect>>,
    pub(crate) decorations: Vec<Option<Decoration>>,
    pub(crate) content_size: Size,
    pub(crate) stats: LayoutStats,
}

impl Default for LayoutFrames {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            section_offsets: alloc::vec![0],
            headers: Vec::new(),
            footers: Vec::new(),
            decorations: Vec::new(),
            content_size: Size::ZERO,
            stats: LayoutStats::default(),
        }
    }
}

impl LayoutFrames {
    /// Number of sections laid out.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of items laid out in `section`, zero if out of range.
    #[must_use]
    pub fn item_count(&self, section: usize) -> usize {
        self.section_items(section).len()
    }

    /// Frame of the item at `locator`.
    #[must_use]
    pub fn item_frame(&self, locator: ItemLocator) -> Option<Rect> {
        self.section_items(locator.section)
            .get(locator.item)
            .copied()
    }

    /// Frame of the header of `section`, if it has one.
    #[must_use]
    pub fn header_frame(&self, section: usize) -> Option<Rect> {
        self.headers.get(section).copied().flatten()
    }

    /// Frame of the footer of `section`, if it has one.
    #[must_use]
    pub fn footer_frame(&self, section: usize) -> Option<Rect> {
        self.footers.get(section).copied().flatten()
    }

    /// Decoration of `section`, if it declared one.
    #[must_use]
    pub fn decoration(&self, section: usize) -> Option<&Decoration> {
        self.decorations.get(section)?.as_ref()
    }

    /// Frame of the decoration of `section`, if it declared one.
    #[must_use]
    pub fn decoration_frame(&self, section: usize) -> Option<Rect> {
        self.decoration(section).map(|decoration| decoration.frame)
    }

    /// Total size needed to show every element.
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.content_size
    }

    /// Diagnostic counters from the pass that produced these frames.
    #[must_use]
    pub const fn stats(&self) -> &LayoutStats {
        &self.stats
    }

    /// Iterate over all item frames in section-major order.
    pub fn items(&self) -> impl Iterator<Item = (ItemLocator, Rect)> + '_ {
        (0..self.section_count()).flat_map(move |section| {
            self.section_items(section)
                .iter()
                .enumerate()
                .map(move |(item, frame)| (ItemLocator::new(section, item), *frame))
        })
    }

    /// Elements to realize for the region `rect`.
    ///
    /// Returns every item whose frame overlaps `rect` (edges count as
    /// overlapping), followed by the header, footer and decoration of each
    /// touched section. A section is touched when one of its items, its
    /// header, its footer or its decoration overlaps `rect`. Each
    /// supplementary element appears once.
    #[must_use]
    pub fn elements_in_rect(&self, rect: Rect) -> Vec<LayoutElement> {
        let mut out = Vec::new();
        let mut touched = Vec::new();

        for section in 0..self.section_count() {
            let before = out.len();
            for (item, frame) in self.section_items(section).iter().enumerate() {
                if overlaps(*frame, rect) {
                    out.push(LayoutElement {
                        kind: ElementKind::Item(ItemLocator::new(section, item)),
                        frame: *frame,
                        z_index: ITEM_Z_INDEX,
                    });
                }
            }
            if out.len() > before || self.supplements_overlap(section, rect) {
                touched.push(section);
            }
        }

        for &section in &touched {
            if let Some(frame) = self.header_frame(section) {
                out.push(LayoutElement {
                    kind: ElementKind::Header(section),
                    frame,
                    z_index: ITEM_Z_INDEX,
                });
            }
        }
        for &section in &touched {
            if let Some(frame) = self.footer_frame(section) {
                out.push(LayoutElement {
                    kind: ElementKind::Footer(section),
                    frame,
                    z_index: ITEM_Z_INDEX,
                });
            }
        }
        for &section in &touched {
            if let Some(decoration) = self.decoration(section) {
                out.push(LayoutElement {
                    kind: ElementKind::Decoration {
                        section,
                        kind: decoration.kind,
                    },
                    frame: decoration.frame,
                    z_index: decoration.z_index,
                });
            }
        }
        out
    }

    fn supplements_overlap(&self, section: usize, rect: Rect) -> bool {
        [
            self.header_frame(section),
            self.footer_frame(section),
            self.decoration_frame(section),
        ]
        .into_iter()
        .flatten()
        .any(|frame| overlaps(frame, rect))
    }

    fn section_items(&self, section: usize) -> &[Rect] {
        match (
            self.section_offsets.get(section),
            self.section_offsets.get(section + 1),
        ) {
            (Some(&start), Some(&end)) => &self.items[start..end],
            _ => &[],
        }
    }
}

/// Closed-interval overlap: rectangles sharing an edge overlap.
fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && a.x1 >= b.x0 && a.y0 <= b.y1 && a.y1 >= b.y0
}
