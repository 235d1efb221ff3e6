// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass and a small controller that owns its latest result.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use log::debug;

use crate::decoration::derive_decoration;
use crate::flow::{Cursor, place_item};
use crate::frames::LayoutFrames;
use crate::metadata::Metadata;
use crate::source::Sources;
use crate::supplementary::{place_footer, place_header};
use crate::types::{Decoration, ItemLocator, LayoutElement, LayoutStats};
use crate::viewport::Viewport;

/// Run a complete layout pass.
///
/// Reads every source once, places headers, items and footers section by
/// section, then derives decorations. The returned snapshot holds no
/// reference to `sources`.
///
/// ```rust
/// use kurbo::{Rect, Size};
/// use understory_inset_layout::{
///     ItemLocator, SectionStyle, SizingSource, Sources, StructureSource, Viewport,
///     compute_layout,
/// };
///
/// struct Squares;
///
/// impl StructureSource for Squares {
///     fn section_count(&self) -> usize {
///         1
///     }
///     fn item_count(&self, _section: usize) -> usize {
///         3
///     }
/// }
///
/// impl SizingSource for Squares {
///     fn item_size(&self, _locator: ItemLocator) -> Option<Size> {
///         Some(Size::new(100.0, 100.0))
///     }
/// }
///
/// let style = SectionStyle::default()
///     .with_line_spacing(10.0)
///     .with_interitem_spacing(10.0);
/// let sources = Sources::new(&Squares, &Squares).with_spacing(&style);
/// let frames = compute_layout(&sources, &Viewport::from_width(250.0).unwrap());
///
/// assert_eq!(
///     frames.item_frame(ItemLocator::new(0, 2)),
///     Some(Rect::new(0.0, 110.0, 100.0, 210.0))
/// );
/// assert_eq!(frames.content_size(), Size::new(250.0, 210.0));
/// ```
#[must_use]
pub fn compute_layout(sources: &Sources<'_>, viewport: &Viewport) -> LayoutFrames {
    let mut stats = LayoutStats::default();
    let metadata = Metadata::collect(sources, &mut stats);
    let content_width = viewport.content_width();
    let section_count = metadata.sections.len();

    let mut items = Vec::with_capacity(metadata.item_sizes.len());
    let mut section_offsets = Vec::with_capacity(section_count + 1);
    let mut headers = Vec::with_capacity(section_count);
    let mut footers = Vec::with_capacity(section_count);

    let mut cursor = Cursor::default();
    let mut extent = 0.0_f64;

    for (index, section) in metadata.sections.iter().enumerate() {
        section_offsets.push(items.len());

        // Empty sections neither place supplementary views nor move the cursor.
        let Some(last) = section.last_item() else {
            headers.push(None);
            footers.push(None);
            continue;
        };

        let (header, next) = place_header(index, section, cursor, content_width, &mut stats);
        headers.push(header);
        cursor = next;

        for item in 0..=last {
            let locator = ItemLocator::new(index, item);
            let (frame, next) = place_item(
                locator,
                metadata.item_size(locator),
                section,
                cursor,
                content_width,
                &mut stats,
            );
            items.push(frame);
            cursor = next;
            extent = extent.max(cursor.bottom);
        }

        let (footer, next) = place_footer(section, cursor);
        footers.push(footer);
        cursor = next;
        extent = extent.max(cursor.bottom);
    }
    section_offsets.push(items.len());

    let decorations: Vec<Option<Decoration>> = metadata
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            let frames = &items[section_offsets[index]..section_offsets[index + 1]];
            derive_decoration(section, frames, viewport)
        })
        .collect();

    let content_size = Size::new(content_width, extent);
    debug!(
        "laid out {} items in {} sections; content size {}x{}",
        stats.items, stats.sections, content_size.width, content_size.height
    );

    LayoutFrames {
        items,
        section_offsets,
        headers,
        footers,
        decorations,
        content_size,
        stats,
    }
}

/// Controller that owns a [`Viewport`] and the frames of the latest pass.
///
/// Call [`InsetLayout::prepare`] whenever the data or viewport changes; it
/// recomputes everything and swaps the stored [`LayoutFrames`] in one step, so
/// queries see either the previous pass or the new one, never a mix.
///
/// The controller does not hold on to the [`Sources`]: the host passes them to
/// each `prepare` call and keeps ownership.
#[derive(Clone, Debug, Default)]
pub struct InsetLayout {
    viewport: Viewport,
    frames: LayoutFrames,
    dirty: bool,
}

impl InsetLayout {
    /// Create a controller for `viewport` with no frames yet.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frames: LayoutFrames::default(),
            dirty: true,
        }
    }

    /// The viewport used by the next pass.
    #[must_use]
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Change the viewport. Frames stay as they are until the next pass.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.dirty = true;
        }
    }

    /// Mark the stored frames as stale, for example after the data changed.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the stored frames predate the latest viewport change or invalidation.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Run a full pass against `sources` and replace the stored frames.
    pub fn prepare(&mut self, sources: &Sources<'_>) -> &LayoutFrames {
        self.frames = compute_layout(sources, &self.viewport);
        self.dirty = false;
        &self.frames
    }

    /// Drop all frames, leaving an empty layout.
    pub fn reset(&mut self) {
        self.frames = LayoutFrames::default();
        self.dirty = true;
    }

    /// Frames of the latest pass.
    #[must_use]
    pub const fn frames(&self) -> &LayoutFrames {
        &self.frames
    }

    /// Take the frames of the latest pass, leaving an empty layout behind.
    pub fn take_frames(&mut self) -> LayoutFrames {
        self.dirty = true;
        core::mem::take(&mut self.frames)
    }

    /// See [`LayoutFrames::item_frame`].
    #[must_use]
    pub fn item_frame(&self, locator: ItemLocator) -> Option<Rect> {
        self.frames.item_frame(locator)
    }

    /// See [`LayoutFrames::header_frame`].
    #[must_use]
    pub fn header_frame(&self, section: usize) -> Option<Rect> {
        self.frames.header_frame(section)
    }

    /// See [`LayoutFrames::footer_frame`].
    #[must_use]
    pub fn footer_frame(&self, section: usize) -> Option<Rect> {
        self.frames.footer_frame(section)
    }

    /// See [`LayoutFrames::decoration_frame`].
    #[must_use]
    pub fn decoration_frame(&self, section: usize) -> Option<Rect> {
        self.frames.decoration_frame(section)
    }

    /// See [`LayoutFrames::elements_in_rect`].
    #[must_use]
    pub fn elements_in_rect(&self, rect: Rect) -> Vec<LayoutElement> {
        self.frames.elements_in_rect(rect)
    }

    /// See [`LayoutFrames::content_size`].
    #[must_use]
    pub const fn content_size(&self) -> Size {
        self.frames.content_size()
    }

    /// See [`LayoutFrames::stats`].
    #[must_use]
    pub const fn stats(&self) -> &LayoutStats {
        self.frames.stats()
    }
}
