// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_inset_layout --heading-base-level=0

//! Understory Inset Layout: a sectioned, wrapping flow layout.
//!
//! This crate computes where the items of a sectioned collection go. Items flow
//! left to right and wrap onto new rows, top to bottom. Each section carries
//! its own insets and spacing, may have a header and a footer, and may ask for
//! a decoration: a background region drawn behind its items.
//!
//! It is a pure geometry solver. It does not know about views, recycling,
//! rendering or events. Host frameworks are responsible for:
//!
//! - Describing the data through the capability traits: [`StructureSource`]
//!   (section and item counts), [`SizingSource`] (item, header and footer
//!   sizes), [`SpacingSource`] (insets and spacing) and, optionally,
//!   [`DecorationSource`].
//! - Running a pass with [`compute_layout`] or [`InsetLayout::prepare`]
//!   whenever the data or the [`Viewport`] changes.
//! - Realizing the [`LayoutElement`]s returned by
//!   [`LayoutFrames::elements_in_rect`] for the visible region.
//!
//! ## The layout pass
//!
//! Every pass recomputes everything from scratch, in four steps:
//!
//! 1. Metadata collection reads each source exactly once.
//! 2. Row-flow placement walks the items section by section. An item continues
//!    the current row when it fits within the content width, otherwise it
//!    wraps below the lowest point of the row. The first item of a section
//!    always starts a new row at the section's left inset.
//! 3. Headers are placed before a section's first item and footers after its
//!    last item. Sections after the first are pushed down by their top inset,
//!    and every section ends with its bottom inset (or its footer).
//! 4. Decorations are derived from each section's first and last item frames,
//!    grown according to [`DecorationBounds`].
//!
//! A pass never fails. Missing sizes become zero, items wider than the content
//! width overflow instead of being clipped, and each such event is logged via
//! [`log`] and counted in [`LayoutStats`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Size};
//! use understory_inset_layout::{
//!     InsetLayout, ItemLocator, SizingSource, Sources, SpacingSource, StructureSource,
//!     Viewport,
//! };
//!
//! struct Gallery;
//!
//! impl StructureSource for Gallery {
//!     fn section_count(&self) -> usize {
//!         2
//!     }
//!     fn item_count(&self, section: usize) -> usize {
//!         if section == 0 { 3 } else { 6 }
//!     }
//! }
//!
//! impl SizingSource for Gallery {
//!     fn item_size(&self, _locator: ItemLocator) -> Option<Size> {
//!         Some(Size::new(100.0, 100.0))
//!     }
//!     fn header_size(&self, _section: usize) -> Size {
//!         Size::new(320.0, 24.0)
//!     }
//! }
//!
//! impl SpacingSource for Gallery {
//!     fn inset(&self, _section: usize) -> Insets {
//!         Insets::new(5.0, 10.0, 5.0, 10.0)
//!     }
//!     fn interitem_spacing(&self, _section: usize) -> f64 {
//!         5.0
//!     }
//! }
//!
//! let mut layout = InsetLayout::new(Viewport::from_width(320.0).unwrap());
//! layout.prepare(&Sources::from_delegate(&Gallery));
//!
//! // Three 100-wide items plus spacing fit on one 320-wide row.
//! let third = layout.item_frame(ItemLocator::new(0, 2)).unwrap();
//! assert_eq!(third.x0, 215.0);
//! assert_eq!(third.y0, 24.0);
//!
//! // The second section starts on a new row, below the first section's
//! // bottom inset, its own top inset and its header.
//! let first = layout.item_frame(ItemLocator::new(1, 0)).unwrap();
//! assert_eq!(first.y0, 124.0 + 10.0 + 10.0 + 24.0);
//! ```
//!
//! All coordinates are logical pixels in the content coordinate space: the
//! origin is the top-left corner inside the viewport's content insets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod decoration;
mod flow;
mod frames;
mod layout;
mod metadata;
mod source;
mod supplementary;
#[cfg(test)]
mod testing;
mod types;
mod viewport;

pub use frames::LayoutFrames;
pub use layout::{InsetLayout, compute_layout};
pub use source::{
    DecorationSource, NoSpacing, SizingSource, Sources, SpacingSource, StructureSource,
};
pub use types::{
    DECORATION_Z_INDEX, Decoration, DecorationBounds, DecorationKind, ElementKind, ITEM_Z_INDEX,
    ItemLocator, LayoutElement, LayoutStats, SectionStyle,
};
pub use viewport::{Viewport, ViewportError};
