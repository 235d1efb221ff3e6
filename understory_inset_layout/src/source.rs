// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits the host implements to feed a layout pass.
//!
//! The layout only ever borrows these for the duration of one pass; the host
//! keeps ownership and decides their lifetime.

use core::fmt;

use kurbo::{Insets, Size};

use crate::types::{DecorationBounds, DecorationKind, ItemLocator, SectionStyle};

/// Reports how many sections and items exist.
pub trait StructureSource {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`.
    fn item_count(&self, section: usize) -> usize;
}

/// Reports item, header and footer sizes.
pub trait SizingSource {
    /// Size of one item, or `None` when the host cannot answer.
    ///
    /// A `None` is laid out as a zero-sized item.
    fn item_size(&self, locator: ItemLocator) -> Option<Size>;

    /// Header size of `section`. [`Size::ZERO`] means the section has no header.
    fn header_size(&self, _section: usize) -> Size {
        Size::ZERO
    }

    /// Footer size of `section`. [`Size::ZERO`] means the section has no footer.
    fn footer_size(&self, _section: usize) -> Size {
        Size::ZERO
    }
}

/// Reports per-section spacing. Every value defaults to zero.
pub trait SpacingSource {
    /// Section inset.
    fn inset(&self, _section: usize) -> Insets {
        Insets::ZERO
    }

    /// Vertical gap between rows.
    fn line_spacing(&self, _section: usize) -> f64 {
        0.0
    }

    /// Horizontal gap between items on a row.
    fn interitem_spacing(&self, _section: usize) -> f64 {
        0.0
    }

    /// Gap between the header and the first row.
    fn header_spacing(&self, _section: usize) -> f64 {
        0.0
    }

    /// Gap between the last row and the footer.
    fn footer_spacing(&self, _section: usize) -> f64 {
        0.0
    }

    /// All spacing values of `section` at once.
    fn section_style(&self, section: usize) -> SectionStyle {
        SectionStyle {
            inset: self.inset(section),
            line_spacing: self.line_spacing(section),
            interitem_spacing: self.interitem_spacing(section),
            header_spacing: self.header_spacing(section),
            footer_spacing: self.footer_spacing(section),
        }
    }
}

/// A single style shared by every section.
impl SpacingSource for SectionStyle {
    fn inset(&self, _section: usize) -> Insets {
        self.inset
    }

    fn line_spacing(&self, _section: usize) -> f64 {
        self.line_spacing
    }

    fn interitem_spacing(&self, _section: usize) -> f64 {
        self.interitem_spacing
    }

    fn header_spacing(&self, _section: usize) -> f64 {
        self.header_spacing
    }

    fn footer_spacing(&self, _section: usize) -> f64 {
        self.footer_spacing
    }

    fn section_style(&self, _section: usize) -> SectionStyle {
        *self
    }
}

/// Spacing source used when the host supplies none: everything is zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSpacing;

impl SpacingSource for NoSpacing {}

/// Optional capability describing section decorations.
pub trait DecorationSource {
    /// Decoration of `section`, or `None` for no decoration.
    fn decoration_kind(&self, _section: usize) -> Option<DecorationKind> {
        None
    }

    /// Whether the decoration grows by the section inset. Defaults to `false`.
    fn bounds_include_inset(&self, _section: usize) -> bool {
        false
    }

    /// Whether the decoration grows by the content insets. Defaults to `false`.
    fn bounds_include_content_inset(&self, _section: usize) -> bool {
        false
    }

    /// Whether the decoration covers the header. Defaults to `true`.
    fn bounds_include_header(&self, _section: usize) -> bool {
        true
    }

    /// Whether the decoration covers the footer. Defaults to `true`.
    fn bounds_include_footer(&self, _section: usize) -> bool {
        true
    }

    /// The four toggles of `section` as flags.
    fn decoration_bounds(&self, section: usize) -> DecorationBounds {
        let mut bounds = DecorationBounds::empty();
        bounds.set(DecorationBounds::INSET, self.bounds_include_inset(section));
        bounds.set(
            DecorationBounds::CONTENT_INSET,
            self.bounds_include_content_inset(section),
        );
        bounds.set(DecorationBounds::HEADER, self.bounds_include_header(section));
        bounds.set(DecorationBounds::FOOTER, self.bounds_include_footer(section));
        bounds
    }
}

/// The borrowed capabilities for one layout pass.
///
/// Structure and sizing are required to construct a [`Sources`], so a host
/// that forgets them fails to compile rather than producing an empty layout.
///
/// ```rust
/// use kurbo::Size;
/// use understory_inset_layout::{
///     ItemLocator, SectionStyle, SizingSource, Sources, StructureSource,
/// };
///
/// struct Tags(Vec<f64>);
///
/// impl StructureSource for Tags {
///     fn section_count(&self) -> usize {
///         1
///     }
///     fn item_count(&self, _section: usize) -> usize {
///         self.0.len()
///     }
/// }
///
/// impl SizingSource for Tags {
///     fn item_size(&self, locator: ItemLocator) -> Option<Size> {
///         self.0.get(locator.item).map(|w| Size::new(*w, 24.0))
///     }
/// }
///
/// let tags = Tags(vec![40.0, 64.0]);
/// let style = SectionStyle::default().with_interitem_spacing(4.0);
/// let sources = Sources::new(&tags, &tags).with_spacing(&style);
/// # let _ = sources;
/// ```
#[derive(Copy, Clone)]
pub struct Sources<'a> {
    pub(crate) structure: &'a dyn StructureSource,
    pub(crate) sizing: &'a dyn SizingSource,
    pub(crate) spacing: &'a dyn SpacingSource,
    pub(crate) decoration: Option<&'a dyn DecorationSource>,
}

impl fmt::Debug for Sources<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sources")
            .field("section_count", &self.structure.section_count())
            .field("decorated", &self.decoration.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> Sources<'a> {
    /// Sources with zero spacing and no decorations.
    pub fn new(structure: &'a dyn StructureSource, sizing: &'a dyn SizingSource) -> Self {
        Self {
            structure,
            sizing,
            spacing: &NoSpacing,
            decoration: None,
        }
    }

    /// Sources where one host object answers structure, sizing and spacing.
    pub fn from_delegate<D>(delegate: &'a D) -> Self
    where
        D: StructureSource + SizingSource + SpacingSource,
    {
        Self::new(delegate, delegate).with_spacing(delegate)
    }

    /// Use `spacing` for per-section spacing.
    #[must_use]
    pub fn with_spacing(mut self, spacing: &'a dyn SpacingSource) -> Self {
        self.spacing = spacing;
        self
    }

    /// Use `decoration` to describe section decorations.
    #[must_use]
    pub fn with_decoration(mut self, decoration: &'a dyn DecorationSource) -> Self {
        self.decoration = Some(decoration);
        self
    }
}
