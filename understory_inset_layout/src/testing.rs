// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory sources shared by the unit tests.

use alloc::vec::Vec;

use kurbo::Size;

use crate::source::{DecorationSource, SizingSource, SpacingSource, StructureSource};
use crate::types::{DecorationBounds, DecorationKind, ItemLocator, SectionStyle};

#[derive(Clone, Debug)]
pub(crate) struct SectionFixture {
    pub(crate) items: Vec<Option<Size>>,
    pub(crate) header: Size,
    pub(crate) footer: Size,
    pub(crate) style: SectionStyle,
    pub(crate) decoration: Option<DecorationKind>,
    pub(crate) bounds: DecorationBounds,
}

impl SectionFixture {
    pub(crate) fn uniform(count: usize, size: Size) -> Self {
        Self {
            items: alloc::vec![Some(size); count],
            header: Size::ZERO,
            footer: Size::ZERO,
            style: SectionStyle::default(),
            decoration: None,
            bounds: DecorationBounds::default(),
        }
    }

    pub(crate) fn with_style(mut self, style: SectionStyle) -> Self {
        self.style = style;
        self
    }

    pub(crate) fn with_header(mut self, header: Size) -> Self {
        self.header = header;
        self
    }

    pub(crate) fn with_footer(mut self, footer: Size) -> Self {
        self.footer = footer;
        self
    }

    pub(crate) fn decorated(mut self, kind: u32, bounds: DecorationBounds) -> Self {
        self.decoration = Some(DecorationKind(kind));
        self.bounds = bounds;
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Fixture {
    pub(crate) sections: Vec<SectionFixture>,
}

impl Fixture {
    pub(crate) fn new(sections: Vec<SectionFixture>) -> Self {
        Self { sections }
    }
}

impl StructureSource for Fixture {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections[section].items.len()
    }
}

impl SizingSource for Fixture {
    fn item_size(&self, locator: ItemLocator) -> Option<Size> {
        self.sections[locator.section].items[locator.item]
    }

    fn header_size(&self, section: usize) -> Size {
        self.sections[section].header
    }

    fn footer_size(&self, section: usize) -> Size {
        self.sections[section].footer
    }
}

impl SpacingSource for Fixture {
    fn section_style(&self, section: usize) -> SectionStyle {
        self.sections[section].style
    }
}

impl DecorationSource for Fixture {
    fn decoration_kind(&self, section: usize) -> Option<DecorationKind> {
        self.sections[section].decoration
    }

    fn decoration_bounds(&self, section: usize) -> DecorationBounds {
        self.sections[section].bounds
    }
}
