// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sectioned grid: three decorated sections of square tiles.
//!
//! This example shows how to:
//! - describe sections, sizes and spacing with one host object,
//! - attach a decoration to every section,
//! - run a pass with `InsetLayout` and print the resulting frames,
//! - cull the layout to a scrolled viewport with `elements_in_rect`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example sectioned_grid`

use kurbo::{Insets, Rect, Size};
use understory_inset_layout::{
    DecorationKind, DecorationSource, ElementKind, InsetLayout, ItemLocator, SizingSource,
    Sources, SpacingSource, StructureSource, Viewport,
};

const SCREEN_WIDTH: f64 = 390.0;
const SCREEN_HEIGHT: f64 = 844.0;

/// Tiles per section, and the horizontal room each section gives up before
/// splitting the rest into three columns.
const SECTIONS: [(usize, f64); 3] = [(3, 32.0), (6, 0.0), (9, 88.0)];

struct Tiles;

impl StructureSource for Tiles {
    fn section_count(&self) -> usize {
        SECTIONS.len()
    }

    fn item_count(&self, section: usize) -> usize {
        SECTIONS.get(section).map_or(0, |s| s.0)
    }
}

impl SizingSource for Tiles {
    fn item_size(&self, locator: ItemLocator) -> Option<Size> {
        let (_, reserved) = SECTIONS.get(locator.section)?;
        // Two gaps of 10 between three columns.
        let side = (SCREEN_WIDTH - reserved - 20.0) / 3.0;
        Some(Size::new(side.floor(), side.floor()))
    }

    fn header_size(&self, section: usize) -> Size {
        if section == 0 {
            Size::ZERO
        } else {
            Size::new(SCREEN_WIDTH, 28.0)
        }
    }
}

impl SpacingSource for Tiles {
    fn inset(&self, section: usize) -> Insets {
        match section {
            0 => Insets::new(16.0, 10.0, 16.0, 10.0),
            1 => Insets::new(0.0, 30.0, 0.0, 10.0),
            _ => Insets::new(44.0, 30.0, 44.0, 10.0),
        }
    }

    fn line_spacing(&self, _section: usize) -> f64 {
        10.0
    }

    fn interitem_spacing(&self, _section: usize) -> f64 {
        10.0
    }

    fn header_spacing(&self, _section: usize) -> f64 {
        6.0
    }
}

impl DecorationSource for Tiles {
    fn decoration_kind(&self, section: usize) -> Option<DecorationKind> {
        u32::try_from(section).ok().map(DecorationKind)
    }

    fn bounds_include_inset(&self, section: usize) -> bool {
        section == 2
    }
}

fn main() {
    env_logger::init();

    let viewport = match Viewport::from_width(SCREEN_WIDTH) {
        Ok(viewport) => viewport,
        Err(err) => {
            log::error!("invalid viewport: {err}");
            return;
        }
    };

    let tiles = Tiles;
    let sources = Sources::from_delegate(&tiles).with_decoration(&tiles);
    let mut layout = InsetLayout::new(viewport);
    let frames = layout.prepare(&sources);

    println!("content size: {:?}", frames.content_size());
    for section in 0..frames.section_count() {
        println!("section {section}");
        if let Some(header) = frames.header_frame(section) {
            println!("  header     {}", fmt_rect(header));
        }
        for item in 0..frames.item_count(section) {
            if let Some(frame) = frames.item_frame(ItemLocator::new(section, item)) {
                println!("  item {item:<5} {}", fmt_rect(frame));
            }
        }
        if let Some(decoration) = frames.decoration(section) {
            println!(
                "  decoration {} (kind {}, z {})",
                fmt_rect(decoration.frame),
                decoration.kind.0,
                decoration.z_index
            );
        }
    }
    println!("stats: {:?}", frames.stats());

    // Scroll down by a screen's third and realize only what is visible.
    let visible = Rect::new(0.0, 300.0, SCREEN_WIDTH, 300.0 + SCREEN_HEIGHT / 2.0);
    let elements = layout.elements_in_rect(visible);
    println!("visible in {}:", fmt_rect(visible));
    for element in &elements {
        let label = match element.kind {
            ElementKind::Item(locator) => format!("item {locator}"),
            ElementKind::Header(section) => format!("header {section}"),
            ElementKind::Footer(section) => format!("footer {section}"),
            ElementKind::Decoration { section, .. } => format!("decoration {section}"),
        };
        println!("  {label:<16} {}", fmt_rect(element.frame));
    }
}

fn fmt_rect(rect: Rect) -> String {
    format!(
        "x {:>6.1} y {:>6.1} w {:>6.1} h {:>6.1}",
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    )
}
