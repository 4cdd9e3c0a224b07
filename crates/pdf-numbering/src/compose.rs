//! Page composition
//!
//! Turns a grid, a numbering sequence and the label settings into a list of
//! draw operations per page. Nothing here touches PDF objects; the emitter in
//! [`crate::render`] consumes the result.
//!
//! Coordinates are millimetres with the origin at the top-left of the page,
//! text `y` being the baseline.

use crate::constants::{
    CROP_MARK_WIDTH_MM, MIN_LABEL_FONT_PT, REFERENCE_ITEM_SIZE_MM, SCREEN_TO_PRINT_RATIO,
};
use crate::fonts::{StandardFont, resolve_font, text_width_pt};
use crate::generate::ImageAsset;
use crate::layout::{GridDescriptor, GridPosition};
use crate::marks::{MarksConfig, crop_marks};
use crate::sequence::NumberingSequence;
use crate::types::{DualPosition, NumberFormat, PageLayoutConfig, Rgb, TextStyle};
use crate::units::pt_to_mm;

/// A single drawing instruction
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Place the source image with its top-left corner at (x, y)
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    /// Draw text with its baseline starting at (x, baseline_y)
    Text {
        text: String,
        x: f32,
        baseline_y: f32,
        font: StandardFont,
        size_pt: f32,
        color: Rgb,
    },
    /// Straight stroke from (x1, y1) to (x2, y2)
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
    },
}

/// Everything drawn on one output page
#[derive(Debug, Clone, PartialEq)]
pub struct PageDrawOps {
    pub width_mm: f32,
    pub height_mm: f32,
    pub ops: Vec<DrawOp>,
}

impl PageDrawOps {
    pub fn image_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .count()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }
}

/// Label font size for an item, scaled with the item's smaller side.
pub fn label_font_size(base_size_pt: f32, item_width_mm: f32, item_height_mm: f32) -> f32 {
    let scale = item_width_mm.min(item_height_mm) / REFERENCE_ITEM_SIZE_MM;
    (base_size_pt * scale * SCREEN_TO_PRINT_RATIO).max(MIN_LABEL_FONT_PT)
}

/// Compose every page of a run.
///
/// Each sequence entry is placed at its own slot, so slots without an entry
/// (only possible on the final pages) stay empty. The page count is the
/// grid's or, when the sequence runs past it, the sequence's last page. An
/// empty sequence or a grid without slots produces no pages.
pub fn compose_pages(
    image: &ImageAsset,
    sequence: &NumberingSequence,
    grid: &GridDescriptor,
    page_layout: &PageLayoutConfig,
    text_style: &TextStyle,
    dual_position: &DualPosition,
    number_format: &NumberFormat,
) -> Vec<PageDrawOps> {
    let Some(last) = sequence.entries().last() else {
        return Vec::new();
    };
    if grid.total_items_per_page == 0 {
        return Vec::new();
    }
    // Entries are page-major, so the last one is on the last page
    let total_pages = grid.total_pages.max(last.page + 1);

    let (page_width, page_height) = page_layout.effective_dimensions();
    let spacing = page_layout.spacing_mm;
    let item_width = grid.actual_item_width_mm;
    let item_height = grid.actual_item_height_mm;

    let origin = grid.centered_origin(page_width, page_height, spacing);
    let font = resolve_font(&text_style.font_family, text_style.bold, text_style.italic);
    let size_pt = label_font_size(text_style.font_size_pt, item_width, item_height);
    let color = text_style.rgb();

    let marks = if page_layout.crop_marks {
        crop_marks(&MarksConfig {
            origin_x: origin.0,
            origin_y: origin.1,
            item_width,
            item_height,
            spacing,
            rows: grid.items_per_column,
            cols: grid.items_per_row,
        })
    } else {
        Vec::new()
    };

    let mut pages = Vec::with_capacity(total_pages);
    let mut entries = sequence.entries().iter().peekable();

    for page in 0..total_pages {
        let mut ops = Vec::new();

        while let Some(entry) = entries.next_if(|e| e.page == page) {
            if entry.slot >= grid.total_items_per_page {
                log::warn!("Slot {} outside the grid, skipping {}", entry.slot, entry.number);
                continue;
            }

            let pos = GridPosition::from_slot(entry.slot, grid.items_per_row);
            let (x, y) = grid.cell_origin(origin, pos, spacing);
            log::debug!(
                "Page {} [{}, {}] -> {}",
                page + 1,
                pos.row,
                pos.col,
                entry.number
            );

            ops.push(DrawOp::Image {
                x,
                y,
                width: item_width,
                height: item_height,
            });

            let text = number_format.format(entry.number);
            let half_width = pt_to_mm(text_width_pt(font, &text, size_pt)) / 2.0;

            for label in dual_position.positions() {
                let label_x = x + (label.x / image.width_px as f32) * item_width;
                let label_y = y + (label.y / image.height_px as f32) * item_height;
                ops.push(DrawOp::Text {
                    text: text.clone(),
                    x: label_x - half_width,
                    baseline_y: label_y,
                    font,
                    size_pt,
                    color,
                });
            }
        }

        ops.extend(marks.iter().map(|m| DrawOp::Line {
            x1: m.x1,
            y1: m.y1,
            x2: m.x2,
            y2: m.y2,
            width: CROP_MARK_WIDTH_MM,
        }));

        pages.push(PageDrawOps {
            width_mm: page_width,
            height_mm: page_height,
            ops,
        });
    }

    pages
}
