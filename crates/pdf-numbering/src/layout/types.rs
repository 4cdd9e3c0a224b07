//! Layout data types
//!
//! These types sit between the optimizer and the page composer.

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major position of a slot index in a grid `cols` wide
    pub fn from_slot(slot: usize, cols: usize) -> Self {
        Self {
            row: slot / cols,
            col: slot % cols,
        }
    }
}

/// Result of the layout optimizer
///
/// Describes how many items go on a page and how many pages the run needs.
/// Item dimensions are always the exact physical item size; the optimizer
/// never scales items to fill the page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDescriptor {
    /// Number of columns
    pub items_per_row: usize,
    /// Number of rows
    pub items_per_column: usize,
    /// `items_per_row * items_per_column`
    pub total_items_per_page: usize,
    pub actual_item_width_mm: f32,
    pub actual_item_height_mm: f32,
    /// `ceil(total / total_items_per_page)`, zero for an empty run
    pub total_pages: usize,
}

impl GridDescriptor {
    /// Width of the whole grid including internal spacing
    pub fn grid_width_mm(&self, spacing_mm: f32) -> f32 {
        footprint(self.items_per_row, self.actual_item_width_mm, spacing_mm)
    }

    /// Height of the whole grid including internal spacing
    pub fn grid_height_mm(&self, spacing_mm: f32) -> f32 {
        footprint(self.items_per_column, self.actual_item_height_mm, spacing_mm)
    }

    /// Top-left corner that centers the grid on a page
    pub fn centered_origin(
        &self,
        page_width_mm: f32,
        page_height_mm: f32,
        spacing_mm: f32,
    ) -> (f32, f32) {
        (
            (page_width_mm - self.grid_width_mm(spacing_mm)) / 2.0,
            (page_height_mm - self.grid_height_mm(spacing_mm)) / 2.0,
        )
    }

    /// Top-left corner of the item at `pos`, given the grid origin
    pub fn cell_origin(
        &self,
        origin: (f32, f32),
        pos: GridPosition,
        spacing_mm: f32,
    ) -> (f32, f32) {
        let (origin_x, origin_y) = origin;
        (
            origin_x + pos.col as f32 * (self.actual_item_width_mm + spacing_mm),
            origin_y + pos.row as f32 * (self.actual_item_height_mm + spacing_mm),
        )
    }

    /// Whether the grid fits within the given page (false for the overflow fallback)
    pub fn fits_within(&self, page_width_mm: f32, page_height_mm: f32, spacing_mm: f32) -> bool {
        self.grid_width_mm(spacing_mm) <= page_width_mm
            && self.grid_height_mm(spacing_mm) <= page_height_mm
    }
}

/// Length of `count` items of `item` size separated by `spacing`
pub(crate) fn footprint(count: usize, item: f32, spacing: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * item + (count - 1) as f32 * spacing
}
