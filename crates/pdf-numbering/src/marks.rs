//! Crop marks around an item grid
//!
//! Marks sit outside the grid's bounding box: a pair at every outer corner,
//! and for multi-cell grids a pair at every internal column or row boundary,
//! drawn only along the outer edges so nothing overlaps printed content.
//!
//! Coordinates are millimetres with the origin at the top-left of the page.

use crate::constants::{CROP_MARK_LENGTH_MM, CROP_MARK_OFFSET_MM};
use crate::layout::footprint;

/// Which cut a mark indicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropMarkKind {
    /// Outer corner of the grid
    Corner,
    /// Cut between two columns (vertical mark)
    ColumnBoundary,
    /// Cut between two rows (horizontal mark)
    RowBoundary,
}

/// A single straight mark segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropMark {
    pub kind: CropMarkKind,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CropMark {
    fn new(kind: CropMarkKind, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            kind,
            x1,
            y1,
            x2,
            y2,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    pub fn is_horizontal(&self) -> bool {
        self.y1 == self.y2
    }
}

/// Geometry of the grid the marks surround
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarksConfig {
    /// Left edge of the grid
    pub origin_x: f32,
    /// Top edge of the grid
    pub origin_y: f32,
    pub item_width: f32,
    pub item_height: f32,
    pub spacing: f32,
    pub rows: usize,
    pub cols: usize,
}

impl MarksConfig {
    pub fn grid_width(&self) -> f32 {
        footprint(self.cols, self.item_width, self.spacing)
    }

    pub fn grid_height(&self) -> f32 {
        footprint(self.rows, self.item_height, self.spacing)
    }
}

/// Generate all crop marks for a grid
pub fn crop_marks(config: &MarksConfig) -> Vec<CropMark> {
    let mut marks = corner_marks(config);
    marks.extend(column_boundary_marks(config));
    marks.extend(row_boundary_marks(config));
    marks
}

/// Horizontal and vertical mark at each of the four grid corners
fn corner_marks(config: &MarksConfig) -> Vec<CropMark> {
    use CropMarkKind::Corner;

    let left = config.origin_x;
    let top = config.origin_y;
    let right = left + config.grid_width();
    let bottom = top + config.grid_height();

    let left_edge = left - CROP_MARK_OFFSET_MM;
    let right_edge = right + CROP_MARK_OFFSET_MM;
    let top_edge = top - CROP_MARK_OFFSET_MM;
    let bottom_edge = bottom + CROP_MARK_OFFSET_MM;

    vec![
        // Top-left
        CropMark::new(Corner, left_edge - CROP_MARK_LENGTH_MM, top, left_edge, top),
        CropMark::new(Corner, left, top_edge - CROP_MARK_LENGTH_MM, left, top_edge),
        // Top-right
        CropMark::new(Corner, right_edge, top, right_edge + CROP_MARK_LENGTH_MM, top),
        CropMark::new(Corner, right, top_edge - CROP_MARK_LENGTH_MM, right, top_edge),
        // Bottom-left
        CropMark::new(Corner, left_edge - CROP_MARK_LENGTH_MM, bottom, left_edge, bottom),
        CropMark::new(Corner, left, bottom_edge, left, bottom_edge + CROP_MARK_LENGTH_MM),
        // Bottom-right
        CropMark::new(Corner, right_edge, bottom, right_edge + CROP_MARK_LENGTH_MM, bottom),
        CropMark::new(Corner, right, bottom_edge, right, bottom_edge + CROP_MARK_LENGTH_MM),
    ]
}

/// Vertical marks above and below the grid, centered in each column gutter
fn column_boundary_marks(config: &MarksConfig) -> Vec<CropMark> {
    let top_edge = config.origin_y - CROP_MARK_OFFSET_MM;
    let bottom_edge = config.origin_y + config.grid_height() + CROP_MARK_OFFSET_MM;

    (1..config.cols)
        .flat_map(|col| {
            let x = boundary(config.origin_x, col, config.item_width, config.spacing);
            [
                CropMark::new(
                    CropMarkKind::ColumnBoundary,
                    x,
                    top_edge - CROP_MARK_LENGTH_MM,
                    x,
                    top_edge,
                ),
                CropMark::new(
                    CropMarkKind::ColumnBoundary,
                    x,
                    bottom_edge,
                    x,
                    bottom_edge + CROP_MARK_LENGTH_MM,
                ),
            ]
        })
        .collect()
}

/// Horizontal marks left and right of the grid, centered in each row gutter
fn row_boundary_marks(config: &MarksConfig) -> Vec<CropMark> {
    let left_edge = config.origin_x - CROP_MARK_OFFSET_MM;
    let right_edge = config.origin_x + config.grid_width() + CROP_MARK_OFFSET_MM;

    (1..config.rows)
        .flat_map(|row| {
            let y = boundary(config.origin_y, row, config.item_height, config.spacing);
            [
                CropMark::new(
                    CropMarkKind::RowBoundary,
                    left_edge - CROP_MARK_LENGTH_MM,
                    y,
                    left_edge,
                    y,
                ),
                CropMark::new(
                    CropMarkKind::RowBoundary,
                    right_edge,
                    y,
                    right_edge + CROP_MARK_LENGTH_MM,
                    y,
                ),
            ]
        })
        .collect()
}

/// Middle of the gutter before cell `index`
fn boundary(origin: f32, index: usize, item: f32, spacing: f32) -> f32 {
    origin + index as f32 * item + (index - 1) as f32 * spacing + spacing / 2.0
}
