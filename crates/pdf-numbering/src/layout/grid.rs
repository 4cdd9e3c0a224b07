//! Grid optimization
//!
//! Finds the rows × columns arrangement that puts the most items on a page
//! without the grid (items plus internal spacing) exceeding the page.

use crate::constants::MAX_GRID_DIMENSION;
use crate::types::{ItemPhysicalSize, PageLayoutConfig};

use super::{GridDescriptor, footprint};

// =============================================================================
// Grid Optimization
// =============================================================================

/// Compute the densest grid for an item on a page.
///
/// Candidates are enumerated rows-first, both axes ascending from 1 to
/// [`MAX_GRID_DIMENSION`], and a candidate replaces the current best only when
/// it holds strictly more items. Among equally dense grids the one with fewer
/// rows therefore wins.
///
/// When not even a single item fits, the result is a 1×1 grid that overflows
/// the page; this never fails. `item` must have positive dimensions.
///
/// # Arguments
/// * `page_layout` - Page template, custom size and orientation
/// * `item` - Physical item footprint
/// * `spacing_mm` - Gap between neighbouring items
/// * `total_numbers` - How many items the run prints (0 gives 0 pages)
pub fn compute_grid(
    page_layout: &PageLayoutConfig,
    item: ItemPhysicalSize,
    spacing_mm: f32,
    total_numbers: usize,
) -> GridDescriptor {
    let (page_width, page_height) = page_layout.effective_dimensions();

    let mut best: Option<(usize, usize)> = None;
    let mut max_items = 0;

    for rows in 1..=MAX_GRID_DIMENSION {
        for cols in 1..=MAX_GRID_DIMENSION {
            let width_needed = footprint(cols, item.width_mm, spacing_mm);
            let height_needed = footprint(rows, item.height_mm, spacing_mm);

            if width_needed > page_width || height_needed > page_height {
                continue;
            }

            let items = rows * cols;
            if items > max_items {
                max_items = items;
                best = Some((rows, cols));
            }
        }
    }

    let (rows, cols) = best.unwrap_or_else(|| {
        log::warn!(
            "Item {}x{} mm does not fit on a {}x{} mm page, using one item per page",
            item.width_mm,
            item.height_mm,
            page_width,
            page_height
        );
        (1, 1)
    });

    let per_page = rows * cols;
    let grid = GridDescriptor {
        items_per_row: cols,
        items_per_column: rows,
        total_items_per_page: per_page,
        actual_item_width_mm: item.width_mm,
        actual_item_height_mm: item.height_mm,
        total_pages: pages_needed(total_numbers, per_page),
    };

    log::debug!(
        "Grid {}x{} ({} per page) on {}x{} mm, {} pages",
        grid.items_per_column,
        grid.items_per_row,
        grid.total_items_per_page,
        page_width,
        page_height,
        grid.total_pages
    );

    grid
}

/// `ceil(total / per_page)`, zero when there is nothing to print
pub fn pages_needed(total: usize, per_page: usize) -> usize {
    if total == 0 || per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Orientation, PageSize};

    fn a4_portrait() -> PageLayoutConfig {
        PageLayoutConfig::default()
    }

    /// Reference search that returns every accepted candidate
    fn accepted(
        page: (f32, f32),
        item: ItemPhysicalSize,
        spacing: f32,
    ) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for rows in 1..=MAX_GRID_DIMENSION {
            for cols in 1..=MAX_GRID_DIMENSION {
                if footprint(cols, item.width_mm, spacing) <= page.0
                    && footprint(rows, item.height_mm, spacing) <= page.1
                {
                    out.push((rows, cols));
                }
            }
        }
        out
    }

    #[test]
    fn test_square_item_on_a4() {
        let grid = compute_grid(&a4_portrait(), ItemPhysicalSize::new(70.0, 70.0), 0.0, 100);

        assert_eq!(grid.items_per_row, 3);
        assert_eq!(grid.items_per_column, 4);
        assert_eq!(grid.total_items_per_page, 12);
        assert_eq!(grid.total_pages, 9);
        assert_eq!(grid.actual_item_width_mm, 70.0);
        assert_eq!(grid.actual_item_height_mm, 70.0);

        // Nothing denser fits
        let best = accepted((210.0, 297.0), ItemPhysicalSize::new(70.0, 70.0), 0.0)
            .into_iter()
            .map(|(r, c)| r * c)
            .max()
            .unwrap();
        assert_eq!(best, 12);
    }

    #[test]
    fn test_oversized_item_falls_back_to_single() {
        let grid = compute_grid(&a4_portrait(), ItemPhysicalSize::new(300.0, 300.0), 5.0, 17);

        assert_eq!(grid.items_per_row, 1);
        assert_eq!(grid.items_per_column, 1);
        assert_eq!(grid.total_items_per_page, 1);
        assert_eq!(grid.total_pages, 17);
        assert!(!grid.fits_within(210.0, 297.0, 5.0));
    }

    #[test]
    fn test_zero_total_gives_zero_pages() {
        let grid = compute_grid(&a4_portrait(), ItemPhysicalSize::new(50.0, 30.0), 2.0, 0);
        assert_eq!(grid.total_pages, 0);
        assert!(grid.total_items_per_page > 0);
    }

    #[test]
    fn test_spacing_reduces_capacity() {
        // 3 x 70 = 210 fits exactly, 3 x 70 + 2 x 1 does not
        let grid = compute_grid(&a4_portrait(), ItemPhysicalSize::new(70.0, 70.0), 1.0, 10);
        assert_eq!(grid.items_per_row, 2);
        assert_eq!(grid.items_per_column, 4);
        assert!(grid.fits_within(210.0, 297.0, 1.0));
    }

    #[test]
    fn test_landscape_swaps_page() {
        let mut layout = a4_portrait();
        layout.orientation = Orientation::Landscape;

        let grid = compute_grid(&layout, ItemPhysicalSize::new(70.0, 70.0), 0.0, 12);
        assert_eq!(grid.items_per_row, 4);
        assert_eq!(grid.items_per_column, 3);
        assert_eq!(grid.total_pages, 1);
    }

    #[test]
    fn test_custom_page_size() {
        let layout = PageLayoutConfig {
            page_size: PageSize::custom(),
            custom_width_mm: Some(100.0),
            custom_height_mm: Some(50.0),
            ..Default::default()
        };

        let grid = compute_grid(&layout, ItemPhysicalSize::new(20.0, 20.0), 0.0, 30);
        assert_eq!(grid.items_per_row, 5);
        assert_eq!(grid.items_per_column, 2);
        assert_eq!(grid.total_pages, 3);
    }

    #[test]
    fn test_search_is_bounded() {
        // 1mm items would fit hundreds of times, the search stops at 10 x 10
        let grid = compute_grid(&a4_portrait(), ItemPhysicalSize::new(1.0, 1.0), 0.0, 1000);
        assert_eq!(grid.items_per_row, MAX_GRID_DIMENSION);
        assert_eq!(grid.items_per_column, MAX_GRID_DIMENSION);
        assert_eq!(grid.total_pages, 10);
    }

    #[test]
    fn test_selected_grid_is_maximal_and_fits() {
        let items = [
            (70.0, 70.0, 0.0),
            (63.5, 88.9, 3.0),
            (45.0, 20.0, 2.5),
            (100.0, 50.0, 10.0),
            (12.3, 45.6, 0.5),
            (211.0, 10.0, 0.0),
        ];
        for (w, h, s) in items {
            let item = ItemPhysicalSize::new(w, h);
            let grid = compute_grid(&a4_portrait(), item, s, 250);
            let candidates = accepted((210.0, 297.0), item, s);

            if candidates.is_empty() {
                assert_eq!(grid.total_items_per_page, 1);
                continue;
            }

            let max = candidates.iter().map(|(r, c)| r * c).max().unwrap();
            assert_eq!(grid.total_items_per_page, max, "item {}x{} s={}", w, h, s);
            assert_eq!(
                grid.total_items_per_page,
                grid.items_per_row * grid.items_per_column
            );
            assert!(grid.fits_within(210.0, 297.0, s));

            // First maximal candidate in enumeration order
            let first = candidates.iter().find(|(r, c)| r * c == max).unwrap();
            assert_eq!((grid.items_per_column, grid.items_per_row), *first);
        }
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let item = ItemPhysicalSize::new(70.0, 70.0);
        for total in 1..100 {
            let grid = compute_grid(&a4_portrait(), item, 0.0, total);
            assert_eq!(grid.total_pages, (total + 11) / 12);
        }
    }

    #[test]
    fn test_idempotent() {
        let item = ItemPhysicalSize::new(33.3, 44.4);
        let a = compute_grid(&a4_portrait(), item, 1.5, 77);
        let b = compute_grid(&a4_portrait(), item, 1.5, 77);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pages_needed() {
        assert_eq!(pages_needed(0, 12), 0);
        assert_eq!(pages_needed(1, 12), 1);
        assert_eq!(pages_needed(12, 12), 1);
        assert_eq!(pages_needed(13, 12), 2);
        assert_eq!(pages_needed(5, 0), 0);
    }
}
