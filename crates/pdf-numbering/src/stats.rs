use crate::layout::compute_grid;
use crate::options::NumberingOptions;
use crate::sequence::entries_on_page;
use crate::types::*;

/// Summary of a planned run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberingStatistics {
    pub total_numbers: usize,
    pub items_per_row: usize,
    pub items_per_column: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    /// Items printed on the final page (depends on the numbering order)
    pub filled_slots_last_page: usize,
    pub item_width_mm: f32,
    pub item_height_mm: f32,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub grid_width_mm: f32,
    pub grid_height_mm: f32,
    /// Share of a full page covered by items (0.0 - 1.0, above 1.0 on overflow)
    pub used_area_ratio: f32,
}

/// Calculate statistics for a run without composing or emitting anything
pub fn calculate_statistics(
    options: &NumberingOptions,
    image_width_px: u32,
    image_height_px: u32,
) -> Result<NumberingStatistics> {
    options.validate()?;

    let layout = &options.page_layout;
    let item = options.item_sizing.resolve(image_width_px, image_height_px)?;
    let total_numbers = options.range.total();
    let grid = compute_grid(layout, item, layout.spacing_mm, total_numbers);
    let (page_width_mm, page_height_mm) = layout.effective_dimensions();

    let filled_slots_last_page = match grid.total_pages {
        0 => 0,
        pages => entries_on_page(&options.range, &grid, layout.group_for_cutting, pages - 1),
    };

    let page_area = page_width_mm * page_height_mm;
    let items_area = grid.total_items_per_page as f32 * item.width_mm * item.height_mm;

    Ok(NumberingStatistics {
        total_numbers,
        items_per_row: grid.items_per_row,
        items_per_column: grid.items_per_column,
        items_per_page: grid.total_items_per_page,
        total_pages: grid.total_pages,
        filled_slots_last_page,
        item_width_mm: item.width_mm,
        item_height_mm: item.height_mm,
        page_width_mm,
        page_height_mm,
        grid_width_mm: grid.grid_width_mm(layout.spacing_mm),
        grid_height_mm: grid.grid_height_mm(layout.spacing_mm),
        used_area_ratio: items_area / page_area,
    })
}
