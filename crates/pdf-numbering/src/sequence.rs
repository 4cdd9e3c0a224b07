//! Numbering order for grid slots
//!
//! Two orders are supported:
//!
//! - **Natural**: numbers fill page 1 slot by slot, then page 2, and so on.
//! - **Cut-grouped**: each grid slot receives a consecutive run of numbers,
//!   one per page. After cutting the stacked pages apart, every pile of
//!   identically-positioned items is already in ascending order.
//!
//! ```text
//! 25 numbers, 12 slots per page, 3 pages (cut-grouped):
//!
//!   slot:    0   1   2   3  ...  7   8
//!   page 1:  1   4   7  10  ... 22  25
//!   page 2:  2   5   8  11  ... 23   -
//!   page 3:  3   6   9  12  ... 24   -
//! ```

use crate::layout::GridDescriptor;
use crate::types::NumberRange;

/// One number placed at a (page, slot) position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceEntry {
    /// Zero-based page index
    pub page: usize,
    /// Row-major slot index within the page grid
    pub slot: usize,
    pub number: i64,
}

/// Ordered numbers for one generation run
///
/// Entries are page-major and slot-ascending within a page, which is the order
/// the composer stamps them in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberingSequence {
    entries: Vec<SequenceEntry>,
}

impl NumberingSequence {
    pub fn entries(&self) -> &[SequenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Numbers in emission order
    pub fn numbers(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.number).collect()
    }

    /// Entries that land on `page`
    pub fn page_entries(&self, page: usize) -> impl Iterator<Item = &SequenceEntry> + '_ {
        self.entries.iter().filter(move |e| e.page == page)
    }
}

/// Slots × pages table used for cut-grouped numbering
///
/// Filled slot-major, read page-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutTable {
    /// `slots[slot][page]`; inner vectors are shorter when the range runs out
    slots: Vec<Vec<i64>>,
    pages: usize,
}

impl CutTable {
    /// Distribute the range over `slots_per_page` slots and `pages` pages.
    pub fn fill(range: &NumberRange, slots_per_page: usize, pages: usize) -> Self {
        let mut slots = vec![Vec::new(); slots_per_page];
        let mut numbers = (range.start..=range.end).take(range.total());

        'fill: for slot in slots.iter_mut() {
            for _ in 0..pages {
                match numbers.next() {
                    Some(n) => slot.push(n),
                    None => break 'fill,
                }
            }
        }

        Self { slots, pages }
    }

    /// Values assigned to one slot, in page order
    pub fn slot_values(&self, slot: usize) -> &[i64] {
        self.slots.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn value(&self, slot: usize, page: usize) -> Option<i64> {
        self.slots.get(slot)?.get(page).copied()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Read the table back page by page
    pub fn to_sequence(&self) -> NumberingSequence {
        let mut entries = Vec::new();
        for page in 0..self.pages {
            for slot in 0..self.slots.len() {
                if let Some(number) = self.value(slot, page) {
                    entries.push(SequenceEntry { page, slot, number });
                }
            }
        }
        NumberingSequence { entries }
    }
}

/// Generate the numbering order for a run.
///
/// An inverted range yields an empty sequence. Both orders emit every number
/// of the range exactly once.
pub fn generate_sequence(
    range: &NumberRange,
    grid: &GridDescriptor,
    group_for_cutting: bool,
) -> NumberingSequence {
    let total = range.total();
    let per_page = grid.total_items_per_page;

    if total == 0 || per_page == 0 {
        return NumberingSequence::default();
    }

    if !group_for_cutting {
        let entries = (range.start..=range.end)
            .enumerate()
            .map(|(i, number)| SequenceEntry {
                page: i / per_page,
                slot: i % per_page,
                number,
            })
            .collect();
        return NumberingSequence { entries };
    }

    let pages = sequence_pages(total, grid);
    let table = CutTable::fill(range, per_page, pages);

    log::debug!(
        "Cut-grouped {} numbers into {} slots over {} pages",
        total,
        per_page,
        pages
    );

    table.to_sequence()
}

/// Pages a sequence of `total` numbers occupies on `grid`.
///
/// A grid built for a different total may report too few pages.
pub fn sequence_pages(total: usize, grid: &GridDescriptor) -> usize {
    match grid.total_items_per_page {
        0 => 0,
        per_page => grid.total_pages.max(total.div_ceil(per_page)),
    }
}

/// Number of entries [`generate_sequence`] places on `page`, without
/// building the sequence.
pub fn entries_on_page(
    range: &NumberRange,
    grid: &GridDescriptor,
    group_for_cutting: bool,
    page: usize,
) -> usize {
    let total = range.total();
    let per_page = grid.total_items_per_page;
    if total == 0 || per_page == 0 {
        return 0;
    }

    if !group_for_cutting {
        return total
            .saturating_sub(page.saturating_mul(per_page))
            .min(per_page);
    }

    // Slot s holds pages 0..min(pages, total - s*pages), so page p is filled
    // in every slot with s*pages < total - p
    let pages = sequence_pages(total, grid);
    if page >= pages || page >= total {
        return 0;
    }
    (total - page).div_ceil(pages).min(per_page)
}
