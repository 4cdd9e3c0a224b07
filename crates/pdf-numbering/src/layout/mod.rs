//! Layout calculation for numbered item pages
//!
//! This module handles the geometric side of the job:
//! - Grid optimization (how many items fit on a page)
//! - Grid geometry (centered origin, per-cell position)

mod grid;
mod types;

pub use grid::*;
pub use types::*;
