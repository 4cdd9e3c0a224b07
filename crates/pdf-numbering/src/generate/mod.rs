//! Numbered document generation
//!
//! This module orchestrates a generation run:
//! 1. Validate the options (range first)
//! 2. Resolve the item footprint from the image
//! 3. Compute the grid and the numbering order
//! 4. Compose pages and emit the PDF

mod io;

pub use io::{ImageAsset, decode_image, load_image, save_pdf};

use crate::compose::compose_pages;
use crate::layout::{GridDescriptor, compute_grid};
use crate::options::NumberingOptions;
use crate::render::{emit_document, output_file_name};
use crate::sequence::{NumberingSequence, generate_sequence};
use crate::types::*;
use lopdf::Document;
use std::path::{Path, PathBuf};

/// Everything decided before any page is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationPlan {
    pub item_size: ItemPhysicalSize,
    pub grid: GridDescriptor,
    pub sequence: NumberingSequence,
}

/// A finished, unsaved document
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub document: Document,
    /// Suggested download name, see [`output_file_name`]
    pub file_name: String,
    pub grid: GridDescriptor,
    pub page_count: usize,
}

/// Where a document was written
#[derive(Debug, Clone, PartialEq)]
pub struct SavedDocument {
    pub path: PathBuf,
    pub grid: GridDescriptor,
    pub page_count: usize,
}

/// Plan a run: validate, size the item, lay out the grid and order numbers.
pub fn plan(options: &NumberingOptions, image: &ImageAsset) -> Result<GenerationPlan> {
    options.validate()?;

    let item_size = options
        .item_sizing
        .resolve(image.width_px, image.height_px)?;
    let layout = &options.page_layout;
    let grid = compute_grid(layout, item_size, layout.spacing_mm, options.range.total());
    let sequence = generate_sequence(&options.range, &grid, layout.group_for_cutting);

    Ok(GenerationPlan {
        item_size,
        grid,
        sequence,
    })
}

/// Generate the numbered document for `image`.
///
/// Composition and emission run on a blocking task.
pub async fn generate(options: &NumberingOptions, image: &ImageAsset) -> Result<GeneratedDocument> {
    options.validate()?;

    let options = options.clone();
    let image = image.clone();

    tokio::task::spawn_blocking(move || generate_sync(&options, &image)).await?
}

fn generate_sync(options: &NumberingOptions, image: &ImageAsset) -> Result<GeneratedDocument> {
    let GenerationPlan {
        item_size,
        grid,
        sequence,
    } = plan(options, image)?;

    log::info!(
        "Numbering {} to {}: {} items of {:.1}x{:.1} mm, {}x{} per page, {} pages",
        options.range.start,
        options.range.end,
        sequence.len(),
        item_size.width_mm,
        item_size.height_mm,
        grid.items_per_column,
        grid.items_per_row,
        grid.total_pages
    );

    let pages = compose_pages(
        image,
        &sequence,
        &grid,
        &options.page_layout,
        &options.text_style,
        &options.label_position(image.width_px, image.height_px),
        &options.number_format,
    );
    if pages.is_empty() {
        return Err(NumberingError::NoPages);
    }

    let document = emit_document(&pages, image)?;
    let file_name = output_file_name(
        &options.range,
        grid.total_items_per_page,
        chrono::Local::now().naive_local(),
    );

    Ok(GeneratedDocument {
        document,
        file_name,
        grid,
        page_count: pages.len(),
    })
}

/// Load `image_path`, generate, and save under `dir` with the generated name.
pub async fn generate_to_dir(
    options: &NumberingOptions,
    image_path: impl AsRef<Path>,
    dir: impl AsRef<Path>,
) -> Result<SavedDocument> {
    options.validate()?;
    let image = load_image(image_path).await?;
    let generated = generate(options, &image).await?;
    let path = dir.as_ref().join(&generated.file_name);
    save(generated, path).await
}

/// Load `image_path`, generate, and save to exactly `path`.
pub async fn generate_to_path(
    options: &NumberingOptions,
    image_path: impl AsRef<Path>,
    path: impl AsRef<Path>,
) -> Result<SavedDocument> {
    options.validate()?;
    let image = load_image(image_path).await?;
    let generated = generate(options, &image).await?;
    save(generated, path.as_ref().to_owned()).await
}

async fn save(generated: GeneratedDocument, path: PathBuf) -> Result<SavedDocument> {
    let GeneratedDocument {
        document,
        grid,
        page_count,
        ..
    } = generated;
    save_pdf(document, &path).await?;
    Ok(SavedDocument {
        path,
        grid,
        page_count,
    })
}
