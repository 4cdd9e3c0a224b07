//! PDF emission
//!
//! This module turns composed pages into a lopdf [`Document`]:
//! - Embedding the item image once as a JPEG XObject
//! - Sharing standard font dictionaries across pages
//! - Writing one content stream per page
//!
//! Composed coordinates (millimetres, top-left origin) are converted to PDF
//! points with a bottom-left origin here and nowhere else.

mod page;

use crate::compose::PageDrawOps;
use crate::constants::OUTPUT_FILE_PREFIX;
use crate::generate::ImageAsset;
use crate::types::*;
use chrono::NaiveDateTime;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use page::{FontRegistry, render_page};

/// Timestamp layout used in generated file names
pub const FILE_TIMESTAMP_FORMAT: &str = "%d-%m-%Y-%H-%M-%S";

/// Build the output document from composed pages.
///
/// Fails with [`NumberingError::NoPages`] when `pages` is empty and with
/// [`NumberingError::Emission`] when the image has no encoded data.
pub fn emit_document(pages: &[PageDrawOps], image: &ImageAsset) -> Result<Document> {
    if pages.is_empty() {
        return Err(NumberingError::NoPages);
    }

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let image_id = add_image_xobject(&mut output, image)?;
    let mut fonts = FontRegistry::default();

    let mut page_refs = Vec::with_capacity(pages.len());
    for page in pages {
        let page_id = render_page(&mut output, page, pages_tree_id, image_id, &mut fonts)?;
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    let info_id = output.add_object(Dictionary::from_iter(vec![
        ("Title", Object::string_literal("Numbered items")),
        (
            "Producer",
            Object::string_literal(concat!("pdf-numbering ", env!("CARGO_PKG_VERSION"))),
        ),
    ]));

    output.trailer.set("Root", catalog_id);
    output.trailer.set("Info", info_id);

    log::debug!("Emitted {} pages", count);

    Ok(output)
}

/// Embed the item image as a `DCTDecode` image XObject
fn add_image_xobject(output: &mut Document, image: &ImageAsset) -> Result<ObjectId> {
    if image.jpeg.is_empty() || image.width_px == 0 || image.height_px == 0 {
        return Err(NumberingError::Emission(
            "Image has no encoded data".to_string(),
        ));
    }

    let dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(image.width_px as i64)),
        ("Height", Object::Integer(image.height_px as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
        ("Filter", Object::Name(b"DCTDecode".to_vec())),
    ]);

    // Already compressed; keep lopdf from deflating it again
    let stream = Stream::new(dict, image.jpeg.clone()).with_compression(false);
    Ok(output.add_object(stream))
}

/// File name for a generated document:
/// `numeracao-{start}-{end}-{per_page}por-pagina-{timestamp}.pdf`
pub fn output_file_name(
    range: &NumberRange,
    items_per_page: usize,
    timestamp: NaiveDateTime,
) -> String {
    format!(
        "{}-{}-{}-{}por-pagina-{}.pdf",
        OUTPUT_FILE_PREFIX,
        range.start,
        range.end,
        items_per_page,
        timestamp.format(FILE_TIMESTAMP_FORMAT)
    )
}
