//! Output page construction

use crate::compose::{DrawOp, PageDrawOps};
use crate::fonts::StandardFont;
use crate::types::*;
use crate::units::mm_to_pt;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::BTreeMap;

/// Resource name of the embedded item image
pub(crate) const IMAGE_RESOURCE: &str = "Im0";

/// Type1 font objects shared by every page of a document
#[derive(Debug, Default)]
pub(crate) struct FontRegistry {
    fonts: BTreeMap<&'static str, (String, ObjectId)>,
}

impl FontRegistry {
    /// Resource name for `font`, adding its dictionary on first use
    pub(crate) fn resource_name(&mut self, output: &mut Document, font: StandardFont) -> String {
        let base = font.base_font_name();
        if let Some((name, _)) = self.fonts.get(base) {
            return name.clone();
        }

        let mut font_dict = Dictionary::new();
        font_dict.set("Type", Object::Name(b"Font".to_vec()));
        font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
        font_dict.set("BaseFont", Object::Name(base.as_bytes().to_vec()));
        font_dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
        let font_id = output.add_object(font_dict);

        let name = format!("F{}", self.fonts.len() + 1);
        self.fonts.insert(base, (name.clone(), font_id));
        name
    }

    fn lookup(&self, font: StandardFont) -> Option<&str> {
        self.fonts
            .get(font.base_font_name())
            .map(|(name, _)| name.as_str())
    }

    /// `Font` resource dictionary restricted to the names in `used`
    fn resources(&self, used: &[String]) -> Dictionary {
        let mut dict = Dictionary::new();
        for (name, id) in self.fonts.values() {
            if used.contains(name) {
                dict.set(name.as_bytes().to_vec(), Object::Reference(*id));
            }
        }
        dict
    }
}

/// Add one output page to `output` and return its object id.
///
/// # Arguments
/// * `page` - Draw operations in millimetres, origin at the top-left
/// * `parent_pages_id` - Pages tree node the page belongs to
/// * `image_id` - Image XObject drawn by every `DrawOp::Image`
/// * `fonts` - Shared font dictionaries
pub(crate) fn render_page(
    output: &mut Document,
    page: &PageDrawOps,
    parent_pages_id: ObjectId,
    image_id: ObjectId,
    fonts: &mut FontRegistry,
) -> Result<ObjectId> {
    let page_width_pt = mm_to_pt(page.width_mm);
    let page_height_pt = mm_to_pt(page.height_mm);

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width_pt),
            Object::Real(page_height_pt),
        ]),
    );

    let mut used_fonts = Vec::new();
    for op in &page.ops {
        if let DrawOp::Text { font, .. } = op {
            let name = fonts.resource_name(output, *font);
            if !used_fonts.contains(&name) {
                used_fonts.push(name);
            }
        }
    }

    let content = page_content(page, fonts)?;

    let mut resources = Dictionary::new();
    if page.image_count() > 0 {
        let mut xobjects = Dictionary::new();
        xobjects.set(IMAGE_RESOURCE, Object::Reference(image_id));
        resources.set("XObject", Object::Dictionary(xobjects));
    }
    if !used_fonts.is_empty() {
        resources.set("Font", Object::Dictionary(fonts.resources(&used_fonts)));
    }

    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

// =============================================================================
// Content Stream
// =============================================================================

/// Build the content stream for one page.
///
/// Images come first, then labels, then crop marks, so text is never hidden
/// behind an item. Fonts must already be registered.
pub(crate) fn page_content(page: &PageDrawOps, fonts: &FontRegistry) -> Result<String> {
    let mut images = String::new();
    let mut labels = String::new();
    let mut marks = String::new();

    for op in &page.ops {
        match op {
            DrawOp::Image {
                x,
                y,
                width,
                height,
            } => {
                let bottom = page.height_mm - y - height;
                images.push_str(&format!(
                    "q {} 0 0 {} {} {} cm /{} Do Q\n",
                    mm_to_pt(*width),
                    mm_to_pt(*height),
                    mm_to_pt(*x),
                    mm_to_pt(bottom),
                    IMAGE_RESOURCE
                ));
            }
            DrawOp::Text {
                text,
                x,
                baseline_y,
                font,
                size_pt,
                color,
            } => {
                let name = fonts.lookup(*font).ok_or_else(|| {
                    NumberingError::Emission(format!(
                        "Font {} was not registered",
                        font.base_font_name()
                    ))
                })?;
                let (r, g, b) = color.to_unit();
                labels.push_str(&format!(
                    "BT {} {} {} rg /{} {} Tf {} {} Td ({}) Tj ET\n",
                    r,
                    g,
                    b,
                    name,
                    size_pt,
                    mm_to_pt(*x),
                    mm_to_pt(page.height_mm - baseline_y),
                    escape_text(text)
                ));
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width,
            } => {
                if marks.is_empty() {
                    marks.push_str(&format!("0 0 0 RG {} w\n", mm_to_pt(*width)));
                }
                marks.push_str(&format!(
                    "{} {} m {} {} l S\n",
                    mm_to_pt(*x1),
                    mm_to_pt(page.height_mm - y1),
                    mm_to_pt(*x2),
                    mm_to_pt(page.height_mm - y2)
                ));
            }
        }
    }

    let mut content = images;
    content.push_str(&labels);
    if !marks.is_empty() {
        content.push_str("q\n");
        content.push_str(&marks);
        content.push_str("Q\n");
    }
    Ok(content)
}

/// Escape a string for a PDF literal
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
