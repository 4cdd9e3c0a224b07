//! Font family mapping and text metrics
//!
//! Labels are drawn with the standard Type1 fonts every PDF reader ships, so
//! user-facing family names are mapped onto Helvetica, Times or Courier.

use crate::constants::FALLBACK_CHAR_WIDTH_RATIO;

/// Standard PDF base fonts used for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

/// Typeface family behind a [`StandardFont`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Helvetica,
    Times,
    Courier,
}

impl StandardFont {
    /// PostScript name used in the font dictionary's `BaseFont`
    pub fn base_font_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::TimesRoman => "Times-Roman",
            StandardFont::TimesBold => "Times-Bold",
            StandardFont::TimesItalic => "Times-Italic",
            StandardFont::TimesBoldItalic => "Times-BoldItalic",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    pub fn family(self) -> FontFamily {
        match self {
            StandardFont::Helvetica
            | StandardFont::HelveticaBold
            | StandardFont::HelveticaOblique
            | StandardFont::HelveticaBoldOblique => FontFamily::Helvetica,
            StandardFont::TimesRoman
            | StandardFont::TimesBold
            | StandardFont::TimesItalic
            | StandardFont::TimesBoldItalic => FontFamily::Times,
            StandardFont::Courier
            | StandardFont::CourierBold
            | StandardFont::CourierOblique
            | StandardFont::CourierBoldOblique => FontFamily::Courier,
        }
    }

    /// Advance width in 1/1000 em from the font's AFM, for the characters
    /// labels are made of.
    fn advance(self, ch: char) -> Option<u16> {
        let family = self.family();
        match ch {
            '0'..='9' => Some(match family {
                FontFamily::Helvetica => 556,
                FontFamily::Times => 500,
                FontFamily::Courier => 600,
            }),
            '-' => Some(match family {
                FontFamily::Helvetica | FontFamily::Times => 333,
                FontFamily::Courier => 600,
            }),
            ' ' => Some(match family {
                FontFamily::Helvetica => 278,
                FontFamily::Times => 250,
                FontFamily::Courier => 600,
            }),
            _ => None,
        }
    }
}

/// Map a family name and style flags onto a standard font.
///
/// Unknown families fall back to Helvetica.
pub fn resolve_font(family: &str, bold: bool, italic: bool) -> StandardFont {
    let family = match family.trim().to_ascii_lowercase().as_str() {
        "times new roman" | "times" | "georgia" => FontFamily::Times,
        "courier new" | "courier" => FontFamily::Courier,
        // Arial, Helvetica, Verdana, Impact, Comic Sans MS and anything unknown
        _ => FontFamily::Helvetica,
    };

    match (family, bold, italic) {
        (FontFamily::Helvetica, false, false) => StandardFont::Helvetica,
        (FontFamily::Helvetica, true, false) => StandardFont::HelveticaBold,
        (FontFamily::Helvetica, false, true) => StandardFont::HelveticaOblique,
        (FontFamily::Helvetica, true, true) => StandardFont::HelveticaBoldOblique,
        (FontFamily::Times, false, false) => StandardFont::TimesRoman,
        (FontFamily::Times, true, false) => StandardFont::TimesBold,
        (FontFamily::Times, false, true) => StandardFont::TimesItalic,
        (FontFamily::Times, true, true) => StandardFont::TimesBoldItalic,
        (FontFamily::Courier, false, false) => StandardFont::Courier,
        (FontFamily::Courier, true, false) => StandardFont::CourierBold,
        (FontFamily::Courier, false, true) => StandardFont::CourierOblique,
        (FontFamily::Courier, true, true) => StandardFont::CourierBoldOblique,
    }
}

/// Rendered width of `text` in points
pub fn text_width_pt(font: StandardFont, text: &str, size_pt: f32) -> f32 {
    text.chars()
        .map(|ch| {
            font.advance(ch)
                .map(|units| units as f32 / 1000.0)
                .unwrap_or(FALLBACK_CHAR_WIDTH_RATIO)
        })
        .sum::<f32>()
        * size_pt
}
