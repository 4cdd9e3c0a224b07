//! Image loading and document saving

use crate::constants::EMBEDDED_JPEG_QUALITY;
use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use lopdf::Document;
use std::path::Path;

/// Decoded source image, ready to embed
///
/// The pixels are kept as a baseline RGB JPEG so the emitter can store them
/// once with `DCTDecode` and reference them from every item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAsset {
    pub width_px: u32,
    pub height_px: u32,
    pub jpeg: Vec<u8>,
}

impl ImageAsset {
    /// Width over height
    pub fn aspect_ratio(&self) -> f32 {
        if self.height_px == 0 {
            return 0.0;
        }
        self.width_px as f32 / self.height_px as f32
    }
}

/// Decode an encoded image (PNG, JPEG, GIF or WebP).
///
/// Transparent pixels are flattened onto white.
pub fn decode_image(bytes: &[u8]) -> Result<ImageAsset> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| NumberingError::AssetLoad(e.to_string()))?;

    let (width_px, height_px) = (decoded.width(), decoded.height());
    if width_px == 0 || height_px == 0 {
        return Err(NumberingError::AssetLoad(format!(
            "Image has no area ({}x{} px)",
            width_px, height_px
        )));
    }

    let rgb = if decoded.color().has_alpha() {
        flatten_on_white(&decoded)
    } else {
        decoded.to_rgb8()
    };

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, EMBEDDED_JPEG_QUALITY);
    DynamicImage::ImageRgb8(rgb)
        .write_with_encoder(encoder)
        .map_err(|e| NumberingError::AssetLoad(e.to_string()))?;

    log::debug!(
        "Decoded {}x{} px image, {} bytes as JPEG",
        width_px,
        height_px,
        jpeg.len()
    );

    Ok(ImageAsset {
        width_px,
        height_px,
        jpeg,
    })
}

fn flatten_on_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let alpha = a as u16;
        let blend = |c: u8| ((c as u16 * alpha + 255 * (255 - alpha)) / 255) as u8;
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Load and decode an image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<ImageAsset> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| NumberingError::AssetLoad(format!("{}: {}", path.display(), e)))?;
    tokio::task::spawn_blocking(move || decode_image(&bytes)).await?
}

/// Save a generated document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, NumberingError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
