use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete configuration for one numbering run
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberingOptions {
    // Numbers
    pub range: NumberRange,
    pub number_format: NumberFormat,

    // Page
    pub page_layout: PageLayoutConfig,

    // Item footprint
    pub item_sizing: ItemSizing,

    // Labels
    pub text_style: TextStyle,
    /// Label positions in image pixels; `None` centers a single label
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dual_position: Option<DualPosition>,
}

impl NumberingOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| NumberingError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| NumberingError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Label positions for an image of the given size
    pub fn label_position(&self, image_width_px: u32, image_height_px: u32) -> DualPosition {
        self.dual_position
            .unwrap_or_else(|| DualPosition::centered(image_width_px, image_height_px))
    }

    /// Check everything that can be checked without the image.
    ///
    /// The range is checked first so an inverted range is reported as such
    /// even when other settings are also wrong.
    pub fn validate(&self) -> Result<()> {
        self.range.validate()?;
        self.page_layout.validate()?;
        self.text_style.validate()?;

        if let ItemSizing::Auto { dpi } = self.item_sizing {
            if !dpi.is_finite() || dpi <= 0.0 {
                return Err(NumberingError::Config(format!(
                    "DPI must be positive, got {}",
                    dpi
                )));
            }
        }

        for pos in self.dual_position.iter().flat_map(DualPosition::positions) {
            if !pos.x.is_finite() || !pos.y.is_finite() {
                return Err(NumberingError::Config(
                    "Label positions must be finite".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Presets and the custom sentinel travel as their name, anything else as a map
    impl Serialize for PageSize {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            use serde::ser::SerializeStruct;
            if self.is_preset() || self.is_custom() {
                return serializer.serialize_str(&self.name);
            }
            let mut s = serializer.serialize_struct("PageSize", 3)?;
            s.serialize_field("name", &self.name)?;
            s.serialize_field("width_mm", &self.width_mm)?;
            s.serialize_field("height_mm", &self.height_mm)?;
            s.end()
        }
    }

    impl<'de> Deserialize<'de> for PageSize {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            use serde::de::{self, MapAccess, Visitor};
            use std::fmt;

            struct PageSizeVisitor;

            impl<'de> Visitor<'de> for PageSizeVisitor {
                type Value = PageSize;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    formatter.write_str("a page size name or {name, width_mm, height_mm}")
                }

                fn visit_str<E>(self, value: &str) -> std::result::Result<PageSize, E>
                where
                    E: de::Error,
                {
                    PageSize::from_name(value).ok_or_else(|| {
                        de::Error::unknown_variant(
                            value,
                            &["A4", "A3", "A5", "Letter", "Legal", "Tabloid", "custom"],
                        )
                    })
                }

                fn visit_map<M>(self, mut map: M) -> std::result::Result<PageSize, M::Error>
                where
                    M: MapAccess<'de>,
                {
                    let mut name: Option<String> = None;
                    let mut width_mm = None;
                    let mut height_mm = None;

                    while let Some(key) = map.next_key::<String>()? {
                        match key.as_str() {
                            "name" => name = Some(map.next_value()?),
                            "width_mm" => width_mm = Some(map.next_value()?),
                            "height_mm" => height_mm = Some(map.next_value()?),
                            _ => {
                                let _: serde::de::IgnoredAny = map.next_value()?;
                            }
                        }
                    }

                    match (width_mm, height_mm) {
                        (Some(w), Some(h)) => Ok(PageSize::new(
                            name.unwrap_or_else(|| "Unnamed".to_string()),
                            w,
                            h,
                        )),
                        _ => Err(de::Error::missing_field("width_mm or height_mm")),
                    }
                }
            }

            deserializer.deserialize_any(PageSizeVisitor)
        }
    }
}
