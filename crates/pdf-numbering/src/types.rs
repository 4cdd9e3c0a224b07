use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumberingError {
    #[error("Invalid range: end ({end}) is lower than start ({start})")]
    InvalidRange { start: i64, end: i64 },
    #[error("Image load error: {0}")]
    AssetLoad(String),
    #[error("PDF emission error: {0}")]
    Emission(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to emit")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, NumberingError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: page template used as-is
    #[default]
    Portrait,
    /// Landscape: width and height swapped
    Landscape,
}

/// Named physical page template.
///
/// A page named [`PageSize::CUSTOM_NAME`] carries no usable dimensions of its
/// own; the layout takes them from [`PageLayoutConfig`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSize {
    pub name: String,
    pub width_mm: f32,
    pub height_mm: f32,
}

impl PageSize {
    pub const CUSTOM_NAME: &'static str = "custom";

    pub fn new(name: impl Into<String>, width_mm: f32, height_mm: f32) -> Self {
        Self {
            name: name.into(),
            width_mm,
            height_mm,
        }
    }

    pub fn a3() -> Self {
        Self::new("A3", 297.0, 420.0)
    }

    pub fn a4() -> Self {
        Self::new("A4", 210.0, 297.0)
    }

    pub fn a5() -> Self {
        Self::new("A5", 148.0, 210.0)
    }

    pub fn letter() -> Self {
        Self::new("Letter", 215.9, 279.4)
    }

    pub fn legal() -> Self {
        Self::new("Legal", 215.9, 355.6)
    }

    pub fn tabloid() -> Self {
        Self::new("Tabloid", 279.4, 431.8)
    }

    /// The "custom" sentinel
    pub fn custom() -> Self {
        Self::new(Self::CUSTOM_NAME, 0.0, 0.0)
    }

    /// Look up a preset (or the custom sentinel) by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case(Self::CUSTOM_NAME) {
            return Some(Self::custom());
        }
        Self::presets()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// True when this is one of [`PageSize::presets`] unchanged
    pub fn is_preset(&self) -> bool {
        Self::presets().contains(self)
    }

    pub fn is_custom(&self) -> bool {
        self.name.eq_ignore_ascii_case(Self::CUSTOM_NAME)
    }

    /// All named presets, in the order they are offered to users
    pub fn presets() -> Vec<PageSize> {
        vec![
            Self::a4(),
            Self::a3(),
            Self::a5(),
            Self::letter(),
            Self::legal(),
            Self::tabloid(),
        ]
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::a4()
    }
}

/// Page-level layout settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageLayoutConfig {
    pub page_size: PageSize,
    pub custom_width_mm: Option<f32>,
    pub custom_height_mm: Option<f32>,
    /// Gap between neighbouring items, both axes
    pub spacing_mm: f32,
    pub orientation: Orientation,
    pub crop_marks: bool,
    /// Number items so that stacking cut pages yields ascending runs
    pub group_for_cutting: bool,
}

impl Default for PageLayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::a4(),
            custom_width_mm: None,
            custom_height_mm: None,
            spacing_mm: 0.0,
            orientation: Orientation::Portrait,
            crop_marks: false,
            group_for_cutting: true,
        }
    }
}

impl PageLayoutConfig {
    /// Page dimensions after custom-size resolution and orientation.
    pub fn effective_dimensions(&self) -> (f32, f32) {
        let (w, h) = if self.page_size.is_custom() {
            let (default_w, default_h) = {
                let a4 = PageSize::a4();
                (a4.width_mm, a4.height_mm)
            };
            (
                self.custom_width_mm.unwrap_or(default_w),
                self.custom_height_mm.unwrap_or(default_h),
            )
        } else {
            (self.page_size.width_mm, self.page_size.height_mm)
        };

        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let (w, h) = self.effective_dimensions();
        if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
            return Err(NumberingError::Config(format!(
                "Page dimensions must be positive, got {}x{} mm",
                w, h
            )));
        }
        if !self.spacing_mm.is_finite() || self.spacing_mm < 0.0 {
            return Err(NumberingError::Config(format!(
                "Spacing must not be negative, got {} mm",
                self.spacing_mm
            )));
        }
        Ok(())
    }
}

/// Inclusive range of numbers to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberRange {
    pub start: i64,
    pub end: i64,
}

impl Default for NumberRange {
    fn default() -> Self {
        Self { start: 1, end: 100 }
    }
}

impl NumberRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Count of numbers in the range; zero when `end < start`.
    pub fn total(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end.abs_diff(self.start).saturating_add(1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(NumberingError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Point in the source image's pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where the number is stamped on each item.
///
/// `secondary` is the optional stub (counterfoil) copy of the same number.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualPosition {
    pub primary: Position,
    pub secondary: Option<Position>,
}

impl DualPosition {
    pub fn single(primary: Position) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn with_stub(primary: Position, secondary: Position) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    /// Single label at the center of a `width_px` x `height_px` image
    pub fn centered(width_px: u32, height_px: u32) -> Self {
        Self::single(Position::new(width_px as f32 / 2.0, height_px as f32 / 2.0))
    }

    /// Primary first, then the stub if any
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

/// RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Parse `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Channels scaled to 0.0..=1.0 for PDF color operators
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// Label text appearance
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextStyle {
    pub font_size_pt: f32,
    pub font_family: String,
    pub bold: bool,
    pub italic: bool,
    pub color_hex: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size_pt: 24.0,
            font_family: "Arial".to_string(),
            bold: true,
            italic: false,
            color_hex: "#000000".to_string(),
        }
    }
}

impl TextStyle {
    /// Text color, black when `color_hex` does not parse.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(&self.color_hex).unwrap_or_else(|| {
            log::warn!("Unrecognized color {:?}, using black", self.color_hex);
            Rgb::BLACK
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.font_size_pt.is_finite() || self.font_size_pt <= 0.0 {
            return Err(NumberingError::Config(format!(
                "Font size must be positive, got {}",
                self.font_size_pt
            )));
        }
        Ok(())
    }
}

/// How numbers are rendered as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NumberFormat {
    /// Minimum digit count, left-padded with zeros (0 disables padding)
    pub zero_padding: usize,
}

impl NumberFormat {
    pub fn format(&self, number: i64) -> String {
        if self.zero_padding == 0 {
            return number.to_string();
        }
        if number < 0 {
            format!("-{:0width$}", number.unsigned_abs(), width = self.zero_padding)
        } else {
            format!("{:0width$}", number, width = self.zero_padding)
        }
    }
}

/// Physical footprint of one printed item
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemPhysicalSize {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl ItemPhysicalSize {
    pub fn new(width_mm: f32, height_mm: f32) -> Self {
        Self {
            width_mm,
            height_mm,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.width_mm.is_finite()
            && self.height_mm.is_finite()
            && self.width_mm > 0.0
            && self.height_mm > 0.0
    }
}

/// How the item footprint is derived from the source image
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemSizing {
    /// Pixel dimensions at the given resolution
    Auto { dpi: f32 },
    /// Explicit footprint, aspect ratio not enforced
    Manual { width_mm: f32, height_mm: f32 },
    /// Explicit width, height follows the image aspect ratio
    FixedWidth { width_mm: f32 },
    /// Explicit height, width follows the image aspect ratio
    FixedHeight { height_mm: f32 },
}

impl Default for ItemSizing {
    fn default() -> Self {
        ItemSizing::Auto {
            dpi: crate::units::DEFAULT_DPI,
        }
    }
}

impl ItemSizing {
    /// Resolve the footprint for an image of the given pixel dimensions.
    pub fn resolve(&self, width_px: u32, height_px: u32) -> Result<ItemPhysicalSize> {
        if width_px == 0 || height_px == 0 {
            return Err(NumberingError::Config(format!(
                "Image has no area ({}x{} px)",
                width_px, height_px
            )));
        }
        let aspect = width_px as f32 / height_px as f32;

        let size = match *self {
            ItemSizing::Auto { dpi } => {
                if !dpi.is_finite() || dpi <= 0.0 {
                    return Err(NumberingError::Config(format!(
                        "DPI must be positive, got {}",
                        dpi
                    )));
                }
                ItemPhysicalSize::new(
                    crate::units::pixels_to_mm(width_px as f32, dpi),
                    crate::units::pixels_to_mm(height_px as f32, dpi),
                )
            }
            ItemSizing::Manual {
                width_mm,
                height_mm,
            } => ItemPhysicalSize::new(width_mm, height_mm),
            ItemSizing::FixedWidth { width_mm } => {
                ItemPhysicalSize::new(width_mm, width_mm / aspect)
            }
            ItemSizing::FixedHeight { height_mm } => {
                ItemPhysicalSize::new(height_mm * aspect, height_mm)
            }
        };

        if !size.is_valid() {
            return Err(NumberingError::Config(format!(
                "Item size must be positive, got {}x{} mm",
                size.width_mm, size.height_mm
            )));
        }
        Ok(size)
    }
}
