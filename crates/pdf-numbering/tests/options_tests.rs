use pdf_numbering::*;

#[test]
fn test_default_options() {
    let options = NumberingOptions::default();
    assert_eq!(options.range, NumberRange::new(1, 100));
    assert_eq!(options.page_layout.page_size, PageSize::a4());
    assert!(options.page_layout.group_for_cutting);
    assert!(!options.page_layout.crop_marks);
    assert_eq!(options.text_style.font_family, "Arial");
    assert_eq!(
        options.item_sizing,
        ItemSizing::Auto {
            dpi: units::DEFAULT_DPI
        }
    );
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_errors() {
    let mut options = NumberingOptions::default();
    options.page_layout.spacing_mm = -2.0;
    match options.validate() {
        Err(NumberingError::Config(msg)) => assert!(msg.contains("Spacing")),
        _ => panic!("Expected Config error"),
    }

    let mut options = NumberingOptions::default();
    options.text_style.font_size_pt = 0.0;
    assert!(matches!(options.validate(), Err(NumberingError::Config(_))));

    let mut options = NumberingOptions::default();
    options.dual_position = Some(DualPosition::with_stub(
        Position::new(1.0, 1.0),
        Position::new(f32::INFINITY, 0.0),
    ));
    assert!(matches!(options.validate(), Err(NumberingError::Config(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_round_trip() {
    use tempfile::NamedTempFile;

    let options = NumberingOptions {
        range: NumberRange::new(-5, 500),
        number_format: NumberFormat { zero_padding: 4 },
        page_layout: PageLayoutConfig {
            page_size: PageSize::custom(),
            custom_width_mm: Some(100.0),
            custom_height_mm: Some(150.0),
            spacing_mm: 2.5,
            orientation: Orientation::Landscape,
            crop_marks: true,
            group_for_cutting: false,
        },
        item_sizing: ItemSizing::FixedWidth { width_mm: 45.0 },
        text_style: TextStyle {
            font_size_pt: 30.0,
            font_family: "Georgia".to_string(),
            bold: false,
            italic: true,
            color_hex: "#aa0033".to_string(),
        },
        dual_position: Some(DualPosition::with_stub(
            Position::new(10.0, 20.0),
            Position::new(5.0, 6.0),
        )),
    };

    let temp = NamedTempFile::new().unwrap();
    options.save(temp.path()).await.unwrap();
    let loaded = NumberingOptions::load(temp.path()).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), b"{ not json").await.unwrap();

    match NumberingOptions::load(temp.path()).await {
        Err(NumberingError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_page_size_written_by_name() {
    let json = serde_json::to_value(NumberingOptions::default()).unwrap();
    assert_eq!(json["page_layout"]["page_size"], "A4");
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_config_without_labels_centers_them() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    tokio::fs::write(temp.path(), br#"{ "range": { "start": 1, "end": 10 } }"#)
        .await
        .unwrap();

    let loaded = NumberingOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.dual_position, None);
    assert_eq!(
        loaded.label_position(700, 350),
        DualPosition::single(Position::new(350.0, 175.0))
    );

    // Defaults do not write a label position either
    let json = serde_json::to_value(NumberingOptions::default()).unwrap();
    assert!(json.get("dual_position").is_none());
}
