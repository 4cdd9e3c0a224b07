use pdf_numbering::*;

#[test]
fn test_page_size_presets() {
    let a4 = PageSize::a4();
    assert_eq!((a4.width_mm, a4.height_mm), (210.0, 297.0));

    let tabloid = PageSize::tabloid();
    assert_eq!((tabloid.width_mm, tabloid.height_mm), (279.4, 431.8));

    assert_eq!(PageSize::presets().len(), 6);
    assert_eq!(PageSize::from_name("a5"), Some(PageSize::a5()));
    assert_eq!(PageSize::from_name("LEGAL"), Some(PageSize::legal()));
    assert!(PageSize::from_name("Custom").unwrap().is_custom());
    assert_eq!(PageSize::from_name("B5"), None);
}

#[test]
fn test_effective_dimensions() {
    let mut layout = PageLayoutConfig::default();
    assert_eq!(layout.effective_dimensions(), (210.0, 297.0));

    layout.orientation = Orientation::Landscape;
    assert_eq!(layout.effective_dimensions(), (297.0, 210.0));

    layout.orientation = Orientation::Portrait;
    layout.page_size = PageSize::custom();
    layout.custom_width_mm = Some(120.0);
    assert_eq!(layout.effective_dimensions(), (120.0, 297.0));

    layout.custom_width_mm = None;
    layout.custom_height_mm = Some(80.0);
    assert_eq!(layout.effective_dimensions(), (210.0, 80.0));
}

#[test]
fn test_layout_validation() {
    let mut layout = PageLayoutConfig::default();
    assert!(layout.validate().is_ok());

    layout.spacing_mm = -1.0;
    assert!(matches!(layout.validate(), Err(NumberingError::Config(_))));

    layout.spacing_mm = 0.0;
    layout.page_size = PageSize::custom();
    layout.custom_width_mm = Some(0.0);
    assert!(matches!(layout.validate(), Err(NumberingError::Config(_))));
}

#[test]
fn test_number_range() {
    assert_eq!(NumberRange::new(1, 100).total(), 100);
    assert_eq!(NumberRange::new(5, 5).total(), 1);
    assert_eq!(NumberRange::new(-3, 3).total(), 7);
    assert_eq!(NumberRange::new(10, 1).total(), 0);
    assert!(NumberRange::new(10, 1).is_empty());

    match NumberRange::new(10, 1).validate() {
        Err(NumberingError::InvalidRange { start, end }) => {
            assert_eq!((start, end), (10, 1));
        }
        _ => panic!("Expected InvalidRange error"),
    }
}

#[test]
fn test_color_parsing() {
    assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb { r: 255, g: 128, b: 0 }));
    assert_eq!(Rgb::from_hex("00FF00"), Some(Rgb { r: 0, g: 255, b: 0 }));
    assert_eq!(Rgb::from_hex("#fff"), None);
    assert_eq!(Rgb::from_hex("#gg0000"), None);

    let style = TextStyle {
        color_hex: "not a color".to_string(),
        ..Default::default()
    };
    assert_eq!(style.rgb(), Rgb::BLACK);
}

#[test]
fn test_text_style_validation() {
    assert!(TextStyle::default().validate().is_ok());
    let style = TextStyle {
        font_size_pt: f32::NAN,
        ..Default::default()
    };
    assert!(style.validate().is_err());
}

#[test]
fn test_number_format() {
    let plain = NumberFormat::default();
    assert_eq!(plain.format(42), "42");

    let padded = NumberFormat { zero_padding: 5 };
    assert_eq!(padded.format(42), "00042");
    assert_eq!(padded.format(123456), "123456");
    assert_eq!(padded.format(-7), "-00007");
}

#[test]
fn test_item_sizing() {
    let auto = ItemSizing::default().resolve(700, 350).unwrap();
    assert!((auto.width_mm - 70.0).abs() < 1e-3);
    assert!((auto.height_mm - 35.0).abs() < 1e-3);

    let fixed_width = ItemSizing::FixedWidth { width_mm: 100.0 }
        .resolve(400, 200)
        .unwrap();
    assert!((fixed_width.height_mm - 50.0).abs() < 1e-3);

    let fixed_height = ItemSizing::FixedHeight { height_mm: 30.0 }
        .resolve(300, 100)
        .unwrap();
    assert!((fixed_height.width_mm - 90.0).abs() < 1e-3);

    let manual = ItemSizing::Manual {
        width_mm: 55.0,
        height_mm: 85.0,
    }
    .resolve(1, 1)
    .unwrap();
    assert_eq!(manual, ItemPhysicalSize::new(55.0, 85.0));
}

#[test]
fn test_item_sizing_errors() {
    assert!(ItemSizing::default().resolve(0, 100).is_err());
    assert!(ItemSizing::Auto { dpi: -10.0 }.resolve(100, 100).is_err());
    assert!(
        ItemSizing::Manual {
            width_mm: 0.0,
            height_mm: 10.0
        }
        .resolve(100, 100)
        .is_err()
    );
}

#[test]
fn test_dual_position() {
    let single = DualPosition::single(Position::new(1.0, 2.0));
    assert_eq!(single.positions().count(), 1);

    let stub = DualPosition::with_stub(Position::new(1.0, 2.0), Position::new(3.0, 4.0));
    let all: Vec<Position> = stub.positions().collect();
    assert_eq!(all, vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)]);
}
