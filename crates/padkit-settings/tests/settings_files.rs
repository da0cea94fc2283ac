use padkit_core::{LinearUnit, MaterialKind};
use padkit_settings::{EngravingMode, HoleOption, PadSettings, SettingsError};
use tempfile::tempdir;

#[test]
fn test_json_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut settings = PadSettings::new();
    settings.sizing.felt_offset = 1.0;
    settings.sizing.darts.shape_factor = 0.5;
    settings.hole = HoleOption::Custom(4.0);
    settings.save_to_file(&path).unwrap();

    let loaded = PadSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_toml_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let mut settings = PadSettings::new();
    settings.sheet.unit = LinearUnit::Centimeters;
    settings.engraving.dart_enabled = false;
    settings.save_to_file(&path).unwrap();

    let loaded = PadSettings::load_from_file(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn test_handwritten_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shop.toml");
    std::fs::write(
        &path,
        r#"
hole = "3.0mm"

[sizing]
felt_offset = 0.5
felt_thickness = 0.125
felt_thickness_unit = "in"

[sizing.darts]
threshold = 20.0

[engraving.location]
felt = { mode = "centered", value = 0.0 }
card = { mode = "centered", value = 0.0 }
leather = { mode = "from_inside", value = 1.5 }
exact_size = { mode = "centered", value = 0.0 }

[sheet]
width = 300
height = 200
unit = "mm"
"#,
    )
    .unwrap();

    let settings = PadSettings::load_from_file(&path).unwrap();
    assert_eq!(settings.hole, HoleOption::Standard3_0);
    assert_eq!(settings.sizing.felt_offset, 0.5);
    assert!((settings.sizing.felt_thickness_mm() - 3.175).abs() < 1e-9);
    assert_eq!(settings.sizing.darts.threshold, 20.0);
    assert!(settings.sizing.darts.enabled);
    assert_eq!(
        settings.engraving.location.get(MaterialKind::Leather).mode,
        EngravingMode::FromInside
    );
    assert_eq!(settings.sheet.width_mm(), 300.0);
}

#[test]
fn test_invalid_values_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "sizing": { "darts": { "frequency_multiplier": 0 } } }"#).unwrap();

    let err = PadSettings::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "sizing: {}").unwrap();

    let err = PadSettings::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(ref ext) if ext == "yaml"));
}

#[test]
fn test_missing_file() {
    let err = PadSettings::load_from_file(std::path::Path::new("/nonexistent/padkit.json"))
        .unwrap_err();
    assert!(matches!(err, SettingsError::IoError(_)));
}
