//! End-to-end layouts through the pad layout maker

use padkit_camtools::{
    disc_diameter, LayoutSink, OutlinePath, PadLayoutMaker, RecordingSink, ShapeRecord,
};
use padkit_core::{parse_pad_list, LinearUnit, MaterialKind, PadSpec};
use padkit_settings::{PadSettings, SheetSettings, SizingConfig};

fn maker(width: f64, height: f64) -> PadLayoutMaker {
    let settings = PadSettings {
        sheet: SheetSettings {
            width,
            height,
            unit: LinearUnit::Millimeters,
        },
        ..Default::default()
    };
    PadLayoutMaker::new(settings).expect("valid settings")
}

#[test]
fn test_felt_42_near_top_left() {
    let layout = maker(100.0, 100.0)
        .generate(&[PadSpec::new(42.0, 1).unwrap()], MaterialKind::Felt)
        .unwrap();

    assert!(layout.fits());
    let placed = layout.discs[0].placed;
    assert_eq!(placed.disc.diameter, 41.25);
    assert!((placed.center.x - 21.625).abs() < 1e-9);
    assert!((placed.center.y - 21.625).abs() < 1e-9);
}

#[test]
fn test_leather_15_with_darts_is_star() {
    let layout = maker(100.0, 100.0)
        .generate(&[PadSpec::new(15.0, 1).unwrap()], MaterialKind::Leather)
        .unwrap();

    let disc = &layout.discs[0];
    assert!(disc.placed.disc.is_dart);
    let OutlinePath::Star(star) = &disc.outline else {
        panic!("expected a star outline");
    };
    assert!(star.num_points >= 12);
    assert_eq!(star.num_points % 2, 0);
    assert!(star.inner_radius < star.outer_radius);
    // 15 mm is below the 16.5 mm hole threshold
    assert!(disc.hole.is_none());
}

#[test]
fn test_two_50mm_discs_on_60_by_30() {
    let maker = maker(60.0, 30.0);
    let pads = [PadSpec::new(50.0, 2).unwrap()];

    let report = maker.check_fit(&pads, MaterialKind::ExactSize).unwrap();
    assert!(!report.fits());
    assert_eq!(report.overflow.len(), 2);

    let layout = maker.generate(&pads, MaterialKind::ExactSize).unwrap();
    assert_eq!(layout.overflow.len(), 2);
}

#[test]
fn test_check_fit_agrees_with_generate() {
    let maker = maker(180.0, 120.0);
    let pads = parse_pad_list("42x4\n35.5x6\n22x10\n12x12\n");
    for material in MaterialKind::ALL {
        let report = maker.check_fit(&pads, material).unwrap();
        let layout = maker.generate(&pads, material).unwrap();
        assert_eq!(report.fits(), layout.fits(), "{material}");
        assert_eq!(report.placed, layout.discs.len(), "{material}");
        assert_eq!(report.overflow.len(), layout.overflow.len(), "{material}");
    }
}

#[test]
fn test_leather_diameters_on_half_grid() {
    let config = SizingConfig::default();
    let mut size = 5.0;
    while size <= 80.0 {
        let d = disc_diameter(size, MaterialKind::Leather, &config);
        assert_eq!((d * 2.0).fract(), 0.0, "size {size} gave {d}");
        size += 0.25;
    }
}

#[test]
fn test_card_never_larger_than_felt() {
    let config = SizingConfig::default();
    for tenth in 50..800 {
        let size = tenth as f64 / 10.0;
        assert!(
            disc_diameter(size, MaterialKind::Card, &config)
                <= disc_diameter(size, MaterialKind::Felt, &config)
        );
        assert_eq!(disc_diameter(size, MaterialKind::ExactSize, &config), size);
    }
}

#[test]
fn test_emit_records_every_shape() {
    let maker = maker(200.0, 200.0);
    let pads = [
        PadSpec::new(42.0, 1).unwrap(),
        PadSpec::new(15.0, 2).unwrap(),
    ];
    let layout = maker.generate(&pads, MaterialKind::Leather).unwrap();
    assert!(layout.fits());

    let mut sink = RecordingSink::new();
    maker.emit(&layout, &mut sink).unwrap();
    let sheet = &sink.sheets()[0];

    let outlines = sheet
        .shapes
        .iter()
        .filter(|s| matches!(s, ShapeRecord::Outline { .. }))
        .count();
    let holes = sheet
        .shapes
        .iter()
        .filter(|s| matches!(s, ShapeRecord::CenterHole { .. }))
        .count();
    let labels: Vec<&str> = sheet
        .shapes
        .iter()
        .filter_map(|s| match s {
            ShapeRecord::Engraving { mark, .. } => Some(mark.text.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(outlines, 3);
    // Only the 42 mm pad clears the hole threshold
    assert_eq!(holes, 1);
    assert_eq!(labels, vec!["42", "15", "15"]);

    let json = sink.to_json().unwrap();
    assert!(json.contains("\"shape\": \"star\""));
}

struct FailingSink;

impl LayoutSink for FailingSink {
    fn begin_sheet(&mut self, _: MaterialKind, _: f64, _: f64) -> anyhow::Result<()> {
        Ok(())
    }

    fn outline(&mut self, _: &OutlinePath, _: &str) -> anyhow::Result<()> {
        anyhow::bail!("plotter offline")
    }

    fn center_hole(&mut self, _: padkit_core::Point, _: f64, _: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn engraving(&mut self, _: &padkit_camtools::EngravingMark, _: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn finish_sheet(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_surfaces() {
    let maker = maker(100.0, 100.0);
    let layout = maker
        .generate(&[PadSpec::new(20.0, 1).unwrap()], MaterialKind::Felt)
        .unwrap();
    let err = maker.emit(&layout, &mut FailingSink).unwrap_err();
    assert_eq!(err.to_string(), "Output sink failed: plotter offline");
}

#[test]
fn test_narrow_tall_sheet_reports_overflow() {
    let maker = maker(10.0, 1e12);
    let report = maker
        .check_fit(&[PadSpec::new(42.0, 1).unwrap()], MaterialKind::Felt)
        .unwrap();
    assert!(!report.fits());
    assert_eq!(report.placed, 0);
}

#[test]
fn test_oversized_quantity_rejected() {
    let maker = maker(100.0, 100.0);
    let pads = [PadSpec {
        size: 20.0,
        quantity: 4_000_000_000,
    }];
    assert!(matches!(
        maker.check_fit(&pads, MaterialKind::Felt),
        Err(padkit_camtools::LayoutError::Pad(
            padkit_core::PadError::QuantityTooLarge { .. }
        ))
    ));
}
