//! Output sink seam
//!
//! Vector file writers live outside this crate. A layout is handed to them
//! through [`LayoutSink`], one sheet per material, with the layer colour
//! already resolved for every shape. [`RecordingSink`] keeps the records in
//! memory and can dump them as JSON.

use crate::engraving::EngravingMark;
use crate::pad_layout::OutlinePath;
use anyhow::{anyhow, Result};
use padkit_core::{MaterialKind, Point};
use serde::{Deserialize, Serialize};

/// Receives finished shapes for one or more sheets
pub trait LayoutSink {
    /// Start a sheet for `material`
    fn begin_sheet(&mut self, material: MaterialKind, width_mm: f64, height_mm: f64)
        -> Result<()>;

    /// A disc outline, circle or star
    fn outline(&mut self, outline: &OutlinePath, color: &str) -> Result<()>;

    /// A center hole circle
    fn center_hole(&mut self, center: Point, radius: f64, color: &str) -> Result<()>;

    /// An engraved label
    fn engraving(&mut self, mark: &EngravingMark, color: &str) -> Result<()>;

    /// The current sheet is complete
    fn finish_sheet(&mut self) -> Result<()>;
}

/// One shape with its layer colour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeRecord {
    Outline {
        color: String,
        outline: OutlinePath,
    },
    CenterHole {
        color: String,
        center: Point,
        radius: f64,
    },
    Engraving {
        color: String,
        mark: EngravingMark,
    },
}

/// All shapes emitted for one sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRecord {
    pub material: MaterialKind,
    pub width_mm: f64,
    pub height_mm: f64,
    pub shapes: Vec<ShapeRecord>,
}

/// In-memory sink
#[derive(Debug, Default)]
pub struct RecordingSink {
    sheets: Vec<SheetRecord>,
    current: Option<SheetRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed sheets, in emission order
    pub fn sheets(&self) -> &[SheetRecord] {
        &self.sheets
    }

    /// Completed sheets as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.sheets)
    }

    fn push(&mut self, shape: ShapeRecord) -> Result<()> {
        let sheet = self
            .current
            .as_mut()
            .ok_or_else(|| anyhow!("shape emitted outside of a sheet"))?;
        sheet.shapes.push(shape);
        Ok(())
    }
}

impl LayoutSink for RecordingSink {
    fn begin_sheet(
        &mut self,
        material: MaterialKind,
        width_mm: f64,
        height_mm: f64,
    ) -> Result<()> {
        if let Some(open) = &self.current {
            return Err(anyhow!("sheet for {} was never finished", open.material));
        }
        self.current = Some(SheetRecord {
            material,
            width_mm,
            height_mm,
            shapes: Vec::new(),
        });
        Ok(())
    }

    fn outline(&mut self, outline: &OutlinePath, color: &str) -> Result<()> {
        self.push(ShapeRecord::Outline {
            color: color.to_string(),
            outline: outline.clone(),
        })
    }

    fn center_hole(&mut self, center: Point, radius: f64, color: &str) -> Result<()> {
        self.push(ShapeRecord::CenterHole {
            color: color.to_string(),
            center,
            radius,
        })
    }

    fn engraving(&mut self, mark: &EngravingMark, color: &str) -> Result<()> {
        self.push(ShapeRecord::Engraving {
            color: color.to_string(),
            mark: mark.clone(),
        })
    }

    fn finish_sheet(&mut self) -> Result<()> {
        let sheet = self
            .current
            .take()
            .ok_or_else(|| anyhow!("finish_sheet called without begin_sheet"))?;
        self.sheets.push(sheet);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_one_sheet() {
        let mut sink = RecordingSink::new();
        sink.begin_sheet(MaterialKind::Felt, 100.0, 50.0).unwrap();
        sink.outline(
            &OutlinePath::Circle {
                center: Point::new(10.0, 10.0),
                radius: 9.0,
            },
            "#000000",
        )
        .unwrap();
        sink.center_hole(Point::new(10.0, 10.0), 1.75, "#0000A0")
            .unwrap();
        sink.finish_sheet().unwrap();

        assert_eq!(sink.sheets().len(), 1);
        assert_eq!(sink.sheets()[0].shapes.len(), 2);

        let json = sink.to_json().unwrap();
        assert!(json.contains("\"kind\": \"outline\""));
        assert!(json.contains("\"shape\": \"circle\""));
        assert!(json.contains("\"material\": \"felt\""));
    }

    #[test]
    fn test_shape_outside_sheet_rejected() {
        let mut sink = RecordingSink::new();
        assert!(sink
            .center_hole(Point::default(), 1.0, "#000000")
            .is_err());
        assert!(sink.finish_sheet().is_err());
    }

    #[test]
    fn test_unfinished_sheet_rejected() {
        let mut sink = RecordingSink::new();
        sink.begin_sheet(MaterialKind::Card, 10.0, 10.0).unwrap();
        assert!(sink.begin_sheet(MaterialKind::Felt, 10.0, 10.0).is_err());
    }
}
