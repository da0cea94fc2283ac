//! Output layer colours
//!
//! Laser software maps stroke colours to cut/engrave layers, so each
//! material gets three distinct colours: outline, center hole and engraving.

use crate::materials::PerMaterial;
use padkit_core::ConfigError;
use serde::{Deserialize, Serialize};

/// The three layer colours used for one material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerColors {
    pub outline: String,
    pub center_hole: String,
    pub engraving: String,
}

impl LayerColors {
    fn new(outline: &str, center_hole: &str, engraving: &str) -> Self {
        Self {
            outline: outline.to_string(),
            center_hole: center_hole.to_string(),
            engraving: engraving.to_string(),
        }
    }
}

/// Default palette, matching the laser software's stock layer colours
pub fn default_layer_colors() -> PerMaterial<LayerColors> {
    PerMaterial {
        felt: LayerColors::new("#000000", "#0000A0", "#A00000"),
        card: LayerColors::new("#0000FF", "#00A0FF", "#A000A0"),
        leather: LayerColors::new("#FF0000", "#00E000", "#FF8000"),
        exact_size: LayerColors::new("#D0D000", "#A0A000", "#BB7784"),
    }
}

impl Default for PerMaterial<LayerColors> {
    fn default() -> Self {
        default_layer_colors()
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Check every colour is `#RRGGBB`
pub fn validate_layer_colors(colors: &PerMaterial<LayerColors>) -> Result<(), ConfigError> {
    for (material, layer) in colors.iter() {
        for (suffix, value) in [
            ("outline", &layer.outline),
            ("center_hole", &layer.center_hole),
            ("engraving", &layer.engraving),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::InvalidColor {
                    name: format!("{}_{}", material.as_str(), suffix),
                    value: value.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use padkit_core::MaterialKind;

    #[test]
    fn test_default_palette_is_valid() {
        let colors = default_layer_colors();
        assert!(validate_layer_colors(&colors).is_ok());
        assert_eq!(colors.get(MaterialKind::Leather).outline, "#FF0000");
    }

    #[test]
    fn test_bad_colour_named() {
        let mut colors = default_layer_colors();
        colors.card.engraving = "purple".to_string();
        match validate_layer_colors(&colors) {
            Err(ConfigError::InvalidColor { name, value }) => {
                assert_eq!(name, "card_engraving");
                assert_eq!(value, "purple");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
