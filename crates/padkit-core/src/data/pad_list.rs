//! Pad list parsing
//!
//! Pad lists are written one entry per line as `SIZExQTY`, e.g. `42x2` or
//! `16.5 X 4`. Sizes are in millimetres.

use super::PadSpec;
use crate::error::PadError;
use tracing::debug;

/// Parse a single `SIZExQTY` line
///
/// The quantity may be written with a fractional part (`12x2.0`); it is
/// truncated like the size list editors that produce these files do.
pub fn parse_pad_line(line: &str) -> Result<PadSpec, String> {
    let lowered = line.trim().to_lowercase();
    let mut parts = lowered.split('x');
    let (Some(size_str), Some(qty_str), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("expected SIZExQTY".to_string());
    };

    let size: f64 = size_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid size '{}'", size_str.trim()))?;
    let qty: f64 = qty_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", qty_str.trim()))?;

    if !qty.is_finite() || qty < 1.0 {
        return Err(format!("quantity must be at least 1 (got {qty})"));
    }

    PadSpec::new(size, qty as u32).map_err(|e| e.to_string())
}

/// Parse a multi-line pad list, skipping lines that do not parse
pub fn parse_pad_list(input: &str) -> Vec<PadSpec> {
    let mut pads = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_pad_line(line) {
            Ok(pad) => pads.push(pad),
            Err(reason) => debug!("Skipping pad line {}: '{}' ({})", index + 1, line.trim(), reason),
        }
    }
    pads
}

/// Parse a multi-line pad list, failing on the first malformed line
pub fn parse_pad_list_strict(input: &str) -> Result<Vec<PadSpec>, PadError> {
    let mut pads = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let pad = parse_pad_line(line).map_err(|reason| PadError::InvalidLine {
            line_number: index + 1,
            line: line.trim().to_string(),
            reason,
        })?;
        pads.push(pad);
    }
    Ok(pads)
}
