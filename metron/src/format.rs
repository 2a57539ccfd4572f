//! Input parsing and result lines

use metron_core::{ConversionRequest, ConversionResult, MetronError};

/// Parse a magnitude typed by the user
pub fn parse_value(text: &str) -> Result<f64, MetronError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| MetronError::invalid_value(trimmed))?;
    if !value.is_finite() {
        return Err(MetronError::invalid_value(trimmed));
    }
    Ok(value)
}

/// `1.0 foot is equal to 12.0 inch`
pub fn cli_line(req: &ConversionRequest, result: &ConversionResult) -> String {
    // Debug formatting keeps the trailing ".0" on whole numbers
    format!(
        "{:?} {} is equal to {:?} {}",
        req.value, req.from_unit, result.value, result.unit
    )
}

/// `1.0 foot = 12.0000 inch`
pub fn gui_line(req: &ConversionRequest, result: &ConversionResult) -> String {
    format!(
        "{:?} {} = {:.4} {}",
        req.value, req.from_unit, result.value, result.unit
    )
}
