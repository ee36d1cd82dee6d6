//! Shared validation helpers.

use mayday_common::Color;

/// Push an error if `value` is below `min`.
pub(crate) fn validate_min(errors: &mut Vec<String>, name: &str, value: u32, min: u32) {
    if value < min {
        errors.push(format!("{name} = {value} is below the minimum of {min}"));
    }
}

/// Push an error if `value` is not a `#RRGGBB` / `#RRGGBBAA` color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if !value.starts_with('#') || Color::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a #RRGGBB or #RRGGBBAA color"));
    }
}
