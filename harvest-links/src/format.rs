//! Coordinate formatting compatible with previously issued links.

/// Smallest magnitude printed in positional notation.
const POSITIONAL_MIN: f64 = 1e-4;
/// Magnitude from which exponent notation takes over.
const POSITIONAL_MAX: f64 = 1e16;

/// Format a coordinate the way existing delivery links print it.
///
/// Uses the shortest decimal that round-trips, always keeps a fractional part
/// (`10.0`, never `10`), and switches to exponent notation with a signed,
/// two-digit exponent below `1e-4` or from `1e16` upwards (`1e-05`).
///
/// # Examples
/// ```
/// use harvest_links::format_legacy_coordinate;
///
/// assert_eq!(format_legacy_coordinate(10.0), "10.0");
/// assert_eq!(format_legacy_coordinate(76.05), "76.05");
/// assert_eq!(format_legacy_coordinate(-0.5), "-0.5");
/// assert_eq!(format_legacy_coordinate(0.00001), "1e-05");
/// ```
#[must_use]
pub fn format_legacy_coordinate(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_owned();
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(POSITIONAL_MIN..POSITIONAL_MAX).contains(&magnitude) {
        return exponent_form(value);
    }

    let positional = value.to_string();
    if positional.contains('.') {
        positional
    } else {
        format!("{positional}.0")
    }
}

/// Rewrite Rust's `1.5e-5` exponent style as `1.5e-05`.
fn exponent_form(value: f64) -> String {
    let rendered = format!("{value:e}");
    let Some((mantissa, exponent_text)) = rendered.split_once('e') else {
        return rendered;
    };
    let Ok(exponent) = exponent_text.parse::<i32>() else {
        return rendered;
    };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
}
