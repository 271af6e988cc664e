//! Number formatting for display

/// Round to `decimals` decimal places, half away from zero
///
/// This is the only place where rounding happens, everything displayed goes
/// through here.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    // no fractional digits left at this magnitude, and `value * factor`
    // could overflow
    if !value.is_finite() || value.abs() >= 1e15 {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // avoid "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Check if a value would be displayed as zero once rounded to `decimals`
///
/// ```
/// # use recipe_scale::format::rounds_to_zero;
/// assert!(rounds_to_zero(0.004, 2));
/// assert!(rounds_to_zero(-0.004, 2));
/// assert!(!rounds_to_zero(0.005, 2));
/// assert!(!rounds_to_zero(0.01, 2));
/// assert!(!rounds_to_zero(1.0, 0));
/// ```
pub fn rounds_to_zero(value: f64, decimals: u32) -> bool {
    round_to(value, decimals) == 0.0
}

/// Format a quantity rounded to `decimals` without trailing zeros
///
/// ```
/// # use recipe_scale::format::format_quantity;
/// assert_eq!(format_quantity(1.5, 2), "1.5");
/// assert_eq!(format_quantity(2.0, 2), "2");
/// assert_eq!(format_quantity(1.0 / 3.0, 2), "0.33");
/// ```
pub fn format_quantity(value: f64, decimals: u32) -> String {
    // `Display` for f64 already prints the shortest representation, so `2.0`
    // is `2` and `1.50` is `1.5`.
    round_to(value, decimals).to_string()
}

/// Join a formatted quantity and an optional unit
///
/// ```
/// # use recipe_scale::format::compose;
/// assert_eq!(compose("200", Some("g")), "200 g");
/// assert_eq!(compose("3", None), "3");
/// assert_eq!(compose("3", Some("  ")), "3");
/// ```
pub fn compose(quantity: &str, unit: Option<&str>) -> String {
    match unit.map(str::trim).filter(|u| !u.is_empty()) {
        Some(unit) => format!("{} {}", quantity.trim(), unit),
        None => quantity.trim().to_string(),
    }
}

/// Format a ratio as a multiplier indicator, like `×1.5`
///
/// ```
/// # use recipe_scale::format::format_ratio;
/// assert_eq!(format_ratio(2.0), "×2");
/// assert_eq!(format_ratio(0.666666), "×0.67");
/// ```
pub fn format_ratio(ratio: f64) -> String {
    format!("×{}", format_quantity(ratio, 2))
}
