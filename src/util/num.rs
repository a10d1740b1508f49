/// Formats a number the way literals are listed and printed in the syntax
/// tree: the shortest representation that round-trips, with `.0` appended
/// when that representation has no fractional part.
///
/// ## Example
/// ```
/// use treelox::util::num::format_number_literal;
///
/// assert_eq!(format_number_literal(42.0), "42.0");
/// assert_eq!(format_number_literal(1.25), "1.25");
/// assert_eq!(format_number_literal(-3.0), "-3.0");
/// assert_eq!(format_number_literal(1e23), "100000000000000000000000.0");
/// ```
#[must_use]
pub fn format_number_literal(value: f64) -> String {
    let shortest = format_number_display(value);
    if value.is_finite() && !shortest.contains('.') {
        format!("{shortest}.0")
    } else {
        shortest
    }
}

/// Formats a number for program output: the shortest representation that
/// round-trips, so integral values carry no fractional part.
///
/// ## Example
/// ```
/// use treelox::util::num::format_number_display;
///
/// assert_eq!(format_number_display(3.0), "3");
/// assert_eq!(format_number_display(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number_display(-2.5), "-2.5");
/// assert_eq!(format_number_display(1e23), "100000000000000000000000");
/// ```
#[must_use]
pub fn format_number_display(value: f64) -> String {
    format!("{value}")
}
