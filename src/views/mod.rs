pub mod layout;
pub mod matches;
pub mod notification;
pub mod rating_list;
pub mod templates;

/// Renders a stored number the way the tables show it: integral values
/// without a fraction, and negative zero as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
