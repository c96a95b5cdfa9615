//! Change-log line formatting

use crate::input::FieldSnapshot;
use vecdist_core::Metric;

pub const CALCULATE_WAS_PRESSED: &str = "Calculate. ";
pub const METRIC_WAS_CHANGED: &str = "Metric was changed to ";
pub const EDITING_FINISHED: &str = "Updated input. ";

/// Render a distance with at least one fractional digit (`1.0`, `4.8`, `1.0E16`)
pub fn format_result(value: f64) -> String {
    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{}E{}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}.0E{}", mantissa, exp),
        None => shortest,
    }
}

pub fn calculate_message(fields: &FieldSnapshot, metric: Metric, result: &str) -> String {
    let mut message = format!(
        "{}Arguments: Vec1 = [{}, {}]; Vec2 = [{}, {}]; Metric = {}",
        CALCULATE_WAS_PRESSED,
        fields.vec1_x,
        fields.vec1_y,
        fields.vec2_x,
        fields.vec2_y,
        metric.display_name(),
    );
    if metric.uses_order() {
        message.push_str("; Dim = ");
        message.push_str(&fields.dim);
    }
    message.push_str("; Result = ");
    message.push_str(result);
    message
}

pub fn metric_changed_message(metric: Metric) -> String {
    format!("{}{}", METRIC_WAS_CHANGED, metric.display_name())
}

pub fn editing_finished_message(fields: &FieldSnapshot) -> String {
    format!(
        "{}Input arguments are: Vec1 = [{},{}]; Vec2 = [{},{}]; Dim = {}",
        EDITING_FINISHED, fields.vec1_x, fields.vec1_y, fields.vec2_x, fields.vec2_y, fields.dim,
    )
}
