const CM_PER_INCH: f64 = 2.54;

/// Render a height as feet and inches followed by the metric value
///
/// `Some(165)` becomes `5'5" (165 cm)`. Missing or zero heights read
/// "Not specified".
pub fn format_height(height_cm: Option<u16>) -> String {
    let Some(cm) = height_cm.filter(|h| *h > 0) else {
        return "Not specified".to_string();
    };

    let total_inches = f64::from(cm) / CM_PER_INCH;
    let feet = (total_inches / 12.0).floor();
    let inches = (total_inches % 12.0).round();

    format!("{}'{}\" ({} cm)", feet as u32, inches as u32, cm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_height() {
        assert_eq!(format_height(Some(165)), "5'5\" (165 cm)");
        assert_eq!(format_height(Some(183)), "6'0\" (183 cm)");
        assert_eq!(format_height(Some(188)), "6'2\" (188 cm)");
    }

    #[test]
    fn test_missing_height() {
        assert_eq!(format_height(None), "Not specified");
        assert_eq!(format_height(Some(0)), "Not specified");
    }
}
