//! Utility functions for formatting pipeline output.

/// Formats a speed value as an overlay label (e.g., `Speed: 123.45 px/s`).
/// This is the exact text the rendering stage draws onto each frame.
#[must_use]
pub fn format_speed_label(speed: f64) -> String {
    format!("Speed: {speed:.2} px/s")
}

/// Formats a speed value for summary lines (e.g., `123.45 px/s`).
#[must_use]
pub fn format_speed(speed: f64) -> String {
    format!("{speed:.2} px/s")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_speed_label() {
        assert_eq!(format_speed_label(0.0), "Speed: 0.00 px/s");
        assert_eq!(format_speed_label(123.456), "Speed: 123.46 px/s");
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(100.0), "100.00 px/s");
        assert_eq!(format_speed(0.005), "0.01 px/s");
    }
}
