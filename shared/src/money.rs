//! Money helpers
//!
//! Amounts flow through the system as `f64` currency units and are only
//! rounded at display time.

/// Format an amount for receipts: `"R$ 12.50"`.
///
/// Two decimal places, decimal point (matches what stored orders already
/// show to customers).
pub fn format_brl(value: f64) -> String {
    format!("R$ {:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(38.0), "R$ 38.00");
        assert_eq!(format_brl(5.5), "R$ 5.50");
        assert_eq!(format_brl(0.0), "R$ 0.00");
    }
}
