//! Number formatting for table cells and stat cards.

/// Formats a number with comma thousands separators and the given number
/// of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Insert a separator every 3 digits from the right
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Whole-pound GBP amount: 1234.0 -> "£1,234"
pub fn format_gbp(value: f64) -> String {
    format!("£{}", format_number_with_decimals(value, 0))
}

/// Exact GBP amount with pence: 1234.5 -> "£1,234.50"
pub fn format_gbp_exact(value: f64) -> String {
    format!("£{}", format_number_with_decimals(value, 2))
}

/// Human file size with binary units: 1_248_576 -> "1.19 MB"
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["Bytes", "KB", "MB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let scaled = bytes as f64 / 1024_f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.0} {}", rounded, UNITS[exponent])
    } else {
        format!("{} {}", rounded, UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gbp() {
        assert_eq!(format_gbp(1234.0), "£1,234");
        assert_eq!(format_gbp(1234567.0), "£1,234,567");
        assert_eq!(format_gbp(0.0), "£0");
    }

    #[test]
    fn test_format_gbp_exact() {
        assert_eq!(format_gbp_exact(1234.5), "£1,234.50");
        assert_eq!(format_gbp_exact(399.0), "£399.00");
    }

    #[test]
    fn test_negative_values_keep_the_sign_in_place() {
        assert_eq!(format_number_with_decimals(-1234.56, 2), "-1,234.56");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(2048), "2 KB");
        assert_eq!(format_file_size(1_248_576), "1.19 MB");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(999.6, 0), "1,000");
    }
}
