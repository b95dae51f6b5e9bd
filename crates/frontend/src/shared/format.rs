//! Display formatting helpers shared by the stock-entry pages.

/// Formats an ISO 8601 date (with or without time part) as dd.mm.yyyy.
pub fn format_date(iso_date: &str) -> String {
    if let Some(date_part) = iso_date.split('T').next() {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                return format!("{}.{}.{}", day, month, year);
            }
        }
    }
    iso_date.to_string()
}

/// Formats a measurement value for a table cell: up to three decimals,
/// trailing zeros trimmed. `None` renders as an em dash.
pub fn format_qty(value: Option<f64>) -> String {
    match value {
        Some(v) => {
            let s = format!("{:.3}", v);
            let s = s.trim_end_matches('0').trim_end_matches('.');
            s.to_string()
        }
        None => "—".to_string(),
    }
}

/// Text an `<input>` should show for an optional numeric field.
/// Unset renders empty; zero renders as "0" (zero is a legitimate value).
pub fn number_input_text(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_format_qty() {
        assert_eq!(format_qty(Some(40.0)), "40");
        assert_eq!(format_qty(Some(12.5)), "12.5");
        assert_eq!(format_qty(Some(0.0)), "0");
        assert_eq!(format_qty(None), "—");
    }

    #[test]
    fn test_number_input_text() {
        assert_eq!(number_input_text(None), "");
        assert_eq!(number_input_text(Some(0.0)), "0");
        assert_eq!(number_input_text(Some(40.5)), "40.5");
    }
}
