use chrono::{DateTime, NaiveDateTime};

/// Renders a backend timestamp as `dd/MM/yyyy HH:mm`. The backend is not
/// strict about the format it returns, so a few shapes are accepted.
pub fn format_timestamp(raw: &str) -> String {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.naive_local()));
    match parsed {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => "N/A".to_string(),
    }
}

/// Fine amounts are displayed the fr-DZ way: space-grouped thousands,
/// comma decimals, two fraction digits.
pub fn format_fine(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped},{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_timestamps_without_seconds() {
        assert_eq!(format_timestamp("2025-03-14T09:30"), "14/03/2025 09:30");
    }

    #[test]
    fn formats_timestamps_with_seconds_and_rfc3339() {
        assert_eq!(format_timestamp("2025-03-14T09:30:45"), "14/03/2025 09:30");
        assert_eq!(
            format_timestamp("2025-03-14T09:30:45+01:00"),
            "14/03/2025 09:30"
        );
    }

    #[test]
    fn unparseable_timestamp_renders_placeholder() {
        assert_eq!(format_timestamp("yesterday"), "N/A");
        assert_eq!(format_timestamp(""), "N/A");
    }

    #[test]
    fn groups_fine_amounts_in_thousands() {
        assert_eq!(format_fine(5000.0), "5 000,00");
        assert_eq!(format_fine(20000.0), "20 000,00");
        assert_eq!(format_fine(1234567.5), "1 234 567,50");
        assert_eq!(format_fine(750.0), "750,00");
        assert_eq!(format_fine(0.0), "0,00");
    }
}
