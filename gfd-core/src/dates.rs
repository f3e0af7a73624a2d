//! Date helpers for the exchange table's `3-Jan-1994` style index labels.

use chrono::NaiveDate;

/// Parse an exchange-table date label such as "3-Jan-1994".
///
/// The day is not zero-padded in the source data; chrono accepts both
/// padded and unpadded numeric fields when parsing.
pub fn parse_exchange_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%d-%b-%Y")?)
}

/// Format a date back into the exchange-table label form ("3-Jan-1994").
pub fn format_exchange_date(date: &NaiveDate) -> String {
    date.format("%-d-%b-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unpadded_day() {
        let date = parse_exchange_date("3-Jan-1994").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1994, 1, 3).unwrap());
    }

    #[test]
    fn parses_padded_day() {
        let date = parse_exchange_date("14-Feb-1997").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(1997, 2, 14).unwrap());
    }

    #[test]
    fn label_round_trips() {
        let date = NaiveDate::from_ymd_opt(1994, 1, 3).unwrap();
        let label = format_exchange_date(&date);
        assert_eq!(label, "3-Jan-1994");
        assert_eq!(parse_exchange_date(&label).unwrap(), date);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_exchange_date("1994-01-03").is_err());
        assert!(parse_exchange_date("not a date").is_err());
    }
}
