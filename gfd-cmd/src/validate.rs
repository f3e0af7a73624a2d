//! Offline fixture validation.
//!
//! The chart builders assume the panel table is complete for the fixed
//! country list: every (year, country) pair must carry the two scatter
//! metrics and all five line-chart metrics. The loaders tolerate gaps (a
//! missing point is omitted with a warning at render time), so this check
//! is how gaps get caught before shipping new fixtures.

use gfd_core::dates::{format_exchange_date, parse_exchange_date};
use gfd_core::{Metric, PANEL_COUNTRIES};
use gfd_db::Database;
use log::{info, warn};

/// Load the three fixture CSVs and report completeness violations.
///
/// Fails if any (year, country, metric) triple is missing, if the exchange
/// date index is empty, out of chronological order, or non-canonically
/// labelled, or if a whitelisted country code has no matching exchange
/// column.
pub fn run_validate(panel: &str, exchange: &str, codes: &str) -> anyhow::Result<()> {
    let db = Database::new()?;
    db.load_panel(&std::fs::read_to_string(panel)?)?;
    db.load_exchange_rates(&std::fs::read_to_string(exchange)?)?;
    db.load_country_codes(&std::fs::read_to_string(codes)?)?;

    let mut gaps = 0u32;

    let years = db.query_panel_years()?;
    if years.is_empty() {
        anyhow::bail!("panel fixture has no year columns");
    }
    for year in &years {
        for country in PANEL_COUNTRIES {
            for metric in Metric::ALL {
                if db.panel_value(*year, country, metric.as_str()).is_err() {
                    warn!("panel gap: ({year}, {country}, {metric})");
                    gaps += 1;
                }
            }
        }
    }

    let dates = db.query_exchange_date_index()?;
    if dates.is_empty() {
        anyhow::bail!("exchange fixture has no date rows");
    }

    // File order is the dropdown order; it must also be date order.
    for pair in dates.windows(2) {
        if pair[0].iso_date >= pair[1].iso_date {
            warn!(
                "exchange dates out of order: {:?} is followed by {:?}",
                pair[0].label, pair[1].label
            );
            gaps += 1;
        }
    }

    // Labels are matched literally by the choropleth, so each must be in
    // the canonical unpadded form ("3-Jan-1994", never "03-Jan-1994").
    for date in &dates {
        let canonical = format_exchange_date(&parse_exchange_date(&date.label)?);
        if date.label != canonical {
            warn!(
                "non-canonical date label {:?} (expected {:?})",
                date.label, canonical
            );
            gaps += 1;
        }
    }

    // Every coded country must resolve to an exchange column.
    let code_rows = db.query_country_codes()?;
    let first_date_regions = db.query_exchange_row(&dates[0].label)?;
    for code in &code_rows {
        if !first_date_regions.iter().any(|r| r.code == code.code) {
            warn!(
                "country code gap: {} ({}) has no exchange column {:?}",
                code.country, code.code, code.currency
            );
            gaps += 1;
        }
    }

    info!(
        "validated {} years x {} countries x {} metrics, {} dates, {} codes",
        years.len(),
        PANEL_COUNTRIES.len(),
        Metric::ALL.len(),
        dates.len(),
        code_rows.len()
    );

    if gaps > 0 {
        anyhow::bail!("{gaps} fixture gaps found (see warnings)");
    }
    info!("fixtures are complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_validate;
    use std::io::Write;

    // One complete year for all ten countries and all five metrics.
    const COMPLETE_PANEL: &str = "Country Name,Series Name,1995\n\
         China,Population growth (annual %),1.0\n\
         China,GDP growth (annual %),10.9\n\
         China,\"Inflation, consumer prices (annual %)\",16.8\n\
         China,Exports of goods and services (% of GDP),20.2\n\
         China,Imports of goods and services (% of GDP),18.6\n\
         India,Population growth (annual %),1.9\n\
         India,GDP growth (annual %),7.6\n\
         India,\"Inflation, consumer prices (annual %)\",10.2\n\
         India,Exports of goods and services (% of GDP),10.9\n\
         India,Imports of goods and services (% of GDP),11.8\n\
         Brazil,Population growth (annual %),1.5\n\
         Brazil,GDP growth (annual %),4.4\n\
         Brazil,\"Inflation, consumer prices (annual %)\",66.0\n\
         Brazil,Exports of goods and services (% of GDP),7.0\n\
         Brazil,Imports of goods and services (% of GDP),9.0\n\
         Russian Federation,Population growth (annual %),-0.1\n\
         Russian Federation,GDP growth (annual %),-4.1\n\
         Russian Federation,\"Inflation, consumer prices (annual %)\",197.5\n\
         Russian Federation,Exports of goods and services (% of GDP),29.0\n\
         Russian Federation,Imports of goods and services (% of GDP),25.0\n\
         Japan,Population growth (annual %),0.4\n\
         Japan,GDP growth (annual %),2.7\n\
         Japan,\"Inflation, consumer prices (annual %)\",-0.1\n\
         Japan,Exports of goods and services (% of GDP),9.1\n\
         Japan,Imports of goods and services (% of GDP),7.9\n\
         Mexico,Population growth (annual %),1.8\n\
         Mexico,GDP growth (annual %),-6.3\n\
         Mexico,\"Inflation, consumer prices (annual %)\",35.0\n\
         Mexico,Exports of goods and services (% of GDP),28.0\n\
         Mexico,Imports of goods and services (% of GDP),26.0\n\
         Spain,Population growth (annual %),0.2\n\
         Spain,GDP growth (annual %),2.8\n\
         Spain,\"Inflation, consumer prices (annual %)\",4.7\n\
         Spain,Exports of goods and services (% of GDP),21.5\n\
         Spain,Imports of goods and services (% of GDP),21.1\n\
         Saudi Arabia,Population growth (annual %),2.5\n\
         Saudi Arabia,GDP growth (annual %),0.2\n\
         Saudi Arabia,\"Inflation, consumer prices (annual %)\",4.9\n\
         Saudi Arabia,Exports of goods and services (% of GDP),37.0\n\
         Saudi Arabia,Imports of goods and services (% of GDP),28.0\n\
         Poland,Population growth (annual %),0.1\n\
         Poland,GDP growth (annual %),6.7\n\
         Poland,\"Inflation, consumer prices (annual %)\",27.9\n\
         Poland,Exports of goods and services (% of GDP),23.0\n\
         Poland,Imports of goods and services (% of GDP),21.0\n\
         Canada,Population growth (annual %),1.1\n\
         Canada,GDP growth (annual %),2.7\n\
         Canada,\"Inflation, consumer prices (annual %)\",2.2\n\
         Canada,Exports of goods and services (% of GDP),37.3\n\
         Canada,Imports of goods and services (% of GDP),34.4\n";

    const CODES: &str = "COUNTRY,CODE,CURRENCY\nJapan,JPN,Japanese Yen (JPY)\n";

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    /// Run validation with a complete panel and codes file so the exchange
    /// fixture under test is the only possible failure source.
    fn validate_with_exchange(case: &str, exchange_csv: &str) -> anyhow::Result<()> {
        let panel = write_temp(&format!("gfd_validate_panel_{case}.csv"), COMPLETE_PANEL);
        let codes = write_temp(&format!("gfd_validate_codes_{case}.csv"), CODES);
        let exchange = write_temp(&format!("gfd_validate_exchange_{case}.csv"), exchange_csv);
        run_validate(
            panel.to_str().unwrap(),
            exchange.to_str().unwrap(),
            codes.to_str().unwrap(),
        )
    }

    #[test]
    fn incomplete_panel_fails_validation() {
        let panel = write_temp(
            "gfd_validate_panel_gaps.csv",
            "Country Name,Series Name,1995\nChina,GDP growth (annual %),10.9\n",
        );
        let exchange = write_temp(
            "gfd_validate_exchange_gaps.csv",
            "Date,Japanese Yen (JPY)\n3-Jan-1994,112.3\n",
        );
        let codes = write_temp("gfd_validate_codes_gaps.csv", CODES);
        let result = run_validate(
            panel.to_str().unwrap(),
            exchange.to_str().unwrap(),
            codes.to_str().unwrap(),
        );
        assert!(result.is_err(), "a panel with gaps must fail validation");
    }

    #[test]
    fn complete_fixtures_pass_validation() {
        let result = validate_with_exchange(
            "ok",
            "Date,Japanese Yen (JPY)\n3-Jan-1994,112.3\n10-Jan-1994,111.5\n",
        );
        assert!(result.is_ok(), "complete fixtures must validate: {result:?}");
    }

    #[test]
    fn out_of_order_exchange_dates_fail_validation() {
        let result = validate_with_exchange(
            "unordered",
            "Date,Japanese Yen (JPY)\n10-Jan-1994,111.5\n3-Jan-1994,112.3\n",
        );
        assert!(result.is_err(), "file order must be chronological order");
    }

    #[test]
    fn zero_padded_date_labels_fail_validation() {
        // "03-Jan-1994" parses but will never match a canonical dropdown
        // value, so validation has to flag it.
        let result = validate_with_exchange(
            "padded",
            "Date,Japanese Yen (JPY)\n03-Jan-1994,112.3\n",
        );
        assert!(result.is_err(), "non-canonical labels must be rejected");
    }
}
