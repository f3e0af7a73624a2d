//! CSV data loading functions for populating the in-memory SQLite database.
//!
//! Each loader method parses CSV data from a string slice and inserts rows
//! into the corresponding table. The CSV formats match the pre-cleaned
//! fixture files produced by the data-cleaning pipeline and the
//! `gfd-cli fetch-codes` tool.
//!
//! # CSV Formats
//!
//! - **Panel** (has headers): `Country Name,Series Name,1995,1996,…,2018`
//!   (wide; one row per country/series, one column per year)
//! - **Exchange rates** (has headers): `Date,<currency>,<currency>,…`
//!   (wide; one row per date label such as `3-Jan-1994`)
//! - **Country codes** (has headers): `COUNTRY,CODE,CURRENCY`
//!
//! # Load policies
//!
//! These replace the silent defaults of the original data pipeline with
//! explicit, tested behavior:
//!
//! - Duplicate panel rows for the same (year, country, metric) keep the
//!   first occurrence.
//! - Non-numeric panel cells are skipped (the triple is simply absent and
//!   later lookups fail with `KeyMissing`); each skip is logged.
//! - The `Euro (EUR)` exchange column is dropped entirely.
//! - Blank or non-numeric exchange cells load as `0.0`.

use crate::Database;
use gfd_core::country::map_country;
use gfd_core::dates::parse_exchange_date;
use rusqlite::params;

/// Column header of the currency excluded from the exchange table.
const EURO_COLUMN: &str = "Euro (EUR)";

impl Database {
    /// Load World Bank panel data from a wide CSV string.
    ///
    /// Expected format (with headers): `Country Name,Series Name,1995,…`
    ///
    /// Year columns are taken from the header row; a header that does not
    /// parse as a year is skipped. Duplicate (year, country, metric) keys
    /// keep the first value seen.
    ///
    /// # Example CSV
    /// ```text
    /// Country Name,Series Name,1995,1996
    /// China,GDP growth (annual %),10.9,9.9
    /// ```
    pub fn load_panel(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        // Year per value column, None for unparsable headers.
        let years: Vec<Option<i32>> = rdr
            .headers()?
            .iter()
            .skip(2)
            .map(|h| h.trim().parse::<i32>().ok())
            .collect();

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let country = r.get(0).unwrap_or("").trim();
            let metric = r.get(1).unwrap_or("").trim();
            if country.is_empty() || metric.is_empty() {
                skipped += 1;
                continue;
            }

            for (i, year) in years.iter().enumerate() {
                let Some(year) = year else { continue };
                let cell = r.get(i + 2).unwrap_or("").trim();
                let value: f64 = match cell.parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => {
                        // Absent triple; panel_value() reports KeyMissing.
                        skipped += 1;
                        continue;
                    }
                };
                conn.execute(
                    "INSERT OR IGNORE INTO panel (year, country, metric, value)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![year, country, metric, value],
                )?;
                count += 1;
            }
        }
        log::info!(
            "loader: loaded {} panel values, skipped {} empty or non-numeric cells",
            count,
            skipped
        );
        Ok(())
    }

    /// Load the exchange-rate table from a wide CSV string.
    ///
    /// Expected format (with headers): `Date,Australian Dollar (AUD),…`
    ///
    /// The file's row order defines the date index order and is preserved.
    /// The `Euro (EUR)` column is dropped by design. Blank or non-numeric
    /// cells load as `0.0`. Rows whose date label does not parse as a
    /// `3-Jan-1994` style date are skipped.
    pub fn load_exchange_rates(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let currencies: Vec<String> = rdr
            .headers()?
            .iter()
            .skip(1)
            .map(|h| h.trim().to_string())
            .collect();

        let mut seq = 0i64;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            let label = r.get(0).unwrap_or("").trim();

            let iso_date = match parse_exchange_date(label) {
                Ok(d) => d.format("%Y-%m-%d").to_string(),
                Err(_) => {
                    log::warn!("loader: skipping exchange row with bad date label {label:?}");
                    skipped += 1;
                    continue;
                }
            };

            let inserted = conn.execute(
                "INSERT OR IGNORE INTO exchange_dates (seq, label, iso_date)
                 VALUES (?1, ?2, ?3)",
                params![seq, label, iso_date],
            )?;
            if inserted == 0 {
                // Duplicate date label; keep the first row.
                skipped += 1;
                continue;
            }
            seq += 1;

            for (i, currency) in currencies.iter().enumerate() {
                if currency == EURO_COLUMN {
                    continue;
                }
                // fillna(0): blank and non-numeric cells load as zero.
                let value = r
                    .get(i + 1)
                    .unwrap_or("")
                    .trim()
                    .parse::<f64>()
                    .unwrap_or(0.0);
                conn.execute(
                    "INSERT OR IGNORE INTO exchange_rates (date_label, currency, value)
                     VALUES (?1, ?2, ?3)",
                    params![label, currency, value],
                )?;
            }
        }
        log::info!(
            "loader: loaded {} exchange dates, skipped {} rows",
            seq,
            skipped
        );
        Ok(())
    }

    /// Load the country-code whitelist from CSV.
    ///
    /// Expected format (with headers): `COUNTRY,CODE,CURRENCY`
    ///
    /// Only countries on the fixed map whitelist are kept. A missing
    /// `CURRENCY` field falls back to the whitelist's own currency mapping,
    /// so a plain `COUNTRY,CODE` export still loads.
    pub fn load_country_codes(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        for result in rdr.records() {
            let r = result?;
            let country = r.get(0).unwrap_or("").trim();
            let code = r.get(1).unwrap_or("").trim();

            let Some(entry) = map_country(country) else {
                continue; // not whitelisted
            };
            if code.is_empty() {
                continue;
            }
            let currency = match r.get(2).map(str::trim) {
                Some(c) if !c.is_empty() => c,
                _ => entry.currency,
            };

            conn.execute(
                "INSERT OR REPLACE INTO country_codes (country, code, currency)
                 VALUES (?1, ?2, ?3)",
                params![country, code, currency],
            )?;
            count += 1;
        }
        log::info!("loader: loaded {} whitelisted country codes", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const PANEL_CSV: &str = "\
Country Name,Series Name,1995,1996,1997
China,GDP growth (annual %),10.9,9.9,9.2
China,Inflation consumer prices (annual %),16.8,8.3,2.8
India,GDP growth (annual %),7.6,..,4.0
";

    #[test]
    fn panel_loads_numeric_cells() {
        let db = Database::new().unwrap();
        db.load_panel(PANEL_CSV).unwrap();
        assert_eq!(db.query_panel_years().unwrap(), vec![1995, 1996, 1997]);
        let v = db
            .panel_value(1996, "China", "GDP growth (annual %)")
            .unwrap();
        assert_eq!(v, 9.9);
    }

    #[test]
    fn panel_skips_non_numeric_cells() {
        let db = Database::new().unwrap();
        db.load_panel(PANEL_CSV).unwrap();
        // India's 1996 cell is ".." and must be absent, not zero.
        let missing = db.panel_value(1996, "India", "GDP growth (annual %)");
        assert!(missing.is_err(), "non-numeric cell must not load as a value");
    }

    #[test]
    fn panel_duplicates_keep_first() {
        let db = Database::new().unwrap();
        db.load_panel(
            "Country Name,Series Name,1995\n\
             China,GDP growth (annual %),10.9\n\
             China,GDP growth (annual %),99.9\n",
        )
        .unwrap();
        let v = db
            .panel_value(1995, "China", "GDP growth (annual %)")
            .unwrap();
        assert_eq!(v, 10.9, "duplicate rows must keep the first value");
    }

    #[test]
    fn exchange_rows_keep_file_order() {
        let db = Database::new().unwrap();
        db.load_exchange_rates(
            "Date,Japanese Yen (JPY)\n\
             7-Jan-1994,111.9\n\
             3-Jan-1994,112.3\n",
        )
        .unwrap();
        // File order, not chronological order.
        assert_eq!(
            db.query_exchange_dates().unwrap(),
            vec!["7-Jan-1994".to_string(), "3-Jan-1994".to_string()]
        );
    }

    #[test]
    fn euro_column_is_dropped() {
        let db = Database::new().unwrap();
        db.load_exchange_rates(
            "Date,Euro (EUR),Japanese Yen (JPY)\n\
             3-Jan-1994,1.11,112.3\n",
        )
        .unwrap();
        db.load_country_codes("COUNTRY,CODE,CURRENCY\nJapan,JPN,Japanese Yen (JPY)\n")
            .unwrap();
        let row = db.query_exchange_row("3-Jan-1994").unwrap();
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].code, "JPN");
        assert_eq!(row[0].value, 112.3);
    }

    #[test]
    fn blank_exchange_cells_load_as_zero() {
        let db = Database::new().unwrap();
        db.load_exchange_rates(
            "Date,Japanese Yen (JPY),Swiss Franc (CHF)\n\
             3-Jan-1994,,1.48\n",
        )
        .unwrap();
        db.load_country_codes(
            "COUNTRY,CODE,CURRENCY\n\
             Japan,JPN,Japanese Yen (JPY)\n\
             Switzerland,CHE,Swiss Franc (CHF)\n",
        )
        .unwrap();
        let row = db.query_exchange_row("3-Jan-1994").unwrap();
        let japan = row.iter().find(|r| r.code == "JPN").unwrap();
        assert_eq!(japan.value, 0.0, "blank cells fill as zero by policy");
    }

    #[test]
    fn bad_date_labels_are_skipped() {
        let db = Database::new().unwrap();
        db.load_exchange_rates(
            "Date,Japanese Yen (JPY)\n\
             not-a-date,1.0\n\
             3-Jan-1994,112.3\n",
        )
        .unwrap();
        assert_eq!(
            db.query_exchange_dates().unwrap(),
            vec!["3-Jan-1994".to_string()]
        );
    }

    #[test]
    fn country_codes_filter_to_whitelist() {
        let db = Database::new().unwrap();
        db.load_country_codes(
            "COUNTRY,CODE,CURRENCY\n\
             Japan,JPN,Japanese Yen (JPY)\n\
             Atlantis,ATL,Atlantean Shell (ATS)\n\
             Canada,CAN,\n",
        )
        .unwrap();
        let codes = db.query_country_codes().unwrap();
        assert_eq!(codes.len(), 2, "non-whitelisted countries are dropped");
        let canada = codes.iter().find(|c| c.code == "CAN").unwrap();
        assert_eq!(
            canada.currency, "Canadian Dollar (CAD)",
            "missing CURRENCY falls back to the static mapping"
        );
    }
}
