//! Typed query methods for the panel, exchange-rate, and country-code tables.
//!
//! All queries are reads; nothing here mutates the database. Plumbing
//! failures surface as `anyhow` errors, while the single lookup with a
//! contract of its own — [`Database::panel_value`] — returns the typed
//! [`ChartError::KeyMissing`] when the requested triple is absent.

use crate::models::{CountryCode, ExchangeDate, RegionValue, YearValue};
use crate::Database;
use gfd_core::error::ChartError;
use rusqlite::params;

impl Database {
    // ───────────────────── Panel queries ─────────────────────

    /// All distinct panel years, ascending. This is the table's natural
    /// year ordering used for frames and slider steps.
    pub fn query_panel_years(&self) -> anyhow::Result<Vec<i32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT DISTINCT year FROM panel ORDER BY year")?;
        let years = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i32>, _>>()?;
        Ok(years)
    }

    /// Look up one (year, country, metric) value.
    ///
    /// Fails with [`ChartError::KeyMissing`] when the triple is absent,
    /// making the provider's contract explicit instead of propagating a
    /// silent NaN.
    pub fn panel_value(&self, year: i32, country: &str, metric: &str) -> Result<f64, ChartError> {
        let conn = self.conn.borrow();
        let value = conn
            .query_row(
                "SELECT value FROM panel WHERE year = ?1 AND country = ?2 AND metric = ?3",
                params![year, country, metric],
                |row| row.get::<_, f64>(0),
            )
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(ChartError::Data(other.to_string())),
            })?;
        value.ok_or_else(|| ChartError::KeyMissing {
            year,
            country: country.to_string(),
            metric: metric.to_string(),
        })
    }

    /// One country's series for a metric, ordered by year ascending.
    ///
    /// Years with no stored value are simply not present in the result,
    /// which keeps x and y pairwise-aligned in the line chart.
    pub fn query_metric_series(
        &self,
        country: &str,
        metric: &str,
    ) -> anyhow::Result<Vec<YearValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year, value FROM panel
             WHERE country = ?1 AND metric = ?2
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map(params![country, metric], |row| {
                Ok(YearValue {
                    year: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ───────────────────── Exchange queries ─────────────────────

    /// The exchange table's date labels in their natural (file) order.
    /// These are the choropleth dropdown's option values.
    pub fn query_exchange_dates(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT label FROM exchange_dates ORDER BY seq")?;
        let dates = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(dates)
    }

    /// The full date index in file order, each label paired with its ISO
    /// form. Lets callers check that file order is also chronological
    /// order, which the dropdown and the figure titles assume.
    pub fn query_exchange_date_index(&self) -> anyhow::Result<Vec<ExchangeDate>> {
        let conn = self.conn.borrow();
        let mut stmt =
            conn.prepare("SELECT label, iso_date FROM exchange_dates ORDER BY seq")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ExchangeDate {
                    label: row.get(0)?,
                    iso_date: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Whether a date label is a literal member of the exchange index.
    pub fn has_exchange_date(&self, label: &str) -> anyhow::Result<bool> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM exchange_dates WHERE label = ?1",
            params![label],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// One map region per whitelisted country with that date's exchange
    /// rate for the country's currency, joined through the country-code
    /// table. Ordered by country name for deterministic trace output.
    pub fn query_exchange_row(&self, label: &str) -> anyhow::Result<Vec<RegionValue>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT cc.country, cc.code, er.value
             FROM country_codes cc
             INNER JOIN exchange_rates er ON er.currency = cc.currency
             WHERE er.date_label = ?1
             ORDER BY cc.country",
        )?;
        let rows = stmt
            .query_map(params![label], |row| {
                Ok(RegionValue {
                    country: row.get(0)?,
                    code: row.get(1)?,
                    value: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    // ───────────────────── Country-code queries ─────────────────────

    /// All loaded (whitelisted) country-code rows, ordered by country name.
    pub fn query_country_codes(&self) -> anyhow::Result<Vec<CountryCode>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country, code, currency FROM country_codes ORDER BY country",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(CountryCode {
                    country: row.get(0)?,
                    code: row.get(1)?,
                    currency: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use gfd_core::error::ChartError;

    fn seeded() -> Database {
        let db = Database::new().unwrap();
        db.load_panel(
            "Country Name,Series Name,1995,1996,1997,1998\n\
             China,GDP growth (annual %),10.9,9.9,9.2,7.8\n\
             Japan,GDP growth (annual %),2.7,3.1,1.1,-1.1\n",
        )
        .unwrap();
        db.load_exchange_rates(
            "Date,Japanese Yen (JPY),Canadian Dollar (CAD)\n\
             3-Jan-1994,112.3,1.32\n\
             10-Jan-1994,111.5,1.33\n",
        )
        .unwrap();
        db.load_country_codes(
            "COUNTRY,CODE,CURRENCY\n\
             Japan,JPN,Japanese Yen (JPY)\n\
             Canada,CAN,Canadian Dollar (CAD)\n",
        )
        .unwrap();
        db
    }

    #[test]
    fn panel_value_returns_stored_value() {
        let db = seeded();
        let v = db.panel_value(1998, "China", "GDP growth (annual %)").unwrap();
        assert_eq!(v, 7.8);
    }

    #[test]
    fn panel_value_reports_key_missing() {
        let db = seeded();
        let err = db
            .panel_value(2050, "China", "GDP growth (annual %)")
            .unwrap_err();
        assert_eq!(
            err,
            ChartError::KeyMissing {
                year: 2050,
                country: "China".to_string(),
                metric: "GDP growth (annual %)".to_string(),
            }
        );
    }

    #[test]
    fn metric_series_is_year_ordered() {
        let db = seeded();
        let series = db
            .query_metric_series("China", "GDP growth (annual %)")
            .unwrap();
        let years: Vec<i32> = series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1995, 1996, 1997, 1998]);
    }

    #[test]
    fn metric_series_for_unknown_country_is_empty() {
        let db = seeded();
        let series = db
            .query_metric_series("Atlantis", "GDP growth (annual %)")
            .unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn exchange_date_membership() {
        let db = seeded();
        assert!(db.has_exchange_date("3-Jan-1994").unwrap());
        assert!(!db.has_exchange_date("1-Jan-2000").unwrap());
    }

    #[test]
    fn exchange_date_index_pairs_labels_with_iso_dates() {
        let db = seeded();
        let index = db.query_exchange_date_index().unwrap();
        let pairs: Vec<(&str, &str)> = index
            .iter()
            .map(|d| (d.label.as_str(), d.iso_date.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("3-Jan-1994", "1994-01-03"), ("10-Jan-1994", "1994-01-10")],
            "index preserves file order and carries sortable ISO forms"
        );
    }

    #[test]
    fn exchange_row_joins_currency_to_region() {
        let db = seeded();
        let row = db.query_exchange_row("3-Jan-1994").unwrap();
        assert_eq!(row.len(), 2, "one value per whitelisted code");
        let japan = row.iter().find(|r| r.code == "JPN").unwrap();
        assert_eq!(japan.value, 112.3);
        let canada = row.iter().find(|r| r.code == "CAN").unwrap();
        assert_eq!(canada.value, 1.32);
    }

    #[test]
    fn exchange_row_for_unknown_date_is_empty() {
        let db = seeded();
        assert!(db.query_exchange_row("1-Jan-2000").unwrap().is_empty());
    }
}
