//! SQL schema definitions for the in-memory SQLite database.
//!
//! Contains CREATE TABLE statements for the panel, exchange-rate, and
//! country-code tables. The schema is applied as a single batch when the
//! database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `panel` - World Bank panel values keyed by (year, country, metric)
/// - `exchange_dates` - The exchange table's date index, in file order
/// - `exchange_rates` - Per-date, per-currency exchange rate values
/// - `country_codes` - Country display name, ISO-3 region code, and the
///   exchange-table currency column for that country
///
/// Derived views (per-country metric series, per-date map rows) are computed
/// on-the-fly via queries against these base tables.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS panel (
        year INTEGER NOT NULL,
        country TEXT NOT NULL,
        metric TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (year, country, metric)
    );
    CREATE INDEX IF NOT EXISTS idx_panel_series ON panel(country, metric, year);

    CREATE TABLE IF NOT EXISTS exchange_dates (
        seq INTEGER PRIMARY KEY,
        label TEXT NOT NULL UNIQUE,
        iso_date TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS exchange_rates (
        date_label TEXT NOT NULL,
        currency TEXT NOT NULL,
        value REAL NOT NULL,
        PRIMARY KEY (date_label, currency)
    );
    CREATE INDEX IF NOT EXISTS idx_rates_date ON exchange_rates(date_label);

    CREATE TABLE IF NOT EXISTS country_codes (
        country TEXT PRIMARY KEY,
        code TEXT NOT NULL,
        currency TEXT NOT NULL
    );

    "#
}
