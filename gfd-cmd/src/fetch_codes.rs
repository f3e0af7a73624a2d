//! Fetch the country-code dataset and write the filtered fixture.
//!
//! The upstream file is the plotly datasets mirror of the 2014 world GDP
//! table (`COUNTRY,GDP (BILLIONS),CODE`). The original page fetched it on
//! every load; here it is a one-time build step so the web app can embed
//! the result.

use anyhow::Context;
use gfd_core::country::MAP_COUNTRIES;
use log::info;

/// Upstream country-code dataset.
const CODES_URL: &str =
    "https://raw.githubusercontent.com/plotly/datasets/master/2014_world_gdp_with_codes.csv";

/// Download the dataset, keep the whitelisted countries, join each to its
/// exchange-table currency column, and write `COUNTRY,CODE,CURRENCY`.
pub async fn run_fetch_codes(output: &str) -> anyhow::Result<()> {
    info!("Fetching country codes from {}", CODES_URL);
    let body = reqwest::get(CODES_URL)
        .await
        .context("country-code download failed")?
        .error_for_status()?
        .text()
        .await?;

    let csv_out = filter_codes(&body)?;
    std::fs::write(output, csv_out)?;
    info!("Wrote country-code fixture to {}", output);
    Ok(())
}

/// Filter the upstream CSV to the map whitelist and attach currencies.
fn filter_codes(upstream_csv: &str) -> anyhow::Result<String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(upstream_csv.as_bytes());

    let headers = rdr.headers()?.clone();
    let country_idx = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("COUNTRY"))
        .context("upstream CSV has no COUNTRY column")?;
    let code_idx = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case("CODE"))
        .context("upstream CSV has no CODE column")?;

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["COUNTRY", "CODE", "CURRENCY"])?;

    let mut count = 0u32;
    for result in rdr.records() {
        let r = result?;
        let country = r.get(country_idx).unwrap_or("").trim();
        let code = r.get(code_idx).unwrap_or("").trim();
        let Some(entry) = gfd_core::country::map_country(country) else {
            continue;
        };
        if code.is_empty() {
            continue;
        }
        wtr.write_record([country, code, entry.currency])?;
        count += 1;
    }
    info!(
        "Kept {} of {} whitelisted countries",
        count,
        MAP_COUNTRIES.len()
    );

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

#[cfg(test)]
mod tests {
    use super::filter_codes;

    #[test]
    fn keeps_only_whitelisted_countries() {
        let upstream = "\
COUNTRY,GDP (BILLIONS),CODE
Japan,4770.0,JPN
Germany,3820.0,DEU
Canada,1794.0,CAN
";
        let out = filter_codes(upstream).unwrap();
        assert!(out.contains("Japan,JPN,Japanese Yen (JPY)"));
        assert!(out.contains("Canada,CAN,Canadian Dollar (CAD)"));
        assert!(!out.contains("Germany"), "euro-zone countries are excluded");
    }

    #[test]
    fn rejects_csv_without_code_column() {
        assert!(filter_codes("COUNTRY,GDP\nJapan,4770.0\n").is_err());
    }
}
