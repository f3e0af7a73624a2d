//! Fixed country lists and the country / region-code / currency alignment.

/// The ten countries plotted by the scatter timeline and the line chart,
/// in trace order.
pub const PANEL_COUNTRIES: [&str; 10] = [
    "China",
    "India",
    "Brazil",
    "Russian Federation",
    "Japan",
    "Mexico",
    "Spain",
    "Saudi Arabia",
    "Poland",
    "Canada",
];

/// A map-whitelisted country with its ISO-3 region code and the exchange
/// table column carrying its currency.
///
/// The `currency` field is the literal column header of the exchange CSV,
/// which is what lets the choropleth join a date's row onto map regions
/// instead of relying on column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapCountry {
    pub name: &'static str,
    pub code: &'static str,
    pub currency: &'static str,
}

/// The 29 countries shown on the exchange-rate choropleth.
///
/// The euro area is excluded by design: the source exchange table drops its
/// `Euro (EUR)` column, so no euro-zone member appears here.
pub const MAP_COUNTRIES: [MapCountry; 29] = [
    MapCountry { name: "Australia", code: "AUS", currency: "Australian Dollar (AUD)" },
    MapCountry { name: "Botswana", code: "BWA", currency: "Botswana Pula (BWP)" },
    MapCountry { name: "Brazil", code: "BRA", currency: "Brazilian Real (BRL)" },
    MapCountry { name: "Brunei", code: "BRN", currency: "Brunei Dollar (BND)" },
    MapCountry { name: "Canada", code: "CAN", currency: "Canadian Dollar (CAD)" },
    MapCountry { name: "Chile", code: "CHL", currency: "Chilean Peso (CLP)" },
    MapCountry { name: "China", code: "CHN", currency: "Chinese Yuan (CNY)" },
    MapCountry { name: "Colombia", code: "COL", currency: "Colombian Peso (COP)" },
    MapCountry { name: "Denmark", code: "DNK", currency: "Danish Krone (DKK)" },
    MapCountry { name: "India", code: "IND", currency: "Indian Rupee (INR)" },
    MapCountry { name: "Japan", code: "JPN", currency: "Japanese Yen (JPY)" },
    MapCountry { name: "Korea, South", code: "KOR", currency: "Korean Won (KRW)" },
    MapCountry { name: "Kuwait", code: "KWT", currency: "Kuwaiti Dinar (KWD)" },
    MapCountry { name: "Malaysia", code: "MYS", currency: "Malaysian Ringgit (MYR)" },
    MapCountry { name: "New Zealand", code: "NZL", currency: "New Zealand Dollar (NZD)" },
    MapCountry { name: "Norway", code: "NOR", currency: "Norwegian Krone (NOK)" },
    MapCountry { name: "Oman", code: "OMN", currency: "Omani Rial (OMR)" },
    MapCountry { name: "Poland", code: "POL", currency: "Polish Zloty (PLN)" },
    MapCountry { name: "Qatar", code: "QAT", currency: "Qatari Riyal (QAR)" },
    MapCountry { name: "Saudi Arabia", code: "SAU", currency: "Saudi Arabian Riyal (SAR)" },
    MapCountry { name: "Singapore", code: "SGP", currency: "Singapore Dollar (SGD)" },
    MapCountry { name: "South Africa", code: "ZAF", currency: "South African Rand (ZAR)" },
    MapCountry { name: "Sweden", code: "SWE", currency: "Swedish Krona (SEK)" },
    MapCountry { name: "Switzerland", code: "CHE", currency: "Swiss Franc (CHF)" },
    MapCountry { name: "Thailand", code: "THA", currency: "Thai Baht (THB)" },
    MapCountry { name: "Trinidad and Tobago", code: "TTO", currency: "Trinidad and Tobago Dollar (TTD)" },
    MapCountry { name: "United Arab Emirates", code: "ARE", currency: "U.A.E. Dirham (AED)" },
    MapCountry { name: "United Kingdom", code: "GBR", currency: "U.K. Pound (GBP)" },
    MapCountry { name: "United States", code: "USA", currency: "U.S. Dollar (USD)" },
];

/// Look up the map whitelist entry for a country display name.
pub fn map_country(name: &str) -> Option<&'static MapCountry> {
    MAP_COUNTRIES.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_countries_are_ten_and_distinct() {
        assert_eq!(PANEL_COUNTRIES.len(), 10);
        for (i, a) in PANEL_COUNTRIES.iter().enumerate() {
            for b in &PANEL_COUNTRIES[i + 1..] {
                assert_ne!(a, b, "duplicate panel country {a}");
            }
        }
    }

    #[test]
    fn map_codes_are_unique_iso3() {
        for (i, a) in MAP_COUNTRIES.iter().enumerate() {
            assert_eq!(a.code.len(), 3, "{} has a non-ISO3 code", a.name);
            for b in &MAP_COUNTRIES[i + 1..] {
                assert_ne!(a.code, b.code, "duplicate region code {}", a.code);
            }
        }
    }

    #[test]
    fn euro_is_not_a_map_currency() {
        assert!(
            MAP_COUNTRIES.iter().all(|c| !c.currency.contains("EUR")),
            "the Euro column is dropped at load and must not be mapped"
        );
    }

    #[test]
    fn lookup_by_display_name() {
        let japan = map_country("Japan").expect("Japan is whitelisted");
        assert_eq!(japan.code, "JPN");
        assert_eq!(japan.currency, "Japanese Yen (JPY)");
        assert!(map_country("Atlantis").is_none());
    }
}
