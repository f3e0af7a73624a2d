//! The exchange-rate choropleth: one colored region per whitelisted country
//! for a selected date.

use crate::figure::{ChoroplethTrace, Figure, Layout, Trace};
use crate::{data_err, Dashboard};
use gfd_core::error::ChartError;

impl Dashboard {
    /// Build the choropleth for a date selected in the dropdown.
    ///
    /// `date` must be a literal member of the exchange table's date index;
    /// anything else fails with [`ChartError::InvalidDate`].
    ///
    /// Each whitelisted country's region is colored by that date's exchange
    /// rate for the country's currency, joined through the country-code
    /// table rather than by column position.
    pub fn choropleth(&self, date: &str) -> Result<Figure, ChartError> {
        if !self.db().has_exchange_date(date).map_err(data_err)? {
            return Err(ChartError::InvalidDate(date.to_string()));
        }

        let regions = self.db().query_exchange_row(date).map_err(data_err)?;
        let mut locations = Vec::with_capacity(regions.len());
        let mut z = Vec::with_capacity(regions.len());
        for region in regions {
            locations.push(region.code);
            z.push(region.value);
        }

        let layout = Layout {
            title: Some(format!("Exchange Rate Relative to USD, {date}")),
            ..Layout::default()
        };

        Ok(Figure::new(
            vec![Trace::Choropleth(ChoroplethTrace::exchange_rates(
                locations, z,
            ))],
            layout,
        ))
    }
}
