//! Core domain types and constants for the global financial dashboard.
//!
//! This crate holds everything the chart builders and the data layer agree
//! on: the fixed country lists, the enumerated metric set, the mapping from
//! countries to ISO-3 region codes and exchange-rate columns, the error
//! taxonomy, and date helpers for the exchange-rate index format.
//!
//! All lists are compile-time constants. Handlers receive them through an
//! explicitly constructed dashboard value rather than module globals, so a
//! process has exactly one immutable configuration for its whole lifetime.

pub mod country;
pub mod dates;
pub mod error;
pub mod metric;

pub use country::{MapCountry, MAP_COUNTRIES, PANEL_COUNTRIES};
pub use error::ChartError;
pub use metric::Metric;

/// First year of the panel table; the animated scatter shows this year
/// before any frame plays.
pub const BASE_YEAR: i32 = 1995;

/// Number of leading years the line chart skips. The first two columns of
/// the source panel contain known-bad values, so traces start at
/// `first_year + LEADING_YEAR_OFFSET`.
pub const LEADING_YEAR_OFFSET: usize = 2;
