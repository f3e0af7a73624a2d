//! Command implementations for the dashboard CLI.
//!
//! Provides subcommands for preparing and checking the fixture CSVs the
//! web app embeds at compile time.

use clap::Subcommand;

pub mod fetch_codes;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Download the world GDP country-code dataset and write the filtered
    /// country-code fixture (COUNTRY,CODE,CURRENCY)
    FetchCodes {
        /// Output path for the country-code CSV
        #[arg(short = 'o', long, default_value = "fixtures/country_codes.csv")]
        output: String,
    },

    /// Check the fixture CSVs against the panel completeness invariant
    Validate {
        /// Path to the panel CSV
        #[arg(long, default_value = "fixtures/panel.csv")]
        panel: String,

        /// Path to the exchange-rate CSV
        #[arg(long, default_value = "fixtures/exchange_rates.csv")]
        exchange: String,

        /// Path to the country-code CSV
        #[arg(long, default_value = "fixtures/country_codes.csv")]
        codes: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::FetchCodes { output } => fetch_codes::run_fetch_codes(&output).await,
        Command::Validate {
            panel,
            exchange,
            codes,
        } => validate::run_validate(&panel, &exchange, &codes),
    }
}
