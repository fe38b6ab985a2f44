use std::path::PathBuf;

use clap::{Parser, Subcommand};
use voltera::{
    kpi::{EmissionFactors, Pue},
    quantity::intensity::KilogramsPerKilowattHour,
    report::{ReportFormat, ReportKind},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Energy time series fixture with the `by_hour` and `pue_daily` series.
    #[clap(long, env = "ENERGY_FIXTURE_PATH", default_value = "data/energy_timeseries.json")]
    pub fixture: PathBuf,

    #[clap(flatten)]
    pub emission_factors: EmissionFactorsArgs,

    /// PUE target for the ratings, The Green Grid recommends 1.3 and below.
    #[clap(long = "pue-target", env = "PUE_TARGET", default_value = "1.3")]
    pub pue_target: Pue,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Period totals, average PUE, avoided emissions, and the energy mix.
    #[clap(name = "summary")]
    Summary,

    /// Hourly samples with their PUE and energy status.
    #[clap(name = "hourly")]
    Hourly,

    /// Daily PUE series with ratings.
    #[clap(name = "daily")]
    Daily,

    /// Status of the latest sample.
    #[clap(name = "status")]
    Status,

    /// Export a report as CSV or JSON.
    #[clap(name = "report")]
    Report(ReportArgs),
}

#[derive(Copy, Clone, Parser)]
pub struct EmissionFactorsArgs {
    /// Lifecycle emissions of the solar generation, kilograms of CO₂ per kilowatt-hour.
    #[clap(long = "solar-kg-per-kwh", env = "SOLAR_KG_PER_KWH", default_value = "0.045")]
    pub solar: KilogramsPerKilowattHour,

    /// Emissions of the grid energy, kilograms of CO₂ per kilowatt-hour.
    #[clap(long = "grid-kg-per-kwh", env = "GRID_KG_PER_KWH", default_value = "0.4")]
    pub grid: KilogramsPerKilowattHour,
}

impl From<EmissionFactorsArgs> for EmissionFactors {
    fn from(args: EmissionFactorsArgs) -> Self {
        Self { solar: args.solar, grid: args.grid }
    }
}

#[derive(Parser)]
pub struct ReportArgs {
    #[clap(long, value_enum, default_value = "energy")]
    pub kind: ReportKind,

    #[clap(long, value_enum, default_value = "csv")]
    pub format: ReportFormat,

    /// Period label used in the file name.
    #[clap(long, default_value = "30d")]
    pub period: String,

    /// Directory to save the report to. Without it, the report is written to stdout.
    #[clap(long = "output-dir", env = "REPORT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}
