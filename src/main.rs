mod cli;
mod tables;

use std::{
    fs::File,
    io::{BufWriter, stdout},
};

use clap::{Parser, crate_version};
use voltera::{
    fixture::EnergyTimeseries,
    kpi::{
        EfficiencyMetrics,
        EmissionFactors,
        Pue,
        classify_energy_status,
        compute_carbon_credits,
        compute_daily_summary,
        compute_total_co2_avoided,
    },
    prelude::*,
    report::Report,
};

use crate::{
    cli::{Args, Command, ReportArgs},
    tables::{
        build_carbon_table,
        build_daily_table,
        build_energy_table,
        build_hourly_table,
        build_status_table,
    },
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let timeseries = EnergyTimeseries::from_path(&args.fixture)?;
    let factors = EmissionFactors::from(args.emission_factors);

    match args.command {
        Command::Summary => summary(&timeseries, &factors),
        Command::Hourly => println!("{}", build_hourly_table(&timeseries.by_hour)),
        Command::Daily => {
            if timeseries.pue_daily.is_empty() {
                warn!("the fixture has no daily PUE series");
            }
            println!("{}", build_daily_table(&timeseries.pue_daily, args.pue_target));
        }
        Command::Status => {
            let latest = timeseries.latest().context("the fixture has no hourly samples")?;
            let status = classify_energy_status(latest);
            info!(mode = %status.mode, pue = %status.pue, status.is_efficient, "latest sample");
            println!("{}", build_status_table(latest, &status, args.pue_target));
        }
        Command::Report(report_args) => {
            export_report(&report_args, &timeseries, &factors, args.pue_target)?;
        }
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all)]
fn summary(timeseries: &EnergyTimeseries, factors: &EmissionFactors) {
    let summary = compute_daily_summary(&timeseries.by_hour);
    let efficiency = EfficiencyMetrics::from(&summary);
    let co2_avoided = compute_total_co2_avoided(&timeseries.by_hour, factors);
    let credits = compute_carbon_credits(co2_avoided);
    info!(avg_pue = %summary.avg_pue, co2_avoided = %co2_avoided, credits = %credits, "crunched");
    println!("{}", build_energy_table(&summary));
    println!("{}", build_carbon_table(co2_avoided, credits, &efficiency));
}

#[instrument(skip_all, fields(kind = ?args.kind, format = ?args.format))]
fn export_report(
    args: &ReportArgs,
    timeseries: &EnergyTimeseries,
    factors: &EmissionFactors,
    pue_target: Pue,
) -> Result {
    let report = Report::build(args.kind, timeseries, factors, pue_target);
    if report.is_empty() {
        warn!("the report is empty");
    }
    match &args.output_dir {
        Some(output_dir) => {
            let path = output_dir.join(report.file_name(&args.period, args.format));
            let file = File::create(&path)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            report.write(args.format, BufWriter::new(file))?;
            info!(path = %path.display(), n_rows = report.len(), "saved the report");
        }
        None => {
            report.write(args.format, stdout().lock())?;
        }
    }
    Ok(())
}
