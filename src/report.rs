//! Exportable CSV and JSON reports.

use std::io::Write;

use chrono::{DateTime, FixedOffset, NaiveDate};
use itertools::Itertools;
use serde::Serialize;

use crate::{
    fixture::{DailyPue, EnergyTimeseries},
    kpi::{
        EmissionFactors,
        EnergyMode,
        Pue,
        PueRating,
        classify_energy_status,
        compute_carbon_credits,
        compute_co2_avoided,
        compute_daily_summary,
        compute_efficiency_metrics,
        compute_pue,
        compute_total_co2_avoided,
    },
    prelude::*,
    quantity::{
        energy::KilowattHours,
        mass::{Kilograms, Tonnes},
    },
    sample::EnergySample,
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    /// Hourly energy flows with the PUE and status.
    Energy,

    /// Hourly avoided emissions and estimated credits.
    Co2,

    /// Daily PUE history with ratings against the target.
    Pue,

    /// Headline indicators as metric–value pairs.
    Snapshot,
}

impl ReportKind {
    const fn slug(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Co2 => "co2",
            Self::Pue => "pue",
            Self::Snapshot => "snapshot",
        }
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

#[must_use]
#[derive(Serialize)]
pub struct EnergyRow {
    pub ts: DateTime<FixedOffset>,
    pub solar_kwh: KilowattHours,
    pub grid_kwh: KilowattHours,
    pub it_load_kwh: KilowattHours,
    pub overhead_kwh: KilowattHours,
    pub pue: Pue,
    pub status: EnergyMode,
}

impl From<&EnergySample> for EnergyRow {
    fn from(sample: &EnergySample) -> Self {
        Self {
            ts: sample.timestamp,
            solar_kwh: sample.solar,
            grid_kwh: sample.grid,
            it_load_kwh: sample.it_load,
            overhead_kwh: sample.overhead,
            pue: compute_pue(sample),
            status: classify_energy_status(sample).mode,
        }
    }
}

#[must_use]
#[derive(Serialize)]
pub struct Co2Row {
    pub ts: DateTime<FixedOffset>,
    pub co2_avoided_kg: Kilograms,
    pub credits_estimated: Tonnes,
}

impl Co2Row {
    fn new(sample: &EnergySample, factors: &EmissionFactors) -> Self {
        let co2_avoided_kg = compute_co2_avoided(sample.solar, factors);
        Self {
            ts: sample.timestamp,
            co2_avoided_kg,
            credits_estimated: compute_carbon_credits(co2_avoided_kg),
        }
    }
}

#[must_use]
#[derive(Serialize)]
pub struct PueRow {
    pub date: NaiveDate,
    pub pue: Pue,
    pub rating: PueRating,
}

impl PueRow {
    fn new(day: &DailyPue, target: Pue) -> Self {
        Self { date: day.date, pue: day.pue, rating: PueRating::rate(day.pue, target) }
    }
}

#[must_use]
#[derive(Serialize)]
pub struct SnapshotRow {
    pub metric: &'static str,
    pub value: String,
}

impl SnapshotRow {
    fn new(metric: &'static str, value: &impl ToString) -> Self {
        Self { metric, value: value.to_string() }
    }
}

#[must_use]
pub enum Report {
    Energy(Vec<EnergyRow>),
    Co2(Vec<Co2Row>),
    Pue(Vec<PueRow>),
    Snapshot(Vec<SnapshotRow>),
}

impl Report {
    #[instrument(skip_all, fields(kind = ?kind, n_samples = timeseries.by_hour.len()))]
    pub fn build(
        kind: ReportKind,
        timeseries: &EnergyTimeseries,
        factors: &EmissionFactors,
        pue_target: Pue,
    ) -> Self {
        let samples = timeseries.by_hour.as_slice();
        match kind {
            ReportKind::Energy => Self::Energy(samples.iter().map(EnergyRow::from).collect_vec()),
            ReportKind::Co2 => {
                Self::Co2(samples.iter().map(|sample| Co2Row::new(sample, factors)).collect_vec())
            }
            ReportKind::Pue => Self::Pue(
                timeseries.pue_daily.iter().map(|day| PueRow::new(day, pue_target)).collect_vec(),
            ),
            ReportKind::Snapshot => Self::Snapshot(Self::snapshot(samples, factors, pue_target)),
        }
    }

    fn snapshot(
        samples: &[EnergySample],
        factors: &EmissionFactors,
        pue_target: Pue,
    ) -> Vec<SnapshotRow> {
        let summary = compute_daily_summary(samples);
        let efficiency = compute_efficiency_metrics(samples);
        let co2_avoided = compute_total_co2_avoided(samples, factors);
        let current_pue = samples.last().map_or(Pue::NO_DATA, compute_pue);
        vec![
            SnapshotRow::new("Current PUE", &current_pue),
            SnapshotRow::new("PUE rating", &PueRating::rate(current_pue, pue_target)),
            SnapshotRow::new("Average PUE", &summary.avg_pue),
            SnapshotRow::new("Solar generation", &summary.solar),
            SnapshotRow::new("Grid energy", &summary.grid),
            SnapshotRow::new("CO₂ avoided", &co2_avoided),
            SnapshotRow::new("Estimated credits", &compute_carbon_credits(co2_avoided)),
            SnapshotRow::new("Solar share", &efficiency.solar_percentage),
            SnapshotRow::new("Efficiency score", &efficiency.efficiency_score),
        ]
    }

    pub const fn kind(&self) -> ReportKind {
        match self {
            Self::Energy(_) => ReportKind::Energy,
            Self::Co2(_) => ReportKind::Co2,
            Self::Pue(_) => ReportKind::Pue,
            Self::Snapshot(_) => ReportKind::Snapshot,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Energy(rows) => rows.len(),
            Self::Co2(rows) => rows.len(),
            Self::Pue(rows) => rows.len(),
            Self::Snapshot(rows) => rows.len(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// For example, `energy_30d.csv`.
    #[must_use]
    pub fn file_name(&self, period: &str, format: ReportFormat) -> String {
        format!("{}_{period}.{}", self.kind().slug(), format.extension())
    }

    pub fn write(&self, format: ReportFormat, writer: impl Write) -> Result {
        match self {
            Self::Energy(rows) => write_rows(rows, format, writer),
            Self::Co2(rows) => write_rows(rows, format, writer),
            Self::Pue(rows) => write_rows(rows, format, writer),
            Self::Snapshot(rows) => write_rows(rows, format, writer),
        }
    }
}

fn write_rows<R: Serialize>(rows: &[R], format: ReportFormat, mut writer: impl Write) -> Result {
    match format {
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(writer);
            for row in rows {
                writer.serialize(row).context("failed to write a CSV row")?;
            }
            writer.flush()?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows).context("failed to write the JSON")?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    debug!(n_rows = rows.len(), ?format, "written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use serde_json::Value;

    use super::*;
    use crate::{quantity::intensity::KilogramsPerKilowattHour, sample::parse_timestamp};

    const FACTORS: EmissionFactors = EmissionFactors {
        solar: KilogramsPerKilowattHour(0.045),
        grid: KilogramsPerKilowattHour(0.4),
    };

    fn timeseries() -> Result<EnergyTimeseries> {
        let by_hour = vec![
            EnergySample::builder()
                .timestamp(parse_timestamp("2025-09-17T12:00:00Z")?)
                .solar(40.0)
                .grid(20.0)
                .it_load(50.0)
                .overhead(10.0)
                .build(),
            EnergySample::builder()
                .timestamp(parse_timestamp("2025-09-17T23:00:00Z")?)
                .grid(60.0)
                .it_load(52.0)
                .overhead(8.0)
                .build(),
        ];
        let pue_daily = vec![
            DailyPue { date: NaiveDate::from_ymd_opt(2025, 9, 16).unwrap(), pue: Pue(1.31) },
            DailyPue { date: NaiveDate::from_ymd_opt(2025, 9, 17).unwrap(), pue: Pue(1.18) },
        ];
        Ok(EnergyTimeseries { by_hour, pue_daily })
    }

    fn render(report: &Report, format: ReportFormat) -> Result<String> {
        let mut buffer = Vec::new();
        report.write(format, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    #[test]
    fn test_energy_csv() -> Result {
        let report = Report::build(ReportKind::Energy, &timeseries()?, &FACTORS, Pue(1.3));
        let csv = render(&report, ReportFormat::Csv)?;
        let lines = csv.lines().collect_vec();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ts,solar_kwh,grid_kwh,it_load_kwh,overhead_kwh,pue,status");
        assert!(lines[1].starts_with("2025-09-17T12:00:00"));
        assert!(lines[1].ends_with(",40.0,20.0,50.0,10.0,1.2,solar"));
        assert!(lines[2].ends_with(",off-peak"));
        Ok(())
    }

    #[test]
    fn test_co2_json() -> Result {
        let report = Report::build(ReportKind::Co2, &timeseries()?, &FACTORS, Pue(1.3));
        let rows: Vec<Value> = serde_json::from_str(&render(&report, ReportFormat::Json)?)?;
        assert_eq!(rows.len(), 2);
        assert_abs_diff_eq!(rows[0]["co2_avoided_kg"].as_f64().unwrap(), 14.2, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[0]["credits_estimated"].as_f64().unwrap(), 0.0142, epsilon = 1e-12);
        assert_abs_diff_eq!(rows[1]["co2_avoided_kg"].as_f64().unwrap(), 0.0);
        Ok(())
    }

    #[test]
    fn test_snapshot() -> Result {
        let report = Report::build(ReportKind::Snapshot, &timeseries()?, &FACTORS, Pue(1.3));
        let Report::Snapshot(rows) = &report else { panic!("not a snapshot") };
        assert_eq!(rows[0].metric, "Current PUE");
        assert_eq!(rows[0].value, "1.15");
        assert_eq!(rows[1].value, "Excellent");
        assert_eq!(rows[5].value, "14.2 kg");
        let csv = render(&report, ReportFormat::Csv)?;
        assert!(csv.starts_with("metric,value\n"));
        Ok(())
    }

    #[test]
    fn test_pue_history() -> Result {
        let report = Report::build(ReportKind::Pue, &timeseries()?, &FACTORS, Pue(1.3));
        assert_eq!(report.kind(), ReportKind::Pue);
        assert_eq!(report.len(), 2);

        let csv = render(&report, ReportFormat::Csv)?;
        assert_eq!(csv, "date,pue,rating\n2025-09-16,1.31,good\n2025-09-17,1.18,excellent\n");

        let rows: Vec<Value> = serde_json::from_str(&render(&report, ReportFormat::Json)?)?;
        assert_eq!(rows[0]["date"], "2025-09-16");
        assert_abs_diff_eq!(rows[1]["pue"].as_f64().unwrap(), 1.18);
        assert_eq!(rows[1]["rating"], "excellent");
        assert_eq!(report.file_name("30d", ReportFormat::Json), "pue_30d.json");
        Ok(())
    }

    #[test]
    fn test_empty_report() -> Result {
        let report = Report::build(ReportKind::Energy, &EnergyTimeseries::default(), &FACTORS, Pue(1.3));
        assert!(report.is_empty());
        assert_eq!(render(&report, ReportFormat::Csv)?, "");
        assert_eq!(render(&report, ReportFormat::Json)?.trim(), "[]");
        Ok(())
    }

    #[test]
    fn test_empty_snapshot() -> Result {
        let report = Report::build(ReportKind::Snapshot, &EnergyTimeseries::default(), &FACTORS, Pue(1.3));
        assert_eq!(report.len(), 9);
        Ok(())
    }

    #[test]
    fn test_file_name() {
        let report = Report::Co2(Vec::new());
        assert_eq!(report.file_name("30d", ReportFormat::Csv), "co2_30d.csv");
        assert_eq!(report.file_name("7d", ReportFormat::Json), "co2_7d.json");
    }
}
