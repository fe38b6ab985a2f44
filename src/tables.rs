use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use voltera::{
    fixture::DailyPue,
    kpi::{
        DailySummary,
        EfficiencyMetrics,
        EnergyStatus,
        Pue,
        PueRating,
        classify_energy_status,
    },
    quantity::mass::{Kilograms, Tonnes},
    sample::EnergySample,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_hourly_table(samples: &[EnergySample]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Time", "Solar", "Grid", "IT load", "Overhead", "PUE", "Mode"]);
    for sample in samples {
        let status = classify_energy_status(sample);
        table.add_row(vec![
            Cell::new(sample.timestamp.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(sample.timestamp.format("%H:%M")),
            Cell::new(sample.solar).set_alignment(CellAlignment::Right).fg(Color::Green),
            Cell::new(sample.grid).set_alignment(CellAlignment::Right),
            Cell::new(sample.it_load).set_alignment(CellAlignment::Right),
            Cell::new(sample.overhead)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(status.pue).set_alignment(CellAlignment::Right).fg(status.pue.color()),
            Cell::new(status.mode).fg(status.mode.color()),
        ]);
    }
    table
}

pub fn build_energy_table(summary: &DailySummary) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::from("Solar").fg(Color::Green),
            Cell::from("Grid"),
            Cell::from("IT load"),
            Cell::from("Overhead"),
            Cell::from("Total\nconsumption"),
            Cell::from("Net\nconsumption"),
            Cell::from("Average\nPUE"),
        ])
        .add_row(vec![
            Cell::from(summary.solar).fg(Color::Green),
            Cell::from(summary.grid),
            Cell::from(summary.it_load),
            Cell::from(summary.overhead),
            Cell::from(summary.total_consumption),
            Cell::from(summary.net_consumption),
            Cell::from(summary.avg_pue).fg(summary.avg_pue.color()),
        ]);
    table
}

pub fn build_carbon_table(
    co2_avoided: Kilograms,
    credits: Tonnes,
    efficiency: &EfficiencyMetrics,
) -> Table {
    let avoided_color = if co2_avoided >= Kilograms::ZERO { Color::Green } else { Color::Red };
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::from("CO₂\navoided").fg(avoided_color),
            Cell::from("Estimated\ncredits"),
            Cell::from("Solar\nshare"),
            Cell::from("Grid\nshare"),
            Cell::from("Efficiency\nscore"),
        ])
        .add_row(vec![
            Cell::from(co2_avoided).fg(avoided_color),
            Cell::from(credits),
            Cell::from(efficiency.solar_percentage).fg(Color::Green),
            Cell::from(efficiency.grid_percentage),
            Cell::from(efficiency.efficiency_score).add_attribute(Attribute::Bold),
        ]);
    table
}

pub fn build_daily_table(pue_daily: &[DailyPue], target: Pue) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "PUE", "Rating"]);
    for day in pue_daily {
        let rating = PueRating::rate(day.pue, target);
        table.add_row(vec![
            Cell::new(day.date.format("%a %b %d")),
            Cell::new(day.pue).set_alignment(CellAlignment::Right).fg(day.pue.color()),
            Cell::new(rating).fg(rating.color()),
        ]);
    }
    table
}

pub fn build_status_table(sample: &EnergySample, status: &EnergyStatus, target: Pue) -> Table {
    let rating = PueRating::rate(status.pue, target);
    let mut table = new_table();
    table
        .set_header(vec!["Time", "Mode", "PUE", "Gauge", "Rating", "Efficient"])
        .add_row(vec![
            Cell::new(sample.timestamp.format("%b %d %H:%M")),
            Cell::new(status.mode).fg(status.mode.color()),
            Cell::new(if status.pue.is_no_data() {
                "n/a".to_string()
            } else {
                status.pue.to_string()
            })
            .fg(status.pue.color()),
            Cell::new(status.pue.gauge_position()).set_alignment(CellAlignment::Right),
            Cell::new(rating).fg(rating.color()),
            Cell::new(if status.is_efficient { "yes" } else { "no" }).fg(if status.is_efficient {
                Color::Green
            } else {
                Color::Red
            }),
        ]);
    table
}
