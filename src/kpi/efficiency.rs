use serde::Serialize;

use crate::{
    kpi::summary::{DailySummary, compute_daily_summary},
    quantity::percentage::Percentage,
    sample::EnergySample,
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EfficiencyMetrics {
    /// Solar share of the net consumption, rounded to one decimal.
    pub solar_percentage: Percentage,

    /// Grid share of the net consumption, rounded to one decimal.
    pub grid_percentage: Percentage,

    /// Display heuristic blending the renewable share with the inverse PUE.
    ///
    /// Not an industry-standard metric: `solar% + (100 − 50 × avg PUE)`, clamped to `0..=100`.
    pub efficiency_score: Percentage,
}

impl From<&DailySummary> for EfficiencyMetrics {
    #[allow(clippy::suboptimal_flops)]
    fn from(summary: &DailySummary) -> Self {
        let solar_percentage = Percentage::share(summary.solar.0, summary.net_consumption.0);
        let grid_percentage = Percentage::share(summary.grid.0, summary.net_consumption.0);

        // The score takes the unrounded share but the rounded mean PUE:
        let efficiency_score = Percentage(solar_percentage.0 + (100.0 - summary.avg_pue.0 * 50.0))
            .clamp(Percentage::ZERO, Percentage::HUNDRED);

        Self {
            solar_percentage: solar_percentage.round_to(1),
            grid_percentage: grid_percentage.round_to(1),
            efficiency_score,
        }
    }
}

pub fn compute_efficiency_metrics(samples: &[EnergySample]) -> EfficiencyMetrics {
    EfficiencyMetrics::from(&compute_daily_summary(samples))
}
