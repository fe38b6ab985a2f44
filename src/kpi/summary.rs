use serde::Serialize;

use crate::{
    kpi::pue::{Pue, compute_pue},
    quantity::energy::KilowattHours,
    sample::EnergySample,
};

/// Aggregates over a sequence of samples, recomputed on every call.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DailySummary {
    pub solar: KilowattHours,
    pub grid: KilowattHours,
    pub it_load: KilowattHours,
    pub overhead: KilowattHours,

    /// IT load plus overhead.
    pub total_consumption: KilowattHours,

    /// Solar plus grid.
    pub net_consumption: KilowattHours,

    /// Mean of the per-sample PUE, rounded to two decimals.
    pub avg_pue: Pue,
}

#[derive(Copy, Clone, derive_more::Add, derive_more::Sum)]
struct Totals {
    solar: KilowattHours,
    grid: KilowattHours,
    it_load: KilowattHours,
    overhead: KilowattHours,
    pue: Pue,
}

impl From<&EnergySample> for Totals {
    fn from(sample: &EnergySample) -> Self {
        Self {
            solar: sample.solar,
            grid: sample.grid,
            it_load: sample.it_load,
            overhead: sample.overhead,
            pue: compute_pue(sample),
        }
    }
}

pub fn compute_daily_summary(samples: &[EnergySample]) -> DailySummary {
    if samples.is_empty() {
        return DailySummary::default();
    }
    let totals: Totals = samples.iter().map(Totals::from).sum();
    #[expect(clippy::cast_precision_loss)]
    let avg_pue = (totals.pue / samples.len() as f64).round_to(2);
    DailySummary {
        solar: totals.solar,
        grid: totals.grid,
        it_load: totals.it_load,
        overhead: totals.overhead,
        total_consumption: totals.it_load + totals.overhead,
        net_consumption: totals.solar + totals.grid,
        avg_pue,
    }
}
