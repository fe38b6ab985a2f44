//! Facility efficiency and environmental impact indicators.
//!
//! Every function here is total: degenerate denominators produce the zero sentinel instead of
//! an error, infinity, or `NaN`.

mod efficiency;
mod emissions;
mod pue;
mod rating;
mod status;
mod summary;

pub use self::{
    efficiency::{EfficiencyMetrics, compute_efficiency_metrics},
    emissions::{
        EmissionFactors,
        compute_carbon_credits,
        compute_co2_avoided,
        compute_total_co2_avoided,
    },
    pue::{Pue, compute_pue},
    rating::PueRating,
    status::{EnergyMode, EnergyStatus, classify_energy_status},
    summary::{DailySummary, compute_daily_summary},
};
