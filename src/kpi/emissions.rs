use serde::{Deserialize, Serialize};

use crate::{
    quantity::{
        energy::KilowattHours,
        intensity::KilogramsPerKilowattHour,
        mass::{Kilograms, Tonnes},
    },
    sample::EnergySample,
};

/// Emission intensities of the two energy sources, always supplied by the caller.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionFactors {
    #[serde(rename = "solar_kg_per_kwh")]
    pub solar: KilogramsPerKilowattHour,

    #[serde(rename = "grid_kg_per_kwh")]
    pub grid: KilogramsPerKilowattHour,
}

impl EmissionFactors {
    /// Emissions displaced by each solar kilowatt-hour.
    ///
    /// Negative when the solar factor exceeds the grid one, which is passed through as is.
    pub fn avoided_per_kwh(&self) -> KilogramsPerKilowattHour {
        self.grid - self.solar
    }
}

pub fn compute_co2_avoided(solar: KilowattHours, factors: &EmissionFactors) -> Kilograms {
    solar * factors.avoided_per_kwh()
}

pub fn compute_total_co2_avoided(samples: &[EnergySample], factors: &EmissionFactors) -> Kilograms {
    samples.iter().map(|sample| compute_co2_avoided(sample.solar, factors)).sum()
}

/// Convert the avoided emissions into tonnes, one credit per tonne. No rounding applied.
pub fn compute_carbon_credits(co2_avoided: Kilograms) -> Tonnes {
    co2_avoided.into()
}
