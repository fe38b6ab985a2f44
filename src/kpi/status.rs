use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::{
    kpi::pue::{Pue, compute_pue},
    quantity::energy::KilowattHours,
    sample::EnergySample,
};

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnergyMode {
    /// The solar generation is active.
    Solar,

    /// Night tariff hours: before 06:00 and from 23:00.
    OffPeak,

    Peak,
}

impl Display for EnergyMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Solar => write!(f, "solar"),
            Self::OffPeak => write!(f, "off-peak"),
            Self::Peak => write!(f, "peak"),
        }
    }
}

impl EnergyMode {
    pub const fn color(self) -> Color {
        match self {
            Self::Solar => Color::Green,
            Self::OffPeak => Color::Blue,
            Self::Peak => Color::DarkYellow,
        }
    }

    const fn is_off_peak_hour(hour: u32) -> bool {
        hour < 6 || hour > 22
    }
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnergyStatus {
    #[serde(rename = "status")]
    pub mode: EnergyMode,

    pub pue: Pue,

    pub is_efficient: bool,
}

/// Classify the sample, checking the solar activity before the time of day.
pub fn classify_energy_status(sample: &EnergySample) -> EnergyStatus {
    let mode = if sample.solar > KilowattHours::ZERO {
        EnergyMode::Solar
    } else if EnergyMode::is_off_peak_hour(sample.hour()) {
        EnergyMode::OffPeak
    } else {
        EnergyMode::Peak
    };
    let pue = compute_pue(sample);
    EnergyStatus { mode, pue, is_efficient: pue.is_efficient() }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{prelude::*, sample::parse_timestamp};

    fn sample_at(timestamp: &str, solar: f64) -> Result<EnergySample> {
        Ok(EnergySample::builder()
            .timestamp(parse_timestamp(timestamp)?)
            .solar(solar)
            .grid(30.0)
            .it_load(25.0)
            .overhead(5.0)
            .build())
    }

    #[test]
    fn test_off_peak_at_night() -> Result {
        let status = classify_energy_status(&sample_at("2025-09-17T23:00:00Z", 0.0)?);
        assert_eq!(status.mode, EnergyMode::OffPeak);
        assert_abs_diff_eq!(status.pue.0, 1.2);
        assert!(status.is_efficient);
        Ok(())
    }

    #[test]
    fn test_solar_takes_precedence() -> Result {
        let status = classify_energy_status(&sample_at("2025-09-17T23:00:00Z", 5.0)?);
        assert_eq!(status.mode, EnergyMode::Solar);
        assert!(!status.is_efficient);
        Ok(())
    }

    #[test]
    fn test_hour_boundaries() -> Result {
        for (timestamp, expected) in [
            ("2025-09-17T00:00:00Z", EnergyMode::OffPeak),
            ("2025-09-17T05:59:00Z", EnergyMode::OffPeak),
            ("2025-09-17T06:00:00Z", EnergyMode::Peak),
            ("2025-09-17T22:59:00Z", EnergyMode::Peak),
            ("2025-09-17T23:00:00Z", EnergyMode::OffPeak),
        ] {
            assert_eq!(classify_energy_status(&sample_at(timestamp, 0.0)?).mode, expected, "{timestamp}");
        }
        Ok(())
    }

    #[test]
    fn test_hour_at_own_offset() -> Result {
        // 02:00 UTC, but 23:00 at the sample's offset:
        let status = classify_energy_status(&sample_at("2025-09-17T23:00:00-03:00", 0.0)?);
        assert_eq!(status.mode, EnergyMode::OffPeak);
        let status = classify_energy_status(&sample_at("2025-09-17T10:00:00+09:00", 0.0)?);
        assert_eq!(status.mode, EnergyMode::Peak);
        Ok(())
    }

    #[test]
    fn test_no_it_load_is_efficient() {
        let status = classify_energy_status(&EnergySample::builder().grid(3.0).build());
        assert_eq!(status.pue, Pue::NO_DATA);
        assert!(status.is_efficient);
    }

    #[test]
    fn test_serialize() -> Result {
        let status = classify_energy_status(&sample_at("2025-09-17T03:00:00Z", 0.0)?);
        let value = serde_json::to_value(status)?;
        assert_eq!(value["status"], "off-peak");
        assert_eq!(value["is_efficient"], true);
        Ok(())
    }
}
