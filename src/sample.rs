use bon::Builder;
use chrono::{DateTime, FixedOffset, NaiveDateTime, ParseError, Timelike, Utc};
use serde::{Deserialize, Deserializer};

use crate::{prelude::*, quantity::energy::KilowattHours};

/// Single hourly reading of the facility energy flows.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Builder)]
pub struct EnergySample {
    #[serde(rename = "ts", deserialize_with = "deserialize_timestamp")]
    #[builder(default = DateTime::<Utc>::UNIX_EPOCH.fixed_offset())]
    pub timestamp: DateTime<FixedOffset>,

    /// Energy drawn from the on-site solar generation.
    #[serde(rename = "solar_kwh")]
    #[builder(default, into)]
    pub solar: KilowattHours,

    /// Energy imported from the grid.
    #[serde(rename = "grid_kwh")]
    #[builder(default, into)]
    pub grid: KilowattHours,

    /// Energy consumed by the IT equipment.
    #[serde(rename = "it_load_kwh")]
    #[builder(default, into)]
    pub it_load: KilowattHours,

    /// Cooling, lighting, power conversion losses and the rest of the facility.
    #[serde(rename = "overhead_kwh")]
    #[builder(default, into)]
    pub overhead: KilowattHours,
}

impl EnergySample {
    /// Wall-clock hour of the reading at its own UTC offset.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Check that none of the energy flows is negative.
    pub fn validate(&self) -> Result {
        for (name, value) in [
            ("solar_kwh", self.solar),
            ("grid_kwh", self.grid),
            ("it_load_kwh", self.it_load),
            ("overhead_kwh", self.overhead),
        ] {
            ensure!(
                value >= KilowattHours::ZERO,
                "`{name}` is negative ({value:?}) in the sample at {}",
                self.timestamp,
            );
        }
        Ok(())
    }
}

/// Parse an ISO-8601 timestamp, assuming UTC when the offset is missing.
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(text).or_else(|error| {
        text.parse::<NaiveDateTime>()
            .map(|naive| naive.and_utc().fixed_offset())
            .map_err(|_| error)
    })
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<FixedOffset>, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_timestamp(&text).map_err(serde::de::Error::custom)
}
