use std::{fs, path::Path};

use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::{kpi::Pue, prelude::*, sample::EnergySample};

/// The energy time series fixture: hourly samples and the pre-aggregated daily PUE.
///
/// Missing and `null` keys are read as empty series.
#[must_use]
#[serde_as]
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EnergyTimeseries {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub by_hour: Vec<EnergySample>,

    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub pue_daily: Vec<DailyPue>,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DailyPue {
    pub date: NaiveDate,
    pub pue: Pue,
}

impl EnergyTimeseries {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let body = fs::read_to_string(path)
            .with_context(|| format!("failed to read the fixture `{}`", path.display()))?;
        Self::from_json(&body)
            .with_context(|| format!("failed to parse the fixture `{}`", path.display()))
    }

    pub fn from_json(body: &str) -> Result<Self> {
        let this: Self = serde_json::from_str(body)?;
        info!(n_samples = this.by_hour.len(), n_days = this.pue_daily.len(), "loaded");
        for sample in &this.by_hour {
            if let Err(error) = sample.validate() {
                warn!("{error:#}");
            }
        }
        Ok(this)
    }

    /// The most recent hourly sample, which the dashboard treats as the current reading.
    #[must_use]
    pub fn latest(&self) -> Option<&EnergySample> {
        self.by_hour.last()
    }
}
