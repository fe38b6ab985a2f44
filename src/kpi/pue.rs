use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::{
    quantity::{energy::KilowattHours, percentage::Percentage},
    sample::EnergySample,
};

quantity!(
    /// Power usage effectiveness: total facility energy over the IT equipment energy.
    Pue,
    "",
    display: custom
);

impl Pue {
    /// Recorded when there is no IT load; downstream logic reads it as «no data».
    pub const NO_DATA: Self = Self::ZERO;

    /// Highest PUE that is still considered efficient.
    pub const EFFICIENT_THRESHOLD: Self = Self(1.3);

    #[must_use]
    pub fn is_no_data(self) -> bool {
        self == Self::NO_DATA
    }

    /// Note that the «no data» sentinel passes this check as well.
    #[must_use]
    pub fn is_efficient(self) -> bool {
        self <= Self::EFFICIENT_THRESHOLD
    }

    /// Gauge needle position, where `1.0` is the empty gauge and `2.5` is the full one.
    pub fn gauge_position(self) -> Percentage {
        Percentage(((self.0 - 1.0) / 1.5 * 100.0).clamp(0.0, 100.0))
    }

    #[must_use]
    pub fn color(self) -> Color {
        if self <= Self(1.2) {
            Color::Green
        } else if self <= Self::EFFICIENT_THRESHOLD {
            Color::DarkYellow
        } else {
            Color::Red
        }
    }
}

impl Display for Pue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// PUE of a single sample, or [`Pue::NO_DATA`] when the IT load is zero.
pub fn compute_pue(sample: &EnergySample) -> Pue {
    if sample.it_load == KilowattHours::ZERO {
        Pue::NO_DATA
    } else {
        Pue((sample.solar + sample.grid) / sample.it_load)
    }
}
