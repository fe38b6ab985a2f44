use std::fmt::{Display, Formatter};

use comfy_table::Color;
use serde::Serialize;

use crate::kpi::pue::Pue;

/// PUE grade relative to a target, in steps of 0.1 above it.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PueRating {
    Excellent,
    Good,
    Attention,
    Critical,
}

impl PueRating {
    pub fn rate(pue: Pue, target: Pue) -> Self {
        if pue <= target {
            Self::Excellent
        } else if pue.0 <= target.0 + 0.1 {
            Self::Good
        } else if pue.0 <= target.0 + 0.2 {
            Self::Attention
        } else {
            Self::Critical
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Excellent => Color::Green,
            Self::Good => Color::Cyan,
            Self::Attention => Color::DarkYellow,
            Self::Critical => Color::Red,
        }
    }
}

impl Display for PueRating {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Attention => write!(f, "Attention"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}
