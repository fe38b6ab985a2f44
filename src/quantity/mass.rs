use std::fmt::{Display, Formatter};

quantity!(Kilograms, "kg", display: custom);

quantity!(
    /// Metric tonnes of CO₂-equivalent. One tonne is one illustrative carbon credit.
    Tonnes,
    "tCO₂e",
    display: custom
);

impl Display for Kilograms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.abs() < 1.0 {
            write!(f, "{:.0} g", self.0 * 1000.0)
        } else {
            write!(f, "{:.1} kg", self.0)
        }
    }
}

impl Display for Tonnes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} tCO₂e", self.0)
    }
}

impl From<Kilograms> for Tonnes {
    fn from(kilograms: Kilograms) -> Self {
        Self(kilograms.0 / 1000.0)
    }
}
