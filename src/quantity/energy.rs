use std::{
    fmt::{Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{intensity::KilogramsPerKilowattHour, mass::Kilograms};

quantity!(KilowattHours, "kWh", display: custom);

impl KilowattHours {
    pub const ONE_WATT_HOUR: Self = Self(0.001);
}

impl Display for KilowattHours {
    /// Sub-kilowatt-hour values are shown in whole watt-hours.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.abs() < 1.0 {
            write!(f, "{:.0} Wh", self.0 * 1000.0)
        } else {
            write!(f, "{:.1} kWh", self.0)
        }
    }
}

impl Mul<KilogramsPerKilowattHour> for KilowattHours {
    type Output = Kilograms;

    fn mul(self, rhs: KilogramsPerKilowattHour) -> Self::Output {
        Kilograms(self.0 * rhs.0)
    }
}

impl Div<Self> for KilowattHours {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_display() {
        assert_eq!(KilowattHours(12.46).to_string(), "12.5 kWh");
        assert_eq!(KilowattHours(1.0).to_string(), "1.0 kWh");
        assert_eq!(KilowattHours(0.5).to_string(), "500 Wh");
        assert_eq!(KilowattHours::ZERO.to_string(), "0 Wh");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(KilowattHours(-2.0).to_string(), "-2.0 kWh");
        assert_eq!(KilowattHours(-0.5).to_string(), "-500 Wh");
    }

    #[test]
    fn test_mul_intensity() {
        let mass = KilowattHours(85.0) * KilogramsPerKilowattHour(0.355);
        assert_abs_diff_eq!(mass.0, 30.175, epsilon = 1e-9);
    }

    #[test]
    fn test_ratio() {
        assert_abs_diff_eq!(KilowattHours(60.0) / KilowattHours(50.0), 1.2);
    }

    #[test]
    fn test_deserialize_bare_number() -> Result {
        let energy: KilowattHours = serde_json::from_str("42.3")?;
        assert_eq!(energy, KilowattHours(42.3));
        Ok(())
    }
}
