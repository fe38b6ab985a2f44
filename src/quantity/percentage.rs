quantity!(
    /// Percentage on the `0..=100` scale.
    Percentage,
    "%",
    display: custom
);

impl Percentage {
    pub const HUNDRED: Self = Self(100.0);

    /// Share of `part` in `whole`, or zero unless the whole is positive.
    pub fn share(part: f64, whole: f64) -> Self {
        if whole > 0.0 { Self(100.0 * part / whole) } else { Self::ZERO }
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_share() {
        assert_abs_diff_eq!(Percentage::share(85.0, 120.0).0, 70.833_333, epsilon = 1e-6);
        assert_eq!(Percentage::share(5.0, 0.0), Percentage::ZERO);
        assert_eq!(Percentage::share(5.0, -1.0), Percentage::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Percentage(70.833).to_string(), "70.8%");
    }
}
