#[macro_use]
mod macros;

pub mod energy;
pub mod intensity;
pub mod mass;
pub mod percentage;

/// Round half away from zero to the given number of decimal places.
///
/// On the non-negative domain this is the same as rounding half up.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::energy::KilowattHours;

    #[test]
    fn test_round_to() {
        assert_abs_diff_eq!(round_to(1.176_923, 2), 1.18);
        assert_abs_diff_eq!(round_to(66.666_666, 1), 66.7);
        assert_abs_diff_eq!(round_to(0.125, 2), 0.13);
        assert_abs_diff_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn test_min_max_clamp() {
        let one = KilowattHours(1.0);
        let two = KilowattHours(2.0);
        let three = KilowattHours(3.0);
        assert_eq!(one.min(two), one);
        assert_eq!(two.max(one), two);
        assert_eq!(KilowattHours(4.0).clamp(two, three), three);
        assert_eq!(one.clamp(two, three), two);
    }

    #[test]
    fn test_sum() {
        let total: KilowattHours = [1.5, 2.0, 0.5].into_iter().map(KilowattHours).sum();
        assert_eq!(total, KilowattHours(4.0));
    }

    #[test]
    fn test_sum_empty() {
        let total: KilowattHours = std::iter::empty::<KilowattHours>().sum();
        assert_eq!(total, KilowattHours::ZERO);
    }
}
