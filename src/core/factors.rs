use serde::{Deserialize, Serialize};

/// Named multiplier sets used to turn a power of ten into a "nice" step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factors {
    /// 2, 2.5, 5, 10
    All,
    /// 2, 5, 10
    Default,
    /// 5, 10
    Only5s,
    /// 10
    Only10s,
}

impl Factors {
    #[must_use]
    pub fn values(self) -> &'static [f64] {
        match self {
            Self::All => &[2.0, 2.5, 5.0, 10.0],
            Self::Default => &[2.0, 5.0, 10.0],
            Self::Only5s => &[5.0, 10.0],
            Self::Only10s => &[10.0],
        }
    }

    /// Returns the smallest `factor * value` (value drawn from this set) that is
    /// `>= ratio`.
    ///
    /// When the set is exhausted the running factor is multiplied by the last
    /// value and the scan starts over. Ratios `<= 1` and non-finite ratios
    /// return `1.0`.
    #[must_use]
    pub fn calculate_factor(self, ratio: f64) -> f64 {
        if !ratio.is_finite() {
            return 1.0;
        }

        let values = self.values();
        let last = values[values.len() - 1];
        let mut factor = 1.0;
        while factor < ratio {
            for value in values {
                let candidate = factor * value;
                if candidate >= ratio {
                    return candidate;
                }
            }
            factor *= last;
        }
        factor
    }
}

#[cfg(test)]
mod tests {
    use super::Factors;

    #[test]
    fn all_factors_pick_smallest_value_at_least_ratio() {
        assert_eq!(Factors::All.calculate_factor(1.0), 1.0);
        assert_eq!(Factors::All.calculate_factor(1.5), 2.0);
        assert_eq!(Factors::All.calculate_factor(2.0), 2.0);
        assert_eq!(Factors::All.calculate_factor(2.1), 2.5);
        assert_eq!(Factors::All.calculate_factor(3.0), 5.0);
        assert_eq!(Factors::All.calculate_factor(7.0), 10.0);
    }

    #[test]
    fn only_10s_jumps_straight_to_ten() {
        assert_eq!(Factors::Only10s.calculate_factor(1.2), 10.0);
        assert_eq!(Factors::Only10s.calculate_factor(9.99), 10.0);
    }

    #[test]
    fn exhausted_set_wraps_to_next_power_of_ten() {
        assert_eq!(Factors::All.calculate_factor(11.0), 20.0);
        assert_eq!(Factors::Default.calculate_factor(42.0), 50.0);
        assert_eq!(Factors::Only10s.calculate_factor(123.0), 1_000.0);
    }

    #[test]
    fn non_finite_ratio_falls_back_to_one() {
        assert_eq!(Factors::All.calculate_factor(f64::NAN), 1.0);
        assert_eq!(Factors::Only5s.calculate_factor(f64::INFINITY), 1.0);
    }
}
