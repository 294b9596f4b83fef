//! Read position accumulator.

/// Fractional read position in frames, kept in `[0, max)` by wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Phase {
    value: f64,
}

impl Phase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `value`. Call [`wrap`](Self::wrap) once the range is known.
    pub fn at(value: f64) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn set(&mut self, value: f64) {
        self.value = value;
    }

    /// Advance by a signed step and wrap into `[0, max)`.
    ///
    /// `max` must be positive. Steps longer than `max` wrap as many times as
    /// needed.
    #[inline]
    pub fn increment(&mut self, step: f64, max: f64) -> f64 {
        debug_assert!(max > 0.0, "phase range must be positive, got {max}");

        let mut v = self.value + step;
        if v >= max {
            v -= max;
            if v >= max {
                v -= max * (v / max).floor();
            }
        } else if v < 0.0 {
            v += max;
            if v < 0.0 {
                v -= max * (v / max).floor();
            }
        }
        // Rounding in the adds above can land on `max` or a hair below zero.
        if !(0.0..max).contains(&v) {
            v = v.rem_euclid(max);
            if v >= max {
                v = 0.0;
            }
        }
        self.value = v;
        v
    }

    /// Wrap the current value into `[0, max)` without stepping.
    #[inline]
    pub fn wrap(&mut self, max: f64) -> f64 {
        self.increment(0.0, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_forward_wrap() {
        let mut phase = Phase::at(7.5);
        assert_eq!(phase.increment(1.0, 8.0), 0.5);
    }

    #[test]
    fn test_backward_wrap() {
        let mut phase = Phase::new();
        assert_eq!(phase.increment(-0.25, 8.0), 7.75);
    }

    #[test]
    fn test_multi_length_step() {
        let mut phase = Phase::at(1.0);
        assert_abs_diff_eq!(phase.increment(8.0 * 5.0 + 0.5, 8.0), 1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(phase.increment(-8.0 * 3.0 - 1.0, 8.0), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_wrap_shrinks_into_new_range() {
        let mut phase = Phase::at(10.0);
        assert_eq!(phase.wrap(4.0), 2.0);
    }

    #[test]
    fn test_negative_zero_stays_in_range() {
        let mut phase = Phase::at(-1e-20);
        let v = phase.wrap(8.0);
        assert!((0.0..8.0).contains(&v));
    }

    proptest! {
        #[test]
        fn increment_stays_in_range(
            start in 0.0f64..1000.0,
            steps in proptest::collection::vec(-5000.0f64..5000.0, 1..32),
            max in 0.001f64..1000.0,
        ) {
            let mut phase = Phase::at(start);
            phase.wrap(max);
            for step in steps {
                let v = phase.increment(step, max);
                prop_assert!(v >= 0.0 && v < max, "{v} not in [0, {max})");
            }
        }

        #[test]
        fn whole_lengths_return_to_start(
            start in 0.0f64..1.0,
            k in -50i32..50,
            max in 1.0f64..512.0,
        ) {
            let start = start * max;
            let mut phase = Phase::at(start);
            let v = phase.increment(k as f64 * max, max);
            let diff = (v - start).abs();
            // Either the same value or the same point seen across the wrap seam.
            prop_assert!(diff < 1e-6 * max || (max - diff) < 1e-6 * max);
        }
    }
}
