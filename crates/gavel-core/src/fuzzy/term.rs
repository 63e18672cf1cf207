//! Membership functions and named terms.

/// Maps a crisp value to a degree of truth in [0, 1].
///
/// Only the two shapes the bidding controller uses are supported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MembershipFunction {
    /// 0 below `a`, linear rise on [a, b], 1 on [b, c], linear fall on [c, d],
    /// 0 above `d`. Vertices must satisfy a <= b <= c <= d; degenerate
    /// shoulders (a == b, c == d) are fine and never divide by zero.
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },

    /// exp(-(x - mean)^2 / (2 * sigma^2)).
    Gaussian { mean: f64, sigma: f64 },
}

impl MembershipFunction {
    /// Degree of membership of `x`.
    ///
    /// Defined for every real input; values outside a variable's range simply
    /// follow the same formulas (0 past a trapezoid's shoulders).
    pub fn evaluate(&self, x: f64) -> f64 {
        match *self {
            Self::Trapezoid { a, b, c, d } => {
                if x < a || x > d {
                    0.0
                } else if x >= b && x <= c {
                    1.0
                } else if x < b {
                    // here a <= x < b, so b > a
                    (x - a) / (b - a)
                } else {
                    // here c < x <= d, so d > c
                    (d - x) / (d - c)
                }
            }
            Self::Gaussian { mean, sigma } => {
                (-(x - mean).powi(2) / (2.0 * sigma.powi(2))).exp()
            }
        }
    }
}

/// A named fuzzy set over a variable's range.
#[derive(Debug, Clone)]
pub struct Term {
    name: String,
    shape: MembershipFunction,
}

impl Term {
    pub fn new(name: impl Into<String>, shape: MembershipFunction) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.shape.evaluate(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::left_shoulder(0.0, 1.0)]
    #[case::plateau(2.5, 1.0)]
    #[case::plateau_end(5.0, 1.0)]
    #[case::falling(7.5, 0.5)]
    #[case::right_foot(10.0, 0.0)]
    #[case::below_range(-1.0, 0.0)]
    #[case::above_range(12.0, 0.0)]
    fn trapezoid_with_degenerate_left_shoulder(#[case] x: f64, #[case] expected: f64) {
        let shape = MembershipFunction::Trapezoid {
            a: 0.0,
            b: 0.0,
            c: 5.0,
            d: 10.0,
        };
        assert!((shape.evaluate(x) - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case::left_foot(1.0, 0.0)]
    #[case::rising(1.5, 0.5)]
    #[case::plateau(2.5, 1.0)]
    #[case::falling(3.5, 0.5)]
    #[case::right_foot(4.0, 0.0)]
    fn trapezoid_full_shape(#[case] x: f64, #[case] expected: f64) {
        let shape = MembershipFunction::Trapezoid {
            a: 1.0,
            b: 2.0,
            c: 3.0,
            d: 4.0,
        };
        assert!((shape.evaluate(x) - expected).abs() < 1e-12);
    }

    #[test]
    fn gaussian_peaks_at_mean() {
        let shape = MembershipFunction::Gaussian {
            mean: 5.0,
            sigma: 1.0,
        };
        assert_eq!(shape.evaluate(5.0), 1.0);
    }

    #[rstest]
    #[case(0.5)]
    #[case(1.0)]
    #[case(2.7)]
    #[case(10.0)]
    fn gaussian_is_symmetric_about_mean(#[case] d: f64) {
        let shape = MembershipFunction::Gaussian {
            mean: 5.0,
            sigma: 1.0,
        };
        assert!((shape.evaluate(5.0 + d) - shape.evaluate(5.0 - d)).abs() < 1e-12);
    }

    #[test]
    fn gaussian_decays_with_distance() {
        let shape = MembershipFunction::Gaussian {
            mean: 0.0,
            sigma: 2.0,
        };
        assert!(shape.evaluate(1.0) > shape.evaluate(2.0));
        assert!(shape.evaluate(2.0) > shape.evaluate(4.0));
        assert!(shape.evaluate(4.0) > 0.0);
    }

    #[test]
    fn term_evaluates_its_shape() {
        let term = Term::new(
            "LOWER",
            MembershipFunction::Trapezoid {
                a: 0.0,
                b: 0.0,
                c: 5.0,
                d: 10.0,
            },
        );
        assert_eq!(term.name(), "LOWER");
        assert_eq!(term.evaluate(2.0), 1.0);
    }
}
