//! Easing curves.
//!
//! Names follow the usual power family: `Power2` is cubic, `Power3` quartic,
//! `Power4` quintic. All curves map 0.0 to 0.0 and 1.0 to 1.0.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    /// Cubic ease-out. Fades.
    #[default]
    Power2Out,
    /// Quartic ease-out. Social link entrance.
    Power3Out,
    /// Quartic ease-in. Panel exit.
    Power3In,
    /// Quartic S-curve. Icon returning to rest.
    Power3InOut,
    /// Quintic ease-out. Panel and label entrance.
    Power4Out,
}

impl Ease {
    /// Apply the curve to a progress value, clamped to 0.0..=1.0 first.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power3In => t.powi(4),
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power3In,
        Ease::Power3InOut,
        Ease::Power4Out,
    ];

    #[test]
    fn test_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn test_clamps_out_of_range() {
        for ease in ALL {
            assert_eq!(ease.apply(-3.0), ease.apply(0.0));
            assert_eq!(ease.apply(7.5), ease.apply(1.0));
        }
    }

    #[test]
    fn test_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for step in 1..=100 {
                let v = ease.apply(step as f64 / 100.0);
                assert!(v >= prev, "{ease:?} decreased at step {step}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_curves_lead_in_curves() {
        assert!(Ease::Power4Out.apply(0.25) > Ease::Linear.apply(0.25));
        assert!(Ease::Power3In.apply(0.25) < Ease::Linear.apply(0.25));
        assert!((Ease::Power3InOut.apply(0.5) - 0.5).abs() < 1e-12);
    }
}
