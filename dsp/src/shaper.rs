//! Classification of CV into zones and shaping of the output within them.
//!
//! Left of the plateau window, the output ramps between the left control
//! and the center control. Right of it, between the center control and the
//! right control. Inside of the window, the center control is passed
//! through. The ramp always meets the center value on the plateau edge, so
//! there is no jump when CV crosses it.
//!
//! Which way the ramp goes depends on the side control. When it is below the
//! center, the ramp rises from the side value towards the center. When it is
//! above the center, the slope gets inverted and the ramp falls from the side
//! value down to the center. This allows both peaking and dipping contours
//! from the same set of controls.

use crate::curve::CurveTable;
use crate::plateau::Window;
use crate::sample::{self, MAX};

/// Response of the ramp on one side of the plateau.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShapingMode {
    #[default]
    Linear,
    Exponential,
}

/// Position of CV relative to the plateau window.
///
/// The ratio within side zones goes from `0.0` to `1.0` following CV. In the
/// left zone it reaches `1.0` on the plateau edge, in the right zone it
/// starts with `0.0` on the plateau edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Zone {
    Left(f32),
    Center,
    Right(f32),
}

/// Smoothed values of the three level controls.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Levels {
    pub center: f32,
    pub left: f32,
    pub right: f32,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modes {
    pub left: ShapingMode,
    pub right: ShapingMode,
}

/// Result of a single shaping pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Shaped {
    pub output: f32,
    pub volume_left: f32,
    pub volume_right: f32,
    pub zone: Zone,
}

impl Zone {
    /// Numeric identifier of the zone, used in diagnostics.
    pub fn indicator(&self) -> u8 {
        match self {
            Self::Center => 0,
            Self::Left(_) => 1,
            Self::Right(_) => 2,
        }
    }

    pub fn ratio(&self) -> Option<f32> {
        match self {
            Self::Left(ratio) | Self::Right(ratio) => Some(*ratio),
            Self::Center => None,
        }
    }
}

/// Find in which zone the CV falls.
///
/// Plateau bounds belong to the center zone.
pub fn classify(cv: f32, window: &Window) -> Zone {
    if cv < window.left_bound {
        let ratio = if window.left_bound > 0.0 {
            (cv / window.left_bound).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Zone::Left(ratio)
    } else if cv > window.right_bound {
        let span = MAX - window.right_bound;
        let ratio = if span > 0.0 {
            ((cv - window.right_bound) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Zone::Right(ratio)
    } else {
        Zone::Center
    }
}

/// Classify CV and calculate the output for its zone.
///
/// This has no state, the same input always gives the same output.
pub fn classify_and_shape<const P: usize>(
    curve: &CurveTable<P>,
    cv: f32,
    window: &Window,
    levels: Levels,
    modes: Modes,
) -> Shaped {
    let zone = classify(cv, window);
    match zone {
        Zone::Left(ratio) => {
            let volume_left = ramp(curve, ratio, levels.center, levels.left, modes.left);
            Shaped {
                output: volume_left,
                volume_left,
                volume_right: 0.0,
                zone,
            }
        }
        Zone::Right(ratio) => {
            // Mirrored, so the ramp is measured from the far end towards the plateau.
            let volume_right = ramp(curve, 1.0 - ratio, levels.center, levels.right, modes.right);
            Shaped {
                output: volume_right,
                volume_left: 0.0,
                volume_right,
                zone,
            }
        }
        Zone::Center => Shaped {
            output: sample::clamp(levels.center),
            volume_left: 0.0,
            volume_right: 0.0,
            zone,
        },
    }
}

// Position goes from 0.0 on the far end of the zone to 1.0 on the plateau edge.
fn ramp<const P: usize>(
    curve: &CurveTable<P>,
    position: f32,
    center: f32,
    side: f32,
    mode: ShapingMode,
) -> f32 {
    let side_is_bigger = side > center;
    let offset = if side_is_bigger { center } else { side };
    let range = libm::fabsf(center - side);

    let shaped = match mode {
        ShapingMode::Exponential => curve.sample(position),
        ShapingMode::Linear => position,
    };

    let raw = if side_is_bigger {
        offset + (1.0 - shaped) * range
    } else {
        offset + shaped * range
    };

    sample::clamp(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::curve::Curve;
    use crate::plateau::Plateau;

    fn centered_window() -> Window {
        Plateau::with_half_width(6553.0).compute(32768.0)
    }

    fn curve() -> Curve {
        Curve::try_new(3.0).unwrap()
    }

    #[test]
    fn cv_on_the_plateau_bound_is_in_center() {
        let window = centered_window();
        assert_eq!(classify(39321.0, &window), Zone::Center);
        assert_eq!(classify(26215.0, &window), Zone::Center);
        assert_eq!(classify(32768.0, &window), Zone::Center);
    }

    #[test]
    fn cv_right_above_the_plateau_is_in_right_zone_with_near_zero_ratio() {
        let window = centered_window();
        match classify(39322.0, &window) {
            Zone::Right(ratio) => assert!(ratio > 0.0 && ratio < 0.001),
            zone => panic!("Expected right zone, got {:?}", zone),
        }
    }

    #[test]
    fn cv_at_the_extremes_gets_full_ratio() {
        let window = centered_window();
        assert_eq!(classify(0.0, &window), Zone::Left(0.0));
        assert_eq!(classify(MAX, &window), Zone::Right(1.0));
    }

    #[test]
    fn degenerate_window_keeps_ratio_at_zero() {
        let window = Plateau::with_half_width(6553.0).compute(MAX);
        assert_relative_eq!(window.right_bound, MAX);
        assert_eq!(classify(MAX, &window), Zone::Center);

        let window = Window {
            center: 0.0,
            half_width: 0.0,
            left_bound: 0.0,
            right_bound: 0.0,
        };
        assert_eq!(classify(0.0, &window), Zone::Center);
    }

    #[test]
    fn center_zone_passes_center_level_through() {
        let shaped = classify_and_shape(
            &curve(),
            30000.0,
            &centered_window(),
            Levels {
                center: 12345.0,
                left: 0.0,
                right: MAX,
            },
            Modes::default(),
        );
        assert_eq!(shaped.zone, Zone::Center);
        assert_relative_eq!(shaped.output, 12345.0);
        assert_relative_eq!(shaped.volume_left, 0.0);
        assert_relative_eq!(shaped.volume_right, 0.0);
    }

    #[test]
    fn rising_left_ramp_meets_center_on_the_plateau_edge() {
        let window = centered_window();
        let levels = Levels {
            center: 40000.0,
            left: 10000.0,
            right: 0.0,
        };

        let shaped = classify_and_shape(&curve(), 0.0, &window, levels, Modes::default());
        assert_relative_eq!(shaped.output, 10000.0);

        let shaped = classify_and_shape(&curve(), 26214.5, &window, levels, Modes::default());
        assert_relative_eq!(shaped.output, 40000.0, max_relative = 0.0001);
        assert_relative_eq!(shaped.volume_left, shaped.output);
        assert_relative_eq!(shaped.volume_right, 0.0);

        assert_relative_eq!(
            ramp(&curve(), 1.0, 40000.0, 10000.0, ShapingMode::Linear),
            40000.0
        );
    }

    #[test]
    fn left_side_above_center_inverts_the_slope() {
        let levels = Levels {
            center: 20000.0,
            left: 50000.0,
            right: 0.0,
        };
        let shaped = classify_and_shape(
            &curve(),
            0.0,
            &centered_window(),
            levels,
            Modes::default(),
        );
        assert_relative_eq!(shaped.output, 50000.0);

        assert_relative_eq!(
            ramp(&curve(), 1.0, 20000.0, 50000.0, ShapingMode::Linear),
            20000.0
        );
        assert_relative_eq!(
            ramp(&curve(), 0.5, 20000.0, 50000.0, ShapingMode::Linear),
            35000.0
        );
    }

    #[test]
    fn right_ramp_starts_at_center_and_ends_at_right_level() {
        let window = centered_window();
        let levels = Levels {
            center: 30000.0,
            left: 0.0,
            right: 5000.0,
        };

        let shaped = classify_and_shape(&curve(), 39321.5, &window, levels, Modes::default());
        assert!(matches!(shaped.zone, Zone::Right(_)));
        assert_relative_eq!(shaped.output, 30000.0, max_relative = 0.0001);

        let shaped = classify_and_shape(&curve(), MAX, &window, levels, Modes::default());
        assert_relative_eq!(shaped.output, 5000.0);
        assert_relative_eq!(shaped.volume_right, 5000.0);
        assert_relative_eq!(shaped.volume_left, 0.0);
    }

    #[test]
    fn exponential_mode_uses_the_curve() {
        let curve = curve();
        let linear = ramp(&curve, 0.5, MAX, 0.0, ShapingMode::Linear);
        let exponential = ramp(&curve, 0.5, MAX, 0.0, ShapingMode::Exponential);
        assert_relative_eq!(linear, MAX / 2.0);
        assert_relative_eq!(exponential, curve.sample(0.5) * MAX);
        assert!(exponential > linear);
    }

    #[test]
    fn exponential_mode_keeps_edges_continuous() {
        let curve = curve();
        assert_relative_eq!(ramp(&curve, 0.0, 40000.0, 10000.0, ShapingMode::Exponential), 10000.0);
        assert_relative_eq!(ramp(&curve, 1.0, 40000.0, 10000.0, ShapingMode::Exponential), 40000.0);
        assert_relative_eq!(ramp(&curve, 0.0, 20000.0, 50000.0, ShapingMode::Exponential), 50000.0);
        assert_relative_eq!(ramp(&curve, 1.0, 20000.0, 50000.0, ShapingMode::Exponential), 20000.0);
    }

    #[test]
    fn exponential_right_ramp_mirrors_the_left_one() {
        let window = centered_window();
        let levels = Levels {
            center: 40000.0,
            left: 10000.0,
            right: 10000.0,
        };
        let modes = Modes {
            left: ShapingMode::Exponential,
            right: ShapingMode::Exponential,
        };

        for fraction in [0.1, 0.25, 0.5, 0.9] {
            let left_cv = fraction * window.left_bound;
            let right_cv = MAX - fraction * (MAX - window.right_bound);
            let left = classify_and_shape(&curve(), left_cv, &window, levels, modes);
            let right = classify_and_shape(&curve(), right_cv, &window, levels, modes);
            assert!(matches!(left.zone, Zone::Left(_)));
            assert!(matches!(right.zone, Zone::Right(_)));
            assert_relative_eq!(left.output, right.output, max_relative = 0.0001);
        }
    }

    #[test]
    fn exponential_right_ramp_starts_at_center_and_ends_at_right_level() {
        let window = centered_window();
        let levels = Levels {
            center: 40000.0,
            left: 0.0,
            right: 10000.0,
        };
        let modes = Modes {
            left: ShapingMode::Linear,
            right: ShapingMode::Exponential,
        };

        let shaped = classify_and_shape(&curve(), window.right_bound + 0.5, &window, levels, modes);
        assert!(matches!(shaped.zone, Zone::Right(_)));
        assert_relative_eq!(shaped.output, 40000.0, max_relative = 0.001);

        let shaped = classify_and_shape(&curve(), MAX, &window, levels, modes);
        assert_relative_eq!(shaped.output, 10000.0);

        let halfway = window.right_bound + (MAX - window.right_bound) / 2.0;
        let shaped = classify_and_shape(&curve(), halfway, &window, levels, modes);
        let linear = 10000.0 + 0.5 * 30000.0;
        assert!(shaped.output > linear);
    }

    #[test]
    fn zone_indicator_matches_diagnostics_convention() {
        assert_eq!(Zone::Center.indicator(), 0);
        assert_eq!(Zone::Left(0.3).indicator(), 1);
        assert_eq!(Zone::Right(0.3).indicator(), 2);
        assert_eq!(Zone::Center.ratio(), None);
        assert_eq!(Zone::Left(0.3).ratio(), Some(0.3));
    }

    fn mode() -> impl Strategy<Value = ShapingMode> {
        prop_oneof![Just(ShapingMode::Linear), Just(ShapingMode::Exponential)]
    }

    proptest! {
        #[test]
        fn zones_are_exhaustive_and_exclusive(slider in 0.0_f32..=MAX, cv in 0.0_f32..=MAX) {
            let window = Plateau::try_new(0.2).unwrap().compute(slider);
            let left = cv < window.left_bound;
            let right = cv > window.right_bound;
            let center = !left && !right;
            prop_assert_eq!(u8::from(left) + u8::from(right) + u8::from(center), 1);
            match classify(cv, &window) {
                Zone::Left(ratio) => prop_assert!(left && (0.0..=1.0).contains(&ratio)),
                Zone::Right(ratio) => prop_assert!(right && (0.0..=1.0).contains(&ratio)),
                Zone::Center => prop_assert!(center),
            }
        }

        #[test]
        fn output_is_always_within_range(
            slider in 0.0_f32..=MAX,
            cv in 0.0_f32..=MAX,
            center in 0.0_f32..=MAX,
            left in 0.0_f32..=MAX,
            right in 0.0_f32..=MAX,
            mode_left in mode(),
            mode_right in mode(),
        ) {
            let window = Plateau::try_new(0.2).unwrap().compute(slider);
            let levels = Levels { center, left, right };
            let modes = Modes { left: mode_left, right: mode_right };
            let shaped = classify_and_shape(&curve(), cv, &window, levels, modes);
            for value in [shaped.output, shaped.volume_left, shaped.volume_right] {
                prop_assert!((0.0..=MAX).contains(&value));
            }
            let again = classify_and_shape(&curve(), cv, &window, levels, modes);
            prop_assert_eq!(shaped, again);
        }
    }
}
