//! Earth-likeness and weirdness heuristics.
//!
//! Both scores are weighted sums of independent per-attribute contributions,
//! rounded and clamped to `[0, 100]`. A missing attribute contributes nothing,
//! so a record with no informative attributes scores exactly 0 and full marks
//! are only reachable when every contributing attribute is present.

use crate::bands::{
    FRIGID_BELOW_K, HABITABLE_TEMP_K, MINIATURE_BELOW_RADIUS, SCORCHING_FROM_K,
    SUB_NEPTUNE_BELOW_RADIUS, ULTRA_SHORT_BELOW_DAYS, WIDE_FROM_DAYS,
};
use crate::planet::PlanetRecord;

const EARTH_RADIUS_WEIGHT: f64 = 40.0;
const EARTH_TEMP_WEIGHT: f64 = 35.0;
const EARTH_INSOLATION_WEIGHT: f64 = 25.0;

/// Log-distance at which each Earth-likeness contribution reaches zero.
const RADIUS_FALLOFF: f64 = 1.0;
const TEMP_FALLOFF: f64 = 0.7;
const INSOLATION_FALLOFF: f64 = 1.6;

const WEIRD_RADIUS_WEIGHT: f64 = 40.0;
const WEIRD_TEMP_WEIGHT: f64 = 40.0;
const WEIRD_PERIOD_WEIGHT: f64 = 10.0;
const WEIRD_METHOD_WEIGHT: f64 = 10.0;

/// Log-distance beyond the normal range at which a weirdness contribution saturates.
const RADIUS_SATURATION: f64 = 1.609_437_912_434_100_3; // ln 5
const TEMP_SATURATION: f64 = 2.0 * std::f64::consts::LN_2; // ln 4
const PERIOD_SATURATION: f64 = std::f64::consts::LN_10;

/// Discovery methods by how rarely they produce a detection.
const COMMON_METHODS: &[&str] = &["transit", "radial velocity"];
const UNCOMMON_METHODS: &[&str] = &["imaging", "microlensing"];
const RARE_METHODS: &[&str] = &[
    "astrometry",
    "pulsar timing",
    "transit timing variations",
    "eclipse timing variations",
    "pulsation timing variations",
    "orbital brightness modulation",
    "disk kinematics",
];

/// One attribute's share of a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub attribute: &'static str,
    pub points: f64,
}

/// Per-attribute contributions behind a score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub parts: Vec<Contribution>,
}

impl ScoreBreakdown {
    /// Sum of all contributions, rounded and clamped to `[0, 100]`.
    pub fn total(&self) -> u8 {
        let sum: f64 = self.parts.iter().map(|c| c.points).sum();
        sum.round().clamp(0.0, 100.0) as u8
    }
}

/// Distance of a positive `value` from the `[lo, hi]` range in log space.
/// Zero inside the range, `None` for non-positive values.
fn log_distance(value: f64, lo: f64, hi: f64) -> Option<f64> {
    if value <= 0.0 {
        return None;
    }
    Some(if value < lo {
        (lo / value).ln()
    } else if value > hi {
        (value / hi).ln()
    } else {
        0.0
    })
}

/// Closeness of `value` to the `[lo, hi]` target, scaled so that `falloff`
/// log-units away gives zero.
fn closeness(value: f64, lo: f64, hi: f64, falloff: f64) -> f64 {
    log_distance(value, lo, hi).map_or(0.0, |d| (1.0 - d / falloff).max(0.0))
}

/// How far `value` sits outside the normal `[lo, hi]` range, as a fraction of
/// `saturation` log-units, capped at 1.
fn extremity(value: f64, lo: f64, hi: f64, saturation: f64) -> f64 {
    log_distance(value, lo, hi).map_or(0.0, |d| (d / saturation).min(1.0))
}

/// Rarity of a discovery method in `[0, 1]`. Unrecognized methods count as 0.
pub fn method_rarity(method: &str) -> f64 {
    let m = method.trim().to_lowercase();
    if COMMON_METHODS.contains(&m.as_str()) {
        0.0
    } else if UNCOMMON_METHODS.contains(&m.as_str()) {
        0.5
    } else if RARE_METHODS.contains(&m.as_str()) {
        1.0
    } else {
        0.0
    }
}

pub fn earth_like_breakdown(p: &PlanetRecord) -> ScoreBreakdown {
    let (temp_lo, temp_hi) = HABITABLE_TEMP_K;
    let parts = vec![
        Contribution {
            attribute: "radius",
            points: p
                .radius()
                .map_or(0.0, |r| EARTH_RADIUS_WEIGHT * closeness(r, 1.0, 1.0, RADIUS_FALLOFF)),
        },
        Contribution {
            attribute: "temperature",
            points: p.temperature().map_or(0.0, |t| {
                EARTH_TEMP_WEIGHT * closeness(t, temp_lo, temp_hi, TEMP_FALLOFF)
            }),
        },
        Contribution {
            attribute: "insolation",
            points: p.insolation().map_or(0.0, |s| {
                EARTH_INSOLATION_WEIGHT * closeness(s, 1.0, 1.0, INSOLATION_FALLOFF)
            }),
        },
    ];
    ScoreBreakdown { parts }
}

pub fn weirdness_breakdown(p: &PlanetRecord) -> ScoreBreakdown {
    let parts = vec![
        Contribution {
            attribute: "radius",
            points: p.radius().map_or(0.0, |r| {
                WEIRD_RADIUS_WEIGHT
                    * extremity(
                        r,
                        MINIATURE_BELOW_RADIUS,
                        SUB_NEPTUNE_BELOW_RADIUS,
                        RADIUS_SATURATION,
                    )
            }),
        },
        Contribution {
            attribute: "temperature",
            points: p.temperature().map_or(0.0, |t| {
                WEIRD_TEMP_WEIGHT
                    * extremity(t, FRIGID_BELOW_K, SCORCHING_FROM_K, TEMP_SATURATION)
            }),
        },
        Contribution {
            attribute: "period",
            points: p.period().map_or(0.0, |d| {
                WEIRD_PERIOD_WEIGHT
                    * extremity(d, ULTRA_SHORT_BELOW_DAYS, WIDE_FROM_DAYS, PERIOD_SATURATION)
            }),
        },
        Contribution {
            attribute: "discovery method",
            points: p
                .method()
                .map_or(0.0, |m| WEIRD_METHOD_WEIGHT * method_rarity(m)),
        },
    ];
    ScoreBreakdown { parts }
}

/// Earth-likeness in `[0, 100]`: radius near 1 R⊕, equilibrium temperature
/// near 255–288 K, insolation near 1 S⊕.
pub fn earth_like_score(p: &PlanetRecord) -> u8 {
    earth_like_breakdown(p).total()
}

/// Weirdness in `[0, 100]`: extreme radius, temperature or orbital period, or
/// a rarely used discovery method.
pub fn weirdness_score(p: &PlanetRecord) -> u8 {
    weirdness_breakdown(p).total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn kepler_186f() -> PlanetRecord {
        PlanetRecord {
            radius_earth: Some(1.11),
            equilibrium_temp_k: Some(188.0),
            insolation_earth: Some(0.32),
            ..PlanetRecord::named("Kepler-186f")
        }
    }

    fn kelt_9b() -> PlanetRecord {
        PlanetRecord {
            radius_earth: Some(20.0),
            equilibrium_temp_k: Some(4600.0),
            ..PlanetRecord::named("KELT-9b")
        }
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let p = PlanetRecord::named("nothing known");
        assert_eq!(earth_like_score(&p), 0);
        assert_eq!(weirdness_score(&p), 0);
    }

    #[test]
    fn test_earth_reference_is_perfectly_earth_like() {
        let earth = PlanetRecord::earth_reference();
        assert_eq!(earth_like_score(&earth), 100);
        assert_eq!(weirdness_score(&earth), 0);
    }

    #[test]
    fn test_kepler_186f() {
        let p = kepler_186f();
        let earth = earth_like_score(&p);
        assert!(earth > 50, "Kepler-186f should be fairly Earth-like: {earth}");
        assert!(earth < 100);
        assert!(weirdness_score(&p) <= 10);
    }

    #[test]
    fn test_kelt_9b() {
        let p = kelt_9b();
        assert_eq!(earth_like_score(&p), 0);
        let weird = weirdness_score(&p);
        assert!(weird >= 75, "KELT-9b should be near the top: {weird}");
    }

    #[test]
    fn test_missing_attribute_does_not_penalize() {
        let full = PlanetRecord {
            radius_earth: Some(1.0),
            ..PlanetRecord::named("a")
        };
        let with_unknown_temp = PlanetRecord {
            equilibrium_temp_k: None,
            ..full.clone()
        };
        assert_eq!(earth_like_score(&full), earth_like_score(&with_unknown_temp));
        assert_eq!(earth_like_score(&full), 40);
    }

    #[test]
    fn test_zero_values_are_not_extreme() {
        let p = PlanetRecord {
            radius_earth: Some(0.0),
            equilibrium_temp_k: Some(0.0),
            orbital_period_days: Some(0.0),
            ..PlanetRecord::named("degenerate")
        };
        assert_eq!(weirdness_score(&p), 0);
        assert_eq!(earth_like_score(&p), 0);
    }

    #[test]
    fn test_ratio_falloff_is_symmetric() {
        let half = PlanetRecord {
            radius_earth: Some(0.5),
            ..PlanetRecord::named("half")
        };
        let double = PlanetRecord {
            radius_earth: Some(2.0),
            ..PlanetRecord::named("double")
        };
        assert_eq!(earth_like_score(&half), earth_like_score(&double));
    }

    #[test]
    fn test_closeness_inside_target_band() {
        assert_relative_eq!(closeness(270.0, 255.0, 288.0, 0.7), 1.0);
        assert_relative_eq!(closeness(255.0, 255.0, 288.0, 0.7), 1.0);
        assert!(closeness(200.0, 255.0, 288.0, 0.7) < 1.0);
    }

    #[test]
    fn test_extremity_saturates() {
        assert_relative_eq!(extremity(500.0, 150.0, 1000.0, TEMP_SATURATION), 0.0);
        assert_relative_eq!(extremity(8000.0, 150.0, 1000.0, TEMP_SATURATION), 1.0);
        assert_relative_eq!(extremity(40_000.0, 150.0, 1000.0, TEMP_SATURATION), 1.0);
    }

    #[test]
    fn test_method_rarity() {
        assert_relative_eq!(method_rarity("Transit"), 0.0);
        assert_relative_eq!(method_rarity("radial velocity"), 0.0);
        assert_relative_eq!(method_rarity("Imaging"), 0.5);
        assert_relative_eq!(method_rarity("Pulsar Timing"), 1.0);
        assert_relative_eq!(method_rarity("Known"), 0.0);
    }

    #[test]
    fn test_pulsar_planet_is_weird() {
        let p = PlanetRecord {
            radius_earth: Some(2.0),
            orbital_period_days: Some(36525.0),
            discovery_method: Some("Pulsar Timing".to_string()),
            ..PlanetRecord::named("PSR B1620-26 b")
        };
        assert_eq!(weirdness_score(&p), 20);
    }

    #[test]
    fn test_breakdown_matches_score() {
        let p = kepler_186f();
        let breakdown = earth_like_breakdown(&p);
        assert_eq!(breakdown.parts.len(), 3);
        let sum: f64 = breakdown.parts.iter().map(|c| c.points).sum();
        assert_eq!(sum.round() as u8, earth_like_score(&p));
    }

    fn arb_value() -> impl Strategy<Value = Option<f64>> {
        prop_oneof![
            Just(None),
            Just(Some(0.0)),
            Just(Some(f64::NAN)),
            (0.0f64..1.0e6).prop_map(Some),
        ]
    }

    fn arb_record() -> impl Strategy<Value = PlanetRecord> {
        (arb_value(), arb_value(), arb_value(), arb_value()).prop_map(|(r, t, s, d)| {
            PlanetRecord {
                radius_earth: r,
                equilibrium_temp_k: t,
                insolation_earth: s,
                orbital_period_days: d,
                ..PlanetRecord::named("generated")
            }
        })
    }

    proptest! {
        #[test]
        fn prop_scores_in_range(p in arb_record()) {
            prop_assert!(earth_like_score(&p) <= 100);
            prop_assert!(weirdness_score(&p) <= 100);
        }

        #[test]
        fn prop_earth_like_closer_radius_scores_higher(a in 0.01f64..1.0, b in 0.01f64..1.0) {
            let (near, far) = if a >= b { (a, b) } else { (b, a) };
            let p_near = PlanetRecord { radius_earth: Some(near), ..PlanetRecord::named("n") };
            let p_far = PlanetRecord { radius_earth: Some(far), ..PlanetRecord::named("f") };
            prop_assert!(earth_like_score(&p_near) >= earth_like_score(&p_far));
        }
    }
}
