//! Side-by-side comparison of a handful of planets.
//!
//! For every metric the present numeric values across the compared records
//! are ranked: the largest is `Max`, the smallest `Min`, everything else
//! `Neutral`. Missing values are `Unknown` and never take part in ranking.
//! Whether a high or low value is "good" is left to the presentation layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MembershipError, ParseError};
use crate::planet::PlanetRecord;

/// Largest number of planets compared at once.
pub const MAX_COMPARED: usize = 5;

/// Text shown for a missing value.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    Size,
    Orbital,
    Atmospheric,
    Discovery,
}

impl MetricCategory {
    pub fn name(&self) -> &'static str {
        match self {
            MetricCategory::Size => "size",
            MetricCategory::Orbital => "orbital",
            MetricCategory::Atmospheric => "atmospheric",
            MetricCategory::Discovery => "discovery",
        }
    }

    /// Heading used when a table is restricted to one category.
    pub fn label(&self) -> &'static str {
        match self {
            MetricCategory::Size => "Size & Mass",
            MetricCategory::Orbital => "Orbital Properties",
            MetricCategory::Atmospheric => "Atmospheric",
            MetricCategory::Discovery => "Discovery Info",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "size" => Ok(MetricCategory::Size),
            "orbital" => Ok(MetricCategory::Orbital),
            "atmospheric" => Ok(MetricCategory::Atmospheric),
            "discovery" => Ok(MetricCategory::Discovery),
            _ => Err(ParseError::new("metric category", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    Radius,
    Mass,
    OrbitalPeriod,
    Distance,
    EquilibriumTemperature,
    Insolation,
    DiscoveryYear,
    DiscoveryMethod,
}

/// The raw value a metric reads from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue<'a> {
    Number(f64),
    Text(&'a str),
    Absent,
}

impl MetricValue<'_> {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(v) => Some(*v),
            _ => None,
        }
    }
}

/// One comparable attribute: how to read it, how to print it, where it belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub key: MetricKey,
    pub label: &'static str,
    pub unit: &'static str,
    pub category: MetricCategory,
}

impl Metric {
    const fn new(
        key: MetricKey,
        label: &'static str,
        unit: &'static str,
        category: MetricCategory,
    ) -> Self {
        Self {
            key,
            label,
            unit,
            category,
        }
    }

    pub fn value<'a>(&self, p: &'a PlanetRecord) -> MetricValue<'a> {
        let number = match self.key {
            MetricKey::Radius => p.radius(),
            MetricKey::Mass => p.mass(),
            MetricKey::OrbitalPeriod => p.period(),
            MetricKey::Distance => p.distance(),
            MetricKey::EquilibriumTemperature => p.temperature(),
            MetricKey::Insolation => p.insolation(),
            MetricKey::DiscoveryYear => p.discovery_year.map(f64::from),
            MetricKey::DiscoveryMethod => {
                return p.method().map_or(MetricValue::Absent, MetricValue::Text);
            }
        };
        number.map_or(MetricValue::Absent, MetricValue::Number)
    }

    /// Display text for this metric on `p`. Exports use this verbatim.
    pub fn format(&self, p: &PlanetRecord) -> String {
        match self.value(p) {
            MetricValue::Absent => UNKNOWN.to_string(),
            MetricValue::Text(s) => s.to_string(),
            MetricValue::Number(v) => match self.key {
                MetricKey::OrbitalPeriod | MetricKey::Distance => format!("{v:.1}"),
                MetricKey::EquilibriumTemperature | MetricKey::DiscoveryYear => {
                    format!("{v:.0}")
                }
                _ => format!("{v:.2}"),
            },
        }
    }

    /// Column heading, e.g. `Radius (R⊕)`; unit-less metrics are just the label.
    pub fn header(&self) -> String {
        if self.unit.is_empty() {
            self.label.to_string()
        } else {
            format!("{} ({})", self.label, self.unit)
        }
    }
}

/// Metrics in display order.
pub const COMPARISON_METRICS: [Metric; 8] = [
    Metric::new(MetricKey::Radius, "Radius", "R⊕", MetricCategory::Size),
    Metric::new(MetricKey::Mass, "Mass", "M⊕", MetricCategory::Size),
    Metric::new(
        MetricKey::OrbitalPeriod,
        "Orbital Period",
        "days",
        MetricCategory::Orbital,
    ),
    Metric::new(
        MetricKey::Distance,
        "Distance from Earth",
        "pc",
        MetricCategory::Orbital,
    ),
    Metric::new(
        MetricKey::EquilibriumTemperature,
        "Equilibrium Temperature",
        "K",
        MetricCategory::Atmospheric,
    ),
    Metric::new(
        MetricKey::Insolation,
        "Insolation",
        "S⊕",
        MetricCategory::Atmospheric,
    ),
    Metric::new(
        MetricKey::DiscoveryYear,
        "Discovery Year",
        "",
        MetricCategory::Discovery,
    ),
    Metric::new(
        MetricKey::DiscoveryMethod,
        "Discovery Method",
        "",
        MetricCategory::Discovery,
    ),
];

/// All metrics, or only those in `category`.
pub fn metrics_in(category: Option<MetricCategory>) -> Vec<Metric> {
    COMPARISON_METRICS
        .iter()
        .filter(|m| category.is_none_or(|c| m.category == c))
        .copied()
        .collect()
}

/// Where a record's value sits among the compared records for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankClass {
    Max,
    Min,
    Neutral,
    Unknown,
}

/// Rank every record on one metric. Output is parallel to `records`.
pub fn classify(metric: &Metric, records: &[&PlanetRecord]) -> Vec<RankClass> {
    let values: Vec<MetricValue> = records.iter().map(|p| metric.value(p)).collect();

    let spread = values
        .iter()
        .filter_map(MetricValue::as_number)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        // fewer than two distinct values means nothing to highlight
        .filter(|(lo, hi)| lo < hi);

    values
        .iter()
        .map(|value| match (value, spread) {
            (MetricValue::Absent, _) => RankClass::Unknown,
            (MetricValue::Number(v), Some((_, hi))) if *v == hi => RankClass::Max,
            (MetricValue::Number(v), Some((lo, _))) if *v == lo => RankClass::Min,
            _ => RankClass::Neutral,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonCell {
    pub text: String,
    pub rank: RankClass,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub metric: Metric,
    pub cells: Vec<ComparisonCell>,
}

/// A formatted, ranked grid: one row per metric, one cell per record.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub planets: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

pub fn compare(metrics: &[Metric], records: &[&PlanetRecord]) -> ComparisonTable {
    let rows = metrics
        .iter()
        .map(|metric| {
            let ranks = classify(metric, records);
            let cells = records
                .iter()
                .zip(ranks)
                .map(|(p, rank)| ComparisonCell {
                    text: metric.format(p),
                    rank,
                })
                .collect();
            ComparisonRow {
                metric: *metric,
                cells,
            }
        })
        .collect();
    ComparisonTable {
        planets: records.iter().map(|p| p.name.clone()).collect(),
        rows,
    }
}

/// The planets currently being compared, in display order.
///
/// Holds at most [`MAX_COMPARED`] records with distinct names. The Earth
/// reference record is added and removed like any other member but always
/// goes to the front.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    members: Vec<PlanetRecord>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_admission(&self, name: &str) -> Result<(), MembershipError> {
        if self.contains(name) {
            return Err(MembershipError::Duplicate(name.to_string()));
        }
        if self.members.len() >= MAX_COMPARED {
            return Err(MembershipError::Full {
                capacity: MAX_COMPARED,
            });
        }
        Ok(())
    }

    pub fn add(&mut self, record: PlanetRecord) -> Result<(), MembershipError> {
        self.check_admission(&record.name)?;
        self.members.push(record);
        Ok(())
    }

    pub fn add_reference(&mut self) -> Result<(), MembershipError> {
        let earth = PlanetRecord::earth_reference();
        self.check_admission(&earth.name)?;
        self.members.insert(0, earth);
        Ok(())
    }

    /// Returns whether a member was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|p| p.name != name);
        self.members.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|p| p.name == name)
    }

    pub fn has_reference(&self) -> bool {
        self.members.iter().any(PlanetRecord::is_reference)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn records(&self) -> Vec<&PlanetRecord> {
        self.members.iter().collect()
    }

    pub fn compare(&self, metrics: &[Metric]) -> ComparisonTable {
        compare(metrics, &self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_radius(name: &str, radius: Option<f64>) -> PlanetRecord {
        PlanetRecord {
            radius_earth: radius,
            ..PlanetRecord::named(name)
        }
    }

    fn radius_metric() -> Metric {
        COMPARISON_METRICS[0]
    }

    #[test]
    fn test_metric_order_and_categories() {
        let labels: Vec<&str> = COMPARISON_METRICS.iter().map(|m| m.label).collect();
        assert_eq!(labels[0], "Radius");
        assert_eq!(labels[7], "Discovery Method");
        assert_eq!(metrics_in(None).len(), 8);
        assert_eq!(metrics_in(Some(MetricCategory::Size)).len(), 2);
        assert!(
            metrics_in(Some(MetricCategory::Atmospheric))
                .iter()
                .all(|m| m.category == MetricCategory::Atmospheric)
        );
    }

    #[test]
    fn test_all_equal_is_neutral() {
        let a = with_radius("a", Some(2.0));
        let b = with_radius("b", Some(2.0));
        let c = with_radius("c", Some(2.0));
        let ranks = classify(&radius_metric(), &[&a, &b, &c]);
        assert_eq!(ranks, vec![RankClass::Neutral; 3]);
    }

    #[test]
    fn test_strict_extremes() {
        let a = with_radius("a", Some(1.0));
        let b = with_radius("b", Some(11.2));
        let c = with_radius("c", Some(3.0));
        let ranks = classify(&radius_metric(), &[&a, &b, &c]);
        assert_eq!(ranks, vec![RankClass::Min, RankClass::Max, RankClass::Neutral]);
    }

    #[test]
    fn test_tied_maximum_all_max() {
        let a = with_radius("a", Some(5.0));
        let b = with_radius("b", Some(1.0));
        let c = with_radius("c", Some(5.0));
        let ranks = classify(&radius_metric(), &[&a, &b, &c]);
        assert_eq!(ranks, vec![RankClass::Max, RankClass::Min, RankClass::Max]);
    }

    #[test]
    fn test_absent_is_unknown_never_ranked() {
        let a = with_radius("a", Some(1.0));
        let b = with_radius("b", None);
        let ranks = classify(&radius_metric(), &[&a, &b]);
        assert_eq!(ranks[1], RankClass::Unknown);
        assert!(matches!(ranks[0], RankClass::Max | RankClass::Neutral));
    }

    #[test]
    fn test_zero_is_ranked_not_unknown() {
        let a = with_radius("a", Some(0.0));
        let b = with_radius("b", Some(1.0));
        let ranks = classify(&radius_metric(), &[&a, &b]);
        assert_eq!(ranks, vec![RankClass::Min, RankClass::Max]);
    }

    #[test]
    fn test_single_record_is_neutral() {
        let a = with_radius("a", Some(1.0));
        assert_eq!(classify(&radius_metric(), &[&a]), vec![RankClass::Neutral]);
    }

    #[test]
    fn test_text_metric_is_neutral_or_unknown() {
        let method = COMPARISON_METRICS[7];
        let a = PlanetRecord {
            discovery_method: Some("Transit".to_string()),
            ..PlanetRecord::named("a")
        };
        let b = PlanetRecord::named("b");
        assert_eq!(
            classify(&method, &[&a, &b]),
            vec![RankClass::Neutral, RankClass::Unknown]
        );
    }

    #[test]
    fn test_formatting() {
        let earth = PlanetRecord::earth_reference();
        let texts: Vec<String> = COMPARISON_METRICS.iter().map(|m| m.format(&earth)).collect();
        assert_eq!(texts[0], "1.00");
        assert_eq!(texts[3], "0.0");
        assert_eq!(texts[4], "255");
        assert_eq!(texts[5], "1.00");
        assert_eq!(texts[6], "Unknown");
        assert_eq!(texts[7], "Known");
        let p = PlanetRecord {
            orbital_period_days: Some(129.944),
            ..PlanetRecord::named("p")
        };
        assert_eq!(COMPARISON_METRICS[2].format(&p), "129.9");
        assert_eq!(COMPARISON_METRICS[0].header(), "Radius (R⊕)");
        assert_eq!(COMPARISON_METRICS[6].header(), "Discovery Year");
    }

    #[test]
    fn test_discovery_year_format() {
        let p = PlanetRecord {
            discovery_year: Some(2016),
            ..PlanetRecord::named("p")
        };
        assert_eq!(COMPARISON_METRICS[6].format(&p), "2016");
    }

    #[test]
    fn test_compare_table_shape() {
        let a = with_radius("a", Some(1.0));
        let b = with_radius("b", Some(2.0));
        let table = compare(&COMPARISON_METRICS, &[&a, &b]);
        assert_eq!(table.planets, vec!["a", "b"]);
        assert_eq!(table.rows.len(), COMPARISON_METRICS.len());
        assert!(table.rows.iter().all(|r| r.cells.len() == 2));
        assert_eq!(table.rows[0].cells[1].text, "2.00");
        assert_eq!(table.rows[0].cells[1].rank, RankClass::Max);
        assert_eq!(table.rows[1].cells[0].rank, RankClass::Unknown);
    }

    #[test]
    fn test_membership_rules() {
        let mut set = ComparisonSet::new();
        for i in 0..MAX_COMPARED {
            set.add(PlanetRecord::named(&format!("p{i}"))).unwrap();
        }
        assert_eq!(
            set.add(PlanetRecord::named("extra")),
            Err(MembershipError::Full {
                capacity: MAX_COMPARED
            })
        );
        assert_eq!(
            set.add(PlanetRecord::named("p0")),
            Err(MembershipError::Duplicate("p0".to_string()))
        );
        assert!(set.add_reference().is_err());
        assert!(set.remove("p0"));
        assert!(!set.remove("p0"));
        set.add_reference().unwrap();
        assert!(set.has_reference());
        assert_eq!(set.records()[0].name, "Earth");
        assert_eq!(set.len(), MAX_COMPARED);
    }

    #[test]
    fn test_reference_participates_like_any_record() {
        let mut set = ComparisonSet::new();
        set.add(with_radius("big", Some(11.0))).unwrap();
        set.add_reference().unwrap();
        assert_eq!(
            set.add_reference(),
            Err(MembershipError::Duplicate("Earth".to_string()))
        );
        let table = set.compare(&metrics_in(Some(MetricCategory::Size)));
        assert_eq!(table.planets, vec!["Earth", "big"]);
        assert_eq!(table.rows[0].cells[0].rank, RankClass::Min);
        assert_eq!(table.rows[0].cells[1].rank, RankClass::Max);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Orbital".parse::<MetricCategory>(), Ok(MetricCategory::Orbital));
        assert!("colour".parse::<MetricCategory>().is_err());
    }
}
