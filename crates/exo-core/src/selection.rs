use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogRejection, ParseError};
use crate::narrative::NarrativeContext;
use crate::planet::PlanetRecord;
use crate::scoring::{earth_like_score, weirdness_score};

/// Named rule selecting and ordering a subset of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterPolicy {
    #[default]
    All,
    EarthLike,
    Weird,
    Closest,
}

impl FilterPolicy {
    pub const ALL: [FilterPolicy; 4] = [
        FilterPolicy::All,
        FilterPolicy::EarthLike,
        FilterPolicy::Weird,
        FilterPolicy::Closest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FilterPolicy::All => "all",
            FilterPolicy::EarthLike => "earthlike",
            FilterPolicy::Weird => "weird",
            FilterPolicy::Closest => "closest",
        }
    }

    /// The narration framing for planets surfaced under this filter.
    pub fn narrative_context(&self) -> NarrativeContext {
        match self {
            FilterPolicy::All => NarrativeContext::Random,
            FilterPolicy::EarthLike => NarrativeContext::EarthLike,
            FilterPolicy::Weird => NarrativeContext::Weird,
            FilterPolicy::Closest => NarrativeContext::Closest,
        }
    }

    /// Score badge shown next to a planet under this filter. Only scoring
    /// filters have badges, and only for a score above zero.
    pub fn badge(&self, p: &PlanetRecord) -> Option<Badge> {
        let (label, score) = match self {
            FilterPolicy::EarthLike => ("Earth-like", earth_like_score(p)),
            FilterPolicy::Weird => ("Weirdness", weirdness_score(p)),
            FilterPolicy::All | FilterPolicy::Closest => return None,
        };
        (score > 0).then_some(Badge { label, score })
    }
}

impl fmt::Display for FilterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterPolicy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FilterPolicy::All),
            "earthlike" | "earth-like" | "earth_like" => Ok(FilterPolicy::EarthLike),
            "weird" => Ok(FilterPolicy::Weird),
            "closest" => Ok(FilterPolicy::Closest),
            _ => Err(ParseError::new("filter", s)),
        }
    }
}

/// A score badge, e.g. `Earth-like: 63/100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub score: u8,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}/100", self.label, self.score)
    }
}

/// Keep records scoring above zero, highest first. `sort_by_key` is stable,
/// so equal scores keep catalog order.
fn ranked_by_score(
    catalog: &[PlanetRecord],
    score: fn(&PlanetRecord) -> u8,
) -> Vec<&PlanetRecord> {
    let mut scored: Vec<(u8, &PlanetRecord)> = catalog
        .iter()
        .map(|p| (score(p), p))
        .filter(|(s, _)| *s > 0)
        .collect();
    scored.sort_by_key(|(s, _)| Reverse(*s));
    scored.into_iter().map(|(_, p)| p).collect()
}

/// Apply a filter policy. Never reorders or drops anything under `All`.
pub fn select(catalog: &[PlanetRecord], policy: FilterPolicy) -> Vec<&PlanetRecord> {
    match policy {
        FilterPolicy::All => catalog.iter().collect(),
        FilterPolicy::EarthLike => ranked_by_score(catalog, earth_like_score),
        FilterPolicy::Weird => ranked_by_score(catalog, weirdness_score),
        FilterPolicy::Closest => {
            let mut known: Vec<(f64, &PlanetRecord)> = catalog
                .iter()
                .filter_map(|p| p.distance().map(|d| (d, p)))
                .collect();
            known.sort_by(|a, b| a.0.total_cmp(&b.0));
            known.into_iter().map(|(_, p)| p).collect()
        }
    }
}

/// Uniformly pick one record. `None` for an empty catalog.
pub fn pick_random<'a>(
    catalog: &'a [PlanetRecord],
    rng: &mut impl Rng,
) -> Option<&'a PlanetRecord> {
    catalog.choose(rng)
}

fn matches_lowercase(p: &PlanetRecord, needle: &str) -> bool {
    [
        Some(p.name.as_str()),
        p.host_star_name.as_deref(),
        p.discovery_method.as_deref(),
        p.discovery_facility.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Case-insensitive substring match against name, host star, discovery
/// method and discovery facility.
pub fn matches_query(p: &PlanetRecord, query: &str) -> bool {
    matches_lowercase(p, &query.trim().to_lowercase())
}

/// Narrow an already-selected sequence by free text, keeping its order.
/// A blank query leaves the input untouched.
pub fn search<'a>(records: Vec<&'a PlanetRecord>, query: &str) -> Vec<&'a PlanetRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|p| matches_lowercase(p, &needle))
        .collect()
}

/// The loaded catalog, in load order, with lookup by planet name.
///
/// `Catalog::default()` is the empty catalog: every filter yields nothing and
/// [`Catalog::pick_random`] yields `None`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<PlanetRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a record during load. Names must be non-blank and unique.
    pub fn push(&mut self, record: PlanetRecord) -> Result<(), CatalogRejection> {
        if record.name.trim().is_empty() {
            return Err(CatalogRejection::BlankName);
        }
        if self.index.contains_key(&record.name) {
            return Err(CatalogRejection::DuplicateName(record.name));
        }
        self.index.insert(record.name.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Admit every record, returning the catalog together with the reason
    /// each rejected record was left out, in input order.
    pub fn from_records<I>(records: I) -> (Self, Vec<CatalogRejection>)
    where
        I: IntoIterator<Item = PlanetRecord>,
    {
        let mut catalog = Catalog::new();
        let rejected = records
            .into_iter()
            .filter_map(|record| catalog.push(record).err())
            .collect();
        (catalog, rejected)
    }

    pub fn get(&self, name: &str) -> Option<&PlanetRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// Exact name first, then a unique case-insensitive match.
    pub fn find(&self, name: &str) -> Option<&PlanetRecord> {
        if let Some(p) = self.get(name) {
            return Some(p);
        }
        let wanted = name.trim().to_lowercase();
        let mut hits = self
            .records
            .iter()
            .filter(|p| p.name.to_lowercase() == wanted);
        match (hits.next(), hits.next()) {
            (Some(p), None) => Some(p),
            _ => None,
        }
    }

    pub fn records(&self) -> &[PlanetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn select(&self, policy: FilterPolicy) -> Vec<&PlanetRecord> {
        select(&self.records, policy)
    }

    pub fn pick_random(&self, rng: &mut impl Rng) -> Option<&PlanetRecord> {
        pick_random(&self.records, rng)
    }
}
