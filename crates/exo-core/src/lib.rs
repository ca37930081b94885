//! Planet characterization engine for an exoplanet catalog.
//!
//! Classifies planets into shared descriptive bands, scores them for
//! Earth-likeness and weirdness, selects and orders catalog subsets under a
//! named filter, narrates a single planet, and ranks a small comparison set
//! metric by metric.
//!
//! Zero I/O. Pure functions over in-memory records with no opinions about
//! where the catalog comes from or how results are shown.

pub mod bands;
pub mod compare;
pub mod error;
pub mod narrative;
pub mod planet;
pub mod scoring;
pub mod selection;

pub use bands::{DistanceBand, LIGHT_YEARS_PER_PARSEC, OrbitBand, SizeBand, TemperatureBand};
pub use compare::{
    COMPARISON_METRICS, ComparisonCell, ComparisonRow, ComparisonSet, ComparisonTable,
    MAX_COMPARED, Metric, MetricCategory, MetricKey, MetricValue, RankClass, UNKNOWN, classify,
    compare, metrics_in,
};
pub use error::{CatalogRejection, MembershipError, ParseError};
pub use narrative::{NarrativeContext, narrate};
pub use planet::{EARTH_NAME, PlanetRecord};
pub use scoring::{
    Contribution, ScoreBreakdown, earth_like_breakdown, earth_like_score, method_rarity,
    weirdness_breakdown, weirdness_score,
};
pub use selection::{Badge, Catalog, FilterPolicy, matches_query, pick_random, search, select};
