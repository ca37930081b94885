//! Shared threshold tables.
//!
//! Scoring and narration both read these boundaries, so a planet described as
//! "scorching" is always one whose temperature also counts toward weirdness.
//! Every classifier is total: lower bounds are inclusive, upper bounds are
//! exclusive and the last arm catches the rest of the range.

use serde::{Deserialize, Serialize};

/// Below this equilibrium temperature (K) a planet is frigid.
pub const FRIGID_BELOW_K: f64 = 150.0;
/// Lower edge of the temperate band (K).
pub const TEMPERATE_FROM_K: f64 = 230.0;
/// Upper edge (exclusive) of the temperate band (K).
pub const TEMPERATE_BELOW_K: f64 = 320.0;
/// Lower edge of the hot band (K).
pub const HOT_FROM_K: f64 = 600.0;
/// At or above this equilibrium temperature (K) a planet is scorching.
pub const SCORCHING_FROM_K: f64 = 1000.0;

/// Earth's equilibrium temperature (255 K) up to its mean surface
/// temperature (288 K). Sits inside [`TemperatureBand::Temperate`].
pub const HABITABLE_TEMP_K: (f64, f64) = (255.0, 288.0);

/// Below this radius (R⊕) a planet is miniature.
pub const MINIATURE_BELOW_RADIUS: f64 = 0.5;
pub const EARTH_SIZED_BELOW_RADIUS: f64 = 1.6;
/// Upper edge (exclusive) of the sub-Neptune band (R⊕).
pub const SUB_NEPTUNE_BELOW_RADIUS: f64 = 4.0;
pub const NEPTUNE_LIKE_BELOW_RADIUS: f64 = 8.0;
/// At or above this radius (R⊕) a planet is a super-Jupiter.
pub const SUPER_JUPITER_FROM_RADIUS: f64 = 15.0;

/// Orbits shorter than one day are ultra-short.
pub const ULTRA_SHORT_BELOW_DAYS: f64 = 1.0;
pub const CLOSE_BELOW_DAYS: f64 = 100.0;
/// Orbits of a thousand days or more are wide.
pub const WIDE_FROM_DAYS: f64 = 1000.0;

pub const NEIGHBOR_BELOW_PC: f64 = 10.0;
pub const NEAR_BELOW_PC: f64 = 50.0;
pub const MODERATE_BELOW_PC: f64 = 250.0;
pub const FAR_BELOW_PC: f64 = 1000.0;

/// Light-years per parsec.
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.261_563_777;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TemperatureBand {
    Frigid,
    Cold,
    Temperate,
    Warm,
    Hot,
    Scorching,
}

impl TemperatureBand {
    pub fn from_kelvin(kelvin: f64) -> Self {
        match kelvin {
            t if t < FRIGID_BELOW_K => Self::Frigid,
            t if t < TEMPERATE_FROM_K => Self::Cold,
            t if t < TEMPERATE_BELOW_K => Self::Temperate,
            t if t < HOT_FROM_K => Self::Warm,
            t if t < SCORCHING_FROM_K => Self::Hot,
            _ => Self::Scorching,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frigid => "frigid",
            Self::Cold => "cold",
            Self::Temperate => "temperate",
            Self::Warm => "warm",
            Self::Hot => "hot",
            Self::Scorching => "scorching",
        }
    }

    /// Whether the band lies outside the range weirdness treats as ordinary.
    pub fn is_extreme(&self) -> bool {
        matches!(self, Self::Frigid | Self::Scorching)
    }
}

/// Distance from the Solar System, in parsecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DistanceBand {
    Neighbor,
    Near,
    Moderate,
    Far,
    Remote,
}

impl DistanceBand {
    pub fn from_parsecs(parsecs: f64) -> Self {
        match parsecs {
            d if d < NEIGHBOR_BELOW_PC => Self::Neighbor,
            d if d < NEAR_BELOW_PC => Self::Near,
            d if d < MODERATE_BELOW_PC => Self::Moderate,
            d if d < FAR_BELOW_PC => Self::Far,
            _ => Self::Remote,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Neighbor => "neighbor",
            Self::Near => "near",
            Self::Moderate => "moderate",
            Self::Far => "far",
            Self::Remote => "remote",
        }
    }
}

/// Size regime by radius in Earth radii.
///
/// | Band         | Radius (R⊕) |
/// |--------------|-------------|
/// | Miniature    | < 0.5       |
/// | EarthSized   | 0.5 – 1.6   |
/// | SubNeptune   | 1.6 – 4.0   |
/// | NeptuneLike  | 4.0 – 8.0   |
/// | GasGiant     | 8.0 – 15.0  |
/// | SuperJupiter | ≥ 15.0      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeBand {
    Miniature,
    EarthSized,
    SubNeptune,
    NeptuneLike,
    GasGiant,
    SuperJupiter,
}

impl SizeBand {
    pub fn from_earth_radii(radius: f64) -> Self {
        match radius {
            r if r < MINIATURE_BELOW_RADIUS => Self::Miniature,
            r if r < EARTH_SIZED_BELOW_RADIUS => Self::EarthSized,
            r if r < SUB_NEPTUNE_BELOW_RADIUS => Self::SubNeptune,
            r if r < NEPTUNE_LIKE_BELOW_RADIUS => Self::NeptuneLike,
            r if r < SUPER_JUPITER_FROM_RADIUS => Self::GasGiant,
            _ => Self::SuperJupiter,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Miniature => "miniature world",
            Self::EarthSized => "Earth-sized world",
            Self::SubNeptune => "sub-Neptune",
            Self::NeptuneLike => "Neptune-like world",
            Self::GasGiant => "gas giant",
            Self::SuperJupiter => "super-Jupiter",
        }
    }
}

/// Orbital period regime, in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrbitBand {
    UltraShort,
    Close,
    Moderate,
    Wide,
}

impl OrbitBand {
    pub fn from_days(days: f64) -> Self {
        match days {
            p if p < ULTRA_SHORT_BELOW_DAYS => Self::UltraShort,
            p if p < CLOSE_BELOW_DAYS => Self::Close,
            p if p < WIDE_FROM_DAYS => Self::Moderate,
            _ => Self::Wide,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::UltraShort => "ultra-short",
            Self::Close => "close",
            Self::Moderate => "moderate",
            Self::Wide => "wide",
        }
    }
}
