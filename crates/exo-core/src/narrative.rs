//! Short descriptive narration of a planet.
//!
//! A narration is a fixed sequence of clauses: opening, size, temperature,
//! distance and a closing framing chosen by [`NarrativeContext`]. Each clause
//! has a fallback for missing data, so the result is never empty. Wording for
//! size, temperature and distance comes from the shared band table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bands::{DistanceBand, LIGHT_YEARS_PER_PARSEC, SizeBand, TemperatureBand};
use crate::error::ParseError;
use crate::planet::PlanetRecord;
use crate::scoring::{earth_like_score, weirdness_score};

/// How a planet was surfaced to the reader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeContext {
    #[default]
    Random,
    EarthLike,
    Weird,
    Closest,
}

impl NarrativeContext {
    pub const ALL: [NarrativeContext; 4] = [
        NarrativeContext::Random,
        NarrativeContext::EarthLike,
        NarrativeContext::Weird,
        NarrativeContext::Closest,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NarrativeContext::Random => "random",
            NarrativeContext::EarthLike => "earthlike",
            NarrativeContext::Weird => "weird",
            NarrativeContext::Closest => "closest",
        }
    }
}

impl fmt::Display for NarrativeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NarrativeContext {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(NarrativeContext::Random),
            "earthlike" | "earth-like" | "earth_like" => Ok(NarrativeContext::EarthLike),
            "weird" => Ok(NarrativeContext::Weird),
            "closest" => Ok(NarrativeContext::Closest),
            _ => Err(ParseError::new("narrative context", s)),
        }
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

fn opening(p: &PlanetRecord) -> String {
    let name = if p.name.trim().is_empty() {
        "This planet"
    } else {
        p.name.trim()
    };
    match (p.host(), p.spectral_type()) {
        (Some(host), Some(spectral)) => {
            format!("{name} orbits {host}, {} {spectral}-type star.", article(spectral))
        }
        (Some(host), None) => format!("{name} orbits {host}."),
        (None, _) => format!("{name} orbits an uncatalogued star."),
    }
}

fn size_clause(p: &PlanetRecord) -> String {
    let Some(radius) = p.radius() else {
        return "Its size has not been measured.".to_string();
    };
    let label = SizeBand::from_earth_radii(radius).label();
    format!(
        "At {radius:.2} times Earth's radius, it is {} {label}.",
        article(label)
    )
}

fn temperature_clause(p: &PlanetRecord) -> String {
    let Some(kelvin) = p.temperature() else {
        return "Its temperature remains a mystery.".to_string();
    };
    let description = match TemperatureBand::from_kelvin(kelvin) {
        TemperatureBand::Frigid => "a frigid, frozen world",
        TemperatureBand::Cold => "a cold world, colder than any Earth winter",
        TemperatureBand::Temperate => "a temperate world where liquid water might persist",
        TemperatureBand::Warm => "a warm world, hotter than any Earth desert",
        TemperatureBand::Hot => "a hot world baked by its star",
        TemperatureBand::Scorching => "a scorching inferno hot enough to melt metal",
    };
    format!("Its equilibrium temperature of about {kelvin:.0} K makes it {description}.")
}

fn distance_clause(p: &PlanetRecord) -> String {
    let Some(parsecs) = p.distance() else {
        return "Its distance from Earth has not been measured.".to_string();
    };
    match DistanceBand::from_parsecs(parsecs) {
        DistanceBand::Neighbor => {
            format!("At {parsecs:.1} parsecs away, it is one of our nearest neighbors.")
        }
        DistanceBand::Near => {
            format!("It lies {parsecs:.1} parsecs away, close by galactic standards.")
        }
        DistanceBand::Moderate => format!("It lies {parsecs:.1} parsecs away."),
        DistanceBand::Far => format!("It lies a distant {parsecs:.1} parsecs from Earth."),
        DistanceBand::Remote => {
            format!("It lies {parsecs:.0} parsecs away, deep in the galaxy.")
        }
    }
}

fn discovery_closing(p: &PlanetRecord) -> String {
    const TAIL: &str = "one of thousands of worlds found beyond the Solar System.";
    let method = p.method().map(str::to_lowercase);
    match (p.discovery_year, method) {
        (Some(year), Some(method)) => {
            format!("It was discovered in {year} via the {method} method, {TAIL}")
        }
        (Some(year), None) => format!("It was discovered in {year}, {TAIL}"),
        (None, Some(method)) => format!("It was discovered via the {method} method, {TAIL}"),
        (None, None) => format!("Its discovery story is not recorded, but it is {TAIL}"),
    }
}

fn habitability_closing(p: &PlanetRecord) -> String {
    match earth_like_score(p) {
        0 => "Little about it resembles Earth, which makes the worlds that do all the more \
              precious."
            .to_string(),
        s @ 1..70 => {
            format!("With an Earth-likeness score of {s}/100, it shares some traits with home.")
        }
        s => format!(
            "With an Earth-likeness score of {s}/100, it ranks among the most Earth-like \
             worlds we know."
        ),
    }
}

fn extremity_closing(p: &PlanetRecord) -> String {
    match weirdness_score(p) {
        0 => "By exoplanet standards it is remarkably ordinary, which is its own kind of rare."
            .to_string(),
        w @ 1..50 => format!("With a weirdness score of {w}/100, it has a few surprises."),
        w => format!(
            "With a weirdness score of {w}/100, it is one of the strangest worlds in the \
             catalog."
        ),
    }
}

fn proximity_closing(p: &PlanetRecord) -> String {
    match p.distance() {
        Some(parsecs) => {
            let light_years = parsecs * LIGHT_YEARS_PER_PARSEC;
            format!(
                "Its light takes about {light_years:.1} years to reach us, making it a \
                 natural target for a closer look."
            )
        }
        None => "Its exact distance is uncertain, so its place among our neighbors is still \
                 being worked out."
            .to_string(),
    }
}

fn closing(p: &PlanetRecord, context: NarrativeContext) -> String {
    match context {
        NarrativeContext::Random => discovery_closing(p),
        NarrativeContext::EarthLike => habitability_closing(p),
        NarrativeContext::Weird => extremity_closing(p),
        NarrativeContext::Closest => proximity_closing(p),
    }
}

/// Compose a short description of `p` framed for the way it was surfaced.
/// Deterministic: the same record and context always give the same text.
pub fn narrate(p: &PlanetRecord, context: NarrativeContext) -> String {
    [
        opening(p),
        size_clause(p),
        temperature_clause(p),
        distance_clause(p),
        closing(p, context),
    ]
    .join(" ")
}
