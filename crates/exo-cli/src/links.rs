//! External "learn more" links per planet.
//!
//! A handful of well-known planets have curated NASA pages. Everything else
//! falls back to the NASA Exoplanet Archive overview page for the name.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const ARCHIVE_OVERVIEW: &str =
    "https://exoplanetarchive.ipac.caltech.edu/cgi-bin/DisplayOverview/nph-DisplayOverview?objname=";

/// Curated pages keyed by normalized planet name.
const CURATED: &[(&str, &str)] = &[
    (
        "kepler-186f",
        "https://exoplanets.nasa.gov/alien-worlds/exoplanet-travel-bureau/explore-kepler-186f/?travel_bureau=true",
    ),
    ("kelt-9b", "https://science.nasa.gov/exoplanet-catalog/kelt-9-b/"),
    (
        "proximacentaurib",
        "https://science.nasa.gov/exoplanet-catalog/proxima-centauri-b/",
    ),
    (
        "trappist-1e",
        "https://exoplanets.nasa.gov/alien-worlds/exoplanet-travel-bureau/trappist-1e-guided-tour/?intent=021",
    ),
    ("toi-715b", "https://science.nasa.gov/exoplanet-catalog/toi-715-b/"),
    (
        "hd40307g",
        "https://exoplanets.nasa.gov/alien-worlds/exoplanet-travel-bureau/hd-40307g-guided-tour/?intent=021",
    ),
    (
        "55cancrie",
        "https://exoplanets.nasa.gov/alien-worlds/exoplanet-travel-bureau/explore-55-cancri-e/?travel_bureau=true&intent=021",
    ),
    ("wasp-12b", "https://science.nasa.gov/exoplanet-catalog/wasp-12-b/"),
    ("k2-18b", "https://science.nasa.gov/exoplanet-catalog/k2-18-b/"),
    (
        "psrb1620-26b",
        "https://science.nasa.gov/exoplanet-catalog/psr-b1620-26-b/",
    ),
    ("gliese667cc", "https://science.nasa.gov/exoplanet-catalog/gj-667-c-c/"),
    ("gj1002b", "https://science.nasa.gov/exoplanet-catalog/gj-1002-b/"),
];

/// Lower-case with all whitespace removed, so `Kepler-186 f` and
/// `Kepler-186f` share an entry.
fn normalize(name: &str) -> String {
    WHITESPACE.replace_all(name, "").to_lowercase()
}

/// Percent-encode everything outside the URI-component unreserved set.
fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

pub fn learn_more_url(name: &str) -> String {
    let key = normalize(name);
    CURATED
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, url)| url.to_string())
        .unwrap_or_else(|| format!("{ARCHIVE_OVERVIEW}{}", encode_component(name.trim())))
}
