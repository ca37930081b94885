use serde::{Deserialize, Serialize};

/// Name of the synthetic Earth reference record.
pub const EARTH_NAME: &str = "Earth";

/// One row of the exoplanet catalog.
///
/// Field names on the wire follow the NASA Exoplanet Archive columns
/// (`pl_name`, `pl_rade`, `sy_dist`, ...). Every attribute except `name` may be
/// absent; an absent value is never the same thing as zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    #[serde(rename = "pl_name", default)]
    pub name: String,
    #[serde(rename = "hostname", default)]
    pub host_star_name: Option<String>,
    #[serde(rename = "pl_rade", default)]
    pub radius_earth: Option<f64>,
    #[serde(rename = "pl_bmasse", default)]
    pub mass_earth: Option<f64>,
    #[serde(rename = "pl_orbper", default)]
    pub orbital_period_days: Option<f64>,
    #[serde(rename = "sy_dist", default)]
    pub distance_parsecs: Option<f64>,
    #[serde(rename = "pl_eqt", default)]
    pub equilibrium_temp_k: Option<f64>,
    #[serde(rename = "pl_insol", default)]
    pub insolation_earth: Option<f64>,
    #[serde(rename = "discoveryyear", alias = "disc_year", default)]
    pub discovery_year: Option<i32>,
    #[serde(rename = "discoverymethod", default)]
    pub discovery_method: Option<String>,
    #[serde(rename = "disc_facility", default)]
    pub discovery_facility: Option<String>,
    #[serde(rename = "st_spectype", default)]
    pub host_star_spectral_type: Option<String>,
    #[serde(rename = "st_teff", default)]
    pub host_star_temp_k: Option<f64>,
    #[serde(rename = "image", default)]
    pub image_url: Option<String>,
}

/// Drop non-finite values so NaN/inf behave exactly like a missing column.
fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// Treat empty strings like missing columns.
fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

impl PlanetRecord {
    /// A record carrying only a name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// The synthetic Earth baseline used in comparisons.
    pub fn earth_reference() -> Self {
        Self {
            name: EARTH_NAME.to_string(),
            host_star_name: Some("Sun".to_string()),
            radius_earth: Some(1.0),
            mass_earth: Some(1.0),
            orbital_period_days: Some(365.25),
            // 1 AU in parsecs
            distance_parsecs: Some(0.000_015_8),
            equilibrium_temp_k: Some(255.0),
            insolation_earth: Some(1.0),
            discovery_year: None,
            discovery_method: Some("Known".to_string()),
            discovery_facility: None,
            host_star_spectral_type: Some("G2V".to_string()),
            host_star_temp_k: Some(5772.0),
            image_url: None,
        }
    }

    pub fn is_reference(&self) -> bool {
        self.name == EARTH_NAME
    }

    pub fn radius(&self) -> Option<f64> {
        finite(self.radius_earth)
    }

    pub fn mass(&self) -> Option<f64> {
        finite(self.mass_earth)
    }

    pub fn period(&self) -> Option<f64> {
        finite(self.orbital_period_days)
    }

    pub fn distance(&self) -> Option<f64> {
        finite(self.distance_parsecs)
    }

    pub fn temperature(&self) -> Option<f64> {
        finite(self.equilibrium_temp_k)
    }

    pub fn insolation(&self) -> Option<f64> {
        finite(self.insolation_earth)
    }

    pub fn host_temperature(&self) -> Option<f64> {
        finite(self.host_star_temp_k)
    }

    pub fn host(&self) -> Option<&str> {
        non_blank(self.host_star_name.as_deref())
    }

    pub fn method(&self) -> Option<&str> {
        non_blank(self.discovery_method.as_deref())
    }

    pub fn facility(&self) -> Option<&str> {
        non_blank(self.discovery_facility.as_deref())
    }

    pub fn spectral_type(&self) -> Option<&str> {
        non_blank(self.host_star_spectral_type.as_deref())
    }
}
