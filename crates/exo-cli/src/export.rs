//! CSV and JSON export of a comparison.
//!
//! Values are the metric formatters' output verbatim, so an export always
//! matches what the comparison table shows.

use anyhow::Result;
use clap::ValueEnum;
use exo_core::{Metric, PlanetRecord};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn render(&self, metrics: &[Metric], records: &[&PlanetRecord]) -> Result<String> {
        match self {
            ExportFormat::Json => to_json(metrics, records),
            ExportFormat::Csv => Ok(to_csv(metrics, records)),
        }
    }
}

/// One object per planet: `name` plus one key per metric label.
pub fn to_json(metrics: &[Metric], records: &[&PlanetRecord]) -> Result<String> {
    let rows: Vec<Value> = records
        .iter()
        .map(|p| {
            let mut row = Map::new();
            row.insert("name".to_string(), Value::String(p.name.clone()));
            for metric in metrics {
                row.insert(metric.label.to_string(), Value::String(metric.format(p)));
            }
            Value::Object(row)
        })
        .collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

pub fn to_csv(metrics: &[Metric], records: &[&PlanetRecord]) -> String {
    let header = std::iter::once(quote("Planet"))
        .chain(metrics.iter().map(|m| quote(&m.header())))
        .collect::<Vec<_>>()
        .join(",");
    let rows = records.iter().map(|p| {
        std::iter::once(quote(&p.name))
            .chain(metrics.iter().map(|m| quote(&m.format(p))))
            .collect::<Vec<_>>()
            .join(",")
    });
    std::iter::once(header)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use exo_core::{COMPARISON_METRICS, MetricCategory, metrics_in};

    fn proxima() -> PlanetRecord {
        PlanetRecord {
            radius_earth: Some(1.08),
            mass_earth: None,
            discovery_method: Some("Radial \"Doppler\" Velocity".to_string()),
            ..PlanetRecord::named("Proxima Cen b")
        }
    }

    #[test]
    fn test_csv_layout() {
        let p = proxima();
        let csv = to_csv(&metrics_in(Some(MetricCategory::Size)), &[&p]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines[0], "\"Planet\",\"Radius (R⊕)\",\"Mass (M⊕)\"");
        assert_eq!(lines[1], "\"Proxima Cen b\",\"1.08\",\"Unknown\"");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_escapes_quotes() {
        let p = proxima();
        let csv = to_csv(&metrics_in(Some(MetricCategory::Discovery)), &[&p]);
        assert!(csv.starts_with("\"Planet\",\"Discovery Year\",\"Discovery Method\""));
        assert!(csv.ends_with("\"Unknown\",\"Radial \"\"Doppler\"\" Velocity\""));
    }

    #[test]
    fn test_csv_every_cell_quoted() {
        let p = proxima();
        let earth = PlanetRecord::earth_reference();
        let csv = to_csv(&COMPARISON_METRICS, &[&earth, &p]);
        for line in csv.split('\n') {
            let inner = line
                .strip_prefix('"')
                .and_then(|l| l.strip_suffix('"'))
                .unwrap();
            let cells: Vec<&str> = inner.split("\",\"").collect();
            assert_eq!(cells.len(), COMPARISON_METRICS.len() + 1, "{line}");
        }
    }

    #[test]
    fn test_json_matches_formatter() {
        let p = proxima();
        let earth = PlanetRecord::earth_reference();
        let json = to_json(&COMPARISON_METRICS, &[&earth, &p]).unwrap();
        let rows: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], "Earth");
        for metric in &COMPARISON_METRICS {
            assert_eq!(rows[1][metric.label], metric.format(&p));
        }
        assert_eq!(rows[1]["Radius"], "1.08");
        assert_eq!(rows[1]["Mass"], "Unknown");
    }

    #[test]
    fn test_render_dispatch() {
        let p = proxima();
        let metrics = metrics_in(None);
        let csv = ExportFormat::Csv.render(&metrics, &[&p]).unwrap();
        assert!(csv.starts_with("\"Planet\","));
        assert!(ExportFormat::Json.render(&metrics, &[&p]).unwrap().starts_with('['));
    }
}
