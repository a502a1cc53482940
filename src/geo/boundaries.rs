//! Country boundary dataset: GeoJSON parsing, fetching and path building.

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use super::Projection;
use crate::error::SiteError;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<Geometry>,
}

/// Positions are read as vectors so datasets carrying altitude still parse.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    #[serde(other)]
    Unsupported,
}

/// A polygon as a list of linear rings of `[lon, lat]` positions.
pub type Polygon = Vec<Vec<[f64; 2]>>;

/// Polygon outlines used as the map background.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundaries {
    polygons: Vec<Polygon>,
}

impl Boundaries {
    /// Parses a GeoJSON `FeatureCollection`.
    ///
    /// Polygon and MultiPolygon geometries are kept; other geometry types
    /// and null geometries are skipped. Positions with fewer than two
    /// values are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Parse`] if the text is not a feature collection.
    pub fn from_geojson(target: &str, text: &str) -> Result<Self, SiteError> {
        let collection: FeatureCollection =
            serde_json::from_str(text).map_err(|e| SiteError::parse(target, e))?;

        let mut polygons = Vec::new();
        for geometry in collection.features.into_iter().filter_map(|f| f.geometry) {
            match geometry {
                Geometry::Polygon { coordinates } => polygons.push(to_polygon(coordinates)),
                Geometry::MultiPolygon { coordinates } => {
                    polygons.extend(coordinates.into_iter().map(to_polygon))
                }
                Geometry::Unsupported => {}
            }
        }

        debug!(target_url = %target, polygons = polygons.len(), "boundaries_parsed");
        Ok(Self { polygons })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Builds one SVG path `d` attribute per polygon.
    ///
    /// Each ring becomes `M x,y L x,y ... Z`. Positions that do not project
    /// are skipped; rings left with fewer than two points are omitted, as
    /// are polygons with no remaining rings.
    pub fn to_svg_paths(&self, projection: &Projection) -> Vec<String> {
        self.polygons
            .iter()
            .filter_map(|polygon| polygon_path(polygon, projection))
            .collect()
    }
}

fn to_polygon(rings: Vec<Vec<Vec<f64>>>) -> Polygon {
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .filter_map(|pos| match pos.as_slice() {
                    [lon, lat, ..] => Some([*lon, *lat]),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

fn polygon_path(polygon: &Polygon, projection: &Projection) -> Option<String> {
    let mut d = String::new();

    for ring in polygon {
        let points: Vec<(f64, f64)> = ring.iter().filter_map(|p| projection.project(*p)).collect();
        if points.len() < 2 {
            continue;
        }
        for (i, (x, y)) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{}{:.2},{:.2}", cmd, x, y));
        }
        d.push('Z');
    }

    (!d.is_empty()).then_some(d)
}

/// Fetches and parses the boundary dataset.
///
/// Locations with an `http://` or `https://` scheme are requested with
/// `client`; anything else is read as a local file path.
///
/// # Errors
///
/// Returns [`SiteError::Fetch`] on network failure, non-success status or
/// unreadable file, and [`SiteError::Parse`] on malformed JSON.
pub async fn fetch_boundaries(
    client: &reqwest::Client,
    location: &str,
) -> Result<Boundaries, SiteError> {
    let result = match read_location(client, location).await {
        Ok(text) => Boundaries::from_geojson(location, &text),
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        warn!(location = %location, error = %e, "boundaries_unavailable");
    }
    result
}

async fn read_location(client: &reqwest::Client, location: &str) -> Result<String, SiteError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let response = client
            .get(location)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SiteError::fetch(location, e))?;
        response.text().await.map_err(|e| SiteError::fetch(location, e))
    } else {
        tokio::fs::read_to_string(Path::new(location))
            .await
            .map_err(|e| SiteError::fetch(location, e))
    }
}
