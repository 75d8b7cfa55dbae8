//! GeoJSON input and the fitted Mercator projection that turns it into SVG paths.

use serde::{Deserialize, Deserializer};
use std::f64::consts::FRAC_PI_4;

/// Latitudes beyond this project to infinity under Mercator.
const MAX_LAT: f64 = 85.051_128_78;

/// Inset of the drawable area inside the SVG viewBox; the top margin leaves room for the title.
pub const FIT_MARGIN_SIDE: f64 = 16.0;
pub const FIT_MARGIN_TOP: f64 = 70.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Feature {
    pub properties: FeatureProps,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureProps {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// `[lon, lat]` with any extra ordinates ignored.
pub type Position = Vec<f64>;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

fn string_or_number<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Int(i64),
        Float(f64),
    }
    Ok(match Id::deserialize(d)? {
        Id::Str(s) => s,
        Id::Int(i) => i.to_string(),
        Id::Float(f) => f.to_string(),
    })
}

impl Geometry {
    fn rings(&self) -> Vec<&Vec<Position>> {
        match self {
            Geometry::Polygon { coordinates } => coordinates.iter().collect(),
            Geometry::MultiPolygon { coordinates } => coordinates.iter().flatten().collect(),
            Geometry::Unsupported => Vec::new(),
        }
    }
}

fn lon_lat(p: &Position) -> Option<(f64, f64)> {
    match p.as_slice() {
        [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some((*lon, *lat)),
        _ => None,
    }
}

/// Unit Mercator, y pointing down.
fn mercator_raw(lon: f64, lat: f64) -> (f64, f64) {
    let phi = lat.clamp(-MAX_LAT, MAX_LAT).to_radians();
    (lon.to_radians(), -(FRAC_PI_4 + phi / 2.0).tan().ln())
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
    pub k: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Mercator {
    fn default() -> Self {
        Self {
            k: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }
}

impl Mercator {
    /// Scale and center so every coordinate of `fc` fits in `[x0,y0]..[x1,y1]`,
    /// aspect preserved.
    pub fn fit_extent(fc: &FeatureCollection, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for ring in fc.features.iter().filter_map(|f| f.geometry.as_ref()).flat_map(Geometry::rings) {
            for (lon, lat) in ring.iter().filter_map(lon_lat) {
                let (x, y) = mercator_raw(lon, lat);
                min = (min.0.min(x), min.1.min(y));
                max = (max.0.max(x), max.1.max(y));
            }
        }
        if !min.0.is_finite() {
            return Mercator::default();
        }
        let (w, h) = (x1 - x0, y1 - y0);
        let (bw, bh) = (max.0 - min.0, max.1 - min.1);
        let k = match (bw > 0.0, bh > 0.0) {
            (true, true) => (w / bw).min(h / bh),
            (true, false) => w / bw,
            (false, true) => h / bh,
            (false, false) => 1.0,
        };
        Self {
            k,
            tx: x0 + (w - k * (min.0 + max.0)) / 2.0,
            ty: y0 + (h - k * (min.1 + max.1)) / 2.0,
        }
    }

    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x, y) = mercator_raw(lon, lat);
        (self.k * x + self.tx, self.k * y + self.ty)
    }

    /// SVG path data, one closed subpath per ring.
    pub fn path_data(&self, geometry: Option<&Geometry>) -> String {
        let Some(geometry) = geometry else {
            return String::new();
        };
        let mut d = String::new();
        for ring in geometry.rings() {
            let mut first = true;
            for (lon, lat) in ring.iter().filter_map(lon_lat) {
                let (x, y) = self.project(lon, lat);
                d.push(if first { 'M' } else { 'L' });
                d.push_str(&format!("{:.2},{:.2}", x, y));
                first = false;
            }
            if !first {
                d.push('Z');
            }
        }
        d
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegionPath {
    pub id: String,
    pub name: String,
    pub d: String,
}

/// Project every feature for a `width`×`height` viewBox.
pub fn project_features(fc: &FeatureCollection, width: f64, height: f64) -> Vec<RegionPath> {
    let proj = Mercator::fit_extent(
        fc,
        FIT_MARGIN_SIDE,
        FIT_MARGIN_TOP,
        width - FIT_MARGIN_SIDE,
        height - FIT_MARGIN_SIDE,
    );
    fc.features
        .iter()
        .map(|f| RegionPath {
            id: f.properties.id.clone(),
            name: f.properties.name.clone(),
            d: proj.path_data(f.geometry.as_ref()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type":"Feature","properties":{"id":"11","name":"서울특별시"},
             "geometry":{"type":"Polygon","coordinates":[[[126.8,37.4],[127.2,37.4],[127.2,37.7],[126.8,37.7],[126.8,37.4]]]}},
            {"type":"Feature","properties":{"id":50,"name":"제주특별자치도"},
             "geometry":{"type":"MultiPolygon","coordinates":[[[[126.1,33.1,0],[126.9,33.1,0],[126.9,33.6,0],[126.1,33.1,0]]],[[[126.2,33.9],[126.3,33.9],[126.3,34.0],[126.2,33.9]]]]}},
            {"type":"Feature","properties":{"id":"99","name":"점"},
             "geometry":{"type":"Point","coordinates":[127.0,36.0]}}
        ]
    }"#;

    fn sample() -> FeatureCollection {
        serde_json::from_str(SAMPLE).unwrap()
    }

    #[test]
    fn parses_polygons_numeric_ids_and_unsupported_geometry() {
        let fc = sample();
        assert_eq!(fc.features.len(), 3);
        assert_eq!(fc.features[1].properties.id, "50");
        assert_eq!(fc.features[2].geometry, Some(Geometry::Unsupported));
    }

    #[test]
    fn fitted_points_stay_inside_extent() {
        let fc = sample();
        let (w, h) = (900.0, 600.0);
        let proj = Mercator::fit_extent(&fc, 16.0, 70.0, w - 16.0, h - 16.0);
        for f in &fc.features {
            if let Some(g) = &f.geometry {
                for ring in g.rings() {
                    for (lon, lat) in ring.iter().filter_map(lon_lat) {
                        let (x, y) = proj.project(lon, lat);
                        assert!(x >= 16.0 - 1e-6 && x <= w - 16.0 + 1e-6, "x={x}");
                        assert!(y >= 70.0 - 1e-6 && y <= h - 16.0 + 1e-6, "y={y}");
                    }
                }
            }
        }
    }

    #[test]
    fn north_is_up() {
        let fc = sample();
        let proj = Mercator::fit_extent(&fc, 0.0, 0.0, 500.0, 500.0);
        let (_, seoul_y) = proj.project(127.0, 37.5);
        let (_, jeju_y) = proj.project(126.5, 33.4);
        assert!(seoul_y < jeju_y);
    }

    #[test]
    fn path_data_closes_every_ring() {
        let paths = project_features(&sample(), 900.0, 600.0);
        assert_eq!(paths.len(), 3);
        assert!(paths[0].d.starts_with('M'));
        assert_eq!(paths[0].d.matches('Z').count(), 1);
        assert_eq!(paths[1].d.matches('M').count(), 2);
        assert_eq!(paths[1].d.matches('Z').count(), 2);
        assert_eq!(paths[2].d, "");
        assert_eq!(paths[0].name, "서울특별시");
    }

    #[test]
    fn empty_collection_gets_identity_fit() {
        let fc = FeatureCollection { features: vec![] };
        assert_eq!(Mercator::fit_extent(&fc, 0.0, 0.0, 10.0, 10.0), Mercator::default());
    }
}
