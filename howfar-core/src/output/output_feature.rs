use geo::Geometry;
use geojson::JsonObject;
use serde_json::json;

use crate::algorithm::triangulation::Triangle;
use crate::model::{Isoband, SamplePoint};

/// a geometry with its attributes, ready to be written in any output format
#[derive(Debug, Clone)]
pub struct OutputFeature {
    pub geometry: Geometry<f64>,
    pub properties: JsonObject,
}

impl From<&Isoband> for OutputFeature {
    fn from(isoband: &Isoband) -> Self {
        let mut properties = JsonObject::new();
        properties.insert(String::from("band"), json!(isoband.time_bin.key()));
        properties.insert(String::from("lower"), json!(isoband.lower()));
        properties.insert(String::from("upper"), json!(isoband.upper()));
        OutputFeature {
            geometry: Geometry::MultiPolygon(isoband.polygons.clone()),
            properties,
        }
    }
}

impl From<&SamplePoint> for OutputFeature {
    fn from(sample: &SamplePoint) -> Self {
        let mut properties = JsonObject::new();
        properties.insert(String::from("v"), json!(sample.value));
        properties.insert(String::from("outlier"), json!(sample.outlier));
        properties.insert(String::from("displacement_km"), json!(sample.displacement_km));
        OutputFeature {
            geometry: Geometry::Point(sample.coordinate),
            properties,
        }
    }
}

impl From<&Triangle> for OutputFeature {
    fn from(triangle: &Triangle) -> Self {
        let [a, b, c] = triangle.vertices;
        let mut properties = JsonObject::new();
        properties.insert(String::from("id"), json!(triangle.id));
        properties.insert(String::from("a"), json!(a.value));
        properties.insert(String::from("b"), json!(b.value));
        properties.insert(String::from("c"), json!(c.value));
        OutputFeature {
            geometry: Geometry::Polygon(triangle.to_geo().to_polygon()),
            properties,
        }
    }
}
