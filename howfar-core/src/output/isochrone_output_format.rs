use geo::Geometry;
use serde::{Deserialize, Serialize};
use wkt::{ToWkt, TryFromWkt};

use super::OutputFeature;
use crate::pipeline::IsochroneError;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IsochroneOutputFormat {
    Wkt,
    #[default]
    #[serde(alias = "geojson")]
    GeoJson,
}

impl IsochroneOutputFormat {
    /// writes features as a GeoJSON FeatureCollection, or as one WKT geometry per line
    pub fn serialize_features(&self, features: &[OutputFeature]) -> Result<String, IsochroneError> {
        match self {
            IsochroneOutputFormat::Wkt => Ok(features
                .iter()
                .map(|f| f.geometry.wkt_string())
                .collect::<Vec<_>>()
                .join("\n")),
            IsochroneOutputFormat::GeoJson => {
                let features = features
                    .iter()
                    .map(|f| geojson::Feature {
                        bbox: None,
                        geometry: Some(serialize_geometry(&f.geometry)),
                        id: None,
                        properties: Some(f.properties.clone()),
                        foreign_members: None,
                    })
                    .collect();
                let collection = geojson::FeatureCollection {
                    bbox: None,
                    features,
                    foreign_members: None,
                };
                let result = serde_json::to_string(&collection)?;
                Ok(result)
            }
        }
    }

    /// reads back the geometries of serialized features
    pub fn deserialize_geometries(&self, s: &str) -> Result<Vec<Geometry<f64>>, IsochroneError> {
        match self {
            IsochroneOutputFormat::Wkt => s
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(|l| {
                    Geometry::<f64>::try_from_wkt_str(l).map_err(|e| {
                        IsochroneError::SerializationError(format!(
                            "failure deserializing WKT geometry due to: {e} - WKT string: \"{l}\""
                        ))
                    })
                })
                .collect(),
            IsochroneOutputFormat::GeoJson => {
                let geojson_obj = s.parse::<geojson::GeoJson>().map_err(|e| {
                    IsochroneError::SerializationError(format!(
                        "failure parsing GeoJSON due to: {e}"
                    ))
                })?;
                let collection = geojson::FeatureCollection::try_from(geojson_obj).map_err(|e| {
                    IsochroneError::SerializationError(format!(
                        "expected a GeoJSON FeatureCollection: {e}"
                    ))
                })?;
                collection
                    .features
                    .into_iter()
                    .filter_map(|f| f.geometry)
                    .map(|g| {
                        Geometry::<f64>::try_from(g).map_err(|e| {
                            IsochroneError::SerializationError(format!(
                                "failure converting GeoJSON to Geometry due to: {e}"
                            ))
                        })
                    })
                    .collect()
            }
        }
    }
}

impl std::fmt::Display for IsochroneOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IsochroneOutputFormat::Wkt => "wkt",
            IsochroneOutputFormat::GeoJson => "geojson",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for IsochroneOutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wkt" => Ok(IsochroneOutputFormat::Wkt),
            "geojson" | "geo_json" => Ok(IsochroneOutputFormat::GeoJson),
            other => Err(format!(
                "unknown output format '{other}', expected one of [geojson, wkt]"
            )),
        }
    }
}

fn serialize_geometry(geometry: &Geometry<f64>) -> geojson::Geometry {
    geojson::Geometry::new(geojson::Value::from(geometry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Isoband, TimeBin};
    use geo::{polygon, Area, MultiPolygon};

    fn isoband() -> Isoband {
        let square = polygon![
            (x: 4.8, y: 52.3),
            (x: 4.9, y: 52.3),
            (x: 4.9, y: 52.4),
            (x: 4.8, y: 52.4),
            (x: 4.8, y: 52.3),
        ];
        Isoband {
            time_bin: TimeBin {
                min_time: 0.0,
                max_time: 450.0,
            },
            polygons: MultiPolygon::new(vec![square]),
        }
    }

    #[test]
    fn test_geojson_feature_collection() {
        let features = vec![OutputFeature::from(&isoband())];
        let s = IsochroneOutputFormat::GeoJson.serialize_features(&features).unwrap();
        let value: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        let feature = &value["features"][0];
        assert_eq!(feature["geometry"]["type"], "MultiPolygon");
        assert_eq!(feature["properties"]["band"], "0-450");
        assert_eq!(feature["properties"]["lower"], 0.0);
        assert_eq!(feature["properties"]["upper"], 450.0);

        let geometries = IsochroneOutputFormat::GeoJson.deserialize_geometries(&s).unwrap();
        assert_eq!(geometries.len(), 1);
        assert!((geometries[0].unsigned_area() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_wkt_lines() {
        let features = vec![OutputFeature::from(&isoband()), OutputFeature::from(&isoband())];
        let s = IsochroneOutputFormat::Wkt.serialize_features(&features).unwrap();
        assert_eq!(s.lines().count(), 2);
        assert!(s.starts_with("MULTIPOLYGON"));
        let geometries = IsochroneOutputFormat::Wkt.deserialize_geometries(&s).unwrap();
        assert_eq!(geometries.len(), 2);
    }

    #[test]
    fn test_format_names() {
        let format: IsochroneOutputFormat = serde_json::from_str("\"wkt\"").unwrap();
        assert_eq!(format, IsochroneOutputFormat::Wkt);
        let format: IsochroneOutputFormat = serde_json::from_str("\"geo_json\"").unwrap();
        assert_eq!(format, IsochroneOutputFormat::GeoJson);
        let format: IsochroneOutputFormat = serde_json::from_str("\"geojson\"").unwrap();
        assert_eq!(format, IsochroneOutputFormat::GeoJson);
        assert_eq!(
            "GeoJSON".parse::<IsochroneOutputFormat>(),
            Ok(IsochroneOutputFormat::GeoJson)
        );
        assert_eq!(
            IsochroneOutputFormat::Wkt.to_string().parse::<IsochroneOutputFormat>(),
            Ok(IsochroneOutputFormat::Wkt)
        );
        assert!("shapefile".parse::<IsochroneOutputFormat>().is_err());
    }
}
