use serde::{Deserialize, Serialize};

use super::OutputFeature;
use crate::pipeline::IsochroneResult;

/// which artifact of an isochrone run to write out
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputLayer {
    #[default]
    Isobands,
    /// the measured samples, including outliers
    Samples,
    Tin,
}

impl OutputLayer {
    pub fn features(&self, result: &IsochroneResult) -> Vec<OutputFeature> {
        match self {
            OutputLayer::Isobands => result.isobands.iter().map(OutputFeature::from).collect(),
            OutputLayer::Samples => result.samples.iter().map(OutputFeature::from).collect(),
            OutputLayer::Tin => result.tin.triangles().iter().map(OutputFeature::from).collect(),
        }
    }
}

impl std::fmt::Display for OutputLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputLayer::Isobands => "isobands",
            OutputLayer::Samples => "samples",
            OutputLayer::Tin => "tin",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for OutputLayer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "isobands" => Ok(OutputLayer::Isobands),
            "samples" => Ok(OutputLayer::Samples),
            "tin" => Ok(OutputLayer::Tin),
            other => Err(format!(
                "unknown output layer '{other}', expected one of [isobands, samples, tin]"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{DistanceMatrixClient, DistanceMatrixError, MatrixEntry};
    use crate::output::IsochroneOutputFormat;
    use crate::pipeline::{self, IsochroneParameters};
    use crate::util::geo_utils;
    use geo::{Geometry, Point};

    /// 120 seconds per kilometer. every fifth destination is snapped 5 km
    /// away and becomes an outlier
    struct SnappingClient;

    impl DistanceMatrixClient for SnappingClient {
        fn table(
            &self,
            origin: Point<f64>,
            destinations: &[Point<f64>],
        ) -> Result<Vec<MatrixEntry>, DistanceMatrixError> {
            Ok(destinations
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let location = if i % 5 == 0 {
                        Point::new(d.x(), d.y() + 0.045)
                    } else {
                        *d
                    };
                    MatrixEntry {
                        duration: Some(120.0 * geo_utils::haversine_km(origin, *d)),
                        location,
                    }
                })
                .collect())
        }
    }

    fn result() -> IsochroneResult {
        let params = IsochroneParameters::new(Point::new(4.8912, 52.3731), 10.0, 900.0)
            .with_detail(2)
            .with_bands(2);
        pipeline::run(&params, &SnappingClient).unwrap()
    }

    #[test]
    fn test_samples_layer() {
        let result = result();
        let features = OutputLayer::Samples.features(&result);
        assert_eq!(features.len(), result.samples.len());
        assert!(features.iter().any(|f| f.properties["outlier"] == true));
        assert!(features.iter().any(|f| f.properties["outlier"] == false));
        for (feature, sample) in features.iter().zip(result.samples.iter()) {
            assert_eq!(feature.geometry, Geometry::Point(sample.coordinate));
            assert_eq!(feature.properties["v"], serde_json::json!(sample.value));
            assert_eq!(feature.properties["outlier"], sample.outlier);
            assert_eq!(
                feature.properties["displacement_km"],
                serde_json::json!(sample.displacement_km)
            );
        }

        let s = IsochroneOutputFormat::GeoJson.serialize_features(&features).unwrap();
        let value: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(value["features"][0]["geometry"]["type"], "Point");
    }

    #[test]
    fn test_tin_layer() {
        let result = result();
        let features = OutputLayer::Tin.features(&result);
        assert_eq!(features.len(), result.tin.len());
        for (idx, feature) in features.iter().enumerate() {
            assert_eq!(feature.properties["id"], idx);
            match &feature.geometry {
                Geometry::Polygon(p) => assert_eq!(p.exterior().0.len(), 4),
                other => panic!("expected a polygon, found {other:?}"),
            }
            let triangle = &result.tin.triangles()[idx];
            assert_eq!(feature.properties["a"], triangle.vertices[0].value);
        }

        let s = IsochroneOutputFormat::GeoJson.serialize_features(&features).unwrap();
        let geometries = IsochroneOutputFormat::GeoJson.deserialize_geometries(&s).unwrap();
        assert_eq!(geometries.len(), result.tin.len());
    }

    #[test]
    fn test_isobands_layer() {
        let result = result();
        let features = OutputLayer::default().features(&result);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].properties["band"], "0-450");
        assert_eq!(features[1].properties["band"], "450-900");
    }

    #[test]
    fn test_layer_names() {
        for layer in [OutputLayer::Isobands, OutputLayer::Samples, OutputLayer::Tin] {
            assert_eq!(layer.to_string().parse::<OutputLayer>(), Ok(layer));
            let json = serde_json::to_string(&layer).unwrap();
            assert_eq!(json, format!("\"{layer}\""));
        }
        assert_eq!(" TIN ".parse::<OutputLayer>(), Ok(OutputLayer::Tin));
        assert!("contours".parse::<OutputLayer>().is_err());
    }
}
