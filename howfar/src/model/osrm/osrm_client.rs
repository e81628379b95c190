use std::time::Duration;

use geo::Point;
use howfar_core::matrix::{DistanceMatrixClient, DistanceMatrixError, MatrixEntry};
use itertools::Itertools;

use super::OsrmTableResponse;
use crate::model::HowfarCliError;

/// blocking client for the OSRM `table` service. holds no per-request state,
/// so one instance can serve concurrent isochrone runs.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    base_url: String,
    profile: String,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(base_url: &str, profile: &str, timeout: Duration) -> Result<Self, HowfarCliError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HowfarCliError::HttpClientError(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            profile: profile.to_string(),
            client,
        })
    }

    /// builds the `table` request with the origin as the only source
    pub fn table_url(&self, origin: Point<f64>, destinations: &[Point<f64>]) -> String {
        let coordinates = std::iter::once(&origin)
            .chain(destinations.iter())
            .map(|p| format!("{},{}", p.x(), p.y()))
            .join(";");
        format!(
            "{}/table/v1/{}/{}?sources=0&generate_hints=false",
            self.base_url, self.profile, coordinates
        )
    }
}

impl DistanceMatrixClient for OsrmClient {
    fn table(
        &self,
        origin: Point<f64>,
        destinations: &[Point<f64>],
    ) -> Result<Vec<MatrixEntry>, DistanceMatrixError> {
        let url = self.table_url(origin, destinations);
        log::debug!("GET {url}");
        // OSRM reports query errors as a JSON body with a non-Ok code, so the
        // body is decoded regardless of the HTTP status
        let response = self.client.get(&url).send().map_err(|e| {
            DistanceMatrixError::RequestFailed(format!("GET {} failed: {e}", self.base_url))
        })?;
        let status = response.status();
        let body: OsrmTableResponse = response.json().map_err(|e| {
            DistanceMatrixError::MalformedResponse(format!("HTTP {status}: {e}"))
        })?;
        body.into_entries(destinations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_url() {
        let client =
            OsrmClient::new("http://localhost:5000/", "driving", Duration::from_secs(5)).unwrap();
        let url = client.table_url(
            Point::new(4.8912, 52.3731),
            &[Point::new(4.9, 52.38), Point::new(4.95, 52.4)],
        );
        assert_eq!(
            url,
            "http://localhost:5000/table/v1/driving/4.8912,52.3731;4.9,52.38;4.95,52.4?sources=0&generate_hints=false"
        );
    }

    #[test]
    fn test_bad_request_is_a_request_failure() {
        // 65536 is not a valid port, the request fails before any connection attempt
        let client =
            OsrmClient::new("http://127.0.0.1:65536", "foot", Duration::from_secs(2)).unwrap();
        match client.table(Point::new(4.8912, 52.3731), &[Point::new(4.9, 52.38)]) {
            Err(DistanceMatrixError::RequestFailed(_)) => {}
            other => panic!("expected request failure, found {other:?}"),
        }
    }
}
