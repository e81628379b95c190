use geo::Point;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time};
use uom::si::length::kilometer;
use uom::si::time::second;

use super::IsochroneError;
use crate::model::TimeBin;

pub const DEFAULT_DETAIL: u32 = 3;
pub const DEFAULT_BANDS: u32 = 3;
/// upper bound on the detail level, 2 * 11 * MAX_DETAIL samples per query
pub const MAX_DETAIL: u32 = 50;

/// inputs to a single-origin isochrone run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsochroneParameters {
    pub origin: Point<f64>,
    /// assumed maximum distance reachable from the origin
    pub reach: Length,
    /// travel time budget, the upper bound of the farthest band
    pub budget: Time,
    /// each detail level adds two rings of samples
    pub detail: u32,
    pub bands: u32,
}

impl IsochroneParameters {
    pub fn new(origin: Point<f64>, reach_km: f64, budget_seconds: f64) -> Self {
        Self {
            origin,
            reach: Length::new::<kilometer>(reach_km),
            budget: Time::new::<second>(budget_seconds),
            detail: DEFAULT_DETAIL,
            bands: DEFAULT_BANDS,
        }
    }

    pub fn with_detail(mut self, detail: u32) -> Self {
        self.detail = detail;
        self
    }

    pub fn with_bands(mut self, bands: u32) -> Self {
        self.bands = bands;
        self
    }

    pub fn reach_km(&self) -> f64 {
        self.reach.get::<kilometer>()
    }

    pub fn budget_seconds(&self) -> f64 {
        self.budget.get::<second>()
    }

    /// rejects parameters no pipeline stage could work with
    pub fn validate(&self) -> Result<(), IsochroneError> {
        let (x, y) = self.origin.x_y();
        let valid_lon = x.is_finite() && (-180.0..=180.0).contains(&x);
        let valid_lat = y.is_finite() && (-90.0..=90.0).contains(&y);
        if !valid_lon || !valid_lat {
            return Err(IsochroneError::InvalidConfiguration(format!(
                "origin ({x}, {y}) is not a valid WGS84 coordinate"
            )));
        }
        let reach = self.reach_km();
        if !reach.is_finite() || reach <= 0.0 {
            return Err(IsochroneError::InvalidConfiguration(format!(
                "reach must be strictly positive, found {reach} km"
            )));
        }
        let budget = self.budget_seconds();
        if !budget.is_finite() || budget <= 0.0 {
            return Err(IsochroneError::InvalidConfiguration(format!(
                "travel time budget must be strictly positive, found {budget} seconds"
            )));
        }
        if self.detail == 0 || self.detail > MAX_DETAIL {
            return Err(IsochroneError::InvalidConfiguration(format!(
                "detail level must be in range [1,{MAX_DETAIL}], found {}",
                self.detail
            )));
        }
        TimeBin::create_bins(budget, self.bands)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amsterdam() -> IsochroneParameters {
        IsochroneParameters::new(Point::new(4.8912, 52.3731), 10.0, 900.0)
    }

    #[test]
    fn test_defaults() {
        let params = amsterdam();
        assert_eq!(params.detail, 3);
        assert_eq!(params.bands, 3);
        assert!((params.reach_km() - 10.0).abs() < 1e-9);
        assert!((params.budget_seconds() - 900.0).abs() < 1e-9);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = vec![
            IsochroneParameters::new(Point::new(4.8912, 52.3731), 0.0, 900.0),
            IsochroneParameters::new(Point::new(4.8912, 52.3731), 10.0, -1.0),
            IsochroneParameters::new(Point::new(f64::NAN, 52.3731), 10.0, 900.0),
            IsochroneParameters::new(Point::new(4.8912, 95.0), 10.0, 900.0),
            amsterdam().with_detail(0),
            amsterdam().with_detail(MAX_DETAIL + 1),
            amsterdam().with_detail(u32::MAX),
            amsterdam().with_bands(0),
        ];
        for params in cases {
            match params.validate() {
                Err(IsochroneError::InvalidConfiguration(_)) => {}
                other => {
                    panic!("expected invalid configuration for {params:?}, found {other:?}")
                }
            }
        }
    }

    #[test]
    fn test_validate_accepts_max_detail() {
        assert!(amsterdam().with_detail(MAX_DETAIL).validate().is_ok());
    }
}
