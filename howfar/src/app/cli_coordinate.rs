use geo::Point;
use serde::{Deserialize, Serialize};

/// a WGS84 coordinate given on the command line as "lon,lat"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CliCoordinate {
    pub lon: f64,
    pub lat: f64,
}

impl CliCoordinate {
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

pub fn parse_coordinate(s: &str) -> Result<CliCoordinate, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("expected format: lon,lat, got: {s}"));
    }
    let lon = parse_lon(parts[0])?;
    let lat = parse_lat(parts[1])?;
    Ok(CliCoordinate { lon, lat })
}

impl std::fmt::Display for CliCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lon, self.lat)
    }
}

fn parse_lat(lat: &str) -> Result<f64, String> {
    parse_num(lat, -90.0, 90.0).map_err(|e| format!("invalid latitude: {e}"))
}

fn parse_lon(lon: &str) -> Result<f64, String> {
    parse_num(lon, -180.0, 180.0).map_err(|e| format!("invalid longitude: {e}"))
}

fn parse_num(s: &str, min: f64, max: f64) -> Result<f64, String> {
    let v = s
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("not a number: {s}"))?;
    if !v.is_finite() || v < min || max < v {
        Err(format!(
            "number '{v}' is not valid, must be in range [{min},{max}]"
        ))
    } else {
        Ok(v)
    }
}
