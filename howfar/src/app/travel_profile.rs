use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time, Velocity};
use uom::si::velocity::kilometer_per_hour;

/// mode of transport, determines the OSRM profile and the assumed top speed
/// used to size the sampling area
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TravelProfile {
    #[default]
    Car,
    Bike,
    Foot,
}

impl TravelProfile {
    /// name of the profile in the OSRM service path
    pub fn osrm_profile(&self) -> &'static str {
        match self {
            TravelProfile::Car => "driving",
            TravelProfile::Bike => "bike",
            TravelProfile::Foot => "foot",
        }
    }

    pub fn max_speed(&self) -> Velocity {
        let kmh = match self {
            TravelProfile::Car => 100.0,
            TravelProfile::Bike => 30.0,
            TravelProfile::Foot => 10.0,
        };
        Velocity::new::<kilometer_per_hour>(kmh)
    }

    /// farthest distance coverable within `duration` at the top speed
    pub fn reach(&self, duration: Time) -> Length {
        self.max_speed() * duration
    }
}

impl std::fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TravelProfile::Car => "car",
            TravelProfile::Bike => "bike",
            TravelProfile::Foot => "foot",
        };
        write!(f, "{s}")
    }
}
