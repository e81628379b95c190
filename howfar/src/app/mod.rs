mod cli_coordinate;
mod howfar_app;
mod travel_profile;

pub use cli_coordinate::{parse_coordinate, CliCoordinate};
pub use howfar_app::HowfarApp;
pub use travel_profile::TravelProfile;
