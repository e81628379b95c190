mod howfar_cli_error;
pub mod osrm;

pub use howfar_cli_error::HowfarCliError;
