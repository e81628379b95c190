mod isochrone_error;
mod isochrone_parameters;
mod isochrone_pipeline;
mod isochrone_result;

pub use isochrone_error::IsochroneError;
pub use isochrone_parameters::{IsochroneParameters, DEFAULT_BANDS, DEFAULT_DETAIL, MAX_DETAIL};
pub use isochrone_pipeline::run;
pub use isochrone_result::IsochroneResult;
