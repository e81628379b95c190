mod isochrone_output_format;
mod output_feature;
mod output_layer;

pub use isochrone_output_format::IsochroneOutputFormat;
pub use output_feature::OutputFeature;
pub use output_layer::OutputLayer;
