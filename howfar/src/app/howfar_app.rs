use std::time::Duration;

use clap::Parser;
use howfar_core::output::{IsochroneOutputFormat, OutputLayer};
use howfar_core::pipeline::{self, IsochroneParameters};
use uom::si::f64::Time;
use uom::si::length::kilometer;
use uom::si::time::{minute, second};

use super::{parse_coordinate, CliCoordinate, TravelProfile};
use crate::config::HowfarConfiguration;
use crate::model::osrm::OsrmClient;
use crate::model::HowfarCliError;

/// Returns a GeoJSON file indicating how far you can travel starting at the provided coordinates
#[derive(Parser, Debug)]
#[command(name = "howfar", author, version, about, long_about = None)]
pub struct HowfarApp {
    #[arg(
        short,
        long,
        value_parser = parse_coordinate,
        allow_hyphen_values = true,
        help = "start coordinate as \"lon,lat\""
    )]
    pub coordinates: CliCoordinate,
    #[arg(short, long, default_value_t = 15.0, help = "max travel time in minutes")]
    pub distance: f64,
    #[arg(short = 't', long, value_enum, help = "transport type")]
    pub profile: Option<TravelProfile>,
    #[arg(short = 'n', long, help = "link to the OSRM provider")]
    pub service_provider: Option<String>,
    #[arg(
        short,
        long,
        help = "output file, if provided. otherwise output is sent to stdout"
    )]
    pub output: Option<String>,
    #[arg(long, help = "sampling detail, each level adds two rings of samples")]
    pub detail: Option<u32>,
    #[arg(long, help = "number of isobands to split the travel time into")]
    pub bands: Option<u32>,
    #[arg(long, help = "output format, geojson or wkt")]
    pub format: Option<IsochroneOutputFormat>,
    #[arg(long, help = "what to write out: isobands, samples or tin")]
    pub layer: Option<OutputLayer>,
    #[arg(long, help = "path to a TOML or JSON file with howfar parameters")]
    pub configuration_file: Option<String>,
}

impl HowfarApp {
    /// the file and environment configuration with command line arguments applied on top
    pub fn configuration(&self) -> Result<HowfarConfiguration, HowfarCliError> {
        let mut conf = HowfarConfiguration::load(self.configuration_file.as_deref())?;
        if let Some(profile) = self.profile {
            conf.profile = profile;
        }
        if let Some(service_provider) = &self.service_provider {
            conf.service_provider = service_provider.clone();
        }
        if let Some(detail) = self.detail {
            conf.detail = detail;
        }
        if let Some(bands) = self.bands {
            conf.bands = bands;
        }
        if let Some(format) = self.format {
            conf.format = format;
        }
        if let Some(layer) = self.layer {
            conf.layer = layer;
        }
        Ok(conf)
    }

    pub fn parameters(&self, conf: &HowfarConfiguration) -> IsochroneParameters {
        let duration = Time::new::<minute>(self.distance);
        let reach = conf.profile.reach(duration);
        IsochroneParameters::new(
            self.coordinates.to_point(),
            reach.get::<kilometer>(),
            duration.get::<second>(),
        )
        .with_detail(conf.detail)
        .with_bands(conf.bands)
    }

    pub fn run(&self) -> Result<(), HowfarCliError> {
        let conf = self.configuration()?;
        let params = self.parameters(&conf);
        log::info!(
            "requesting {} isochrone(s) by {} for ({}), estimated reach in {} minutes = {} km",
            params.bands,
            conf.profile,
            self.coordinates,
            self.distance,
            params.reach_km()
        );
        let client = OsrmClient::new(
            &conf.service_provider,
            conf.profile.osrm_profile(),
            Duration::from_secs(conf.timeout_seconds),
        )?;
        let result = pipeline::run(&params, &client)?;
        let features = conf.layer.features(&result);
        let serialized = conf.format.serialize_features(&features)?;
        match &self.output {
            Some(f) => {
                log::info!(
                    "writing {} {} feature(s) as {} to {f}",
                    features.len(),
                    conf.layer,
                    conf.format
                );
                std::fs::write(f, serialized)?;
            }
            None => println!("{serialized}"),
        }
        Ok(())
    }
}
