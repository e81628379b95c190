use howfar_core::output::{IsochroneOutputFormat, OutputLayer};
use howfar_core::pipeline::{DEFAULT_BANDS, DEFAULT_DETAIL};
use serde::{Deserialize, Serialize};

use crate::app::TravelProfile;
use crate::model::HowfarCliError;

/// environment variables with this prefix override file settings, for example
/// `HOWFAR_SERVICE_PROVIDER`
pub const ENV_PREFIX: &str = "HOWFAR";

/// defines behaviors for a howfar run. command line arguments take
/// precedence over these values.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct HowfarConfiguration {
    /// base URL of the OSRM service
    pub service_provider: String,
    pub profile: TravelProfile,
    pub timeout_seconds: u64,
    pub detail: u32,
    pub bands: u32,
    pub format: IsochroneOutputFormat,
    pub layer: OutputLayer,
}

impl Default for HowfarConfiguration {
    fn default() -> Self {
        Self {
            service_provider: String::from("http://router.project-osrm.org"),
            profile: TravelProfile::default(),
            timeout_seconds: 30,
            detail: DEFAULT_DETAIL,
            bands: DEFAULT_BANDS,
            format: IsochroneOutputFormat::default(),
            layer: OutputLayer::default(),
        }
    }
}

impl HowfarConfiguration {
    /// reads the configuration from an optional TOML or JSON file layered
    /// under `HOWFAR_*` environment variables. unset values take their defaults.
    pub fn load(file: Option<&str>) -> Result<Self, HowfarCliError> {
        Self::build(file, ::config::Environment::with_prefix(ENV_PREFIX))
    }

    fn build(
        file: Option<&str>,
        environment: ::config::Environment,
    ) -> Result<Self, HowfarCliError> {
        let mut builder = ::config::Config::builder();
        if let Some(f) = file {
            log::info!("reading howfar configuration from {f}");
            if !(f.ends_with(".toml") || f.ends_with(".json")) {
                return Err(HowfarCliError::ConfigurationError(format!(
                    "unsupported file type: {f}"
                )));
            }
            builder = builder.add_source(::config::File::with_name(f));
        }
        let conf = builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(conf)
    }
}
