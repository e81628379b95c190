use howfar_core::pipeline::IsochroneError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HowfarCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure loading configuration: {source}")]
    ConfigError {
        #[from]
        source: ::config::ConfigError,
    },
    #[error("failure building HTTP client: {0}")]
    HttpClientError(String),
    #[error("isochrone failed: {source}")]
    IsochroneError {
        #[from]
        source: IsochroneError,
    },
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
