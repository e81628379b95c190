mod howfar_configuration;

pub use howfar_configuration::{HowfarConfiguration, ENV_PREFIX};
