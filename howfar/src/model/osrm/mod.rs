mod osrm_client;
mod osrm_table_response;

pub use osrm_client::OsrmClient;
pub use osrm_table_response::{OsrmTableResponse, OsrmWaypoint};
