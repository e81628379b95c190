pub mod algorithm;
pub mod matrix;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod util;
