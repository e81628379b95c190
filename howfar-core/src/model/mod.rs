mod grid_point;
mod isoband;
mod sample_point;
mod time_bin;

pub use grid_point::GridPoint;
pub use isoband::Isoband;
pub use sample_point::SamplePoint;
pub use time_bin::TimeBin;
