pub mod grid;
pub mod isoband;
pub mod outlier_filter;
pub mod sample_generator;
pub mod triangulation;
