pub mod interpolator;
mod point_grid;
pub mod tagger;

pub use point_grid::{cell_size, PointGrid, GRID_CELL_SIZE_FLOOR_KM, GRID_CELL_SIZE_REACH_DIVISOR};
