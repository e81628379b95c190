mod band_clip;
pub mod isoband_ops;
mod node_key;
mod ring_ops;

pub use band_clip::{clip_triangle, BandLevel, LatticeVertex, Node};
pub use node_key::NodeKey;
