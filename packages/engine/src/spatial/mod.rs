//! Spatial partitioning

pub mod grid;
