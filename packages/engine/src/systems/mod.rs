//! Per-frame systems operating on the particle store

pub mod contacts;
pub mod forces;
pub mod integration;
