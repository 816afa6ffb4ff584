//! Domain models for the detector

pub mod cycle;
pub mod transaction;
