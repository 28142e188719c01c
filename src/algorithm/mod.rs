//! Algorithm implementations for survey feature generation

pub mod features;
