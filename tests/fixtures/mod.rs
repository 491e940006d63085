//! Test fixtures for day-route-optimizer.
//!
//! Provides realistic test data:
//! - Real Paris landmarks, restaurants and hotels (from OpenStreetMap)
//! - A `Location` helper that turns them into stops

pub mod paris_locations;

pub use paris_locations::*;
