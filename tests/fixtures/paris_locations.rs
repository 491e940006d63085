//! Real Paris locations for realistic itinerary fixtures.
//!
//! Coordinates are rounded OpenStreetMap positions of the building or
//! entrance, accurate to a few meters.

#![allow(dead_code)]

use day_route_optimizer::{Stop, TimeBlock};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    /// Stop with a slug-style id derived from the name.
    pub fn stop(&self) -> Stop {
        Stop::at(slug(self.name), self.name, self.lat, self.lng)
            .expect("fixture coordinates are valid")
    }

    pub fn stop_at(&self, block: TimeBlock) -> Stop {
        self.stop().with_time_block(Some(block))
    }
}

pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

// ============================================================================
// Hotels (day start)
// ============================================================================

pub const HOTELS: &[Location] = &[
    Location::new("Hotel du Louvre", 48.8629, 2.3359),
    Location::new("Hotel Lutetia", 48.8510, 2.3270),
    Location::new("Le Marais Boutique Hotel", 48.8590, 2.3625),
];

// ============================================================================
// Sights
// ============================================================================

pub const SIGHTS: &[Location] = &[
    Location::new("Eiffel Tower", 48.8584, 2.2945),
    Location::new("Louvre Museum", 48.8606, 2.3376),
    Location::new("Notre-Dame", 48.8530, 2.3499),
    Location::new("Arc de Triomphe", 48.8738, 2.2950),
    Location::new("Sacre-Coeur", 48.8867, 2.3431),
    Location::new("Musee d'Orsay", 48.8600, 2.3266),
    Location::new("Sainte-Chapelle", 48.8554, 2.3450),
    Location::new("Pantheon", 48.8462, 2.3464),
    Location::new("Trocadero", 48.8616, 2.2893),
    Location::new("Place des Vosges", 48.8556, 2.3655),
];

// ============================================================================
// Food
// ============================================================================

pub const FOOD: &[Location] = &[
    Location::new("Cafe de Flore", 48.8540, 2.3325),
    Location::new("Le Train Bleu", 48.8448, 2.3735),
    Location::new("Angelina", 48.8650, 2.3284),
    Location::new("L'As du Fallafel", 48.8575, 2.3590),
    Location::new("Le Consulat", 48.8865, 2.3401),
];

pub fn sight(name: &str) -> &'static Location {
    find(SIGHTS, name)
}

pub fn food(name: &str) -> &'static Location {
    find(FOOD, name)
}

pub fn hotel(name: &str) -> &'static Location {
    find(HOTELS, name)
}

fn find(locations: &'static [Location], name: &str) -> &'static Location {
    locations
        .iter()
        .find(|location| location.name == name)
        .unwrap_or_else(|| panic!("unknown fixture location '{}'", name))
}
