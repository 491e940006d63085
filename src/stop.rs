//! Itinerary stop value types.
//!
//! Stops are validated once, at construction (or deserialization), so the
//! solver never has to second-guess coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Creates coordinates, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> RouteResult<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if valid {
            Ok(Self { latitude, longitude })
        } else {
            Err(RouteError::InvalidCoordinates { latitude, longitude })
        }
    }

    /// Whether the pair is usable for distance computation.
    pub fn is_valid(&self) -> bool {
        Self::new(self.latitude, self.longitude).is_ok()
    }

    /// (lat, lng) tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[derive(Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = RouteError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Coordinates::new(raw.latitude, raw.longitude)
    }
}

/// Coarse part-of-day constraint for a stop.
///
/// Ordering follows the day: morning < afternoon < evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBlock {
    Morning,
    Afternoon,
    Evening,
}

impl TimeBlock {
    pub const ALL: [TimeBlock; 3] = [TimeBlock::Morning, TimeBlock::Afternoon, TimeBlock::Evening];

    /// Block for a 24h clock hour. Morning ends at noon, evening starts at 17:00.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => TimeBlock::Morning,
            12..=16 => TimeBlock::Afternoon,
            _ => TimeBlock::Evening,
        }
    }

    /// Derives a block from an `"HH:MM"` time slot.
    ///
    /// Returns `None` for anything unparsable; callers treat that stop as
    /// unconstrained.
    pub fn from_time_slot(slot: &str) -> Option<Self> {
        let (hours, minutes) = slot.trim().split_once(':')?;
        let hour: u32 = hours.trim().parse().ok()?;
        let minute: u32 = minutes.trim().get(..2).unwrap_or(minutes.trim()).parse().ok()?;
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self::from_hour(hour))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBlock::Morning => "morning",
            TimeBlock::Afternoon => "afternoon",
            TimeBlock::Evening => "evening",
        }
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeBlock {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeBlock::Morning),
            "afternoon" => Ok(TimeBlock::Afternoon),
            "evening" => Ok(TimeBlock::Evening),
            other => Err(format!("unknown time block '{}'", other)),
        }
    }
}

/// One visitable point of a single day (hotel, food, activity, sight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawStop", rename_all = "camelCase")]
pub struct Stop {
    id: String,
    name: String,
    coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_block: Option<TimeBlock>,
}

impl Stop {
    /// Creates an unconstrained stop. The id must be non-empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> RouteResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RouteError::EmptyId);
        }
        if !coordinates.is_valid() {
            return Err(RouteError::InvalidStop {
                id,
                reason: format!(
                    "coordinates ({}, {}) out of range",
                    coordinates.latitude, coordinates.longitude
                ),
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            coordinates,
            time_block: None,
        })
    }

    /// Shorthand for `Stop::new` with raw latitude/longitude.
    pub fn at(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> RouteResult<Self> {
        let id = id.into();
        let coordinates = Coordinates::new(latitude, longitude).map_err(|err| RouteError::InvalidStop {
            id: id.clone(),
            reason: err.to_string(),
        })?;
        Self::new(id, name, coordinates)
    }

    pub fn with_time_block(mut self, time_block: Option<TimeBlock>) -> Self {
        self.time_block = time_block;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn time_block(&self) -> Option<TimeBlock> {
        self.time_block
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStop {
    id: String,
    #[serde(default)]
    name: String,
    coordinates: RawCoordinates,
    #[serde(default)]
    time_block: Option<TimeBlock>,
}

impl TryFrom<RawStop> for Stop {
    type Error = RouteError;

    fn try_from(raw: RawStop) -> Result<Self, Self::Error> {
        Stop::at(
            raw.id,
            raw.name,
            raw.coordinates.latitude,
            raw.coordinates.longitude,
        )
        .map(|stop| stop.with_time_block(raw.time_block))
    }
}
