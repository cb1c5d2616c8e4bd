//! Multi-city analog watch core
//!
//! Hand-angle computation and city selection for a world-clock display.
//! Angles are radians from the +x axis, counter-clockwise, so 12 o'clock is
//! π/2 and 3 o'clock is 0. Acquiring the wall-clock time and rendering the
//! dial are the driver's concern; this module only maps a reference time and
//! a selected city to three hand angles.

use std::f32::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

/// A selectable city with its hour offset from the caller's reference time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    pub name: &'static str,
    pub zone_offset: i32,
}

/// The selectable cities; offsets are relative to the first entry's zone
pub const CITIES: &[City] = &[
    City { name: "Oporto", zone_offset: 0 },
    City { name: "Paris", zone_offset: 1 },
    City { name: "Helsinki", zone_offset: 2 },
    City { name: "Beijing", zone_offset: 7 },
    City { name: "Tokyo", zone_offset: 8 },
    City { name: "Sydney", zone_offset: 9 },
    City { name: "Los Angeles", zone_offset: -8 },
    City { name: "New York", zone_offset: -5 },
    City { name: "Rio de Janeiro", zone_offset: -4 },
    City { name: "Reykjavik", zone_offset: -1 },
];

/// A wall-clock reading. Fields are wrapped into range at construction and
/// only readable through the accessors, so every `ClockTime` is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours: hours % 24,
            minutes: minutes % 60,
            seconds: seconds % 60,
        }
    }

    #[inline]
    pub fn hours(&self) -> u32 {
        self.hours
    }

    #[inline]
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    #[inline]
    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

/// The three hand angles for one reading, radians CCW from the +x axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

/// Second hand: full turn per minute, clockwise from 12
#[inline]
pub fn second_hand_angle(seconds: u32) -> f32 {
    FRAC_PI_2 - TAU * seconds as f32 / 60.0
}

/// Minute hand: driven by the minutes, eased forward by the seconds
#[inline]
pub fn minute_hand_angle(minutes: u32, seconds: u32) -> f32 {
    FRAC_PI_2 - TAU * minutes as f32 / 60.0 - TAU * seconds as f32 / 3600.0
}

/// Hour hand: driven by the hours on a 12-hour dial, eased forward by the
/// minutes and seconds. `hours` must already be zone-adjusted.
#[inline]
pub fn hour_hand_angle(hours: u32, minutes: u32, seconds: u32) -> f32 {
    FRAC_PI_2
        - TAU * (hours % 12) as f32 / 12.0
        - TAU * minutes as f32 / (60.0 * 12.0)
        - TAU * seconds as f32 / (3600.0 * 12.0)
}

/// Watch state: which city's zone the hands follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Watch {
    city_index: usize,
}

impl Watch {
    /// Create a watch showing `city_name`'s time; unknown names fall back to
    /// the first city
    pub fn new(city_name: &str) -> Self {
        let city_index = CITIES
            .iter()
            .position(|city| city.name == city_name)
            .unwrap_or(0);
        Self { city_index }
    }

    /// Switch to another city. Returns false (and keeps the current
    /// selection) if the name is unknown.
    pub fn select_city(&mut self, city_name: &str) -> bool {
        match CITIES.iter().position(|city| city.name == city_name) {
            Some(index) => {
                self.city_index = index;
                true
            }
            None => false,
        }
    }

    pub fn city(&self) -> &'static City {
        &CITIES[self.city_index]
    }

    /// Hand angles for the selected city at the given reference time.
    ///
    /// The zone offset is applied with a Euclidean remainder, so western
    /// offsets wrap onto the dial instead of going negative.
    pub fn hand_angles(&self, reference: ClockTime) -> HandAngles {
        let local_hours =
            (reference.hours() as i32 + self.city().zone_offset).rem_euclid(12) as u32;
        HandAngles {
            hour: hour_hand_angle(local_hours, reference.minutes(), reference.seconds()),
            minute: minute_hand_angle(reference.minutes(), reference.seconds()),
            second: second_hand_angle(reference.seconds()),
        }
    }
}

impl Default for Watch {
    fn default() -> Self {
        Self { city_index: 0 }
    }
}
