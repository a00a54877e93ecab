// Flight detail resolution: block time and number of stops for a route

use crate::random::RandomSource;
use crate::tables;

pub const JITTER_MINUTES: i64 = 15;
pub const MIN_DURATION_MINUTES: i64 = 30;

const MEDIUM_HAUL_MINUTES: i64 = 5 * 60;
const LONG_HAUL_MINUTES: i64 = 10 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightDetails {
    pub duration_minutes: i64,
    pub stops: u8,
}

impl FlightDetails {
    // Rendered as "Hh Mm", e.g. "9h 5m"
    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_minutes)
    }
}

pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

// Base block time in minutes, without jitter
pub fn base_duration_minutes(origin: &str, destination: &str, domestic: bool) -> i64 {
    let hours = tables::route_duration_hours(origin, destination, domestic).unwrap_or(if domestic {
        tables::DEFAULT_DOMESTIC_HOURS
    } else {
        tables::DEFAULT_INTERNATIONAL_HOURS
    });
    (hours * 60.0).round() as i64
}

// Domestic: 80% direct. International: more stops past 5h and 10h, never direct from 10h
pub fn stop_count(duration_minutes: i64, domestic: bool, rng: &dyn RandomSource) -> u8 {
    let roll = rng.next_f64();
    if domestic {
        return if roll < 0.8 { 0 } else { 1 };
    }

    if duration_minutes >= LONG_HAUL_MINUTES {
        if roll < 0.6 {
            1
        } else {
            2
        }
    } else if duration_minutes >= MEDIUM_HAUL_MINUTES {
        if roll < 0.4 {
            0
        } else {
            1
        }
    } else if roll < 0.7 {
        0
    } else {
        1
    }
}

// Base time shifted by up to 15 minutes either way, floored at 30 minutes
pub fn jittered_minutes(base_minutes: i64, rng: &dyn RandomSource) -> i64 {
    let jitter = rng.index((2 * JITTER_MINUTES + 1) as usize) as i64 - JITTER_MINUTES;
    (base_minutes + jitter).max(MIN_DURATION_MINUTES)
}

// Origin and destination must already be normalized
pub fn resolve(
    origin: &str,
    destination: &str,
    domestic: bool,
    rng: &dyn RandomSource,
) -> FlightDetails {
    let base = base_duration_minutes(origin, destination, domestic);
    let duration_minutes = jittered_minutes(base, rng);
    let stops = stop_count(duration_minutes, domestic, rng);

    FlightDetails {
        duration_minutes,
        stops,
    }
}
