// Static rate and price tables used by the mock trip planner
// City pairs are stored once; lookups try the reverse key when the forward key is missing.

use crate::quotes::{ActivityCategory, BudgetTier};

// Cities treated as domestic endpoints
pub const INDIAN_CITIES: &[&str] = &[
    "mumbai",
    "delhi",
    "bangalore",
    "chennai",
    "kolkata",
    "hyderabad",
    "pune",
    "goa",
    "jaipur",
    "ahmedabad",
    "kochi",
];

pub const DEFAULT_DOMESTIC_FARE: f64 = 100.0;
pub const DEFAULT_INTERNATIONAL_FARE: f64 = 600.0;

pub const DEFAULT_DOMESTIC_HOURS: f64 = 2.0;
pub const DEFAULT_INTERNATIONAL_HOURS: f64 = 8.0;

// Base one-way economy fares in USD
const ROUTE_FARES: &[(&str, &str, f64)] = &[
    ("mumbai", "delhi", 85.0),
    ("mumbai", "bangalore", 70.0),
    ("delhi", "bangalore", 95.0),
    ("mumbai", "goa", 55.0),
    ("delhi", "jaipur", 50.0),
    ("chennai", "kolkata", 90.0),
    ("hyderabad", "delhi", 85.0),
    ("mumbai", "chennai", 80.0),
    ("bangalore", "kolkata", 100.0),
    ("delhi", "kolkata", 90.0),
    ("mumbai", "dubai", 250.0),
    ("delhi", "london", 650.0),
    ("mumbai", "london", 680.0),
    ("delhi", "new york", 950.0),
    ("mumbai", "singapore", 380.0),
    ("delhi", "paris", 700.0),
    ("bangalore", "singapore", 360.0),
    ("mumbai", "bangkok", 320.0),
    ("delhi", "tokyo", 780.0),
    ("chennai", "sydney", 900.0),
    ("new york", "london", 550.0),
    ("london", "paris", 120.0),
    ("paris", "rome", 130.0),
];

// Block times in hours for domestic routes
const DOMESTIC_DURATIONS: &[(&str, &str, f64)] = &[
    ("mumbai", "delhi", 2.2),
    ("mumbai", "bangalore", 1.7),
    ("delhi", "bangalore", 2.8),
    ("mumbai", "goa", 1.2),
    ("delhi", "jaipur", 1.0),
    ("chennai", "kolkata", 2.3),
    ("hyderabad", "delhi", 2.2),
    ("mumbai", "chennai", 2.0),
    ("bangalore", "kolkata", 2.6),
    ("delhi", "kolkata", 2.2),
];

// Block times in hours for international routes
const INTERNATIONAL_DURATIONS: &[(&str, &str, f64)] = &[
    ("mumbai", "dubai", 3.2),
    ("delhi", "london", 9.5),
    ("mumbai", "london", 9.8),
    ("delhi", "new york", 15.5),
    ("mumbai", "singapore", 5.5),
    ("delhi", "paris", 9.0),
    ("bangalore", "singapore", 4.5),
    ("mumbai", "bangkok", 4.3),
    ("delhi", "tokyo", 8.0),
    ("chennai", "sydney", 12.5),
    ("new york", "london", 7.0),
    ("london", "paris", 1.3),
    ("paris", "rome", 2.1),
];

// Cost-of-living style multiplier applied to hotels and activities
const DESTINATION_MULTIPLIERS: &[(&str, f64)] = &[
    ("mumbai", 1.2),
    ("delhi", 1.1),
    ("bangalore", 1.05),
    ("goa", 0.9),
    ("jaipur", 0.85),
    ("kochi", 0.9),
    ("dubai", 1.6),
    ("london", 2.0),
    ("paris", 1.9),
    ("new york", 2.2),
    ("singapore", 1.7),
    ("bangkok", 0.8),
    ("tokyo", 1.8),
    ("sydney", 1.7),
    ("rome", 1.6),
];

// Indexed by zero-based month (0 = January)
pub const SEASONAL_MULTIPLIERS: [f64; 12] = [
    1.2, 1.0, 1.0, 1.05, 1.15, 1.25, 1.2, 1.0, 0.95, 1.1, 1.2, 1.35,
];

pub const PEAK_SEASON_THRESHOLD: f64 = 1.2;

pub const AIRLINES_DOMESTIC: &[&str] = &["IndiGo", "Air India", "Vistara", "SpiceJet", "Akasa Air"];
pub const AIRLINES_INTERNATIONAL: &[&str] = &[
    "Emirates",
    "Qatar Airways",
    "Singapore Airlines",
    "British Airways",
    "Lufthansa",
    "Air India",
];

pub const HOTEL_LOCATIONS: &[&str] = &[
    "City Centre",
    "Near Airport",
    "Beachfront",
    "Old Town",
    "Business District",
];

pub const ACTIVITY_CANCELLATION_POLICIES: &[&str] = &[
    "Free cancellation up to 24 hours before",
    "Free cancellation up to 48 hours before",
    "50% refund up to 24 hours before",
];

pub fn hotel_base_rate(tier: BudgetTier) -> f64 {
    match tier {
        BudgetTier::Budget => 40.0,
        BudgetTier::Standard => 90.0,
        BudgetTier::Luxury => 250.0,
    }
}

pub fn hotel_names(tier: BudgetTier) -> &'static [&'static str] {
    match tier {
        BudgetTier::Budget => &["Zostel", "Treebo Trend", "FabHotel Prime", "OYO Townhouse"],
        BudgetTier::Standard => &["Lemon Tree", "Ibis", "Holiday Inn Express", "Novotel"],
        BudgetTier::Luxury => &["Taj Palace", "The Oberoi", "Four Seasons", "Ritz-Carlton"],
    }
}

pub fn hotel_amenities(tier: BudgetTier) -> &'static [&'static str] {
    match tier {
        BudgetTier::Budget => &["WiFi", "24h Front Desk"],
        BudgetTier::Standard => &["WiFi", "Restaurant", "Gym", "Room Service"],
        BudgetTier::Luxury => &["WiFi", "Spa", "Pool", "Fine Dining", "Concierge", "Airport Transfer"],
    }
}

// Rating band (min, max) for a tier
pub fn hotel_rating_band(tier: BudgetTier) -> (f64, f64) {
    match tier {
        BudgetTier::Budget => (3.0, 3.9),
        BudgetTier::Standard => (4.0, 4.4),
        BudgetTier::Luxury => (4.5, 5.0),
    }
}

pub fn activities_for(category: ActivityCategory) -> &'static [&'static str] {
    match category {
        ActivityCategory::Adventure => &["Paragliding", "Scuba Diving", "White Water Rafting", "Trekking"],
        ActivityCategory::Cultural => &["Heritage Walk", "Museum Tour", "Temple Visit", "Local Craft Workshop"],
        ActivityCategory::Relaxation => &["Spa Day", "Sunset Cruise", "Yoga Retreat"],
        ActivityCategory::Food => &["Street Food Tour", "Cooking Class", "Wine Tasting"],
        ActivityCategory::Nightlife => &["Pub Crawl", "Rooftop Bar Tour", "Live Music Night"],
        ActivityCategory::Nature => &["Wildlife Safari", "Botanical Garden Visit", "Bird Watching"],
        ActivityCategory::Shopping => &["Market Tour", "Designer Outlet Visit", "Souvenir Hunt"],
    }
}

// Per-person base price in USD
pub fn activity_base_price(category: ActivityCategory) -> f64 {
    match category {
        ActivityCategory::Adventure => 60.0,
        ActivityCategory::Cultural => 25.0,
        ActivityCategory::Relaxation => 45.0,
        ActivityCategory::Food => 30.0,
        ActivityCategory::Nightlife => 35.0,
        ActivityCategory::Nature => 40.0,
        ActivityCategory::Shopping => 20.0,
    }
}

// USD is the reference table; it doubles as the answer for unknown bases
pub const EXCHANGE_RATES: &[(&str, &[(&str, f64)])] = &[
    (
        "USD",
        &[
            ("USD", 1.0),
            ("INR", 83.2),
            ("EUR", 0.92),
            ("GBP", 0.79),
            ("AED", 3.67),
            ("SGD", 1.35),
            ("JPY", 149.5),
            ("AUD", 1.52),
            ("THB", 35.8),
        ],
    ),
    (
        "INR",
        &[
            ("INR", 1.0),
            ("USD", 0.012),
            ("EUR", 0.011),
            ("GBP", 0.0095),
            ("AED", 0.044),
        ],
    ),
    (
        "EUR",
        &[
            ("EUR", 1.0),
            ("USD", 1.09),
            ("INR", 90.4),
            ("GBP", 0.86),
        ],
    ),
    (
        "GBP",
        &[
            ("GBP", 1.0),
            ("USD", 1.27),
            ("INR", 105.3),
            ("EUR", 1.16),
        ],
    ),
];

pub const REFERENCE_CURRENCY: &str = "USD";

// Trim and lowercase a place name so it can be used as a lookup key
pub fn normalize_place(place: &str) -> String {
    place.trim().to_lowercase()
}

pub fn is_domestic(origin: &str, destination: &str) -> bool {
    INDIAN_CITIES.contains(&origin) && INDIAN_CITIES.contains(&destination)
}

fn route_lookup(table: &[(&str, &str, f64)], origin: &str, destination: &str) -> Option<f64> {
    table
        .iter()
        .find(|(from, to, _)| *from == origin && *to == destination)
        .or_else(|| {
            table
                .iter()
                .find(|(from, to, _)| *from == destination && *to == origin)
        })
        .map(|(_, _, value)| *value)
}

// Inputs are expected to be normalized already
pub fn route_fare(origin: &str, destination: &str) -> Option<f64> {
    route_lookup(ROUTE_FARES, origin, destination)
}

pub fn route_duration_hours(origin: &str, destination: &str, domestic: bool) -> Option<f64> {
    let table = if domestic {
        DOMESTIC_DURATIONS
    } else {
        INTERNATIONAL_DURATIONS
    };
    route_lookup(table, origin, destination)
}

pub fn destination_multiplier(destination: &str) -> f64 {
    DESTINATION_MULTIPLIERS
        .iter()
        .find(|(name, _)| *name == destination)
        .map_or(1.0, |(_, multiplier)| *multiplier)
}

// Out-of-range months fall back to a neutral multiplier
pub fn seasonal_multiplier(month0: u32) -> f64 {
    SEASONAL_MULTIPLIERS
        .get(month0 as usize)
        .copied()
        .unwrap_or(1.0)
}

pub fn is_peak_month(month0: u32) -> bool {
    seasonal_multiplier(month0) >= PEAK_SEASON_THRESHOLD
}

pub fn is_off_peak_month(month0: u32) -> bool {
    seasonal_multiplier(month0) < 1.0
}

pub fn exchange_table(base: &str) -> Option<&'static [(&'static str, f64)]> {
    EXCHANGE_RATES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(base))
        .map(|(_, rates)| *rates)
}
