// Quote and query types returned by and passed to the travel data service
// Quotes serialize with camelCase keys to match the JSON shapes consumed by the web layer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// Budget tier shared by hotel pricing and trip advice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    #[default]
    Standard,
    Luxury,
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Standard => "standard",
            BudgetTier::Luxury => "luxury",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
}

impl CabinClass {
    pub fn price_multiplier(self) -> f64 {
        match self {
            CabinClass::Economy => 1.0,
            CabinClass::PremiumEconomy => 1.6,
            CabinClass::Business => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
        }
    }

    // Checked baggage allowance printed on the quote
    pub fn baggage(self, domestic: bool) -> &'static str {
        match (self, domestic) {
            (CabinClass::Economy, true) => "15kg check-in, 7kg cabin",
            (CabinClass::Economy, false) => "23kg check-in, 7kg cabin",
            (CabinClass::PremiumEconomy, _) => "2 x 23kg check-in, 10kg cabin",
            (CabinClass::Business, _) => "2 x 32kg check-in, 14kg cabin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Adventure,
    Cultural,
    Relaxation,
    Food,
    Nightlife,
    Nature,
    Shopping,
}

// Request types
#[derive(Debug, Clone)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub departure: NaiveDate,
    pub cabin: CabinClass,
}

impl FlightQuery {
    pub fn travel_month(&self) -> u32 {
        self.departure.month0()
    }
}

#[derive(Debug, Clone)]
pub struct HotelQuery {
    pub destination: String,
    pub check_in: NaiveDate,
    pub nights: u32,
    pub tier: BudgetTier,
}

impl HotelQuery {
    pub fn travel_month(&self) -> u32 {
        self.check_in.month0()
    }
}

#[derive(Debug, Clone)]
pub struct ActivityQuery {
    pub destination: String,
    pub interests: Vec<ActivityCategory>,
    pub travelers: u32,
}

// Response types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightQuote {
    pub price: u32,
    pub airline: String,
    pub duration: String,
    pub stops: u8,
    pub availability: bool,
    pub booking_class: String,
    pub baggage: String,
    pub refundable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelQuote {
    pub price_per_night: u32,
    pub hotel_name: String,
    pub rating: f64,
    pub amenities: Vec<String>,
    pub availability: bool,
    pub cancellation: bool,
    pub breakfast: bool,
    pub wifi: bool,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuote {
    pub average_price: u32,
    pub recommended_activities: Vec<String>,
    pub total_activities: usize,
    pub booking_required: bool,
    pub group_discount: bool,
    pub cancellation_policy: String,
}

// Counter-currency -> rate for one base currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRates(pub BTreeMap<String, f64>);

impl ExchangeRates {
    // The table returned when rates cannot be produced at all
    pub fn identity() -> Self {
        let mut rates = BTreeMap::new();
        rates.insert("USD".to_string(), 1.0);
        ExchangeRates(rates)
    }

    pub fn from_table(table: &[(&str, f64)]) -> Self {
        ExchangeRates(
            table
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        )
    }

    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.0.get(&currency.to_ascii_uppercase()).copied()
    }

    // Convert an amount expressed in the table's base currency
    pub fn convert(&self, amount: f64, to: &str) -> Option<f64> {
        self.rate(to).map(|rate| amount * rate)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
