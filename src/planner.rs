// Trip planner: fans out to every provider operation and assembles a budget estimate

use crate::advice::{self, AdviceRequest};
use crate::quotes::{
    ActivityCategory, ActivityQuery, ActivityQuote, BudgetTier, CabinClass, FlightQuery,
    FlightQuote, HotelQuery, HotelQuote,
};
use crate::service::{LookupError, TravelDataProvider};
use crate::tables;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

// Activities are budgeted for at most this many days of a trip
pub const MAX_ACTIVITY_DAYS: u32 = 5;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid trip request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("No {0} options returned")]
    NoOptions(&'static str),
}

#[derive(Debug, Clone)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub travelers: u32,
    pub budget: BudgetTier,
    pub interests: Vec<ActivityCategory>,
    pub currency: String,
}

impl TripRequest {
    pub fn days(&self) -> u32 {
        (self.end - self.start).num_days().max(0) as u32
    }

    fn validate(&self) -> Result<(), PlanError> {
        if self.end <= self.start {
            return Err(PlanError::InvalidRequest(format!(
                "trip ends on {} which is not after the start {}",
                self.end, self.start
            )));
        }
        if self.travelers == 0 {
            return Err(PlanError::InvalidRequest(
                "at least one traveler is required".to_string(),
            ));
        }
        Ok(())
    }

    // Luxury trips are quoted in business class
    fn cabin(&self) -> CabinClass {
        match self.budget {
            BudgetTier::Budget | BudgetTier::Standard => CabinClass::Economy,
            BudgetTier::Luxury => CabinClass::Business,
        }
    }
}

// Cost breakdown in USD
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub flights: u64,
    pub accommodation: u64,
    pub activities: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub flight: FlightQuote,
    pub hotel: HotelQuote,
    pub activities: ActivityQuote,
    pub nights: u32,
    pub rooms: u32,
    pub cost_usd: CostBreakdown,
    pub currency: String,
    pub total_in_currency: f64,
    pub advice: Vec<String>,
}

impl TripPlan {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// Prefer the cheapest available option; fall back to the cheapest overall
fn cheapest<T, A, P>(options: &[T], available: A, price: P) -> Option<T>
where
    T: Clone,
    A: Fn(&T) -> bool,
    P: Fn(&T) -> u32,
{
    options
        .iter()
        .filter(|o| available(*o))
        .min_by_key(|o| price(*o))
        .or_else(|| options.iter().min_by_key(|o| price(*o)))
        .cloned()
}

pub fn rooms_for(travelers: u32) -> u32 {
    travelers.div_ceil(2)
}

fn overflow(what: &str) -> PlanError {
    PlanError::InvalidRequest(format!("{} cost does not fit the budget range", what))
}

pub fn cost_breakdown(
    flight: &FlightQuote,
    hotel: &HotelQuote,
    activities: &ActivityQuote,
    travelers: u32,
    nights: u32,
) -> Result<CostBreakdown, PlanError> {
    let rooms = u64::from(rooms_for(travelers));
    let travelers = u64::from(travelers);
    // return trip
    let flights = u64::from(flight.price)
        .checked_mul(travelers)
        .and_then(|v| v.checked_mul(2))
        .ok_or_else(|| overflow("flight"))?;
    let accommodation = u64::from(hotel.price_per_night)
        .checked_mul(u64::from(nights))
        .and_then(|v| v.checked_mul(rooms))
        .ok_or_else(|| overflow("accommodation"))?;
    let activities = u64::from(activities.average_price)
        .checked_mul(travelers)
        .and_then(|v| v.checked_mul(u64::from(nights.min(MAX_ACTIVITY_DAYS))))
        .ok_or_else(|| overflow("activity"))?;
    let total = flights
        .checked_add(accommodation)
        .and_then(|v| v.checked_add(activities))
        .ok_or_else(|| overflow("total"))?;

    Ok(CostBreakdown {
        flights,
        accommodation,
        activities,
        total,
    })
}

#[instrument(skip_all, fields(origin = %request.origin, destination = %request.destination))]
pub async fn plan_trip<P>(provider: &P, request: TripRequest) -> Result<TripPlan, PlanError>
where
    P: TravelDataProvider + ?Sized,
{
    request.validate()?;
    let nights = request.days();

    let flight_query = FlightQuery {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
        departure: request.start,
        cabin: request.cabin(),
    };
    let hotel_query = HotelQuery {
        destination: request.destination.clone(),
        check_in: request.start,
        nights,
        tier: request.budget,
    };
    let activity_query = ActivityQuery {
        destination: request.destination.clone(),
        interests: request.interests.clone(),
        travelers: request.travelers,
    };

    let (flights, hotels, activities, rates) = futures::try_join!(
        provider.flight_quotes(flight_query),
        provider.hotel_quotes(hotel_query),
        provider.activity_quote(activity_query),
        provider.exchange_rates(tables::REFERENCE_CURRENCY),
    )?;

    let flight = cheapest(&flights, |f| f.availability, |f| f.price)
        .ok_or(PlanError::NoOptions("flight"))?;
    let hotel = cheapest(&hotels, |h| h.availability, |h| h.price_per_night)
        .ok_or(PlanError::NoOptions("hotel"))?;

    let cost_usd = cost_breakdown(&flight, &hotel, &activities, request.travelers, nights)?;

    let requested = request.currency.trim().to_ascii_uppercase();
    let (currency, total_in_currency) = match rates.convert(cost_usd.total as f64, &requested) {
        Some(amount) => (requested, (amount * 100.0).round() / 100.0),
        None => (tables::REFERENCE_CURRENCY.to_string(), cost_usd.total as f64),
    };

    let advice = advice::generate(&AdviceRequest {
        destination: &tables::normalize_place(&request.destination),
        budget: request.budget,
        month0: request.start.month0(),
        days: nights,
        travelers: request.travelers,
    });

    info!(total_usd = cost_usd.total, currency = %currency, "Trip plan assembled");

    Ok(TripPlan {
        flight,
        hotel,
        activities,
        nights,
        rooms: rooms_for(request.travelers),
        cost_usd,
        currency,
        total_in_currency,
        advice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfig;
    use crate::random::{SeededRandom, SequenceRandom};
    use crate::service::MockTravelService;
    use std::sync::Arc;

    fn request(currency: &str) -> TripRequest {
        TripRequest {
            origin: "Mumbai".to_string(),
            destination: "Goa".to_string(),
            start: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 7, 11).unwrap(),
            travelers: 5,
            budget: BudgetTier::Luxury,
            interests: vec![ActivityCategory::Adventure],
            currency: currency.to_string(),
        }
    }

    fn service() -> MockTravelService {
        MockTravelService::with_random(
            ServiceConfig::without_latency(),
            Arc::new(SeededRandom::new(21)),
        )
        .unwrap()
    }

    #[test]
    fn test_rooms_for_travelers() {
        assert_eq!(rooms_for(1), 1);
        assert_eq!(rooms_for(2), 1);
        assert_eq!(rooms_for(5), 3);
    }

    fn flight_at(price: u32) -> FlightQuote {
        FlightQuote {
            price,
            airline: "IndiGo".to_string(),
            duration: "1h 10m".to_string(),
            stops: 0,
            availability: true,
            booking_class: "Economy".to_string(),
            baggage: "15kg check-in, 7kg cabin".to_string(),
            refundable: false,
        }
    }

    fn hotel_at(price_per_night: u32) -> HotelQuote {
        HotelQuote {
            price_per_night,
            hotel_name: "Zostel".to_string(),
            rating: 3.5,
            amenities: vec!["WiFi".to_string()],
            availability: true,
            cancellation: false,
            breakfast: false,
            wifi: true,
            location: "Beachfront".to_string(),
        }
    }

    fn activities_at(average_price: u32) -> ActivityQuote {
        ActivityQuote {
            average_price,
            recommended_activities: vec!["Market Tour".to_string()],
            total_activities: 1,
            booking_required: false,
            group_discount: false,
            cancellation_policy: "Non-refundable".to_string(),
        }
    }

    #[test]
    fn test_cost_breakdown() {
        let cost = cost_breakdown(&flight_at(100), &hotel_at(50), &activities_at(20), 3, 7).unwrap();
        assert_eq!(cost.flights, 600);
        assert_eq!(cost.accommodation, 700);
        assert_eq!(cost.activities, 300);
        assert_eq!(cost.total, 1600);
    }

    #[test]
    fn test_rooms_for_largest_group() {
        assert_eq!(rooms_for(u32::MAX), 1 << 31);
    }

    #[test]
    fn test_cost_breakdown_rejects_overflow() {
        let result = cost_breakdown(
            &flight_at(u32::MAX),
            &hotel_at(u32::MAX),
            &activities_at(u32::MAX),
            u32::MAX,
            u32::MAX,
        );
        assert!(matches!(result, Err(PlanError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_plan_trip_for_huge_group() {
        let mut huge = request("USD");
        huge.end = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
        huge.travelers = u32::MAX;
        let plan = plan_trip(&service(), huge).await.unwrap();
        assert_eq!(plan.rooms, 1 << 31);
        assert!(plan.cost_usd.accommodation > 0);
    }

    #[test]
    fn test_cheapest_prefers_available() {
        let options = vec![(10u32, false), (30, true), (20, true)];
        let pick = cheapest(&options, |o| o.1, |o| o.0).unwrap();
        assert_eq!(pick, (20, true));

        let none_available = vec![(10u32, false), (5, false)];
        assert_eq!(cheapest(&none_available, |o| o.1, |o| o.0), Some((5, false)));
    }

    #[tokio::test]
    async fn test_plan_trip_in_local_currency() {
        let plan = plan_trip(&service(), request("inr")).await.unwrap();

        assert_eq!(plan.nights, 10);
        assert_eq!(plan.rooms, 3);
        assert_eq!(plan.currency, "INR");
        assert_eq!(plan.flight.booking_class, "Business");
        assert!(plan.cost_usd.total > 0);
        let expected = (plan.cost_usd.total as f64 * 83.2 * 100.0).round() / 100.0;
        assert_eq!(plan.total_in_currency, expected);

        assert_eq!(plan.advice.len(), 4);
        assert!(plan.advice[2].contains("peak season in Goa"));
    }

    #[tokio::test]
    async fn test_unknown_currency_stays_in_usd() {
        let plan = plan_trip(&service(), request("CHF")).await.unwrap();
        assert_eq!(plan.currency, "USD");
        assert_eq!(plan.total_in_currency, plan.cost_usd.total as f64);
    }

    #[tokio::test]
    async fn test_plan_trip_rejects_backwards_dates() {
        let mut bad = request("USD");
        bad.end = bad.start;
        let result = plan_trip(&service(), bad).await;
        assert!(matches!(result, Err(PlanError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_lookup_failures_propagate() {
        let mut bad = request("USD");
        bad.destination = "mumbai".to_string();
        let result = plan_trip(&service(), bad).await;
        assert!(matches!(
            result,
            Err(PlanError::Lookup(LookupError::FlightLookupFailed { .. }))
        ));
    }

    #[tokio::test]
    async fn test_plan_serializes_to_json() {
        let provider = MockTravelService::with_random(
            ServiceConfig::without_latency(),
            Arc::new(SequenceRandom::constant(0.5)),
        )
        .unwrap();
        let plan = plan_trip(&provider, request("EUR")).await.unwrap();
        let json = plan.to_json().unwrap();
        assert!(json.contains("\"costUsd\""));
        assert!(json.contains("\"totalInCurrency\""));
        assert!(json.contains("\"pricePerNight\""));
    }
}
