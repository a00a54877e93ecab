// Travel data service: async facade over the estimator, flight resolver and rate tables
// Every operation sleeps for its configured latency to mimic a remote provider.

use crate::advice;
use crate::config::{ConfigError, ServiceConfig};
use crate::estimator::{self, EstimateError};
use crate::flight_details;
use crate::quotes::{
    ActivityCategory, ActivityQuery, ActivityQuote, BudgetTier, ExchangeRates, FlightQuery,
    FlightQuote, HotelQuery, HotelQuote,
};
use crate::random::{pick, RandomSource, ThreadRandom};
use crate::tables;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

pub const FLIGHT_QUOTES_PER_SEARCH: usize = 3;
pub const HOTEL_QUOTES_PER_SEARCH: usize = 3;
const MAX_RECOMMENDED_ACTIVITIES: usize = 5;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Flight lookup failed for {origin} -> {destination}: {source}")]
    FlightLookupFailed {
        origin: String,
        destination: String,
        #[source]
        source: EstimateError,
    },

    #[error("Hotel lookup failed for {destination}: {source}")]
    HotelLookupFailed {
        destination: String,
        #[source]
        source: EstimateError,
    },

    #[error("Activity lookup failed for {destination}: {source}")]
    ActivityLookupFailed {
        destination: String,
        #[source]
        source: EstimateError,
    },

    #[error("Exchange rates unavailable for {base}: {reason}")]
    RateFetchDegraded { base: String, reason: String },
}

#[async_trait]
pub trait TravelDataProvider: Send + Sync + 'static {
    // Several flight options for one route and departure date
    async fn flight_quotes(&self, query: FlightQuery) -> Result<Vec<FlightQuote>, LookupError>;

    // Several hotel options of the requested tier
    async fn hotel_quotes(&self, query: HotelQuery) -> Result<Vec<HotelQuote>, LookupError>;

    // Activity summary for the requested interests
    async fn activity_quote(&self, query: ActivityQuery) -> Result<ActivityQuote, LookupError>;

    // Rates against the base currency; unknown bases get the USD table
    async fn exchange_rates(&self, base: &str) -> Result<ExchangeRates, LookupError>;

    // Identity fallback instead of an error, for callers that only display rates
    async fn exchange_rates_or_identity(&self, base: &str) -> ExchangeRates {
        match self.exchange_rates(base).await {
            Ok(rates) => rates,
            Err(e) => {
                warn!(error = %e, "Falling back to identity exchange rates");
                ExchangeRates::identity()
            }
        }
    }
}

pub struct MockTravelService {
    config: ServiceConfig,
    rng: Arc<dyn RandomSource>,
}

impl MockTravelService {
    pub fn new(config: ServiceConfig) -> Result<Self, ConfigError> {
        Self::with_random(config, Arc::new(ThreadRandom))
    }

    pub fn with_random(
        config: ServiceConfig,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if !config.credentials.is_complete() {
            info!("Provider credentials incomplete, serving mock data only");
        }
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    fn build_flight_quotes(&self, query: &FlightQuery) -> Result<Vec<FlightQuote>, EstimateError> {
        let origin = tables::normalize_place(&query.origin);
        let destination = tables::normalize_place(&query.destination);
        if origin.is_empty() || destination.is_empty() {
            return Err(EstimateError::InvalidInput(
                "origin and destination are required".to_string(),
            ));
        }
        if origin == destination {
            return Err(EstimateError::InvalidInput(format!(
                "origin and destination are both {}",
                origin
            )));
        }

        let domestic = tables::is_domestic(&origin, &destination);
        let airlines = if domestic {
            tables::AIRLINES_DOMESTIC
        } else {
            tables::AIRLINES_INTERNATIONAL
        };
        let month0 = query.travel_month();
        let rng = self.rng.as_ref();

        let mut quotes = Vec::with_capacity(FLIGHT_QUOTES_PER_SEARCH);
        let first_airline = rng.index(airlines.len());
        for i in 0..FLIGHT_QUOTES_PER_SEARCH.min(airlines.len()) {
            let airline = airlines[(first_airline + i) % airlines.len()];
            let price = estimator::flight_price(&origin, &destination, month0, query.cabin, rng)?;
            let details = flight_details::resolve(&origin, &destination, domestic, rng);

            quotes.push(FlightQuote {
                price,
                airline: airline.to_string(),
                duration: details.formatted_duration(),
                stops: details.stops,
                availability: rng.chance(0.9),
                booking_class: query.cabin.label().to_string(),
                baggage: query.cabin.baggage(domestic).to_string(),
                refundable: rng.chance(0.3),
            });
        }

        quotes.sort_by_key(|q| q.price);
        Ok(quotes)
    }

    fn build_hotel_quotes(&self, query: &HotelQuery) -> Result<Vec<HotelQuote>, EstimateError> {
        let destination = tables::normalize_place(&query.destination);
        if destination.is_empty() {
            return Err(EstimateError::InvalidInput(
                "destination is required".to_string(),
            ));
        }
        if query.nights == 0 {
            return Err(EstimateError::InvalidInput(
                "stay must be at least one night".to_string(),
            ));
        }

        let names = tables::hotel_names(query.tier);
        let (rating_low, rating_high) = tables::hotel_rating_band(query.tier);
        let amenities: Vec<String> = tables::hotel_amenities(query.tier)
            .iter()
            .map(|a| a.to_string())
            .collect();
        let month0 = query.travel_month();
        let rng = self.rng.as_ref();

        let mut quotes = Vec::with_capacity(HOTEL_QUOTES_PER_SEARCH);
        let first_name = rng.index(names.len());
        for i in 0..HOTEL_QUOTES_PER_SEARCH.min(names.len()) {
            let price_per_night = estimator::hotel_nightly_rate(query.tier, &destination, month0, rng)?;
            let rating = (rng.uniform(rating_low, rating_high) * 10.0).round() / 10.0;
            let location = pick(rng, tables::HOTEL_LOCATIONS).copied().unwrap_or("City Centre");

            quotes.push(HotelQuote {
                price_per_night,
                hotel_name: names[(first_name + i) % names.len()].to_string(),
                rating,
                amenities: amenities.clone(),
                availability: rng.chance(0.9),
                cancellation: query.tier != BudgetTier::Budget || rng.chance(0.5),
                breakfast: query.tier == BudgetTier::Luxury || rng.chance(0.5),
                wifi: true,
                location: location.to_string(),
            });
        }

        quotes.sort_by_key(|q| q.price_per_night);
        Ok(quotes)
    }

    fn build_activity_quote(&self, query: &ActivityQuery) -> Result<ActivityQuote, EstimateError> {
        let destination = tables::normalize_place(&query.destination);
        if destination.is_empty() {
            return Err(EstimateError::InvalidInput(
                "destination is required".to_string(),
            ));
        }
        if query.travelers == 0 {
            return Err(EstimateError::InvalidInput(
                "at least one traveler is required".to_string(),
            ));
        }

        let rng = self.rng.as_ref();
        let categories = if query.interests.is_empty() {
            vec![ActivityCategory::Cultural]
        } else {
            query.interests.clone()
        };

        let mut recommended: Vec<String> = Vec::new();
        for category in &categories {
            for activity in tables::activities_for(*category) {
                if !recommended.iter().any(|a| a == activity) {
                    recommended.push(activity.to_string());
                }
            }
        }
        let total_activities = recommended.len();
        recommended.truncate(MAX_RECOMMENDED_ACTIVITIES);

        let average_price = estimator::activity_price(&categories, &destination, rng)?;
        let cancellation_policy = pick(rng, tables::ACTIVITY_CANCELLATION_POLICIES)
            .copied()
            .unwrap_or("Non-refundable");

        Ok(ActivityQuote {
            average_price,
            recommended_activities: recommended,
            total_activities,
            booking_required: categories.contains(&ActivityCategory::Adventure),
            group_discount: query.travelers >= advice::GROUP_SIZE,
            cancellation_policy: cancellation_policy.to_string(),
        })
    }
}

// Accepts three ASCII letters, e.g. "usd"
fn validate_currency_code(code: &str) -> Result<String, String> {
    let code = code.trim();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(format!("'{}' is not a three-letter currency code", code))
    }
}

#[async_trait]
impl TravelDataProvider for MockTravelService {
    async fn flight_quotes(&self, query: FlightQuery) -> Result<Vec<FlightQuote>, LookupError> {
        debug!(origin = %query.origin, destination = %query.destination, "Searching flights");
        sleep(self.config.latency.flights()).await;

        self.build_flight_quotes(&query).map_err(|source| {
            error!(origin = %query.origin, destination = %query.destination, error = %source, "Flight lookup failed");
            LookupError::FlightLookupFailed {
                origin: query.origin.clone(),
                destination: query.destination.clone(),
                source,
            }
        })
    }

    async fn hotel_quotes(&self, query: HotelQuery) -> Result<Vec<HotelQuote>, LookupError> {
        debug!(destination = %query.destination, tier = %query.tier, "Searching hotels");
        sleep(self.config.latency.hotels()).await;

        self.build_hotel_quotes(&query).map_err(|source| {
            error!(destination = %query.destination, error = %source, "Hotel lookup failed");
            LookupError::HotelLookupFailed {
                destination: query.destination.clone(),
                source,
            }
        })
    }

    async fn activity_quote(&self, query: ActivityQuery) -> Result<ActivityQuote, LookupError> {
        debug!(destination = %query.destination, interests = query.interests.len(), "Searching activities");
        sleep(self.config.latency.activities()).await;

        self.build_activity_quote(&query).map_err(|source| {
            error!(destination = %query.destination, error = %source, "Activity lookup failed");
            LookupError::ActivityLookupFailed {
                destination: query.destination.clone(),
                source,
            }
        })
    }

    async fn exchange_rates(&self, base: &str) -> Result<ExchangeRates, LookupError> {
        debug!(base, "Fetching exchange rates");
        sleep(self.config.latency.exchange_rates()).await;

        let code = validate_currency_code(base).map_err(|reason| {
            error!(base, reason = %reason, "Exchange rate lookup failed");
            LookupError::RateFetchDegraded {
                base: base.to_string(),
                reason,
            }
        })?;

        let table = match tables::exchange_table(&code) {
            Some(table) => table,
            None => {
                debug!(base = %code, "Unknown base currency, using {} rates", tables::REFERENCE_CURRENCY);
                tables::exchange_table(tables::REFERENCE_CURRENCY).ok_or_else(|| {
                    LookupError::RateFetchDegraded {
                        base: code.clone(),
                        reason: "reference table missing".to_string(),
                    }
                })?
            }
        };

        Ok(ExchangeRates::from_table(table))
    }
}
