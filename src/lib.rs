// Mock trip planner: fabricated flight, hotel, activity and exchange-rate data

pub mod advice;
pub mod config;
pub mod estimator;
pub mod flight_details;
pub mod planner;
pub mod quotes;
pub mod random;
pub mod service;
pub mod tables;
pub mod telemetry;

// Re-export key types for convenience
pub use config::{ConfigError, LatencyConfig, ProviderCredentials, ServiceConfig};
pub use estimator::EstimateError;
pub use planner::{plan_trip, PlanError, TripPlan, TripRequest};
pub use quotes::{
    ActivityCategory, ActivityQuery, ActivityQuote, BudgetTier, CabinClass, ExchangeRates,
    FlightQuery, FlightQuote, HotelQuery, HotelQuote,
};
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use service::{LookupError, MockTravelService, TravelDataProvider};
