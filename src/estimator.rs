// Price estimation: a table value scaled by a random variation and contextual multipliers

use crate::quotes::{ActivityCategory, BudgetTier, CabinClass};
use crate::random::RandomSource;
use crate::tables;
use thiserror::Error;

pub const FLIGHT_VARIATION: f64 = 0.25;
pub const HOTEL_VARIATION: f64 = 0.15;
pub const ACTIVITY_VARIATION: f64 = 0.20;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

// round(base * (1 + offset) * product(factors)), never below 1
pub fn apply_variation(base: f64, offset: f64, factors: &[f64]) -> Result<u32, EstimateError> {
    if !base.is_finite() || base <= 0.0 {
        return Err(EstimateError::InvalidInput(format!(
            "base price must be a positive finite number, got {}",
            base
        )));
    }
    if !offset.is_finite() || offset <= -1.0 {
        return Err(EstimateError::InvalidInput(format!(
            "variation offset must be finite and above -1, got {}",
            offset
        )));
    }
    if let Some(bad) = factors.iter().find(|f| !f.is_finite() || **f <= 0.0) {
        return Err(EstimateError::InvalidInput(format!(
            "multiplier must be a positive finite number, got {}",
            bad
        )));
    }

    let product: f64 = factors.iter().product();
    let price = (base * (1.0 + offset) * product).round();
    if price > u32::MAX as f64 {
        return Err(EstimateError::InvalidInput(format!(
            "estimated price {} does not fit a quote",
            price
        )));
    }

    Ok((price as u32).max(1))
}

// Offset drawn uniformly from [-variation, +variation)
pub fn estimate(
    base: f64,
    variation: f64,
    factors: &[f64],
    rng: &dyn RandomSource,
) -> Result<u32, EstimateError> {
    if !variation.is_finite() || !(0.0..1.0).contains(&variation) {
        return Err(EstimateError::InvalidInput(format!(
            "variation must be within [0, 1), got {}",
            variation
        )));
    }
    let offset = rng.uniform(-variation, variation);
    apply_variation(base, offset, factors)
}

// Inputs are normalized place names
pub fn flight_price(
    origin: &str,
    destination: &str,
    month0: u32,
    cabin: CabinClass,
    rng: &dyn RandomSource,
) -> Result<u32, EstimateError> {
    let base = tables::route_fare(origin, destination).unwrap_or_else(|| {
        if tables::is_domestic(origin, destination) {
            tables::DEFAULT_DOMESTIC_FARE
        } else {
            tables::DEFAULT_INTERNATIONAL_FARE
        }
    });

    estimate(
        base,
        FLIGHT_VARIATION,
        &[tables::seasonal_multiplier(month0), cabin.price_multiplier()],
        rng,
    )
}

pub fn hotel_nightly_rate(
    tier: BudgetTier,
    destination: &str,
    month0: u32,
    rng: &dyn RandomSource,
) -> Result<u32, EstimateError> {
    estimate(
        tables::hotel_base_rate(tier),
        HOTEL_VARIATION,
        &[
            tables::destination_multiplier(destination),
            tables::seasonal_multiplier(month0),
        ],
        rng,
    )
}

// Averages the per-category base prices; an empty selection means cultural sightseeing
pub fn activity_price(
    categories: &[ActivityCategory],
    destination: &str,
    rng: &dyn RandomSource,
) -> Result<u32, EstimateError> {
    let base = if categories.is_empty() {
        tables::activity_base_price(ActivityCategory::Cultural)
    } else {
        categories
            .iter()
            .map(|c| tables::activity_base_price(*c))
            .sum::<f64>()
            / categories.len() as f64
    };

    estimate(
        base,
        ACTIVITY_VARIATION,
        &[tables::destination_multiplier(destination)],
        rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{SeededRandom, SequenceRandom};
    use test_case::test_case;

    #[test_case(100.0, 0.0, &[], 100; "no variation no factors")]
    #[test_case(100.0, 0.25, &[], 125; "upper variation")]
    #[test_case(100.0, -0.25, &[1.2], 90; "lower variation with factor")]
    #[test_case(85.0, 0.1, &[1.35, 3.0], 379; "several factors")]
    #[test_case(0.4, -0.2, &[], 1; "clamped to one")]
    fn test_apply_variation(base: f64, offset: f64, factors: &[f64], expected: u32) {
        assert_eq!(apply_variation(base, offset, factors).unwrap(), expected);
    }

    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    #[test_case(-10.0; "negative")]
    #[test_case(0.0; "zero")]
    fn test_rejects_invalid_base(base: f64) {
        let rng = SequenceRandom::constant(0.5);
        assert!(matches!(
            estimate(base, 0.25, &[], &rng),
            Err(EstimateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_factor_and_variation() {
        let rng = SequenceRandom::constant(0.5);
        assert!(estimate(100.0, 0.25, &[f64::NAN], &rng).is_err());
        assert!(estimate(100.0, 0.25, &[-1.0], &rng).is_err());
        assert!(estimate(100.0, 1.5, &[], &rng).is_err());
        assert!(estimate(100.0, f64::NAN, &[], &rng).is_err());
    }

    #[test]
    fn test_estimate_stays_inside_band() {
        let rng = SeededRandom::new(42);
        for _ in 0..1000 {
            let price = estimate(200.0, 0.25, &[], &rng).unwrap();
            assert!((150..=250).contains(&price), "price {} out of band", price);
        }
    }

    #[test]
    fn test_flight_price_uses_route_table() {
        // midpoint sample means zero variation
        let rng = SequenceRandom::constant(0.5);
        assert_eq!(
            flight_price("delhi", "mumbai", 1, CabinClass::Economy, &rng).unwrap(),
            85
        );
        assert_eq!(
            flight_price("mumbai", "delhi", 11, CabinClass::Business, &rng).unwrap(),
            344
        );
    }

    #[test]
    fn test_flight_price_defaults_by_category() {
        let rng = SequenceRandom::constant(0.5);
        assert_eq!(
            flight_price("pune", "kochi", 1, CabinClass::Economy, &rng).unwrap(),
            100
        );
        assert_eq!(
            flight_price("pune", "berlin", 1, CabinClass::Economy, &rng).unwrap(),
            600
        );
    }

    #[test]
    fn test_flight_price_is_positive_for_all_routes() {
        let rng = SeededRandom::new(3);
        let places = ["mumbai", "delhi", "goa", "london", "paris", "new york", "unknown"];
        for origin in places {
            for destination in places {
                for month in 0..12 {
                    let price =
                        flight_price(origin, destination, month, CabinClass::Economy, &rng).unwrap();
                    assert!(price > 0);
                }
            }
        }
    }

    #[test]
    fn test_hotel_rate_within_tier_band() {
        let rng = SeededRandom::new(11);
        for tier in [BudgetTier::Budget, BudgetTier::Standard, BudgetTier::Luxury] {
            let base = tables::hotel_base_rate(tier);
            let low = (base * 0.85).round() as u32;
            let high = (base * 1.15).round() as u32;
            // neutral destination and February keep the multipliers at 1.0
            let first = hotel_nightly_rate(tier, "atlantis", 1, &rng).unwrap();
            let second = hotel_nightly_rate(tier, "atlantis", 1, &rng).unwrap();
            assert!((low..=high).contains(&first));
            assert!((low..=high).contains(&second));
        }
    }

    #[test]
    fn test_activity_price_averages_categories() {
        let rng = SequenceRandom::constant(0.5);
        let price = activity_price(
            &[ActivityCategory::Adventure, ActivityCategory::Shopping],
            "atlantis",
            &rng,
        )
        .unwrap();
        assert_eq!(price, 40);
        assert_eq!(activity_price(&[], "london", &rng).unwrap(), 50);
    }
}
