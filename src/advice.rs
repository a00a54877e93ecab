// Rule-based travel advice
// Every rule group is evaluated independently; output order is tier, duration, season, group.

use crate::quotes::BudgetTier;
use crate::tables;

pub const LONG_TRIP_DAYS: u32 = 7;
pub const SHORT_TRIP_DAYS: u32 = 3;
pub const GROUP_SIZE: u32 = 4;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone)]
pub struct AdviceRequest<'a> {
    pub destination: &'a str,
    pub budget: BudgetTier,
    pub month0: u32,
    pub days: u32,
    pub travelers: u32,
}

pub fn generate(request: &AdviceRequest<'_>) -> Vec<String> {
    let mut advice = Vec::new();
    advice.extend(budget_advice(request.budget));
    advice.extend(duration_advice(request.days));
    advice.extend(seasonal_advice(request.destination, request.month0));
    advice.extend(group_advice(request.travelers));
    advice
}

fn budget_advice(budget: BudgetTier) -> Vec<String> {
    let tip = match budget {
        BudgetTier::Budget => {
            "Stay in hostels or guesthouses and use public transport to stretch your budget"
        }
        BudgetTier::Standard => {
            "Look for flight and hotel bundles; mid-range hotels often include breakfast"
        }
        BudgetTier::Luxury => {
            "Book premium experiences in advance and use the hotel concierge for private tours"
        }
    };
    vec![tip.to_string()]
}

fn duration_advice(days: u32) -> Vec<String> {
    if days > LONG_TRIP_DAYS {
        vec![format!(
            "For a {}-day trip, weekly apartment rentals and multi-day transport passes save money",
            days
        )]
    } else if days <= SHORT_TRIP_DAYS {
        vec!["On a short trip, stay central and focus on a few must-see sights".to_string()]
    } else {
        Vec::new()
    }
}

fn seasonal_advice(destination: &str, month0: u32) -> Vec<String> {
    let month = MONTH_NAMES
        .get(month0 as usize)
        .copied()
        .unwrap_or("this month");
    let place = display_place(destination);

    if tables::is_peak_month(month0) {
        vec![format!(
            "{} is peak season in {}; book flights and hotels early to avoid surge prices",
            month, place
        )]
    } else if tables::is_off_peak_month(month0) {
        vec![format!(
            "{} is off-season in {}; expect lower prices and fewer crowds",
            month, place
        )]
    } else {
        Vec::new()
    }
}

fn group_advice(travelers: u32) -> Vec<String> {
    if travelers >= GROUP_SIZE {
        vec![format!(
            "Travelling as a group of {}, ask for group discounts and consider shared villas or apartments",
            travelers
        )]
    } else if travelers == 1 {
        vec!["Solo travellers can save with shared tours and single-room hostel options".to_string()]
    } else {
        Vec::new()
    }
}

// "new york" -> "New York"
fn display_place(place: &str) -> String {
    place
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn request(budget: BudgetTier, month0: u32, days: u32, travelers: u32) -> AdviceRequest<'static> {
        AdviceRequest {
            destination: "goa",
            budget,
            month0,
            days,
            travelers,
        }
    }

    #[test]
    fn test_all_rule_groups_fire_in_order() {
        let advice = generate(&request(BudgetTier::Luxury, 6, 10, 5));
        assert_eq!(advice.len(), 4);
        assert!(advice[0].contains("premium experiences"));
        assert!(advice[1].contains("10-day trip"));
        assert!(advice[2].contains("peak season in Goa"));
        assert!(advice[2].starts_with("July"));
        assert!(advice[3].contains("group of 5"));
    }

    #[test_case(BudgetTier::Budget, 1, 5, 2, 1; "only the tier rule")]
    #[test_case(BudgetTier::Standard, 8, 2, 1, 4; "short off-season solo")]
    #[test_case(BudgetTier::Budget, 11, 8, 3, 3; "long peak couple")]
    fn test_rule_count(budget: BudgetTier, month0: u32, days: u32, travelers: u32, expected: usize) {
        assert_eq!(generate(&request(budget, month0, days, travelers)).len(), expected);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let r = request(BudgetTier::Standard, 0, 4, 4);
        assert_eq!(generate(&r), generate(&r));
    }

    #[test]
    fn test_display_place() {
        assert_eq!(display_place("new york"), "New York");
        assert_eq!(display_place("goa"), "Goa");
    }
}
