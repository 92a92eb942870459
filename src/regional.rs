//! State-level estimates derived from country observations.
//!
//! The upstream API has no sub-national series for most indicators, so
//! state figures are approximated by scaling the parent country's values
//! with per-state multipliers that reflect known regional patterns. The
//! tables cover the US and India; other scopes pass values through
//! unchanged.

use crate::models::{Entity, IndicatorRecord, Scope};

/// Indicator category the multiplier tables distinguish, matched on the
/// indicator's display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Economic,
    Education,
    Health,
    Other,
}

fn categorize(indicator_name: &str) -> Category {
    if indicator_name.contains("GDP") {
        Category::Economic
    } else if indicator_name.contains("School") || indicator_name.contains("education") {
        Category::Education
    } else if indicator_name.contains("Life expectancy") || indicator_name.contains("Health") {
        Category::Health
    } else {
        Category::Other
    }
}

fn us_multiplier(state: &str, cat: Category) -> f64 {
    match cat {
        Category::Economic => match state {
            "New York" => 1.35,
            "California" => 1.25,
            "Massachusetts" => 1.30,
            _ => 0.95,
        },
        Category::Education => match state {
            "Massachusetts" => 1.25,
            "Connecticut" => 1.20,
            "New Jersey" => 1.15,
            _ => 0.95,
        },
        Category::Health => match state {
            "Hawaii" => 1.10,
            "Massachusetts" => 1.08,
            "Connecticut" => 1.06,
            _ => 0.98,
        },
        Category::Other => 1.0,
    }
}

fn india_multiplier(state: &str, cat: Category) -> f64 {
    match cat {
        Category::Economic => match state {
            "Maharashtra" => 1.30,
            "Karnataka" => 1.25,
            "Tamil Nadu" => 1.20,
            _ => 0.80,
        },
        Category::Education => match state {
            "Kerala" => 1.30,
            "Himachal Pradesh" => 1.20,
            "Goa" => 1.15,
            _ => 0.85,
        },
        Category::Health | Category::Other => 1.0,
    }
}

/// Scaling factor for one (state, indicator) combination.
pub fn multiplier(scope: Scope, state_name: &str, indicator_name: &str) -> f64 {
    let cat = categorize(indicator_name);
    match scope {
        Scope::UsStates => us_multiplier(state_name, cat),
        Scope::IndiaStates => india_multiplier(state_name, cat),
        _ => 1.0,
    }
}

/// Rebase country records onto a state: values are scaled by the state's
/// multiplier, missing values stay missing, and the entity columns take the
/// state's code and name.
pub fn estimate_state_records(
    country_records: &[IndicatorRecord],
    state: &Entity,
) -> Vec<IndicatorRecord> {
    country_records
        .iter()
        .map(|r| {
            let m = multiplier(state.scope, &state.name, &r.indicator_name);
            IndicatorRecord {
                indicator_id: r.indicator_id.clone(),
                indicator_name: r.indicator_name.clone(),
                entity_code: state.code.clone(),
                entity_name: state.name.clone(),
                year: r.year,
                value: r.value.map(|v| v * m),
            }
        })
        .collect()
}
