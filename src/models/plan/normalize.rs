use serde_json::Value;

use super::base::{
    Attraction, DayPlan, Flight, Hotel, Hotels, NormalizedPlan, Restaurant, TransportInfo,
    WeatherInfo,
};
use crate::models::query::PlanRequest;

// Ordered candidate accessors per field: the canonical key first, then the
// alternate names older provider versions are known to send. New provider
// shapes are added by extending these tables.
const AIRLINE_KEYS: &[&str] = &["airline", "name"];
const DURATION_KEYS: &[&str] = &["duration", "duration_text"];
const STOPS_KEYS: &[&str] = &["stops", "total_layovers"];
const LOGO_KEYS: &[&str] = &["airline_logo", "airline_logo_url"];
const PRICE_KEYS: &[&str] = &["price"];
const AREA_KEYS: &[&str] = &["area", "location"];

/// Walk a dotted path through a dynamic document. Any missing or null
/// intermediate resolves to `None` instead of failing.
pub fn safe_get<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Coerce a leaf value into display text. Blank strings count as absent so
/// they degrade to the field's fallback; numbers render in decimal.
fn display_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn first_display(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| record.get(*key).and_then(display_string))
}

fn display_at(raw: &Value, path: &str) -> Option<String> {
    safe_get(raw, path).and_then(display_string)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(display_string).collect())
        .unwrap_or_default()
}

impl NormalizedPlan {
    /// Shape a raw planner response of unknown completeness onto the fixed
    /// display schema. Whatever the response omits comes back as an empty
    /// container or sentinel; rendering never needs to guard for absence.
    pub fn from_raw(raw: &Value, request: &PlanRequest) -> Self {
        Self {
            source: display_at(raw, "source")
                .or_else(|| request.source.clone())
                .unwrap_or_default(),
            destination: display_at(raw, "destination")
                .or_else(|| request.destination.clone())
                .unwrap_or_default(),
            flights: safe_get(raw, "flights")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(Flight::from_value).collect())
                .unwrap_or_default(),
            hotels: Hotels {
                luxury: hotel_tier(raw, "luxury"),
                mid_range: hotel_tier(raw, "mid_range"),
                budget: hotel_tier(raw, "budget"),
            },
            itinerary: safe_get(raw, "itinerary")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .enumerate()
                        .map(|(index, value)| DayPlan::from_value(index, value))
                        .collect()
                })
                .unwrap_or_default(),
            attractions: safe_get(raw, "attractions")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(Attraction::from_value).collect())
                .unwrap_or_default(),
            restaurants: safe_get(raw, "restaurants")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(Restaurant::from_value).collect())
                .unwrap_or_default(),
            transport: TransportInfo {
                best_way: display_at(raw, "transport.best_way"),
                avg_cost: display_at(raw, "transport.avg_cost"),
                tips: display_at(raw, "transport.tips"),
            },
            weather: WeatherInfo {
                summary: display_at(raw, "weather.summary"),
                temperature: display_at(raw, "weather.temperature"),
                recommendation: display_at(raw, "weather.recommendation"),
            },
        }
    }
}

fn hotel_tier(raw: &Value, tier: &str) -> Vec<Hotel> {
    safe_get(raw, "hotels")
        .and_then(|hotels| hotels.get(tier))
        .and_then(Value::as_array)
        .map(|items| items.iter().map(Hotel::from_value).collect())
        .unwrap_or_default()
}

impl Flight {
    fn from_value(value: &Value) -> Self {
        Self {
            airline: first_display(value, AIRLINE_KEYS)
                .unwrap_or_else(|| "Unknown".to_string()),
            price: first_display(value, PRICE_KEYS).unwrap_or_else(|| "N/A".to_string()),
            duration: first_display(value, DURATION_KEYS)
                .unwrap_or_else(|| "N/A".to_string()),
            stops: first_display(value, STOPS_KEYS).unwrap_or_else(|| "N/A".to_string()),
            airline_logo: first_display(value, LOGO_KEYS),
            raw: value.clone(),
        }
    }
}

impl Hotel {
    fn from_value(value: &Value) -> Self {
        Self {
            name: first_display(value, &["name"]).unwrap_or_default(),
            area: first_display(value, AREA_KEYS).unwrap_or_default(),
            price: first_display(value, PRICE_KEYS).unwrap_or_else(|| "N/A".to_string()),
            highlights: string_list(value.get("highlights")),
        }
    }
}

impl DayPlan {
    fn from_value(index: usize, value: &Value) -> Self {
        Self {
            day: value
                .get("day")
                .and_then(Value::as_u64)
                .map(|day| day as u32)
                .unwrap_or(index as u32 + 1),
            morning: first_display(value, &["morning"]).unwrap_or_default(),
            afternoon: first_display(value, &["afternoon"]).unwrap_or_default(),
            evening: first_display(value, &["evening"]).unwrap_or_default(),
        }
    }
}

impl Attraction {
    fn from_value(value: &Value) -> Self {
        Self {
            name: first_display(value, &["name"]).unwrap_or_default(),
            why: first_display(value, &["why"]).unwrap_or_default(),
            best_time: first_display(value, &["best_time"]),
        }
    }
}

impl Restaurant {
    fn from_value(value: &Value) -> Self {
        // Providers send must_try as either a single string or a list.
        let must_try = match value.get("must_try") {
            Some(Value::Array(items)) => {
                let dishes: Vec<String> = items.iter().filter_map(display_string).collect();
                if dishes.is_empty() {
                    None
                } else {
                    Some(dishes.join(", "))
                }
            }
            Some(other) => display_string(other),
            None => None,
        };

        Self {
            name: first_display(value, &["name"]).unwrap_or_default(),
            cuisine: first_display(value, &["cuisine"]).unwrap_or_default(),
            must_try,
        }
    }
}
