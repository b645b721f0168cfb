use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fixed display schema a raw planner response is normalized onto.
///
/// Every field is always present and of the declared container type;
/// anything the provider omitted shows up as an empty container or a
/// sentinel value, never as a missing field.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct NormalizedPlan {
    pub source: String,
    pub destination: String,
    pub flights: Vec<Flight>,
    pub hotels: Hotels,
    pub itinerary: Vec<DayPlan>,
    pub attractions: Vec<Attraction>,
    pub restaurants: Vec<Restaurant>,
    pub transport: TransportInfo,
    pub weather: WeatherInfo,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Flight {
    pub airline: String,
    pub price: String,
    pub duration: String,
    pub stops: String,
    pub airline_logo: Option<String>,
    /// Original provider record, retained for fallback display.
    pub raw: Value,
}

/// Hotels keyed by price tier. A response without a `hotels` field
/// normalizes to three empty tiers.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Hotels {
    pub luxury: Vec<Hotel>,
    pub mid_range: Vec<Hotel>,
    pub budget: Vec<Hotel>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Hotel {
    pub name: String,
    pub area: String,
    pub price: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DayPlan {
    pub day: u32,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Attraction {
    pub name: String,
    pub why: String,
    pub best_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub must_try: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TransportInfo {
    pub best_way: Option<String>,
    pub avg_cost: Option<String>,
    pub tips: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct WeatherInfo {
    pub summary: Option<String>,
    pub temperature: Option<String>,
    pub recommendation: Option<String>,
}
