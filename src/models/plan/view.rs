use serde::Serialize;

use super::base::{Flight, Hotel, NormalizedPlan};
use crate::services::background_service;

/// Bundled logo shown when a flight's provider logo is missing or fails to
/// load. Clients walk `logo_sources` in order and give up silently after it.
pub const FALLBACK_LOGO: &str = "/logos/default.png";

/// The fully rendered results view: five sections, each carrying its
/// background asset and an empty-state message whenever its underlying
/// data is empty. Pure presentation of a [`NormalizedPlan`].
#[derive(Debug, Serialize, Clone)]
pub struct PlanView {
    pub source: String,
    pub destination: String,
    pub flights: FlightsSection,
    pub hotels: HotelsSection,
    pub itinerary: ItinerarySection,
    pub places: PlacesSection,
    pub essentials: EssentialsSection,
}

#[derive(Debug, Serialize, Clone)]
pub struct FlightsSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub background: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<&'static str>,
    pub flights: Vec<FlightCard>,
}

#[derive(Debug, Serialize, Clone)]
pub struct FlightCard {
    pub airline: String,
    pub meta: String,
    pub price: String,
    pub logo_sources: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct HotelsSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub background: &'static str,
    pub tiers: Vec<TierView>,
}

#[derive(Debug, Serialize, Clone)]
pub struct TierView {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<&'static str>,
    pub hotels: Vec<HotelCard>,
}

#[derive(Debug, Serialize, Clone)]
pub struct HotelCard {
    pub name: String,
    pub area: String,
    pub price: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct ItinerarySection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub background: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<&'static str>,
    pub days: Vec<DayView>,
}

#[derive(Debug, Serialize, Clone)]
pub struct DayView {
    pub label: String,
    pub morning: String,
    pub afternoon: String,
    pub evening: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct PlacesSection {
    pub background: &'static str,
    pub attractions: AttractionsView,
    pub restaurants: RestaurantsView,
}

#[derive(Debug, Serialize, Clone)]
pub struct AttractionsView {
    pub title: &'static str,
    pub subtitle: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<&'static str>,
    pub attractions: Vec<AttractionCard>,
}

#[derive(Debug, Serialize, Clone)]
pub struct AttractionCard {
    pub name: String,
    pub why: String,
    pub best_time: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct RestaurantsView {
    pub title: &'static str,
    pub subtitle: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<&'static str>,
    pub restaurants: Vec<RestaurantCard>,
}

#[derive(Debug, Serialize, Clone)]
pub struct RestaurantCard {
    pub name: String,
    pub cuisine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_try: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct EssentialsSection {
    pub background: &'static str,
    pub transport: TransportView,
    pub weather: WeatherView,
}

#[derive(Debug, Serialize, Clone)]
pub struct TransportView {
    pub best_way: String,
    pub avg_cost: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct WeatherView {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

fn empty_state(is_empty: bool, message: &'static str) -> Option<&'static str> {
    if is_empty {
        Some(message)
    } else {
        None
    }
}

impl FlightCard {
    fn from_flight(flight: &Flight) -> Self {
        let mut logo_sources = Vec::new();
        if let Some(logo) = &flight.airline_logo {
            logo_sources.push(logo.clone());
        }
        logo_sources.push(FALLBACK_LOGO.to_string());

        Self {
            airline: flight.airline.clone(),
            meta: format!("{} • {}", flight.duration, flight.stops),
            price: flight.price.clone(),
            logo_sources,
        }
    }
}

impl HotelCard {
    fn from_hotel(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            area: hotel.area.clone(),
            price: hotel.price.clone(),
            highlights: hotel.highlights.clone(),
        }
    }
}

impl PlanView {
    pub fn from_plan(plan: &NormalizedPlan) -> Self {
        let tiers = [
            ("luxury", "Luxury", &plan.hotels.luxury),
            ("mid_range", "Mid-range", &plan.hotels.mid_range),
            ("budget", "Budget", &plan.hotels.budget),
        ]
        .into_iter()
        .map(|(key, label, hotels)| TierView {
            key,
            label,
            empty: empty_state(hotels.is_empty(), "No hotels found"),
            hotels: hotels.iter().map(HotelCard::from_hotel).collect(),
        })
        .collect();

        Self {
            source: plan.source.clone(),
            destination: plan.destination.clone(),
            flights: FlightsSection {
                title: "Flights",
                subtitle: "Live-sourced flight options — curated for you",
                background: background_service::resolve("Travel_Flights"),
                empty: empty_state(plan.flights.is_empty(), "No flights found"),
                flights: plan.flights.iter().map(FlightCard::from_flight).collect(),
            },
            hotels: HotelsSection {
                title: "Hotels",
                subtitle: "Hand-picked stays for every category",
                background: "/Travel_Hotel.png",
                tiers,
            },
            itinerary: ItinerarySection {
                title: "Itinerary",
                subtitle: "Daily personalized plan",
                background: background_service::resolve("Travel_Result"),
                empty: empty_state(plan.itinerary.is_empty(), "No itinerary available"),
                days: plan
                    .itinerary
                    .iter()
                    .map(|day| DayView {
                        label: format!("Day {}", day.day),
                        morning: day.morning.clone(),
                        afternoon: day.afternoon.clone(),
                        evening: day.evening.clone(),
                    })
                    .collect(),
            },
            places: PlacesSection {
                background: "/Travel_Attraction.png",
                attractions: AttractionsView {
                    title: "Attractions",
                    subtitle: "Top sights to visit",
                    empty: empty_state(plan.attractions.is_empty(), "No attractions available"),
                    attractions: plan
                        .attractions
                        .iter()
                        .map(|attraction| AttractionCard {
                            name: attraction.name.clone(),
                            why: attraction.why.clone(),
                            best_time: attraction
                                .best_time
                                .clone()
                                .unwrap_or_else(|| "Anytime".to_string()),
                        })
                        .collect(),
                },
                restaurants: RestaurantsView {
                    title: "Restaurants",
                    subtitle: "Recommended places to eat",
                    empty: empty_state(plan.restaurants.is_empty(), "No restaurants available"),
                    restaurants: plan
                        .restaurants
                        .iter()
                        .map(|restaurant| RestaurantCard {
                            name: restaurant.name.clone(),
                            cuisine: restaurant.cuisine.clone(),
                            must_try: restaurant.must_try.clone(),
                        })
                        .collect(),
                },
            },
            essentials: EssentialsSection {
                background: background_service::resolve("Travel_Home"),
                transport: TransportView {
                    best_way: plan
                        .transport
                        .best_way
                        .clone()
                        .unwrap_or_else(|| "Local transit details unavailable".to_string()),
                    avg_cost: plan
                        .transport
                        .avg_cost
                        .clone()
                        .unwrap_or_else(|| "Varies".to_string()),
                    tips: plan.transport.tips.clone(),
                },
                weather: WeatherView {
                    summary: plan
                        .weather
                        .summary
                        .clone()
                        .unwrap_or_else(|| "Weather data unavailable".to_string()),
                    temperature: plan.weather.temperature.clone(),
                    recommendation: plan.weather.recommendation.clone(),
                },
            },
        }
    }
}
