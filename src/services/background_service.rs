/// Asset served when a logical background name is unrecognized.
pub const DEFAULT_BACKGROUND: &str = "/Travel_Flight.mp4";

/// Collapse a free-form name into a lookup key: lowercase, with every
/// non-alphanumeric character replaced by an underscore.
fn normalize_key(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Map a logical background name to its asset reference. Total function:
/// lookup is case- and punctuation-insensitive and unknown names resolve
/// to [`DEFAULT_BACKGROUND`].
pub fn resolve(name: &str) -> &'static str {
    match normalize_key(name).as_str() {
        "travel_flight" | "travel_flights" | "flights" | "flight" => "/Travel_Flight.mp4",
        "travel_footer" | "footer" => "/Travel_Footer.mp4",
        "travel_result" | "result" | "itinerary" => "/Travel_Result.mp4",
        "travel_info" | "info" => "/Travel_Info.mp4",
        "travel_home" | "home" | "transport" | "weather" => "/Travel_Home.mp4",
        "travel_input" | "input" => "/Travel_Input.mp4",
        "travel_loading" | "loading" => "/Travel_Loading.mp4",
        _ => DEFAULT_BACKGROUND,
    }
}
