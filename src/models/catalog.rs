use serde::Serialize;

/// A city the planner can route between, keyed by its IATA airport code.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub name: &'static str,
    pub code: &'static str,
}

/// Supported departure/arrival cities, sorted by name.
pub const CITIES: &[City] = &[
    City { name: "Agra", code: "AGR" },
    City { name: "Ahmedabad", code: "AMD" },
    City { name: "Aizawl", code: "AJL" },
    City { name: "Amritsar", code: "ATQ" },
    City { name: "Ayodhya", code: "AYJ" },
    City { name: "Bengaluru", code: "BLR" },
    City { name: "Bhopal", code: "BHO" },
    City { name: "Bhubaneswar", code: "BBI" },
    City { name: "Chandigarh", code: "IXC" },
    City { name: "Chennai", code: "MAA" },
    City { name: "Coimbatore", code: "CJB" },
    City { name: "Delhi", code: "DEL" },
    City { name: "Goa (Dabolim)", code: "GOI" },
    City { name: "Goa (Mopa)", code: "GOX" },
    City { name: "Guwahati", code: "GAU" },
    City { name: "Gwalior", code: "GWL" },
    City { name: "Hyderabad", code: "HYD" },
    City { name: "Imphal", code: "IMF" },
    City { name: "Indore", code: "IDR" },
    City { name: "Jaipur", code: "JAI" },
    City { name: "Jaisalmer", code: "JSA" },
    City { name: "Jammu", code: "IXJ" },
    City { name: "Jodhpur", code: "JDH" },
    City { name: "Kannur", code: "CNN" },
    City { name: "Kanpur", code: "KNU" },
    City { name: "Kochi", code: "COK" },
    City { name: "Kolkata", code: "CCU" },
    City { name: "Kozhikode", code: "CCJ" },
    City { name: "Leh", code: "IXL" },
    City { name: "Lucknow", code: "LKO" },
    City { name: "Madurai", code: "IXM" },
    City { name: "Mangalore", code: "IXE" },
    City { name: "Mumbai", code: "BOM" },
    City { name: "Mysore", code: "MYQ" },
    City { name: "Nagpur", code: "NAG" },
    City { name: "Patna", code: "PAT" },
    City { name: "Port Blair", code: "IXZ" },
    City { name: "Pune", code: "PNQ" },
    City { name: "Raipur", code: "RPR" },
    City { name: "Rajkot", code: "RAJ" },
    City { name: "Ranchi", code: "IXR" },
    City { name: "Shillong", code: "SHL" },
    City { name: "Srinagar", code: "SXR" },
    City { name: "Surat", code: "STV" },
    City { name: "Thiruvananthapuram", code: "TRV" },
    City { name: "Tiruchirappalli", code: "TRZ" },
    City { name: "Udaipur", code: "UDR" },
    City { name: "Vadodara", code: "BDQ" },
    City { name: "Varanasi", code: "VNS" },
    City { name: "Visakhapatnam", code: "VTZ" },
];

/// Trip themes offered by the query form.
pub const THEMES: &[&str] = &[
    "Hill Stations",
    "Beaches & Islands",
    "Heritage & Culture",
    "Pilgrimage & Spiritual",
    "Adventure & Trekking",
    "Wildlife & Nature",
    "Desert",
    "Family-Friendly",
];

pub fn find_city(code: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.code.eq_ignore_ascii_case(code))
}
