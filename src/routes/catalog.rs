use actix_web::{web, HttpResponse, Responder};
use regex::Regex;

use crate::models::catalog::{City, CITIES, THEMES};

#[derive(serde::Deserialize)]
pub struct QueryParams {
    limit: Option<u16>,
    search: Option<String>,
}

pub async fn get_cities(params: web::Query<QueryParams>) -> impl Responder {
    let mut cities: Vec<&City> = CITIES.iter().collect();

    if let Some(search_text) = &params.search {
        if !search_text.is_empty() {
            let pattern = format!("(?i)^{}", regex::escape(search_text));
            match Regex::new(&pattern) {
                Ok(filter) => cities.retain(|city| filter.is_match(city.name)),
                Err(err) => {
                    eprintln!("Failed to build city filter: {:?}", err);
                    return HttpResponse::InternalServerError().body("Failed to filter cities.");
                }
            }
        }
    }

    if let Some(limit) = params.limit {
        cities.truncate(limit.into());
    }

    HttpResponse::Ok().json(cities)
}

pub async fn get_themes() -> impl Responder {
    HttpResponse::Ok().json(THEMES)
}
