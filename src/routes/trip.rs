use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::query::TripQueryForm;

/*
    /api/trip/submit
*/
pub async fn submit(body: web::Json<TripQueryForm>) -> impl Responder {
    let form = body.into_inner();

    match form.finalize() {
        Ok(query) => HttpResponse::Ok().json(json!({
            "num_days": query.num_days,
            "redirect": query.results_path(),
        })),
        Err(err) => HttpResponse::BadRequest().json(json!({ "error": err.to_string() })),
    }
}
