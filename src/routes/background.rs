use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::services::background_service;

/*
    /api/backgrounds/{name}
*/
pub async fn get_background(path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    let src = background_service::resolve(&name);

    HttpResponse::Ok().json(json!({ "name": name, "src": src }))
}
