use actix_web::{web, HttpResponse, Responder};

use crate::models::plan::base::NormalizedPlan;
use crate::models::plan::view::PlanView;
use crate::models::query::PlanRequest;
use crate::services::planner_client::PlannerClient;

/*
    /api/plan

    The results view. Stateless: the upstream request is reconstructed
    entirely from the query string. Navigating here again issues a fresh
    upstream request.
*/
pub async fn get_plan(
    planner: web::Data<PlannerClient>,
    params: web::Query<PlanRequest>,
) -> impl Responder {
    let request = params.into_inner();

    match planner.generate_plan(&request).await {
        Ok(raw) => {
            let plan = NormalizedPlan::from_raw(&raw, &request);
            HttpResponse::Ok().json(PlanView::from_plan(&plan))
        }
        Err(err) => {
            eprintln!("Failed to load plan: {}", err);
            HttpResponse::InternalServerError().body("Failed to load plan.")
        }
    }
}
