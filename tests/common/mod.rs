use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use wanderlux_api::routes;
use wanderlux_api::services::planner_client::PlannerClient;

pub struct TestApp {
    pub planner: PlannerClient,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            planner: PlannerClient::from_env(),
        }
    }

    pub fn with_planner(base_url: impl Into<String>) -> Self {
        Self {
            planner: PlannerClient::new(base_url),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(self.planner.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/catalog")
                            .route("/cities", web::get().to(routes::catalog::get_cities))
                            .route("/themes", web::get().to(routes::catalog::get_themes)),
                    )
                    .route("/trip/submit", web::post().to(routes::trip::submit))
                    .route("/plan", web::get().to(routes::plan::get_plan))
                    .route(
                        "/backgrounds/{name}",
                        web::get().to(routes::background::get_background),
                    ),
            )
    }
}
