use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wanderlux_api::routes;
use wanderlux_api::services::planner_client::PlannerClient;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let planner = PlannerClient::from_env();
    println!("Planner endpoint: {}", planner.base_url());

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(planner.clone()))
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
    })
    .bind((host, port))?
    .run()
    .await
}
