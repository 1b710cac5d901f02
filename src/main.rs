use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use quizdesk_server::{
    app_state::AppState,
    auth::JwtService,
    config::Config,
    graphql::create_schema,
    handlers::{configure_api, configure_health},
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
};

fn to_io_error(err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production().map_err(to_io_error)?;
    }

    let jwt_service = web::Data::new(JwtService::new(&config.jwt_secret));
    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let allowed_origin = config.cors_allowed_origin.clone();

    let app_state = AppState::new(config).await.map_err(to_io_error)?;
    let schema = web::Data::new(create_schema(app_state.clone()));
    let app_state = web::Data::new(app_state);

    log::info!(
        "Starting HTTP server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .expose_headers(vec![REQUEST_ID_HEADER])
            .max_age(3600);

        App::new()
            .app_data(app_state.clone())
            .app_data(jwt_service.clone())
            .app_data(schema.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(configure_health)
            .configure(configure_api)
    })
    .bind(bind_address)?
    .run()
    .await
}
