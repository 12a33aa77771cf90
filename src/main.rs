use actix_web::{middleware::Logger, web, App, HttpServer};
use fer_auth::config::AppConfig;
use fer_auth::logging::init_logger;
use fer_auth::user_handlers::routes;
use fer_auth::{Authenticator, InMemoryRegistry, TokenIssuer};
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_logger();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Startup aborted: {err}");
            std::process::exit(1);
        }
    };

    let registry = InMemoryRegistry::with_default_admin();
    if registry.is_empty() {
        error!("Startup aborted: no registered accounts");
        std::process::exit(1);
    }
    info!("Loaded {} registered account(s)", registry.len());

    let authenticator = Authenticator::new(registry, TokenIssuer::new(&config.jwt_secret));
    let issuer = web::Data::new(authenticator.issuer().clone());
    let authenticator = web::Data::new(authenticator);

    let addr = config.bind_addr();
    info!("Listening on: {}", addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(authenticator.clone())
            .app_data(issuer.clone())
            .configure(routes)
    })
    .bind(addr)?
    .run()
    .await
}
