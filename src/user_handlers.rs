use crate::auth::validator;
use crate::authenticator::{into_response, Authenticator};
use crate::db::InMemoryRegistry;
use crate::errors::{InternalError, LoginError};
use crate::models::{Claims, LoginRequest};
use actix_web::{get, http::StatusCode, post, web, HttpResponse, Responder};
use actix_web_httpauth::middleware::HttpAuthentication;

pub type AppAuthenticator = Authenticator<InMemoryRegistry>;

fn status_for(err: &LoginError) -> StatusCode {
    match err {
        LoginError::Validation(_) => StatusCode::BAD_REQUEST,
        LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        LoginError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Simple health check
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[post("/login")]
pub async fn login(
    auth: web::Data<AppAuthenticator>,
    data: web::Json<LoginRequest>,
) -> impl Responder {
    let request = data.into_inner();
    let worker = auth.clone();

    // bcrypt is slow on purpose; keep it off the async workers.
    let outcome = web::block(move || worker.authenticate(&request))
        .await
        .unwrap_or_else(|err| Err(InternalError::Worker(err.to_string()).into()));

    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(err) => status_for(err),
    };
    HttpResponse::build(status).json(into_response(outcome))
}

#[get("/hello")]
pub async fn hello(claims: web::ReqData<Claims>) -> impl Responder {
    let claims = claims.into_inner();
    HttpResponse::Ok().body(format!(
        "Hello {}! You are authenticated as {}.",
        claims.username, claims.role
    ))
}

/// Mounts the public routes and the bearer-protected `/api` scope.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(login).service(
        web::scope("/api")
            .wrap(HttpAuthentication::bearer(validator))
            .service(hello),
    );
}
