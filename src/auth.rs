use crate::models::Claims;
use actix_web::{dev::ServiceRequest, web, Error, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

/// Lifetime of an access token, in seconds.
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Signs and checks HS256 access tokens with a single shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    pub fn create_jwt(&self, username: &str, role: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.create_jwt_at(username, role, chrono::Utc::now().timestamp())
    }

    pub fn create_jwt_at(
        &self,
        username: &str,
        role: &str,
        issued_at: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            username: username.to_owned(),
            role: role.to_owned(),
            iat: issued_at,
            exp: issued_at + TOKEN_TTL_SECONDS,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    pub fn validate_jwt(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

/// Bearer middleware check: the claims of a valid token are attached to the request.
pub async fn validator(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (Error, ServiceRequest)> {
    let Some(issuer) = req.app_data::<web::Data<TokenIssuer>>() else {
        return Err((
            actix_web::error::ErrorInternalServerError("token issuer not configured"),
            req,
        ));
    };

    match issuer.validate_jwt(credentials.token()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(err) => {
            debug!("Rejected bearer token: {err}");
            Err((actix_web::error::ErrorUnauthorized("Invalid token"), req))
        }
    }
}
