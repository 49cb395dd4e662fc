use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::dev::Payload;
use actix_web::web;
use lpd_core::ID;
use std::future::Future;
use std::pin::Pin;

/// Extractor for authenticated requests.
/// Accepts the token as a bearer header or a `token` query parameter,
/// and validates it against whichever issuer the server runs.
pub struct Auth(pub Passport);

impl Auth {
    pub fn passport(&self) -> &Passport {
        &self.0
    }
    pub fn user(&self) -> ID<Member> {
        self.0.user()
    }
    pub fn username(&self) -> &str {
        self.0.username()
    }
}

/// Token from the Authorization header, if present and well-formed.
pub fn bearer(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_owned())
}

fn query(req: &HttpRequest) -> Option<String> {
    req.query_string()
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .map(|t| t.to_owned())
}

/// All failure modes collapse to one generic unauthorized body.
fn unauthorized() -> actix_web::Error {
    actix_web::error::InternalError::from_response(
        "unauthorized",
        HttpResponse::Unauthorized().json(failure("unauthorized")),
    )
    .into()
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let issuer = req.app_data::<web::Data<Issuer>>().cloned();
        let token = bearer(req).or_else(|| query(req));
        Box::pin(async move {
            let token = token.ok_or_else(unauthorized)?;
            let issuer = issuer.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("token service not configured")
            })?;
            issuer
                .validate(&token)
                .await
                .map(Auth)
                .ok_or_else(unauthorized)
        })
    }
}
