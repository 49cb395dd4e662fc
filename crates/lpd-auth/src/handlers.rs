use super::*;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

pub(crate) fn failure(message: &str) -> serde_json::Value {
    serde_json::json!({ "status": "error", "message": message })
}

pub async fn register(
    directory: web::Data<Directory>,
    issuer: web::Data<Issuer>,
    body: web::Bytes,
) -> impl Responder {
    let req: RegisterRequest = serde_json::from_slice(&body).unwrap_or_default();
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return HttpResponse::BadRequest().json(failure("username and password required"));
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => return HttpResponse::InternalServerError().json(failure(&e.to_string())),
    };
    let member = match directory.register(username, &hashword).await {
        Ok(Some(member)) => member,
        Ok(None) => return HttpResponse::Conflict().json(failure("username already exists")),
        Err(e) => return HttpResponse::InternalServerError().json(failure(&e.to_string())),
    };
    match issuer.issue(&member).await {
        Ok(token) => HttpResponse::Ok().json(AuthResponse {
            status: "ok",
            token,
            username: member.username().to_string(),
        }),
        Err(e) => HttpResponse::InternalServerError().json(failure(&e.to_string())),
    }
}

pub async fn login(
    directory: web::Data<Directory>,
    issuer: web::Data<Issuer>,
    body: web::Bytes,
) -> impl Responder {
    let req: LoginRequest = serde_json::from_slice(&body).unwrap_or_default();
    let username = req.username.trim();
    if username.is_empty() || req.password.is_empty() {
        return HttpResponse::BadRequest().json(failure("username and password required"));
    }
    // unknown user and wrong password collapse to one response,
    // no username enumeration
    let (member, hashword) = match directory.lookup(username).await {
        Ok(Some(row)) => row,
        Ok(None) => return HttpResponse::Unauthorized().json(failure("invalid credentials")),
        Err(e) => return HttpResponse::InternalServerError().json(failure(&e.to_string())),
    };
    if !password::verify(&req.password, &hashword) {
        return HttpResponse::Unauthorized().json(failure("invalid credentials"));
    }
    match issuer.issue(&member).await {
        Ok(token) => HttpResponse::Ok().json(AuthResponse {
            status: "ok",
            token,
            username: member.username().to_string(),
        }),
        Err(e) => HttpResponse::InternalServerError().json(failure(&e.to_string())),
    }
}

/// Always 200: revoking an absent, foreign, or already-revoked token is
/// indistinguishable from a successful logout.
pub async fn logout(
    issuer: web::Data<Issuer>,
    request: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    let req: LogoutRequest = serde_json::from_slice(&body).unwrap_or_default();
    if let Some(token) = req.token.or_else(|| bearer(&request)) {
        issuer.revoke(&token).await;
    }
    HttpResponse::Ok().json(serde_json::json!({ "message": "logged out" }))
}

pub async fn me(auth: Auth) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "username": auth.username() }))
}
