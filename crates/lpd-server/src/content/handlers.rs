use crate::Admin;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use lpd_content::Library;
use lpd_content::Shelf;

fn failure(message: &str) -> serde_json::Value {
    serde_json::json!({ "status": "error", "message": message })
}

pub async fn version(library: web::Data<Library>) -> impl Responder {
    match library.read(Shelf::Version) {
        Some(doc) => HttpResponse::Ok().json(doc),
        None => HttpResponse::NotFound().json(failure("version file not found")),
    }
}

pub async fn news(library: web::Data<Library>) -> impl Responder {
    match library.read(Shelf::News) {
        Some(doc) => HttpResponse::Ok().json(doc),
        None => HttpResponse::Ok().json(serde_json::json!({ "news": [] })),
    }
}

pub async fn mods(library: web::Data<Library>) -> impl Responder {
    match library.read(Shelf::Mods) {
        Some(doc) => HttpResponse::Ok().json(doc),
        None => HttpResponse::Ok().json(serde_json::json!({ "mods": [] })),
    }
}

pub async fn server_status(library: web::Data<Library>) -> impl Responder {
    match library.read(Shelf::Server) {
        Some(doc) => HttpResponse::Ok().json(doc),
        None => HttpResponse::NotFound().json(failure("server info not found")),
    }
}

/// Secret arrives in the X-ADMIN-SECRET header or the `secret` query
/// parameter.
fn secret(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("X-ADMIN-SECRET")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_owned())
        .or_else(|| {
            req.query_string()
                .split('&')
                .find_map(|pair| pair.strip_prefix("secret="))
                .map(|s| s.to_owned())
        })
}

pub async fn update_server(
    admin: web::Data<Admin>,
    library: web::Data<Library>,
    request: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    if !admin.permits(secret(&request).as_deref()) {
        return HttpResponse::Unauthorized().json(failure("unauthorized"));
    }
    let partial: serde_json::Value =
        serde_json::from_slice(&body).unwrap_or_else(|_| serde_json::json!({}));
    match library.merge(Shelf::Server, partial).await {
        Ok(merged) => {
            HttpResponse::Ok().json(serde_json::json!({ "status": "ok", "server": merged }))
        }
        Err(e) => HttpResponse::InternalServerError().json(failure(&e.to_string())),
    }
}

pub async fn download(library: web::Data<Library>, path: web::Path<String>) -> impl Responder {
    match library.resolve(path.as_str()) {
        None => HttpResponse::NotFound().json(failure("file not found")),
        Some(file) => match std::fs::read(&file) {
            Err(e) => {
                log::error!("read {} failed: {}", file.display(), e);
                HttpResponse::NotFound().json(failure("file not found"))
            }
            Ok(bytes) => HttpResponse::Ok()
                .content_type(mime_guess::from_path(&file).first_or_octet_stream())
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", path.as_str()),
                ))
                .body(bytes),
        },
    }
}
