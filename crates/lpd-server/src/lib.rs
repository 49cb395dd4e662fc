//! Launcher Backend Server
//!
//! Serves account endpoints and launcher content documents from a single
//! actix-web app.
//!
//! ## Submodules
//!
//! - [`content`] — Version/news/mods/server-status documents, admin
//!   updates, and raw file downloads
//!
//! Account routes come from `lpd-auth`; this crate only wires them in.

pub mod content;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use lpd_auth::Directory;
use lpd_auth::Issuer;
use lpd_content::Library;

/// Shared secret guarding the admin mutation endpoint.
/// Independent of the token-signing secret; absent means disabled.
pub struct Admin(pub Option<String>);

impl Admin {
    pub fn from_env() -> Self {
        match std::env::var("ADMIN_SECRET") {
            Ok(secret) => Self(Some(secret)),
            Err(_) => {
                log::warn!("ADMIN_SECRET not set, admin endpoint disabled");
                Self(None)
            }
        }
    }
    /// An absent secret never matches anything.
    pub fn permits(&self, presented: Option<&str>) -> bool {
        match (&self.0, presented) {
            (Some(expected), Some(presented)) => expected == presented,
            _ => false,
        }
    }
}

async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "launcher api online",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health(directory: web::Data<Directory>) -> impl Responder {
    match directory
        .ping()
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("store unavailable"),
    }
}

/// Route table, shared between the server and the test harness.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(health))
        .route("/version", web::get().to(content::handlers::version))
        .route("/news", web::get().to(content::handlers::news))
        .route("/mods", web::get().to(content::handlers::mods))
        .route("/server_status", web::get().to(content::handlers::server_status))
        .route("/register", web::post().to(lpd_auth::register))
        .route("/login", web::post().to(lpd_auth::login))
        .route("/logout", web::post().to(lpd_auth::logout))
        .route("/me", web::get().to(lpd_auth::me))
        .route("/admin/update_server", web::post().to(content::handlers::update_server))
        .route("/data/{filename}", web::get().to(content::handlers::download));
}

#[rustfmt::skip]
pub async fn run() -> anyhow::Result<()> {
    let directory = web::Data::new(match std::env::var("DB_URL") {
        Ok(ref url) => Directory::durable(lpd_auth::db(url).await?),
        Err(_) => {
            log::warn!("DB_URL not set, holding accounts in process memory");
            Directory::memory()
        }
    });
    let issuer = web::Data::new(Issuer::from_env());
    let admin = web::Data::new(Admin::from_env());
    let library = web::Data::new(Library::new(
        std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
    )?);
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);
    log::info!("starting launcher backend on port {}", port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(directory.clone())
            .app_data(issuer.clone())
            .app_data(admin.clone())
            .app_data(library.clone())
            .configure(routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use lpd_auth::Sessions;
    use serde_json::Value;
    use serde_json::json;

    struct Fixture {
        directory: web::Data<Directory>,
        issuer: web::Data<Issuer>,
        admin: web::Data<Admin>,
        library: web::Data<Library>,
        // holds the data directory alive for the test's duration
        _dir: tempfile::TempDir,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        Fixture {
            directory: web::Data::new(Directory::memory()),
            issuer: web::Data::new(Issuer::Opaque(Sessions::default())),
            admin: web::Data::new(Admin(Some("hunter2".to_string()))),
            library: web::Data::new(Library::new(dir.path()).unwrap()),
            _dir: dir,
        }
    }

    macro_rules! app {
        ($fixture:expr) => {
            test::init_service(
                App::new()
                    .app_data($fixture.directory.clone())
                    .app_data($fixture.issuer.clone())
                    .app_data($fixture.admin.clone())
                    .app_data($fixture.library.clone())
                    .configure(routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn register_login_me_logout_flow() {
        let fixture = fixture();
        let app = app!(fixture);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "alice", "password": "pw123" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["username"], "alice");
        assert!(!body["token"].as_str().unwrap().is_empty());

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "username": "alice", "password": "pw123" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        let token = body["token"].as_str().unwrap().to_string();

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["username"], "alice");

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "username": "alice", "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let req = test::TestRequest::post()
            .uri("/logout")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        // logout is idempotent, a dead token still gets a 200
        let req = test::TestRequest::post()
            .uri("/logout")
            .set_json(json!({ "token": token }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn registration_rejects_bad_input() {
        let fixture = fixture();
        let app = app!(fixture);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "bob", "password": "pw123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "bob", "password": "other" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "   ", "password": "pw123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "carol", "password": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        // malformed bodies read as empty objects, not parse errors
        let req = test::TestRequest::post()
            .uri("/register")
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn me_accepts_token_query_param() {
        let fixture = fixture();
        let app = app!(fixture);

        let req = test::TestRequest::post()
            .uri("/register")
            .set_json(json!({ "username": "carol", "password": "pw123" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let token = body["token"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/me?token={}", token))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["username"], "carol");

        let req = test::TestRequest::get().uri("/me").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn admin_update_requires_secret_and_merges() {
        let fixture = fixture();
        let app = app!(fixture);

        let req = test::TestRequest::post()
            .uri("/admin/update_server")
            .set_json(json!({ "players_online": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let req = test::TestRequest::post()
            .uri("/admin/update_server")
            .insert_header(("X-ADMIN-SECRET", "hunter2"))
            .set_json(json!({ "players_online": 5 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["server"]["players_online"], 5);
        assert_eq!(body["server"]["name"], "My SAMP Server");

        let req = test::TestRequest::get().uri("/server_status").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["players_online"], 5);

        let req = test::TestRequest::post()
            .uri("/admin/update_server?secret=hunter2")
            .set_json(json!({ "players_online": 6 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn content_endpoints_serve_seeded_defaults() {
        let fixture = fixture();
        let app = app!(fixture);

        let req = test::TestRequest::get().uri("/news").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["news"][0]["title"], "Welcome");

        let req = test::TestRequest::get().uri("/version").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["latest_version"], "1.0.0");

        let req = test::TestRequest::get().uri("/mods").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["mods"][0]["name"], "Example Mod");

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "launcher api online");

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn data_downloads_are_attachments_and_jailed() {
        let fixture = fixture();
        let app = app!(fixture);

        let req = test::TestRequest::get().uri("/data/news.json").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let disposition = resp
            .headers()
            .get("Content-Disposition")
            .and_then(|h| h.to_str().ok())
            .unwrap();
        assert!(disposition.starts_with("attachment"));

        let req = test::TestRequest::get().uri("/data/absent.zip").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::get()
            .uri("/data/..%2Fnews.json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn admin_disabled_when_secret_unset() {
        let fixture = fixture();
        let app = test::init_service(
            App::new()
                .app_data(fixture.directory.clone())
                .app_data(fixture.issuer.clone())
                .app_data(web::Data::new(Admin(None)))
                .app_data(fixture.library.clone())
                .configure(routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/update_server")
            .insert_header(("X-ADMIN-SECRET", ""))
            .set_json(json!({ "players_online": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
