//! HTTP transport: maps paths onto [`Route`]s and service replies onto responses.

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use tracing::{error, info};

use crate::config::Config;
use crate::request::Route;
use crate::service::{self, Reply, ServiceSettings, StatusClass};

impl From<StatusClass> for StatusCode {
    fn from(class: StatusClass) -> Self {
        match class {
            StatusClass::Success => StatusCode::OK,
            StatusClass::ClientError => StatusCode::BAD_REQUEST,
            StatusClass::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn respond(reply: Reply) -> HttpResponse {
    HttpResponse::build(reply.status.into())
        .content_type(reply.content_type)
        .body(reply.body)
}

/// Run the core on a blocking thread so sorting never stalls the async workers.
async fn dispatch(route: Route, body: String, settings: web::Data<ServiceSettings>) -> HttpResponse {
    info!(?route, bytes = body.len(), "request received");

    let settings = **settings;
    match web::block(move || service::handle(route, &body, &settings)).await {
        Ok(reply) => {
            info!(?route, status = ?reply.status, "response sent");
            respond(reply)
        }
        Err(e) => {
            error!(?route, error = %e, "request handler failed");
            respond(Reply::server_error("Internal server error"))
        }
    }
}

async fn sort(body: String, settings: web::Data<ServiceSettings>) -> HttpResponse {
    dispatch(Route::BenchmarkColumn, body, settings).await
}

async fn column(body: String, settings: web::Data<ServiceSettings>) -> HttpResponse {
    dispatch(Route::ExtractColumn, body, settings).await
}

async fn sort_values(body: String, settings: web::Data<ServiceSettings>) -> HttpResponse {
    dispatch(Route::SortValues, body, settings).await
}

async fn status() -> HttpResponse {
    respond(service::handle(Route::Status, "", &ServiceSettings::default()))
}

/// Register routes, shared state and limits on an actix `App`.
pub fn configure(
    settings: ServiceSettings,
    max_body_bytes: usize,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(settings))
            .app_data(web::PayloadConfig::new(max_body_bytes))
            .route("/sort", web::post().to(sort))
            .route("/column", web::post().to(column))
            .route("/sort-values", web::post().to(sort_values))
            .default_service(web::to(status));
    }
}

/// Bind and start the server. The returned future runs until shutdown.
pub fn run(config: &Config) -> std::io::Result<Server> {
    let settings = config.service_settings();
    let max_body_bytes = config.max_body_bytes;

    let mut server = HttpServer::new(move || {
        let cors = Cors::permissive();
        App::new()
            .wrap(cors)
            .configure(configure(settings, max_body_bytes))
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind(config.bind_address())?.run();
    info!("Server running on http://{}:{}", config.host, config.port);
    Ok(server)
}
