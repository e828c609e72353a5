use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use snafu::ResultExt;
use tracing_actix_web::TracingLogger;

use crate::config;
use crate::config::get_config_element;
use crate::contexts::{Context, InMemoryContext};
use crate::error::{self, Result};
use crate::handlers;
use crate::handlers::ErrorResponse;
use crate::photos::seed;

pub(crate) fn init_routes<C>(cfg: &mut web::ServiceConfig)
where
    C: Context,
{
    handlers::photos::init_photo_routes::<C>(cfg);
    handlers::sessions::init_session_routes::<C>(cfg);
}

pub(crate) fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ErrorResponse {
            error: "BodyDeserializeError".to_string(),
            message: err.to_string(),
        }
        .into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        ErrorResponse {
            error: "UnableToParseQueryString".to_string(),
            message: err.to_string(),
        }
        .into()
    }));
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        ErrorResponse {
            error: "UnableToParsePath".to_string(),
            message: err.to_string(),
        }
        .into()
    }));
}

pub(crate) async fn render_404() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "NotFound".to_string(),
        message: "Requested resource was not found.".to_string(),
    })
}

fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header()
            .max_age(3600),
        None => Cors::permissive(),
    }
}

/// Fills the photo store from the configured seed file. Nothing is seeded
/// when no file is configured.
async fn seed_photos<C: Context>(ctx: &C) -> Result<()> {
    let photos_config: config::Photos = get_config_element()?;

    let Some(seed_file) = photos_config.seed_file else {
        return Ok(());
    };

    let definitions = seed::load_seed_file(&seed_file).await?;
    let count = seed::seed_photo_db(&mut *ctx.photo_db_ref_mut().await, definitions).await?;

    tracing::info!("Seeded {count} photos from {}", seed_file.display());
    Ok(())
}

/// Starts the webserver for the photohunt API.
pub async fn start_server() -> Result<()> {
    let web_config: config::Web = get_config_element()?;

    let ctx = InMemoryContext::default();
    seed_photos(&ctx).await?;

    tracing::info!("Starting server… http://{}/", web_config.bind_address);

    let bind_address = web_config.bind_address;
    let allowed_origin = web_config.allowed_origin;

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .wrap(cors(allowed_origin.as_deref()))
            .wrap(TracingLogger::default())
            .configure(configure_extractors)
            .configure(init_routes::<InMemoryContext>)
            .default_service(web::route().to(render_404))
    })
    .bind(bind_address)
    .context(error::Io)?
    .run()
    .await
    .context(error::Io)
}
