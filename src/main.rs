//! Resolve one URL on the command line or serve summaries over HTTP.
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use dbpsum::{about::About, config::Config, resource::Summarizer};
use log::{error, info, warn};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct SummaryQuery {
    url: String,
}

#[get("/summary")]
async fn summary(query: web::Query<SummaryQuery>, summarizer: web::Data<Summarizer>) -> impl Responder {
    let url = query.into_inner().url;
    let summarizer: Arc<Summarizer> = summarizer.into_inner();
    match web::block(move || summarizer.get_summary(&url)).await {
        Ok(Ok(resource)) => HttpResponse::Ok().json(resource),
        Ok(Err(e)) => {
            warn!("{e}");
            HttpResponse::BadGateway().content_type("text/plain").body(e.to_string())
        }
        Err(e) => {
            error!("{e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/about")]
async fn about(config: web::Data<Config>) -> impl Responder { HttpResponse::Ok().json(About::new(&config)) }

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        env_logger::init();
        error!("Cannot load configuration: {e}. Check data/config.toml and DBPSUM_* environment variables.");
        std::process::exit(1);
    });
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level)).init();

    let summarizer = Summarizer::new(&config);
    if let Some(url) = std::env::args().nth(1) {
        match summarizer.get_summary(&url) {
            Ok(resource) => println!("{}", serde_json::to_string_pretty(&resource)?),
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    info!("Serving {} summaries on {}:{}", config.endpoint, config.host, config.port);
    let summarizer = web::Data::new(summarizer);
    let address = (config.host.clone(), config.port);
    let config = web::Data::new(config);
    HttpServer::new(move || App::new().app_data(summarizer.clone()).app_data(config.clone()).service(summary).service(about)).bind(address)?.run().await
}
