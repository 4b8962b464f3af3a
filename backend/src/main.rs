mod assets;
mod config;

use crate::config::ServerConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::load().map_err(std::io::Error::other)?;
    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.as_str()));

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("could not open a browser at {}: {}", url, err);
            }
        });
    }

    info!("SIAP LAPOR running at {}", url);

    HttpServer::new(|| App::new().default_service(web::route().to(assets::serve_embedded)))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
