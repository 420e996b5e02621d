use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};

mod api;
mod config;
mod errors;
mod models;
mod services;

use services::{
    blockchain_service::AptosClient,
    clipboard::SessionClipboard,
    connector::WalletConnector,
    notice_service::NoticeBoard,
    wallet_provider::{HttpWalletProvider, WalletProvider},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env().map_err(|e| {
        error!("{}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let resources = AptosClient::new(config.node_url.clone())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    info!(
        "Using {} node {} ({}, explorer {})",
        config.network.name,
        resources.node_url(),
        config.network.symbol,
        config.network.block_explorer
    );

    let provider: Option<Arc<dyn WalletProvider>> = match &config.wallet_bridge_url {
        Some(url) => {
            info!("Using wallet bridge {}", url);
            let provider: Arc<dyn WalletProvider> = Arc::new(
                HttpWalletProvider::new(url.clone())
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
            );
            Some(provider)
        }
        None => {
            warn!("WALLET_BRIDGE_URL is not set, connecting will report a missing wallet");
            None
        }
    };

    let clipboard = Arc::new(SessionClipboard::default());
    let notices = Arc::new(NoticeBoard::default());
    let connector = WalletConnector::new(
        provider,
        Arc::new(resources),
        clipboard.clone(),
        notices.clone(),
    )
    .with_copied_reset(config.copied_reset);

    let connector = web::Data::new(connector);
    let clipboard = web::Data::from(clipboard);
    let notices = web::Data::from(notices);
    let allowed_origins = config.allowed_origins.clone();

    info!("Wallet widget listening on 127.0.0.1:{}", config.port);
    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec![
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                header::ACCEPT,
            ])
            .supports_credentials();
        App::new()
            .app_data(connector.clone())
            .app_data(clipboard.clone())
            .app_data(notices.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind(("127.0.0.1", config.port))?
    .run()
    .await
}
