mod api;
mod blockchain;
mod config;
mod error;
mod node;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;

use api::AppState;
use config::NodeConfig;
use node::NodeId;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let config = NodeConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let node_id = NodeId::generate();

    info!(
        "⛓️ Starting ledger node {} at http://{}:{} (difficulty {})",
        node_id, config.host, config.port, config.difficulty
    );

    let state = web::Data::new(AppState::new(node_id, config.difficulty));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
