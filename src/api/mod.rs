mod chain;
mod health;
mod mining;
pub mod models;
mod peers;
mod stats;
mod tx;

use actix_web::web::{self, ServiceConfig};
use actix_web::{HttpRequest, HttpResponse, error};
use log::warn;

pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(health::health_check)
        .service(chain::get_chain)
        .service(chain::validate_chain)
        .service(mining::mine)
        .service(mining::submit_block)
        .service(tx::new_transaction)
        .service(tx::get_pending)
        .service(peers::register_peers)
        .service(peers::get_peers)
        .service(stats::get_stats);
}

/// Malformed JSON bodies answer 400 with the decoder's message.
fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> error::Error {
    let message = err.to_string();
    warn!("{} {} - rejected body: {}", req.method(), req.path(), message);
    error::InternalError::from_response(err, HttpResponse::BadRequest().body(message)).into()
}
