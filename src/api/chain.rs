use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, ChainResponse, ValidateResponse};

/// Get the full blockchain.
#[get("/chain")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let blockchain = state.ledger.chain();
    HttpResponse::Ok().json(ChainResponse {
        length: blockchain.len(),
        blockchain,
    })
}

/// Validate the whole chain.
#[get("/chain/validate")]
pub async fn validate_chain(state: web::Data<AppState>) -> impl Responder {
    let (valid, length) = state.ledger.validate();
    HttpResponse::Ok().json(ValidateResponse { valid, length })
}
