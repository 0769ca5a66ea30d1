use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info};

use super::models::{AppState, NewTxResponse, PendingResponse};
use crate::transaction::Transaction;

/// Submit a new transaction into the pending pool. No signature or balance
/// checks; a body that fails to decode is answered with 400.
#[post("/transaction/new")]
pub async fn new_transaction(
    state: web::Data<AppState>,
    body: web::Json<Transaction>,
) -> impl Responder {
    let tx = body.into_inner();
    debug!(
        "POST /transaction/new - {} -> {} ({})",
        tx.sender, tx.recipient, tx.amount
    );

    let blockid = state.ledger.new_transaction(tx);
    info!("POST /transaction/new - queued for block #{}", blockid);

    HttpResponse::Ok().json(NewTxResponse { blockid })
}

/// List the transactions waiting for the next block.
#[get("/transactions/pending")]
pub async fn get_pending(state: web::Data<AppState>) -> impl Responder {
    let transactions = state.ledger.pending_transactions();
    HttpResponse::Ok().json(PendingResponse {
        size: transactions.len(),
        transactions,
    })
}
