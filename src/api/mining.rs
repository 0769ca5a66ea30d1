use actix_web::{HttpResponse, get, post, web};
use log::{info, warn};

use super::models::{AppState, SubmitBlockRequest};
use crate::error::ApiError;

/// Mine a new block from the pending pool and return it.
/// The proof search runs on the blocking thread pool.
#[get("/mine")]
pub async fn mine(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let ledger_state = state.clone();
    let block = web::block(move || ledger_state.ledger.mine()).await?;
    info!(
        "GET /mine - block #{} sealed with {} txs",
        block.index,
        block.transactions.len()
    );
    Ok(HttpResponse::Ok().json(block))
}

/// Append a block whose proof was found elsewhere. Rejected with 409 when
/// `prevblockhash` is not the current tip or the proof does not satisfy the
/// work predicate.
#[post("/mine/submit")]
pub async fn submit_block(
    state: web::Data<AppState>,
    req: web::Json<SubmitBlockRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    match state.ledger.commit_block(req.proof, req.prev_block_hash) {
        Ok(block) => {
            info!("POST /mine/submit - accepted block #{}", block.index);
            Ok(HttpResponse::Ok().json(block))
        }
        Err(err) => {
            warn!(
                "POST /mine/submit - rejected against tip #{}: {}",
                state.ledger.last_block().index,
                err
            );
            Err(err.into())
        }
    }
}
