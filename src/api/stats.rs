use actix_web::{HttpResponse, Responder, get, web};

use super::models::{AppState, StatsResponse};

#[get("/stats")]
pub async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    let stats = state.ledger.stats();
    HttpResponse::Ok().json(StatsResponse {
        height: stats.height,
        last_block_hash: stats.last_block_hash,
        difficulty: stats.difficulty,
        pending: stats.pending,
        peers: stats.peers,
        node_id: state.ledger.node_id().to_string(),
    })
}
