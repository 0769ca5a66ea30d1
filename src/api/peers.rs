use actix_web::{HttpResponse, Responder, get, post, web};
use log::{info, warn};

use super::models::{AppState, PeersResponse, RegisterPeersRequest, RegisterPeersResponse};

/// Register peer addresses. The registry is informational only: nothing
/// in block production consults it.
#[post("/nodes/register")]
pub async fn register_peers(
    state: web::Data<AppState>,
    body: web::Json<RegisterPeersRequest>,
) -> impl Responder {
    if body.nodes.is_empty() {
        warn!("POST /nodes/register - rejected: empty node list");
        return HttpResponse::BadRequest().body("nodes must contain at least one address");
    }

    let added: Vec<String> = body
        .into_inner()
        .nodes
        .into_iter()
        .map(|addr| addr.trim().to_string())
        .filter(|addr| !addr.is_empty())
        .filter(|addr| state.ledger.register_peer(addr.clone()))
        .collect();
    let total_nodes = state.ledger.peers().len();
    info!(
        "POST /nodes/register - {} new peer(s), {} known",
        added.len(),
        total_nodes
    );

    HttpResponse::Ok().json(RegisterPeersResponse { added, total_nodes })
}

#[get("/nodes")]
pub async fn get_peers(state: web::Data<AppState>) -> impl Responder {
    let nodes = state.ledger.peers();
    HttpResponse::Ok().json(PeersResponse {
        total: nodes.len(),
        nodes,
    })
}
