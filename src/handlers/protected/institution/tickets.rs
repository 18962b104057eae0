use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::app::AppState;
use crate::middleware::{Acknowledgement, ApiResponse, ApiResult, InstitutionScope};
use crate::models::Ticket;
use crate::services::ticket_service::{NewTicket, TicketUpdate};

/// GET /api/institutions/:institution_id/tickets - Newest first
pub async fn tickets_get(State(state): State<AppState>, scope: InstitutionScope) -> ApiResult<Vec<Ticket>> {
    let tickets = state.tickets.list(&scope.institution_id).await?;
    Ok(ApiResponse::success(tickets))
}

/// POST /api/institutions/:institution_id/tickets
///
/// Expected Input:
/// ```json
/// { "name": "Adult Admission", "price": 12, "description": "General admission for one adult" }
/// ```
pub async fn tickets_post(
    State(state): State<AppState>,
    scope: InstitutionScope,
    payload: Result<Json<NewTicket>, JsonRejection>,
) -> ApiResult<Ticket> {
    let Json(input) = payload?;
    let ticket = state.tickets.create(&scope.institution_id, input).await?;
    Ok(ApiResponse::created(ticket).with_message("Ticket created"))
}

/// PUT /api/institutions/:institution_id/tickets/:ticket_id
pub async fn ticket_put(
    State(state): State<AppState>,
    scope: InstitutionScope,
    Path((_, ticket_id)): Path<(String, String)>,
    payload: Result<Json<TicketUpdate>, JsonRejection>,
) -> ApiResult<Ticket> {
    let Json(update) = payload?;
    let ticket = state.tickets.update(&scope.institution_id, &ticket_id, update).await?;
    Ok(ApiResponse::success(ticket).with_message("Ticket updated"))
}

/// DELETE /api/institutions/:institution_id/tickets/:ticket_id
pub async fn ticket_delete(
    State(state): State<AppState>,
    scope: InstitutionScope,
    Path((_, ticket_id)): Path<(String, String)>,
) -> ApiResult<Acknowledgement> {
    state.tickets.delete(&scope.institution_id, &ticket_id).await?;
    Ok(ApiResponse::success(Acknowledgement::ok()).with_message("Ticket deleted"))
}
