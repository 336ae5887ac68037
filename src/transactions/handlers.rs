use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{CreateTransactionRequest, DeleteResponse, SummaryResponse};
use super::repo::Transaction;

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions))
        .route("/transactions/summary", get(get_summary))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", post(create_transaction))
        .route("/transactions/:id", delete(delete_transaction))
}

#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = Transaction::list_by_owner(&state.db, user_id).await?;
    Ok(Json(transactions))
}

#[instrument(skip(state, payload))]
pub async fn create_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    if !payload.amount.is_finite() || payload.amount < 0.0 {
        return Err(ApiError::Validation("Amount must be non-negative".into()));
    }

    let transaction = Transaction::create(&state.db, user_id, payload).await?;

    info!(user_id = %user_id, transaction_id = %transaction.id, "transaction created");
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Idempotent: deleting a missing or foreign id is the same no-op success
/// as a real deletion, so the response never reveals whether the id exists.
#[instrument(skip(state))]
pub async fn delete_transaction(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let removed = Transaction::delete_by_owner(&state.db, user_id, id).await?;
    debug!(user_id = %user_id, transaction_id = %id, removed, "delete transaction");

    Ok(Json(DeleteResponse {
        message: "Transaction deleted".into(),
    }))
}

#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<SummaryResponse>, ApiError> {
    let totals = Transaction::totals_for_owner(&state.db, user_id).await?;
    let expense_by_category = Transaction::expense_by_category(&state.db, user_id).await?;

    Ok(Json(SummaryResponse {
        balance: totals.total_income - totals.total_expense,
        total_income: totals.total_income,
        total_expense: totals.total_expense,
        expense_by_category,
    }))
}
