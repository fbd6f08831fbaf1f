//! Defines the endpoint for creating a new transaction.
use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;

use crate::{
    AppState,
    dashboard::dashboard_content,
    transaction::{FormDraft, TransactionStore},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The store to add the transaction to.
    pub store: TransactionStore,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for creating a new transaction, responds with the refreshed dashboard content.
///
/// The add form in the response is cleared if the transaction was created,
/// and keeps the submitted values if the description or amount was empty.
/// On error, responds with an alert and leaves the form as it was.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(mut draft): Form<FormDraft>,
) -> Response {
    let transactions = match state.store.create(&mut draft).await {
        Ok(Some(transactions)) => transactions,
        Ok(None) => match state.store.transactions() {
            Ok(transactions) => transactions,
            Err(error) => return error.into_alert_response(),
        },
        Err(error) => return error.into_alert_response(),
    };

    let loading = match state.store.is_loading() {
        Ok(loading) => loading,
        Err(error) => return error.into_alert_response(),
    };

    dashboard_content(&transactions, loading, &draft).into_response()
}
