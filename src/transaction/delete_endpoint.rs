//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, Query, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    dashboard::dashboard_content,
    transaction::{FormDraft, TransactionId, TransactionStore},
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    store: TransactionStore,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction, responds with the refreshed dashboard content.
///
/// The delete button sends the add form's values as query parameters, the
/// form in the response is filled in with them. On error, responds with an alert.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Query(draft): Query<FormDraft>,
) -> Response {
    let transactions = match state.store.remove(&transaction_id).await {
        Ok(transactions) => transactions,
        Err(error) => return error.into_alert_response(),
    };

    let loading = match state.store.is_loading() {
        Ok(loading) => loading,
        Err(error) => return error.into_alert_response(),
    };

    dashboard_content(&transactions, loading, &draft).into_response()
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::{
        extract::{Path, Query, State},
        http::StatusCode,
    };
    use scraper::Selector;
    use tokio::net::TcpListener;

    use super::{DeleteTransactionState, delete_transaction_endpoint};
    use crate::{
        remote::{MockApi, RestApi, seed_transactions},
        test_utils::parse_html_fragment,
        transaction::{Category, FormDraft, TransactionId, TransactionStore, TransactionType},
    };

    fn get_test_store() -> TransactionStore {
        TransactionStore::new(Arc::new(MockApi::new(seed_transactions(), Duration::ZERO)))
    }

    #[tokio::test]
    async fn deletes_transaction() {
        let store = get_test_store();
        store.load().await.unwrap();
        let state = DeleteTransactionState {
            store: store.clone(),
        };

        let response = delete_transaction_endpoint(
            State(state),
            Path(TransactionId::new("1")),
            Query(FormDraft::default()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let transactions = store.transactions().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].id, TransactionId::new("2"));
        let html = parse_html_fragment(response).await;
        assert!(!html.html().contains("Freelance Work"));
        assert!(html.html().contains("Grocery Run"));
    }

    #[tokio::test]
    async fn unreachable_service_responds_with_alert() {
        // Bind then drop a listener to get a port that nothing is listening on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let api = RestApi::new(&format!("http://{address}/api/transactions"), None).unwrap();
        let state = DeleteTransactionState {
            store: TransactionStore::new(Arc::new(api)),
        };

        let response = delete_transaction_endpoint(
            State(state),
            Path(TransactionId::new("1")),
            Query(FormDraft::default()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn keeps_draft_in_refreshed_form() {
        let store = get_test_store();
        store.load().await.unwrap();
        let state = DeleteTransactionState { store };
        let draft = FormDraft {
            description: "Bus fare".to_owned(),
            amount: "3.2".to_owned(),
            type_: TransactionType::Expense,
            category: Category::Transport,
        };

        let response = delete_transaction_endpoint(
            State(state),
            Path(TransactionId::new("2")),
            Query(draft),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let value_of = |selector: &str| {
            html.select(&Selector::parse(selector).unwrap())
                .next()
                .and_then(|element| element.value().attr("value"))
                .map(str::to_owned)
        };
        assert_eq!(value_of("input[name=description]").as_deref(), Some("Bus fare"));
        assert_eq!(value_of("input[name=amount]").as_deref(), Some("3.2"));
        assert_eq!(
            value_of("select[name=category] option[selected]").as_deref(),
            Some("Transport")
        );
    }
}
