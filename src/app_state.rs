//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::{remote::TransactionApi, transaction::TransactionStore};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The transactions shown on the dashboard.
    pub store: TransactionStore,

    /// Whether the transactions come from the in-memory mock rather than a
    /// live transaction service.
    pub mock_mode: bool,
}

impl AppState {
    /// Create a new [AppState] whose store is backed by `api`.
    ///
    /// The store starts empty and loading. Call [TransactionStore::load] to
    /// fetch the transactions.
    pub fn new(api: Arc<dyn TransactionApi>, mock_mode: bool) -> Self {
        Self {
            store: TransactionStore::new(api),
            mock_mode,
        }
    }
}
