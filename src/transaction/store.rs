//! The in-memory list of transactions, kept in sync with the transaction service.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Error,
    remote::TransactionApi,
    transaction::{FormDraft, Transaction, TransactionId, core::now_timestamp},
};

#[derive(Debug)]
struct StoreState {
    /// Most recent first by convention: the service's order, plus local prepends.
    transactions: Vec<Transaction>,
    loading: bool,
}

/// Holds the transactions shown on the dashboard.
///
/// Local state only changes after the transaction service confirms an
/// operation. Each mutating operation returns a snapshot of the resulting
/// list, or the error that left the list unchanged.
///
/// The lock is never held while waiting on the service, so two concurrent
/// calls to [TransactionStore::load] race and whichever finishes last wins.
#[derive(Clone)]
pub struct TransactionStore {
    api: Arc<dyn TransactionApi>,
    state: Arc<Mutex<StoreState>>,
}

impl std::fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl TransactionStore {
    /// Create an empty store backed by `api`.
    ///
    /// The store starts out loading, call [TransactionStore::load] to fetch
    /// the transactions.
    pub fn new(api: Arc<dyn TransactionApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(StoreState {
                transactions: Vec::new(),
                loading: true,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, Error> {
        self.state
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }

    /// A copy of the current transactions.
    pub fn transactions(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.lock()?.transactions.clone())
    }

    /// Whether the transactions are being fetched.
    pub fn is_loading(&self) -> Result<bool, Error> {
        Ok(self.lock()?.loading)
    }

    /// Replace the local transactions with every transaction from the service.
    ///
    /// # Errors
    /// Returns the service's error, in which case the local transactions are
    /// left as they were. Loading stops either way.
    pub async fn load(&self) -> Result<Vec<Transaction>, Error> {
        self.lock()?.loading = true;

        let result = self.api.list().await;

        let mut state = self.lock()?;
        state.loading = false;

        match result {
            Ok(transactions) => {
                tracing::info!("Loaded {} transactions", transactions.len());
                state.transactions = transactions;
                Ok(state.transactions.clone())
            }
            Err(error) => {
                tracing::error!("Could not load transactions: {error}");
                Err(error)
            }
        }
    }

    /// Mark the store as loading and run [TransactionStore::load] in the background.
    ///
    /// The loading flag is set before this returns, so a page rendered
    /// straight afterwards shows the loading state. Load errors are logged by
    /// [TransactionStore::load].
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock is poisoned, in which case
    /// nothing is fetched.
    pub fn spawn_load(&self) -> Result<(), Error> {
        self.lock()?.loading = true;

        let store = self.clone();
        tokio::spawn(async move { store.load().await });

        Ok(())
    }

    /// Save the transaction described by `draft` and add it to the front of the list.
    ///
    /// A draft with an empty description or amount is ignored and `Ok(None)`
    /// is returned. On success `draft` is reset to its defaults.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is not a number, or the
    /// service's error. The list and `draft` are unchanged on error.
    pub async fn create(&self, draft: &mut FormDraft) -> Result<Option<Vec<Transaction>>, Error> {
        if draft.is_blank() {
            tracing::debug!("Ignoring transaction with an empty description or amount");
            return Ok(None);
        }

        let Some(new_transaction) = draft.to_new_transaction(now_timestamp()?)? else {
            return Ok(None);
        };

        let saved = self
            .api
            .create(&new_transaction)
            .await
            .inspect_err(|error| tracing::error!("Could not create transaction: {error}"))?;

        tracing::info!("Created transaction {}", saved.id);

        let mut state = self.lock()?;
        state.transactions.insert(0, saved);
        draft.reset();

        Ok(Some(state.transactions.clone()))
    }

    /// Delete the transaction with the ID `id` from the service, then from the list.
    ///
    /// # Errors
    /// Returns the service's error, in which case the list is unchanged.
    pub async fn remove(&self, id: &TransactionId) -> Result<Vec<Transaction>, Error> {
        self.api
            .delete(id)
            .await
            .inspect_err(|error| tracing::error!("Could not delete transaction {id}: {error}"))?;

        tracing::info!("Deleted transaction {id}");

        let mut state = self.lock()?;
        state
            .transactions
            .retain(|transaction| &transaction.id != id);

        Ok(state.transactions.clone())
    }
}
