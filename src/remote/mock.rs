//! An in-memory stand-in for the transaction service, for use without a live backend.

use std::{
    sync::{
        Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use async_trait::async_trait;

use crate::{
    Error,
    remote::TransactionApi,
    transaction::{Category, NewTransaction, Transaction, TransactionId, TransactionType},
};

/// How long [MockApi::list] takes by default, so the loading state is visible.
pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(800);

/// The transactions the mock starts with.
pub fn seed_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: TransactionId::new("1"),
            description: "Freelance Work".to_owned(),
            amount: 1200.0,
            type_: TransactionType::Income,
            category: Category::Salary,
            date: "2023-10-01".to_owned(),
        },
        Transaction {
            id: TransactionId::new("2"),
            description: "Grocery Run".to_owned(),
            amount: 85.5,
            type_: TransactionType::Expense,
            category: Category::Food,
            date: "2023-10-02".to_owned(),
        },
    ]
}

/// Keeps transactions in memory.
///
/// Only [TransactionApi::list] is delayed by the latency. New transactions
/// get an ID made from the current time in milliseconds.
#[derive(Debug)]
pub struct MockApi {
    transactions: Mutex<Vec<Transaction>>,
    latency: Duration,
    last_id: AtomicU64,
}

impl MockApi {
    /// Create a mock holding `transactions` whose list operation takes `latency`.
    pub fn new(transactions: Vec<Transaction>, latency: Duration) -> Self {
        Self {
            transactions: Mutex::new(transactions),
            latency,
            last_id: AtomicU64::new(0),
        }
    }

    /// The current time in milliseconds, bumped if needed so IDs never repeat.
    fn next_id(&self) -> TransactionId {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default();

        let previous = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_ms.max(last + 1))
            })
            .unwrap_or_default();

        TransactionId::new(now_ms.max(previous + 1).to_string())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Transaction>>, Error> {
        self.transactions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire mock lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}

#[async_trait]
impl TransactionApi for MockApi {
    async fn list(&self) -> Result<Vec<Transaction>, Error> {
        tokio::time::sleep(self.latency).await;

        Ok(self.lock()?.clone())
    }

    async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, Error> {
        let transaction = Transaction::from_new(self.next_id(), new_transaction.clone());
        self.lock()?.insert(0, transaction.clone());

        Ok(transaction)
    }

    async fn delete(&self, id: &TransactionId) -> Result<(), Error> {
        self.lock()?.retain(|transaction| &transaction.id != id);

        Ok(())
    }
}
