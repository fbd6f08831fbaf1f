//! The transaction service that owns the authoritative list of transactions.
//!
//! [TransactionApi] is the seam between the store and wherever transactions
//! actually live: a REST backend ([RestApi]) or an in-memory mock ([MockApi]).

mod mock;
mod rest;

use async_trait::async_trait;

pub use mock::{DEFAULT_MOCK_LATENCY, MockApi, seed_transactions};
pub use rest::RestApi;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The operations the transaction service supports.
#[async_trait]
pub trait TransactionApi: Send + Sync {
    /// Get every transaction, in the order the service returns them.
    async fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Save `new_transaction` and return it with its assigned ID.
    async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, Error>;

    /// Delete the transaction with the ID `id`.
    async fn delete(&self, id: &TransactionId) -> Result<(), Error>;
}
