use std::time::Duration;

use crate::transaction::TransactionStore;

/// Wait for a load started with [TransactionStore::spawn_load] to finish.
pub async fn wait_for_load(store: &TransactionStore) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while store.is_loading().unwrap() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("transactions did not finish loading");
}
