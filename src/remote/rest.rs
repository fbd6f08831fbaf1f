//! A client for a REST collection of transactions.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response, Url};
use serde::de::DeserializeOwned;

use crate::{
    Error,
    remote::TransactionApi,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Talks to a REST collection of transactions, e.g. `https://example.com/api/transactions`.
///
/// - `GET {url}` lists the transactions.
/// - `POST {url}` creates a transaction and responds with it, including its `_id`.
/// - `DELETE {url}/{id}` deletes a transaction.
#[derive(Debug, Clone)]
pub struct RestApi {
    http_client: HttpClient,
    collection_url: Url,
}

impl RestApi {
    /// Create a client for the collection at `collection_url`.
    ///
    /// Requests never time out unless `timeout` is set.
    ///
    /// # Errors
    /// Returns [Error::Network] if `collection_url` is not an HTTP(S) style URL
    /// or the HTTP client cannot be built, e.g. the TLS backend could not be
    /// initialised.
    pub fn new(collection_url: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let collection_url = Url::parse(collection_url.trim_end_matches('/'))
            .map_err(|error| Error::Network(format!("invalid URL {collection_url:?}: {error}")))?;

        if collection_url.cannot_be_a_base() {
            return Err(Error::Network(format!(
                "{collection_url} cannot have transaction IDs appended"
            )));
        }

        let mut builder = HttpClient::builder();

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|error| Error::Network(format!("could not build HTTP client: {error}")))?;

        Ok(Self {
            http_client,
            collection_url,
        })
    }

    /// The collection URL with `id` appended as a single, escaped path segment.
    fn transaction_url(&self, id: &TransactionId) -> Result<Url, Error> {
        let mut url = self.collection_url.clone();

        url.path_segments_mut()
            .map_err(|_| {
                Error::Network(format!(
                    "{} cannot have transaction IDs appended",
                    self.collection_url
                ))
            })?
            .pop_if_empty()
            .push(id.as_str());

        Ok(url)
    }
}

#[async_trait]
impl TransactionApi for RestApi {
    async fn list(&self) -> Result<Vec<Transaction>, Error> {
        tracing::debug!("GET {}", self.collection_url);

        let response = self
            .http_client
            .get(self.collection_url.clone())
            .send()
            .await
            .map_err(network_error)?;

        decode_json(response).await
    }

    async fn create(&self, new_transaction: &NewTransaction) -> Result<Transaction, Error> {
        tracing::debug!("POST {}", self.collection_url);

        let response = self
            .http_client
            .post(self.collection_url.clone())
            .json(new_transaction)
            .send()
            .await
            .map_err(network_error)?;

        decode_json(response).await
    }

    async fn delete(&self, id: &TransactionId) -> Result<(), Error> {
        let url = self.transaction_url(id)?;
        tracing::debug!("DELETE {url}");

        let response = self
            .http_client
            .delete(url)
            .send()
            .await
            .map_err(network_error)?;

        check_status(response).await.map(|_| ())
    }
}

fn network_error(error: reqwest::Error) -> Error {
    Error::Network(error.to_string())
}

/// Turn a non-success response into [Error::RemoteStatus].
async fn check_status(response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::warn!("Transaction service responded with {status}: {body}");

    Err(Error::RemoteStatus {
        status: status.as_u16(),
        body,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let response = check_status(response).await?;
    let body = response.text().await.map_err(network_error)?;

    serde_json::from_str(&body).map_err(|error| Error::Decode(error.to_string()))
}
