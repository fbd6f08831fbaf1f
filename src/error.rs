//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the transaction service could not be sent or did not
    /// complete, e.g., the service is down or the connection timed out.
    #[error("could not reach the transaction service: {0}")]
    Network(String),

    /// The transaction service responded with a non-success status code.
    ///
    /// `body` holds the response text for logging on the server.
    #[error("the transaction service responded with status {status}: {body}")]
    RemoteStatus {
        /// The HTTP status code returned by the service.
        status: u16,
        /// The response body as text.
        body: String,
    },

    /// The response body from the transaction service was not the expected JSON.
    #[error("could not decode the response from the transaction service: {0}")]
    Decode(String),

    /// The amount entered for a new transaction is not a number.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The current time could not be formatted as an ISO 8601 timestamp.
    #[error("could not format the transaction timestamp: {0}")]
    InvalidTimestamp(String),

    /// Could not acquire the lock on the transaction store.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::Network(_) | Error::RemoteStatus { .. } | Error::Decode(_) => {
                tracing::error!("Could not sync with the transaction service: {self}");
                InternalServerError {
                    description: "Transaction Service Unavailable",
                    fix: "Could not load your transactions. Check that the transaction \
                        service is running and try again.",
                }
                .into_response()
            }
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert {
                    message: "Invalid amount".to_owned(),
                    details: format!("\"{amount}\" is not a number. Enter an amount like 12.50."),
                },
            ),
            Error::Network(_) => (
                StatusCode::BAD_GATEWAY,
                Alert {
                    message: "Could not reach the transaction service".to_owned(),
                    details: "Check your connection and try again.".to_owned(),
                },
            ),
            Error::RemoteStatus { status: 404, .. } => (
                StatusCode::NOT_FOUND,
                Alert {
                    message: "Transaction not found".to_owned(),
                    details: "The transaction service could not find the transaction. \
                    Try refreshing the page to see if it has already been deleted."
                        .to_owned(),
                },
            ),
            Error::RemoteStatus { status, .. } => (
                StatusCode::BAD_GATEWAY,
                Alert {
                    message: "The transaction service rejected the request".to_owned(),
                    details: format!(
                        "The service responded with status {status}. \
                        Check the server logs for more details."
                    ),
                },
            ),
            Error::Decode(_) => (
                StatusCode::BAD_GATEWAY,
                Alert {
                    message: "Unexpected response".to_owned(),
                    details: "The transaction service sent a response that could not be read."
                        .to_owned(),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert {
                    message: "Something went wrong".to_owned(),
                    details:
                        "An unexpected error occurred, check the server logs for more details."
                            .to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::{
        Error,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    #[tokio::test]
    async fn invalid_amount_alert_is_bad_request() {
        let response = Error::InvalidAmount("abc".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert!(html.html().contains("Invalid amount"));
    }

    #[tokio::test]
    async fn missing_remote_transaction_alert_is_not_found() {
        let response = Error::RemoteStatus {
            status: 404,
            body: String::new(),
        }
        .into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn network_error_alert_is_bad_gateway() {
        let response = Error::Network("connection refused".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
