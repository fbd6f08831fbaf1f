//! Transaction management for the budgeting application.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its JSON wire format
//! - The `TransactionStore` that mirrors the transaction service
//! - The add transaction form and the endpoints for creating and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod store;

pub use core::{Category, NewTransaction, Transaction, TransactionId, TransactionType};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub(crate) use form::TRANSACTION_FORM_SELECTOR;
pub use form::{FormDraft, transaction_form_view};
pub use store::TransactionStore;
