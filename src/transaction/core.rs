//! Defines the core data models for transactions and their JSON wire format.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::{
    Date, OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The opaque ID the transaction service assigns to a transaction.
///
/// IDs are trusted to be unique, they are not checked locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an ID string, e.g. one received from the transaction service.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    #[default]
    Expense,
}

impl TransactionType {
    /// The value used on the wire and in HTML forms.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// The label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }
}

/// The category a transaction is filed under.
///
/// Categories are not tied to the transaction type, an expense may be filed
/// under [Category::Salary].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Groceries and eating out.
    #[default]
    Food,
    /// Getting around.
    Transport,
    /// Power, water, internet and so on.
    Utilities,
    /// Fun.
    Entertainment,
    /// Wages and other earnings.
    Salary,
    /// Anything else.
    Other,
}

impl Category {
    /// All categories, in the order they are offered in the form.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Salary,
        Category::Other,
    ];

    /// The value used on the wire and in HTML forms.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }

    /// The longer label shown in the category select.
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food & Dining",
            Category::Transport => "Transportation",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Salary => "Salary",
            Category::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// The amount is always a magnitude; whether it adds to or subtracts from the
/// balance is decided by [Transaction::type_].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID assigned by the transaction service.
    #[serde(rename = "_id")]
    pub id: TransactionId,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned in this transaction.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The category the transaction is filed under.
    pub category: Category,
    /// When the transaction was recorded, as an ISO 8601 string.
    pub date: String,
}

impl Transaction {
    /// Create a transaction from a new transaction and the ID assigned to it.
    pub fn from_new(id: TransactionId, new_transaction: NewTransaction) -> Self {
        Self {
            id,
            description: new_transaction.description,
            amount: new_transaction.amount,
            type_: new_transaction.type_,
            category: new_transaction.category,
            date: new_transaction.date,
        }
    }

    /// The calendar date of the transaction, if [Transaction::date] can be parsed.
    ///
    /// Accepts full RFC 3339 timestamps as well as bare dates like "2023-10-01".
    pub fn calendar_date(&self) -> Option<Date> {
        if let Ok(date_time) = OffsetDateTime::parse(&self.date, &Rfc3339) {
            return Some(date_time.date());
        }

        let date_prefix = self.date.get(..10)?;
        Date::parse(date_prefix, format_description!("[year]-[month]-[day]")).ok()
    }
}

/// The body sent to the transaction service to create a transaction.
///
/// This is a [Transaction] without an ID, the service assigns the ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// A text description of what the transaction was for.
    pub description: String,
    /// The amount of money spent or earned.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The category the transaction is filed under.
    pub category: Category,
    /// When the transaction was recorded, as an ISO 8601 string.
    pub date: String,
}

/// The current time as an RFC 3339 (ISO 8601) timestamp in UTC.
pub fn now_timestamp() -> Result<String, Error> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|error| Error::InvalidTimestamp(error.to_string()))
}
