//! Totals and the per-category expense breakdown derived from the transactions.
//!
//! These are recomputed from the store's transactions on every render.

use crate::transaction::{Category, Transaction, TransactionType};

/// The sums shown on the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// The sum of the income transactions.
    pub income: f64,
    /// The sum of the expense transactions.
    pub expenses: f64,
    /// `income - expenses`.
    pub balance: f64,
}

/// The sum of the expenses filed under one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    /// The category the expenses are filed under.
    pub name: Category,
    /// The sum of the expenses.
    pub value: f64,
}

/// Sums income and expenses.
///
/// An empty slice gives zero for every total.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for transaction in transactions {
        match transaction.type_ {
            TransactionType::Income => income += transaction.amount,
            TransactionType::Expense => expenses += transaction.amount,
        }
    }

    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// Sums the expenses for each category.
///
/// Categories appear in the order they are first seen and only if there is
/// at least one expense for them. Income is ignored.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut breakdown: Vec<CategoryTotal> = Vec::new();

    let expenses = transactions
        .iter()
        .filter(|transaction| transaction.type_ == TransactionType::Expense);

    for transaction in expenses {
        match breakdown
            .iter_mut()
            .find(|total| total.name == transaction.category)
        {
            Some(total) => total.value += transaction.amount,
            None => breakdown.push(CategoryTotal {
                name: transaction.category,
                value: transaction.amount,
            }),
        }
    }

    breakdown
}
