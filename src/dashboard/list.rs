//! The "Recent Transactions" list.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, PANEL_STYLE, PANEL_TITLE_STYLE, format_currency},
    transaction::{TRANSACTION_FORM_SELECTOR, Transaction, TransactionType},
};

/// Renders the list of transactions, most recent first.
///
/// While `loading`, a loading message is shown in place of the rows.
pub(super) fn transaction_list_view(transactions: &[Transaction], loading: bool) -> Markup {
    html! {
        div class=(PANEL_STYLE)
        {
            h3 class=(PANEL_TITLE_STYLE) { "Recent Transactions" }

            @if loading {
                p class="text-gray-500 dark:text-gray-400" { "Loading data..." }
            } @else if transactions.is_empty() {
                p class="text-gray-500 dark:text-gray-400" { "No transactions yet." }
            } @else {
                ul id="transaction-list" class="space-y-3 max-h-96 overflow-y-auto"
                {
                    @for transaction in transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    }
}

fn transaction_row(transaction: &Transaction) -> Markup {
    let delete_url = format_endpoint(endpoints::TRANSACTION, transaction.id.as_str());
    let (sign, amount_style) = match transaction.type_ {
        TransactionType::Income => ("+", "font-bold text-green-600 dark:text-green-400"),
        TransactionType::Expense => ("-", "font-bold text-red-600 dark:text-red-400"),
    };
    // The sign comes from the type, so the amount is always shown as a magnitude.
    let amount = format_currency(transaction.amount.abs());
    let amount = format!("{sign}{amount}");

    html! {
        li
            data-transaction-id=(transaction.id)
            class="flex justify-between items-center p-3 rounded-xl bg-gray-50 dark:bg-gray-700"
        {
            div
            {
                p class="font-semibold" { (transaction.description) }
                p class="text-xs text-gray-500 dark:text-gray-400"
                {
                    (transaction.category) " • " (display_date(transaction))
                }
            }

            div class="flex items-center gap-3"
            {
                span class=(amount_style) data-amount { (amount) }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-include=(TRANSACTION_FORM_SELECTOR)
                    hx-target="#dashboard-content"
                    hx-target-error="#alert-container"
                    hx-swap="innerHTML"
                    aria-label={ "Delete " (transaction.description) }
                    class=(BUTTON_DELETE_STYLE)
                {
                    "🗑"
                }
            }
        }
    }
}

/// The calendar date, or the raw date text if it cannot be parsed.
fn display_date(transaction: &Transaction) -> String {
    transaction
        .calendar_date()
        .map(|date| date.to_string())
        .unwrap_or_else(|| transaction.date.clone())
}
