//! The draft behind the add transaction form and the form's markup.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_TEXT_INPUT_STYLE, PANEL_STYLE, PANEL_TITLE_STYLE},
    transaction::core::{Category, NewTransaction, TransactionType},
};

/// Selects the add transaction form.
///
/// Requests that replace the form, other than its own submit, send the form's
/// values with `hx-include` so the re-rendered form keeps the draft.
pub(crate) const TRANSACTION_FORM_SELECTOR: &str = "#transaction-form";

/// The values entered into the add transaction form.
///
/// The amount is kept as the raw text the user typed so that a failed submit
/// can be shown again exactly as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDraft {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The amount as entered, e.g. "12.50".
    #[serde(default)]
    pub amount: String,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type", default)]
    pub type_: TransactionType,
    /// The category to file the transaction under.
    #[serde(default)]
    pub category: Category,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            type_: TransactionType::Expense,
            category: Category::Food,
        }
    }
}

impl FormDraft {
    /// Whether the description or amount has been left empty.
    ///
    /// Submitting a blank draft does nothing.
    pub fn is_blank(&self) -> bool {
        self.description.is_empty() || self.amount.is_empty()
    }

    /// Clear the draft back to the form's defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the transaction to send to the transaction service, stamped with `date`.
    ///
    /// Returns `Ok(None)` for a blank draft.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] if the amount is not a finite number.
    /// Zero and negative amounts are accepted.
    pub fn to_new_transaction(&self, date: String) -> Result<Option<NewTransaction>, Error> {
        if self.is_blank() {
            return Ok(None);
        }

        let amount = parse_amount(&self.amount)?;

        Ok(Some(NewTransaction {
            description: self.description.clone(),
            amount,
            type_: self.type_,
            category: self.category,
            date,
        }))
    }
}

fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

/// Renders the add transaction form pre-filled with `draft`.
pub fn transaction_form_view(draft: &FormDraft) -> Markup {
    html! {
        div class=(PANEL_STYLE)
        {
            h3 class=(PANEL_TITLE_STYLE) { "Add Transaction" }

            form
                id="transaction-form"
                hx-post=(endpoints::TRANSACTIONS_API)
                hx-target="#dashboard-content"
                hx-target-error="#alert-container"
                hx-swap="innerHTML"
                class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                div class="md:col-span-2"
                {
                    input
                        type="text"
                        name="description"
                        id="description"
                        aria-label="Description"
                        placeholder="Description (e.g. Rent, Coffee)"
                        value=(draft.description)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    input
                        type="number"
                        name="amount"
                        id="amount"
                        aria-label="Amount"
                        step="any"
                        placeholder="Amount"
                        value=(draft.amount)
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    select
                        name="type"
                        id="type"
                        aria-label="Transaction type"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for type_ in [TransactionType::Expense, TransactionType::Income] {
                            option value=(type_.as_str()) selected[type_ == draft.type_]
                            {
                                (type_.label())
                            }
                        }
                    }
                }

                div class="md:col-span-2"
                {
                    select
                        name="category"
                        id="category"
                        aria-label="Category"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in Category::ALL {
                            option value=(category.as_str()) selected[category == draft.category]
                            {
                                (category.label())
                            }
                        }
                    }
                }

                div class="md:col-span-2"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE)
                    {
                        "+ Add Transaction"
                    }
                }
            }
        }
    }
}
