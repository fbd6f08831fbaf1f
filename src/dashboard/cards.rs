//! Summary cards for the balance, income and expense totals.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::Totals,
    html::{format_currency, round_to_cents},
};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-sm \
    border border-gray-100 dark:border-gray-700 flex items-center gap-4";

/// Renders the three summary cards.
pub(super) fn summary_cards_view(totals: &Totals) -> Markup {
    // Red only when the displayed amount is negative, not for float leftovers.
    let balance_style = if round_to_cents(totals.balance) < 0.0 {
        "text-2xl font-bold text-red-500"
    } else {
        "text-2xl font-bold text-gray-800 dark:text-white"
    };

    html! {
        section id="summary-cards" class="grid grid-cols-1 md:grid-cols-3 gap-6"
        {
            (card(
                "Total Balance",
                "balance",
                &format_currency(totals.balance),
                balance_style,
                "bg-indigo-100 text-indigo-600 dark:bg-indigo-900 dark:text-indigo-300",
                "$",
            ))
            (card(
                "Total Income",
                "income",
                &format_currency(totals.income),
                "text-2xl font-bold text-green-600 dark:text-green-400",
                "bg-green-100 text-green-600 dark:bg-green-900 dark:text-green-300",
                "↑",
            ))
            (card(
                "Total Expenses",
                "expenses",
                &format_currency(totals.expenses),
                "text-2xl font-bold text-red-600 dark:text-red-400",
                "bg-red-100 text-red-600 dark:bg-red-900 dark:text-red-300",
                "↓",
            ))
        }
    }
}

fn card(
    title: &str,
    name: &str,
    amount: &str,
    amount_style: &str,
    icon_style: &str,
    icon: &str,
) -> Markup {
    html! {
        div class=(CARD_STYLE) data-card=(name)
        {
            div class={ "p-3 rounded-full text-xl font-bold " (icon_style) } aria-hidden="true"
            {
                (icon)
            }

            div
            {
                p class="text-sm text-gray-500 dark:text-gray-400 font-medium" { (title) }
                p class=(amount_style) data-amount { (amount) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{ElementRef, Html, Selector};

    use super::summary_cards_view;
    use crate::{
        dashboard::aggregation::{Totals, totals},
        transaction::{Category, Transaction, TransactionId, TransactionType},
    };

    fn get_card<'a>(html: &'a Html, name: &str) -> ElementRef<'a> {
        let selector = Selector::parse(&format!("[data-card={name}]")).unwrap();
        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("No card found for {name}"))
    }

    fn get_amount(card: &ElementRef<'_>) -> String {
        let selector = Selector::parse("[data-amount]").unwrap();
        card.select(&selector)
            .next()
            .expect("No amount found")
            .text()
            .collect::<String>()
    }

    #[test]
    fn shows_formatted_totals() {
        let totals = Totals {
            income: 1200.0,
            expenses: 85.5,
            balance: 1114.5,
        };

        let html = Html::parse_fragment(&summary_cards_view(&totals).into_string());

        assert_eq!(get_amount(&get_card(&html, "balance")), "$1,114.50");
        assert_eq!(get_amount(&get_card(&html, "income")), "$1,200.00");
        assert_eq!(get_amount(&get_card(&html, "expenses")), "$85.50");
        assert!(html.html().contains("Total Balance"));
        assert!(html.html().contains("Total Income"));
        assert!(html.html().contains("Total Expenses"));
    }

    #[test]
    fn negative_balance_is_red() {
        let totals = Totals {
            income: 10.0,
            expenses: 25.0,
            balance: -15.0,
        };

        let html = Html::parse_fragment(&summary_cards_view(&totals).into_string());
        let card = get_card(&html, "balance");
        let amount = card
            .select(&Selector::parse("[data-amount]").unwrap())
            .next()
            .unwrap();

        assert_eq!(get_amount(&card), "-$15.00");
        assert!(
            amount
                .value()
                .attr("class")
                .unwrap_or_default()
                .contains("text-red-500")
        );
    }

    #[test]
    fn positive_balance_is_not_red() {
        let html = Html::parse_fragment(&summary_cards_view(&Totals::default()).into_string());
        let card = get_card(&html, "balance");
        let amount = card
            .select(&Selector::parse("[data-amount]").unwrap())
            .next()
            .unwrap();

        assert!(
            !amount
                .value()
                .attr("class")
                .unwrap_or_default()
                .contains("text-red")
        );
    }

    #[test]
    fn float_leftover_balance_is_zero_and_not_red() {
        let transactions = [
            ("Refund", 0.3, TransactionType::Income),
            ("Gum", 0.1, TransactionType::Expense),
            ("Mints", 0.2, TransactionType::Expense),
        ]
        .map(|(description, amount, type_)| Transaction {
            id: TransactionId::new(description),
            description: description.to_owned(),
            amount,
            type_,
            category: Category::Other,
            date: "2025-10-26".to_owned(),
        });

        let html = Html::parse_fragment(&summary_cards_view(&totals(&transactions)).into_string());
        let card = get_card(&html, "balance");
        let amount = card
            .select(&Selector::parse("[data-amount]").unwrap())
            .next()
            .unwrap();

        assert_eq!(get_amount(&card), "$0.00");
        assert!(
            !amount
                .value()
                .attr("class")
                .unwrap_or_default()
                .contains("text-red")
        );
    }
}
