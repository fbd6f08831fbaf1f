//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for the dashboard page and its content partial
//! - The content partial shared with the transaction endpoints, which respond
//!   with refreshed dashboard content after a change

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::{
        aggregation::{category_breakdown, totals},
        cards::summary_cards_view,
        charts::spending_breakdown_view,
        list::transaction_list_view,
    },
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base},
    internal_server_error::get_internal_server_error_redirect,
    transaction::{
        FormDraft, TRANSACTION_FORM_SELECTOR, Transaction, TransactionStore,
        transaction_form_view,
    },
};

const ECHARTS_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The transactions to summarise.
    pub store: TransactionStore,
    /// Whether to show the mock mode badge.
    pub mock_mode: bool,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            mock_mode: state.mock_mode,
        }
    }
}

/// Display the dashboard page and start fetching the transactions.
///
/// Every page view refetches, so refreshing the page picks up changes made
/// elsewhere and retries a failed load. The page polls for the content until
/// the fetch finishes.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    state.store.spawn_load()?;
    let (transactions, loading) = snapshot(&state.store)?;

    Ok(dashboard_view(
        &transactions,
        loading,
        &FormDraft::default(),
        state.mock_mode,
    )
    .into_response())
}

/// Get the dashboard content without the surrounding page.
///
/// Used by the page to poll for the transactions while they are loading. The
/// poll sends the add form's values as query parameters so the draft survives
/// the swap.
pub async fn get_dashboard_content(
    State(state): State<DashboardState>,
    Query(draft): Query<FormDraft>,
) -> Response {
    match snapshot(&state.store) {
        Ok((transactions, loading)) => {
            dashboard_content(&transactions, loading, &draft).into_response()
        }
        Err(error) => {
            tracing::error!("Could not render dashboard content: {error}");
            get_internal_server_error_redirect()
        }
    }
}

fn snapshot(store: &TransactionStore) -> Result<(Vec<Transaction>, bool), Error> {
    Ok((store.transactions()?, store.is_loading()?))
}

/// Renders the summary cards, the add form, the list and the chart.
///
/// The add form is pre-filled with `draft`. While `loading`, the content
/// replaces itself with a fresh copy from the server every second.
pub(crate) fn dashboard_content(
    transactions: &[Transaction],
    loading: bool,
    draft: &FormDraft,
) -> Markup {
    let totals = totals(transactions);
    let breakdown = category_breakdown(transactions);

    html! {
        @if loading {
            // Polls until the transactions have loaded, the swapped in content
            // carries on polling only if they are still loading.
            div
                hx-get=(endpoints::DASHBOARD_CONTENT)
                hx-include=(TRANSACTION_FORM_SELECTOR)
                hx-trigger="load delay:1s"
                hx-target="#dashboard-content"
                hx-swap="innerHTML"
                hidden
            {}
        }

        (summary_cards_view(&totals))

        div class="grid grid-cols-1 lg:grid-cols-3 gap-8"
        {
            div class="lg:col-span-1 space-y-8"
            {
                (transaction_form_view(draft))
                (spending_breakdown_view(&breakdown))
            }

            div class="lg:col-span-2"
            {
                (transaction_list_view(transactions, loading))
            }
        }
    }
}

fn header_view(mock_mode: bool) -> Markup {
    html! {
        header class="flex flex-col md:flex-row justify-between items-center gap-4"
        {
            div
            {
                h1 class="text-3xl font-bold text-gray-900 dark:text-white" { "BudgetBuddy" }
                p class="text-gray-500 dark:text-gray-400" { "Track your financial health" }
            }

            @if mock_mode {
                span
                    id="mock-mode-badge"
                    class="px-3 py-1 text-xs font-semibold rounded-full
                        bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300"
                {
                    "Mock Mode"
                }
            }
        }
    }
}

fn dashboard_view(
    transactions: &[Transaction],
    loading: bool,
    draft: &FormDraft,
    mock_mode: bool,
) -> Markup {
    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            (header_view(mock_mode))

            div id="dashboard-content" class="space-y-8"
            {
                (dashboard_content(transactions, loading, draft))
            }
        }
    );

    let scripts = [HeadElement::ScriptLink(ECHARTS_SCRIPT.to_owned())];

    base("Dashboard", &scripts, &content)
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use scraper::{Html, Selector};

    use super::{DashboardState, dashboard_content, get_dashboard_content, get_dashboard_page};
    use crate::{
        remote::{MockApi, seed_transactions},
        test_utils::{assert_valid_html, parse_html_document, parse_html_fragment, wait_for_load},
        transaction::{Category, FormDraft, TransactionStore, TransactionType},
    };

    fn get_test_state(mock_mode: bool, latency: Duration) -> DashboardState {
        DashboardState {
            store: TransactionStore::new(Arc::new(MockApi::new(seed_transactions(), latency))),
            mock_mode,
        }
    }

    fn poller_selector() -> Selector {
        Selector::parse("[hx-get='/api/dashboard'][hx-trigger]").unwrap()
    }

    #[tokio::test]
    async fn dashboard_page_loads_successfully() {
        let state = get_test_state(false, Duration::from_secs(60));

        let response = get_dashboard_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert!(html.html().contains("BudgetBuddy"));
        assert!(html.html().contains("Track your financial health"));
        assert!(
            html.select(&Selector::parse("#dashboard-content").unwrap())
                .next()
                .is_some()
        );
        assert!(
            html.select(&Selector::parse("#mock-mode-badge").unwrap())
                .next()
                .is_none()
        );
    }

    #[tokio::test]
    async fn dashboard_page_refetches_and_polls() {
        let state = get_test_state(false, Duration::from_millis(50));
        state.store.load().await.unwrap();

        let response = get_dashboard_page(State(state.clone())).await.unwrap();

        assert_eq!(state.store.is_loading(), Ok(true));
        let html = parse_html_document(response).await;
        assert!(html.select(&poller_selector()).next().is_some());
        assert!(html.html().contains("Loading data..."));
        wait_for_load(&state.store).await;
    }

    #[tokio::test]
    async fn dashboard_page_fetches_transactions() {
        let state = get_test_state(false, Duration::ZERO);

        get_dashboard_page(State(state.clone())).await.unwrap();
        wait_for_load(&state.store).await;

        assert_eq!(state.store.transactions(), Ok(seed_transactions()));
    }

    #[tokio::test]
    async fn shows_mock_mode_badge() {
        let state = get_test_state(true, Duration::from_secs(60));

        let response = get_dashboard_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        let badge = html
            .select(&Selector::parse("#mock-mode-badge").unwrap())
            .next()
            .expect("No mock mode badge found");
        assert_eq!(badge.text().collect::<String>().trim(), "Mock Mode");
    }

    #[tokio::test]
    async fn content_polls_while_loading() {
        let state = get_test_state(false, Duration::ZERO);

        let response = get_dashboard_content(State(state), Query(FormDraft::default())).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let poller = html
            .select(&poller_selector())
            .next()
            .expect("No poller found");
        assert_eq!(poller.value().attr("hx-include"), Some("#transaction-form"));
        assert!(html.html().contains("Loading data..."));
    }

    #[tokio::test]
    async fn content_stops_polling_once_loaded() {
        let state = get_test_state(false, Duration::ZERO);
        state.store.load().await.unwrap();

        let response = get_dashboard_content(State(state), Query(FormDraft::default())).await;

        let html = parse_html_fragment(response).await;
        assert!(html.select(&poller_selector()).next().is_none());
        assert!(html.html().contains("Grocery Run"));
        assert!(html.html().contains("$1,114.50"));
    }

    #[tokio::test]
    async fn content_keeps_draft_sent_by_poll() {
        let state = get_test_state(false, Duration::ZERO);
        let draft = FormDraft {
            description: "Paycheck".to_owned(),
            amount: "25".to_owned(),
            type_: TransactionType::Income,
            category: Category::Salary,
        };

        let response = get_dashboard_content(State(state), Query(draft)).await;

        let html = parse_html_fragment(response).await;
        let description = html
            .select(&Selector::parse("input[name=description]").unwrap())
            .next()
            .expect("No description input found");
        assert_eq!(description.value().attr("value"), Some("Paycheck"));
        let selected_type = html
            .select(&Selector::parse("select[name=type] option[selected]").unwrap())
            .next()
            .expect("No selected type found");
        assert_eq!(selected_type.value().attr("value"), Some("income"));
    }

    #[test]
    fn content_has_form_list_cards_and_chart() {
        let html = Html::parse_fragment(
            &dashboard_content(&seed_transactions(), false, &FormDraft::default()).into_string(),
        );

        assert!(
            html.select(&Selector::parse("form").unwrap())
                .next()
                .is_some()
        );
        assert!(
            html.select(&Selector::parse("#summary-cards").unwrap())
                .next()
                .is_some()
        );
        assert!(
            html.select(&Selector::parse("#transaction-list").unwrap())
                .next()
                .is_some()
        );
        assert!(
            html.select(&Selector::parse("#spending-breakdown-chart").unwrap())
                .next()
                .is_some()
        );
    }
}
