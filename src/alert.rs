//! Alert fragments for displaying error messages to users.
//!
//! Handlers return an alert with an error status code and HTMX swaps it into
//! the page's alert container, leaving the rest of the page as it was.

use maud::{Markup, html};

const ALERT_STYLE: &str = "p-4 mb-4 text-sm rounded-lg border text-red-800 \
    bg-red-50 border-red-300 dark:bg-gray-800 dark:text-red-400 dark:border-red-800";

/// An error message rendered into the page's alert container.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// The headline for the alert.
    pub message: String,
    /// Supporting text, usually how to fix the problem.
    pub details: String,
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        html! {
            div class=(ALERT_STYLE) role="alert"
            {
                div class="flex justify-between items-start gap-4"
                {
                    div
                    {
                        span class="font-medium" { (self.message) }

                        @if !self.details.is_empty() {
                            p class="mt-1" { (self.details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="font-bold"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn alert_shows_message_and_details() {
        let markup = Alert {
            message: "Could not delete transaction".to_owned(),
            details: "Try again later.".to_owned(),
        }
        .into_html()
        .into_string();

        let html = Html::parse_fragment(&markup);
        let alert = html
            .select(&Selector::parse("[role=alert]").unwrap())
            .next()
            .expect("No alert found");
        let text = alert.text().collect::<String>();

        assert!(text.contains("Could not delete transaction"));
        assert!(text.contains("Try again later."));
    }

    #[test]
    fn alert_omits_empty_details() {
        let markup = Alert {
            message: "Something went wrong".to_owned(),
            details: String::new(),
        }
        .into_html()
        .into_string();

        assert!(!markup.contains("<p"));
    }
}
