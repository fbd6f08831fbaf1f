//! Shared page layout, style constants and formatting helpers for the HTML views.

use maud::{DOCTYPE, Markup, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "w-full px-4 py-3 bg-indigo-600 \
    hover:bg-indigo-700 disabled:bg-indigo-800 text-white font-bold rounded-xl \
    flex items-center justify-center gap-2 transition";

pub const BUTTON_DELETE_STYLE: &str = "text-gray-400 hover:text-red-500 \
    dark:hover:text-red-400 bg-transparent border-none cursor-pointer transition";

// Form styles
pub const FORM_TEXT_INPUT_STYLE: &str = "w-full p-3 rounded-xl text-gray-900 \
    dark:text-white bg-gray-50 dark:bg-gray-700 border border-gray-200 \
    dark:border-gray-600 focus:outline-none focus:ring-2 focus:ring-indigo-500 transition";

// Panel (white card) style shared by the form, list and chart.
pub const PANEL_STYLE: &str = "bg-white dark:bg-gray-800 p-6 rounded-2xl shadow-sm \
    border border-gray-100 dark:border-gray-700";

pub const PANEL_TITLE_STYLE: &str = "text-lg font-bold text-gray-800 dark:text-white mb-4";

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "max-w-6xl mx-auto p-4 md:p-8 space-y-8 text-gray-800 dark:text-white";

pub const HTMX_SCRIPT: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
pub const HTMX_RESPONSE_TARGETS_SCRIPT: &str =
    "https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.js";
pub const TAILWIND_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Extra elements for a page's head, on top of the scripts every page loads.
pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - BudgetBuddy" }

                script src=(TAILWIND_SCRIPT) {}
                script src=(HTMX_SCRIPT) {}
                script src=(HTMX_RESPONSE_TARGETS_SCRIPT) {}

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="container max-w-full min-h-screen bg-gray-50 dark:bg-gray-900 font-sans"
            {
                (content)

                // Alert container for error swaps
                div
                    id="alert-container"
                    class="w-full max-w-md px-4"
                    style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
                {}
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    // Template adapted from https://flowbite.com/blocks/marketing/404/
    let content = html!(
        section class="bg-white dark:bg-gray-900"
        {
            div class="py-8 px-4 mx-auto max-w-screen-xl lg:py-16 lg:px-6"
            {
                div class="mx-auto max-w-screen-sm text-center"
                {
                    h1
                        class="mb-4 text-7xl tracking-tight font-extrabold
                            lg:text-9xl text-indigo-600 dark:text-indigo-500"
                    {
                        (header)
                    }

                    p
                        class="mb-4 text-3xl md:text-4xl tracking-tight
                            font-bold text-gray-900 dark:text-white"
                    {
                        (description)
                    }

                    p
                        class="mb-4 text-1xl md:text-2xl tracking-tight
                            text-gray-900 dark:text-white"
                    {
                        (fix)
                    }

                    a
                        href="/"
                        class="inline-flex text-white bg-indigo-600
                            hover:bg-indigo-800 focus:ring-4 focus:outline-hidden
                            focus:ring-indigo-300 font-medium rounded text-sm px-5
                            py-2.5 text-center dark:focus:ring-indigo-900 my-4"
                    {
                        "Back to Homepage"
                    }
                }
            }
        }
    );

    base(title, &[], &content)
}

/// numfmt switches to scientific notation from one trillion up.
const SCIENTIFIC_NOTATION_CUTOFF: f64 = 1e12;

/// `number` rounded to the nearest cent, with `-0.0` flattened to `0.0`.
pub fn round_to_cents(number: f64) -> f64 {
    let rounded = (number * 100.0).round() / 100.0;

    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format `number` as dollars and cents, e.g. "$1,234.56" or "-$12.30".
///
/// Amounts are rounded to the nearest cent first, so float leftovers such as
/// `0.3 - 0.1 - 0.2` are shown as "$0.00".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .expect("\"-$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    let number = round_to_cents(number);

    let mut formatted_string = if number.abs() >= SCIENTIFIC_NOTATION_CUTOFF {
        let prefix = if number < 0.0 { "-$" } else { "$" };
        format_large_amount(prefix, number.abs())
    } else if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits trailing zeros, so we must add them ourselves.
    // For example, "12.30" is rendered as "12.3" so we append "0".
    match formatted_string.find('.') {
        None => formatted_string.push_str(".00"),
        Some(dot) if formatted_string.len() - dot == 2 => formatted_string.push('0'),
        Some(_) => {}
    }

    formatted_string
}

/// Format an amount too large for numfmt to write out in full.
fn format_large_amount(prefix: &str, amount: f64) -> String {
    let digits = format!("{amount:.2}");
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{prefix}{grouped}.{cents}")
}
