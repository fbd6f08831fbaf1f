//! Dashboard module
//!
//! The app's single page: summary totals, the add transaction form, the list
//! of recent transactions and a pie chart of spending by category.

mod aggregation;
mod cards;
mod charts;
mod handlers;
mod list;

pub use aggregation::{CategoryTotal, Totals, category_breakdown, totals};
pub use handlers::{get_dashboard_content, get_dashboard_page};

pub(crate) use handlers::dashboard_content;
