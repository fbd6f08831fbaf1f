//! The spending breakdown pie chart.
//!
//! The chart is an ECharts configuration built with `charming` and rendered
//! as a container div followed by an inline script that draws into it. The
//! script sits next to the container so that it runs both on page load and
//! when HTMX swaps in fresh dashboard content.
//!
//! Live chart instances are kept in `window.dashboardCharts` by container ID.
//! Each run disposes the instance it replaces, and the resize and theme
//! listeners are registered once per page.

use charming::{
    Chart,
    component::Legend,
    element::{JsFunction, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::CategoryTotal,
    html::{PANEL_STYLE, PANEL_TITLE_STYLE},
};

/// The slice colours, reused in order when there are more categories than colours.
pub(super) const CHART_COLORS: [&str; 6] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#ff7373",
];

const SPENDING_BREAKDOWN_CHART_ID: &str = "spending-breakdown-chart";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the "Spending Breakdown" panel.
///
/// Shows a placeholder instead of the chart when there are no expenses.
pub(super) fn spending_breakdown_view(breakdown: &[CategoryTotal]) -> Markup {
    let chart = (!breakdown.is_empty()).then(|| DashboardChart {
        id: SPENDING_BREAKDOWN_CHART_ID,
        options: spending_breakdown_chart(breakdown).to_string(),
    });

    html! {
        div class=(PANEL_STYLE)
        {
            h3 class=(PANEL_TITLE_STYLE) { "Spending Breakdown" }

            @match chart {
                Some(chart) => {
                    div id=(chart.id) class="w-full h-64" {}
                    script { (chart_script(&chart)) }
                }
                None => {
                    div class="h-64 flex items-center justify-center text-gray-400"
                    {
                        "Add expenses to see analysis"
                    }
                    script { (dispose_chart_script(SPENDING_BREAKDOWN_CHART_ID)) }
                }
            }
        }
    }
}

/// JavaScript that draws `chart` into its container, following the system theme.
///
/// Replaces any chart previously drawn under the same ID.
fn chart_script(chart: &DashboardChart) -> PreEscaped<String> {
    PreEscaped(format!(
        r#"(function() {{
            const charts = window.dashboardCharts ??= {{}};
            charts["{id}"]?.dispose();

            const chart = echarts.init(document.getElementById("{id}"));
            chart.setOption({options});
            charts["{id}"] = chart;

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = (chart) => {{
                chart.setTheme(darkModeMediaQuery.matches ? 'dark' : 'default');
            }};
            updateTheme(chart);

            if (!window.dashboardChartListeners) {{
                window.dashboardChartListeners = true;
                window.addEventListener('resize', () => {{
                    Object.values(charts).forEach((chart) => chart.resize());
                }});
                darkModeMediaQuery.addEventListener('change', () => {{
                    Object.values(charts).forEach(updateTheme);
                }});
            }}
        }})();"#,
        id = chart.id,
        options = chart.options
    ))
}

/// JavaScript that disposes the chart drawn under `id`, if there is one.
fn dispose_chart_script(id: &str) -> PreEscaped<String> {
    PreEscaped(format!(
        r#"(function() {{
            const charts = window.dashboardCharts ?? {{}};
            charts["{id}"]?.dispose();
            delete charts["{id}"];
        }})();"#
    ))
}

/// A doughnut chart with one slice per category.
pub(super) fn spending_breakdown_chart(breakdown: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, &str)> = breakdown
        .iter()
        .map(|total| (total.value, total.name.as_str()))
        .collect();

    Chart::new()
        .color(CHART_COLORS.to_vec())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(Legend::new().left("center").top("bottom"))
        .series(
            Pie::new()
                .name("Spending")
                .radius(vec!["40%", "60%"])
                .data(data),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}
