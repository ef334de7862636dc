//! Chart generation and rendering for the overview page.
//!
//! Three ECharts visualizations are built from the expense list:
//! spending by category (pie), spending by month (bar), and amount
//! paid per party (pie). Each chart is generated as JSON configuration
//! for the ECharts library and rendered with a container div and
//! JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::html::HeadElement;

/// An overview chart with its HTML container ID and ECharts configuration.
pub(super) struct OverviewChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for the overview charts.
pub(super) fn charts_view(charts: &[OverviewChart]) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 xl:grid-cols-3 gap-4"
            {
                @for chart in charts {
                    div
                        id=(chart.id)
                        class="min-h-[380px] rounded dark:bg-gray-100"
                    {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for the overview charts.
pub(super) fn charts_script(charts: &[OverviewChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn category_chart(category_totals: &[(String, f64)]) -> Chart {
    let data: Vec<(f64, &str)> = category_totals
        .iter()
        .map(|(label, sum)| (*sum, label.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Spending by category"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .series(Pie::new().name("Category").radius("55%").data(data))
}

pub(super) fn monthly_chart(month_totals: &[(String, f64)]) -> Chart {
    let mut sorted: Vec<&(String, f64)> = month_totals.iter().collect();
    sorted.sort_by(|(month_a, _), (month_b, _)| month_a.cmp(month_b));

    let labels: Vec<String> = sorted.iter().map(|(month, _)| month.clone()).collect();
    let values: Vec<f64> = sorted.iter().map(|(_, sum)| *sum).collect();

    Chart::new()
        .title(Title::new().text("Spending by month"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Spending").data(values))
}

pub(super) fn paid_by_chart(party_totals: &[(String, f64)]) -> Chart {
    let data: Vec<(f64, &str)> = party_totals
        .iter()
        .map(|(name, sum)| (*sum, name.as_str()))
        .collect();

    Chart::new()
        .title(Title::new().text("Paid by"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .series(Pie::new().name("Paid by").radius("55%").data(data))
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
