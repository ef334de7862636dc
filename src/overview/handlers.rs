//! The overview page handler and view.
//!
//! The overview is the whole UI: settlement summary, charts, the
//! new-expense form, and the expense list all live on the one page
//! served at the root route.

use std::{path::PathBuf, sync::Arc};

use axum::extract::{FromRef, State};
use maud::{Markup, html};
use time::{OffsetDateTime, macros::format_description};

use crate::{
    AppState,
    aggregation::{totals_by_category, totals_by_month},
    config::SplitConfig,
    expense::{Expense, store::load_expenses},
    html::{HeadElement, base},
    overview::{
        cards::settlement_cards,
        charts::{OverviewChart, category_chart, charts_script, charts_view, monthly_chart, paid_by_chart},
        form::new_expense_form,
        tables::{category_totals_table, expense_table},
    },
    settlement::settle,
};

/// The state needed to display the overview page.
#[derive(Debug, Clone)]
pub struct OverviewState {
    /// The path to the JSON file holding the expense records.
    pub data_path: Arc<PathBuf>,
    /// How expenses are split between the two parties.
    pub config: SplitConfig,
}

impl FromRef<AppState> for OverviewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            data_path: state.data_path.clone(),
            config: state.config.clone(),
        }
    }
}

/// Display the overview page: who owes whom, charts, the new-expense
/// form, and the full expense list.
pub async fn get_overview_page(State(state): State<OverviewState>) -> Markup {
    let expenses = load_expenses(&state.data_path);

    overview_view(&expenses, &state.config, &today_string())
}

fn overview_view(expenses: &[Expense], config: &SplitConfig, today: &str) -> Markup {
    let settlement = settle(expenses, config);
    let category_totals = totals_by_category(expenses);
    let month_totals = totals_by_month(expenses);
    let party_totals = [
        (config.party_a.clone(), settlement.paid_a),
        (config.party_b.clone(), settlement.paid_b),
    ];

    let charts = [
        OverviewChart {
            id: "category-chart",
            options: category_chart(&category_totals).to_string(),
        },
        OverviewChart {
            id: "monthly-chart",
            options: monthly_chart(&month_totals).to_string(),
        },
        OverviewChart {
            id: "paid-by-chart",
            options: paid_by_chart(&party_totals).to_string(),
        },
    ];

    let content = html!(
        div
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            h1 class="text-3xl font-bold mb-6" { "Costsplit" }

            (settlement_cards(&settlement, config))

            @if expenses.is_empty() {
                p class="mb-4"
                {
                    "Charts will show up here once you add some expenses."
                }
            } @else {
                (charts_view(&charts))
            }

            (new_expense_form(config, today))

            (category_totals_table(&category_totals))

            (expense_table(expenses))
        }
    );

    let scripts = [
        HeadElement::ScriptLink(
            "https://cdn.jsdelivr.net/npm/echarts@5.5.1/dist/echarts.min.js".to_owned(),
        ),
        charts_script(&charts),
    ];

    base("Overview", &scripts, &content)
}

/// Today's date as `YYYY-MM-DD`, used to pre-fill the form's date input.
fn today_string() -> String {
    OffsetDateTime::now_utc()
        .date()
        .format(format_description!("[year]-[month]-[day]"))
        .unwrap()
}

#[cfg(test)]
mod overview_tests {
    use std::sync::Arc;

    use axum::extract::State;
    use scraper::{Html, Selector};
    use tempfile::tempdir;

    use crate::{
        config::SplitConfig,
        expense::{Expense, store::save_expenses},
        overview::handlers::{OverviewState, get_overview_page},
    };

    fn test_config() -> SplitConfig {
        SplitConfig {
            party_a: "Alice".to_owned(),
            party_b: "Ben".to_owned(),
            ..Default::default()
        }
    }

    fn test_expense(id: i64, amount: f64, paid_by: &str) -> Expense {
        Expense {
            id,
            date: "2025-06-01".to_owned(),
            description: format!("expense {id}"),
            amount,
            category: "Tools".to_owned(),
            paid_by: paid_by.to_owned(),
            share_a: Some(60),
            share_b: Some(40),
        }
    }

    #[tokio::test]
    async fn overview_page_renders_summary_charts_form_and_table() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        save_expenses(
            &path,
            &[test_expense(1, 100.0, "Alice"), test_expense(2, 30.0, "Ben")],
        )
        .unwrap();
        let state = OverviewState {
            data_path: Arc::new(path),
            config: test_config(),
        };

        let markup = get_overview_page(State(state)).await.into_string();
        let html = Html::parse_document(&markup);

        assert_valid_html(&html);
        assert_element_exists(&html, "#debt-statement");
        assert_element_exists(&html, "#category-chart");
        assert_element_exists(&html, "#monthly-chart");
        assert_element_exists(&html, "#paid-by-chart");
        assert_element_exists(&html, "form[action='/new-expense']");
        assert_element_exists(&html, "a[href='/delete/1']");
        assert_element_exists(&html, "a[href='/delete/2']");
    }

    #[tokio::test]
    async fn overview_page_without_data_prompts_for_expenses() {
        let dir = tempdir().unwrap();
        let state = OverviewState {
            data_path: Arc::new(dir.path().join("expenses.json")),
            config: test_config(),
        };

        let markup = get_overview_page(State(state)).await.into_string();

        assert!(
            markup.contains("Charts will show up here once you add some expenses."),
            "got {markup}"
        );
        assert!(markup.contains("All square"), "got {markup}");
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    #[track_caller]
    fn assert_element_exists(html: &Html, css_selector: &str) {
        let selector = Selector::parse(css_selector).unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "no element matching '{css_selector}' in {}",
            html.html()
        );
    }
}
