//! Table views for the overview page: per-category totals and the full
//! expense list with delete links.

use maud::{Markup, html};

use crate::{
    endpoints,
    expense::Expense,
    html::{
        BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        format_currency,
    },
};

/// Renders the per-category totals, in first-occurrence order.
pub(super) fn category_totals_table(category_totals: &[(String, f64)]) -> Markup {
    if category_totals.is_empty() {
        return html! {};
    }

    html!(
        div class="w-full mb-4"
        {
            h3 class="text-xl font-semibold mb-4" { "Totals by category" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Total" }
                        }
                    }
                    tbody
                    {
                        @for (category, total) in category_totals {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (category) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(*total)) }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Renders the full expense list in stored order, each row carrying a
/// delete link.
pub(super) fn expense_table(expenses: &[Expense]) -> Markup {
    html!(
        div class="w-full mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Expenses" }

            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Paid by" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Split" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "" }
                        }
                    }
                    tbody
                    {
                        @if expenses.is_empty() {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) colspan="7"
                                {
                                    "No expenses yet. Add the first one above."
                                }
                            }
                        }

                        @for expense in expenses {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (expense.date) }
                                td class=(TABLE_CELL_STYLE) { (expense.description) }
                                td class=(TABLE_CELL_STYLE) { (expense.category) }
                                td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
                                td class=(TABLE_CELL_STYLE) { (expense.paid_by) }
                                td class=(TABLE_CELL_STYLE) { (split_label(expense)) }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    a
                                        href=(endpoints::format_endpoint(
                                            endpoints::DELETE_EXPENSE,
                                            expense.id,
                                        ))
                                        class=(BUTTON_DELETE_STYLE)
                                    {
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

/// The stored split of an expense as e.g. "60/40", or a dash when the
/// expense predates per-record splits.
fn split_label(expense: &Expense) -> String {
    match (expense.share_a, expense.share_b) {
        (Some(share_a), Some(share_b)) => format!("{share_a}/{share_b}"),
        _ => "-".to_owned(),
    }
}

#[cfg(test)]
mod tables_tests {
    use scraper::{Html, Selector};

    use crate::{
        expense::Expense,
        overview::tables::{category_totals_table, expense_table},
    };

    fn test_expense(id: i64, description: &str) -> Expense {
        Expense {
            id,
            date: "2025-06-01".to_owned(),
            description: description.to_owned(),
            amount: 10.0,
            category: "Tools".to_owned(),
            paid_by: "Alice".to_owned(),
            share_a: Some(60),
            share_b: Some(40),
        }
    }

    #[test]
    fn expense_rows_carry_delete_links() {
        let expenses = vec![test_expense(1, "first"), test_expense(7, "second")];

        let html = Html::parse_fragment(&expense_table(&expenses).into_string());

        let selector = Selector::parse("a[href='/delete/7']").unwrap();
        assert!(
            html.select(&selector).next().is_some(),
            "missing delete link in {}",
            html.html()
        );
    }

    #[test]
    fn empty_expense_list_shows_prompt_row() {
        let markup = expense_table(&[]).into_string();

        assert!(markup.contains("No expenses yet"), "got {markup}");
    }

    #[test]
    fn category_table_lists_totals() {
        let totals = vec![("Tools".to_owned(), 15.0), ("Fuel".to_owned(), 5.5)];

        let markup = category_totals_table(&totals).into_string();

        assert!(markup.contains("Tools"), "got {markup}");
        assert!(markup.contains("$15.00"), "got {markup}");
        assert!(markup.contains("$5.50"), "got {markup}");
    }

    #[test]
    fn empty_category_totals_render_nothing() {
        assert!(category_totals_table(&[]).into_string().is_empty());
    }
}
