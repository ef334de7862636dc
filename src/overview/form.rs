//! The new-expense form on the overview page.

use maud::{Markup, html};

use crate::{
    config::SplitConfig,
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_INPUT_STYLE, FORM_LABEL_STYLE},
};

/// Renders the form for recording a new expense.
///
/// The date input defaults to `today`, the category select offers the
/// configured categories, and the share inputs are pre-filled with the
/// configured default split. The share fields may be cleared; the
/// server then falls back to the defaults.
pub(super) fn new_expense_form(config: &SplitConfig, today: &str) -> Markup {
    html!(
        section class="w-full mb-8"
        {
            h3 class="text-xl font-semibold mb-4" { "Add expense" }

            form
                method="post"
                action=(endpoints::NEW_EXPENSE)
                class="grid grid-cols-1 md:grid-cols-2 gap-4 rounded-lg
                    bg-white p-4 shadow dark:bg-gray-800"
            {
                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }
                    input
                        type="date"
                        name="date"
                        id="date"
                        value=(today)
                        required
                        class=(FORM_INPUT_STYLE);
                }

                div
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }
                    input
                        type="text"
                        name="description"
                        id="description"
                        placeholder="What was bought?"
                        required
                        class=(FORM_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                    input
                        type="number"
                        name="amount"
                        id="amount"
                        min="0"
                        step="0.01"
                        required
                        class=(FORM_INPUT_STYLE);
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                    select name="category" id="category" class=(FORM_INPUT_STYLE)
                    {
                        @for category in &config.categories {
                            option value=(category) { (category) }
                        }
                    }
                }

                div
                {
                    label for="paid_by" class=(FORM_LABEL_STYLE) { "Paid by" }
                    select name="paid_by" id="paid_by" class=(FORM_INPUT_STYLE)
                    {
                        option value=(config.party_a) { (config.party_a) }
                        option value=(config.party_b) { (config.party_b) }
                    }
                }

                div class="grid grid-cols-2 gap-4"
                {
                    div
                    {
                        label for="shareA" class=(FORM_LABEL_STYLE)
                        {
                            (config.party_a) "'s share (%)"
                        }
                        input
                            type="number"
                            name="shareA"
                            id="shareA"
                            min="0"
                            max="100"
                            value=(config.default_share_a)
                            class=(FORM_INPUT_STYLE);
                    }

                    div
                    {
                        label for="shareB" class=(FORM_LABEL_STYLE)
                        {
                            (config.party_b) "'s share (%)"
                        }
                        input
                            type="number"
                            name="shareB"
                            id="shareB"
                            min="0"
                            max="100"
                            value=(config.default_share_b)
                            class=(FORM_INPUT_STYLE);
                    }
                }

                div class="md:col-span-2"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add expense" }
                }
            }
        }
    )
}

#[cfg(test)]
mod form_tests {
    use scraper::{Html, Selector};

    use crate::{config::SplitConfig, overview::form::new_expense_form};

    #[test]
    fn form_posts_to_new_expense_endpoint() {
        let markup = new_expense_form(&SplitConfig::default(), "2025-08-20").into_string();
        let html = Html::parse_fragment(&markup);

        let selector = Selector::parse("form[action='/new-expense'][method='post']").unwrap();
        assert!(html.select(&selector).next().is_some(), "got {markup}");
    }

    #[test]
    fn form_offers_all_configured_categories() {
        let config = SplitConfig::default();
        let markup = new_expense_form(&config, "2025-08-20").into_string();
        let html = Html::parse_fragment(&markup);

        let selector = Selector::parse("select[name='category'] option").unwrap();
        assert_eq!(html.select(&selector).count(), config.categories.len());
    }

    #[test]
    fn share_inputs_default_to_configured_split() {
        let markup = new_expense_form(&SplitConfig::default(), "2025-08-20").into_string();
        let html = Html::parse_fragment(&markup);

        let share_a = Selector::parse("input[name='shareA'][value='60']").unwrap();
        let share_b = Selector::parse("input[name='shareB'][value='40']").unwrap();
        assert!(html.select(&share_a).next().is_some(), "got {markup}");
        assert!(html.select(&share_b).next().is_some(), "got {markup}");
    }

    #[test]
    fn date_input_defaults_to_today() {
        let markup = new_expense_form(&SplitConfig::default(), "2025-08-20").into_string();
        let html = Html::parse_fragment(&markup);

        let selector = Selector::parse("input[name='date'][value='2025-08-20']").unwrap();
        assert!(html.select(&selector).next().is_some(), "got {markup}");
    }
}
