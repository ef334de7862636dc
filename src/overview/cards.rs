//! Summary cards showing the settlement figures and the debt statement.

use maud::{Markup, html};

use crate::{
    config::SplitConfig,
    html::format_currency,
    settlement::Settlement,
};

const CARD_STYLE: &str = "flex flex-col gap-1 rounded-lg bg-white p-4 shadow \
    dark:bg-gray-800";
const CARD_LABEL_STYLE: &str = "text-sm text-gray-500 dark:text-gray-400";
const CARD_VALUE_STYLE: &str = "text-2xl font-semibold";

/// Gets the CSS class for coloring balances (green for positive, red for negative).
fn balance_color_class(amount: f64) -> &'static str {
    if amount >= 0.0 {
        "text-green-600 dark:text-green-400"
    } else {
        "text-red-600 dark:text-red-400"
    }
}

/// Renders the per-party settlement cards and the debt statement banner.
pub(super) fn settlement_cards(settlement: &Settlement, config: &SplitConfig) -> Markup {
    html!(
        section class="w-full mx-auto mb-4"
        {
            (debt_banner(settlement))

            div class="grid grid-cols-1 md:grid-cols-3 gap-4"
            {
                (party_card(
                    &config.party_a,
                    settlement.paid_a,
                    settlement.owed_a,
                    settlement.balance_a,
                ))

                (party_card(
                    &config.party_b,
                    settlement.paid_b,
                    settlement.owed_b,
                    settlement.balance_b,
                ))

                div class=(CARD_STYLE)
                {
                    span class=(CARD_LABEL_STYLE) { "Total spent" }
                    span class=(CARD_VALUE_STYLE) { (format_currency(settlement.total)) }
                }
            }
        }
    )
}

fn party_card(name: &str, paid: f64, owed: f64, balance: f64) -> Markup {
    html!(
        div class=(CARD_STYLE)
        {
            span class=(CARD_LABEL_STYLE) { (name) " paid" }
            span class=(CARD_VALUE_STYLE) { (format_currency(paid)) }

            span class=(CARD_LABEL_STYLE)
            {
                "fair share " (format_currency(owed))
            }

            span class={ "text-sm font-medium " (balance_color_class(balance)) }
            {
                "balance " (format_currency(balance))
            }
        }
    )
}

/// The single directional statement of who owes whom.
///
/// The computed debt keeps its direction even on an exact tie, but a
/// zero amount reads as "all square" here rather than as one party
/// owing the other nothing.
fn debt_banner(settlement: &Settlement) -> Markup {
    let debt = &settlement.debt;

    html!(
        div
            id="debt-statement"
            class="mb-4 rounded-lg bg-blue-50 p-4 text-center text-lg
                font-semibold text-blue-900 dark:bg-blue-900/30 dark:text-blue-200"
        {
            @if debt.amount == 0.0 {
                "All square: nobody owes anything."
            } @else {
                (debt.debtor) " owes " (debt.creditor) " " (format_currency(debt.amount))
            }
        }
    )
}
