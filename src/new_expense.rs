//! Defines the endpoint for recording a new expense.

use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::{FromRef, State},
    response::Redirect,
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{
    AppState, Error,
    config::SplitConfig,
    endpoints,
    expense::{
        Expense,
        store::{load_expenses, next_expense_id, save_expenses},
    },
};

/// The state needed to record a new expense.
#[derive(Debug, Clone)]
pub struct NewExpenseState {
    /// The path to the JSON file holding the expense records.
    pub data_path: Arc<PathBuf>,
    /// How expenses are split between the two parties.
    pub config: SplitConfig,
}

impl FromRef<AppState> for NewExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            data_path: state.data_path.clone(),
            config: state.config.clone(),
        }
    }
}

/// The form data for recording an expense.
///
/// Omitted or empty share fields fall back to the configured default
/// split. Missing required fields are rejected by the form extractor
/// before this struct is built.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The date of the purchase, nominally `YYYY-MM-DD`.
    pub date: String,
    /// Text describing the purchase.
    pub description: String,
    /// The cost of the purchase.
    pub amount: f64,
    /// The category label.
    pub category: String,
    /// The name of the party that paid.
    pub paid_by: String,
    /// The percentage of the cost carried by the first party.
    #[serde(rename = "shareA", default)]
    pub share_a: Option<u32>,
    /// The percentage of the cost carried by the second party.
    #[serde(rename = "shareB", default)]
    pub share_b: Option<u32>,
}

/// A route handler for recording a new expense, redirects to the
/// overview page on success.
///
/// The expense is appended with a freshly assigned ID and the whole
/// expense file is rewritten.
pub async fn create_expense_endpoint(
    State(state): State<NewExpenseState>,
    Form(form): Form<ExpenseForm>,
) -> Result<Redirect, Error> {
    let mut expenses = load_expenses(&state.data_path);

    let expense = Expense {
        id: next_expense_id(&expenses),
        date: form.date,
        description: form.description,
        amount: form.amount,
        category: form.category,
        paid_by: form.paid_by,
        share_a: Some(form.share_a.unwrap_or(state.config.default_share_a)),
        share_b: Some(form.share_b.unwrap_or(state.config.default_share_b)),
    };

    tracing::info!(
        "recording expense {} ({}) paid by {}",
        expense.id,
        expense.description,
        expense.paid_by
    );

    expenses.push(expense);
    save_expenses(&state.data_path, &expenses)
        .inspect_err(|error| tracing::error!("could not save expense: {error}"))?;

    Ok(Redirect::to(endpoints::ROOT))
}
