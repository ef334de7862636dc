//! Defines the endpoint for deleting an expense.

use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::{FromRef, Path, State},
    response::Redirect,
};

use crate::{
    AppState, Error, endpoints,
    expense::{
        ExpenseId,
        store::{load_expenses, save_expenses},
    },
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The path to the JSON file holding the expense records.
    pub data_path: Arc<PathBuf>,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            data_path: state.data_path.clone(),
        }
    }
}

/// A route handler that deletes the expense with the given ID and
/// redirects to the overview page.
///
/// Deleting an ID that does not exist is a no-op, not an error: the
/// file is rewritten unchanged and the client is redirected as usual,
/// so stale delete links stay harmless.
pub async fn delete_expense_endpoint(
    State(state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Redirect, Error> {
    let mut expenses = load_expenses(&state.data_path);
    let count_before = expenses.len();

    expenses.retain(|expense| expense.id != expense_id);

    if expenses.len() == count_before {
        tracing::debug!("delete request for unknown expense {expense_id}");
    } else {
        tracing::info!("deleted expense {expense_id}");
    }

    save_expenses(&state.data_path, &expenses)
        .inspect_err(|error| tracing::error!("could not save expense file: {error}"))?;

    Ok(Redirect::to(endpoints::ROOT))
}

#[cfg(test)]
mod delete_expense_tests {
    use std::sync::Arc;

    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use tempfile::tempdir;

    use crate::{
        delete_expense::{DeleteExpenseState, delete_expense_endpoint},
        expense::{
            Expense,
            store::{load_expenses, save_expenses},
        },
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

    #[tokio::test]
    async fn deletes_expense_and_preserves_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        save_expenses(
            &path,
            &[
                test_expense(1, "first"),
                test_expense(2, "second"),
                test_expense(3, "third"),
            ],
        )
        .unwrap();
        let state = DeleteExpenseState {
            data_path: Arc::new(path.clone()),
        };

        let response = delete_expense_endpoint(State(state), Path(2))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/");

        let remaining = load_expenses(&path);
        assert_eq!(
            remaining,
            vec![test_expense(1, "first"), test_expense(3, "third")]
        );
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_a_no_op() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("expenses.json");
        save_expenses(&path, &[test_expense(1, "first")]).unwrap();
        let state = DeleteExpenseState {
            data_path: Arc::new(path.clone()),
        };

        let response = delete_expense_endpoint(State(state), Path(99))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(load_expenses(&path), vec![test_expense(1, "first")]);
    }
}
