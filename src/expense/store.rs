//! Whole-file persistence for expense records.
//!
//! The store is a single UTF-8, pretty-printed JSON array. Reads load
//! the entire file and writes overwrite it wholesale. There is no
//! locking: concurrent writers can race and the later write wins, which
//! is accepted for a single-writer tool.

use std::{fs, path::Path};

use crate::{
    Error,
    expense::{Expense, ExpenseId},
};

/// Load all expenses from the file at `path`.
///
/// A missing file is an empty expense list. An unreadable or
/// unparseable file is also treated as empty, with a warning in the
/// logs; no error reaches the caller.
pub fn load_expenses(path: &Path) -> Vec<Expense> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(error) => {
            tracing::warn!(
                "could not read expense file {}: {error}",
                path.display()
            );
            return Vec::new();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(expenses) => expenses,
        Err(error) => {
            tracing::warn!(
                "could not parse expense file {}, treating it as empty: {error}",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Overwrite the file at `path` with the given expenses.
///
/// The write is a plain overwrite, not an atomic rename.
///
/// # Errors
/// Returns [Error::SaveFailed] if the file cannot be written.
pub fn save_expenses(path: &Path, expenses: &[Expense]) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(expenses)
        .map_err(|error| Error::SaveFailed(error.to_string()))?;

    fs::write(path, json).map_err(|error| {
        Error::SaveFailed(format!("{}: {error}", path.display()))
    })
}

/// The ID to assign to the next expense: one more than the highest ID
/// currently in use, starting at 1 for an empty list.
///
/// Because the maximum is taken over the live records, IDs freed by
/// deletions below the maximum are never handed out again.
pub fn next_expense_id(expenses: &[Expense]) -> ExpenseId {
    expenses.iter().map(|expense| expense.id).max().unwrap_or(0) + 1
}
