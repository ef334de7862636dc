//! The expense record and its flat-file store.

mod model;
pub mod store;

pub use model::{Expense, ExpenseId};
