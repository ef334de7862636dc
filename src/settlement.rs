//! The settlement calculation: who paid what, who should have carried
//! what, and the single directional debt that squares the two parties.
//!
//! This is a pure fold over the full expense list. Each expense counts
//! fully toward the payer's paid total, while the owed totals apply the
//! expense's own split percentages (falling back to the configured
//! default split). The signed balances are then resolved into one
//! "debtor owes creditor amount" statement.

use crate::{config::SplitConfig, expense::Expense};

/// The outcome of settling the full expense list.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// Sum of amounts paid by the first party.
    pub paid_a: f64,
    /// Sum of amounts paid by the second party.
    pub paid_b: f64,
    /// `paid_a + paid_b`.
    pub total: f64,
    /// The share of all expenses the first party should carry.
    pub owed_a: f64,
    /// The share of all expenses the second party should carry.
    pub owed_b: f64,
    /// `paid_a - owed_a`; positive when the first party overpaid.
    pub balance_a: f64,
    /// `paid_b - owed_b`.
    pub balance_b: f64,
    /// The balances resolved into a single directional statement.
    pub debt: Debt,
}

/// A directional debt statement: `debtor` owes `creditor` `amount`.
#[derive(Debug, Clone, PartialEq)]
pub struct Debt {
    /// The name of the party that owes money.
    pub debtor: String,
    /// The name of the party that is owed money.
    pub creditor: String,
    /// The amount owed; zero when the parties are square.
    pub amount: f64,
}

/// Settle the given expenses under `config`.
///
/// Any `paid_by` value other than the configured first party counts
/// toward the second party. Share percentages are applied exactly as
/// stored, so an expense whose shares do not sum to 100 makes
/// `owed_a + owed_b` differ from `total`; that is accepted, not
/// corrected.
///
/// A zero balance resolves to the first party owing the second party
/// nothing. Callers that want to present a tie as "no debt" should do
/// so from [Debt::amount], not from the direction.
pub fn settle(expenses: &[Expense], config: &SplitConfig) -> Settlement {
    let mut paid_a = 0.0;
    let mut paid_b = 0.0;
    let mut owed_a = 0.0;
    let mut owed_b = 0.0;

    for expense in expenses {
        let share_a = expense.share_a.unwrap_or(config.default_share_a) as f64 / 100.0;
        let share_b = expense.share_b.unwrap_or(config.default_share_b) as f64 / 100.0;

        if expense.paid_by == config.party_a {
            paid_a += expense.amount;
        } else {
            paid_b += expense.amount;
        }

        owed_a += expense.amount * share_a;
        owed_b += expense.amount * share_b;
    }

    let total = paid_a + paid_b;
    let balance_a = paid_a - owed_a;
    let balance_b = paid_b - owed_b;

    let debt = if balance_a > 0.0 {
        Debt {
            debtor: config.party_b.clone(),
            creditor: config.party_a.clone(),
            amount: balance_a.abs(),
        }
    } else {
        Debt {
            debtor: config.party_a.clone(),
            creditor: config.party_b.clone(),
            amount: balance_b.abs(),
        }
    };

    Settlement {
        paid_a,
        paid_b,
        total,
        owed_a,
        owed_b,
        balance_a,
        balance_b,
        debt,
    }
}
