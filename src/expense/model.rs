//! The expense record, the sole persisted entity.

use serde::{Deserialize, Serialize};

/// The unique identifier of an [Expense].
///
/// IDs are assigned as `max(existing) + 1` and never reused, so gaps
/// remain after deletions.
pub type ExpenseId = i64;

/// A single shared purchase.
///
/// The serde field names match the persisted JSON file, which keeps the
/// original camel-cased share fields alongside the snake-cased rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The unique ID of this expense.
    pub id: ExpenseId,

    /// The date of the purchase as entered, nominally `YYYY-MM-DD`.
    ///
    /// Dates are stored and grouped as opaque strings; a malformed date
    /// is kept as-is and simply produces an odd month label.
    pub date: String,

    /// Text describing the purchase.
    pub description: String,

    /// The cost of the purchase.
    pub amount: f64,

    /// The category label, normally one of the configured set.
    pub category: String,

    /// The name of the party that paid for the purchase.
    pub paid_by: String,

    /// The percentage of the cost carried by the first party.
    ///
    /// When absent the settlement calculator falls back to the
    /// configured default. There is no guarantee that an expense's own
    /// shares sum to 100.
    #[serde(rename = "shareA", skip_serializing_if = "Option::is_none")]
    pub share_a: Option<u32>,

    /// The percentage of the cost carried by the second party.
    #[serde(rename = "shareB", skip_serializing_if = "Option::is_none")]
    pub share_b: Option<u32>,
}

#[cfg(test)]
mod expense_tests {
    use crate::expense::Expense;

    #[test]
    fn serializes_share_fields_with_original_names() {
        let expense = Expense {
            id: 1,
            date: "2025-08-01".to_owned(),
            description: "Roof rack".to_owned(),
            amount: 120.0,
            category: "Car Parts".to_owned(),
            paid_by: "Alice".to_owned(),
            share_a: Some(60),
            share_b: Some(40),
        };

        let json = serde_json::to_string(&expense).unwrap();

        assert!(json.contains("\"shareA\":60"), "got {json}");
        assert!(json.contains("\"shareB\":40"), "got {json}");
        assert!(json.contains("\"paid_by\":\"Alice\""), "got {json}");
    }

    #[test]
    fn deserializes_record_without_share_fields() {
        let json = r#"{
            "id": 3,
            "date": "2025-07-15",
            "description": "Gas bottle",
            "amount": 45.5,
            "category": "Heating",
            "paid_by": "Ben"
        }"#;

        let expense: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(expense.share_a, None);
        assert_eq!(expense.share_b, None);
        assert_eq!(expense.amount, 45.5);
    }
}
