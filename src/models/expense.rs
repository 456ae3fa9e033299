use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded expense. `id` is assigned at creation and never changes;
/// editing an expense replaces the whole record under the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub category: String,
    pub amount: Decimal,
    pub date: DateTime<Local>,
}

impl Expense {
    pub fn new(category: String, amount: Decimal, date: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount,
            date,
        }
    }

    /// Negative amounts are refunds/corrections, not spending.
    pub fn is_refund(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn abs_amount(&self) -> Decimal {
        self.amount.abs()
    }
}
