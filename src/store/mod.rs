mod settings;

use chrono::{DateTime, Local, Months};
use log::warn;
use rust_decimal::Decimal;
use std::path::Path;
use uuid::Uuid;

use crate::models::Expense;
use settings::Settings;

/// Slot in the settings file holding the serialized expense list.
const EXPENSES_KEY: &str = "expenses";

/// Authoritative holder of the expense list. Every mutating operation
/// persists the full list, and the one-month retention filter runs at
/// every persistence boundary (save and load).
///
/// Operations never fail outward: a missing or undecodable blob loads as
/// an empty list, and a failed write leaves the in-memory state intact.
/// Both conditions are logged.
pub(crate) struct ExpenseStore {
    settings: Settings,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub(crate) fn open(path: &Path) -> Self {
        let settings = Settings::open(path);
        let expenses = load_expenses(&settings);
        Self { settings, expenses }
    }

    /// Create a new expense with a fresh id and persist it.
    pub(crate) fn add(
        &mut self,
        category: String,
        amount: Decimal,
        date: DateTime<Local>,
    ) -> Expense {
        let expense = Expense::new(category, amount, date);
        self.expenses.push(expense.clone());
        self.save();
        expense
    }

    /// Replace the stored expense with the same id, keeping its list
    /// position. An unknown id is a no-op.
    pub(crate) fn update(&mut self, expense: Expense) {
        match self.expenses.iter_mut().find(|e| e.id == expense.id) {
            Some(slot) => {
                *slot = expense;
                self.save();
            }
            None => warn!("update for unknown expense id {}, ignoring", expense.id),
        }
    }

    /// Delete by id, never by index. Unknown ids are ignored.
    pub(crate) fn remove(&mut self, ids: &[Uuid]) {
        let before = self.expenses.len();
        self.expenses.retain(|e| !ids.contains(&e.id));
        if self.expenses.len() == before && !ids.is_empty() {
            warn!("remove matched no expenses");
        }
        self.save();
    }

    pub(crate) fn remove_all(&mut self) {
        self.expenses.clear();
        self.save();
    }

    pub(crate) fn total(&self) -> Decimal {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// All current expenses in insertion order. Display order (newest
    /// first) is the caller's concern.
    pub(crate) fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub(crate) fn len(&self) -> usize {
        self.expenses.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Re-read the persisted blob, discarding the in-memory list.
    pub(crate) fn reload(&mut self) {
        self.expenses = load_expenses(&self.settings);
    }

    /// Prune expired entries, then overwrite the persisted blob with the
    /// full list. Write failures are swallowed; the in-memory list stays
    /// correct either way.
    pub(crate) fn save(&mut self) {
        self.prune(Local::now());
        match serde_json::to_value(&self.expenses) {
            Ok(value) => {
                if let Err(e) = self.settings.set(EXPENSES_KEY, value) {
                    warn!("expense save failed, keeping in-memory state: {e:#}");
                }
            }
            Err(e) => warn!("expense encoding failed, keeping in-memory state: {e}"),
        }
    }

    fn prune(&mut self, now: DateTime<Local>) {
        let cutoff = retention_cutoff(now);
        self.expenses.retain(|e| e.date >= cutoff);
    }
}

/// One calendar month before `now`, with day-of-month clamping (Mar 31
/// looks back to Feb 28/29). Recomputed at every call, never cached.
pub(crate) fn retention_cutoff(now: DateTime<Local>) -> DateTime<Local> {
    now.checked_sub_months(Months::new(1)).unwrap_or(now)
}

fn load_expenses(settings: &Settings) -> Vec<Expense> {
    let value = match settings.get(EXPENSES_KEY) {
        Ok(Some(value)) => value,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("unreadable expense data, starting empty: {e:#}");
            return Vec::new();
        }
    };
    match serde_json::from_value::<Vec<Expense>>(value) {
        Ok(expenses) => {
            let cutoff = retention_cutoff(Local::now());
            expenses.into_iter().filter(|e| e.date >= cutoff).collect()
        }
        Err(e) => {
            warn!("undecodable expense data, starting empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests;
