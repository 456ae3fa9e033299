use rust_decimal::Decimal;
use uuid::Uuid;

use super::util;
use crate::models::Expense;
use crate::store::ExpenseStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending destructive action that requires a y/N confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteExpense { id: Uuid, category: String },
    DeleteAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Category,
    Amount,
    Date,
}

impl FormField {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Amount => "Amount",
            Self::Date => "Date",
        }
    }
}

/// Add/edit form state. Text fields hold raw input; parsing happens on
/// submit so the user can type freely.
#[derive(Debug, Clone)]
pub(crate) struct ExpenseForm {
    pub(crate) editing: Option<Uuid>,
    pub(crate) field: FormField,
    pub(crate) category: String,
    pub(crate) amount: String,
    pub(crate) date: String,
}

impl ExpenseForm {
    pub(crate) fn for_new() -> Self {
        Self {
            editing: None,
            field: FormField::Category,
            category: String::new(),
            amount: String::new(),
            date: util::format_date(chrono::Local::now()),
        }
    }

    pub(crate) fn for_edit(expense: &Expense) -> Self {
        Self {
            editing: Some(expense.id),
            field: FormField::Category,
            category: expense.category.clone(),
            amount: format!("{:.2}", expense.amount),
            date: util::format_date(expense.date),
        }
    }

    pub(crate) fn active_mut(&mut self) -> &mut String {
        match self.field {
            FormField::Category => &mut self.category,
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Presentation copy of the store's list, newest first
    pub(crate) rows: Vec<Expense>,
    pub(crate) cursor: usize,
    pub(crate) scroll: usize,
    pub(crate) total: Decimal,

    pub(crate) form: Option<ExpenseForm>,

    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            rows: Vec::new(),
            cursor: 0,
            scroll: 0,
            total: Decimal::ZERO,

            form: None,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    /// Pull the store's state into the presentation list. Newest-first sort
    /// happens here; the store keeps insertion order.
    pub(crate) fn refresh(&mut self, store: &ExpenseStore) {
        self.rows = store.expenses().to_vec();
        self.rows.sort_by(|a, b| b.date.cmp(&a.date));
        self.total = store.total();
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
        if self.scroll > self.cursor {
            self.scroll = self.cursor;
        }
    }

    pub(crate) fn selected(&self) -> Option<&Expense> {
        self.rows.get(self.cursor)
    }

    pub(crate) fn open_add_form(&mut self) {
        self.form = Some(ExpenseForm::for_new());
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn open_edit_form(&mut self) {
        match self.selected() {
            Some(expense) => {
                self.form = Some(ExpenseForm::for_edit(expense));
                self.input_mode = InputMode::Editing;
            }
            None => self.set_status("Nothing to edit"),
        }
    }

    /// Parse the form and apply it to the store. On a parse error the form
    /// stays open with a status hint.
    pub(crate) fn submit_form(&mut self, store: &mut ExpenseStore) {
        let Some(form) = self.form.clone() else {
            return;
        };
        let Some(amount) = util::parse_amount(&form.amount) else {
            self.set_status("Invalid amount (e.g. 3.50)");
            return;
        };
        let Some(date) = util::parse_date(&form.date) else {
            self.set_status("Invalid date (YYYY-MM-DD or YYYY-MM-DD HH:MM)");
            return;
        };
        let category = form.category.trim().to_string();

        match form.editing {
            Some(id) => {
                store.update(Expense {
                    id,
                    category: category.clone(),
                    amount,
                    date,
                });
                self.set_status(format!("Updated: {category}"));
            }
            None => {
                store.add(category.clone(), amount, date);
                self.set_status(format!("Added: {category}"));
            }
        }

        self.form = None;
        self.input_mode = InputMode::Normal;
        self.refresh(store);
    }

    pub(crate) fn close_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn confirm(&mut self, message: impl Into<String>, action: PendingAction) {
        self.confirm_message = message.into();
        self.pending_action = Some(action);
        self.input_mode = InputMode::Confirm;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
