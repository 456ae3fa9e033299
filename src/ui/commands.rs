use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, PendingAction};
use super::util;
use crate::store::ExpenseStore;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut ExpenseStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add expense (e.g. :add Coffee 3.50), or open the form",
        cmd_add,
        r
    );
    register_command!("a", "Add expense (e.g. :a Coffee 3.50)", cmd_add, r);
    register_command!("edit", "Edit selected expense", cmd_edit, r);
    register_command!("e", "Edit selected expense", cmd_edit, r);
    register_command!("delete", "Delete selected expense", cmd_delete, r);
    register_command!("d", "Delete selected expense", cmd_delete, r);
    register_command!("delete-all", "Delete ALL expenses", cmd_delete_all, r);
    register_command!("reload", "Re-read expenses from disk", cmd_reload, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &mut ExpenseStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if args.is_empty() {
        app.open_add_form();
        return Ok(());
    }

    // Last token is the amount, everything before is the category
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_status("Usage: :add <category> <amount>");
        return Ok(());
    }

    let amount_str = parts[0];
    let category = parts[1].trim();

    let Some(amount) = util::parse_amount(amount_str) else {
        app.set_status(format!("Invalid amount: {amount_str}"));
        return Ok(());
    };

    store.add(category.to_string(), amount, chrono::Local::now());
    app.refresh(store);
    app.set_status(format!(
        "Added: {category} {}",
        util::format_amount(amount)
    ));
    Ok(())
}

fn cmd_edit(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    app.open_edit_form();
    Ok(())
}

fn cmd_delete(_args: &str, app: &mut App, _store: &mut ExpenseStore) -> anyhow::Result<()> {
    match app.selected() {
        Some(expense) => {
            let message = format!(
                "Delete '{}' ({})?",
                expense.category,
                util::format_amount(expense.amount)
            );
            let action = PendingAction::DeleteExpense {
                id: expense.id,
                category: expense.category.clone(),
            };
            app.confirm(message, action);
        }
        None => app.set_status("Nothing to delete"),
    }
    Ok(())
}

fn cmd_delete_all(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    if store.is_empty() {
        app.set_status("No expenses to delete");
        return Ok(());
    }
    app.confirm(
        format!(
            "Delete all {} expenses? This cannot be undone.",
            store.len()
        ),
        PendingAction::DeleteAll,
    );
    Ok(())
}

fn cmd_reload(_args: &str, app: &mut App, store: &mut ExpenseStore) -> anyhow::Result<()> {
    store.reload();
    app.refresh(store);
    app.set_status(format!("Reloaded {} expenses", store.len()));
    Ok(())
}
