use anyhow::Result;
use std::str::FromStr;
use uuid::Uuid;

use crate::store::ExpenseStore;
use crate::ui::util::{format_amount, parse_amount, parse_date};

pub(crate) fn as_cli(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    match args[1].as_str() {
        "add" => cli_add(&args[2..], store),
        "list" | "ls" => cli_list(store),
        "total" => cli_total(store),
        "remove" | "rm" => cli_remove(&args[2..], store),
        "clear" => cli_clear(&args[2..], store),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expensetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ExpenseTUI — local-only expense tracker");
    println!();
    println!("Usage: expensetui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <category> <amount>       Add an expense dated now");
    println!("    --date <YYYY-MM-DD [HH:MM]> Set an explicit date");
    println!("  list                          List expenses, newest first");
    println!("  total                         Print the running total");
    println!("  remove <id>                   Remove one expense by id");
    println!("  clear --yes                   Remove ALL expenses (not reversible)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_add(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    // Parse --date flag, then treat the rest as <category...> <amount>
    let date = if let Some(w) = args.windows(2).find(|w| w[0] == "--date") {
        parse_date(&w[1]).ok_or_else(|| anyhow::anyhow!("Invalid date: {}", w[1]))?
    } else {
        chrono::Local::now()
    };

    let positional: Vec<&String> = {
        let mut skip_next = false;
        args.iter()
            .filter(|a| {
                if skip_next {
                    skip_next = false;
                    return false;
                }
                if a.as_str() == "--date" {
                    skip_next = true;
                    return false;
                }
                true
            })
            .collect()
    };

    if positional.len() < 2 {
        anyhow::bail!("Usage: expensetui add <category> <amount> [--date <YYYY-MM-DD [HH:MM]>]");
    }

    let amount_str = positional[positional.len() - 1];
    let amount = parse_amount(amount_str)
        .ok_or_else(|| anyhow::anyhow!("Invalid amount: {amount_str}"))?;
    let category = positional[..positional.len() - 1]
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let expense = store.add(category, amount, date);
    println!(
        "Added {} {} ({})",
        expense.category,
        format_amount(expense.amount),
        expense.id
    );
    println!("Total: {}", format_amount(store.total()));
    Ok(())
}

fn cli_list(store: &mut ExpenseStore) -> Result<()> {
    if store.is_empty() {
        println!("No expenses");
        return Ok(());
    }

    let mut rows = store.expenses().to_vec();
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    println!("{:<18} {:<30} {:>12}  Id", "Date", "Category", "Amount");
    println!("{}", "─".repeat(100));
    for expense in &rows {
        println!(
            "{:<18} {:<30} {:>12}  {}",
            expense.date.format("%Y-%m-%d %H:%M"),
            expense.category,
            format_amount(expense.amount),
            expense.id,
        );
    }
    println!("{}", "─".repeat(100));
    println!(
        "{} expenses, total {}",
        store.len(),
        format_amount(store.total())
    );
    Ok(())
}

fn cli_total(store: &mut ExpenseStore) -> Result<()> {
    println!("{}", format_amount(store.total()));
    Ok(())
}

fn cli_remove(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    let Some(id_str) = args.first() else {
        anyhow::bail!("Usage: expensetui remove <id>");
    };
    let id = Uuid::from_str(id_str).map_err(|_| anyhow::anyhow!("Invalid id: {id_str}"))?;

    let before = store.len();
    store.remove(&[id]);
    if store.len() < before {
        println!("Removed {id}");
    } else {
        println!("No expense with id {id}");
    }
    Ok(())
}

fn cli_clear(args: &[String], store: &mut ExpenseStore) -> Result<()> {
    if !args.iter().any(|a| a == "--yes") {
        println!(
            "This deletes all {} expenses and cannot be undone.",
            store.len()
        );
        println!("Re-run with --yes to confirm: expensetui clear --yes");
        return Ok(());
    }
    store.remove_all();
    println!("All expenses deleted");
    Ok(())
}
