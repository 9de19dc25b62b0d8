use anyhow::{Context, Result};

use crate::controller::{format_amount, DisplaySnapshot, View, ViewController};
use crate::error::StoreResult;
use crate::models::Category;
use crate::store::BudgetStore;

/// Keeps whatever the controller pushed last so it can be printed once the
/// command is done.
#[derive(Default)]
struct Latest(DisplaySnapshot);

impl View for Latest {
    fn show(&mut self, snapshot: DisplaySnapshot) {
        self.0 = snapshot;
    }
}

pub(crate) fn as_cli(args: &[String], store: BudgetStore) -> Result<()> {
    let mut controller = ViewController::new(store, Latest::default());
    match args[1].as_str() {
        "summary" | "s" => {
            print_summary(&controller);
            Ok(())
        }
        "list" | "ls" => {
            print_list(&controller.view().0);
            Ok(())
        }
        "add" => cli_add(&args[2..], &mut controller),
        "edit" => cli_edit(&args[2..], &mut controller),
        "delete" | "rm" => cli_delete(&args[2..], &mut controller),
        "limit" => cli_limit(&args[2..], &mut controller),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("quickbudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("QuickBudget — personal expense tracker with a monthly budget");
    println!();
    println!("Usage: quickbudget [--file <path>] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                              Launch interactive TUI");
    println!("  summary                             Print total, budget and what is left");
    println!("  list                                List expenses, newest first");
    println!("  add <item> <amount> [category]      Record an expense (default category: Food)");
    println!("  edit <n> <item> <amount> [category] Change expense n (as numbered by list)");
    println!("  delete <n>                          Delete expense n");
    println!("  limit <amount>                      Set the budget (0 = no budget)");
    println!("  --help, -h                          Show this help");
    println!("  --version, -V                       Show version");
    println!();
    let names: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
    println!("Categories: {}", names.join(", "));
}

fn cli_add(args: &[String], controller: &mut ViewController<Latest>) -> Result<()> {
    let (item, amount, category) = split_expense_args(args)
        .context("Usage: quickbudget add <item> <amount> [category]")?;
    let result = controller.on_add(&item, amount, category);
    finish(result, controller)
}

fn cli_edit(args: &[String], controller: &mut ViewController<Latest>) -> Result<()> {
    let usage = "Usage: quickbudget edit <n> <item> <amount> [category]";
    let (first, rest) = args.split_first().context(usage)?;
    let index = parse_position(first)?;
    let (item, amount, category) = split_expense_args(rest).context(usage)?;
    if controller.on_edit_open(index).is_none() {
        anyhow::bail!("No expense #{first}");
    }
    let result = controller.on_edit_save(index, &item, amount, category);
    finish(result, controller)
}

fn cli_delete(args: &[String], controller: &mut ViewController<Latest>) -> Result<()> {
    let first = args.first().context("Usage: quickbudget delete <n>")?;
    let index = parse_position(first)?;
    let result = controller.on_delete(index);
    finish(result, controller)
}

fn cli_limit(args: &[String], controller: &mut ViewController<Latest>) -> Result<()> {
    let raw = args.first().context("Usage: quickbudget limit <amount>")?;
    let result = controller.on_set_limit(raw);
    finish(result, controller)
}

/// `<item words...> <amount> [category]`. The last word is taken as the
/// category only when it names one.
fn split_expense_args(args: &[String]) -> Result<(String, &str, &str)> {
    let (rest, category) = match args.split_last() {
        Some((last, rest)) if rest.len() >= 2 && Category::parse(last).is_some() => {
            (rest, last.as_str())
        }
        _ => (args, "Food"),
    };
    let (amount, item_words) = rest
        .split_last()
        .filter(|(_, words)| !words.is_empty())
        .ok_or_else(|| anyhow::anyhow!("expected an item name and an amount"))?;
    Ok((item_words.join(" "), amount.as_str(), category))
}

/// 1-based position as printed by `list`.
fn parse_position(raw: &str) -> Result<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => anyhow::bail!("'{raw}' is not an expense number"),
    }
}

fn finish(result: StoreResult<()>, controller: &ViewController<Latest>) -> Result<()> {
    match result {
        Ok(()) => {
            print_summary(controller);
            Ok(())
        }
        Err(e) if e.is_validation() => anyhow::bail!("{e}"),
        Err(e) => {
            print_summary(controller);
            Err(anyhow::Error::new(e).context("change was not saved"))
        }
    }
}

fn print_summary(controller: &ViewController<Latest>) {
    let snap = &controller.view().0;
    println!("QuickBudget — {}", controller.store().path().display());
    println!("{}", "─".repeat(40));
    println!("  Total Spent:  {}", format_amount(snap.total_spent));
    println!("  Budget:       {}", format_amount(snap.limit));
    if snap.is_over_budget {
        println!(
            "  Over Budget:  {}",
            format_amount(snap.remaining_or_overage.abs())
        );
    } else {
        println!("  Left:         {}", format_amount(snap.remaining_or_overage));
    }
    println!("  Progress:     {:.0}%", snap.progress_ratio * 100.0);
    println!("  Expenses:     {}", snap.expenses.len());
}

fn print_list(snap: &DisplaySnapshot) {
    if snap.expenses.is_empty() {
        println!("No expenses");
        return;
    }

    println!(
        "{:>3}  {:<6}  {:<13} {:>16}  Item",
        "#", "Date", "Category", "Amount"
    );
    println!("{}", "─".repeat(60));
    for row in &snap.expenses {
        println!(
            "{:>3}  {:<6}  {:<13} {:>16}  {}",
            row.index + 1,
            row.date,
            row.category.as_str(),
            row.amount_display,
            row.item
        );
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
