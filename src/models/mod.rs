mod expense;

pub use expense::Expense;

#[cfg(test)]
mod tests;
