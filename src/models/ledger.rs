//! Session ledger
//!
//! A `Ledger` holds everything entered during one recording pass: the budget,
//! its income type, each expense and the amount put aside as saving. Every
//! step takes the current ledger and returns the next one, so the balance
//! invariant below holds for every value that exists:
//!
//! `remaining = budget - sum(expenses) - saving`

use serde::{Deserialize, Serialize};

use super::label::Label;
use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// A single expense entered during a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub amount: Money,
    pub expense_type: Label,
}

impl Expense {
    /// Create an expense, rejecting negative amounts
    pub fn new(amount: Money, expense_type: Label) -> BudgetResult<Self> {
        if amount.is_negative() {
            return Err(BudgetError::validation("Can not be negative value"));
        }
        Ok(Self {
            amount,
            expense_type,
        })
    }
}

/// Immutable record of one recording session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    budget: Money,
    income_type: Label,
    expenses: Vec<Expense>,
    saving: Money,
}

impl Ledger {
    /// Start a ledger for a non-negative budget
    pub fn new(budget: Money, income_type: Label) -> BudgetResult<Self> {
        if budget.is_negative() {
            return Err(BudgetError::validation("Budget cannot be negative."));
        }
        Ok(Self {
            budget,
            income_type,
            expenses: Vec::new(),
            saving: Money::zero(),
        })
    }

    /// Check that `amount` can be added as an expense
    ///
    /// Expenses may take the remaining budget below zero, but the totals must
    /// stay representable.
    pub fn check_expense(&self, amount: Money) -> BudgetResult<()> {
        self.total_expenses()
            .checked_add(amount)
            .and_then(|total| self.budget.checked_sub(total))
            .and_then(|left| left.checked_sub(self.saving))
            .map(|_| ())
            .ok_or_else(|| BudgetError::validation("Expenses total is too large."))
    }

    /// Return a ledger with one more expense recorded
    pub fn with_expense(mut self, expense: Expense) -> BudgetResult<Self> {
        self.check_expense(expense.amount)?;
        self.expenses.push(expense);
        Ok(self)
    }

    /// Return a ledger with `amount` moved from the remaining budget into saving
    pub fn with_saving(mut self, amount: Money) -> BudgetResult<Self> {
        if amount.is_negative() {
            return Err(BudgetError::validation("Can not be negative"));
        }
        let available = self.remaining();
        if amount > available {
            return Err(BudgetError::InsufficientFunds {
                needed: amount,
                available,
            });
        }
        self.saving += amount;
        Ok(self)
    }

    /// The budget the session started with
    pub fn budget(&self) -> Money {
        self.budget
    }

    pub fn income_type(&self) -> &Label {
        &self.income_type
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Cumulative amount saved in this session
    pub fn saving(&self) -> Money {
        self.saving
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget left after expenses, before any saving
    pub fn remaining_before_saving(&self) -> Money {
        self.budget - self.total_expenses()
    }

    /// Budget left after expenses and saving
    pub fn remaining(&self) -> Money {
        self.remaining_before_saving() - self.saving
    }

    /// Each expense paired with the budget left once it and every earlier
    /// expense are paid
    pub fn running_remaining(&self) -> impl Iterator<Item = (&Expense, Money)> + '_ {
        self.expenses.iter().scan(self.budget, |left, expense| {
            *left -= expense.amount;
            Some((expense, *left))
        })
    }
}
