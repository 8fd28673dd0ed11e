//! Input collector
//!
//! Gathers the budget, income type and expenses of one recording session.
//! Every answer is validated and re-asked until acceptable.

use std::io::{BufRead, Write};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Label, Ledger, Money};

use super::prompt::Prompter;
use super::savings::ask_for_savings;

/// Largest amount accepted at any prompt
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000_000);

/// Parse a non-negative amount no larger than [`MAX_AMOUNT`]
pub fn parse_amount(raw: &str, negative_message: &str) -> BudgetResult<Money> {
    let amount =
        Money::parse(raw).map_err(|_| BudgetError::validation("Please enter a valid number."))?;
    if amount.is_negative() {
        return Err(BudgetError::validation(negative_message));
    }
    if amount > MAX_AMOUNT {
        return Err(BudgetError::validation(format!(
            "Amount must not exceed {}.",
            MAX_AMOUNT.to_decimal_string()
        )));
    }
    Ok(amount)
}

/// Parse a non-negative whole number of expenses
pub fn parse_expense_count(raw: &str) -> BudgetResult<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        BudgetError::validation("Expenses number must be a non-negative whole number.")
    })
}

/// Ask for the session budget
pub fn collect_budget<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> BudgetResult<Money> {
    let budget = p.ask_until("Please enter your current budget: ", |raw| {
        parse_amount(raw, "Budget cannot be negative.")
    })?;
    p.say(format!("The budget you just entered is: {}", budget.to_decimal_string()))?;
    Ok(budget)
}

/// Ask for the income type
pub fn collect_income_type<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> BudgetResult<Label> {
    let income_type = p.ask_until("Please enter your income type: ", Label::income_type)?;
    p.say(format!("Your income type is: {}", income_type))?;
    Ok(income_type)
}

/// Ask whether to add expenses and, if so, collect them into `ledger`
pub fn collect_expenses<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    ledger: Ledger,
) -> BudgetResult<Ledger> {
    if !p.ask_yes_no("Would you like to add expenses? (y/n): ")? {
        p.say("Skipped adding expenses.")?;
        return Ok(ledger);
    }

    let count = p.ask_until(
        "How many expenses would you like to add?: ",
        parse_expense_count,
    )?;

    let mut ledger = ledger;
    for number in 1..=count {
        let amount = p.ask_until(&format!("Please enter expense {}: ", number), |raw| {
            let amount = parse_amount(raw, "Can not be negative value")?;
            ledger.check_expense(amount)?;
            Ok(amount)
        })?;
        let answer = p.ask(&format!("Please enter expense {} type here: ", number))?;
        let expense_type = Label::normalize(&answer);
        p.say(format!("Expenses type is : {}", expense_type))?;

        ledger = ledger.with_expense(Expense::new(amount, expense_type)?)?;
    }

    Ok(ledger)
}

/// Run the whole recording dialogue and return the finished ledger
pub fn record_session<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> BudgetResult<Ledger> {
    let budget = collect_budget(p)?;
    let income_type = collect_income_type(p)?;
    let ledger = Ledger::new(budget, income_type)?;
    let ledger = collect_expenses(p, ledger)?;
    ask_for_savings(p, ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::testing::{prompter, transcript};

    #[test]
    fn test_budget_reprompts_until_valid() {
        let mut p = prompter(&["abc", "-5", "1000"]);
        let budget = collect_budget(&mut p).unwrap();

        assert_eq!(budget, Money::from_cents(100000));
        let out = transcript(p);
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Budget cannot be negative."));
        assert!(out.contains("The budget you just entered is: 1000.00"));
    }

    #[test]
    fn test_amount_above_limit_reprompted() {
        let mut p = prompter(&["1000000000000.01", "99999999999999", "1000000000000"]);
        let budget = collect_budget(&mut p).unwrap();

        assert_eq!(budget, MAX_AMOUNT);
        let out = transcript(p);
        assert_eq!(
            out.matches("Amount must not exceed 1000000000000.00.").count(),
            2
        );
    }

    #[test]
    fn test_many_large_expenses_do_not_overflow() {
        let mut p = prompter(&[
            "y", "2", "1000000000000", "house", "1000000000000", "boat",
        ]);
        let ledger = Ledger::new(Money::zero(), Label::normalize("salary")).unwrap();
        let ledger = collect_expenses(&mut p, ledger).unwrap();

        assert_eq!(ledger.total_expenses(), Money::from_cents(200_000_000_000_000));
        assert_eq!(ledger.remaining(), Money::from_cents(-200_000_000_000_000));
    }

    #[test]
    fn test_income_type_normalized_and_bounded() {
        let too_long = "x".repeat(46);
        let mut p = prompter(&[too_long.as_str(), "  sALARY "]);
        let income_type = collect_income_type(&mut p).unwrap();

        assert_eq!(income_type.as_str(), "Salary");
        assert!(transcript(p).contains("Income type must be within 45 characters."));
    }

    #[test]
    fn test_skip_expenses() {
        let mut p = prompter(&["n"]);
        let ledger = Ledger::new(Money::from_cents(5000), Label::normalize("gift")).unwrap();
        let ledger = collect_expenses(&mut p, ledger).unwrap();

        assert!(ledger.expenses().is_empty());
        assert_eq!(ledger.remaining(), Money::from_cents(5000));
    }

    #[test]
    fn test_expenses_decrement_remaining() {
        let mut p = prompter(&["maybe", "y", "-2", "two", "2", "200", "RENT", "-1", "100", "food"]);
        let ledger = Ledger::new(Money::from_cents(100000), Label::normalize("salary")).unwrap();
        let ledger = collect_expenses(&mut p, ledger).unwrap();

        assert_eq!(ledger.expenses().len(), 2);
        assert_eq!(ledger.expenses()[0].expense_type.as_str(), "Rent");
        assert_eq!(ledger.expenses()[1].amount, Money::from_cents(10000));
        assert_eq!(ledger.remaining_before_saving(), Money::from_cents(70000));

        let out = transcript(p);
        assert!(out.contains("Please enter 'yes' or 'no'."));
        assert_eq!(
            out.matches("Expenses number must be a non-negative whole number.")
                .count(),
            2
        );
        assert!(out.contains("Can not be negative value"));
    }

    #[test]
    fn test_zero_expenses() {
        let mut p = prompter(&["y", "0"]);
        let ledger = Ledger::new(Money::from_cents(100), Label::default()).unwrap();
        let ledger = collect_expenses(&mut p, ledger).unwrap();
        assert!(ledger.expenses().is_empty());
    }

    #[test]
    fn test_record_session_example() {
        let mut p = prompter(&[
            "1000", "salary", "y", "2", "200", "rent", "100", "food", "no",
        ]);
        let ledger = record_session(&mut p).unwrap();

        assert_eq!(ledger.budget(), Money::from_cents(100000));
        assert_eq!(ledger.income_type().as_str(), "Salary");
        assert_eq!(ledger.remaining_before_saving(), Money::from_cents(70000));
        assert!(ledger.saving().is_zero());
    }

    #[test]
    fn test_record_session_stops_on_closed_input() {
        let mut p = prompter(&["1000"]);
        assert!(record_session(&mut p).unwrap_err().is_input_closed());
    }
}
