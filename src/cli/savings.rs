//! Savings prompt

use std::io::{BufRead, Write};

use crate::error::BudgetResult;
use crate::models::{Ledger, Money};

use super::collector::parse_amount;
use super::prompt::Prompter;

/// Ask whether to put money aside and move the accepted amount into saving
///
/// The amount is re-asked until it is non-negative and no larger than the
/// remaining budget. With nothing left to put aside the amount is not asked.
pub fn ask_for_savings<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    ledger: Ledger,
) -> BudgetResult<Ledger> {
    let wants_saving = p.ask_yes_no(
        "Would you like to add money into your saving account for this month? (yes / no): ",
    )?;

    if !wants_saving {
        p.say("No saving for this month. No problem, there is always tomorrow!")?;
        return Ok(ledger);
    }

    if ledger.remaining() <= Money::zero() {
        p.say("There is no remaining budget to put aside this month.")?;
        return Ok(ledger);
    }

    let ledger = p.ask_until("How much money would you like to put?: ", |raw| {
        let amount = parse_amount(raw, "Can not be negative")?;
        ledger.clone().with_saving(amount)
    })?;

    p.say(format!(
        "You have saved: {}",
        ledger.saving().to_decimal_string()
    ))?;
    Ok(ledger)
}
