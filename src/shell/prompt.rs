//! Input prompts for the interactive shell
//!
//! All validation retries live here: amounts re-prompt until a positive
//! value parses, dates fall back to today on blank or malformed input.
//! Every function returns `Ok(None)` on end of input.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::Money;

/// Print a prompt and read one trimmed line; `None` on EOF
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> ExpenseResult<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt for a positive amount, re-prompting until one parses
pub fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> ExpenseResult<Option<Money>> {
    loop {
        let line = match prompt_line(input, output, prompt)? {
            Some(line) => line,
            None => return Ok(None),
        };

        match Money::parse(&line) {
            Ok(amount) if amount.is_positive() => return Ok(Some(amount)),
            Ok(_) => writeln!(output, "Amount must be positive. Please try again.")?,
            Err(_) => writeln!(output, "Invalid amount. Please enter a number.")?,
        }
    }
}

/// Prompt for a date, falling back to today on blank or malformed input
pub fn prompt_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> ExpenseResult<Option<NaiveDate>> {
    let line = match prompt_line(input, output, prompt)? {
        Some(line) => line,
        None => return Ok(None),
    };

    if line.is_empty() {
        return Ok(Some(today()));
    }

    match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
        Ok(date) => Ok(Some(date)),
        Err(_) => {
            writeln!(output, "Invalid date format. Using today's date.")?;
            Ok(Some(today()))
        }
    }
}

/// Prompt for a 1-based position, returning the 0-based index
///
/// A non-numeric or out-of-range reply returns `Some(None)` so the caller
/// can report "Invalid selection." and carry on.
pub fn prompt_position<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    len: usize,
) -> ExpenseResult<Option<Option<usize>>> {
    let line = match prompt_line(input, output, prompt)? {
        Some(line) => line,
        None => return Ok(None),
    };

    let index = match line.parse::<usize>() {
        Ok(position) if (1..=len).contains(&position) => Some(position - 1),
        _ => None,
    };
    Ok(Some(index))
}

/// The current local date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
