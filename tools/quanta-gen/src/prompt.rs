//! Interactive prompts for values not given on the command line.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::CliError;

pub const LEVELS_PROMPT: &str = "Total MLFQ levels: ";
pub const START_PROMPT:  &str = "Initial Quanta: ";

/// Print `prompt`, read one line and parse it.
pub fn ask<T, R, W>(input: &mut R, output: &mut W, prompt: &'static str) -> Result<T, CliError>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::UnexpectedEof { prompt: prompt.trim_end() });
    }
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| CliError::InvalidInput {
        prompt: prompt.trim_end(),
        input:  trimmed.to_string(),
    })
}

/// Use the flag value if present, otherwise prompt.
pub fn value_or_ask<T, R, W>(
    value: Option<T>,
    input: &mut R,
    output: &mut W,
    prompt: &'static str,
) -> Result<T, CliError>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    match value {
        Some(v) => Ok(v),
        None => ask(input, output, prompt),
    }
}
