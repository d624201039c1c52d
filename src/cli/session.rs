//! Interactive counting session
//!
//! Prompts for each denomination in display order and builds the drawer
//! from the answers. Bad answers count as zero, and so does a count that
//! would push the drawer past what an i64 of minor units can hold. Only
//! stream failures are errors.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::error::DrawerResult;
use crate::models::{parse_count, Denomination, Drawer, Money};

/// Prompt text for a denomination, e.g. "25c x :"
pub fn prompt_label(denomination: Denomination) -> String {
    format!("{} x :", denomination.label())
}

/// Write a prompt and read one line of input
///
/// End of input reads as an empty line. Bytes that are not valid UTF-8 are
/// replaced rather than failing the read.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> DrawerResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;

    let line = String::from_utf8_lossy(&line);
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// Run a full counting session and return the resulting drawer
pub fn run_session<R, W>(input: &mut R, output: &mut W) -> DrawerResult<Drawer>
where
    R: BufRead,
    W: Write,
{
    let mut counts = Vec::with_capacity(Denomination::ALL.len());
    let mut running = Money::zero();

    for denomination in Denomination::ALL {
        let answer = prompt_line(input, output, &prompt_label(denomination))?;
        let mut count = parse_count(&answer);

        match denomination
            .face_value()
            .checked_mul_count(count)
            .and_then(|amount| running.checked_add(amount))
        {
            Some(next) => running = next,
            None => {
                warn!(
                    denomination = denomination.id(),
                    count, "count too large for the drawer total, counting as 0"
                );
                count = 0;
            }
        }

        debug!(denomination = denomination.id(), count, "count entered");
        counts.push((denomination, count));
    }

    Drawer::from_counts(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_label() {
        assert_eq!(prompt_label(Denomination::Hundreds), "$100 x :");
        assert_eq!(prompt_label(Denomination::Quarters), "25c x :");
        assert_eq!(prompt_label(Denomination::Other), "other x :");
    }

    #[test]
    fn test_prompt_line() {
        let mut input = Cursor::new("42\r\nrest\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "$1 x :").unwrap();
        assert_eq!(line, "42");
        assert_eq!(String::from_utf8(output).unwrap(), "$1 x :");
    }

    #[test]
    fn test_prompt_line_at_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(prompt_line(&mut input, &mut output, "x").unwrap(), "");
    }

    #[test]
    fn test_run_session() {
        // hundreds, then blanks and junk, quarters = 3, other = 17
        let answers = "2\n\nabc\n-5\n12.5\n\n\n3\n\n\n\n17\n";
        let mut input = Cursor::new(answers);
        let mut output = Vec::new();

        let drawer = run_session(&mut input, &mut output).unwrap();
        assert_eq!(drawer.count(Denomination::Hundreds), 2);
        assert_eq!(drawer.count(Denomination::Twenties), 0);
        assert_eq!(drawer.count(Denomination::Tens), 0);
        assert_eq!(drawer.count(Denomination::Fives), 0);
        assert_eq!(drawer.count(Denomination::Quarters), 3);
        assert_eq!(drawer.amount(Denomination::Other).cents(), 17);
        assert_eq!(drawer.total().to_string(), "$200.92");

        let prompts = String::from_utf8(output).unwrap();
        let expected: String = Denomination::ALL.iter().map(|d| prompt_label(*d)).collect();
        assert_eq!(prompts, expected);
    }

    #[test]
    fn test_prompt_line_invalid_utf8() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'7', b'\n']);
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "x").unwrap();
        assert_eq!(parse_count(&line), 0);
    }

    #[test]
    fn test_run_session_oversized_counts_become_zero() {
        // hundreds overflows on its own; twenties fits alone but not on top of fifties
        let answers = "1000000000000000\n100000000000000\n4500000000000000\n1\n";
        let mut input = Cursor::new(answers);
        let mut output = Vec::new();

        let drawer = run_session(&mut input, &mut output).unwrap();
        assert_eq!(drawer.count(Denomination::Hundreds), 0);
        assert_eq!(drawer.count(Denomination::Fifties), 100_000_000_000_000);
        assert_eq!(drawer.count(Denomination::Twenties), 0);
        assert_eq!(drawer.count(Denomination::Tens), 1);
        assert_eq!(drawer.total().cents(), 500_000_000_000_001_000);
    }

    #[test]
    fn test_run_session_short_input() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();

        let drawer = run_session(&mut input, &mut output).unwrap();
        assert_eq!(drawer.total().cents(), 10000);
    }
}
